//! Footer: static copyright line, no animation.

use gpui::{prelude::*, *};
use ui_common::Palette;

use crate::copy;

pub fn footer() -> impl IntoElement {
    let palette = Palette::nebula();
    div()
        .w_full()
        .bg(palette.panel_bg)
        .p_4()
        .flex()
        .justify_center()
        .child(copy::FOOTER_LINE)
}
