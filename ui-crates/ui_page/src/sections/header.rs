//! Top bar: title and nav, both dropping in from above.

use gpui::{prelude::*, *};
use ui_common::{Motion, Palette, h_flex};

use crate::copy;

pub fn header() -> impl IntoElement {
    let palette = Palette::nebula();
    div().w_full().bg(palette.panel_bg).p_4().child(
        h_flex()
            .w_full()
            .max_w(px(1024.0))
            .mx_auto()
            .justify_between()
            .child(Motion::drop().animate(
                "header-title",
                div()
                    .text_2xl()
                    .font_weight(FontWeight::BOLD)
                    .child(copy::TITLE),
            ))
            .child(Motion::drop().delayed_ms(200).animate(
                "header-nav",
                h_flex()
                    .gap_4()
                    .children(copy::NAV_LABELS.into_iter().map(nav_link)),
            )),
    )
}

/// Hover-accented label; there is no routing, so nothing is wired to click.
fn nav_link(label: &'static str) -> impl IntoElement {
    let palette = Palette::nebula();
    div()
        .id(label)
        .cursor_pointer()
        .hover(move |s| s.text_color(palette.link_hover))
        .child(label)
}
