//! Synopsis: static heading, paragraph rising in.

use gpui::{prelude::*, *};
use ui_common::{Motion, v_flex};

use crate::copy;

pub fn synopsis() -> impl IntoElement {
    v_flex()
        .w_full()
        .max_w(px(1024.0))
        .mx_auto()
        .px_4()
        .pb_20()
        .child(
            div()
                .text_3xl()
                .font_weight(FontWeight::BOLD)
                .mb_4()
                .child(copy::SYNOPSIS_HEADING),
        )
        .child(Motion::rise().animate(
            "synopsis-body",
            div()
                .text_lg()
                .line_height(rems(1.6))
                .child(copy::SYNOPSIS_BODY),
        ))
}
