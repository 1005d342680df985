//! Call-to-action: same stagger as the hero, green button.

use gpui::{prelude::*, *};
use ui_common::{Motion, Palette, v_flex};

use crate::copy;
use crate::sections::pill_button;

pub fn call_to_action() -> impl IntoElement {
    let palette = Palette::nebula();
    v_flex()
        .w_full()
        .items_center()
        .py_20()
        .child(Motion::rise().animate(
            "cta-heading",
            div()
                .text_size(px(36.0))
                .font_weight(FontWeight::BOLD)
                .mb_4()
                .child(copy::CTA_HEADING),
        ))
        .child(Motion::rise().delayed_ms(200).animate(
            "cta-tagline",
            div().text_xl().mb_8().child(copy::CTA_TAGLINE),
        ))
        .child(Motion::rise().delayed_ms(400).animate(
            "cta-button",
            pill_button(
                "cta-button-hit",
                copy::CTA_BUTTON,
                palette.cta,
                palette.cta_hover,
                palette.button_text,
            ),
        ))
}
