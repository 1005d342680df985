//! Hero banner: headline, tagline, and the primary button rising in a
//! 0 / 0.2 / 0.4 second stagger.

use gpui::{prelude::*, *};
use ui_common::{Motion, Palette, v_flex};

use crate::copy;
use crate::sections::pill_button;

pub fn hero() -> impl IntoElement {
    let palette = Palette::nebula();
    v_flex()
        .w_full()
        .items_center()
        .py_20()
        .child(Motion::rise().animate(
            "hero-headline",
            div()
                .text_size(px(60.0))
                .font_weight(FontWeight::BOLD)
                .mb_4()
                .child(copy::TITLE),
        ))
        .child(Motion::rise().delayed_ms(200).animate(
            "hero-tagline",
            div().text_xl().mb_8().child(copy::HERO_TAGLINE),
        ))
        .child(Motion::rise().delayed_ms(400).animate(
            "hero-button",
            pill_button(
                "hero-button-hit",
                copy::HERO_BUTTON,
                palette.accent,
                palette.accent_hover,
                palette.button_text,
            ),
        ))
}
