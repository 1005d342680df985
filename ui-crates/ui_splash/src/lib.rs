//! Loading splash shown while the page boots.
//!
//! A full-viewport centered label pulsing 0 -> 1 -> 0 opacity on a two
//! second loop. Unmounted the instant the page leaves its loading stage.

use gpui::{IntoElement, ParentElement, Styled, div};
use ui_common::{Motion, Palette};

pub const SPLASH_LABEL: &str = "Initializing...";

pub fn splash_screen() -> impl IntoElement {
    let palette = Palette::nebula();
    div()
        .size_full()
        .flex()
        .items_center()
        .justify_center()
        .child(Motion::pulse().animate(
            "splash-pulse",
            div()
                .text_3xl()
                .text_color(palette.text)
                .child(SPLASH_LABEL),
        ))
}
