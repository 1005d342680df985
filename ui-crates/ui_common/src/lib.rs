//! Shared presentation support for the Nebula Odyssey views.
//!
//! Layout helpers, the page palette, and the declarative `Motion`
//! animation config that every animated element is built from.

use gpui::{Div, Styled, div};

pub mod motion;
pub mod palette;

pub use motion::Motion;
pub use palette::Palette;

/// Vertical flex container.
pub fn v_flex() -> Div {
    div().flex().flex_col()
}

/// Horizontal flex container with centered items.
pub fn h_flex() -> Div {
    div().flex().flex_row().items_center()
}
