//! The content sections, rendered in a fixed order.

use gpui::{prelude::*, *};

mod characters;
mod cta;
mod footer;
mod header;
mod hero;
mod synopsis;

pub use footer::footer;

/// Identity of a main content section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Header,
    Hero,
    Synopsis,
    Characters,
    CallToAction,
}

impl Section {
    /// Render order of the content view; the footer follows separately.
    pub const ORDER: [Section; 5] = [
        Section::Header,
        Section::Hero,
        Section::Synopsis,
        Section::Characters,
        Section::CallToAction,
    ];
}

pub fn render_section(section: Section, window: &Window) -> AnyElement {
    match section {
        Section::Header => header::header().into_any_element(),
        Section::Hero => hero::hero().into_any_element(),
        Section::Synopsis => synopsis::synopsis().into_any_element(),
        Section::Characters => characters::characters(window).into_any_element(),
        Section::CallToAction => cta::call_to_action().into_any_element(),
    }
}

/// Rounded, filled button. Decorative: hover and press restyle it, but no
/// click handler is attached.
fn pill_button(
    id: impl Into<ElementId>,
    label: &'static str,
    bg: Rgba,
    hover_bg: Rgba,
    text: Rgba,
) -> impl IntoElement {
    div()
        .id(id)
        .px_6()
        .py_2()
        .rounded_full()
        .bg(bg)
        .text_color(text)
        .cursor_pointer()
        .hover(move |s| s.bg(hover_bg))
        .active(|s| s.opacity(0.85))
        .child(label)
}

#[cfg(test)]
mod tests {
    use super::Section;

    #[test]
    fn test_sections_render_in_fixed_order() {
        assert_eq!(
            Section::ORDER,
            [
                Section::Header,
                Section::Hero,
                Section::Synopsis,
                Section::Characters,
                Section::CallToAction,
            ]
        );
    }
}
