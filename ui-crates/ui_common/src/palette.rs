//! Fixed dark palette for the promotional page.

use gpui::{Rgba, rgb};

/// Color set shared by every view. The page has no theming or runtime
/// configuration; this is a single hard-coded scheme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Page background.
    pub page_bg: Rgba,
    /// Body text.
    pub text: Rgba,
    /// Header and footer bar background.
    pub panel_bg: Rgba,
    /// Character card background.
    pub card_bg: Rgba,
    /// Character card background while hovered.
    pub card_hover_bg: Rgba,
    /// Primary action button.
    pub accent: Rgba,
    pub accent_hover: Rgba,
    /// Call-to-action button.
    pub cta: Rgba,
    pub cta_hover: Rgba,
    /// Text on filled buttons.
    pub button_text: Rgba,
    /// Nav link text while hovered.
    pub link_hover: Rgba,
}

impl Palette {
    pub fn nebula() -> Self {
        Self {
            page_bg: rgb(0x000000),
            text: rgb(0x93c5fd),
            panel_bg: rgb(0x111827),
            card_bg: rgb(0x1f2937),
            card_hover_bg: rgb(0x374151),
            accent: rgb(0x3b82f6),
            accent_hover: rgb(0x2563eb),
            cta: rgb(0x22c55e),
            cta_hover: rgb(0x16a34a),
            button_text: rgb(0xffffff),
            link_hover: rgb(0x3b82f6),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_is_dark_on_light_text() {
        let palette = Palette::nebula();
        assert_eq!(palette.page_bg, rgb(0x000000));
        assert_eq!(palette.text, rgb(0x93c5fd));
    }

    #[test]
    fn test_hover_variants_differ_from_rest_state() {
        let palette = Palette::nebula();
        assert_ne!(palette.accent, palette.accent_hover);
        assert_ne!(palette.cta, palette.cta_hover);
        assert_ne!(palette.card_bg, palette.card_hover_bg);
    }
}
