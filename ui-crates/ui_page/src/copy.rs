//! All copy text on the page, compiled in.

pub const TITLE: &str = "NEBULA ODYSSEY";

pub const NAV_LABELS: [&str; 3] = ["Synopsis", "Characters", "Join the Mission"];

pub const HERO_TAGLINE: &str = "A journey beyond the stars awaits";
pub const HERO_BUTTON: &str = "Embark Now";

pub const SYNOPSIS_HEADING: &str = "Synopsis";
pub const SYNOPSIS_BODY: &str = "In the year 2185, humanity faces its greatest \
challenge yet. As Earth's resources dwindle, a team of elite explorers embarks \
on a perilous journey through an unstable wormhole. Their mission: to find a \
new home for humanity in a distant galaxy. But as they venture deeper into the \
unknown, they discover that they're not alone in the universe\u{2014}and not \
everything is as it seems.";

pub const CHARACTERS_HEADING: &str = "Characters";

pub const CTA_HEADING: &str = "Join the Mission";
pub const CTA_TAGLINE: &str = "Are you ready to explore the unknown?";
pub const CTA_BUTTON: &str = "Sign Up for Updates";

pub const FOOTER_LINE: &str =
    "\u{a9} 2185 Nebula Odyssey. All rights reserved across the galaxy.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_carries_the_title() {
        assert!(TITLE.contains("NEBULA ODYSSEY"));
    }

    #[test]
    fn test_footer_names_the_mission_year() {
        assert!(FOOTER_LINE.contains("2185 Nebula Odyssey"));
    }
}
