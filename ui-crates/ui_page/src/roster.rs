//! The fixed character roster.

/// One crew member: name and role, displayed verbatim on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharacterEntry {
    pub name: &'static str,
    pub role: &'static str,
}

/// The three crew members, in display order.
pub static ROSTER: [CharacterEntry; 3] = [
    CharacterEntry {
        name: "Captain Aria Chen",
        role: "Mission Commander",
    },
    CharacterEntry {
        name: "Dr. Zephyr Kane",
        role: "Xenobiologist",
    },
    CharacterEntry {
        name: "Lex Novak",
        role: "AI Specialist",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_has_exactly_three_members() {
        assert_eq!(ROSTER.len(), 3);
    }

    #[test]
    fn test_roster_order_is_fixed() {
        assert_eq!(ROSTER[0].name, "Captain Aria Chen");
        assert_eq!(ROSTER[0].role, "Mission Commander");
        assert_eq!(ROSTER[1].name, "Dr. Zephyr Kane");
        assert_eq!(ROSTER[1].role, "Xenobiologist");
        assert_eq!(ROSTER[2].name, "Lex Novak");
        assert_eq!(ROSTER[2].role, "AI Specialist");
    }
}
