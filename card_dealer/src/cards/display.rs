//! Display names and colours for rendering dealt cards.
//!
//! Renderers receive hands as comma-joined `"<suit>-<rank>"` tokens. This
//! module maps those tokens to human readable labels:
//!
//! | Token | Label           |
//! |-------|-----------------|
//! | `S-A` | `Spade Ace`     |
//! | `H-X` | `Heart 10`      |
//! | `D-Q` | `Diamond Queen` |
//! | `C-7` | `Club 7`        |

use super::{
    entities::{Card, HAND_SEPARATOR, Rank, Suit},
    errors::CardParseError,
};

impl Suit {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Spade => "Spade",
            Self::Heart => "Heart",
            Self::Diamond => "Diamond",
            Self::Club => "Club",
        }
    }

    /// CSS colour used for the card text.
    pub fn color(self) -> &'static str {
        match self {
            Self::Heart => "#ef4444",
            Self::Diamond => "#000000",
            Self::Club => "#22c55e",
            Self::Spade => "#0ea5e9",
        }
    }
}

impl Rank {
    pub fn display_name(self) -> String {
        match self.value() {
            1 => "Ace".to_string(),
            11 => "Jack".to_string(),
            12 => "Queen".to_string(),
            13 => "King".to_string(),
            v => v.to_string(),
        }
    }
}

impl Card {
    /// Full label, e.g. `Spade Ace`.
    pub fn display_value(&self) -> String {
        format!("{} {}", self.suit.display_name(), self.rank.display_name())
    }
}

/// Parse a comma-joined hand string back into cards.
///
/// The empty string is an empty hand.
pub fn parse_hand(hand: &str) -> Result<Vec<Card>, CardParseError> {
    if hand.is_empty() {
        return Ok(Vec::new());
    }
    hand.split(HAND_SEPARATOR).map(str::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_values() {
        let cases = [
            ("S-A", "Spade Ace"),
            ("H-X", "Heart 10"),
            ("D-J", "Diamond Jack"),
            ("C-Q", "Club Queen"),
            ("S-K", "Spade King"),
            ("H-2", "Heart 2"),
            ("C-9", "Club 9"),
        ];
        for (token, label) in cases {
            let card: Card = token.parse().unwrap();
            assert_eq!(card.display_value(), label);
        }
    }

    #[test]
    fn test_suit_colors() {
        assert_eq!(Suit::Heart.color(), "#ef4444");
        assert_eq!(Suit::Diamond.color(), "#000000");
        assert_eq!(Suit::Club.color(), "#22c55e");
        assert_eq!(Suit::Spade.color(), "#0ea5e9");
    }

    #[test]
    fn test_parse_hand() {
        let cards = parse_hand("S-A,H-X,C-3").unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[1].display_value(), "Heart 10");

        assert!(parse_hand("").unwrap().is_empty());
        assert!(parse_hand("S-A,,H-2").is_err());
    }
}
