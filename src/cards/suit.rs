//! Card suits.

use serde::{Deserialize, Serialize};

/// Card suit, ordered by declaration.
///
/// Four ordinary suits make up the deck. `Special` marks the wildcard
/// card that is handed out once the deck runs dry, and always sorts last.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
    Special,
}

impl Suit {
    /// All suits, in order.
    pub const ALL: [Suit; 5] = [
        Suit::Spades,
        Suit::Hearts,
        Suit::Clubs,
        Suit::Diamonds,
        Suit::Special,
    ];

    /// Suits that appear in the deck.
    pub const ORDINARY: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

    /// Display glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Special => '★',
        }
    }

    /// Display colour as a `#rrggbb` hex string.
    #[must_use]
    pub const fn colour(self) -> &'static str {
        match self {
            Suit::Spades => "#568fc1",
            Suit::Hearts => "#995362",
            Suit::Clubs => "#77ac70",
            Suit::Diamonds => "#bf90dc",
            Suit::Special => "#ffeeb0",
        }
    }

    #[must_use]
    pub const fn is_special(self) -> bool {
        matches!(self, Suit::Special)
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
