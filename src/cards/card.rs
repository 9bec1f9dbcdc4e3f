//! A single playing card.
//!
//! ## Identity vs. progress
//!
//! A card is identified by `(suit, rank)`. The `done` flag is progress
//! tracked by the players and takes no part in equality, ordering or
//! hashing: a finished ♥3 is still ♥3.
//!
//! ## Ordering
//!
//! Cards group by suit (♠ < ♥ < ♣ < ♦ < ★), then by ascending rank.
//! Special cards all compare equal to each other regardless of rank.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::rank::Rank;
use super::suit::Suit;

/// A card plus its completion flag.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
    /// Has this card's condition been met?
    #[serde(default)]
    pub done: bool,
}

impl Card {
    /// Create a card that is not yet done.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            done: false,
        }
    }

    /// The special (★) card. Its rank is conventionally nine.
    #[must_use]
    pub const fn special() -> Self {
        Self::new(Rank::Nine, Suit::Special)
    }

    #[must_use]
    pub const fn is_special(&self) -> bool {
        self.suit.is_special()
    }

    /// Flip the done flag, returning the new value.
    pub fn toggle_done(&mut self) -> bool {
        self.done = !self.done;
        self.done
    }

    /// Rank used for comparisons; special cards have none.
    fn rank_key(&self) -> Option<Rank> {
        if self.is_special() {
            None
        } else {
            Some(self.rank)
        }
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Card {}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.suit
            .cmp(&other.suit)
            .then_with(|| self.rank_key().cmp(&other.rank_key()))
    }
}

impl Hash for Card {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.suit.hash(hasher);
        self.rank_key().hash(hasher);
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_special() {
            write!(f, "{}X", self.suit.glyph())
        } else {
            write!(f, "{}{}", self.suit.glyph(), self.rank.value())
        }
    }
}
