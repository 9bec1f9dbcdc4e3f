//! Card system: suits, ranks, cards and the deck.
//!
//! ## Key Types
//!
//! - `Suit`: four ordinary suits plus the special ★ suit
//! - `Rank`: 1-9
//! - `Card`: `(rank, suit)` with a `done` flag
//! - `Deck`: shuffled draw pile of the 36 ordinary cards

pub mod card;
pub mod deck;
pub mod rank;
pub mod suit;

pub use card::Card;
pub use deck::{Deck, DECK_SIZE};
pub use rank::Rank;
pub use suit::Suit;
