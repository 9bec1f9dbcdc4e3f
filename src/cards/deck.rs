//! The draw pile.
//!
//! A full deck holds the 36 ordinary cards (nine ranks in each of the four
//! ordinary suits), shuffled. Cards are drawn from the top. Drawing from an
//! empty deck is a normal situation in the game and yields a fresh special
//! card while the deck stays empty.

use tracing::debug;

use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use crate::core::rng::GameRng;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = Rank::ALL.len() * Suit::ORDINARY.len();

/// Shuffled, exhaustible supply of ordinary cards.
///
/// ```
/// use crew_tasks::cards::{Deck, DECK_SIZE};
/// use crew_tasks::core::GameRng;
///
/// let mut deck = Deck::new(GameRng::new(42));
/// assert_eq!(deck.len(), DECK_SIZE);
///
/// for _ in 0..DECK_SIZE {
///     assert!(!deck.pop().is_special());
/// }
/// assert!(deck.pop().is_special());
/// assert!(deck.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    /// Index 0 is the bottom, the last card is the top.
    cards: Vec<Card>,
    rng: GameRng,
}

impl Deck {
    /// Create a full, shuffled deck.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            rng,
        };
        deck.reset();
        deck
    }

    /// Refill with all ordinary cards and shuffle.
    pub fn reset(&mut self) {
        self.cards.clear();
        for rank in Rank::ALL {
            for suit in Suit::ORDINARY {
                self.cards.push(Card::new(rank, suit));
            }
        }
        self.rng.shuffle(&mut self.cards);
        debug!(cards = self.cards.len(), seed = self.rng.seed(), "deck reset");
    }

    /// Draw the top card, or a new special card if the deck is empty.
    pub fn pop(&mut self) -> Card {
        self.cards.pop().unwrap_or_else(|| {
            debug!("deck exhausted, drawing special card");
            Card::special()
        })
    }

    /// Number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The RNG driving the shuffles.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }
}
