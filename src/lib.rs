//! # crew-tasks
//!
//! Game-state core for a companion app to a cooperative trick-taking game:
//! the deck, the tasks dealt from it, and who is responsible for each task.
//!
//! ## Design Principles
//!
//! 1. **One mutation boundary**: `Mission` owns the roster, deck and tasks.
//!    The presentation layer reads them and calls `Mission` methods.
//!
//! 2. **Exhaustion is not an error**: drawing from an empty deck yields the
//!    special ★ card.
//!
//! 3. **Handles, not values**: tasks are addressed by `TaskId`, so two tasks
//!    with identical cards are never confused.
//!
//! ## Modules
//!
//! - `core`: IDs, seats, RNG, configuration, errors
//! - `cards`: Suits, ranks, cards, deck
//! - `players`: Player registry and mission roster
//! - `tasks`: Tasks and their ordering
//! - `mission`: The aggregate tying it all together

pub mod core;
pub mod cards;
pub mod players;
pub mod tasks;
pub mod mission;

// Re-export commonly used types
pub use crate::core::{
    GameRng, MissionConfig, MissionError, PlayerId, RegistryError, Seat, MAX_SEATS,
};

pub use crate::cards::{Card, Deck, Rank, Suit, DECK_SIZE};

pub use crate::players::{PlayerProfile, PlayerRegistry, Roster};

pub use crate::tasks::{Task, TaskId};

pub use crate::mission::Mission;
