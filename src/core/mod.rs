//! Core types: identifiers, RNG, configuration, errors.
//!
//! Everything the card, task and mission modules build on.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::MissionConfig;
pub use error::{MissionError, RegistryError};
pub use player::{PlayerId, Seat, MAX_SEATS};
pub use rng::GameRng;
