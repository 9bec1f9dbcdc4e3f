//! Players: the global registry and the per-mission roster.
//!
//! ## Key Types
//!
//! - `PlayerRegistry`: every selectable player, loaded once at startup
//! - `PlayerProfile`: name and portrait of one player
//! - `Roster`: players selected for the current mission, in seat order
//!
//! Tasks never reference a player directly. They hold an optional `Seat`,
//! and `None` means nobody has taken the task yet.

pub mod registry;
pub mod roster;

pub use registry::{PlayerProfile, PlayerRegistry};
pub use roster::{Roster, MAX_SEATS};
