//! Player identification.
//!
//! ## PlayerId
//!
//! Stable identifier of a selectable participant in the `PlayerRegistry`.
//! Assigned once when the registry is loaded and never reused.
//!
//! ## Seat
//!
//! Position of a selected player in the mission roster. Seats are 0-based
//! and always form the permutation `0..roster_len`; tasks are ordered by
//! the seat of their assignee.

use serde::{Deserialize, Serialize};

/// Registry identifier for a participant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u16);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw index into the registry.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}

/// Maximum number of seats at one table (`Seat` is a `u8`).
pub const MAX_SEATS: usize = u8::MAX as usize + 1;

/// Seat of a selected player, in selection order.
///
/// The first selected player sits at `Seat(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Seat(pub u8);

impl Seat {
    /// Create a new seat.
    #[must_use]
    pub const fn new(seat: u8) -> Self {
        Self(seat)
    }

    /// Get the raw 0-based seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats of a roster with `count` players.
    ///
    /// `count` is capped at [`MAX_SEATS`].
    ///
    /// ```
    /// use crew_tasks::core::Seat;
    ///
    /// let seats: Vec<_> = Seat::all(3).collect();
    /// assert_eq!(seats, vec![Seat(0), Seat(1), Seat(2)]);
    /// ```
    pub fn all(count: usize) -> impl Iterator<Item = Seat> {
        (0..count.min(MAX_SEATS)).map(|i| Seat(i as u8))
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}
