//! The roster: players selected for a mission, in seat order.
//!
//! A player's seat is its position in the roster, so seats are always the
//! permutation `0..len` in selection order. Removing a player moves
//! everyone after it one seat down.

use serde::{Deserialize, Serialize};

use crate::core::error::MissionError;
pub use crate::core::player::MAX_SEATS;
use crate::core::player::{PlayerId, Seat};

/// Selected players in seat order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<PlayerId>,
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat a player at the end of the table.
    ///
    /// Selecting a player that is already seated returns its current seat.
    pub fn select(&mut self, player: PlayerId) -> Result<Seat, MissionError> {
        if let Some(seat) = self.seat_of(player) {
            return Ok(seat);
        }
        if self.players.len() >= MAX_SEATS {
            return Err(MissionError::RosterFull(MAX_SEATS));
        }
        self.players.push(player);
        Ok(Seat::new((self.players.len() - 1) as u8))
    }

    /// Remove a player, returning the seat it held.
    pub fn deselect(&mut self, player: PlayerId) -> Result<Seat, MissionError> {
        let seat = self
            .seat_of(player)
            .ok_or(MissionError::PlayerNotSelected(player))?;
        self.players.remove(seat.index());
        Ok(seat)
    }

    #[must_use]
    pub fn seat_of(&self, player: PlayerId) -> Option<Seat> {
        self.players
            .iter()
            .position(|&p| p == player)
            .map(|i| Seat::new(i as u8))
    }

    #[must_use]
    pub fn player_at(&self, seat: Seat) -> Option<PlayerId> {
        self.players.get(seat.index()).copied()
    }

    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.players.contains(&player)
    }

    /// Next assignee when cycling: unassigned, then every seat in order,
    /// then back to unassigned.
    #[must_use]
    pub fn next_assignee(&self, current: Option<Seat>) -> Option<Seat> {
        let next = current.map_or(0, |seat| seat.index() + 1);
        (next < self.players.len()).then(|| Seat::new(next as u8))
    }

    /// Players in seat order.
    #[must_use]
    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    /// Iterate over `(Seat, PlayerId)` pairs.
    pub fn seats(&self) -> impl Iterator<Item = (Seat, PlayerId)> + '_ {
        self.players
            .iter()
            .enumerate()
            .map(|(i, &p)| (Seat::new(i as u8), p))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
