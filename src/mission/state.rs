//! Mission state and operations.

use tracing::{debug, info};

use crate::cards::{Card, Deck};
use crate::core::config::MissionConfig;
use crate::core::error::MissionError;
use crate::core::player::{PlayerId, Seat};
use crate::players::{PlayerRegistry, Roster};
use crate::tasks::{Task, TaskId};

/// Aggregate root of the game state.
///
/// Not thread-safe by intent: one UI event loop owns it and every call
/// runs to completion before the next.
#[derive(Clone, Debug)]
pub struct Mission {
    config: MissionConfig,
    roster: Roster,
    deck: Deck,
    tasks: Vec<Task>,
    next_task_id: u32,
}

impl Mission {
    /// Create a mission with an empty roster, a full shuffled deck and no tasks.
    #[must_use]
    pub fn new(config: MissionConfig) -> Self {
        let deck = Deck::new(config.rng());
        info!(seed = deck.rng().seed(), "new mission");
        Self {
            config,
            roster: Roster::new(),
            deck,
            tasks: Vec::new(),
            next_task_id: 0,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &MissionConfig {
        &self.config
    }

    /// Seed of the deck RNG; replaying it reproduces every shuffle.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.deck.rng().seed()
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    /// Mutable access to a task, e.g. to set its assignee directly.
    pub fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id() == id)
    }

    /// Current position of a task in the list.
    #[must_use]
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id() == id)
    }

    /// Player responsible for a task, if any.
    pub fn assignee_player(&self, id: TaskId) -> Result<Option<PlayerId>, MissionError> {
        let task = self.task(id).ok_or(MissionError::TaskNotFound(id))?;
        Ok(task.assignee.and_then(|seat| self.roster.player_at(seat)))
    }

    /// Are there tasks, and are all of their cards done?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.tasks.is_empty() && self.tasks.iter().all(Task::is_complete)
    }

    // === Game flow ===

    /// Refill and reshuffle the deck and drop every task. The roster stays.
    pub fn reset(&mut self) {
        self.deck.reset();
        self.tasks.clear();
        info!(players = self.roster.len(), "mission reset");
    }

    /// Draw `n_cards` cards and append them as a new task.
    ///
    /// Draws past the end of the deck each yield a special card.
    pub fn add_task(&mut self, n_cards: usize) -> Result<TaskId, MissionError> {
        if n_cards == 0 {
            return Err(MissionError::InvalidCardCount(n_cards));
        }
        let cards: Vec<Card> = (0..n_cards).map(|_| self.deck.pop()).collect();
        Ok(self.push_task(cards))
    }

    /// Append a task holding a single special card.
    pub fn add_special_task(&mut self) -> TaskId {
        self.push_task([Card::special()])
    }

    fn push_task(&mut self, cards: impl IntoIterator<Item = Card>) -> TaskId {
        let id = self.alloc_task_id();
        let task = Task::new(id, cards);
        debug!(%id, cards = %task, remaining = self.deck.len(), "task added");
        self.tasks.push(task);
        id
    }

    /// Next free task handle. Wraps around, skipping handles still in use.
    fn alloc_task_id(&mut self) -> TaskId {
        loop {
            let id = TaskId::new(self.next_task_id);
            self.next_task_id = self.next_task_id.wrapping_add(1);
            if self.position(id).is_none() {
                return id;
            }
        }
    }

    /// Exchange the positions of two tasks. Swapping a task with itself
    /// does nothing.
    pub fn swap_tasks(&mut self, a: TaskId, b: TaskId) -> Result<(), MissionError> {
        let i = self.position(a).ok_or(MissionError::TaskNotFound(a))?;
        let j = self.position(b).ok_or(MissionError::TaskNotFound(b))?;
        self.tasks.swap(i, j);
        debug!(%a, %b, from = i, to = j, "tasks swapped");
        Ok(())
    }

    /// Exchange the tasks at two positions.
    pub fn swap_positions(&mut self, i: usize, j: usize) -> Result<(), MissionError> {
        let len = self.tasks.len();
        for index in [i, j] {
            if index >= len {
                return Err(MissionError::PositionOutOfRange { index, len });
            }
        }
        self.tasks.swap(i, j);
        debug!(from = i, to = j, "task positions swapped");
        Ok(())
    }

    /// Sort tasks by assignee seat, then cards. Stable.
    pub fn sort_tasks(&mut self) {
        self.tasks.sort();
    }

    /// Hand a task to the next seat: unassigned, seat 0, seat 1, ..., unassigned.
    pub fn cycle_assignee(&mut self, id: TaskId) -> Result<Option<Seat>, MissionError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or(MissionError::TaskNotFound(id))?;
        task.assignee = self.roster.next_assignee(task.assignee);
        debug!(%id, assignee = ?task.assignee, "assignee cycled");
        Ok(task.assignee)
    }

    /// Flip the done flag of one card of a task, returning the new flag.
    pub fn toggle_card_done(&mut self, id: TaskId, index: usize) -> Result<bool, MissionError> {
        let task = self.task_mut(id).ok_or(MissionError::TaskNotFound(id))?;
        let done = task
            .toggle_card_done(index)
            .ok_or(MissionError::CardIndexOutOfRange { task: id, index })?;
        debug!(%id, index, done, "card toggled");
        Ok(done)
    }

    // === Roster ===

    /// Seat a registered player at the end of the table.
    pub fn select_player(
        &mut self,
        registry: &PlayerRegistry,
        player: PlayerId,
    ) -> Result<Seat, MissionError> {
        if !registry.contains(player) {
            return Err(MissionError::UnknownPlayer(player));
        }
        let seat = self.roster.select(player)?;
        info!(%player, %seat, "player selected");
        Ok(seat)
    }

    /// Remove a player from the table.
    ///
    /// Tasks held by that seat become unassigned, and tasks of later seats
    /// follow their players one seat down.
    pub fn deselect_player(&mut self, player: PlayerId) -> Result<Seat, MissionError> {
        let freed = self.roster.deselect(player)?;
        for task in &mut self.tasks {
            task.assignee = match task.assignee {
                Some(seat) if seat == freed => None,
                Some(seat) if seat > freed => Some(Seat::new(seat.0 - 1)),
                other => other,
            };
        }
        info!(%player, seat = %freed, "player deselected");
        Ok(freed)
    }

    /// Select the player if absent, deselect it otherwise.
    ///
    /// Returns the new seat, or `None` if the player left the table.
    pub fn toggle_player(
        &mut self,
        registry: &PlayerRegistry,
        player: PlayerId,
    ) -> Result<Option<Seat>, MissionError> {
        if self.roster.contains(player) {
            self.deselect_player(player)?;
            Ok(None)
        } else {
            self.select_player(registry, player).map(Some)
        }
    }
}
