//! Tasks: groups of cards that one player must win.
//!
//! A task's cards are fixed when it is created and kept sorted. Only the
//! assignee and each card's `done` flag change afterwards.
//!
//! ## Ordering
//!
//! Tasks order by assignee seat, with unassigned tasks after every seated
//! player, then lexicographically by their sorted cards. The `TaskId` is a
//! handle, not part of the value: two tasks with the same assignee and
//! cards compare equal.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::player::Seat;

/// Handle of a task within its mission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u32);

impl TaskId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

/// Cards of a task. Tasks rarely hold more than two.
pub type TaskCards = SmallVec<[Card; 2]>;

/// A sorted group of cards and the seat responsible for them.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "TaskData")]
pub struct Task {
    id: TaskId,
    cards: TaskCards,
    /// Seat that took this task. `None` until someone does.
    pub assignee: Option<Seat>,
}

impl Task {
    /// Create an unassigned task. Cards are sorted (stable).
    ///
    /// ```
    /// use crew_tasks::cards::{Card, Rank, Suit};
    /// use crew_tasks::tasks::{Task, TaskId};
    ///
    /// let task = Task::new(
    ///     TaskId::new(0),
    ///     [Card::special(), Card::new(Rank::Two, Suit::Clubs)],
    /// );
    /// assert_eq!(task.to_string(), "♣2 ★X");
    /// assert_eq!(task.assignee, None);
    /// ```
    pub fn new(id: TaskId, cards: impl IntoIterator<Item = Card>) -> Self {
        let mut cards: TaskCards = cards.into_iter().collect();
        cards.sort();
        Self {
            id,
            cards,
            assignee: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Cards in ascending order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Flip the done flag of the card at `index`.
    ///
    /// Returns the new flag, or `None` if the task has no such card.
    pub fn toggle_card_done(&mut self, index: usize) -> Option<bool> {
        self.cards.get_mut(index).map(Card::toggle_done)
    }

    /// Are all cards of this task done?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.iter().all(|c| c.done)
    }

    #[must_use]
    pub fn is_special(&self) -> bool {
        self.cards.iter().any(Card::is_special)
    }
}

/// Wire form of a task. Deserializing goes through `Task::new` so the
/// cards come back sorted.
#[derive(Deserialize)]
struct TaskData {
    id: TaskId,
    cards: TaskCards,
    #[serde(default)]
    assignee: Option<Seat>,
}

impl From<TaskData> for Task {
    fn from(data: TaskData) -> Self {
        let mut task = Task::new(data.id, data.cards);
        task.assignee = data.assignee;
        task
    }
}

/// Seated assignees first, unassigned last.
fn cmp_assignee(a: Option<Seat>, b: Option<Seat>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Task {}

impl PartialOrd for Task {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Task {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_assignee(self.assignee, other.assignee).then_with(|| self.cards.cmp(&other.cards))
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for card in &self.cards {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
            first = false;
        }
        Ok(())
    }
}
