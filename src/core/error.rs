//! Error types for caller-contract violations.
//!
//! An exhausted deck is not an error: drawing from it yields the special
//! card. Everything here points at a bug in the calling layer.

use std::path::PathBuf;

use thiserror::Error;

use super::player::PlayerId;
use crate::tasks::TaskId;

#[derive(Debug, Error)]
pub enum MissionError {
    #[error("task {0} is not part of this mission")]
    TaskNotFound(TaskId),
    #[error("task position {index} out of range ({len} tasks)")]
    PositionOutOfRange { index: usize, len: usize },
    #[error("a task needs at least one card, got {0}")]
    InvalidCardCount(usize),
    #[error("task {task} has no card at index {index}")]
    CardIndexOutOfRange { task: TaskId, index: usize },
    #[error("{0} is not in the player registry")]
    UnknownPlayer(PlayerId),
    #[error("{0} is not on the roster")]
    PlayerNotSelected(PlayerId),
    #[error("roster is full ({0} seats)")]
    RosterFull(usize),
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read player directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no players with extension `{extension}` found in {path}")]
    Empty { path: PathBuf, extension: String },
    #[error("player registry needs at least one player")]
    NoPlayers,
    #[error("too many players ({0}), registry holds at most 65535")]
    TooMany(usize),
}
