//! Tasks and their handles.

pub mod task;

pub use task::{Task, TaskCards, TaskId};
