//! The mission: roster, deck and task list for one play session.
//!
//! `Mission` is the only place that mutates game state. The presentation
//! layer reads `roster()`, `deck()` and `tasks()` to render and calls the
//! operations below in response to clicks.
//!
//! ## Lifecycle
//!
//! ```
//! use crew_tasks::core::MissionConfig;
//! use crew_tasks::mission::Mission;
//!
//! let mut mission = Mission::new(MissionConfig::new().with_seed(42));
//!
//! let single = mission.add_task(1).unwrap();
//! let double = mission.add_task(2).unwrap();
//! mission.add_special_task();
//!
//! assert_eq!(mission.deck().len(), 33);
//! mission.swap_tasks(single, double).unwrap();
//! assert_eq!(mission.tasks()[0].id(), double);
//!
//! mission.reset();
//! assert!(mission.tasks().is_empty());
//! assert_eq!(mission.deck().len(), 36);
//! ```

mod state;

pub use state::Mission;
