//! Bugflow: a table-driven state machine for the bug-tracking lifecycle
//!
//! A bug moves between six states through five named triggers. Which moves
//! are allowed is decided by a single static transition table; anything the
//! table does not list is rejected with an error and leaves the bug as it
//! was.
//!
//! # Core Concepts
//!
//! - **State / Trigger**: fieldless enums implementing the `core` traits
//! - **Transition table**: immutable `(state, trigger) -> outcome` mapping
//! - **Outcome**: move to a new state, ignore the trigger, or reject it
//! - **History**: optional immutable record of accepted firings
//!
//! # Example
//!
//! ```rust
//! use bugflow::bug::{Bug, State};
//! use bugflow::core::StateHistory;
//!
//! let mut bug = Bug::new(State::Created);
//! let mut history = StateHistory::new();
//!
//! history = history.record(bug.start_work()?);
//! history = history.record(bug.postpone()?);
//! history = history.record(bug.start_work()?);
//!
//! assert_eq!(bug.state(), State::InProgress);
//! assert_eq!(history.transitions().len(), 3);
//!
//! // Completing is not possible straight from Created.
//! let mut fresh = Bug::new(State::Created);
//! assert!(fresh.complete().is_err());
//! # Ok::<(), bugflow::bug::InvalidTransition>(())
//! ```

pub mod bug;
pub mod core;

// Re-export commonly used types
pub use bug::{Bug, InvalidTransition};
pub use crate::core::{Outcome, StateHistory, StateTransition, TransitionTable};
