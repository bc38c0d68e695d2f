//! Generic state machine building blocks.
//!
//! This module contains the pure core shared by every lifecycle:
//! - States and triggers via the `State` and `Trigger` traits
//! - Static transition tables and their lookup outcomes
//! - Immutable history tracking
//!
//! Nothing in this module performs I/O or logging.

mod history;
mod macros;
mod state;
mod table;
mod trigger;

pub use history::{StateHistory, StateTransition};
pub use state::State;
pub use table::{Outcome, TableBuilder, TableEntry, TransitionTable};
pub use trigger::Trigger;
