//! The bug-tracking lifecycle.
//!
//! A [`Bug`] starts in an explicit [`State`] and moves between states only
//! through its transition operations. Which moves are allowed is fixed by a
//! single static table, see [`table`].
//!
//! StartWork while already InProgress is accepted and ignored. Every pair
//! not in the table is an [`InvalidTransition`].

mod error;
mod lifecycle;
mod table;

pub use error::InvalidTransition;
pub use lifecycle::Bug;
pub use table::table;

use crate::{state_enum, trigger_enum};

state_enum! {
    /// Lifecycle stage of a bug.
    pub enum State {
        Created,
        InProgress,
        UnderReview,
        Postponed,
        Resolved,
        Reopened,
    }
}

trigger_enum! {
    /// Event fired by one of the [`Bug`] operations.
    pub enum Trigger {
        StartWork,
        Postpone,
        Complete,
        BeginReview,
        RestoreWork,
    }
}

impl Default for State {
    fn default() -> Self {
        Self::Created
    }
}
