//! The fixed bug transition table.

use super::{State, Trigger};
use crate::core::TransitionTable;
use std::sync::LazyLock;

static TABLE: LazyLock<TransitionTable<State, Trigger>> = LazyLock::new(|| {
    TransitionTable::builder()
        .permit(State::Created, Trigger::StartWork, State::InProgress)
        .permit(State::InProgress, Trigger::Complete, State::Resolved)
        .permit(State::InProgress, Trigger::Postpone, State::Postponed)
        .permit(State::InProgress, Trigger::BeginReview, State::UnderReview)
        .ignore(State::InProgress, Trigger::StartWork)
        .permit(State::UnderReview, Trigger::Complete, State::Resolved)
        .permit(State::UnderReview, Trigger::RestoreWork, State::Reopened)
        .permit(State::Resolved, Trigger::StartWork, State::InProgress)
        .permit(State::Resolved, Trigger::RestoreWork, State::Reopened)
        .permit(State::Postponed, Trigger::StartWork, State::InProgress)
        .permit(State::Reopened, Trigger::StartWork, State::InProgress)
        .build()
});

/// The table every [`Bug`](super::Bug) is checked against.
///
/// Built on first use and shared read-only for the rest of the process.
///
/// ```rust
/// use bugflow::bug::{table, State, Trigger};
/// use bugflow::core::Outcome;
///
/// assert_eq!(
///     table().fire(&State::Postponed, &Trigger::StartWork),
///     Outcome::Next(State::InProgress)
/// );
/// ```
pub fn table() -> &'static TransitionTable<State, Trigger> {
    &TABLE
}
