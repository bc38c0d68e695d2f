//! Transition records and history tracking.
//!
//! Every accepted firing produces a [`StateTransition`]. Callers that want an
//! audit trail collect them into a [`StateHistory`], which is immutable:
//! recording returns a new history and leaves the old one untouched.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single accepted firing.
///
/// An ignored firing is still recorded; its `from` and `to` are equal.
///
/// # Example
///
/// ```rust
/// use bugflow::bug::State;
/// use bugflow::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: State::Created,
///     to: State::InProgress,
///     trigger: "StartWork".to_string(),
///     timestamp: Utc::now(),
/// };
///
/// assert!(transition.changed_state());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Name of the trigger that was fired
    pub trigger: String,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// False for ignored firings.
    pub fn changed_state(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered history of state transitions.
///
/// # Example
///
/// ```rust
/// use bugflow::bug::{Bug, State};
/// use bugflow::core::StateHistory;
///
/// let mut bug = Bug::new(State::Created);
/// let mut history = StateHistory::new();
///
/// history = history.record(bug.start_work().unwrap());
/// history = history.record(bug.complete().unwrap());
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&State::Created, &State::InProgress, &State::Resolved]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This does not mutate the existing history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the first transition's `from` state followed by the `to`
    /// state of each transition. Ignored firings repeat the current state.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}
