//! The bug type and its transition operations.

use super::error::InvalidTransition;
use super::table::table;
use super::{State, Trigger};
use crate::core::{Outcome, StateTransition};
use chrono::Utc;

/// A single bug moving through its lifecycle.
///
/// The state changes only through the operations below, each of which fires
/// one [`Trigger`]. There is no internal synchronization; `&mut self` is the
/// only way to move a bug.
///
/// # Example
///
/// ```rust
/// use bugflow::bug::{Bug, State};
///
/// let mut bug = Bug::new(State::Created);
/// bug.start_work()?;
/// bug.begin_review()?;
/// bug.complete()?;
/// assert_eq!(bug.state(), State::Resolved);
///
/// assert!(bug.postpone().is_err());
/// assert_eq!(bug.state(), State::Resolved);
/// # Ok::<(), bugflow::bug::InvalidTransition>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bug {
    state: State,
}

impl Bug {
    /// Create a bug in `initial`. Any state is accepted.
    pub fn new(initial: State) -> Self {
        Self { state: initial }
    }

    /// Current state (pure).
    pub fn state(&self) -> State {
        self.state
    }

    /// Fires `Complete`.
    pub fn complete(&mut self) -> Result<StateTransition<State>, InvalidTransition> {
        self.fire(Trigger::Complete)
    }

    /// Fires `StartWork`. Ignored while already `InProgress`.
    pub fn start_work(&mut self) -> Result<StateTransition<State>, InvalidTransition> {
        self.fire(Trigger::StartWork)
    }

    /// Fires `Postpone`.
    pub fn postpone(&mut self) -> Result<StateTransition<State>, InvalidTransition> {
        self.fire(Trigger::Postpone)
    }

    /// Fires `BeginReview`.
    pub fn begin_review(&mut self) -> Result<StateTransition<State>, InvalidTransition> {
        self.fire(Trigger::BeginReview)
    }

    /// Fires `RestoreWork`.
    pub fn restore_work(&mut self) -> Result<StateTransition<State>, InvalidTransition> {
        self.fire(Trigger::RestoreWork)
    }

    /// Whether `trigger` would be accepted from the current state.
    pub fn can_fire(&self, trigger: Trigger) -> bool {
        table().can_fire(&self.state, &trigger)
    }

    /// Triggers accepted from the current state, in declaration order.
    pub fn permitted_triggers(&self) -> Vec<Trigger> {
        Trigger::ALL
            .iter()
            .copied()
            .filter(|trigger| self.can_fire(*trigger))
            .collect()
    }

    fn fire(&mut self, trigger: Trigger) -> Result<StateTransition<State>, InvalidTransition> {
        let from = self.state;
        let to = match table().fire(&from, &trigger) {
            Outcome::Next(to) => {
                tracing::info!(%trigger, %from, %to, "{trigger}");
                to
            }
            Outcome::Ignore => {
                tracing::info!(%trigger, %from, ignored = true, "{trigger}");
                from
            }
            Outcome::Illegal => {
                tracing::warn!(%trigger, state = %from, "Invalid transition");
                return Err(InvalidTransition {
                    trigger,
                    state: from,
                });
            }
        };

        self.state = to;
        Ok(StateTransition {
            from,
            to,
            trigger: trigger.to_string(),
            timestamp: Utc::now(),
        })
    }
}
