//! Errors raised by bug operations.

use super::{State, Trigger};
use thiserror::Error;

/// A trigger was fired from a state that has no entry for it.
///
/// The bug's state is left unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("No valid leaving transitions are permitted from state '{state}' for trigger '{trigger}'")]
pub struct InvalidTransition {
    pub trigger: Trigger,
    pub state: State,
}
