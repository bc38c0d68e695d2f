//! Trigger trait for the events that drive a transition table.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// An event fired against a transition table.
///
/// Triggers carry no data; they are looked up by value together with the
/// current state. `name` is what gets echoed when the trigger fires.
pub trait Trigger:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the trigger's name for display/logging.
    fn name(&self) -> &str;
}
