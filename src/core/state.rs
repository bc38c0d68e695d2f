//! Core State trait for lifecycle states.
//!
//! Every state a transition table can hold implements this trait, which
//! exposes pure methods for inspecting a state without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for lifecycle states.
///
/// All methods are pure. States are small immutable values describing the
/// current position of an item in its lifecycle.
///
/// # Required Traits
///
/// - `Clone`: states are copied into transition records
/// - `PartialEq`: table lookup compares states by value
/// - `Debug`: states appear in diagnostics
/// - `Serialize` + `Deserialize`: histories can be exported
///
/// # Example
///
/// ```rust
/// use bugflow::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum TicketState {
///     Open,
///     Closed,
/// }
///
/// impl State for TicketState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(TicketState::Closed.name(), "Closed");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Open,
        Active,
        Closed,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Open => "Open",
                Self::Active => "Active",
                Self::Closed => "Closed",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Open.name(), "Open");
        assert_eq!(TestState::Active.name(), "Active");
        assert_eq!(TestState::Closed.name(), "Closed");
    }

    #[test]
    fn state_serializes_as_variant_name() {
        let json = serde_json::to_string(&TestState::Active).unwrap();
        assert_eq!(json, "\"Active\"");

        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, TestState::Active);
    }

    #[test]
    fn state_is_comparable() {
        assert_eq!(TestState::Open, TestState::Open.clone());
        assert_ne!(TestState::Open, TestState::Closed);
    }
}
