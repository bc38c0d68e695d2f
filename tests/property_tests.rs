//! Property-based tests for the bug lifecycle.
//!
//! These tests use proptest to check every `(state, trigger)` pair and
//! random operation sequences against the transition table.

use bugflow::bug::{table, Bug, InvalidTransition, State, Trigger};
use bugflow::core::{Outcome, StateHistory, StateTransition};
use proptest::prelude::*;

fn expected(state: State, trigger: Trigger) -> Outcome<State> {
    use State::*;
    use Trigger::*;

    match (state, trigger) {
        (Created, StartWork) => Outcome::Next(InProgress),
        (InProgress, Complete) => Outcome::Next(Resolved),
        (InProgress, Postpone) => Outcome::Next(Postponed),
        (InProgress, BeginReview) => Outcome::Next(UnderReview),
        (InProgress, StartWork) => Outcome::Ignore,
        (UnderReview, Complete) => Outcome::Next(Resolved),
        (UnderReview, RestoreWork) => Outcome::Next(Reopened),
        (Resolved, StartWork) => Outcome::Next(InProgress),
        (Resolved, RestoreWork) => Outcome::Next(Reopened),
        (Postponed, StartWork) => Outcome::Next(InProgress),
        (Reopened, StartWork) => Outcome::Next(InProgress),
        _ => Outcome::Illegal,
    }
}

fn fire(
    bug: &mut Bug,
    trigger: Trigger,
) -> Result<StateTransition<State>, InvalidTransition> {
    match trigger {
        Trigger::StartWork => bug.start_work(),
        Trigger::Postpone => bug.postpone(),
        Trigger::Complete => bug.complete(),
        Trigger::BeginReview => bug.begin_review(),
        Trigger::RestoreWork => bug.restore_work(),
    }
}

prop_compose! {
    fn arbitrary_state()(index in 0..State::ALL.len()) -> State {
        State::ALL[index]
    }
}

prop_compose! {
    fn arbitrary_trigger()(index in 0..Trigger::ALL.len()) -> Trigger {
        Trigger::ALL[index]
    }
}

proptest! {
    #[test]
    fn table_matches_reference(state in arbitrary_state(), trigger in arbitrary_trigger()) {
        prop_assert_eq!(table().fire(&state, &trigger), expected(state, trigger));
    }

    #[test]
    fn firing_follows_the_table(state in arbitrary_state(), trigger in arbitrary_trigger()) {
        let mut bug = Bug::new(state);
        let result = fire(&mut bug, trigger);

        match expected(state, trigger) {
            Outcome::Next(to) => {
                let transition = result.unwrap();
                prop_assert_eq!(bug.state(), to);
                prop_assert_eq!(transition.from, state);
                prop_assert_eq!(transition.to, to);
            }
            Outcome::Ignore => {
                prop_assert!(result.is_ok());
                prop_assert_eq!(bug.state(), state);
            }
            Outcome::Illegal => {
                prop_assert_eq!(result.unwrap_err(), InvalidTransition { trigger, state });
                prop_assert_eq!(bug.state(), state);
            }
        }
    }

    #[test]
    fn can_fire_agrees_with_firing(state in arbitrary_state(), trigger in arbitrary_trigger()) {
        let mut bug = Bug::new(state);
        let allowed = bug.can_fire(trigger);
        prop_assert_eq!(allowed, bug.permitted_triggers().contains(&trigger));
        prop_assert_eq!(allowed, fire(&mut bug, trigger).is_ok());
    }

    #[test]
    fn permitted_triggers_are_exactly_the_legal_ones(state in arbitrary_state()) {
        let bug = Bug::new(state);
        let legal: Vec<Trigger> = Trigger::ALL
            .iter()
            .copied()
            .filter(|t| expected(state, *t) != Outcome::Illegal)
            .collect();
        prop_assert_eq!(bug.permitted_triggers(), legal);
    }

    #[test]
    fn random_sequences_only_visit_table_states(
        triggers in prop::collection::vec(arbitrary_trigger(), 0..30)
    ) {
        let mut bug = Bug::new(State::Created);
        let mut history = StateHistory::new();
        let mut visited = vec![State::Created];

        for trigger in triggers {
            let before = bug.state();
            match fire(&mut bug, trigger) {
                Ok(transition) => {
                    prop_assert_eq!(transition.from, before);
                    history = history.record(transition);
                    visited.push(bug.state());
                }
                Err(_) => {
                    prop_assert_eq!(bug.state(), before);
                }
            }
        }

        if !history.transitions().is_empty() {
            let path: Vec<State> = history.get_path().into_iter().copied().collect();
            prop_assert_eq!(path, visited);
        }
    }

    #[test]
    fn state_roundtrip_serialization(state in arbitrary_state()) {
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: State = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }
}
