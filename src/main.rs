//! Bug Lifecycle Walkthrough
//!
//! Drives one bug through a scripted sequence of operations and prints the
//! state after every step, followed by the recorded history.
//!
//! Log output is controlled with `RUST_LOG` (defaults to `info`).
//!
//! Run with: cargo run

use bugflow::bug::{Bug, InvalidTransition, State};
use bugflow::core::{StateHistory, StateTransition};
use tracing_subscriber::EnvFilter;

type Step = fn(&mut Bug) -> Result<StateTransition<State>, InvalidTransition>;

const SCRIPT: &[Step] = &[
    Bug::start_work,
    Bug::begin_review,
    Bug::complete,
    Bug::restore_work,
    Bug::start_work,
    Bug::postpone,
    Bug::start_work,
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let mut bug = Bug::new(State::Created);
    let mut history = StateHistory::new();

    println!("Initial State: {}", bug.state());

    for step in SCRIPT {
        history = history.record(step(&mut bug)?);
        println!("State: {}", bug.state());
    }

    let path: Vec<String> = history.get_path().iter().map(|s| s.to_string()).collect();
    println!("\nPath: {}", path.join(" -> "));
    println!("History:\n{}", serde_json::to_string_pretty(&history)?);

    Ok(())
}
