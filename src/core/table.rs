//! Static transition tables.
//!
//! A table maps `(state, trigger)` pairs to an [`Outcome`]. Tables are
//! assembled once with a [`TableBuilder`] and only read afterwards; firing a
//! trigger against a table is a pure lookup that never changes the table.

use super::state::State;
use super::trigger::Trigger;

/// Result of looking up a `(state, trigger)` pair.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<S: State> {
    /// The trigger moves the machine to this state
    Next(S),

    /// The trigger is accepted but the state does not change
    Ignore,

    /// No entry exists for the pair
    Illegal,
}

impl<S: State> Outcome<S> {
    /// Whether the trigger is accepted (`Next` or `Ignore`).
    pub fn is_permitted(&self) -> bool {
        !matches!(self, Self::Illegal)
    }
}

/// One configured row of a table.
#[derive(Clone, Debug, PartialEq)]
pub struct TableEntry<S: State, T: Trigger> {
    pub from: S,
    pub trigger: T,
    pub outcome: Outcome<S>,
}

/// Immutable mapping from `(state, trigger)` to [`Outcome`].
///
/// Rows keep the order in which they were configured. Any pair without a
/// row is illegal.
///
/// # Example
///
/// ```rust
/// use bugflow::core::{Outcome, TransitionTable};
/// use bugflow::{state_enum, trigger_enum};
///
/// state_enum! {
///     enum Door { Closed, Open }
/// }
///
/// trigger_enum! {
///     enum Push { Swing, Knock }
/// }
///
/// let table = TransitionTable::builder()
///     .permit(Door::Closed, Push::Swing, Door::Open)
///     .ignore(Door::Closed, Push::Knock)
///     .build();
///
/// assert_eq!(table.fire(&Door::Closed, &Push::Swing), Outcome::Next(Door::Open));
/// assert_eq!(table.fire(&Door::Closed, &Push::Knock), Outcome::Ignore);
/// assert_eq!(table.fire(&Door::Open, &Push::Swing), Outcome::Illegal);
/// ```
#[derive(Clone, Debug)]
pub struct TransitionTable<S: State, T: Trigger> {
    entries: Vec<TableEntry<S, T>>,
}

impl<S: State, T: Trigger> TransitionTable<S, T> {
    /// Start configuring a new table.
    pub fn builder() -> TableBuilder<S, T> {
        TableBuilder::new()
    }

    /// Look up the outcome of firing `trigger` while in `current` (pure).
    pub fn fire(&self, current: &S, trigger: &T) -> Outcome<S> {
        self.entries
            .iter()
            .find(|entry| entry.from == *current && entry.trigger == *trigger)
            .map(|entry| entry.outcome.clone())
            .unwrap_or(Outcome::Illegal)
    }

    /// Check whether `trigger` is accepted from `current` (pure).
    pub fn can_fire(&self, current: &S, trigger: &T) -> bool {
        self.fire(current, trigger).is_permitted()
    }

    /// Triggers accepted from `current`, in configuration order.
    pub fn permitted_triggers(&self, current: &S) -> Vec<T> {
        self.entries
            .iter()
            .filter(|entry| entry.from == *current)
            .map(|entry| entry.trigger.clone())
            .collect()
    }

    /// All configured rows.
    pub fn entries(&self) -> &[TableEntry<S, T>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the table as a Graphviz DOT digraph.
    ///
    /// Permitted transitions become labelled edges. Ignored triggers become
    /// dashed self-loops.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph {\n");
        for entry in &self.entries {
            let from = entry.from.name();
            let trigger = entry.trigger.name();
            match &entry.outcome {
                Outcome::Next(to) => dot.push_str(&format!(
                    "    \"{from}\" -> \"{}\" [label=\"{trigger}\"];\n",
                    to.name()
                )),
                Outcome::Ignore => dot.push_str(&format!(
                    "    \"{from}\" -> \"{from}\" [label=\"{trigger}\", style=dashed];\n"
                )),
                Outcome::Illegal => {}
            }
        }
        dot.push_str("}\n");
        dot
    }
}

/// Fluent builder for [`TransitionTable`].
///
/// Configuring the same `(from, trigger)` pair twice replaces the earlier
/// row in place.
pub struct TableBuilder<S: State, T: Trigger> {
    entries: Vec<TableEntry<S, T>>,
}

impl<S: State, T: Trigger> TableBuilder<S, T> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Allow `trigger` to move `from` to `to`.
    pub fn permit(self, from: S, trigger: T, to: S) -> Self {
        self.entry(from, trigger, Outcome::Next(to))
    }

    /// Accept `trigger` in `from` without changing state.
    pub fn ignore(self, from: S, trigger: T) -> Self {
        self.entry(from, trigger, Outcome::Ignore)
    }

    fn entry(mut self, from: S, trigger: T, outcome: Outcome<S>) -> Self {
        let existing = self
            .entries
            .iter_mut()
            .find(|entry| entry.from == from && entry.trigger == trigger);

        match existing {
            Some(entry) => entry.outcome = outcome,
            None => self.entries.push(TableEntry {
                from,
                trigger,
                outcome,
            }),
        }
        self
    }

    /// Build the table.
    pub fn build(self) -> TransitionTable<S, T> {
        TransitionTable {
            entries: self.entries,
        }
    }
}

impl<S: State, T: Trigger> Default for TableBuilder<S, T> {
    fn default() -> Self {
        Self::new()
    }
}
