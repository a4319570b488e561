//! Named state identity shared by automata.

use std::fmt;

/// An immutable named state.
///
/// Two states of the same automaton are the same state iff their names are
/// equal; the owning automaton keeps names unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    name: String,
}

impl State {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The state's label.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
