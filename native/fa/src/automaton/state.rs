//! Per-state data of a DFA.

use crate::automaton::symbol::Symbol;
use crate::state::State;
use fixedbitset::FixedBitSet;
use indexmap::IndexMap;
use std::fmt;

/// Position of a state in its automaton's insertion order.
pub type StateId = u32;

/// A DFA state: a named identity plus its outgoing transitions.
#[derive(Debug, Clone)]
pub struct DfaState {
    state: State,
    /// symbol -> destination, in insertion order
    transitions: IndexMap<Symbol, StateId>,
}

impl DfaState {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            state: State::new(name),
            transitions: IndexMap::new(),
        }
    }

    /// The underlying named identity.
    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn name(&self) -> &str {
        self.state.name()
    }

    /// Record `self --symbol--> destination`, replacing any previous
    /// destination for `symbol`. The symbol keeps its first position.
    pub(crate) fn add_transition(&mut self, symbol: Symbol, destination: StateId) {
        self.transitions.insert(symbol, destination);
    }

    /// Destination on `symbol`, if a transition exists.
    pub fn transition(&self, symbol: Symbol) -> Option<StateId> {
        self.transitions.get(&symbol).copied()
    }

    /// Outgoing transitions in insertion order.
    pub fn transitions(&self) -> impl Iterator<Item = (Symbol, StateId)> + '_ {
        self.transitions.iter().map(|(&symbol, &dst)| (symbol, dst))
    }
}

/// A set of states implemented using a fixed-size bit set.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StateSet {
    bits: FixedBitSet,
}

impl StateSet {
    /// Create a new empty state set with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(capacity),
        }
    }

    /// Insert a state, returning whether it was newly added.
    pub fn insert(&mut self, state: StateId) -> bool {
        let idx = state as usize;
        if idx >= self.bits.len() {
            self.bits.grow(idx + 1);
        }
        !self.bits.put(idx)
    }

    pub fn contains(&self, state: StateId) -> bool {
        self.bits.contains(state as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_clear()
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// Iterate over the states in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.bits.ones().map(|i| i as StateId)
    }
}

impl fmt::Debug for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<StateId> for StateSet {
    fn from_iter<I: IntoIterator<Item = StateId>>(iter: I) -> Self {
        let mut set = Self::with_capacity(0);
        for state in iter {
            set.insert(state);
        }
        set
    }
}
