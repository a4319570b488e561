//! Deterministic Finite Automaton (DFA) over single-character symbols.

use crate::automaton::error::DfaError;
use crate::automaton::state::{DfaState, StateId, StateSet};
use crate::automaton::symbol::{self, Symbol};
use crate::state::State;
use indexmap::{IndexMap, IndexSet};
use std::collections::VecDeque;
use std::fmt;
use tracing::{debug, trace};

/// A Deterministic Finite Automaton, the 5-tuple (Q, Σ, δ, q0, F).
///
/// States, alphabet symbols and final states keep their insertion order, which
/// fixes the layout of the [`Display`](fmt::Display) rendering. The transition
/// table may be partial: a missing transition rejects the input.
#[derive(Debug, Clone, Default)]
pub struct DFA {
    /// Q, indexed by name
    states: IndexMap<String, DfaState>,
    /// Σ
    sigma: IndexSet<Symbol>,
    /// q0
    start_state: Option<StateId>,
    /// F, in designation order
    final_states: IndexSet<StateId>,
}

impl DFA {
    /// Create a new empty DFA.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a state named `name` and return its ID.
    ///
    /// Fails without touching the automaton if the name is taken.
    pub fn add_state(&mut self, name: &str) -> Result<StateId, DfaError> {
        if self.states.contains_key(name) {
            debug!(name, "rejected duplicate state");
            return Err(DfaError::DuplicateState(name.to_owned()));
        }
        let id = self.states.len() as StateId;
        self.states.insert(name.to_owned(), DfaState::new(name));
        Ok(id)
    }

    /// Designate `name` as the start state, replacing any previous one.
    pub fn set_start(&mut self, name: &str) -> Result<(), DfaError> {
        let id = self.state_id(name)?;
        self.start_state = Some(id);
        Ok(())
    }

    /// Add `name` to the final states. Marking a state twice is harmless.
    pub fn set_final(&mut self, name: &str) -> Result<(), DfaError> {
        let id = self.state_id(name)?;
        self.final_states.insert(id);
        Ok(())
    }

    /// Add a symbol to the alphabet. Returns false if it was already present.
    pub fn add_sigma(&mut self, symbol: Symbol) -> bool {
        self.sigma.insert(symbol)
    }

    /// Add (or overwrite) the transition `from --symbol--> to`.
    pub fn add_transition(&mut self, from: &str, to: &str, symbol: Symbol) -> Result<(), DfaError> {
        let source = self.state_id(from)?;
        let destination = self.state_id(to)?;
        if !self.sigma.contains(&symbol) {
            debug!(%symbol, "rejected transition on unknown symbol");
            return Err(DfaError::UnknownSymbol(symbol));
        }
        self.states[source as usize].add_transition(symbol, destination);
        Ok(())
    }

    /// A copy of the alphabet in insertion order.
    pub fn sigma(&self) -> IndexSet<Symbol> {
        self.sigma.clone()
    }

    /// Look up a state by name.
    pub fn get_state(&self, name: &str) -> Option<&State> {
        self.states.get(name).map(DfaState::state)
    }

    /// True iff `name` is a known final state.
    pub fn is_final(&self, name: &str) -> bool {
        self.states
            .get_index_of(name)
            .is_some_and(|id| self.final_states.contains(&(id as StateId)))
    }

    /// True iff `name` is the designated start state.
    pub fn is_start(&self, name: &str) -> bool {
        match (self.states.get_index_of(name), self.start_state) {
            (Some(id), Some(start)) => id as StateId == start,
            _ => false,
        }
    }

    /// Decide whether the DFA accepts `input`.
    ///
    /// The input [`EPSILON`](symbol::EPSILON) (`"e"`) stands for the empty
    /// string and is decided on the start state alone. Characters without a
    /// transition from the current state reject.
    pub fn accepts(&self, input: &str) -> bool {
        let Some(mut current) = self.start_state else {
            trace!(input, "no start state, rejecting");
            return false;
        };

        if !symbol::is_epsilon(input) {
            for symbol in input.chars() {
                match self.state(current).transition(symbol) {
                    Some(next) => current = next,
                    None => {
                        trace!(input, state = self.state(current).name(), %symbol, "no transition, rejecting");
                        return false;
                    }
                }
            }
        }

        let accepted = self.final_states.contains(&current);
        trace!(input, state = self.state(current).name(), accepted, "input consumed");
        accepted
    }

    /// Create an independent copy of this DFA with the transition labels
    /// `symb1` and `symb2` exchanged. States, alphabet, start and final states
    /// are copied unchanged.
    pub fn swap(&self, symb1: Symbol, symb2: Symbol) -> Result<DFA, DfaError> {
        for symbol in [symb1, symb2] {
            if !self.sigma.contains(&symbol) {
                debug!(%symbol, "rejected swap on unknown symbol");
                return Err(DfaError::UnknownSymbol(symbol));
            }
        }

        let mut swapped = DFA::new();
        for &symbol in &self.sigma {
            swapped.add_sigma(symbol);
        }
        for state in self.states.values() {
            swapped.add_state(state.name())?;
        }
        if let Some(start) = self.start_state {
            swapped.set_start(self.state(start).name())?;
        }
        for &id in &self.final_states {
            swapped.set_final(self.state(id).name())?;
        }
        for state in self.states.values() {
            for (symbol, dst) in state.transitions() {
                swapped.add_transition(
                    state.name(),
                    self.state(dst).name(),
                    symbol::transpose(symbol, symb1, symb2),
                )?;
            }
        }

        Ok(swapped)
    }

    /// Get the number of states.
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// States in insertion order.
    pub fn states(&self) -> impl Iterator<Item = &State> + '_ {
        self.states.values().map(DfaState::state)
    }

    /// Get the start state.
    pub fn start_state(&self) -> Option<&State> {
        self.start_state.map(|id| self.state(id).state())
    }

    /// Final states in the order they were designated.
    pub fn final_states(&self) -> impl Iterator<Item = &State> + '_ {
        self.final_states.iter().map(|&id| self.state(id).state())
    }

    /// Destination of `from` on `symbol`, if both exist.
    pub fn transition(&self, from: &str, symbol: Symbol) -> Option<&State> {
        let dst = self.states.get(from)?.transition(symbol)?;
        Some(self.state(dst).state())
    }

    /// All transitions as `(source, symbol, destination)`, grouped by source
    /// state in insertion order.
    pub fn transitions(&self) -> impl Iterator<Item = (&State, Symbol, &State)> + '_ {
        self.states.values().flat_map(move |src| {
            src.transitions()
                .map(move |(symbol, dst)| (src.state(), symbol, self.state(dst).state()))
        })
    }

    /// Find all states reachable from the start state.
    pub fn reachable_states(&self) -> StateSet {
        let mut reachable = StateSet::with_capacity(self.states.len());

        let Some(start) = self.start_state else {
            return reachable;
        };

        let mut queue = VecDeque::new();
        queue.push_back(start);

        while let Some(state) = queue.pop_front() {
            if !reachable.insert(state) {
                continue;
            }
            for (_, next) in self.state(state).transitions() {
                if !reachable.contains(next) {
                    queue.push_back(next);
                }
            }
        }

        reachable
    }

    /// Check if the DFA is empty (accepts no strings).
    pub fn is_empty(&self) -> bool {
        if self.final_states.is_empty() {
            return true;
        }
        let reachable = self.reachable_states();
        !self.final_states.iter().any(|&id| reachable.contains(id))
    }

    fn state(&self, id: StateId) -> &DfaState {
        &self.states[id as usize]
    }

    fn state_id(&self, name: &str) -> Result<StateId, DfaError> {
        match self.states.get_index_of(name) {
            Some(id) => Ok(id as StateId),
            None => {
                debug!(name, "unknown state");
                Err(DfaError::UnknownState(name.to_owned()))
            }
        }
    }
}

/// Canonical rendering: `Q`, `Sigma`, the `delta` table, `q0` and `F`, each in
/// insertion order.
impl fmt::Display for DFA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.states.values().map(DfaState::name).collect();
        writeln!(f, "Q = {{ {} }}", names.join(" "))?;

        let symbols: Vec<String> = self.sigma.iter().map(char::to_string).collect();
        writeln!(f, "Sigma = {{ {} }}", symbols.join(" "))?;

        f.write_str("delta =\n\t")?;
        for symbol in &self.sigma {
            write!(f, "{symbol}\t")?;
        }
        f.write_str("\n")?;
        for state in self.states.values() {
            write!(f, "{}\t", state.name())?;
            for &symbol in &self.sigma {
                if let Some(dst) = state.transition(symbol) {
                    f.write_str(self.state(dst).name())?;
                }
                f.write_str("\t")?;
            }
            f.write_str("\n")?;
        }

        match self.start_state() {
            Some(start) => writeln!(f, "q0 = {start}")?,
            None => writeln!(f, "q0 = ")?,
        }

        let finals: Vec<&str> = self.final_states().map(State::name).collect();
        writeln!(f, "F = {{ {} }}", finals.join(" "))
    }
}
