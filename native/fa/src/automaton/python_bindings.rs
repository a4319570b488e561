//! PyO3 bindings for the automaton module.
//!
//! Failures follow the Python-side convention: `False` from construction
//! methods and `None` from lookups and `swap`.

use crate::automaton::dfa::DFA;
use crate::state::State;
use pyo3::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// A named DFA state.
#[pyclass(name = "State", module = "fa.automaton", frozen)]
#[derive(Clone)]
pub struct PyState {
    state: State,
}

#[pymethods]
impl PyState {
    fn __repr__(&self) -> String {
        format!("State({:?})", self.state.name())
    }

    fn __str__(&self) -> String {
        self.state.to_string()
    }

    fn __eq__(&self, other: &Bound<'_, PyAny>) -> bool {
        other
            .extract::<PyRef<PyState>>()
            .is_ok_and(|other| other.state == self.state)
    }

    fn __hash__(&self) -> isize {
        let mut hasher = DefaultHasher::new();
        self.state.hash(&mut hasher);
        hasher.finish() as isize
    }

    #[getter]
    fn name(&self) -> String {
        self.state.name().to_owned()
    }
}

/// A Deterministic Finite Automaton.
#[pyclass(name = "DFA", module = "fa.automaton")]
pub struct PyDFA {
    dfa: DFA,
}

#[pymethods]
impl PyDFA {
    #[new]
    fn new() -> Self {
        Self { dfa: DFA::new() }
    }

    fn add_state(&mut self, name: &str) -> bool {
        self.dfa.add_state(name).is_ok()
    }

    fn set_start(&mut self, name: &str) -> bool {
        self.dfa.set_start(name).is_ok()
    }

    fn set_final(&mut self, name: &str) -> bool {
        self.dfa.set_final(name).is_ok()
    }

    fn add_sigma(&mut self, symbol: char) {
        self.dfa.add_sigma(symbol);
    }

    #[pyo3(signature = (from_state, to_state, on_symb))]
    fn add_transition(&mut self, from_state: &str, to_state: &str, on_symb: char) -> bool {
        self.dfa.add_transition(from_state, to_state, on_symb).is_ok()
    }

    /// The alphabet in insertion order, as a new list.
    fn get_sigma(&self) -> Vec<char> {
        self.dfa.sigma().into_iter().collect()
    }

    fn get_state(&self, name: &str) -> Option<PyState> {
        self.dfa.get_state(name).map(|state| PyState {
            state: state.clone(),
        })
    }

    fn is_final(&self, name: &str) -> bool {
        self.dfa.is_final(name)
    }

    fn is_start(&self, name: &str) -> bool {
        self.dfa.is_start(name)
    }

    fn accepts(&self, s: &str) -> bool {
        self.dfa.accepts(s)
    }

    /// Relabeled copy, or `None` if either symbol is not in the alphabet.
    fn swap(&self, symb1: char, symb2: char) -> Option<PyDFA> {
        self.dfa.swap(symb1, symb2).ok().map(|dfa| PyDFA { dfa })
    }

    /// Check if the DFA's language is empty.
    fn is_empty(&self) -> bool {
        self.dfa.is_empty()
    }

    fn __str__(&self) -> String {
        self.dfa.to_string()
    }

    fn __len__(&self) -> usize {
        self.dfa.num_states()
    }
}

/// Register the automaton submodule.
pub fn automaton(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyState>()?;
    m.add_class::<PyDFA>()?;
    Ok(())
}
