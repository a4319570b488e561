//! Deterministic finite automata over single-character alphabets.
//!
//! This module provides:
//! - Incremental construction of states, alphabet, start/final states and
//!   transitions
//! - The acceptance predicate, with `"e"` standing for the empty string
//! - Symbol swapping, producing an independent relabeled copy
//! - Reachability and language emptiness
//! - A serde description format and, behind the `python` feature, PyO3
//!   bindings

mod description;
mod dfa;
mod error;
#[cfg(feature = "python")]
mod python_bindings;
mod state;
mod symbol;

pub use description::{DfaDescription, TransitionDescription};
pub use dfa::DFA;
pub use error::DfaError;
#[cfg(feature = "python")]
pub use python_bindings::{PyDFA, PyState, automaton};
pub use state::{DfaState, StateId, StateSet};
pub use symbol::{EPSILON, Symbol, is_epsilon};
