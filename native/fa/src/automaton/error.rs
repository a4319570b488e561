//! Error types for DFA construction.

use crate::automaton::symbol::Symbol;

/// Reasons a DFA operation is rejected. A rejected operation never mutates
/// the automaton.
#[derive(Debug, thiserror::Error)]
pub enum DfaError {
    /// A state with this name already exists.
    #[error("state `{0}` already exists")]
    DuplicateState(String),
    /// No state with this name exists.
    #[error("unknown state `{0}`")]
    UnknownState(String),
    /// The symbol is not part of the alphabet.
    #[error("symbol `{0}` is not in the alphabet")]
    UnknownSymbol(Symbol),
    /// A JSON description could not be parsed or written.
    #[error("invalid DFA description: {0}")]
    InvalidDescription(#[from] serde_json::Error),
}
