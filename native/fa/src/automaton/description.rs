//! Serializable description of a DFA.

use crate::automaton::dfa::DFA;
use crate::automaton::error::DfaError;
use crate::automaton::symbol::Symbol;
use crate::state::State;
use serde::{Deserialize, Serialize};

/// A single edge `from --symbol--> to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDescription {
    pub from: String,
    pub symbol: Symbol,
    pub to: String,
}

/// Plain-data form of a [`DFA`], in the order its parts are built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DfaDescription {
    pub states: Vec<String>,
    pub sigma: Vec<Symbol>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default)]
    pub finals: Vec<String>,
    #[serde(default)]
    pub transitions: Vec<TransitionDescription>,
}

impl DfaDescription {
    pub fn from_json(json: &str) -> Result<Self, DfaError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, DfaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the automaton: alphabet, states, start, finals, then transitions.
    /// Stops at the first rejected operation.
    pub fn build(&self) -> Result<DFA, DfaError> {
        let mut dfa = DFA::new();
        for &symbol in &self.sigma {
            dfa.add_sigma(symbol);
        }
        for name in &self.states {
            dfa.add_state(name)?;
        }
        if let Some(start) = &self.start {
            dfa.set_start(start)?;
        }
        for name in &self.finals {
            dfa.set_final(name)?;
        }
        for t in &self.transitions {
            dfa.add_transition(&t.from, &t.to, t.symbol)?;
        }
        Ok(dfa)
    }
}

impl From<&DFA> for DfaDescription {
    fn from(dfa: &DFA) -> Self {
        Self {
            states: dfa.states().map(owned_name).collect(),
            sigma: dfa.sigma().into_iter().collect(),
            start: dfa.start_state().map(owned_name),
            finals: dfa.final_states().map(owned_name).collect(),
            transitions: dfa
                .transitions()
                .map(|(from, symbol, to)| TransitionDescription {
                    from: from.name().to_owned(),
                    symbol,
                    to: to.name().to_owned(),
                })
                .collect(),
        }
    }
}

fn owned_name(state: &State) -> String {
    state.name().to_owned()
}
