//! Deterministic finite automata: the 5-tuple (Q, Σ, δ, q0, F), string
//! acceptance and symbol relabeling.

pub mod automaton;
pub mod state;

pub use automaton::{DFA, DfaDescription, DfaError};
pub use state::State;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
fn import_submodule<'py>(
    py: Python<'py>,
    m: &Bound<'py, PyModule>,
    package: &str,
    name: &str,
    import_func: impl FnOnce(&Bound<'py, PyModule>) -> PyResult<()>,
) -> PyResult<()> {
    let submodule = PyModule::new(py, name)?;
    import_func(&submodule)?;

    // Register under the dotted name so `import fa.automaton` works
    let sys_modules = PyModule::import(py, "sys")?.getattr("modules")?;
    sys_modules.set_item(format!("{package}.{name}"), submodule.clone())?;

    m.add_submodule(&submodule)?;
    Ok(())
}

#[cfg(feature = "python")]
#[pymodule]
fn fa(m: &Bound<'_, PyModule>) -> PyResult<()> {
    import_submodule(m.py(), m, "fa", "automaton", automaton::automaton)?;
    m.add_class::<automaton::PyDFA>()?;
    Ok(())
}
