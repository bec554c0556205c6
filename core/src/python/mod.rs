//! Python bindings for filmsim
//!
//! This module provides PyO3 bindings enabling Python users to resolve
//! Fujifilm film simulations from raw maker note bytes.

// Suppress false positive warnings from PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

mod catalog;
mod enums;
mod errors;
#[macro_use]
mod macros;
mod resolver;

pub use catalog::*;
pub use enums::*;
pub use errors::*;
pub use resolver::*;

/// Python module definition
#[pymodule]
fn _filmsim(py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Register exception classes
    m.add("FilmsimError", py.get_type_bound::<errors::PyFilmsimError>())?;
    m.add(
        "MakerNoteError",
        py.get_type_bound::<errors::PyMakerNoteError>(),
    )?;
    m.add(
        "UnknownSimulationError",
        py.get_type_bound::<errors::PyUnknownSimulationError>(),
    )?;

    // Register classes
    m.add_class::<PyFilmSimulation>()?;
    m.add_class::<PySimulationLabel>()?;
    m.add_class::<PySimulationReading>()?;

    // Register functions
    m.add_function(wrap_pyfunction!(py_resolve_simulation, m)?)?;
    m.add_function(wrap_pyfunction!(py_read_maker_note, m)?)?;
    m.add_function(wrap_pyfunction!(py_is_known_identifier, m)?)?;
    m.add_function(wrap_pyfunction!(py_is_known_label, m)?)?;
    m.add_function(wrap_pyfunction!(py_form_options, m)?)?;

    // Add version
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
