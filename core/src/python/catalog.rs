//! Python wrappers for label lookups

use pyo3::prelude::*;

use super::enums::PyFilmSimulation;
use crate::catalog;

/// Whether the string is exactly a film simulation identifier
#[pyfunction]
#[pyo3(name = "is_known_identifier")]
pub fn py_is_known_identifier(candidate: &str) -> bool {
    catalog::is_known_identifier(candidate)
}

/// Whether the string matches any simulation label, ignoring case
#[pyfunction]
#[pyo3(name = "is_known_label")]
pub fn py_is_known_label(candidate: &str) -> bool {
    catalog::is_known_label(candidate)
}

/// (simulation, large label) pairs sorted by label
#[pyfunction]
#[pyo3(name = "form_options")]
pub fn py_form_options() -> Vec<(PyFilmSimulation, &'static str)> {
    catalog::form_options()
        .iter()
        .map(|option| (option.value.into(), option.label))
        .collect()
}
