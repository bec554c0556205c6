//! Python wrappers for filmsim types

use pyo3::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use super::errors::convert_error;
use super::macros::impl_py_from;
use crate::types::{FilmSimulation, LabelSize, SimulationLabel};

// ============================================================================
// FilmSimulation
// ============================================================================

#[pyclass(name = "FilmSimulation", module = "filmsim")]
#[derive(Clone, Debug)]
pub struct PyFilmSimulation {
    pub(crate) inner: FilmSimulation,
}

#[pymethods]
impl PyFilmSimulation {
    /// Parse a simulation from its exact identifier (e.g. "classic-neg")
    #[new]
    fn new(identifier: &str) -> PyResult<Self> {
        identifier
            .parse::<FilmSimulation>()
            .map(Self::from)
            .map_err(convert_error)
    }

    /// All film simulations in label table order
    #[staticmethod]
    fn all() -> Vec<PyFilmSimulation> {
        FilmSimulation::ALL.iter().map(|&sim| sim.into()).collect()
    }

    #[getter]
    fn identifier(&self) -> &'static str {
        self.inner.as_str()
    }

    #[getter]
    fn family(&self) -> &'static str {
        self.inner.family().simple_name()
    }

    #[getter]
    fn label(&self) -> PySimulationLabel {
        self.inner.label().into()
    }

    fn is_monochrome(&self) -> bool {
        self.inner.is_monochrome()
    }

    fn __str__(&self) -> &'static str {
        self.inner.as_str()
    }

    fn __repr__(&self) -> String {
        format!("FilmSimulation('{}')", self.inner)
    }

    fn __eq__(&self, other: &PyFilmSimulation) -> bool {
        self.inner == other.inner
    }

    fn __hash__(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.inner.hash(&mut hasher);
        hasher.finish()
    }
}

impl_py_from!(PyFilmSimulation, FilmSimulation);

// ============================================================================
// SimulationLabel
// ============================================================================

#[pyclass(name = "SimulationLabel", module = "filmsim")]
#[derive(Clone, Debug)]
pub struct PySimulationLabel {
    pub(crate) inner: SimulationLabel,
}

#[pymethods]
impl PySimulationLabel {
    #[getter]
    fn small(&self) -> &'static str {
        self.inner.small
    }

    #[getter]
    fn medium(&self) -> &'static str {
        self.inner.medium
    }

    #[getter]
    fn large(&self) -> &'static str {
        self.inner.large
    }

    /// Label by size name: "small", "medium" or "large"
    fn get(&self, size: &str) -> PyResult<&'static str> {
        let size = match size.to_lowercase().as_str() {
            "small" => LabelSize::Small,
            "medium" => LabelSize::Medium,
            "large" => LabelSize::Large,
            other => {
                return Err(pyo3::exceptions::PyValueError::new_err(format!(
                    "Unknown label size: {}",
                    other
                )))
            }
        };
        Ok(self.inner.get(size))
    }

    fn __str__(&self) -> &'static str {
        self.inner.large
    }

    fn __repr__(&self) -> String {
        format!(
            "SimulationLabel(small='{}', medium='{}', large='{}')",
            self.inner.small, self.inner.medium, self.inner.large
        )
    }
}

impl_py_from!(PySimulationLabel, SimulationLabel);
