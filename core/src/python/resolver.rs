//! Python wrappers for maker note resolution

use pyo3::prelude::*;

use super::enums::PyFilmSimulation;
use super::errors::convert_error;
use super::macros::impl_py_from;
use crate::api::{SimulationReading, SimulationResolver};

/// Raw saturation and film mode codes read from a maker note
#[pyclass(name = "SimulationReading", module = "filmsim")]
#[derive(Clone, Debug)]
pub struct PySimulationReading {
    pub(crate) inner: SimulationReading,
}

#[pymethods]
impl PySimulationReading {
    #[getter]
    fn saturation_code(&self) -> Option<i64> {
        self.inner.saturation_code
    }

    #[getter]
    fn film_mode_code(&self) -> Option<i64> {
        self.inner.film_mode_code
    }

    #[getter]
    fn simulation(&self) -> Option<PyFilmSimulation> {
        self.inner.simulation().map(Into::into)
    }

    fn __repr__(&self) -> String {
        format!(
            "SimulationReading(saturation_code={:?}, film_mode_code={:?})",
            self.inner.saturation_code, self.inner.film_mode_code
        )
    }
}

impl_py_from!(PySimulationReading, SimulationReading);

/// Resolve the film simulation of a raw Fujifilm maker note
///
/// Args:
///     data: Maker note bytes, starting with the "FUJIFILM" signature
///
/// Returns:
///     FilmSimulation or None if no known simulation is recorded
///
/// Raises:
///     MakerNoteError: If the maker note is malformed
#[pyfunction]
#[pyo3(name = "resolve_simulation")]
pub fn py_resolve_simulation(data: &[u8]) -> PyResult<Option<PyFilmSimulation>> {
    let simulation = crate::api::resolve_simulation(data).map_err(convert_error)?;
    Ok(simulation.map(Into::into))
}

/// Read the raw saturation and film mode codes of a Fujifilm maker note
///
/// Raises:
///     MakerNoteError: If the maker note is malformed
#[pyfunction]
#[pyo3(name = "read_maker_note")]
pub fn py_read_maker_note(data: &[u8]) -> PyResult<PySimulationReading> {
    let reading = SimulationResolver::new()
        .read(data)
        .map_err(convert_error)?;
    Ok(reading.into())
}
