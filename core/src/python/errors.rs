//! Python exception types for filmsim
//!
//! This module defines Python exception classes that map to Rust error types.

// Suppress warnings from PyO3's create_exception! macro about gil-refs feature
#![allow(unexpected_cfgs)]

use pyo3::{create_exception, exceptions::PyException, prelude::*};

use crate::error::FilmsimError;

// Base exception
create_exception!(
    filmsim,
    PyFilmsimError,
    PyException,
    "Base exception for all filmsim errors"
);

// Specific exceptions
create_exception!(
    filmsim,
    PyMakerNoteError,
    PyFilmsimError,
    "Maker note is malformed or truncated"
);

create_exception!(
    filmsim,
    PyUnknownSimulationError,
    PyFilmsimError,
    "String is not a known film simulation identifier"
);

/// Convert Rust FilmsimError to appropriate Python exception
pub fn convert_error(err: FilmsimError) -> PyErr {
    match err {
        FilmsimError::InvalidSignature
        | FilmsimError::Truncated { .. }
        | FilmsimError::InvalidEntry { .. } => PyMakerNoteError::new_err(err.to_string()),
        FilmsimError::UnknownSimulation(_) => PyUnknownSimulationError::new_err(err.to_string()),
        FilmsimError::IoError(e) => pyo3::exceptions::PyIOError::new_err(e.to_string()),
    }
}
