//! Core type definitions for film simulation metadata
//!
//! - [`FilmSimulation`]: Closed set of Fujifilm film simulations
//! - [`SimulationFamily`]: Which tag (if any) a simulation is derived from
//! - [`SimulationLabel`]: Small, medium and large display strings
//! - [`LabelSize`]: Selects one of the three display strings

mod label;
mod simulation;

pub use label::{label_for, LabelSize, SimulationLabel};
pub use simulation::{FilmSimulation, SimulationFamily};
