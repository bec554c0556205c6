pub mod api;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod extraction;
pub mod types;

#[cfg(feature = "python")]
mod python;

pub use api::{resolve_simulation, SimulationReading, SimulationResolver};
pub use catalog::{
    form_options, is_known_identifier, is_known_label, simulation_for_label, FormOption,
};
pub use cli::report::TextReport;
pub use error::{FilmsimError, Result};
pub use extraction::{FujifilmMakerNote, MakerNoteTag, TagWalker};
pub use types::*;
