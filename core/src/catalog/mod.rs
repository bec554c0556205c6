//! Lookups over the film simulation label table
//!
//! These helpers depend only on the static label data, never on the resolver.

mod collation;
mod lookup;
mod options;

pub use collation::locale_cmp;
pub use lookup::{is_known_identifier, is_known_label, simulation_for_label};
pub use options::{form_options, FormOption};
