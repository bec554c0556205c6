use std::sync::OnceLock;

use super::collation::locale_cmp;
use crate::types::FilmSimulation;

/// Entry of a selectable film simulation list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct FormOption {
    pub value: FilmSimulation,
    /// Large label
    pub label: &'static str,
}

/// Returns every film simulation paired with its large label, sorted by label
///
/// The list is built once and shared.
pub fn form_options() -> &'static [FormOption] {
    static OPTIONS: OnceLock<Vec<FormOption>> = OnceLock::new();
    OPTIONS.get_or_init(|| {
        let mut options: Vec<FormOption> = FilmSimulation::ALL
            .iter()
            .map(|&value| FormOption {
                value,
                label: value.label().large,
            })
            .collect();
        options.sort_by(|a, b| locale_cmp(a.label, b.label));
        options
    })
}
