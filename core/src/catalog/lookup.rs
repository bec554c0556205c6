use crate::types::FilmSimulation;

/// Returns whether `candidate` is exactly a film simulation identifier
///
/// The comparison is case-sensitive: `"reala"` is known, `"Reala"` is not.
pub fn is_known_identifier(candidate: &str) -> bool {
    FilmSimulation::from_identifier(candidate).is_some()
}

/// Returns whether `candidate` matches any small, medium or large label
///
/// Matching ignores case, so labels that went through a display layer or
/// another metadata source are still recognised.
pub fn is_known_label(candidate: &str) -> bool {
    simulation_for_label(candidate).is_some()
}

/// Returns the simulation whose small, medium or large label matches `candidate`
///
/// Matching ignores case. If several simulations share a label, the first in
/// [`FilmSimulation::ALL`] order wins.
pub fn simulation_for_label(candidate: &str) -> Option<FilmSimulation> {
    let candidate = candidate.to_lowercase();
    FilmSimulation::ALL.iter().copied().find(|sim| {
        sim.label()
            .all()
            .iter()
            .any(|label| label.to_lowercase() == candidate)
    })
}
