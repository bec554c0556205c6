use crate::error::Result;
use crate::extraction::tags::{FILM_MODE, SATURATION};
use crate::extraction::{
    simulation_from_film_mode, simulation_from_saturation, FujifilmMakerNote, TagWalker,
};
use crate::types::FilmSimulation;
use log::debug;

/// Resolves the film simulation recorded in a maker note
///
/// Reads the saturation and film mode tags through a [`TagWalker`]. A
/// monochrome rendering signalled by the saturation tag always takes
/// precedence over the color mode in the film mode tag.
///
/// # Example
///
/// ```
/// use filmsim_core::{FilmSimulation, SimulationResolver};
///
/// // Minimal Fujifilm maker note with a single FilmMode (0x1401) SHORT tag
/// let mut note = b"FUJIFILM".to_vec();
/// note.extend_from_slice(&12u32.to_le_bytes()); // IFD offset
/// note.extend_from_slice(&1u16.to_le_bytes()); // entry count
/// note.extend_from_slice(&0x1401u16.to_le_bytes()); // tag
/// note.extend_from_slice(&3u16.to_le_bytes()); // SHORT
/// note.extend_from_slice(&1u32.to_le_bytes()); // count
/// note.extend_from_slice(&[0x00, 0x08, 0x00, 0x00]); // 0x800, inline
/// note.extend_from_slice(&0u32.to_le_bytes()); // next IFD
///
/// let resolver = SimulationResolver::new();
/// let simulation = resolver.resolve(&note).unwrap();
///
/// assert_eq!(simulation, Some(FilmSimulation::ClassicNeg));
/// assert_eq!(simulation.unwrap().label().large, "Classic Neg.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulationResolver<W = FujifilmMakerNote> {
    walker: W,
}

impl SimulationResolver {
    /// Creates a resolver for Fujifilm maker notes
    pub fn new() -> Self {
        Self::default()
    }
}

impl<W: TagWalker> SimulationResolver<W> {
    /// Creates a resolver that reads tags through `walker`
    pub fn with_walker(walker: W) -> Self {
        Self { walker }
    }

    /// Reads the raw saturation and film mode codes from a maker note
    ///
    /// Only the first value of each tag is used. If a tag is reported more
    /// than once, the last report wins.
    ///
    /// # Errors
    ///
    /// Returns the walker's error unchanged if the block is malformed.
    pub fn read(&self, bytes: &[u8]) -> std::result::Result<SimulationReading, W::Error> {
        let mut reading = SimulationReading::default();

        self.walker.walk(bytes, &mut |tag, values| match tag {
            SATURATION => reading.saturation_code = values.first().copied(),
            FILM_MODE => reading.film_mode_code = values.first().copied(),
            _ => {}
        })?;

        debug!(
            "Maker note codes: saturation={:?} film_mode={:?}",
            reading.saturation_code, reading.film_mode_code
        );
        Ok(reading)
    }

    /// Resolves the film simulation of a maker note
    ///
    /// Returns `Ok(None)` for a well-formed block without a recognised code.
    ///
    /// # Errors
    ///
    /// Returns the walker's error unchanged if the block is malformed.
    pub fn resolve(
        &self,
        bytes: &[u8],
    ) -> std::result::Result<Option<FilmSimulation>, W::Error> {
        Ok(self.read(bytes)?.simulation())
    }
}

/// Raw codes read from a maker note
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct SimulationReading {
    /// First value of the saturation tag
    pub saturation_code: Option<i64>,

    /// First value of the film mode tag
    pub film_mode_code: Option<i64>,
}

impl SimulationReading {
    /// Simulation signalled by the saturation tag (monochrome family)
    pub fn saturation_simulation(&self) -> Option<FilmSimulation> {
        simulation_from_saturation(self.saturation_code)
    }

    /// Simulation signalled by the film mode tag
    pub fn film_mode_simulation(&self) -> Option<FilmSimulation> {
        simulation_from_film_mode(self.film_mode_code)
    }

    /// Resolved simulation; saturation takes precedence over film mode
    pub fn simulation(&self) -> Option<FilmSimulation> {
        self.saturation_simulation().or_else(|| self.film_mode_simulation())
    }
}

/// Resolves the film simulation of a Fujifilm maker note
///
/// Shorthand for [`SimulationResolver::new`] followed by
/// [`SimulationResolver::resolve`].
pub fn resolve_simulation(bytes: &[u8]) -> Result<Option<FilmSimulation>> {
    SimulationResolver::new().resolve(bytes)
}
