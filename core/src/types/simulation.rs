use crate::error::FilmsimError;
use std::fmt;
use std::str::FromStr;

use super::label::{label_for, SimulationLabel};

/// Family a film simulation belongs to
///
/// Families are disjoint: monochrome simulations are only ever derived from the
/// saturation tag, film modes only from the film mode tag, and custom presets are
/// never derived from maker note bytes at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "kebab-case"))]
pub enum SimulationFamily {
    /// Monochrome, sepia and ACROS renderings (saturation tag)
    Monochrome,
    /// Named color and tone modes (film mode tag)
    FilmMode,
    /// Presets named after film stocks, assigned outside the camera
    CustomPreset,
}

impl SimulationFamily {
    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            SimulationFamily::Monochrome => "monochrome",
            SimulationFamily::FilmMode => "film-mode",
            SimulationFamily::CustomPreset => "custom-preset",
        }
    }
}

impl fmt::Display for SimulationFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Fujifilm film simulation
///
/// Closed set of every simulation the resolver can produce or the validators accept.
/// Each variant has a unique kebab-case identifier (see [`FilmSimulation::as_str`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "json",
    serde(try_from = "String", into = "&'static str")
)]
pub enum FilmSimulation {
    // Saturation tag
    Monochrome,
    MonochromeYe,
    MonochromeR,
    MonochromeG,
    Sepia,
    Acros,
    AcrosYe,
    AcrosR,
    AcrosG,

    // Film mode tag
    Provia,
    Portrait,
    PortraitSaturation,
    Astia,
    PortraitSharpness,
    PortraitEx,
    Velvia,
    ProNegStd,
    ProNegHi,
    ClassicChrome,
    Eterna,
    ClassicNeg,
    EternaBleachBypass,
    NostalgicNeg,
    Reala,

    // Custom presets
    Portra400,
    Portra800,
    Hp5_400,
    Apx100,
    C200,
    Gold200,
    Ektar100,
    Superia400,
    Velvia50,
    TriX400,
    ProImage100,
    UltraMax400,
    Ektachrome100,
    CineStill800T,
    Silbersalz50D,
    Silbersalz200T,
    Silbersalz250D,
    Silbersalz500T,
}

impl FilmSimulation {
    /// Every film simulation, in label table order
    pub const ALL: [FilmSimulation; 42] = [
        FilmSimulation::Monochrome,
        FilmSimulation::MonochromeYe,
        FilmSimulation::MonochromeR,
        FilmSimulation::MonochromeG,
        FilmSimulation::Sepia,
        FilmSimulation::Acros,
        FilmSimulation::AcrosYe,
        FilmSimulation::AcrosR,
        FilmSimulation::AcrosG,
        FilmSimulation::Provia,
        FilmSimulation::Portrait,
        FilmSimulation::PortraitSaturation,
        FilmSimulation::Astia,
        FilmSimulation::PortraitSharpness,
        FilmSimulation::PortraitEx,
        FilmSimulation::Velvia,
        FilmSimulation::ProNegStd,
        FilmSimulation::ProNegHi,
        FilmSimulation::ClassicChrome,
        FilmSimulation::Eterna,
        FilmSimulation::ClassicNeg,
        FilmSimulation::EternaBleachBypass,
        FilmSimulation::NostalgicNeg,
        FilmSimulation::Reala,
        FilmSimulation::Portra400,
        FilmSimulation::Portra800,
        FilmSimulation::Hp5_400,
        FilmSimulation::Apx100,
        FilmSimulation::C200,
        FilmSimulation::Gold200,
        FilmSimulation::Ektar100,
        FilmSimulation::Superia400,
        FilmSimulation::Velvia50,
        FilmSimulation::TriX400,
        FilmSimulation::ProImage100,
        FilmSimulation::UltraMax400,
        FilmSimulation::Ektachrome100,
        FilmSimulation::CineStill800T,
        FilmSimulation::Silbersalz50D,
        FilmSimulation::Silbersalz200T,
        FilmSimulation::Silbersalz250D,
        FilmSimulation::Silbersalz500T,
    ];

    /// Returns the kebab-case identifier
    pub const fn as_str(&self) -> &'static str {
        match self {
            FilmSimulation::Monochrome => "monochrome",
            FilmSimulation::MonochromeYe => "monochrome-ye",
            FilmSimulation::MonochromeR => "monochrome-r",
            FilmSimulation::MonochromeG => "monochrome-g",
            FilmSimulation::Sepia => "sepia",
            FilmSimulation::Acros => "acros",
            FilmSimulation::AcrosYe => "acros-ye",
            FilmSimulation::AcrosR => "acros-r",
            FilmSimulation::AcrosG => "acros-g",
            FilmSimulation::Provia => "provia",
            FilmSimulation::Portrait => "portrait",
            FilmSimulation::PortraitSaturation => "portrait-saturation",
            FilmSimulation::Astia => "astia",
            FilmSimulation::PortraitSharpness => "portrait-sharpness",
            FilmSimulation::PortraitEx => "portrait-ex",
            FilmSimulation::Velvia => "velvia",
            FilmSimulation::ProNegStd => "pro-neg-std",
            FilmSimulation::ProNegHi => "pro-neg-hi",
            FilmSimulation::ClassicChrome => "classic-chrome",
            FilmSimulation::Eterna => "eterna",
            FilmSimulation::ClassicNeg => "classic-neg",
            FilmSimulation::EternaBleachBypass => "eterna-bleach-bypass",
            FilmSimulation::NostalgicNeg => "nostalgic-neg",
            FilmSimulation::Reala => "reala",
            FilmSimulation::Portra400 => "portra-400",
            FilmSimulation::Portra800 => "portra-800",
            FilmSimulation::Hp5_400 => "hp5-400",
            FilmSimulation::Apx100 => "apx-100",
            FilmSimulation::C200 => "c-200",
            FilmSimulation::Gold200 => "gold-200",
            FilmSimulation::Ektar100 => "ektar-100",
            FilmSimulation::Superia400 => "superia-400",
            FilmSimulation::Velvia50 => "velvia-50",
            FilmSimulation::TriX400 => "trix-400",
            FilmSimulation::ProImage100 => "proimage-100",
            FilmSimulation::UltraMax400 => "ultramax-400",
            FilmSimulation::Ektachrome100 => "ektachrome-100",
            FilmSimulation::CineStill800T => "cinestill-800t",
            FilmSimulation::Silbersalz50D => "silbersalz-50d",
            FilmSimulation::Silbersalz200T => "silbersalz-200t",
            FilmSimulation::Silbersalz250D => "silbersalz-250d",
            FilmSimulation::Silbersalz500T => "silbersalz-500t",
        }
    }

    /// Looks up a simulation by its exact (case-sensitive) identifier
    pub fn from_identifier(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|sim| sim.as_str() == s)
    }

    /// Returns the family this simulation belongs to
    pub fn family(&self) -> SimulationFamily {
        use FilmSimulation::*;
        match self {
            Monochrome | MonochromeYe | MonochromeR | MonochromeG | Sepia | Acros | AcrosYe
            | AcrosR | AcrosG => SimulationFamily::Monochrome,
            Provia | Portrait | PortraitSaturation | Astia | PortraitSharpness | PortraitEx
            | Velvia | ProNegStd | ProNegHi | ClassicChrome | Eterna | ClassicNeg
            | EternaBleachBypass | NostalgicNeg | Reala => SimulationFamily::FilmMode,
            Portra400 | Portra800 | Hp5_400 | Apx100 | C200 | Gold200 | Ektar100 | Superia400
            | Velvia50 | TriX400 | ProImage100 | UltraMax400 | Ektachrome100 | CineStill800T
            | Silbersalz50D | Silbersalz200T | Silbersalz250D | Silbersalz500T => {
                SimulationFamily::CustomPreset
            }
        }
    }

    /// Returns whether this is a monochrome rendering (including sepia)
    pub fn is_monochrome(&self) -> bool {
        matches!(self.family(), SimulationFamily::Monochrome)
    }

    /// Returns the display labels
    pub const fn label(&self) -> SimulationLabel {
        label_for(*self)
    }
}

impl fmt::Display for FilmSimulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FilmSimulation {
    type Err = FilmsimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_identifier(s).ok_or_else(|| FilmsimError::UnknownSimulation(s.to_string()))
    }
}

impl TryFrom<String> for FilmSimulation {
    type Error = FilmsimError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<FilmSimulation> for &'static str {
    fn from(sim: FilmSimulation) -> Self {
        sim.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identifiers_are_unique() {
        let ids: HashSet<&str> = FilmSimulation::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(ids.len(), FilmSimulation::ALL.len());
    }

    #[test]
    fn test_from_str_round_trips_display() {
        for sim in FilmSimulation::ALL {
            assert_eq!(sim.to_string().parse::<FilmSimulation>().unwrap(), sim);
        }
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert_eq!(
            "reala".parse::<FilmSimulation>().unwrap(),
            FilmSimulation::Reala
        );
        assert!("REALA".parse::<FilmSimulation>().is_err());
        assert!(matches!(
            "not-a-sim".parse::<FilmSimulation>(),
            Err(FilmsimError::UnknownSimulation(s)) if s == "not-a-sim"
        ));
    }

    #[test]
    fn test_family_sizes() {
        let count = |family: SimulationFamily| {
            FilmSimulation::ALL
                .iter()
                .filter(|s| s.family() == family)
                .count()
        };
        assert_eq!(count(SimulationFamily::Monochrome), 9);
        assert_eq!(count(SimulationFamily::FilmMode), 15);
        assert_eq!(count(SimulationFamily::CustomPreset), 18);
    }

    #[test]
    fn test_monochrome_family() {
        assert!(FilmSimulation::Sepia.is_monochrome());
        assert!(FilmSimulation::AcrosG.is_monochrome());
        assert!(!FilmSimulation::ClassicChrome.is_monochrome());
        // Black and white film stocks are still custom presets
        assert!(!FilmSimulation::TriX400.is_monochrome());
    }
}
