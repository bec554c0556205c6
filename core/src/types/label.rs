use std::fmt;

use super::simulation::FilmSimulation;

/// Display labels for a film simulation at three verbosity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct SimulationLabel {
    /// Compact abbreviation (thumbnails, badges)
    pub small: &'static str,
    /// Short branded name
    pub medium: &'static str,
    /// Full descriptive name
    pub large: &'static str,
}

impl SimulationLabel {
    const fn new(small: &'static str, medium: &'static str, large: &'static str) -> Self {
        Self {
            small,
            medium,
            large,
        }
    }

    /// Returns the label at the requested size
    pub fn get(&self, size: LabelSize) -> &'static str {
        match size {
            LabelSize::Small => self.small,
            LabelSize::Medium => self.medium,
            LabelSize::Large => self.large,
        }
    }

    /// Returns all three labels, smallest first
    pub fn all(&self) -> [&'static str; 3] {
        [self.small, self.medium, self.large]
    }
}

impl fmt::Display for SimulationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.large)
    }
}

/// Label verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum LabelSize {
    Small,
    Medium,
    #[default]
    Large,
}

/// Returns the display labels for a film simulation
///
/// Total over [`FilmSimulation`]; adding a variant without a label fails to compile.
pub const fn label_for(sim: FilmSimulation) -> SimulationLabel {
    match sim {
        FilmSimulation::Monochrome => {
            SimulationLabel::new("Monochrome", "Monochrome", "Monochrome")
        }
        FilmSimulation::MonochromeYe => {
            SimulationLabel::new("Monochrome+Ye", "Monochrome+Ye", "Monochrome + Yellow Filter")
        }
        FilmSimulation::MonochromeR => {
            SimulationLabel::new("Monochrome+R", "Monochrome+R", "Monochrome + Red Filter")
        }
        FilmSimulation::MonochromeG => {
            SimulationLabel::new("Monochrome+G", "Monochrome+G", "Monochrome + Green Filter")
        }
        FilmSimulation::Sepia => SimulationLabel::new("Sepia", "Sepia", "Sepia"),
        FilmSimulation::Acros => SimulationLabel::new("ACROS", "ACROS", "ACROS"),
        FilmSimulation::AcrosYe => {
            SimulationLabel::new("ACROS+Ye", "ACROS+Ye", "ACROS + Yellow Filter")
        }
        FilmSimulation::AcrosR => SimulationLabel::new("ACROS+R", "ACROS+R", "ACROS + Red Filter"),
        FilmSimulation::AcrosG => {
            SimulationLabel::new("ACROS+G", "ACROS+G", "ACROS + Green Filter")
        }
        FilmSimulation::Provia => SimulationLabel::new("PROVIA", "PROVIA/Std", "PROVIA / Standard"),
        FilmSimulation::Portrait => SimulationLabel::new("Portrait", "Portrait", "Studio Portrait"),
        FilmSimulation::PortraitSaturation => SimulationLabel::new(
            "Portrait+Sat.",
            "Portrait+Sat.",
            "Studio Portrait + Enhanced Saturation",
        ),
        FilmSimulation::Astia => SimulationLabel::new("ASTIA", "ASTIA/Soft", "ASTIA / Soft"),
        FilmSimulation::PortraitSharpness => SimulationLabel::new(
            "Portrait+Sharp.",
            "Portrait+Sharp.",
            "Studio Portrait + Enhanced Sharpness",
        ),
        FilmSimulation::PortraitEx => {
            SimulationLabel::new("Portrait+Ex", "Portrait+Ex", "Studio Portrait + Ex")
        }
        FilmSimulation::Velvia => SimulationLabel::new("Velvia", "Velvia/Vivid", "Velvia / Vivid"),
        FilmSimulation::ProNegStd => {
            SimulationLabel::new("PRO Neg. Std", "PRO Neg. Std", "PRO Neg. Std")
        }
        FilmSimulation::ProNegHi => {
            SimulationLabel::new("PRO Neg. Hi", "PRO Neg. Hi", "PRO Neg. Hi")
        }
        FilmSimulation::ClassicChrome => {
            SimulationLabel::new("Classic Chrome", "Classic Chrome", "Classic Chrome")
        }
        FilmSimulation::Eterna => {
            SimulationLabel::new("ETERNA", "ETERNA/Cinema", "ETERNA / Cinema")
        }
        FilmSimulation::ClassicNeg => {
            SimulationLabel::new("Classic Neg.", "Classic Neg.", "Classic Neg.")
        }
        FilmSimulation::EternaBleachBypass => {
            SimulationLabel::new("ETERNA Bypass", "ETERNA Bypass", "ETERNA Bleach Bypass")
        }
        FilmSimulation::NostalgicNeg => {
            SimulationLabel::new("Nostalgic Neg.", "Nostalgic Neg.", "Nostalgic Neg.")
        }
        FilmSimulation::Reala => SimulationLabel::new("REALA", "REALA ACE", "REALA ACE"),
        FilmSimulation::Portra400 => {
            SimulationLabel::new("Portra 400", "Kodak Portra 400", "Kodak Portra 400")
        }
        FilmSimulation::Portra800 => {
            SimulationLabel::new("Portra 800", "Kodak Portra 800", "Kodak Portra 800")
        }
        FilmSimulation::Hp5_400 => {
            SimulationLabel::new("HP5 400", "Ilford HP5 400", "Ilford HP5 Plus 400")
        }
        FilmSimulation::Apx100 => SimulationLabel::new("APX 100", "Agfa APX 100", "Agfa APX 100"),
        FilmSimulation::C200 => {
            SimulationLabel::new("C200", "Fuji Color 200", "Fujifilm Color 200")
        }
        FilmSimulation::Gold200 => {
            SimulationLabel::new("Gold 200", "Kodak Gold 200", "Kodak Gold 200")
        }
        FilmSimulation::Ektar100 => {
            SimulationLabel::new("Ektar 100", "Kodak Ektar 100", "Kodak Ektar 100")
        }
        FilmSimulation::Superia400 => {
            SimulationLabel::new("Superia 400", "Fuji Superia 400", "Fujifilm Superia X-TRA 400")
        }
        FilmSimulation::Velvia50 => {
            SimulationLabel::new("Velvia 50", "Fuji Velvia 50", "Fujifilm Velvia 50")
        }
        FilmSimulation::TriX400 => {
            SimulationLabel::new("Tri-X 400", "Kodak Tri-X 400", "Kodak Tri-X 400")
        }
        FilmSimulation::ProImage100 => {
            SimulationLabel::new("ProImage 100", "Kodak ProImage 100", "Kodak ProImage 100")
        }
        FilmSimulation::UltraMax400 => {
            SimulationLabel::new("UltraMax 400", "Kodak UltraMax 400", "Kodak UltraMax 400")
        }
        FilmSimulation::Ektachrome100 => {
            SimulationLabel::new("Ektachrome 100", "Kodak Ektachrome 100", "Kodak Ektachrome 100")
        }
        FilmSimulation::CineStill800T => {
            SimulationLabel::new("CineStill 800T", "CineStill 800T", "CineStill 800T")
        }
        FilmSimulation::Silbersalz50D => {
            SimulationLabel::new("Silbersalz 50D", "Silbersalz 50D", "Silbersalz 50D")
        }
        FilmSimulation::Silbersalz200T => {
            SimulationLabel::new("Silbersalz 200T", "Silbersalz 200T", "Silbersalz 200T")
        }
        FilmSimulation::Silbersalz250D => {
            SimulationLabel::new("Silbersalz 250D", "Silbersalz 250D", "Silbersalz 250D")
        }
        FilmSimulation::Silbersalz500T => {
            SimulationLabel::new("Silbersalz 500T", "Silbersalz 500T", "Silbersalz 500T")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_non_empty() {
        for sim in FilmSimulation::ALL {
            for label in label_for(sim).all() {
                assert!(!label.is_empty(), "{} has an empty label", sim);
                assert_eq!(label, label.trim(), "{} label has stray whitespace", sim);
            }
        }
    }

    #[test]
    fn test_reala_label() {
        let label = label_for(FilmSimulation::Reala);
        assert_eq!(label.small, "REALA");
        assert_eq!(label.medium, "REALA ACE");
        assert_eq!(label.large, "REALA ACE");
    }

    #[test]
    fn test_label_size_selection() {
        let label = FilmSimulation::Provia.label();
        assert_eq!(label.get(LabelSize::Small), "PROVIA");
        assert_eq!(label.get(LabelSize::Medium), "PROVIA/Std");
        assert_eq!(label.get(LabelSize::Large), "PROVIA / Standard");
        assert_eq!(label.get(LabelSize::default()), label.large);
        assert_eq!(label.to_string(), "PROVIA / Standard");
    }
}
