use crate::types::FilmSimulation;

/// Maps a film mode tag code to a film-mode-family simulation
///
/// Both 0x200 and 0x400 are Velvia: older bodies record the same mode under
/// either value. Unknown codes and a missing tag yield `None`.
pub fn simulation_from_film_mode(code: Option<i64>) -> Option<FilmSimulation> {
    match code? {
        0x000 => Some(FilmSimulation::Provia),
        0x100 => Some(FilmSimulation::Portrait),
        0x110 => Some(FilmSimulation::PortraitSaturation),
        // Also reported as "portrait skin tone"
        0x120 => Some(FilmSimulation::Astia),
        0x130 => Some(FilmSimulation::PortraitSharpness),
        0x300 => Some(FilmSimulation::PortraitEx),
        0x200 | 0x400 => Some(FilmSimulation::Velvia),
        0x500 => Some(FilmSimulation::ProNegStd),
        0x501 => Some(FilmSimulation::ProNegHi),
        0x600 => Some(FilmSimulation::ClassicChrome),
        0x700 => Some(FilmSimulation::Eterna),
        0x800 => Some(FilmSimulation::ClassicNeg),
        0x900 => Some(FilmSimulation::EternaBleachBypass),
        0xa00 => Some(FilmSimulation::NostalgicNeg),
        0xb00 => Some(FilmSimulation::Reala),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SimulationFamily;
    use rstest::rstest;

    #[rstest]
    #[case(0x000, FilmSimulation::Provia)]
    #[case(0x100, FilmSimulation::Portrait)]
    #[case(0x110, FilmSimulation::PortraitSaturation)]
    #[case(0x120, FilmSimulation::Astia)]
    #[case(0x130, FilmSimulation::PortraitSharpness)]
    #[case(0x300, FilmSimulation::PortraitEx)]
    #[case(0x200, FilmSimulation::Velvia)]
    #[case(0x400, FilmSimulation::Velvia)]
    #[case(0x500, FilmSimulation::ProNegStd)]
    #[case(0x501, FilmSimulation::ProNegHi)]
    #[case(0x600, FilmSimulation::ClassicChrome)]
    #[case(0x700, FilmSimulation::Eterna)]
    #[case(0x800, FilmSimulation::ClassicNeg)]
    #[case(0x900, FilmSimulation::EternaBleachBypass)]
    #[case(0xa00, FilmSimulation::NostalgicNeg)]
    #[case(0xb00, FilmSimulation::Reala)]
    fn test_known_codes(#[case] code: i64, #[case] expected: FilmSimulation) {
        assert_eq!(simulation_from_film_mode(Some(code)), Some(expected));
        assert_eq!(expected.family(), SimulationFamily::FilmMode);
    }

    #[rstest]
    #[case(0x310)]
    #[case(0x502)]
    #[case(0xc00)]
    #[case(0x999)]
    fn test_unknown_codes(#[case] code: i64) {
        assert_eq!(simulation_from_film_mode(Some(code)), None);
    }

    #[test]
    fn test_missing_tag() {
        assert_eq!(simulation_from_film_mode(None), None);
    }

    #[test]
    fn test_every_film_mode_is_reachable() {
        let codes = [
            0x000, 0x100, 0x110, 0x120, 0x130, 0x300, 0x200, 0x500, 0x501, 0x600, 0x700, 0x800,
            0x900, 0xa00, 0xb00,
        ];
        let produced: std::collections::HashSet<_> = codes
            .iter()
            .filter_map(|&c| simulation_from_film_mode(Some(c)))
            .collect();
        assert_eq!(produced.len(), 15);
    }
}
