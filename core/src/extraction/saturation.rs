use crate::types::FilmSimulation;

/// Maps a saturation tag code to a monochrome-family simulation
///
/// Only the monochrome, sepia and ACROS codes are recognised. Every other
/// value (ordinary saturation settings, unknown codes, a missing tag) yields
/// `None`; that is a normal outcome, not an error.
pub fn simulation_from_saturation(code: Option<i64>) -> Option<FilmSimulation> {
    match code? {
        0x300 => Some(FilmSimulation::Monochrome),
        0x301 => Some(FilmSimulation::MonochromeR),
        0x302 => Some(FilmSimulation::MonochromeYe),
        0x303 => Some(FilmSimulation::MonochromeG),
        0x310 => Some(FilmSimulation::Sepia),
        0x500 => Some(FilmSimulation::Acros),
        0x501 => Some(FilmSimulation::AcrosR),
        0x502 => Some(FilmSimulation::AcrosYe),
        0x503 => Some(FilmSimulation::AcrosG),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SimulationFamily;
    use rstest::rstest;

    #[rstest]
    #[case(0x300, FilmSimulation::Monochrome)]
    #[case(0x301, FilmSimulation::MonochromeR)]
    #[case(0x302, FilmSimulation::MonochromeYe)]
    #[case(0x303, FilmSimulation::MonochromeG)]
    #[case(0x310, FilmSimulation::Sepia)]
    #[case(0x500, FilmSimulation::Acros)]
    #[case(0x501, FilmSimulation::AcrosR)]
    #[case(0x502, FilmSimulation::AcrosYe)]
    #[case(0x503, FilmSimulation::AcrosG)]
    fn test_known_codes(#[case] code: i64, #[case] expected: FilmSimulation) {
        assert_eq!(simulation_from_saturation(Some(code)), Some(expected));
        assert_eq!(expected.family(), SimulationFamily::Monochrome);
    }

    #[rstest]
    #[case(0x000)]
    #[case(0x080)]
    #[case(0x304)]
    #[case(0x999)]
    #[case(-1)]
    fn test_unknown_codes(#[case] code: i64) {
        assert_eq!(simulation_from_saturation(Some(code)), None);
    }

    #[test]
    fn test_missing_tag() {
        assert_eq!(simulation_from_saturation(None), None);
    }
}
