use crate::api::SimulationReading;
use crate::types::{FilmSimulation, LabelSize};
use std::fmt;

/// Text report formatter for a maker note reading
pub struct TextReport<'a> {
    reading: &'a SimulationReading,
    label_size: LabelSize,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(reading: &'a SimulationReading) -> Self {
        Self {
            reading,
            label_size: LabelSize::default(),
        }
    }

    /// Selects which label is printed
    pub fn with_label_size(mut self, label_size: LabelSize) -> Self {
        self.label_size = label_size;
        self
    }
}

fn code_line(code: Option<i64>, simulation: Option<FilmSimulation>) -> String {
    match (code, simulation) {
        (None, _) => "absent".to_string(),
        (Some(code), Some(sim)) => format!("{:#05x} ({})", code, sim),
        (Some(code), None) => format!("{:#05x} (unrecognised)", code),
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Film Simulation")?;
        writeln!(f, "===============")?;
        writeln!(f)?;

        match self.reading.simulation() {
            Some(sim) => {
                writeln!(f, "Simulation:      {}", sim)?;
                writeln!(f, "Label:           {}", sim.label().get(self.label_size))?;
                writeln!(f, "Family:          {}", sim.family())?;
            }
            None => writeln!(f, "Simulation:      unknown")?,
        }
        writeln!(f)?;

        writeln!(f, "Maker Note Codes")?;
        writeln!(f, "----------------")?;
        writeln!(
            f,
            "Saturation:      {}",
            code_line(
                self.reading.saturation_code,
                self.reading.saturation_simulation()
            )
        )?;
        writeln!(
            f,
            "Film Mode:       {}",
            code_line(
                self.reading.film_mode_code,
                self.reading.film_mode_simulation()
            )
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_report_format() {
        let reading = SimulationReading {
            saturation_code: Some(0x500),
            film_mode_code: Some(0x600),
        };

        let output = format!("{}", TextReport::new(&reading));

        assert!(output.contains("Film Simulation"));
        assert!(output.contains("Simulation:      acros"));
        assert!(output.contains("Label:           ACROS"));
        assert!(output.contains("Family:          monochrome"));
        assert!(output.contains("Saturation:      0x500 (acros)"));
        assert!(output.contains("Film Mode:       0x600 (classic-chrome)"));
    }

    #[test]
    fn test_text_report_label_size() {
        let reading = SimulationReading {
            saturation_code: None,
            film_mode_code: Some(0x000),
        };

        let output = format!(
            "{}",
            TextReport::new(&reading).with_label_size(LabelSize::Medium)
        );

        assert!(output.contains("Label:           PROVIA/Std"));
        assert!(output.contains("Saturation:      absent"));
    }

    #[test]
    fn test_text_report_unknown() {
        let reading = SimulationReading {
            saturation_code: Some(0x080),
            film_mode_code: None,
        };

        let output = format!("{}", TextReport::new(&reading));

        assert!(output.contains("Simulation:      unknown"));
        assert!(output.contains("Saturation:      0x080 (unrecognised)"));
        assert!(output.contains("Film Mode:       absent"));
    }
}
