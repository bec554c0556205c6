use clap::Parser;
use filmsim_core::cli::{Cli, Command, OutputFormat};
use filmsim_core::{
    form_options, is_known_identifier, is_known_label, simulation_for_label, FilmsimError,
    LabelSize, SimulationReading, SimulationResolver, TextReport,
};
use log::{error, info};
use std::path::Path;
use std::process;

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    let label_size: LabelSize = cli.label_size.into();

    match cli.command {
        Command::Resolve { file } => {
            info!("Reading maker note: {}", file.display());
            let reading = match read_maker_note(&file) {
                Ok(reading) => reading,
                Err(e) => {
                    error!("Failed to read {}: {}", file.display(), e);
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
            };
            output_reading(&reading, label_size, cli.format);
        }
        Command::List => output_list(label_size, cli.format),
        Command::Check { value } => output_check(&value, cli.format),
    }
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}

/// Reads a raw maker note dump and extracts its simulation codes
fn read_maker_note(path: &Path) -> Result<SimulationReading, FilmsimError> {
    let bytes = std::fs::read(path)?;
    info!("Read {} bytes", bytes.len());
    SimulationResolver::new().read(&bytes)
}

fn output_reading(reading: &SimulationReading, label_size: LabelSize, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            let report = TextReport::new(reading).with_label_size(label_size);
            print!("{}", report);
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                let value = serde_json::json!({
                    "simulation": reading.simulation(),
                    "label": reading.simulation().map(|sim| sim.label().get(label_size)),
                    "reading": reading,
                });
                print_json(&value);
            }
            #[cfg(not(feature = "json"))]
            json_unavailable();
        }
    }
}

fn output_list(label_size: LabelSize, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            for option in form_options() {
                println!(
                    "{:<22} {}",
                    option.value.as_str(),
                    option.value.label().get(label_size)
                );
            }
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            print_json(&serde_json::json!(form_options()));
            #[cfg(not(feature = "json"))]
            json_unavailable();
        }
    }
}

fn output_check(value: &str, format: OutputFormat) {
    let identifier = is_known_identifier(value);
    let label = is_known_label(value);
    let matched = simulation_for_label(value);

    match format {
        OutputFormat::Text => {
            println!("Identifier: {}", if identifier { "yes" } else { "no" });
            match matched {
                Some(sim) if label => println!("Label:      yes ({})", sim),
                _ => println!("Label:      no"),
            }
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            print_json(&serde_json::json!({
                "value": value,
                "is_identifier": identifier,
                "is_label": label,
                "simulation": matched,
            }));
            #[cfg(not(feature = "json"))]
            json_unavailable();
        }
    }
}

#[cfg(feature = "json")]
fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("Failed to serialize to JSON: {}", e);
            eprintln!("Error: Failed to serialize to JSON: {}", e);
            process::exit(1);
        }
    }
}

#[cfg(not(feature = "json"))]
fn json_unavailable() {
    eprintln!("Error: JSON output requires the 'json' feature");
    eprintln!("Rebuild with: cargo build --features json");
    process::exit(1);
}
