pub mod report;

use crate::types::LabelSize;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for filmsim
#[derive(Parser, Debug)]
#[command(name = "filmsim")]
#[command(about = "Fujifilm film simulation lookup tool")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(short, long, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Label shown for each simulation
    #[arg(short, long, default_value = "large", global = true)]
    pub label_size: LabelSizeArg,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the film simulation of a raw Fujifilm maker note dump
    Resolve {
        /// Path to the maker note (e.g. `exiftool -b -MakerNotes`)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// List every film simulation in display order
    List,

    /// Check whether a string is a known identifier or label
    Check {
        #[arg(value_name = "VALUE")]
        value: String,
    },
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}

/// Label size options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LabelSizeArg {
    /// Compact abbreviation
    Small,
    /// Short branded name
    Medium,
    /// Full descriptive name
    Large,
}

impl From<LabelSizeArg> for LabelSize {
    fn from(arg: LabelSizeArg) -> Self {
        match arg {
            LabelSizeArg::Small => LabelSize::Small,
            LabelSizeArg::Medium => LabelSize::Medium,
            LabelSizeArg::Large => LabelSize::Large,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::parse_from(["filmsim", "resolve", "note.bin", "--label-size", "small"]);
        assert!(matches!(
            cli.command,
            Command::Resolve { ref file } if file == &PathBuf::from("note.bin")
        ));
        assert_eq!(LabelSize::from(cli.label_size), LabelSize::Small);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_check_with_global_flags() {
        let cli = Cli::parse_from(["filmsim", "-v", "check", "REALA ACE", "--format", "json"]);
        assert!(matches!(cli.command, Command::Check { ref value } if value == "REALA ACE"));
        assert!(matches!(cli.format, OutputFormat::Json));
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
