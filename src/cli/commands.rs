//! CLI commands and argument parsing

use crate::types::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Country reference data exporter
#[derive(Parser, Debug)]
#[command(name = "country-export")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Export configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a JSON array of records into the selected formats
    Export {
        /// Input JSON file
        input: PathBuf,

        /// Output directory (default: dist next to the executable)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Fields to keep (comma-separated, empty = all)
        #[arg(long)]
        fields: Option<String>,

        /// Formats to write (repeatable, default = all)
        #[arg(short, long = "format", value_enum)]
        formats: Vec<OutputFormat>,
    },

    /// List supported formats
    Formats,
}
