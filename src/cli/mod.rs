//! CLI module
//!
//! Command-line driver wiring the loader, encoders and exporter together.
//!
//! # Commands
//!
//! - `export` - Convert an input JSON file into every configured format
//! - `formats` - List supported formats and their default file names

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
