// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

//! # country-export
//!
//! Converts a collection of uniformly-shaped records (country reference
//! data) into compact JSON, Unicode JSON, CSV, XML and YAML files.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use country_export::{load_records, ExportConfig, Exporter, Result};
//!
//! fn main() -> Result<()> {
//!     let records = load_records("countries.json")?;
//!     let config = ExportConfig::default();
//!
//!     let exporter = Exporter::new(&config.output_dir);
//!     for report in exporter.export_all(&config.encoders(), &records) {
//!         println!("{}: {:?}", report.format, report.result);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐   ┌──────────────┐   ┌────────────────┐   ┌──────────┐
//! │  RecordSet │ → │  FieldSpec   │ → │ RecordEncoder  │ → │ Exporter │
//! │  (loader)  │   │ (projection) │   │ json csv xml   │   │ (writer) │
//! └────────────┘   └──────────────┘   │ yaml           │   └──────────┘
//!                                     └────────────────┘
//! ```

#![warn(clippy::all)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Record model, projection and flattening
pub mod record;

/// Format encoders (JSON, CSV, XML, YAML)
pub mod encode;

/// Writing encoded output to disk
pub mod output;

/// Export configuration
pub mod config;

/// JSON loader for record sets
pub mod loader;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ExportConfig;
pub use encode::RecordEncoder;
pub use error::{Error, Result};
pub use loader::{load_records, load_records_from_str};
pub use output::Exporter;
pub use record::{FieldSpec, RecordSet};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
