//! Output module
//!
//! Persists encoder output to disk.
//!
//! # Overview
//!
//! This module provides:
//! - `OutputWriter` - directory creation and file writes, with `FsWriter`
//!   as the filesystem implementation
//! - `Exporter` - project, encode and write one or many formats
//! - Default output directory and timestamped file names

mod exporter;
mod writer;

pub use exporter::{default_output_dir, timestamp_file_name, ExportReport, Exporter};
pub use writer::{FsWriter, OutputWriter};
