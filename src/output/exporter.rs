//! Exporter: project, encode and persist

use super::writer::{FsWriter, OutputWriter};
use crate::encode::RecordEncoder;
use crate::error::Result;
use crate::record::RecordSet;
use crate::types::OutputFormat;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Name of the default output directory
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

/// `dist` next to the running executable, or `./dist` when that is unknown
pub fn default_output_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_OUTPUT_DIR)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
}

/// File name built from the current UTC time, e.g. `20250101120000.csv`
pub fn timestamp_file_name(format: OutputFormat) -> String {
    format!(
        "{}.{}",
        Utc::now().format("%Y%m%d%H%M%S"),
        format.extension()
    )
}

/// Outcome of saving one format
#[derive(Debug)]
pub struct ExportReport {
    /// Format that was encoded
    pub format: OutputFormat,
    /// Target file
    pub path: PathBuf,
    /// Bytes written, or why the format failed
    pub result: Result<usize>,
}

impl ExportReport {
    /// Whether the file was written
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Writes encoder output under one output directory
#[derive(Debug, Clone)]
pub struct Exporter<W: OutputWriter = FsWriter> {
    output_dir: PathBuf,
    writer: W,
}

impl Exporter<FsWriter> {
    /// Create an exporter writing to the local filesystem
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self::with_writer(output_dir, FsWriter::new())
    }
}

impl Default for Exporter<FsWriter> {
    fn default() -> Self {
        Self::new(default_output_dir())
    }
}

impl<W: OutputWriter> Exporter<W> {
    /// Create an exporter with a custom writer
    pub fn with_writer(output_dir: impl Into<PathBuf>, writer: W) -> Self {
        Self {
            output_dir: output_dir.into(),
            writer,
        }
    }

    /// Directory relative paths resolve against
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writer used to persist output
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Resolve the target path; `None` yields a timestamped name
    pub fn resolve(&self, output_path: Option<&Path>, format: OutputFormat) -> PathBuf {
        match output_path {
            Some(path) => self.output_dir.join(path),
            None => self.output_dir.join(timestamp_file_name(format)),
        }
    }

    /// Project, encode and write one format
    ///
    /// Returns the number of bytes written.
    pub fn save(
        &self,
        encoder: &dyn RecordEncoder,
        records: &RecordSet,
        output_path: Option<&Path>,
    ) -> Result<usize> {
        let path = self.resolve(output_path, encoder.format());
        self.save_to(encoder, records, &path)
    }

    fn save_to(&self, encoder: &dyn RecordEncoder, records: &RecordSet, path: &Path) -> Result<usize> {
        let content = encoder.encode_projected(records)?;

        if let Some(parent) = path.parent() {
            self.writer.ensure_directory(parent)?;
        }
        let bytes = self.writer.write_file(path, &content)?;

        info!(
            format = %encoder.format(),
            path = %path.display(),
            bytes,
            "saved"
        );
        Ok(bytes)
    }

    /// Save every encoder to its format's default file name
    ///
    /// A failing format is logged and reported; the rest still run.
    pub fn export_all(
        &self,
        encoders: &[Box<dyn RecordEncoder>],
        records: &RecordSet,
    ) -> Vec<ExportReport> {
        encoders
            .iter()
            .map(|encoder| {
                let format = encoder.format();
                let path = self.output_dir.join(format.default_file_name());
                let result = self.save_to(encoder.as_ref(), records, &path);
                if let Err(e) = &result {
                    warn!(%format, error = %e, "export failed");
                }
                ExportReport {
                    format,
                    path,
                    result,
                }
            })
            .collect()
    }
}
