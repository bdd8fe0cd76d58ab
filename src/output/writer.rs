//! File writer
//!
//! The only place the crate touches the filesystem for output.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Persists rendered output
pub trait OutputWriter: Send + Sync {
    /// Create `path` and its parents if missing; an existing directory is fine
    fn ensure_directory(&self, path: &Path) -> Result<()>;

    /// Write `content` to `path`, replacing any existing file
    ///
    /// Returns the number of bytes written.
    fn write_file(&self, path: &Path, content: &str) -> Result<usize>;
}

/// Local filesystem writer
#[derive(Debug, Clone, Copy, Default)]
pub struct FsWriter;

impl FsWriter {
    /// Create a filesystem writer
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for FsWriter {
    fn ensure_directory(&self, path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Ok(());
        }
        // create_dir_all treats a directory created concurrently as success
        fs::create_dir_all(path).map_err(|e| Error::write(path, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<usize> {
        fs::write(path, content).map_err(|e| Error::write(path, e))?;
        Ok(content.len())
    }
}
