use crate::error::StorageError;
use serde::Serialize;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Writes the JSON metrics file.
pub struct MetricsStore;

impl MetricsStore {
    /// Serializes `record` as pretty JSON to `path`.
    ///
    /// The JSON goes to a temp file in the same directory which is then
    /// renamed over `path`, so readers see either the old file or the full
    /// new one. Parent directories are created if needed.
    ///
    /// # Errors
    /// Returns error if the directory or temp file cannot be created, or if
    /// serialization or the final rename fails.
    pub fn write<T: Serialize>(path: &Path, record: &T) -> Result<(), StorageError> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let mut tmp = NamedTempFile::new_in(parent)?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, record)?;
            writer.flush()?;
        }
        tmp.persist(path).map_err(|e| e.error)?;

        debug!(path = %path.display(), "Wrote metrics file");
        Ok(())
    }
}
