//! JSON artifact writing

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tempfile::NamedTempFile;

/// Write `value` as compact JSON, replacing `path` atomically
///
/// The document goes to a temporary file in the same directory and is
/// persisted over `path` only once fully written. On any failure the
/// temporary file is removed, so neither a truncated artifact nor a stray
/// temp file is left behind. Non-ASCII text is written as UTF-8, not escaped.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            ensure_dir(parent)?;
            parent
        }
        None => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        serde_json::to_writer(&mut writer, value)
            .with_context(|| format!("Failed to serialize {}", path.display()))?;
        writer.flush().with_context(|| format!("Failed to write {}", path.display()))?;
    }

    temp.persist(path)
        .with_context(|| format!("Failed to move {} into place", path.display()))?;

    Ok(())
}

/// Create `dir` and any missing parents
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))
}
