use std::{
    io::Write,
    path::{Path, PathBuf},
};

use crate::{DiffingFileWriter, Error, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, touching only the bytes that changed
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        if write_file(&path, &self.render())? {
            Ok(WriteResult::Written)
        } else {
            Ok(WriteResult::Unchanged)
        }
    }
}

/// Write `content` through a [`DiffingFileWriter`], creating parent
/// directories. Returns whether the file changed.
fn write_file(path: &Path, content: &str) -> Result<bool> {
    let wrap = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(wrap)?;
    }
    let mut out = DiffingFileWriter::open(path).map_err(wrap)?;
    out.write_all(content.as_bytes()).map_err(wrap)?;
    let changed = out.finish().map_err(wrap)?;
    log::debug!(
        "{} {}",
        if changed { "wrote" } else { "kept" },
        path.display()
    );
    Ok(changed)
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File content changed on disk
    Written,
    /// File already held identical content and was not touched
    Unchanged,
}
