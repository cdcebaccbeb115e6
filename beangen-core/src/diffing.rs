//! An output stream that only rewrites a file where its bytes change.

use std::{
    fs::{self, OpenOptions},
    io::{self, Read, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Incoming bytes are compared against the existing file.
    Comparing,
    /// A difference was found; incoming bytes are written through.
    Writing,
}

/// Writes to a file only from the first byte that differs from its
/// existing content.
///
/// While the output matches what is already on disk nothing is written, so
/// regenerating an unchanged artifact leaves the file untouched. The first
/// mismatching byte (or the first byte past the old end of file) switches
/// the writer into write-through mode for the rest of its life; everything
/// from that point on is rewritten even if later bytes would match again.
/// Finishing truncates the file when the new content is shorter.
///
/// # Example
///
/// ```no_run
/// use std::io::Write;
///
/// use beangen_core::DiffingFileWriter;
///
/// let mut out = DiffingFileWriter::open("Person.java")?;
/// out.write_all(b"public class Person {}\n")?;
/// let changed = out.finish()?;
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct DiffingFileWriter {
    file: fs::File,
    path: PathBuf,
    original_len: u64,
    position: u64,
    mode: Mode,
    changed: bool,
    finished: bool,
    scratch: Vec<u8>,
}

impl DiffingFileWriter {
    /// Open `path` for diffing writes, creating it if it does not exist.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;
        let original_len = file.metadata()?.len();
        Ok(Self {
            file,
            path,
            original_len,
            position: 0,
            mode: Mode::Comparing,
            changed: false,
            finished: false,
            scratch: Vec::new(),
        })
    }

    /// Path of the file being written.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True once any byte differed from the existing file.
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Number of bytes accepted so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Truncate leftover old content, flush, and report whether the file
    /// changed.
    pub fn finish(mut self) -> io::Result<bool> {
        self.finish_in_place()?;
        Ok(self.changed)
    }

    fn finish_in_place(&mut self) -> io::Result<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        if self.position < self.original_len {
            self.start_writing()?;
            self.file.set_len(self.position)?;
            log::debug!(
                "truncated {} from {} to {} bytes",
                self.path.display(),
                self.original_len,
                self.position
            );
        }
        if self.changed {
            self.file.flush()?;
        } else {
            log::debug!("{} is unchanged", self.path.display());
        }
        Ok(())
    }

    fn start_writing(&mut self) -> io::Result<()> {
        if self.mode == Mode::Writing {
            return Ok(());
        }
        log::debug!(
            "{} differs at byte {}, rewriting from there",
            self.path.display(),
            self.position
        );
        self.mode = Mode::Writing;
        self.changed = true;
        self.file.seek(SeekFrom::Start(self.position))?;
        Ok(())
    }

    /// Compare `buf` with the existing bytes at the current position and
    /// return how many leading bytes match.
    fn matching_prefix(&mut self, buf: &[u8]) -> io::Result<usize> {
        let available = self.original_len.saturating_sub(self.position);
        let n = (buf.len() as u64).min(available) as usize;
        if n == 0 {
            return Ok(0);
        }
        self.scratch.resize(n, 0);
        self.file.seek(SeekFrom::Start(self.position))?;
        self.file.read_exact(&mut self.scratch[..n])?;
        Ok(buf[..n]
            .iter()
            .zip(&self.scratch)
            .take_while(|(new, old)| new == old)
            .count())
    }
}

impl Write for DiffingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        let mut rest = buf;
        if self.mode == Mode::Comparing {
            let matched = self.matching_prefix(buf)?;
            self.position += matched as u64;
            if matched == buf.len() {
                return Ok(buf.len());
            }
            self.start_writing()?;
            rest = &buf[matched..];
        }
        self.file.write_all(rest)?;
        self.position += rest.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.mode {
            Mode::Writing => self.file.flush(),
            Mode::Comparing => Ok(()),
        }
    }
}

impl Drop for DiffingFileWriter {
    fn drop(&mut self) {
        if let Err(e) = self.finish_in_place() {
            log::warn!("failed to finish {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_all(path: &Path, chunks: &[&[u8]]) -> bool {
        let mut out = DiffingFileWriter::open(path).unwrap();
        for chunk in chunks {
            out.write_all(chunk).unwrap();
        }
        out.finish().unwrap()
    }

    #[test]
    fn test_identical_content_is_unchanged() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Same.java");
        fs::write(&path, "class Same {}\n").unwrap();

        let changed = write_all(&path, &[b"class ", b"Same {}", b"\n"]);

        assert!(!changed);
        assert_eq!(fs::read_to_string(&path).unwrap(), "class Same {}\n");
    }

    #[test]
    fn test_difference_rewrites_from_mismatch() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("A.java");
        fs::write(&path, "abcdef").unwrap();

        let changed = write_all(&path, &[b"abX", b"def"]);

        assert!(changed);
        assert_eq!(fs::read_to_string(&path).unwrap(), "abXdef");
    }

    #[test]
    fn test_shorter_content_truncates() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("A.java");
        fs::write(&path, "abcdef").unwrap();

        let changed = write_all(&path, &[b"abc"]);

        assert!(changed);
        assert_eq!(fs::read_to_string(&path).unwrap(), "abc");
    }

    #[test]
    fn test_longer_content_extends() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("A.java");
        fs::write(&path, "abc").unwrap();

        let changed = write_all(&path, &[b"ab", b"cdef"]);

        assert!(changed);
        assert_eq!(fs::read_to_string(&path).unwrap(), "abcdef");
    }

    #[test]
    fn test_new_file_is_created() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("New.java");

        let changed = write_all(&path, &[b"fresh"]);

        assert!(changed);
        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh");
    }

    #[test]
    fn test_write_mode_is_irreversible() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("A.java");
        fs::write(&path, "aaaa").unwrap();

        let mut out = DiffingFileWriter::open(&path).unwrap();
        out.write_all(b"b").unwrap();
        assert!(out.is_changed());
        out.write_all(b"aaa").unwrap();
        assert_eq!(out.position(), 4);
        assert!(out.finish().unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "baaa");
    }

    #[test]
    fn test_drop_finishes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("A.java");
        fs::write(&path, "long content").unwrap();
        {
            let mut out = DiffingFileWriter::open(&path).unwrap();
            out.write_all(b"long").unwrap();
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "long");
    }
}
