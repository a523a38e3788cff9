//! Size-capped trace file with numbered backups.
//!
//! The writer appends one OTLP document per line. Once the live file would
//! grow past its byte budget, it is shifted to `<file>.1`, older backups move
//! up one slot (`.1` → `.2` …), and the oldest beyond the retention limit is
//! removed.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotation threshold for the live trace file (5 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Number of rotated files kept next to the live one.
pub const MAX_BACKUP_FILES: usize = 3;

/// Open handle plus the number of bytes already in the live file.
#[derive(Debug)]
struct LiveFile {
    file: File,
    len: u64,
}

/// Thread-safe appending writer with size-based rotation.
pub struct RotatingWriter {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    live: Mutex<Option<LiveFile>>,
}

impl RotatingWriter {
    /// Writer with the default 5 MB budget and three backups.
    ///
    /// The file is opened lazily on the first write.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    #[must_use]
    pub const fn with_limits(path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            max_backups,
            live: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if it would not fit.
    ///
    /// A line larger than the whole budget is still written, into a fresh file.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when rotating, opening, or writing
    /// fails, or when the lock was poisoned by a panicking writer.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut live = self
            .live
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        let incoming = line.len() as u64 + 1;
        let current = match live.as_ref() {
            Some(open) => open.len,
            None => fs::metadata(&self.path).map_or(0, |m| m.len()),
        };

        if current > 0 && current + incoming > self.max_bytes {
            *live = None;
            self.rotate()?;
        }

        if live.is_none() {
            let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
            let len = file.metadata()?.len();
            *live = Some(LiveFile { file, len });
        }

        let open = live
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "trace file not open"))?;

        writeln!(open.file, "{line}")?;
        open.file.flush()?;
        open.len += incoming;

        Ok(())
    }

    /// Path of backup number `index` (1 = newest).
    #[must_use]
    pub fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    fn rotate(&self) -> io::Result<()> {
        if self.max_backups == 0 {
            return remove_if_exists(&self.path);
        }

        remove_if_exists(&self.backup_path(self.max_backups))?;
        for index in (1..self.max_backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }

        if self.path.exists() {
            fs::rename(&self.path, self.backup_path(1))?;
        }
        Ok(())
    }
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

impl std::fmt::Debug for RotatingWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingWriter")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingWriter::new(dir.path().join("trace.json"));

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(read(&dir.path().join("trace.json")), "{\"a\":1}\n{\"b\":2}\n");
        assert!(!writer.backup_path(1).exists());
    }

    #[test]
    fn rotates_when_budget_exceeded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = RotatingWriter::with_limits(path.clone(), 10, 2);

        writer.write_line("first").unwrap();
        writer.write_line("second").unwrap();

        assert_eq!(read(&path), "second\n");
        assert_eq!(read(&writer.backup_path(1)), "first\n");
    }

    #[test]
    fn keeps_only_configured_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = RotatingWriter::with_limits(path.clone(), 8, 2);

        for line in ["one----", "two----", "three--", "four---"] {
            writer.write_line(line).unwrap();
        }

        assert_eq!(read(&path), "four---\n");
        assert_eq!(read(&writer.backup_path(1)), "three--\n");
        assert_eq!(read(&writer.backup_path(2)), "two----\n");
        assert!(!writer.backup_path(3).exists());
    }

    #[test]
    fn picks_up_existing_file_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        fs::write(&path, "previous run\n").unwrap();

        let writer = RotatingWriter::with_limits(path.clone(), 16, 1);
        writer.write_line("next").unwrap();

        assert_eq!(read(&path), "next\n");
        assert_eq!(read(&writer.backup_path(1)), "previous run\n");
    }
}
