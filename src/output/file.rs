//! Append-mode file sink.

use super::Sink;
use crate::internal;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Opened once, held until drop. The mutex keeps concurrent lines whole.
#[derive(Debug)]
pub struct FileSink {
    name: String,
    path: PathBuf,
    file: Mutex<File>,
}

impl FileSink {
    /// Expands `~`, creates missing parent directories, and opens `path` for appending.
    ///
    /// # Errors
    /// Directory creation or open failures.
    pub fn open(path: &str) -> Result<Self, crate::Error> {
        let expanded = shellexpand::tilde(path);
        let path = PathBuf::from(expanded.as_ref());

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            if let Err(e) = fs::create_dir_all(parent) {
                internal::error(
                    "file",
                    &format!("Failed to create directory {}: {e}", parent.display()),
                );
                return Err(e.into());
            }
            internal::debug("file", &format!("Created directory: {}", parent.display()));
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        internal::debug("file", &format!("Opened log file: {}", path.display()));

        Ok(Self {
            name: path.display().to_string(),
            path,
            file: Mutex::new(file),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn write(&self, text: &str) -> io::Result<()> {
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        // Single write per line keeps appends from different processes whole.
        file.write_all(text.as_bytes())
    }

    fn flush(&self) -> io::Result<()> {
        self.file
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()
    }
}
