use anyhow::{Context, Result};
use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only log of failed behaviors.
pub struct ErrorJournal {
    path: PathBuf,
}

impl ErrorJournal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens, appends one line and closes the file again.
    pub fn record(&self, err: &dyn Display) -> Result<()> {
        let mut file = open_append(&self.path)
            .context(format!("Failed to open error log {:?}", self.path))?;
        writeln!(file, "Ошибка: {}", err)
            .context(format!("Failed to write error log {:?}", self.path))?;
        log::debug!("Recorded error in {:?}: {}", self.path, err);
        Ok(())
    }
}

#[cfg(unix)]
fn open_append(path: &Path) -> std::io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;
    OpenOptions::new()
        .append(true)
        .create(true)
        .mode(0o644)
        .open(path)
}

#[cfg(not(unix))]
fn open_append(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().append(true).create(true).open(path)
}
