//! Persistent list of past winners.
//!
//! The store is a plain text file with one name per line. A missing file is
//! treated as an empty history.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// A newline-delimited winners file.
#[derive(Clone, Debug)]
pub struct WinnerLog {
    path: PathBuf,
}

impl WinnerLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all recorded names, skipping blank lines.
    pub fn load(&self) -> Result<Vec<String>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read {}", self.path.display()));
            }
        };
        Ok(text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect())
    }

    /// Append one name. Line breaks inside the name are flattened to spaces.
    pub fn record(&self, name: &str) -> Result<()> {
        let line = name.replace(['\r', '\n'], " ");
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open {}", self.path.display()))?;
        writeln!(file, "{}", line.trim())
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}
