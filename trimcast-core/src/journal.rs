use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::{Result, TrimcastError};

/// Free-text notes, one `YYYY-MM-DD - text` line per entry.
#[derive(Debug, Clone)]
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append a note. Blank text is skipped and reported as `false`.
    pub fn append(&self, date: NaiveDate, text: &str) -> Result<bool> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(false);
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(TrimcastError::JournalWrite)?;
        writeln!(file, "{} - {}", date.format("%Y-%m-%d"), text)
            .map_err(TrimcastError::JournalWrite)?;

        tracing::info!("Journal entry saved to {}", self.path.display());
        Ok(true)
    }
}
