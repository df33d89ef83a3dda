//! Append-only CSV log of past sessions.
//!
//! The header row is written only when the file is empty or absent. Existing
//! rows are never rewritten. The file is opened per call and closed right after.

use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Result, TrimcastError};
use crate::models::SessionLogEntry;

#[derive(Debug, Clone)]
pub struct SessionLog {
    path: PathBuf,
}

impl SessionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one row, creating the file (with header) if needed.
    pub fn append(&self, entry: &SessionLogEntry) -> Result<()> {
        self.write_row(entry).map_err(TrimcastError::LogWrite)?;
        tracing::info!("Session logged to {}", self.path.display());
        Ok(())
    }

    fn write_row(&self, entry: &SessionLogEntry) -> std::result::Result<(), csv::Error> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let needs_header = file.metadata()?.len() == 0;

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        wtr.serialize(entry)?;
        wtr.flush()?;
        Ok(())
    }

    /// All logged sessions in append order. An absent file reads as empty.
    pub fn entries(&self) -> Result<Vec<SessionLogEntry>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut rdr = csv::Reader::from_reader(file);
        let entries = rdr
            .deserialize()
            .collect::<std::result::Result<Vec<SessionLogEntry>, _>>()?;
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserQuery;
    use chrono::NaiveDate;

    fn entry(day: u32, prediction: f64) -> SessionLogEntry {
        let query = UserQuery {
            age: 30 + day as i64,
            exercise_hours: 4.5,
            water_litres: 2.25,
            sleep_hours: 7.0,
            calories: 2100,
        };
        SessionLogEntry::new(
            NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
            &query,
            prediction,
        )
    }

    // ========================================================================
    // TEST 1: N appends -> header + N rows, read back in order
    // ========================================================================
    #[test]
    fn test_append_writes_single_header_and_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let log = SessionLog::new(dir.path().join("weight_loss_log.csv"));
        let written: Vec<SessionLogEntry> = (1..=4)
            .map(|d| entry(d, 0.1 * d as f64 - 0.25))
            .collect();

        for e in &written {
            log.append(e).expect("append should succeed");
        }

        let text = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), written.len() + 1, "header + one line per session");
        assert_eq!(lines[0], "Date,Age,Exercise,Water,Sleep,Calories,Prediction");
        assert!(lines[1].starts_with("2026-10-01,31,"), "got {}", lines[1]);

        let read = log.entries().unwrap();
        assert_eq!(read, written);
    }

    // ========================================================================
    // TEST 2: existing rows are kept when a new session is appended
    // ========================================================================
    #[test]
    fn test_append_to_existing_log_does_not_rewrite_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");
        std::fs::write(
            &path,
            "Date,Age,Exercise,Water,Sleep,Calories,Prediction\n2026-09-30,40,1,1.5,5,2500,-0.5\n",
        )
        .unwrap();
        let log = SessionLog::new(&path);

        log.append(&entry(1, 1.0)).unwrap();

        let entries = log.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].date, NaiveDate::from_ymd_opt(2026, 9, 30).unwrap());
        assert_eq!(entries[0].prediction, -0.5);
        assert_eq!(entries[1].prediction, 1.0);
    }

    #[test]
    fn test_empty_file_gets_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");
        std::fs::write(&path, "").unwrap();

        SessionLog::new(&path).append(&entry(2, 0.3)).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Date,"), "got {}", text);
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_absent_log_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let log = SessionLog::new(dir.path().join("never_written.csv"));
        assert!(log.entries().unwrap().is_empty());
    }

    #[test]
    fn test_unwritable_location_is_log_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let log = SessionLog::new(dir.path().join("missing_dir").join("log.csv"));
        let result = log.append(&entry(3, 0.0));
        assert!(
            matches!(result, Err(TrimcastError::LogWrite(_))),
            "expected LogWrite, got {:?}",
            result
        );
    }
}
