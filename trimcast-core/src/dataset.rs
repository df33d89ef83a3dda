//! Dataset loading
//!
//! Reads the training CSV into memory and checks that every feature column and
//! the target column are present. Cell contents are kept as text: numeric
//! validation happens when the predictor builds its design matrix.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use csv::StringRecord;

use crate::error::{Result, TrimcastError};
use crate::models::{FEATURE_COLUMNS, TARGET_COLUMN};

/// Tabular training data as read from disk.
#[derive(Debug, Clone)]
pub struct Dataset {
    headers: Vec<String>,
    records: Vec<StringRecord>,
}

impl Dataset {
    /// Load and schema-check the dataset at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(TrimcastError::DatasetNotFound(path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };

        let dataset = Self::from_reader(file)?;
        tracing::info!(
            "Loaded dataset {} ({} rows)",
            path.display(),
            dataset.len()
        );
        Ok(dataset)
    }

    /// Parse CSV from any reader. The first row is the header.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

        let headers = rdr.headers()?.iter().map(str::to_string).collect();
        let records = rdr.records().collect::<std::result::Result<Vec<_>, _>>()?;

        let dataset = Self { headers, records };
        dataset.check_schema()?;
        Ok(dataset)
    }

    fn check_schema(&self) -> Result<()> {
        let missing: Vec<String> = FEATURE_COLUMNS
            .iter()
            .chain(std::iter::once(&TARGET_COLUMN))
            .filter(|name| self.column_index(name).is_none())
            .map(|name| name.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(TrimcastError::Schema { missing })
        }
    }

    /// Position of a named column in each record.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Raw cell text, `None` when the row is shorter than the header.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.records.get(row).and_then(|r| r.get(column))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Age,Exercise_Hours_per_Week,Daily_Water_Intake_L,Average_Sleep_Hours,Daily_Calories_Intake,Weight_Loss_1_Month_kg";

    #[test]
    fn test_load_complete_dataset() {
        let csv = format!("{HEADER}\n25,5,2.5,7,2000,1.2\n30,3,2.0,6,2200,0.3\n");
        let ds = Dataset::from_reader(csv.as_bytes()).expect("valid dataset");

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.column_index("Age"), Some(0));
        assert_eq!(ds.column_index("Weight_Loss_1_Month_kg"), Some(5));
        assert_eq!(ds.cell(1, 4), Some("2200"));
    }

    #[test]
    fn test_extra_columns_and_any_order_accepted() {
        let csv = "Name,Weight_Loss_1_Month_kg,Daily_Calories_Intake,Average_Sleep_Hours,Daily_Water_Intake_L,Exercise_Hours_per_Week,Age\n\
                   ann,1.0,2000,7,2,3,30\n";
        let ds = Dataset::from_reader(csv.as_bytes()).expect("valid dataset");
        assert_eq!(ds.column_index("Age"), Some(6));
        assert_eq!(ds.cell(0, 0), Some("ann"));
    }

    #[test]
    fn test_each_missing_column_is_named() {
        let required: Vec<&str> = HEADER.split(',').collect();
        for skip in 0..required.len() {
            let header: Vec<&str> = required
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, c)| *c)
                .collect();
            let csv = format!("{}\n1,2,3,4,5\n", header.join(","));

            match Dataset::from_reader(csv.as_bytes()) {
                Err(TrimcastError::Schema { missing }) => {
                    assert_eq!(missing, vec![required[skip].to_string()]);
                }
                other => panic!("expected schema error for {}, got {:?}", required[skip], other),
            }
        }
    }

    #[test]
    fn test_several_missing_columns_reported_together() {
        let csv = "Age,Daily_Water_Intake_L,Average_Sleep_Hours\n30,2,7\n";
        match Dataset::from_reader(csv.as_bytes()) {
            Err(TrimcastError::Schema { missing }) => assert_eq!(
                missing,
                vec![
                    "Exercise_Hours_per_Week".to_string(),
                    "Daily_Calories_Intake".to_string(),
                    "Weight_Loss_1_Month_kg".to_string(),
                ]
            ),
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_absent_file_is_dataset_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fitness_health_tracking.csv");

        match Dataset::load(&path) {
            Err(TrimcastError::DatasetNotFound(p)) => assert_eq!(p, path),
            other => panic!("expected DatasetNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_cells_are_not_rejected_here() {
        let csv = format!("{HEADER}\nabc,,2.5,7,2000,1.2\n");
        let ds = Dataset::from_reader(csv.as_bytes()).expect("loader does not type-check");
        assert_eq!(ds.cell(0, 0), Some("abc"));
        assert_eq!(ds.cell(0, 1), Some(""));
    }
}
