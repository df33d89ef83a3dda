use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrimcastError {
    #[error("Please enter a valid numeric value for {field} (got {value:?})")]
    InputParse { field: String, value: String },

    #[error("Dataset file not found: {}", .0.display())]
    DatasetNotFound(PathBuf),

    #[error("Missing columns in dataset: {missing:?}")]
    Schema { missing: Vec<String> },

    #[error("Training error: {0}")]
    Training(String),

    #[error("Could not write session log: {0}")]
    LogWrite(#[source] csv::Error),

    #[error("Could not write journal: {0}")]
    JournalWrite(#[source] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TrimcastError>;
