pub mod config;
pub mod dataset;
pub mod error;
pub mod journal;
pub mod models;
pub mod outlook;
pub mod predictor;
pub mod session_log;
pub mod trend;

pub use config::TrimcastConfig;
pub use dataset::Dataset;
pub use error::TrimcastError;
pub use journal::Journal;
pub use models::{SessionLogEntry, UserQuery};
pub use outlook::Outlook;
pub use predictor::{fit_and_predict, LinearModel};
pub use session_log::SessionLog;
pub use trend::{TrendBar, TrendReporter};
