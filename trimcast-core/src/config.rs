use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Config file read when `TRIMCAST_CONFIG` is not set.
pub const DEFAULT_CONFIG_FILE: &str = "trimcast.toml";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TrimcastConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PathsConfig {
    pub dataset: String,
    pub session_log: String,
    pub journal: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            dataset: "fitness_health_tracking.csv".to_string(),
            session_log: "weight_loss_log.csv".to_string(),
            journal: "weight_loss_journal.txt".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ReportConfig {
    /// Predictions below this (and not negative) count as "stable".
    pub stable_threshold_kg: f64,
    /// Trend bar characters per kg.
    pub bar_scale: f64,
    pub average_window: usize,
    pub trend_window: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            stable_threshold_kg: 0.5,
            bar_scale: 2.0,
            average_window: 7,
            trend_window: 10,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl TrimcastConfig {
    /// Load from an optional TOML file, then apply `TRIMCAST_*` environment
    /// overrides (`TRIMCAST_PATHS__DATASET=...`).
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("TRIMCAST")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;
        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_when_file_absent() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let cfg = TrimcastConfig::load(missing.to_str().unwrap()).expect("absent file is fine");

        assert_eq!(cfg.paths.dataset, "fitness_health_tracking.csv");
        assert_eq!(cfg.report.stable_threshold_kg, 0.5);
        assert_eq!(cfg.report.bar_scale, 2.0);
        assert_eq!(cfg.report.average_window, 7);
        assert_eq!(cfg.report.trend_window, 10);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trimcast.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "[report]\nbar_scale = 4.0\n\n[paths]\njournal = \"notes.txt\"").unwrap();

        let cfg = TrimcastConfig::load(path.to_str().unwrap()).expect("valid config");

        assert_eq!(cfg.report.bar_scale, 4.0);
        assert_eq!(cfg.report.stable_threshold_kg, 0.5);
        assert_eq!(cfg.paths.journal, "notes.txt");
        assert_eq!(cfg.paths.session_log, "weight_loss_log.csv");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[report\nbar_scale = ").unwrap();

        assert!(TrimcastConfig::load(path.to_str().unwrap()).is_err());
    }
}
