//! trimcast — interactive one-month weight loss projection
//!
//! Prompts for age, weekly exercise hours, daily water intake, sleep hours and
//! daily calories, refits a linear model on the configured dataset, prints the
//! projected loss, appends the session to the log, shows the recent trend and
//! offers an optional journal note.
//!
//! Settings come from `trimcast.toml` (or the file named by `TRIMCAST_CONFIG`)
//! plus `TRIMCAST_*` environment overrides. Diagnostics go to stderr and are
//! controlled by `RUST_LOG` on top of `logging.level`.

mod fields;
mod session;

use anyhow::Context;
use tracing_subscriber::{fmt, EnvFilter};
use trimcast_core::config::DEFAULT_CONFIG_FILE;
use trimcast_core::TrimcastConfig;

use session::{Outcome, Session};

fn main() -> anyhow::Result<()> {
    let config_path =
        std::env::var("TRIMCAST_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
    let config = TrimcastConfig::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path))?;

    // Init logging
    let level: tracing::Level = config.logging.level.parse().unwrap_or(tracing::Level::WARN);
    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    let today = chrono::Local::now().date_naive();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let outcome = Session::new(stdin.lock(), stdout.lock(), &config, today).run()?;

    if outcome == Outcome::Aborted {
        std::process::exit(1);
    }
    Ok(())
}
