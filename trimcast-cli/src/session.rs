//! One interactive session, driven as a state machine:
//!
//! CollectingInput → Validating → Predicting → Reporting → Done
//!
//! `Aborted` is reachable from CollectingInput (unparseable entry) and
//! Predicting (dataset or training failure). Neither retries. Failures inside
//! Reporting (session log, trend, journal) are printed and skipped.

use std::io::{self, BufRead, Write};
use std::path::Path;

use chrono::NaiveDate;
use trimcast_core::{
    fit_and_predict, Dataset, Journal, Outlook, SessionLog, SessionLogEntry, TrendReporter,
    TrimcastConfig, TrimcastError, UserQuery,
};

use crate::fields::{query_from, values_of, FieldValue, FIELDS};

const DISCLAIMER: &str =
    "Note: This is a prediction based on historical data and may not reflect individual variations.";

#[derive(Debug)]
enum State {
    CollectingInput,
    Validating(UserQuery),
    Predicting(UserQuery),
    Reporting { query: UserQuery, prediction: f64 },
    Done,
    Aborted,
}

/// Terminal state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Aborted,
}

pub struct Session<'a, R, W> {
    input: R,
    out: W,
    config: &'a TrimcastConfig,
    today: NaiveDate,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(input: R, out: W, config: &'a TrimcastConfig, today: NaiveDate) -> Self {
        Self {
            input,
            out,
            config,
            today,
        }
    }

    /// Run to a terminal state. Only console I/O failures surface as `Err`.
    pub fn run(mut self) -> io::Result<Outcome> {
        let mut state = State::CollectingInput;
        loop {
            tracing::debug!("session state: {:?}", state);
            state = match state {
                State::CollectingInput => self.collect_input()?,
                State::Validating(query) => self.validate(query)?,
                State::Predicting(query) => self.predict(query)?,
                State::Reporting { query, prediction } => self.report(&query, prediction)?,
                State::Done => return Ok(Outcome::Done),
                State::Aborted => return Ok(Outcome::Aborted),
            };
        }
    }

    // ========================================================================
    // CollectingInput
    // ========================================================================

    fn collect_input(&mut self) -> io::Result<State> {
        writeln!(self.out, "=== Weight Loss Prediction System ===")?;
        writeln!(self.out, "Please enter your information:")?;

        let mut values = [FieldValue::Integer(0); 5];
        for (slot, field) in values.iter_mut().zip(FIELDS.iter()) {
            let raw = self.prompt(field.prompt)?.unwrap_or_default();
            match field.parse_value(&raw) {
                Ok(v) => *slot = v,
                Err(e) => {
                    tracing::warn!("Input aborted: {}", e);
                    writeln!(self.out, "Error: {}", e)?;
                    writeln!(self.out, "Failed to get user input. Please try again.")?;
                    return Ok(State::Aborted);
                }
            }
        }

        Ok(State::Validating(query_from(values)))
    }

    // ========================================================================
    // Validating
    // ========================================================================

    fn validate(&mut self, query: UserQuery) -> io::Result<State> {
        for (field, value) in FIELDS.iter().zip(query.features()) {
            if let Some(warning) = field.check(value) {
                tracing::warn!("{} out of range: {}", field.name, value);
                writeln!(self.out, "Warning: {}", warning)?;
            }
        }
        Ok(State::Predicting(query))
    }

    // ========================================================================
    // Predicting
    // ========================================================================

    fn predict(&mut self, query: UserQuery) -> io::Result<State> {
        writeln!(self.out, "\n=== Your Input ===")?;
        for (field, value) in FIELDS.iter().zip(values_of(&query)) {
            writeln!(self.out, "{}: {}{}", field.label, value, field.unit)?;
        }

        writeln!(self.out, "\n=== Processing Prediction ===")?;
        let dataset_path = Path::new(&self.config.paths.dataset);
        let result = Dataset::load(dataset_path).and_then(|ds| fit_and_predict(&ds, &query));

        match result {
            Ok(prediction) => {
                tracing::info!("Prediction: {:.4} kg", prediction);
                Ok(State::Reporting { query, prediction })
            }
            Err(e) => {
                tracing::warn!("Prediction failed: {}", e);
                writeln!(self.out, "Error: {}", e)?;
                writeln!(
                    self.out,
                    "Failed to make prediction. Please check your data file and try again."
                )?;
                Ok(State::Aborted)
            }
        }
    }

    // ========================================================================
    // Reporting
    // ========================================================================

    fn report(&mut self, query: &UserQuery, prediction: f64) -> io::Result<State> {
        let config = self.config;
        let report = &config.report;

        writeln!(self.out, "\n=== Prediction Result ===")?;
        writeln!(
            self.out,
            "Predicted weight loss in 1 month: {:.2} kg",
            prediction
        )?;
        let outlook = Outlook::classify(prediction, report.stable_threshold_kg);
        writeln!(self.out, "{}", outlook.summary())?;
        writeln!(self.out, "{}", outlook.suggestion())?;

        let log = SessionLog::new(&config.paths.session_log);
        let entry = SessionLogEntry::new(self.today, query, prediction);
        match log.append(&entry) {
            Ok(()) => writeln!(self.out, "\nSession saved to {}.", log.path().display())?,
            Err(e) => self.peripheral_failure(&e)?,
        }

        self.report_trend(log)?;
        self.journal_prompt()?;

        writeln!(self.out, "\n{}", DISCLAIMER)?;
        Ok(State::Done)
    }

    fn report_trend(&mut self, log: SessionLog) -> io::Result<()> {
        let config = self.config;
        let report = &config.report;
        let reporter = TrendReporter::new(log, report.bar_scale);

        match reporter.recent_average(report.average_window) {
            Ok(Some((average, count))) => writeln!(
                self.out,
                "Average predicted loss over last {} sessions: {:.2} kg",
                count, average
            )?,
            Ok(None) => writeln!(self.out, "No prediction history yet.")?,
            Err(e) => self.peripheral_failure(&e)?,
        }

        match reporter.render_trend(report.trend_window) {
            Ok(bars) if !bars.is_empty() => {
                writeln!(self.out, "\n=== Recent Trend ===")?;
                for bar in bars {
                    writeln!(self.out, "{}", bar)?;
                }
            }
            Ok(_) => {}
            Err(e) => self.peripheral_failure(&e)?,
        }
        Ok(())
    }

    fn journal_prompt(&mut self) -> io::Result<()> {
        let note = self
            .prompt("\nAdd a journal note (press Enter to skip): ")?
            .unwrap_or_default();

        let journal = Journal::new(&self.config.paths.journal);
        match journal.append(self.today, &note) {
            Ok(true) => writeln!(self.out, "Journal entry saved.")?,
            Ok(false) => {}
            Err(e) => self.peripheral_failure(&e)?,
        }
        Ok(())
    }

    // ========================================================================
    // Console helpers
    // ========================================================================

    /// Print `text` without a newline and read one line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn peripheral_failure(&mut self, err: &TrimcastError) -> io::Result<()> {
        tracing::warn!("{}", err);
        writeln!(self.out, "Warning: {}", err)
    }
}
