//! Single check-and-notify pass over the tail of a log file.

use std::io::Write;

use chrono::{DateTime, Utc};
use tracing::{info, instrument};

use crate::config::AppConfig;
use crate::monitoring::{Classifier, Delivery, LogReader, Notifier};
use crate::utils::AppError;

/// Result of one pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The log could not be read or was empty
    NoLines,
    /// Fewer matching lines than the alert threshold
    BelowThreshold { checked: usize, matched: usize },
    /// An alert was delivered
    Alerted {
        checked: usize,
        matched: usize,
        delivery: Delivery,
        checked_at: DateTime<Utc>,
    },
}

impl CheckOutcome {
    pub fn is_alerted(&self) -> bool {
        matches!(self, CheckOutcome::Alerted { .. })
    }
}

/// Runs the tail → classify → notify pass
#[derive(Debug, Clone)]
pub struct LogChecker {
    config: AppConfig,
    reader: LogReader,
    classifier: Classifier,
    notifier: Notifier,
}

impl LogChecker {
    /// Checker with the host's tail program and notifier
    pub fn new(config: AppConfig) -> Self {
        let classifier = Classifier::new(config.keywords.iter().cloned());
        Self {
            config,
            reader: LogReader::new(),
            classifier,
            notifier: Notifier::detect(),
        }
    }

    pub fn with_reader(mut self, reader: LogReader) -> Self {
        self.reader = reader;
        self
    }

    pub fn with_notifier(mut self, notifier: Notifier) -> Self {
        self.notifier = notifier;
        self
    }

    /// Format the alert body
    pub fn alert_message(&self, matched: usize) -> String {
        format!(
            "Found {} error-ish log lines in the last {} lines of {}",
            matched,
            self.config.lines_to_check,
            self.config.log_file.display()
        )
    }

    /// Run one pass, writing the informational lines and any fallback alert
    /// to `out`.
    #[instrument(skip_all, fields(log_file = %self.config.log_file.display()))]
    pub fn run(&self, out: &mut dyn Write) -> Result<CheckOutcome, AppError> {
        let config = &self.config;

        writeln!(out, "Current directory: {}", config.working_dir.display())?;
        writeln!(out, "Log file path: {}", config.log_file.display())?;

        let lines = self
            .reader
            .tail_lines(&config.log_file, config.lines_to_check);
        if lines.is_empty() {
            return Ok(CheckOutcome::NoLines);
        }

        let checked = lines.len();
        writeln!(
            out,
            "Checked last {} lines of {}",
            checked,
            config.log_file.display()
        )?;

        let matched = self.classifier.classify(&lines).len();
        if matched < config.error_threshold {
            info!(checked, matched, "No alert needed");
            return Ok(CheckOutcome::BelowThreshold { checked, matched });
        }

        let checked_at = Utc::now();
        let delivery = self.notifier.notify(&self.alert_message(matched), out)?;
        info!(
            checked,
            matched,
            delivery = ?delivery,
            checked_at = %checked_at.to_rfc3339(),
            "Alert raised"
        );

        Ok(CheckOutcome::Alerted {
            checked,
            matched,
            delivery,
            checked_at,
        })
    }
}
