pub mod config;
pub mod monitoring;
pub mod utils;

use std::io::Write;

use config::AppConfig;
use monitoring::{CheckOutcome, LogChecker};
use utils::AppError;

/// Load configuration from the environment and run one check on this host
pub fn run(out: &mut dyn Write) -> Result<CheckOutcome, AppError> {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            // The directory line is printed even when PWD is missing.
            writeln!(out, "Current directory: None")?;
            return Err(err.into());
        }
    };
    LogChecker::new(config).run(out)
}
