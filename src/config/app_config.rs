use std::env;
use std::path::PathBuf;

use crate::monitoring::classifier::DEFAULT_KEYWORDS;

/// Log file location relative to the working directory
pub const DEFAULT_LOG_SUBPATH: &str = "minikube_logs/app.log";
/// Number of trailing lines inspected per run
pub const DEFAULT_LINES_TO_CHECK: usize = 500;
/// Minimum number of matching lines that triggers an alert
pub const DEFAULT_ERROR_THRESHOLD: usize = 1;

/// Settings for one check run
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub working_dir: PathBuf,
    pub log_file: PathBuf,
    pub lines_to_check: usize,
    pub error_threshold: usize,
    pub keywords: Vec<String>,
}

impl AppConfig {
    /// Build the default configuration rooted at `working_dir`
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        let working_dir = working_dir.into();
        let log_file = working_dir.join(DEFAULT_LOG_SUBPATH);

        Self {
            working_dir,
            log_file,
            lines_to_check: DEFAULT_LINES_TO_CHECK,
            error_threshold: DEFAULT_ERROR_THRESHOLD,
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Load settings from the environment
    ///
    /// The working directory comes from `PWD`; everything else is fixed.
    /// An empty `PWD` yields a log path relative to the process directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        let working_dir = env::var_os("PWD").ok_or(ConfigError::MissingWorkingDir)?;

        Ok(Self::new(working_dir))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PWD environment variable is not set")]
    MissingWorkingDir,
}
