//! Desktop notification delivery
//!
//! Uses `osascript` on macOS and `notify-send` on Linux. Anything else, or a
//! missing notifier binary, falls back to an `[ALERT]` line on stdout.

use std::io::{self, Write};
use std::process::Command;

use tracing::{debug, info, warn};

/// Notification title
pub const DEFAULT_TITLE: &str = "Kubernetes Log Alert";

/// Host notification capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
    Stdout,
}

impl Platform {
    /// Detect the platform of the running host
    pub fn detect() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an OS name (as in `std::env::consts::OS`) to a platform
    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" => Platform::MacOs,
            "linux" => Platform::Linux,
            _ => Platform::Stdout,
        }
    }

    /// Native notifier executable, if the platform has one
    pub fn default_program(&self) -> Option<&'static str> {
        match self {
            Platform::MacOs => Some("osascript"),
            Platform::Linux => Some("notify-send"),
            Platform::Stdout => None,
        }
    }
}

/// How an alert was actually delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Native,
    Stdout,
}

/// Best-effort alert notifier
#[derive(Debug, Clone)]
pub struct Notifier {
    platform: Platform,
    program: Option<String>,
    title: String,
}

impl Notifier {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            program: platform.default_program().map(str::to_string),
            title: DEFAULT_TITLE.to_string(),
        }
    }

    /// Notifier for the running host
    pub fn detect() -> Self {
        Self::new(Platform::detect())
    }

    /// Use a different native executable. Ignored on `Platform::Stdout`.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        if self.platform != Platform::Stdout {
            self.program = Some(program.into());
        }
        self
    }

    /// Deliver `message`, writing the fallback line to `out` when no native
    /// notifier can be started.
    pub fn notify(&self, message: &str, out: &mut dyn Write) -> io::Result<Delivery> {
        let Some(program) = self.program.as_deref() else {
            writeln!(out, "[ALERT] {}", message)?;
            return Ok(Delivery::Stdout);
        };

        let mut command = Command::new(program);
        if self.platform == Platform::MacOs {
            command.arg("-e").arg(format!(
                "display notification \"{}\" with title \"{}\"",
                escape_applescript(message),
                escape_applescript(&self.title)
            ));
        } else {
            command.arg(&self.title).arg(message);
        }

        match command.status() {
            Ok(status) => {
                if !status.success() {
                    debug!(program, status = %status, "Notifier exited with failure");
                }
                info!(program, "Desktop notification sent");
                Ok(Delivery::Native)
            }
            Err(e) => {
                warn!(program, error = %e, "Notifier unavailable, falling back to stdout");
                if e.kind() == io::ErrorKind::NotFound {
                    writeln!(out, "[ALERT] ({} not found) -> {}", program, message)?;
                } else {
                    writeln!(out, "[ALERT] ({} failed: {}) -> {}", program, e, message)?;
                }
                Ok(Delivery::Stdout)
            }
        }
    }
}

/// Escape a value for an AppleScript string literal
fn escape_applescript(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
