//! Reads the tail of a log file through the external `tail` utility.
//!
//! Every failure degrades to an empty result: a missing file, a missing
//! `tail` binary and a non-zero exit all mean "nothing to check".

use std::path::Path;
use std::process::Command;

use tracing::{debug, warn};

/// Default tail program
pub const DEFAULT_TAIL_PROGRAM: &str = "tail";

/// Fetches the last lines of a log file
#[derive(Debug, Clone)]
pub struct LogReader {
    program: String,
}

impl Default for LogReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LogReader {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_TAIL_PROGRAM)
    }

    /// Use a different tail executable
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Return the last `count` lines of `path`, oldest first.
    ///
    /// Returns an empty vector if the read fails for any reason.
    pub fn tail_lines(&self, path: &Path, count: usize) -> Vec<String> {
        let output = match Command::new(&self.program)
            .arg("-n")
            .arg(count.to_string())
            .arg(path)
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                warn!(
                    error = %e,
                    program = %self.program,
                    path = %path.display(),
                    "Failed to run tail, treating as no lines"
                );
                return Vec::new();
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(
                status = %output.status,
                path = %path.display(),
                stderr = %stderr.trim(),
                "tail exited with failure, treating as no lines"
            );
            return Vec::new();
        }

        let lines = split_lines(&String::from_utf8_lossy(&output.stdout));

        debug!(path = %path.display(), count = lines.len(), "Read log lines");
        lines
    }
}

/// Line boundaries: `\n`, `\r\n`, a lone `\r`, and the other Unicode
/// line and paragraph separators.
fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split `text` into lines without their terminators. A trailing terminator
/// does not produce an empty last line.
fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !is_line_break(ch) {
            continue;
        }
        lines.push(text[start..idx].to_string());

        let mut end = idx + ch.len_utf8();
        if ch == '\r' {
            if let Some(&(_, '\n')) = chars.peek() {
                chars.next();
                end += 1;
            }
        }
        start = end;
    }

    if start < text.len() {
        lines.push(text[start..].to_string());
    }
    lines
}
