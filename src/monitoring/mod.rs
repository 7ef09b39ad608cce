//! Log alert pipeline
//!
//! - Tail the last N lines of a log file
//! - Keep the lines that look like errors
//! - Raise a desktop notification when enough of them show up

pub mod checker;
pub mod classifier;
pub mod log_reader;
pub mod notifier;

pub use checker::{CheckOutcome, LogChecker};
pub use classifier::Classifier;
pub use log_reader::LogReader;
pub use notifier::{Delivery, Notifier, Platform};
