use crate::diag::{Diagnostics, Level, LogEntry};

/// A [`Diagnostics`] sink writing to the [`log`] facade, under target `rf_store`.
///
/// Nothing is printed unless the host installs a logger.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl Diagnostics for LogSink {
    fn message(&self, level: Level, text: &str) {
        match level {
            Level::Info => log::info!(target: "rf_store", "{text}"),
            Level::Warn => log::warn!(target: "rf_store", "{text}"),
            Level::Error => log::error!(target: "rf_store", "{text}"),
        }
    }

    fn log_entry(&self, entry: LogEntry) {
        log::warn!(target: "rf_store", "{entry}");
    }
}
