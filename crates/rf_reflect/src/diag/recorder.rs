use std::sync::{Mutex, PoisonError};

use crate::diag::{Diagnostics, Level, LogEntry};

/// A [`Diagnostics`] sink that keeps every message in memory.
///
/// # Examples
///
/// ```
/// use rf_reflect::diag::{Diagnostics, FailureKind, Level, LogEntry, Recorder};
///
/// let recorder = Recorder::new();
/// recorder.message(Level::Info, "saved");
/// recorder.log_entry(LogEntry {
///     file: "a.json".into(),
///     kind: FailureKind::Parse,
///     detail: "EOF while parsing".into(),
/// });
///
/// assert_eq!(recorder.messages(), [(Level::Info, "saved".to_owned())]);
/// assert_eq!(recorder.log_entries()[0].kind, FailureKind::Parse);
/// ```
#[derive(Debug, Default)]
pub struct Recorder {
    messages: Mutex<Vec<(Level, String)>>,
    entries: Mutex<Vec<LogEntry>>,
}

impl Recorder {
    #[inline]
    pub const fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Returns a copy of all messages, oldest first.
    pub fn messages(&self) -> Vec<(Level, String)> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns a copy of all log entries, oldest first.
    pub fn log_entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of messages at `level`.
    pub fn count(&self, level: Level) -> usize {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(l, _)| *l == level)
            .count()
    }

    /// Returns `true` if any message at `level` contains `needle`.
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|(l, text)| *l == level && text.contains(needle))
    }

    /// Removes everything recorded so far.
    pub fn clear(&self) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Diagnostics for Recorder {
    fn message(&self, level: Level, text: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((level, text.to_owned()));
    }

    fn log_entry(&self, entry: LogEntry) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }
}
