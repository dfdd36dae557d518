//! Non-fatal reporting.
//!
//! Reading, writing and the file store never fail on an unsupported field
//! or a broken file; they report it to a [`Diagnostics`] sink and carry on.
//!
//! - [`LogSink`]: forwards to the [`log`] facade, the default.
//! - [`Recorder`]: keeps everything in memory.

use core::fmt;

// -----------------------------------------------------------------------------
// Modules

mod log_sink;
mod recorder;

// -----------------------------------------------------------------------------
// Exports

pub use log_sink::LogSink;
pub use recorder::Recorder;

// -----------------------------------------------------------------------------
// Level

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => f.pad("info"),
            Self::Warn => f.pad("warn"),
            Self::Error => f.pad("error"),
        }
    }
}

// -----------------------------------------------------------------------------
// LogEntry

/// What went wrong with a backing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The content is not a well-formed document.
    Parse,
    /// The document does not match the type.
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse => f.pad("parse"),
            Self::Decode => f.pad("decode"),
        }
    }
}

/// A structured record of a failure to read a backing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub file: String,
    pub kind: FailureKind,
    /// The underlying error text.
    pub detail: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error in {}: {}", self.kind, self.file, self.detail)
    }
}

// -----------------------------------------------------------------------------
// Diagnostics

/// A sink for leveled messages and failure records.
///
/// Implementations decide how (and whether) anything is displayed.
///
/// # Examples
///
/// ```
/// use rf_reflect::diag::{Diagnostics, Level, Recorder};
///
/// let recorder = Recorder::new();
/// recorder.message(Level::Warn, "something odd");
/// assert_eq!(recorder.count(Level::Warn), 1);
/// ```
pub trait Diagnostics {
    fn message(&self, level: Level, text: &str);

    fn log_entry(&self, entry: LogEntry);
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    #[inline]
    fn message(&self, level: Level, text: &str) {
        (**self).message(level, text);
    }

    #[inline]
    fn log_entry(&self, entry: LogEntry) {
        (**self).log_entry(entry);
    }
}
