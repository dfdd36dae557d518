use crate::ops::{AssignError, ScalarError};
use crate::serde::DocPath;

/// A enumeration of all error outcomes that might happen when populating a value from a document.
///
/// Each error carries the location of the offending value.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// The document node has the wrong shape for the field's kind.
    #[error("expected {expected} at {path}, found {found}")]
    Shape {
        path: DocPath,
        expected: &'static str,
        found: &'static str,
    },
    /// A number does not fit the field's type.
    #[error("{value} is out of range for `{target}` at {path}")]
    OutOfRange {
        path: DocPath,
        value: String,
        target: &'static str,
    },
    /// Composites are nested deeper than [`MAX_DEPTH`](crate::serde::MAX_DEPTH).
    #[error("more than {limit} nested composites at {path}")]
    DepthExceeded { path: DocPath, limit: usize },
    /// A value does not behave like its descriptor says.
    #[error("inconsistent reflection at {path}: {detail}")]
    Inconsistent { path: DocPath, detail: String },
    /// A staged value could not be moved into its field.
    #[error("cannot assign the value at {path}")]
    Assign {
        path: DocPath,
        #[source]
        source: AssignError,
    },
}

impl DecodeError {
    /// Returns the location of the offending value.
    pub fn path(&self) -> &DocPath {
        match self {
            Self::Shape { path, .. }
            | Self::OutOfRange { path, .. }
            | Self::DepthExceeded { path, .. }
            | Self::Inconsistent { path, .. }
            | Self::Assign { path, .. } => path,
        }
    }

    pub(crate) fn from_scalar(path: DocPath, error: ScalarError) -> Self {
        match error {
            ScalarError::OutOfRange { value, target } => Self::OutOfRange {
                path,
                value,
                target,
            },
            ScalarError::Mismatch {
                expected, found, ..
            } => Self::Shape {
                path,
                expected,
                found,
            },
        }
    }
}
