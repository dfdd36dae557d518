use core::fmt;

use crate::Reflect;
use crate::text::WideString;

// -----------------------------------------------------------------------------
// ScalarValue

/// An owned scalar, the exchange format between a scalar field and a document leaf.
///
/// Integers keep their signedness so that `u64` values above `i64::MAX` survive.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f32),
    Narrow(String),
    Wide(WideString),
}

impl ScalarValue {
    /// Returns a short name of the variant's shape.
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Bool(_) => "a boolean",
            Self::Int(_) | Self::UInt(_) => "an integer",
            Self::Float(_) => "a number",
            Self::Narrow(_) | Self::Wide(_) => "a string",
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => fmt::Display::fmt(value, f),
            Self::Int(value) => fmt::Display::fmt(value, f),
            Self::UInt(value) => fmt::Display::fmt(value, f),
            Self::Float(value) => fmt::Display::fmt(value, f),
            Self::Narrow(value) => write!(f, "{value:?}"),
            Self::Wide(value) => write!(f, "{value:?}"),
        }
    }
}

// -----------------------------------------------------------------------------
// ScalarError

/// A enumeration of all error outcomes that might happen when running [`Scalar::set_scalar`].
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScalarError {
    /// The value has the right shape but does not fit the target type.
    #[error("{value} is out of range for `{target}`")]
    OutOfRange { value: String, target: &'static str },
    /// The value has the wrong shape for the target type.
    #[error("expected {expected} for `{target}`, found {found}")]
    Mismatch {
        expected: &'static str,
        found: &'static str,
        target: &'static str,
    },
}

// -----------------------------------------------------------------------------
// Scalar

/// A trait used to power scalar-like operations via reflection.
///
/// # Examples
///
/// ```
/// use rf_reflect::ops::{Scalar, ScalarError, ScalarValue};
///
/// let mut value = 0_u32;
/// value.set_scalar(ScalarValue::Int(17)).unwrap();
/// assert_eq!(value, 17);
///
/// let err = value.set_scalar(ScalarValue::Int(-1)).unwrap_err();
/// assert!(matches!(err, ScalarError::OutOfRange { .. }));
/// assert_eq!(value, 17);
/// ```
pub trait Scalar: Reflect {
    /// Returns the current value.
    fn to_scalar(&self) -> ScalarValue;

    /// Overwrites the value.
    ///
    /// On failure the value is left untouched.
    fn set_scalar(&mut self, value: ScalarValue) -> Result<(), ScalarError>;
}
