//! Items used by the code `#[derive(Reflect)]` generates.
//!
//! Not part of the public API.

pub mod macro_utils {
    pub use alloc::boxed::Box;
    pub use alloc::vec::Vec;

    pub use super::enum_utils::{discriminant, unknown_discriminant};
}

mod enum_utils {
    use crate::ops::{ScalarError, ScalarValue};

    /// Extracts the integer a fieldless enum is read from.
    pub fn discriminant(value: ScalarValue, target: &'static str) -> Result<i64, ScalarError> {
        match value {
            ScalarValue::Int(value) => Ok(value),
            ScalarValue::UInt(value) => {
                i64::try_from(value).map_err(|_| unknown_discriminant(value, target))
            }
            other => Err(ScalarError::Mismatch {
                expected: "an integer",
                found: other.shape(),
                target,
            }),
        }
    }

    #[inline]
    pub fn unknown_discriminant(value: impl ToString, target: &'static str) -> ScalarError {
        ScalarError::OutOfRange {
            value: value.to_string(),
            target,
        }
    }

}
