use core::any::type_name;
use core::fmt::Display;

use crate::impls::utils::impl_reflect_common;
use crate::info::{Kind, ScalarKind};
use crate::ops::{Scalar, ScalarError, ScalarValue};
use crate::text::WideString;
use crate::{Classify, Reflect};

fn out_of_range<T>(value: impl Display) -> ScalarError {
    ScalarError::OutOfRange {
        value: value.to_string(),
        target: type_name::<T>(),
    }
}

fn mismatch<T: Classify>(found: &ScalarValue) -> ScalarError {
    let expected = match T::KIND {
        Kind::Scalar(kind) => kind.expected(),
        _ => "a scalar",
    };
    ScalarError::Mismatch {
        expected,
        found: found.shape(),
        target: type_name::<T>(),
    }
}

macro_rules! impl_scalar_reflect {
    ($ty:ty, $kind:ident) => {
        impl Reflect for $ty {
            impl_reflect_common!(Scalar);
        }

        impl Classify for $ty {
            const KIND: Kind = Kind::Scalar(ScalarKind::$kind);
        }
    };
}

// -----------------------------------------------------------------------------
// Integers

macro_rules! impl_integer {
    ($ty:ty, $kind:ident, $variant:ident, $wide:ty) => {
        impl_scalar_reflect!($ty, $kind);

        impl Scalar for $ty {
            #[inline]
            fn to_scalar(&self) -> ScalarValue {
                ScalarValue::$variant(<$wide>::from(*self))
            }

            fn set_scalar(&mut self, value: ScalarValue) -> Result<(), ScalarError> {
                let value = match value {
                    ScalarValue::Int(value) => {
                        <$ty>::try_from(value).map_err(|_| out_of_range::<Self>(value))
                    }
                    ScalarValue::UInt(value) => {
                        <$ty>::try_from(value).map_err(|_| out_of_range::<Self>(value))
                    }
                    other => Err(mismatch::<Self>(&other)),
                };
                *self = value?;
                Ok(())
            }
        }
    };
}

impl_integer!(i32, Int32, Int, i64);
impl_integer!(u32, Int32, UInt, u64);
impl_integer!(i64, Int64, Int, i64);
impl_integer!(u64, Int64, UInt, u64);

// -----------------------------------------------------------------------------
// Bool & Float

impl_scalar_reflect!(bool, Bool);

impl Scalar for bool {
    #[inline]
    fn to_scalar(&self) -> ScalarValue {
        ScalarValue::Bool(*self)
    }

    fn set_scalar(&mut self, value: ScalarValue) -> Result<(), ScalarError> {
        match value {
            ScalarValue::Bool(value) => {
                *self = value;
                Ok(())
            }
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl_scalar_reflect!(f32, Float32);

impl Scalar for f32 {
    #[inline]
    fn to_scalar(&self) -> ScalarValue {
        ScalarValue::Float(*self)
    }

    /// Integers are accepted and rounded to the nearest `f32`.
    fn set_scalar(&mut self, value: ScalarValue) -> Result<(), ScalarError> {
        *self = match value {
            ScalarValue::Float(value) => value,
            ScalarValue::Int(value) => value as f32,
            ScalarValue::UInt(value) => value as f32,
            other => return Err(mismatch::<Self>(&other)),
        };
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Text

impl_scalar_reflect!(String, NarrowText);

impl Scalar for String {
    #[inline]
    fn to_scalar(&self) -> ScalarValue {
        ScalarValue::Narrow(self.clone())
    }

    fn set_scalar(&mut self, value: ScalarValue) -> Result<(), ScalarError> {
        match value {
            ScalarValue::Narrow(value) => {
                *self = value;
                Ok(())
            }
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl_scalar_reflect!(WideString, WideText);

impl Scalar for WideString {
    #[inline]
    fn to_scalar(&self) -> ScalarValue {
        ScalarValue::Wide(self.clone())
    }

    fn set_scalar(&mut self, value: ScalarValue) -> Result<(), ScalarError> {
        match value {
            ScalarValue::Wide(value) => {
                *self = value;
                Ok(())
            }
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
