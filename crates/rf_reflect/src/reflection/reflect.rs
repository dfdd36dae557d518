use core::any::Any;

use crate::info::Kind;
use crate::ops::{AssignError, ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime reflection in [`rf_reflect`].
///
/// Every value the reader and writer touch is reached as `&dyn Reflect` or
/// `&mut dyn Reflect`, then cast to one of the views in [`ReflectRef`] and
/// [`ReflectMut`].
///
/// It's strongly recommended to use [the derive macro](crate::derive::Reflect)
/// for composite types; the native types are implemented in [`crate::impls`].
///
/// # Examples
///
/// ```
/// use rf_reflect::{Reflect, ops::{ReflectRef, ScalarValue}};
///
/// let value: &dyn Reflect = &42_u32;
/// let ReflectRef::Scalar(scalar) = value.reflect_ref() else { unreachable!() };
/// assert_eq!(scalar.to_scalar(), ScalarValue::UInt(42));
///
/// let mut value = 1_i64;
/// let fresh = value.fresh();
/// value.assign(fresh).unwrap();
/// assert_eq!(value, 0);
/// ```
///
/// [`rf_reflect`]: crate
pub trait Reflect: Any {
    /// Returns the kind of the value's type.
    fn reflect_kind(&self) -> Kind;

    /// Returns the full type name of the value.
    fn reflect_type_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Returns a default-constructed value of the same type.
    fn fresh(&self) -> Box<dyn Reflect>;

    /// Replaces `self` with `value`.
    ///
    /// Fails if `value` is not of the same type; `self` is left untouched.
    fn assign(&mut self, value: Box<dyn Reflect>) -> Result<(), AssignError>;

    /// Returns an immutable enumeration of "kinds" of type.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable enumeration of "kinds" of type.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn is<T: Reflect>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Reflect>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Reflect>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

impl core::fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "dyn Reflect({}: {})", self.reflect_type_name(), self.reflect_kind())
    }
}
