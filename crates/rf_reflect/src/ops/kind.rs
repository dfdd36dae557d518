use crate::Reflect;
use crate::ops::{Composite, Mapping, Scalar, Sequence};

/// An immutable enumeration of "kinds" of a reflected value.
///
/// Each variant contains a trait object with methods specific to that kind.
/// `Opaque` is everything the reader and writer cannot look into.
pub enum ReflectRef<'a> {
    Scalar(&'a dyn Scalar),
    Composite(&'a dyn Composite),
    Sequence(&'a dyn Sequence),
    Mapping(&'a dyn Mapping),
    Opaque(&'a dyn Reflect),
}

/// A mutable enumeration of "kinds" of a reflected value.
///
/// See [`ReflectRef`].
pub enum ReflectMut<'a> {
    Scalar(&'a mut dyn Scalar),
    Composite(&'a mut dyn Composite),
    Sequence(&'a mut dyn Sequence),
    Mapping(&'a mut dyn Mapping),
    Opaque(&'a mut dyn Reflect),
}

impl<'a> ReflectRef<'a> {
    /// Returns the variant name, used in error messages.
    pub const fn variant(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "Scalar",
            Self::Composite(_) => "Composite",
            Self::Sequence(_) => "Sequence",
            Self::Mapping(_) => "Mapping",
            Self::Opaque(_) => "Opaque",
        }
    }
}

impl<'a> ReflectMut<'a> {
    /// Returns the variant name, used in error messages.
    pub const fn variant(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "Scalar",
            Self::Composite(_) => "Composite",
            Self::Sequence(_) => "Sequence",
            Self::Mapping(_) => "Mapping",
            Self::Opaque(_) => "Opaque",
        }
    }
}
