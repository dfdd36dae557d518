use core::fmt;

// -----------------------------------------------------------------------------
// ScalarKind

/// The scalar kinds: values stored as a single document leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// `bool`
    Bool,
    /// `i32`, `u32`, fieldless enums
    Int32,
    /// `i64`, `u64`
    Int64,
    /// `f32`
    Float32,
    /// `String`
    NarrowText,
    /// [`WideString`](crate::text::WideString), stored as narrow text.
    WideText,
}

impl ScalarKind {
    /// Name of the document shape this kind is read from.
    pub const fn expected(self) -> &'static str {
        match self {
            Self::Bool => "a boolean",
            Self::Int32 | Self::Int64 => "an integer",
            Self::Float32 => "a number",
            Self::NarrowText | Self::WideText => "a string",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.pad("Bool"),
            Self::Int32 => f.pad("Int32"),
            Self::Int64 => f.pad("Int64"),
            Self::Float32 => f.pad("Float32"),
            Self::NarrowText => f.pad("NarrowText"),
            Self::WideText => f.pad("WideText"),
        }
    }
}

// -----------------------------------------------------------------------------
// ElementKind

/// Kind of a sequence element or mapping value.
///
/// Collections are not legal here; see [`Kind::sequence_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Scalar(ScalarKind),
    Composite,
    Unsupported,
}

impl ElementKind {
    /// Narrows a field kind to an element kind.
    ///
    /// Returns `None` for collections, which cannot be nested.
    pub const fn of(kind: Kind) -> Option<Self> {
        match kind {
            Kind::Scalar(scalar) => Some(Self::Scalar(scalar)),
            Kind::Composite => Some(Self::Composite),
            Kind::Unsupported => Some(Self::Unsupported),
            Kind::Sequence(_) | Kind::Mapping(..) => None,
        }
    }

    #[inline]
    pub const fn is_supported(self) -> bool {
        !matches!(self, Self::Unsupported)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => fmt::Display::fmt(scalar, f),
            Self::Composite => f.pad("Composite"),
            Self::Unsupported => f.pad("Unsupported"),
        }
    }
}

// -----------------------------------------------------------------------------
// KeyKind

/// Kind of a mapping key. Document keys are always narrow text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    Narrow,
    Wide,
    Unsupported,
}

impl KeyKind {
    /// Narrows a key type's kind to a key kind.
    pub const fn of(kind: Kind) -> Self {
        match kind {
            Kind::Scalar(ScalarKind::NarrowText) => Self::Narrow,
            Kind::Scalar(ScalarKind::WideText) => Self::Wide,
            _ => Self::Unsupported,
        }
    }

    /// `Some(true)` when keys need transcoding, `None` if unsupported.
    #[inline]
    pub const fn is_wide(self) -> Option<bool> {
        match self {
            Self::Narrow => Some(false),
            Self::Wide => Some(true),
            Self::Unsupported => None,
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Narrow => f.pad("NarrowText"),
            Self::Wide => f.pad("WideText"),
            Self::Unsupported => f.pad("Unsupported"),
        }
    }
}

// -----------------------------------------------------------------------------
// Kind

/// The serialization kind of a field type.
///
/// Obtained at compile time through [`Classify::KIND`], or from a live value via
/// [`Reflect::reflect_kind`]. The reader and writer dispatch on it exhaustively.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use rf_reflect::{Classify, info::{ElementKind, Kind, KeyKind, ScalarKind}, text::WideString};
///
/// assert_eq!(<Vec<u32>>::KIND, Kind::Sequence(ElementKind::Scalar(ScalarKind::Int32)));
/// assert_eq!(
///     <BTreeMap<WideString, i64>>::KIND,
///     Kind::Mapping(KeyKind::Wide, ElementKind::Scalar(ScalarKind::Int64)),
/// );
/// // one level of nesting only
/// assert_eq!(<Vec<Vec<bool>>>::KIND, Kind::Unsupported);
/// ```
///
/// [`Classify::KIND`]: crate::Classify::KIND
/// [`Reflect::reflect_kind`]: crate::Reflect::reflect_kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Scalar(ScalarKind),
    Composite,
    Sequence(ElementKind),
    Mapping(KeyKind, ElementKind),
    Unsupported,
}

impl Kind {
    /// Kind of a homogeneous sequence of `element`.
    ///
    /// A sequence of collections is [`Kind::Unsupported`].
    pub const fn sequence_of(element: Kind) -> Kind {
        match ElementKind::of(element) {
            Some(element) => Kind::Sequence(element),
            None => Kind::Unsupported,
        }
    }

    /// Kind of a mapping from `key` to `value`.
    ///
    /// A mapping of collections is [`Kind::Unsupported`]; a non-text key yields
    /// [`KeyKind::Unsupported`].
    pub const fn mapping_of(key: Kind, value: Kind) -> Kind {
        match ElementKind::of(value) {
            Some(value) => Kind::Mapping(KeyKind::of(key), value),
            None => Kind::Unsupported,
        }
    }

    /// Returns `false` if any part of the kind is unsupported.
    pub const fn is_supported(self) -> bool {
        match self {
            Self::Scalar(_) | Self::Composite => true,
            Self::Sequence(element) => element.is_supported(),
            Self::Mapping(key, value) => key.is_wide().is_some() && value.is_supported(),
            Self::Unsupported => false,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => fmt::Display::fmt(scalar, f),
            Self::Composite => f.pad("Composite"),
            Self::Sequence(element) => write!(f, "Sequence<{element}>"),
            Self::Mapping(key, value) => write!(f, "Mapping<{key}, {value}>"),
            Self::Unsupported => f.pad("Unsupported"),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::{BTreeMap, BTreeSet};
    use std::collections::HashMap;

    use super::{ElementKind, KeyKind, Kind, ScalarKind};
    use crate::Classify;
    use crate::text::WideString;

    #[test]
    fn scalars() {
        assert_eq!(bool::KIND, Kind::Scalar(ScalarKind::Bool));
        assert_eq!(i32::KIND, Kind::Scalar(ScalarKind::Int32));
        assert_eq!(u32::KIND, Kind::Scalar(ScalarKind::Int32));
        assert_eq!(i64::KIND, Kind::Scalar(ScalarKind::Int64));
        assert_eq!(u64::KIND, Kind::Scalar(ScalarKind::Int64));
        assert_eq!(f32::KIND, Kind::Scalar(ScalarKind::Float32));
        assert_eq!(String::KIND, Kind::Scalar(ScalarKind::NarrowText));
        assert_eq!(WideString::KIND, Kind::Scalar(ScalarKind::WideText));
    }

    #[test]
    fn unsupported_natives() {
        assert_eq!(f64::KIND, Kind::Unsupported);
        assert_eq!(u8::KIND, Kind::Unsupported);
        assert_eq!(usize::KIND, Kind::Unsupported);
        assert_eq!(<Option<i32>>::KIND, Kind::Unsupported);
        assert_eq!(<BTreeSet<String>>::KIND, Kind::Unsupported);
    }

    #[test]
    fn sequences() {
        assert_eq!(
            <Vec<WideString>>::KIND,
            Kind::Sequence(ElementKind::Scalar(ScalarKind::WideText))
        );
        assert_eq!(<Vec<f64>>::KIND, Kind::Sequence(ElementKind::Unsupported));
        assert!(!<Vec<f64>>::KIND.is_supported());
        assert_eq!(<Vec<Vec<i32>>>::KIND, Kind::Unsupported);
        assert_eq!(<Vec<BTreeMap<String, i32>>>::KIND, Kind::Unsupported);
    }

    #[test]
    fn mappings() {
        assert_eq!(
            <HashMap<String, f32>>::KIND,
            Kind::Mapping(KeyKind::Narrow, ElementKind::Scalar(ScalarKind::Float32))
        );
        assert_eq!(
            <BTreeMap<i32, bool>>::KIND,
            Kind::Mapping(KeyKind::Unsupported, ElementKind::Scalar(ScalarKind::Bool))
        );
        assert!(!<BTreeMap<i32, bool>>::KIND.is_supported());
        assert_eq!(<BTreeMap<String, Vec<i32>>>::KIND, Kind::Unsupported);
        assert_eq!(<BTreeMap<String, BTreeMap<String, i32>>>::KIND, Kind::Unsupported);
    }

    #[test]
    fn display() {
        let kind = Kind::Mapping(KeyKind::Wide, ElementKind::Composite);
        assert_eq!(kind.to_string(), "Mapping<WideText, Composite>");
        assert_eq!(Kind::sequence_of(i64::KIND).to_string(), "Sequence<Int64>");
    }
}
