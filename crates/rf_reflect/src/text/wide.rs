use core::fmt;

use super::{narrow_to_wide, wide_to_narrow};

/// Wide text: an owned sequence of UTF-16 code units.
///
/// Classified as [`ScalarKind::WideText`]; documents always store it as
/// narrow text, see the [module docs](crate::text).
///
/// [`ScalarKind::WideText`]: crate::info::ScalarKind::WideText
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WideString(Vec<u16>);

impl WideString {
    /// Creates an empty wide string.
    #[inline]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Wraps raw UTF-16 code units without validation.
    #[inline]
    pub const fn from_units(units: Vec<u16>) -> Self {
        Self(units)
    }

    /// Returns the code units.
    #[inline]
    pub fn as_units(&self) -> &[u16] {
        &self.0
    }

    /// Consumes the string, returning the code units.
    #[inline]
    pub fn into_units(self) -> Vec<u16> {
        self.0
    }

    /// Returns the number of code units (not characters).
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends narrow text.
    pub fn push_str(&mut self, text: &str) {
        self.0.extend(text.encode_utf16());
    }

    /// Converts to narrow text, replacing unpaired surrogates.
    #[inline]
    pub fn to_string_lossy(&self) -> String {
        wide_to_narrow(self)
    }
}

impl From<&str> for WideString {
    #[inline]
    fn from(value: &str) -> Self {
        narrow_to_wide(value)
    }
}

impl From<String> for WideString {
    #[inline]
    fn from(value: String) -> Self {
        narrow_to_wide(&value)
    }
}

impl From<&WideString> for String {
    #[inline]
    fn from(value: &WideString) -> Self {
        wide_to_narrow(value)
    }
}

impl PartialEq<str> for WideString {
    fn eq(&self, other: &str) -> bool {
        self.0.iter().copied().eq(other.encode_utf16())
    }
}

impl PartialEq<&str> for WideString {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        <Self as PartialEq<str>>::eq(self, other)
    }
}

impl fmt::Display for WideString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl fmt::Debug for WideString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{:?}", self.to_string_lossy())
    }
}

// -----------------------------------------------------------------------------
// Tests
