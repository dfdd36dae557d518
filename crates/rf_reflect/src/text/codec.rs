use super::WideString;

/// Converts narrow (UTF-8) text to wide (UTF-16) text.
///
/// This never loses information.
///
/// # Examples
///
/// ```
/// use rf_reflect::text::{narrow_to_wide, wide_to_narrow};
///
/// let wide = narrow_to_wide("héllo 𝄞");
/// assert_eq!(wide.len(), 8); // the clef needs a surrogate pair
/// assert_eq!(wide_to_narrow(&wide), "héllo 𝄞");
/// ```
#[inline]
pub fn narrow_to_wide(text: &str) -> WideString {
    WideString::from_units(text.encode_utf16().collect())
}

/// Converts wide (UTF-16) text to narrow (UTF-8) text.
///
/// Unpaired surrogates are replaced with `U+FFFD REPLACEMENT CHARACTER`.
#[inline]
pub fn wide_to_narrow(text: &WideString) -> String {
    String::from_utf16_lossy(text.as_units())
}

// -----------------------------------------------------------------------------
// Tests
