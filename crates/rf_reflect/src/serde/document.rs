use std::io;

use serde_core::Serialize;
use serde_json::ser::PrettyFormatter;

/// A parsed document: an ordered tree of objects, arrays and scalars.
///
/// Object keys keep their insertion order, which is the field declaration
/// order for documents built by [`to_document`](crate::serde::to_document).
pub type Document = serde_json::Value;

/// The key-value node of a [`Document`].
pub type DocumentMap = serde_json::Map<String, Document>;

/// Parses `bytes` as a document.
///
/// Invalid UTF-8 is reported like any other syntax error.
#[inline]
pub fn parse_document(bytes: &[u8]) -> Result<Document, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Writes `document` with a 4-space indent and no trailing newline.
pub fn write_pretty<W: io::Write>(document: &Document, writer: W) -> Result<(), serde_json::Error> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    document.serialize(&mut serializer)
}

/// Same as [`write_pretty`], into a `String`.
///
/// # Examples
///
/// ```
/// use rf_reflect::serde::{parse_document, to_pretty_string};
///
/// let document = parse_document(br#"{"b": [1, 2], "a": {}}"#).unwrap();
/// assert_eq!(
///     to_pretty_string(&document),
///     "{\n    \"b\": [\n        1,\n        2\n    ],\n    \"a\": {}\n}",
/// );
/// ```
pub fn to_pretty_string(document: &Document) -> String {
    let mut buffer = Vec::with_capacity(128);
    // writing into a `Vec` cannot fail, and serde_json only emits UTF-8
    if write_pretty(document, &mut buffer).is_err() {
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{parse_document, to_pretty_string};

    #[test]
    fn keeps_key_order() {
        let document = parse_document(br#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        let keys: Vec<&str> = document
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn rejects_invalid_utf8() {
        assert!(parse_document(b"{\"name\": \"\xff\"}").is_err());
        assert!(parse_document(b"{\"name\": ").is_err());
    }

    #[test]
    fn no_trailing_newline() {
        let document = parse_document(b"{\"a\": true}").unwrap();
        assert_eq!(to_pretty_string(&document), "{\n    \"a\": true\n}");
    }
}
