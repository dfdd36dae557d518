//! Reading and writing reflected values as JSON documents.
//!
//! # Overview
//!
//! - [`populate`]: overwrite the fields of a value from a [`Document`].
//!   Stops at the first value of the wrong shape, see [`DecodeError`].
//! - [`to_document`] / [`emit_into`]: build a document from a value.
//!   Never stops early; skipped fields are reported as diagnostics.
//! - [`parse_document`], [`write_pretty`], [`to_pretty_string`]: text I/O
//!   with the fixed 4-space layout.
//!
//! Both directions dispatch on the field's [`Kind`](crate::info::Kind):
//!
//! | Kind        | Document node                              |
//! |-------------|--------------------------------------------|
//! | `Bool`      | boolean                                    |
//! | `Int32/64`  | integer, must fit the exact field type     |
//! | `Float32`   | number                                     |
//! | text        | string (wide text is transcoded)           |
//! | `Composite` | object, keys in field declaration order    |
//! | `Sequence`  | array                                      |
//! | `Mapping`   | object, keys sorted on write               |
//!
//! Fields of an unsupported kind are skipped with a warning, on both sides.
//!
//! # Debug
//!
//! With the `debug` feature and debug assertions, the [`DocPath`] of a
//! decode error also lists the composite types being populated.

use crate::info::{ElementKind, KeyKind, Kind, NamedField, StructInfo};

// -----------------------------------------------------------------------------
// Modules

mod de;
mod document;
mod error;
mod path;
mod scalar;
mod ser;

// -----------------------------------------------------------------------------
// Exports

pub use de::{populate, populate_dyn};
pub use document::{Document, DocumentMap, parse_document, to_pretty_string, write_pretty};
pub use error::DecodeError;
pub use path::{DocPath, MAX_DEPTH};
pub use ser::{emit_into, to_document};

// -----------------------------------------------------------------------------
// Shared

/// The warning for a field that is never read or written, `None` if supported.
pub(crate) fn unsupported_message(field: &NamedField, owner: &StructInfo) -> Option<String> {
    let name = field.name();
    let owner = owner.type_ident();
    match field.kind() {
        Kind::Unsupported => Some(format!("Non-reflectable property ({name}) present on {owner}.")),
        Kind::Sequence(ElementKind::Unsupported) => Some(format!(
            "Non-reflectable property ({name}) present within vector on {owner}."
        )),
        Kind::Mapping(KeyKind::Unsupported, _) => Some(format!(
            "Key of map ({name}) on {owner} is not narrow or wide text."
        )),
        Kind::Mapping(_, ElementKind::Unsupported) => Some(format!(
            "Non-reflectable property ({name}) present within map on {owner}."
        )),
        Kind::Scalar(_) | Kind::Composite | Kind::Sequence(_) | Kind::Mapping(..) => None,
    }
}
