//! Compile-time type information.
//!
//! ## Menu
//!
//! - [`Kind`]: the closed classification of a field type, with its parts
//!   [`ScalarKind`], [`ElementKind`] and [`KeyKind`].
//! - [`NamedField`]: name, flags, kind and accessor pair of one struct field.
//! - [`StructInfo`]: the ordered fields of a composite type and its default file.
//! - [`Reflectable`]: static access to a type's `StructInfo`.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod kind;
mod struct_info;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::{FieldGetter, FieldGetterMut, NamedField};
pub use kind::{ElementKind, KeyKind, Kind, ScalarKind};
pub use struct_info::StructInfo;
pub use typed::Reflectable;
