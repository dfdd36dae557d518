//! See [`Reflect`].
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` automatically implements the following traits:
///
/// - `Reflect`
/// - `Classify`, with the `Composite` kind
/// - `Composite`
/// - `Reflectable`, whose `StructInfo` is built once, on first use
///
/// Only non-generic structs with named fields and fieldless enums (see
/// [below](#enums)) are supported. A struct must
/// also implement `Default`, and every field type must implement `Classify`
/// unless the field is marked `skip`, `readonly` or `opaque`.
///
/// ## Type Attributes
///
/// ### Default file
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// #[reflect(file = "config/window.json")]
/// struct Window { /* ... */ }
/// ```
///
/// The file is used by the store when no explicit path is given. An empty
/// string is the same as no attribute.
///
/// ## Field Attributes
///
/// - `#[reflect(skip)]`: the field is static data, it is never read or written.
/// - `#[reflect(readonly)]`: the field is not writable, it is never read or written.
/// - `#[reflect(opaque)]`: the field may have any type; it is classified as
///   unsupported, so reading and writing skip it with a warning.
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// struct Window {
///     width: u32,
///     #[reflect(skip)]
///     handle: Option<RawHandle>,
///     #[reflect(opaque)]
///     theme: Theme,
/// }
/// ```
///
/// ## Enums
///
/// Fieldless enums are scalars of the `Int32` kind, stored as their
/// discriminant. The derive implements `Reflect`, `Classify` and `Scalar`.
/// Reading an integer that names no variant fails with an out-of-range error.
///
/// The enum must implement `Default`, must not be generic, and may only use
/// an integer `#[repr]` no wider than 32 bits.
///
/// ```rust, ignore
/// #[derive(Reflect, Default, Clone, Copy)]
/// #[repr(i32)]
/// enum Difficulty {
///     Easy = 0,
///     #[default]
///     Normal = 1,
///     Hard = 2,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(ast)
}
