use crate::Classify;
use crate::info::StructInfo;
use crate::ops::Composite;

/// Static access to the [`StructInfo`] of a composite type.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect); the descriptor
/// is built once and lives for the rest of the program.
///
/// # Examples
///
/// ```
/// use rf_reflect::{derive::Reflect, Reflectable};
///
/// #[derive(Reflect, Default)]
/// struct Window {
///     width: u32,
///     height: u32,
/// }
///
/// assert_eq!(Window::struct_info().field_len(), 2);
/// assert_eq!(Window::default_file(), None);
/// ```
pub trait Reflectable: Classify + Composite {
    /// Returns the compile-time descriptor of `Self`.
    fn struct_info() -> &'static StructInfo;

    /// Returns the file the type is stored in when no path is given.
    #[inline]
    fn default_file() -> Option<&'static str> {
        Self::struct_info().file()
    }
}
