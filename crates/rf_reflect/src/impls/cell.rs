//! Container for static storage of type information.

use std::sync::OnceLock;

use crate::info::StructInfo;

/// Container for static storage of a composite type's [`StructInfo`].
///
/// Internally, there is an [`OnceLock<T>`], almost no additional expenses.
///
/// This is usually used to implement [`Reflectable`](crate::Reflectable), only
/// for non-generic types: a `static` inside a generic function is shared by
/// every instantiation.
///
/// ## Example
///
/// ```
/// use rf_reflect::impls::StructInfoCell;
/// use rf_reflect::info::{NamedField, StructInfo};
/// # use rf_reflect::derive::Reflect;
/// # #[derive(Reflect, Default)]
/// # struct A { a: u32 }
///
/// fn info() -> &'static StructInfo {
///     static CELL: StructInfoCell = StructInfoCell::new();
///     CELL.get_or_init(|| {
///         StructInfo::new::<A>(vec![NamedField::opaque("a", "u32")])
///     })
/// }
///
/// assert!(core::ptr::eq(info(), info()));
/// assert_eq!(info().field("a").unwrap().type_path(), "u32");
/// ```
pub struct StructInfoCell(OnceLock<StructInfo>);

impl StructInfoCell {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns a reference to the `StructInfo` stored in the cell.
    ///
    /// If there is no entry found, a new one will be generated from the given function.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &StructInfo
    where
        F: FnOnce() -> StructInfo,
    {
        self.0.get_or_init(f)
    }
}
