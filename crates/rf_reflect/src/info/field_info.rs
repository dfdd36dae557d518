use core::any::Any;
use core::fmt;

use crate::info::Kind;
use crate::{Classify, Reflect};

/// Reads a field out of its (type-erased) owner.
///
/// Returns `None` if `owner` is not the type the field belongs to.
pub type FieldGetter = fn(&dyn Any) -> Option<&dyn Reflect>;

/// Mutable counterpart of [`FieldGetter`].
pub type FieldGetterMut = fn(&mut dyn Any) -> Option<&mut dyn Reflect>;

#[derive(Clone, Copy)]
struct Accessor {
    get: FieldGetter,
    get_mut: FieldGetterMut,
}

// -----------------------------------------------------------------------------
// NamedField

/// Descriptor of one named field of a composite type.
///
/// Only fields that are writable and not static take part in reading and
/// writing, see [`NamedField::participates`].
///
/// # Examples
///
/// ```
/// use rf_reflect::{derive::Reflect, info::{Kind, ScalarKind}, Reflectable};
///
/// #[derive(Reflect, Default)]
/// struct Foo {
///     count: u32,
///     #[reflect(readonly)]
///     cached: u32,
/// }
///
/// let info = Foo::struct_info();
/// let count = info.field("count").unwrap();
/// assert_eq!(count.kind(), Kind::Scalar(ScalarKind::Int32));
/// assert!(count.participates());
/// assert!(!info.field("cached").unwrap().participates());
/// ```
#[derive(Clone)]
pub struct NamedField {
    name: &'static str,
    kind: Kind,
    type_path: &'static str,
    writable: bool,
    is_static: bool,
    accessor: Option<Accessor>,
}

impl NamedField {
    /// Creates a field of type `F` reached through the given accessor pair.
    ///
    /// The kind is `F::KIND`.
    pub fn new<F: Classify>(name: &'static str, get: FieldGetter, get_mut: FieldGetterMut) -> Self {
        Self {
            name,
            kind: F::KIND,
            type_path: core::any::type_name::<F>(),
            writable: true,
            is_static: false,
            accessor: Some(Accessor { get, get_mut }),
        }
    }

    /// Creates a field whose value cannot be reached.
    ///
    /// The field is always classified as [`Kind::Unsupported`].
    pub const fn opaque(name: &'static str, type_path: &'static str) -> Self {
        Self {
            name,
            kind: Kind::Unsupported,
            type_path,
            writable: true,
            is_static: false,
            accessor: None,
        }
    }

    /// Marks the field as (non-)writable.
    #[inline]
    pub const fn with_writable(mut self, writable: bool) -> Self {
        self.writable = writable;
        self
    }

    /// Marks the field as (non-)static.
    #[inline]
    pub const fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    /// Returns the field name, also used verbatim as the document key.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the type name of the field's declared type.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    #[inline]
    pub const fn is_writable(&self) -> bool {
        self.writable
    }

    #[inline]
    pub const fn is_static(&self) -> bool {
        self.is_static
    }

    /// Whether the field is read and written at all.
    #[inline]
    pub const fn participates(&self) -> bool {
        self.writable && !self.is_static
    }

    /// Borrows the field's value out of `owner`.
    #[inline]
    pub fn get<'a>(&self, owner: &'a dyn Any) -> Option<&'a dyn Reflect> {
        match self.accessor {
            Some(accessor) => (accessor.get)(owner),
            None => None,
        }
    }

    /// Mutably borrows the field's value out of `owner`.
    #[inline]
    pub fn get_mut<'a>(&self, owner: &'a mut dyn Any) -> Option<&'a mut dyn Reflect> {
        match self.accessor {
            Some(accessor) => (accessor.get_mut)(owner),
            None => None,
        }
    }
}

impl fmt::Debug for NamedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedField")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("type_path", &self.type_path)
            .field("writable", &self.writable)
            .field("is_static", &self.is_static)
            .field("opaque", &self.accessor.is_none())
            .finish()
    }
}
