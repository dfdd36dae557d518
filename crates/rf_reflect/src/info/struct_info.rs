use foldhash::fast::FixedState;
use hashbrown::HashMap;

use crate::info::NamedField;
use crate::ops::Composite;

/// The type descriptor of a composite type.
///
/// Holds the fields in **declaration order**, which is also the order of the
/// keys in a written document, plus the optional default file path.
///
/// # Examples
///
/// ```rust
/// use rf_reflect::{derive::Reflect, Reflectable};
///
/// #[derive(Reflect, Default)]
/// #[reflect(file = "config/server.json")]
/// struct Server {
///     port: u32,
///     name: String,
/// }
///
/// let info = Server::struct_info();
///
/// assert_eq!(info.type_ident(), "Server");
/// assert_eq!(info.field_names(), ["port", "name"]);
/// assert_eq!(info.index_of("name"), Some(1));
/// assert_eq!(info.file(), Some("config/server.json"));
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    type_path: &'static str,
    type_ident: &'static str,
    fields: Box<[NamedField]>,
    field_names: Box<[&'static str]>,
    indices: HashMap<&'static str, usize, FixedState>,
    file: Option<&'static str>,
}

impl StructInfo {
    /// Create a new [`StructInfo`] for `T`.
    ///
    /// The order of internal fields is fixed, depends on the input order.
    pub fn new<T: Composite>(fields: Vec<NamedField>) -> Self {
        let type_path = core::any::type_name::<T>();
        let type_ident = type_path.rsplit("::").next().unwrap_or(type_path);

        let mut indices = HashMap::with_capacity_and_hasher(fields.len(), FixedState::default());
        for (index, field) in fields.iter().enumerate() {
            indices.insert(field.name(), index);
        }
        let field_names = fields.iter().map(NamedField::name).collect();

        Self {
            type_path,
            type_ident,
            fields: fields.into_boxed_slice(),
            field_names,
            indices,
            file: None,
        }
    }

    /// Sets the default file used when no explicit path is given.
    ///
    /// An empty path is the same as no path.
    pub fn with_file(mut self, file: &'static str) -> Self {
        self.file = (!file.is_empty()).then_some(file);
        self
    }

    /// Returns the full type path, e.g. `my_crate::config::Server`.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Returns the type name without module path, e.g. `Server`.
    #[inline]
    pub const fn type_ident(&self) -> &'static str {
        self.type_ident
    }

    /// Returns the default file, if the type declares one.
    #[inline]
    pub const fn file(&self) -> Option<&'static str> {
        self.file
    }

    /// Returns the [`NamedField`] for the given `name`, if present.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.get(*self.indices.get(name)?)
    }

    /// Returns the [`NamedField`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns an iterator over the fields in **declaration order**.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    /// Returns the field names in declaration order.
    #[inline]
    pub fn field_names(&self) -> &[&'static str] {
        &self.field_names
    }

    /// Returns the index for the given field `name`, if present.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}
