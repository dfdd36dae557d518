//! Kind-specific views of reflected values.
//!
//! ## Menu
//!
//! - [`ReflectRef`] / [`ReflectMut`]: the dispatch point, one variant per view.
//! - [`Scalar`]: get or set the value as a [`ScalarValue`].
//! - [`Composite`]: reach named fields through the type's [`StructInfo`].
//! - [`Sequence`]: a homogeneous list, e.g. `Vec<T>`.
//! - [`Mapping`]: a text-keyed map, e.g. `BTreeMap<String, T>`.
//!
//! [`StructInfo`]: crate::info::StructInfo

// -----------------------------------------------------------------------------
// Modules

mod assign_error;
mod kind;
mod mapping_ops;
mod scalar_ops;
mod sequence_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use assign_error::{AssignError, assign_boxed};
pub use kind::{ReflectMut, ReflectRef};
pub use mapping_ops::Mapping;
pub use scalar_ops::{Scalar, ScalarError, ScalarValue};
pub use sequence_ops::{Sequence, SequenceIter};
pub use struct_ops::Composite;
