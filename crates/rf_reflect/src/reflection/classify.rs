use crate::Reflect;
use crate::info::Kind;

/// Build-time classification of a field type.
///
/// The kind is a constant, so it is resolved once per type and never inspected
/// at runtime. Types that cannot be stored still implement `Classify`, with
/// [`Kind::Unsupported`], so that they remain legal field types.
///
/// # Examples
///
/// ```
/// use rf_reflect::{Classify, info::{Kind, ScalarKind}};
///
/// assert_eq!(bool::KIND, Kind::Scalar(ScalarKind::Bool));
/// assert_eq!(f64::KIND, Kind::Unsupported);
/// ```
pub trait Classify: Reflect + Default {
    const KIND: Kind;
}
