use crate::Reflect;
use crate::ops::{ScalarError, ScalarValue};

/// A trait used to power text-keyed map-like operations via reflection.
///
/// Keys are scalars; only narrow and wide text keys are ever read or written.
pub trait Mapping: Reflect {
    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the mapping has no entry.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the key-value pairs, in the map's own order.
    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_>;

    /// Inserts a default value under `key` and returns it.
    ///
    /// An existing value under the same key is reset to its default.
    fn insert_default(&mut self, key: ScalarValue) -> Result<&mut dyn Reflect, ScalarError>;

    /// Removes all entries.
    fn clear(&mut self);
}
