use alloc::collections::BTreeMap;
use core::any::type_name;
use core::hash::{BuildHasher, Hash};
use std::collections::HashMap;

use crate::impls::utils::impl_reflect_common;
use crate::info::Kind;
use crate::ops::{Mapping, ReflectMut, ScalarError, ScalarValue, Sequence, SequenceIter};
use crate::{Classify, Reflect};

// -----------------------------------------------------------------------------
// Vec

impl<T: Classify> Reflect for Vec<T> {
    impl_reflect_common!(Sequence);
}

impl<T: Classify> Classify for Vec<T> {
    const KIND: Kind = Kind::sequence_of(T::KIND);
}

impl<T: Classify> Sequence for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.as_slice().get(index).map(|value| value as &dyn Reflect)
    }

    #[inline]
    fn iter(&self) -> SequenceIter<'_> {
        SequenceIter::new(self)
    }

    fn push_default(&mut self) -> &mut dyn Reflect {
        let index = Vec::len(self);
        self.push(T::default());
        &mut self[index]
    }

    #[inline]
    fn clear(&mut self) {
        Vec::clear(self);
    }
}

// -----------------------------------------------------------------------------
// Maps

/// Builds a key of type `K` out of a scalar.
fn key_from_scalar<K: Classify>(key: ScalarValue) -> Result<K, ScalarError> {
    let mut result = K::default();
    match result.reflect_mut() {
        ReflectMut::Scalar(scalar) => scalar.set_scalar(key)?,
        _ => {
            return Err(ScalarError::Mismatch {
                expected: "a scalar key",
                found: key.shape(),
                target: type_name::<K>(),
            });
        }
    }
    Ok(result)
}

impl<K: Classify + Ord, V: Classify> Reflect for BTreeMap<K, V> {
    impl_reflect_common!(Mapping);
}

impl<K: Classify + Ord, V: Classify> Classify for BTreeMap<K, V> {
    const KIND: Kind = Kind::mapping_of(K::KIND, V::KIND);
}

impl<K: Classify + Ord, V: Classify> Mapping for BTreeMap<K, V> {
    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
        Box::new(BTreeMap::iter(self).map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect)))
    }

    fn insert_default(&mut self, key: ScalarValue) -> Result<&mut dyn Reflect, ScalarError> {
        let key = key_from_scalar::<K>(key)?;
        let value = self.entry(key).or_default();
        *value = V::default();
        Ok(value as &mut dyn Reflect)
    }

    #[inline]
    fn clear(&mut self) {
        BTreeMap::clear(self);
    }
}

impl<K, V, S> Reflect for HashMap<K, V, S>
where
    K: Classify + Eq + Hash,
    V: Classify,
    S: BuildHasher + Default + 'static,
{
    impl_reflect_common!(Mapping);
}

impl<K, V, S> Classify for HashMap<K, V, S>
where
    K: Classify + Eq + Hash,
    V: Classify,
    S: BuildHasher + Default + 'static,
{
    const KIND: Kind = Kind::mapping_of(K::KIND, V::KIND);
}

impl<K, V, S> Mapping for HashMap<K, V, S>
where
    K: Classify + Eq + Hash,
    V: Classify,
    S: BuildHasher + Default + 'static,
{
    #[inline]
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
        Box::new(HashMap::iter(self).map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect)))
    }

    fn insert_default(&mut self, key: ScalarValue) -> Result<&mut dyn Reflect, ScalarError> {
        let key = key_from_scalar::<K>(key)?;
        let value = self.entry(key).or_default();
        *value = V::default();
        Ok(value as &mut dyn Reflect)
    }

    #[inline]
    fn clear(&mut self) {
        HashMap::clear(self);
    }
}

// -----------------------------------------------------------------------------
// Tests
