use crate::Reflect;

/// A trait used to power homogeneous list-like operations via reflection.
///
/// Elements are only ever appended as default values and then filled in
/// place, so the element type never has to be named.
pub trait Sequence: Reflect {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence has no element.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at `index`, if present.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns an iterator over the elements, in order.
    fn iter(&self) -> SequenceIter<'_>;

    /// Appends a default-constructed element and returns it.
    fn push_default(&mut self) -> &mut dyn Reflect;

    /// Removes all elements.
    fn clear(&mut self);
}

/// An iterator over the elements of a [`Sequence`].
pub struct SequenceIter<'a> {
    sequence: &'a dyn Sequence,
    index: usize,
}

impl<'a> SequenceIter<'a> {
    #[inline(always)]
    pub const fn new(sequence: &'a dyn Sequence) -> Self {
        Self { sequence, index: 0 }
    }
}

impl<'a> Iterator for SequenceIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.sequence.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.sequence.len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for SequenceIter<'_> {}
