use crate::block::Block;

/// Owning iterator over the live elements of a `SimpleVector`.
///
/// Each element is taken out of its slot, leaving `T::default()` behind. The
/// block, including any spare slots, is released when the iterator is dropped.
///
/// Because of that, consuming a vector by value requires `T: Default`, even
/// for vectors built through `From<[T; N]>` or `From<&[T]>`, which do not.
/// Borrowing iteration (`iter`, `&vector`) has no such bound.
pub struct IntoIter<T> {
    items: Block<T>,
    front: usize,
    back: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(items: Block<T>, len: usize) -> IntoIter<T> {
        debug_assert!(len <= items.capacity());
        IntoIter { items, front: 0, back: len }
    }

    /// The elements not yielded yet.
    pub fn as_slice(&self) -> &[T] {
        &self.items.as_slice()[self.front..self.back]
    }
}

impl<T> Iterator for IntoIter<T> where T: Default {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = std::mem::take(&mut self.items[self.front]);
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> where T: Default {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(std::mem::take(&mut self.items[self.back]))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> where T: Default {
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<T> std::iter::FusedIterator for IntoIter<T> where T: Default {}
