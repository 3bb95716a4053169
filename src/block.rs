use std::ops::{Index, IndexMut};

/// A single owned, fixed-size block of element slots.
///
/// The block never grows in place: a bigger block is a new `Block` and the old
/// one is released when superseded. It has no idea which of its slots are in
/// use, that is tracked by the owner.
pub struct Block<T> {
    data: Box<[T]>,
}

impl<T> Block<T> {
    /// A block with zero capacity. Owns no storage.
    pub fn empty() -> Block<T> {
        Block {
            data: Box::default(),
        }
    }

    /// Adopts an already allocated block of slots.
    pub fn from_boxed_slice(data: Box<[T]>) -> Block<T> {
        trace!("adopt  block of {} slots", data.len());
        Block { data }
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if this block owns any storage.
    #[inline(always)]
    pub fn is_allocated(&self) -> bool {
        !self.data.is_empty()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Exchanges the storage owned by two blocks. Slot values are not touched.
    #[inline(always)]
    pub fn swap(&mut self, other: &mut Block<T>) {
        std::mem::swap(&mut self.data, &mut other.data);
    }

    /// Gives up ownership of the storage, leaving this block empty.
    pub fn release(&mut self) -> Box<[T]> {
        trace!("release block of {} slots", self.data.len());
        std::mem::take(&mut self.data)
    }
}

impl<T> Block<T> where T: Default {
    /// Allocates `capacity` slots, each holding `T::default()`.
    pub fn new(capacity: usize) -> Block<T> {
        if capacity == 0 {
            return Block::empty();
        }
        trace!("init   block of {} slots ({} bytes each)", capacity, std::mem::size_of::<T>());
        Block {
            data: (0..capacity).map(|_| T::default()).collect(),
        }
    }
}

impl<T> Default for Block<T> {
    fn default() -> Self {
        Block::empty()
    }
}

impl<T> Index<usize> for Block<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        debug_assert!(index < self.data.len(), "block index {} out of capacity {}", index, self.data.len());
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Block<T> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.data.len(), "block index {} out of capacity {}", index, self.data.len());
        &mut self.data[index]
    }
}
