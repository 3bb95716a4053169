use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use crate::block::Block;
use crate::error::OutOfRange;
use crate::iter::IntoIter;
use crate::reserve::ReserveProxy;

/// Growable array backed by a single owned `Block`.
///
/// Slots `[0, len)` hold live elements. Slots `[len, capacity)` are allocated
/// but logically absent: they hold defaults or leftovers of removed elements
/// and are never handed out by the checked accessors or the slice views.
///
/// When the block is full, the capacity doubles (`0` becomes `1`), the live
/// elements are moved into the new block in order and the old block is
/// released right away.
pub struct SimpleVector<T> {
    items: Block<T>,
    len: usize,
}

impl<T> SimpleVector<T> {
    /// Empty vector, no storage.
    pub fn new() -> SimpleVector<T> {
        SimpleVector {
            items: Block::empty(),
            len: 0,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Checked access. Fails with `OutOfRange` when `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        if index >= self.len {
            return Err(OutOfRange { index, len: self.len });
        }
        Ok(&self.items[index])
    }

    /// Checked mutable access. Fails with `OutOfRange` when `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        if index >= self.len {
            return Err(OutOfRange { index, len: self.len });
        }
        Ok(&mut self.items[index])
    }

    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline(always)]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// The live elements. Valid until the next operation that reallocates or
    /// shifts elements.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.items.as_slice()[..self.len]
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        &mut self.items.as_mut_slice()[..len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Removes the element at `index` by moving every follower one slot to
    /// the left, and returns the index of the slot now holding the follower
    /// (equal to the new `len` if the last element was removed).
    ///
    /// `index` must be below `len`.
    pub fn erase(&mut self, index: usize) -> usize {
        debug_assert!(index < self.len, "erase index {} out of range for size {}", index, self.len);
        let len = self.len;
        self.items.as_mut_slice()[index..len].rotate_left(1);
        self.len -= 1;
        index
    }

    /// Shortens the vector to `len` elements, keeping the block.
    pub fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.len = len;
        }
    }

    /// Forgets every element. Capacity and block are kept for reuse.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Exchanges contents with `other` in constant time.
    pub fn swap(&mut self, other: &mut SimpleVector<T>) {
        std::mem::swap(&mut self.len, &mut other.len);
        self.items.swap(&mut other.items);
    }

    /// Moves the contents out, leaving `self` empty with zero capacity.
    pub fn take(&mut self) -> SimpleVector<T> {
        let mut moved = SimpleVector::new();
        moved.swap(self);
        moved
    }

    /// Move-assignment: `self` takes over the contents of `source`, which is
    /// left empty with zero capacity. The previous contents of `self` are
    /// dropped.
    pub fn assign(&mut self, source: &mut SimpleVector<T>) {
        let mut tmp = source.take();
        self.swap(&mut tmp);
    }
}

impl<T> SimpleVector<T> where T: Default {
    /// `size` default elements, capacity `size`.
    pub fn with_size(size: usize) -> SimpleVector<T> {
        SimpleVector {
            items: Block::new(size),
            len: size,
        }
    }

    /// No elements, capacity `capacity`.
    pub fn with_capacity(capacity: usize) -> SimpleVector<T> {
        SimpleVector {
            items: Block::new(capacity),
            len: 0,
        }
    }

    pub fn with_reserve(proxy: ReserveProxy) -> SimpleVector<T> {
        SimpleVector::with_capacity(proxy.capacity())
    }

    /// `size` copies of `value`, capacity `size`.
    pub fn from_elem(size: usize, value: T) -> SimpleVector<T> where T: Clone {
        let mut items = Block::new(size);
        items.as_mut_slice().fill(value);
        SimpleVector { items, len: size }
    }

    /// Makes room for at least `new_capacity` elements. The new block has
    /// exactly `new_capacity` slots; nothing happens if the current one is
    /// already that big.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity() {
            self.relocate(new_capacity, "reserve");
        }
    }

    /// Changes the number of live elements.
    ///
    /// Shrinking only moves `len`. Growing inside the current block resets
    /// the new slots to `T::default()`. Growing to or past the capacity moves
    /// to a block of `max(new_size, capacity * 2)` slots.
    pub fn resize(&mut self, new_size: usize) {
        if new_size < self.len {
            self.len = new_size;
        } else if new_size < self.capacity() {
            let len = self.len;
            for slot in &mut self.items.as_mut_slice()[len..new_size] {
                *slot = T::default();
            }
            self.len = new_size;
        } else {
            let new_capacity = new_size.max(self.capacity() * 2);
            if new_capacity > self.capacity() {
                self.relocate(new_capacity, "resize");
            }
            self.len = new_size;
        }
    }

    /// Appends `value`, doubling the capacity if the block is full.
    pub fn push_back(&mut self, value: T) {
        if self.len == self.capacity() {
            self.relocate(self.grown_capacity(), "push_back");
        }
        self.items[self.len] = value;
        self.len += 1;
    }

    pub fn push_back_cloned(&mut self, value: &T) where T: Clone {
        self.push_back(value.clone())
    }

    /// Inserts `value` at `index`, shifting the tail one slot to the right,
    /// and returns the inserted element.
    ///
    /// `index` must not exceed `len`; `index == len` appends.
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        debug_assert!(index <= self.len, "insert index {} out of range for size {}", index, self.len);
        let len = self.len;
        if len == self.capacity() {
            let new_capacity = self.grown_capacity();
            debug!("insert: grow capacity {} -> {} ({} live)", self.capacity(), new_capacity, len);
            let mut items = Block::new(new_capacity);
            {
                let old = self.items.as_mut_slice();
                let new = items.as_mut_slice();
                new[..index].swap_with_slice(&mut old[..index]);
                new[index] = value;
                new[index + 1..=len].swap_with_slice(&mut old[index..len]);
            }
            self.items.swap(&mut items);
        } else {
            self.items[len] = value;
            self.items.as_mut_slice()[index..=len].rotate_right(1);
        }
        self.len += 1;
        &mut self.items[index]
    }

    /// Removes the last element and hands it back. Does nothing on an empty
    /// vector.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(std::mem::take(&mut self.items[self.len]))
    }

    /// Same as `erase`, but returns the removed element.
    pub fn remove(&mut self, index: usize) -> T {
        self.erase(index);
        std::mem::take(&mut self.items[self.len])
    }

    #[inline(always)]
    fn grown_capacity(&self) -> usize {
        match self.capacity() {
            0 => 1,
            capacity => capacity * 2,
        }
    }

    /// Moves live elements into a fresh block of `new_capacity` slots and
    /// releases the old block.
    #[cfg_attr(not(feature = "logging"), allow(unused_variables))]
    fn relocate(&mut self, new_capacity: usize, reason: &'static str) {
        debug_assert!(new_capacity >= self.len);
        debug!("{}: grow capacity {} -> {} ({} live)", reason, self.capacity(), new_capacity, self.len);
        let len = self.len;
        let mut items = Block::new(new_capacity);
        items.as_mut_slice()[..len].swap_with_slice(&mut self.items.as_mut_slice()[..len]);
        self.items.swap(&mut items);
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        SimpleVector::new()
    }
}

impl<T> Clone for SimpleVector<T> where T: Clone + Default {
    /// The copy keeps the capacity of the source, not just its length.
    fn clone(&self) -> Self {
        let mut items = Block::new(self.capacity());
        items.as_mut_slice()[..self.len].clone_from_slice(self.as_slice());
        SimpleVector { items, len: self.len }
    }

    fn clone_from(&mut self, source: &Self) {
        let mut tmp = source.clone();
        self.swap(&mut tmp);
    }
}

impl<T> From<ReserveProxy> for SimpleVector<T> where T: Default {
    fn from(proxy: ReserveProxy) -> Self {
        SimpleVector::with_reserve(proxy)
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    fn from(items: [T; N]) -> Self {
        let data: Box<[T]> = Box::new(items);
        SimpleVector {
            items: Block::from_boxed_slice(data),
            len: N,
        }
    }
}

impl<T> From<&[T]> for SimpleVector<T> where T: Clone {
    fn from(items: &[T]) -> Self {
        SimpleVector {
            items: Block::from_boxed_slice(items.into()),
            len: items.len(),
        }
    }
}

impl<T> FromIterator<T> for SimpleVector<T> where T: Default {
    fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> Self {
        let mut vector = SimpleVector::new();
        vector.extend(iter);
        vector
    }
}

impl<T> Extend<T> for SimpleVector<T> where T: Default {
    fn extend<I: IntoIterator<Item=T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let needed = self.len + lower;
        if needed > self.capacity() {
            self.reserve(needed.max(self.grown_capacity()));
        }
        for item in iter {
            self.push_back(item);
        }
    }
}

/// Iterating by value needs `T: Default`, see `IntoIter`.
impl<T> IntoIterator for SimpleVector<T> where T: Default {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.items, self.len)
    }
}

impl<'a, T> IntoIterator for &'a SimpleVector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVector<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Unchecked access: `index` must be below `len`. Only debug builds verify it.
impl<T> Index<usize> for SimpleVector<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "index {} out of range for size {}", index, self.len);
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for SimpleVector<T> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len, "index {} out of range for size {}", index, self.len);
        &mut self.items[index]
    }
}

impl<T> PartialEq for SimpleVector<T> where T: PartialEq {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> Eq for SimpleVector<T> where T: Eq {}

impl<T> PartialOrd for SimpleVector<T> where T: PartialOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T> Ord for SimpleVector<T> where T: Ord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T> Hash for SimpleVector<T> where T: Hash {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Debug for SimpleVector<T> where T: Debug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}


#[cfg(test)]
mod vector_proptests {
    use crate::SimpleVector;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Push(i32),
        Insert(usize, i32),
        Erase(usize),
        Pop,
        Resize(usize),
        Reserve(usize),
        Clear,
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<i32>().prop_map(Op::Push),
            (any::<usize>(), any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
            any::<usize>().prop_map(Op::Erase),
            Just(Op::Pop),
            (0usize..40).prop_map(Op::Resize),
            (0usize..40).prop_map(Op::Reserve),
            Just(Op::Clear),
        ]
    }

    fn grown(capacity: usize) -> usize {
        if capacity == 0 { 1 } else { capacity * 2 }
    }

    proptest! {
        #[test]
        fn push_back_keeps_prefix_and_doubles(items in prop::collection::vec(any::<i32>(), 0..100)) {
            let mut v = SimpleVector::new();
            for (i, item) in items.iter().enumerate() {
                let capacity = v.capacity();
                v.push_back(*item);
                prop_assert_eq!(i + 1, v.len());
                let expected = if i < capacity { capacity } else { grown(capacity) };
                prop_assert_eq!(expected, v.capacity());
                prop_assert_eq!(&items[..=i], v.as_slice());
            }
        }

        #[test]
        fn insert_then_erase_at_front_round_trips(
            items in prop::collection::vec(any::<i32>(), 0..50),
            value in any::<i32>(),
        ) {
            let mut v: SimpleVector<i32> = items.iter().copied().collect();
            v.insert(0, value);
            prop_assert_eq!(value, v[0]);
            v.erase(0);
            prop_assert_eq!(&items[..], v.as_slice());
        }

        #[test]
        fn clone_is_equal_and_independent(items in prop::collection::vec(any::<i32>(), 1..50)) {
            let source: SimpleVector<i32> = items.iter().copied().collect();
            let mut copy = source.clone();
            prop_assert_eq!(&source, &copy);
            prop_assert_eq!(source.capacity(), copy.capacity());
            copy[0] = copy[0].wrapping_add(1);
            prop_assert_eq!(&items[..], source.as_slice());

            let mut source = source;
            let copy = source.clone();
            source[0] = source[0].wrapping_add(1);
            source.push_back(0);
            prop_assert_eq!(&items[..], copy.as_slice());
        }

        #[test]
        fn take_empties_source(items in prop::collection::vec(any::<i32>(), 0..50)) {
            let mut source: SimpleVector<i32> = items.iter().copied().collect();
            let moved = source.take();
            prop_assert_eq!(&items[..], moved.as_slice());
            prop_assert_eq!(0, source.len());
            prop_assert_eq!(0, source.capacity());
        }

        #[test]
        fn at_fails_exactly_past_len(items in prop::collection::vec(any::<i32>(), 0..50), index in 0usize..100) {
            let v: SimpleVector<i32> = items.iter().copied().collect();
            prop_assert_eq!(index >= v.len(), v.at(index).is_err());
        }

        #[test]
        fn behaves_like_model(ops in prop::collection::vec(arb_op(), 0..200)) {
            let mut v = SimpleVector::new();
            let mut model: Vec<i32> = Vec::new();
            for op in ops {
                let capacity = v.capacity();
                match op {
                    Op::Push(value) => {
                        v.push_back(value);
                        model.push(value);
                    }
                    Op::Insert(index, value) => {
                        let index = index % (model.len() + 1);
                        v.insert(index, value);
                        model.insert(index, value);
                    }
                    Op::Erase(index) => {
                        if !model.is_empty() {
                            let index = index % model.len();
                            v.erase(index);
                            model.remove(index);
                        }
                    }
                    Op::Pop => {
                        prop_assert_eq!(model.pop(), v.pop_back());
                    }
                    Op::Resize(size) => {
                        v.resize(size);
                        model.resize(size, 0);
                        if size >= capacity {
                            prop_assert_eq!(size.max(capacity * 2), v.capacity());
                        }
                    }
                    Op::Reserve(size) => {
                        v.reserve(size);
                        prop_assert_eq!(size.max(capacity), v.capacity());
                    }
                    Op::Clear => {
                        v.clear();
                        model.clear();
                    }
                }
                prop_assert!(v.capacity() >= capacity, "capacity never shrinks");
                prop_assert!(v.len() <= v.capacity());
                prop_assert_eq!(&model[..], v.as_slice());
            }
        }
    }
}
