/// Capacity request used to pick the "reserve only" constructor.
///
/// `SimpleVector::from(reserve(10))` has capacity 10 and no elements, while
/// `SimpleVector::with_size(10)` has ten default elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReserveProxy {
    capacity: usize,
}

impl ReserveProxy {
    pub const fn new(capacity: usize) -> ReserveProxy {
        ReserveProxy { capacity }
    }

    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Builds a capacity request for `capacity` elements.
pub const fn reserve(capacity: usize) -> ReserveProxy {
    ReserveProxy::new(capacity)
}
