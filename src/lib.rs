//! Growable array with explicit capacity management.
//!
//! `SimpleVector` keeps its elements in one owned block of slots. Appending
//! doubles the block when it is full, `reserve` and `resize` control the
//! capacity directly, and `insert`/`erase` shift elements inside the block.

/// Builds a `SimpleVector` from a list of elements or from `value; count`.
#[macro_export]
macro_rules! simple_vector {
    () => (
        $crate::SimpleVector::new()
    );
    ($value:expr; $n:expr) => (
        $crate::SimpleVector::from_elem($n, $value)
    );
    ($($x:expr),+ $(,)?) => (
        $crate::SimpleVector::from([$($x),+])
    );
}

#[macro_use]
mod logging;
mod block;
mod error;
mod iter;
mod reserve;
mod traits;
mod vector;

pub use block::Block;
pub use error::OutOfRange;
pub use iter::IntoIter;
pub use reserve::{reserve, ReserveProxy};
pub use traits::SimpleVectorIterator;
pub use vector::SimpleVector;

#[cfg(test)]
pub mod dropflag;
