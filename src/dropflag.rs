//! This module is for testing only

use std::rc::Rc;
use std::cell::RefCell;

pub type DropFlag<T> = Rc<RefCell<T>>;

/// Shared count of `Counted` values dropped so far.
#[derive(Clone)]
pub struct DropCounter {
    pub dropflag: DropFlag<usize>,
}

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter { dropflag: DropFlag::new(RefCell::new(0)) }
    }

    pub fn drops(&self) -> usize {
        *self.dropflag.borrow()
    }
}

/// Element type that reports its drop. Default values are not tracked, so
/// slots filled by a fresh block do not show up in the count.
#[derive(Debug, Default)]
pub struct Counted {
    pub data: i32,
    pub dropflag: Option<DropFlag<usize>>,
}

impl Counted {
    pub fn new(data: i32, counter: &DropCounter) -> Counted {
        Counted { data, dropflag: Some(counter.dropflag.clone()) }
    }
}

impl Clone for Counted {
    fn clone(&self) -> Self {
        Counted { data: self.data, dropflag: self.dropflag.clone() }
    }
}

impl PartialEq for Counted {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Drop for Counted {
    fn drop(&mut self) {
        if let Some(flag) = &self.dropflag {
            *flag.borrow_mut() += 1;
        }
    }
}

#[test]
fn dropflag() {
    let counter = DropCounter::new();
    let counted = Counted::new(7, &counter);
    assert_eq!(0, counter.drops());
    std::mem::drop(counted);
    assert_eq!(1, counter.drops());
    std::mem::drop(Counted::default());
    assert_eq!(1, counter.drops());
}
