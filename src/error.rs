use std::fmt::Display;

/// Checked access past the live elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    pub index: usize,
    pub len: usize,
}

impl Display for OutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Index {} is out of range for vector of size {}", self.index, self.len)
    }
}

impl std::error::Error for OutOfRange {}
