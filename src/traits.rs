use crate::SimpleVector;

/// Implements collect to `SimpleVector`.
pub trait SimpleVectorIterator: Iterator {
    fn collect_simple_vector(self) -> SimpleVector<Self::Item>
        where
            Self::Item: Default;

    /// Collects `Ok` items, stopping at the first `Err`.
    fn collect_result_simple_vector<I, E>(self) -> Result<SimpleVector<I>, E>
        where
            Self: Iterator<Item=Result<I, E>>,
            I: Default;
}

impl<Q: Iterator> SimpleVectorIterator for Q {
    fn collect_simple_vector(self) -> SimpleVector<Self::Item>
        where
            Self::Item: Default
    {
        let mut vector = SimpleVector::new();
        for item in self {
            vector.push_back(item);
        }
        vector
    }

    fn collect_result_simple_vector<I, E>(self) -> Result<SimpleVector<I>, E>
        where
            Self: Iterator<Item=Result<I, E>>,
            I: Default
    {
        let mut vector = SimpleVector::new();
        for item in self {
            vector.push_back(item?);
        }
        Ok(vector)
    }
}
