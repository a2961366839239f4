use super::{BagError, Filter, FilterBag, Mutation, UnsupportedOperation};
use crate::collections::traits::Bag;

/// A read-only view of a bag. Every mutation fails with [`BagError::UnsupportedOperation`], while
/// all reads are forwarded to the delegate.
///
/// Because an Unmodifiable bag never mutates, it can be shared between threads for reading as long
/// as the delegate can.
pub type Unmodifiable<T, B> = FilterBag<T, B, ReadOnly>;

/// The [`Filter`] that rejects every mutation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReadOnly;

impl ReadOnly {
    const fn reject(operation: Mutation) -> Result<(), BagError> {
        Err(BagError::UnsupportedOperation(UnsupportedOperation { operation }))
    }
}

impl<T> Filter<T> for ReadOnly {
    fn before_add<B: Bag<T>>(&mut self, _: &mut B, _: &T, _: i64) -> Result<(), BagError> {
        ReadOnly::reject(Mutation::Add)
    }

    fn before_remove<B: Bag<T>>(&mut self, _: &B, _: &T) -> Result<(), BagError> {
        ReadOnly::reject(Mutation::Remove)
    }

    fn before_clear<B: Bag<T>>(&mut self, _: &B) -> Result<(), BagError> {
        ReadOnly::reject(Mutation::Clear)
    }
}

impl<T, B: Bag<T>> FilterBag<T, B, ReadOnly> {
    /// Creates a read-only view of `delegate`.
    ///
    /// # Examples
    /// ```
    /// # use bag_lib::collections::bag::{MapBag, Unmodifiable};
    /// # use bag_lib::collections::traits::Bag;
    /// let counted: MapBag<_> = ["a", "a", "b"].into_iter().collect();
    /// let mut bag = Unmodifiable::unmodifiable(counted);
    /// assert!(bag.add("c", 1).unwrap_err().is_unsupported_operation());
    /// assert_eq!(bag.count(&"a"), 2);
    /// ```
    pub const fn unmodifiable(delegate: B) -> Unmodifiable<T, B> {
        FilterBag::with_filter(delegate, ReadOnly)
    }
}
