use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use super::BagError;
use crate::collections::traits::Bag;

/// A policy applied by a [`FilterBag`] before it forwards a mutation to its delegate.
///
/// Every hook permits the mutation by default. Reads are never filtered.
pub trait Filter<T> {
    /// Called before `quantity` copies of `item` are added to `delegate`.
    ///
    /// The quantity is passed on as requested, so a filter that rejects every add does so before
    /// the quantity is validated. A filter that mutates the delegate must validate it first.
    fn before_add<B: Bag<T>>(
        &mut self,
        delegate: &mut B,
        item: &T,
        quantity: i64,
    ) -> Result<(), BagError> {
        let _ = (delegate, item, quantity);
        Ok(())
    }

    fn before_remove<B: Bag<T>>(&mut self, delegate: &B, item: &T) -> Result<(), BagError> {
        let _ = (delegate, item);
        Ok(())
    }

    fn before_clear<B: Bag<T>>(&mut self, delegate: &B) -> Result<(), BagError> {
        let _ = delegate;
        Ok(())
    }

    /// Writes anything the filter adds to the [`Display`] output of the delegate.
    fn fmt_suffix(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let _ = f;
        Ok(())
    }
}

/// The [`Filter`] that permits everything.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Forward;

impl<T> Filter<T> for Forward {}

/// A [`Bag`] that wraps another, applying a [`Filter`] to each mutation before forwarding it.
///
/// A FilterBag is indistinguishable from its delegate when it comes to identity: equality and
/// hashing are both based purely on the contents of the bag, so a FilterBag is equal to its
/// delegate and hashes the same. Its [`Display`] output is that of the delegate, followed by
/// anything the filter adds.
///
/// The delegate is owned by the FilterBag for its entire lifetime. To decorate a bag without
/// giving it away, wrap a mutable reference to it instead, because `&mut B` is a [`Bag`] too.
///
/// [`Unmodifiable`](super::Unmodifiable) and [`LimitedBag`](super::LimitedBag) are both
/// FilterBags with their own filter.
pub struct FilterBag<T, B, F = Forward> {
    pub(crate) delegate: B,
    pub(crate) filter: F,
    _item: PhantomData<T>,
}

impl<T, B: Bag<T>> FilterBag<T, B, Forward> {
    /// Creates a FilterBag that forwards everything to `delegate`.
    ///
    /// # Examples
    /// ```
    /// # use bag_lib::collections::bag::{FilterBag, MapBag};
    /// # use bag_lib::collections::traits::Bag;
    /// let mut bag = FilterBag::new(MapBag::new());
    /// bag.add("foo", 2).unwrap();
    /// assert_eq!(bag.delegate().count(&"foo"), 2);
    /// ```
    pub const fn new(delegate: B) -> FilterBag<T, B, Forward> {
        FilterBag::with_filter(delegate, Forward)
    }

    /// Returns a mutable reference to the delegate.
    pub const fn delegate_mut(&mut self) -> &mut B {
        &mut self.delegate
    }
}

impl<T, B: Bag<T>, F: Filter<T>> FilterBag<T, B, F> {
    pub(crate) const fn with_filter(delegate: B, filter: F) -> FilterBag<T, B, F> {
        FilterBag {
            delegate,
            filter,
            _item: PhantomData,
        }
    }

    /// Returns a reference to the delegate.
    pub const fn delegate(&self) -> &B {
        &self.delegate
    }

    /// Consumes the FilterBag, returning the delegate.
    pub fn into_inner(self) -> B {
        self.delegate
    }
}

impl<T, B: Bag<T>, F: Filter<T>> Bag<T> for FilterBag<T, B, F> {
    type Iter<'a> = B::Iter<'a> where Self: 'a, T: 'a;

    fn add(&mut self, item: T, quantity: i64) -> Result<bool, BagError> {
        self.filter.before_add(&mut self.delegate, &item, quantity)?;
        self.delegate.add(item, quantity)
    }

    fn remove(&mut self, item: &T, quantity: i64) -> Result<bool, BagError> {
        self.filter.before_remove(&self.delegate, item)?;
        self.delegate.remove(item, quantity)
    }

    fn clear(&mut self) -> Result<(), BagError> {
        self.filter.before_clear(&self.delegate)?;
        self.delegate.clear()
    }

    fn count(&self, item: &T) -> u64 {
        self.delegate.count(item)
    }

    fn distinct(&self) -> usize {
        self.delegate.distinct()
    }

    fn size(&self) -> u64 {
        self.delegate.size()
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        self.delegate.iter()
    }

    fn min(&self) -> Option<&T> {
        self.delegate.min()
    }

    fn max(&self) -> Option<&T> {
        self.delegate.max()
    }
}

impl<T, B: Bag<T>, F: Filter<T>, O: Bag<T>> PartialEq<O> for FilterBag<T, B, F> {
    fn eq(&self, other: &O) -> bool {
        self.content_eq(other)
    }
}

impl<T, B: Bag<T>, F: Filter<T>> Eq for FilterBag<T, B, F> {}

impl<T: Hash, B: Bag<T>, F: Filter<T>> Hash for FilterBag<T, B, F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.content_hash());
    }
}

impl<T, B: Debug, F: Debug> Debug for FilterBag<T, B, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterBag")
            .field("delegate", &self.delegate)
            .field("filter", &self.filter)
            .finish()
    }
}

impl<T, B: Display, F: Filter<T>> Display for FilterBag<T, B, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.delegate)?;
        self.filter.fmt_suffix(f)
    }
}
