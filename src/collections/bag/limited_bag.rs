use std::fmt::{self, Formatter};

use log::{debug, trace};

use super::{quantity, BagError, Filter, FilterBag, LimitTooSmall};
use crate::collections::traits::Bag;

/// The smallest limit accepted by a [`LimitedBag`].
pub const MIN_LIMIT: u32 = 2;

/// A bag that holds at most `limit` distinct elements, evicting the least frequent element to
/// make room for a new one.
///
/// When an element that isn't already present is added while the bag is full, every copy of the
/// element reported by the delegate's [`min`](Bag::min) is removed first. Adding to an element
/// that is already present never evicts anything, and neither do any of the other operations.
///
/// Ties for the least frequent element are broken by the delegate's iteration order. With the
/// default [`HashMap`](std::collections::HashMap) backing that order is arbitrary, so which of
/// several equally rare elements is evicted can differ between runs. Back the delegate with a
/// [`BTreeMap`](std::collections::BTreeMap) to always evict the smallest of them.
///
/// An add that is rejected, for example because it would overflow the bag, evicts nothing.
///
/// The limit isn't part of the bag's identity: a LimitedBag is equal to any other bag with the
/// same contents, regardless of limits.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of distinct elements in the LimitedBag.
/// - `a`: The time complexity of the delegate's `add`.
///
/// | Method | Complexity |
/// |-|-|
/// | `add` | `O(a)`, `O(n)`* |
/// | `with_limit` | `O(n²)`** |
///
/// \* When an element has to be evicted, the delegate's `min` is usually a linear scan.
///
/// \** Only if the delegate starts out with more than `limit` distinct elements.
pub type LimitedBag<T, B> = FilterBag<T, B, Limit>;

/// The [`Filter`] that enforces the limit of a [`LimitedBag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    limit: u32,
}

impl Limit {
    pub const fn get(&self) -> u32 {
        self.limit
    }

    const fn is_reached(&self, distinct: usize) -> bool {
        // A u32 always fits in a usize on the platforms std supports.
        distinct >= self.limit as usize
    }

    /// Returns a copy of the delegate's least frequent element.
    ///
    /// # Panics
    /// Panics if the delegate has no minimum despite being non-empty.
    fn victim<T: Clone, B: Bag<T>>(delegate: &B) -> T {
        match delegate.min() {
            Some(victim) => victim.clone(),
            None => panic!(
                "Bag with {} distinct elements has no least frequent element!",
                delegate.distinct()
            ),
        }
    }

    /// Removes every copy of `victim` from the delegate.
    ///
    /// # Panics
    /// Panics if removing the victim didn't reduce the number of distinct elements by exactly one.
    fn evict<T, B: Bag<T>>(&self, delegate: &mut B, victim: &T) -> Result<(), BagError> {
        let before = delegate.distinct();
        let held = delegate.count(victim);

        delegate.remove_all(victim)?;

        assert_eq!(
            delegate.distinct() + 1, before,
            "Evicting the least frequent element must remove exactly one distinct element!"
        );
        debug!(
            "Evicted least frequent element ({held} held) from bag with {before} distinct \
            elements and limit {}",
            self.limit
        );
        Ok(())
    }
}

impl<T: Clone> Filter<T> for Limit {
    fn before_add<B: Bag<T>>(
        &mut self,
        delegate: &mut B,
        item: &T,
        quantity: i64,
    ) -> Result<(), BagError> {
        let quantity = quantity::check(quantity)?;

        // Adding nothing, or adding to a present element, doesn't grow the number of elements.
        if quantity == 0 || delegate.contains_any(item) || !self.is_reached(delegate.distinct()) {
            return Ok(());
        }

        // The add has to fit once the victim is gone, or nothing may be evicted.
        let victim = Limit::victim(delegate);
        quantity::grow(delegate.size().saturating_sub(delegate.count(&victim)), quantity)?;

        self.evict(delegate, &victim)
    }

    fn fmt_suffix(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, " (limit: {})", self.limit)
    }
}

impl<T: Clone, B: Bag<T>> FilterBag<T, B, Limit> {
    /// Creates a LimitedBag that holds at most `limit` distinct elements of `delegate`.
    ///
    /// If the delegate already holds more than `limit` distinct elements, its least frequent
    /// elements are evicted until it doesn't.
    ///
    /// # Errors
    /// Returns [`BagError::LimitTooSmall`] if `limit` is less than [`MIN_LIMIT`], before the
    /// delegate is touched. Any error the delegate returns while evicting is propagated, for
    /// example if it is [`Unmodifiable`](super::Unmodifiable).
    ///
    /// # Panics
    /// Panics if an eviction doesn't reduce the number of distinct elements in the delegate.
    ///
    /// # Examples
    /// ```
    /// # use bag_lib::collections::bag::{LimitedBag, MapBag};
    /// # use bag_lib::collections::traits::Bag;
    /// let mut counted = MapBag::new();
    /// counted.add("foo", 2).unwrap();
    /// counted.add("bar", 1).unwrap();
    ///
    /// let mut bag = LimitedBag::with_limit(counted, 2).unwrap();
    /// bag.add("baz", 1).unwrap();
    ///
    /// assert_eq!(bag.distinct(), 2);
    /// assert!(!bag.contains_any(&"bar"));
    /// ```
    pub fn with_limit(mut delegate: B, limit: u32) -> Result<LimitedBag<T, B>, BagError> {
        if limit < MIN_LIMIT {
            return Err(LimitTooSmall { limit }.into());
        }

        let filter = Limit { limit };
        while delegate.distinct() > limit as usize {
            trace!("Normalizing bag with {} distinct elements to limit {limit}", delegate.distinct());
            let victim = Limit::victim(&delegate);
            filter.evict(&mut delegate, &victim)?;
        }

        Ok(FilterBag::with_filter(delegate, filter))
    }

    /// Returns the maximum number of distinct elements the bag will hold.
    pub const fn limit(&self) -> u32 {
        self.filter.get()
    }
}
