use std::collections::{HashMap, HashSet};
use std::hash::{DefaultHasher, Hash, Hasher};

use crate::collections::bag::{quantity, BagError};

/// A multiset: a collection that counts how many times each distinct element has been added.
///
/// Every implementation upholds the following, after every call:
/// - [`size`](Bag::size) is the sum of the quantities of all elements.
/// - No element is ever held with a quantity of 0. Removing the last copy of an element removes
///   the element entirely, so it is no longer part of [`iter`](Bag::iter) or
///   [`distinct`](Bag::distinct).
///
/// Quantities are requested as [`i64`] and reported as [`u64`]. A negative request is rejected
/// with [`BagError::NegativeQuantity`] before anything is changed.
///
/// Bags do no internal synchronization. Sharing one for mutation across threads requires an
/// external lock.
pub trait Bag<T> {
    type Iter<'a>: Iterator<Item = (&'a T, u64)> where Self: 'a, T: 'a;

    /// Adds `quantity` copies of `item`, returning true if the bag changed.
    ///
    /// Adding a quantity of 0 is a no-op and returns false.
    fn add(&mut self, item: T, quantity: i64) -> Result<bool, BagError>;

    /// Removes up to `quantity` copies of `item`, returning true if anything was removed.
    ///
    /// If the bag holds `quantity` or fewer copies, the element is removed entirely.
    fn remove(&mut self, item: &T, quantity: i64) -> Result<bool, BagError>;

    /// Removes every element from the bag.
    fn clear(&mut self) -> Result<(), BagError>;

    /// Returns the number of copies of `item` in the bag, 0 if it isn't present.
    fn count(&self, item: &T) -> u64;

    /// Returns the number of distinct elements in the bag.
    fn distinct(&self) -> usize;

    /// Returns the total number of copies of all elements in the bag.
    fn size(&self) -> u64;

    /// Returns an iterator over each distinct element and its quantity.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;

    fn add_one(&mut self, item: T) -> Result<bool, BagError> {
        self.add(item, 1)
    }

    fn remove_one(&mut self, item: &T) -> Result<bool, BagError> {
        self.remove(item, 1)
    }

    /// Removes every copy of `item`, returning true if it was present.
    fn remove_all(&mut self, item: &T) -> Result<bool, BagError> {
        self.remove(item, i64::MAX)
    }

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns true if the bag holds at least one copy of `item`.
    fn contains_any(&self, item: &T) -> bool {
        self.count(item) > 0
    }

    fn contains_exactly(&self, item: &T, quantity: i64) -> Result<bool, BagError> {
        Ok(self.count(item) == quantity::check(quantity)?)
    }

    fn contains_at_least(&self, item: &T, quantity: i64) -> Result<bool, BagError> {
        Ok(self.count(item) >= quantity::check(quantity)?)
    }

    fn contains_at_most(&self, item: &T, quantity: i64) -> Result<bool, BagError> {
        Ok(self.count(item) <= quantity::check(quantity)?)
    }

    /// Returns an element with the smallest quantity, or None if the bag is empty.
    ///
    /// When several elements share the smallest quantity, the first of them in iteration order is
    /// returned. The result is the same for repeated calls as long as the bag isn't mutated.
    fn min(&self) -> Option<&T> {
        self.iter()
            .reduce(|best, next| if next.1 < best.1 { next } else { best })
            .map(|(item, _)| item)
    }

    /// Returns an element with the largest quantity, or None if the bag is empty.
    ///
    /// Ties are resolved the same way as [`min`](Bag::min).
    fn max(&self) -> Option<&T> {
        self.iter()
            .reduce(|best, next| if next.1 > best.1 { next } else { best })
            .map(|(item, _)| item)
    }

    /// Returns the set of distinct elements in the bag.
    fn to_set(&self) -> HashSet<&T>
    where
        T: Hash + Eq,
    {
        self.iter().map(|(item, _)| item).collect()
    }

    /// Returns the quantity held for each distinct element in the bag.
    fn to_map(&self) -> HashMap<&T, u64>
    where
        T: Hash + Eq,
    {
        self.iter().collect()
    }

    /// Returns true if `other` holds exactly the same elements with the same quantities, regardless
    /// of the type of either bag. This is the equality used by every bag in this crate.
    fn content_eq<O: Bag<T> + ?Sized>(&self, other: &O) -> bool {
        self.size() == other.size()
            && self.distinct() == other.distinct()
            && self.iter().all(|(item, quantity)| other.count(item) == quantity)
    }

    /// Returns a hash of the bag's contents that doesn't depend on iteration order, so that bags
    /// which are [`content_eq`](Bag::content_eq) always hash the same.
    fn content_hash(&self) -> u64
    where
        T: Hash,
    {
        let entries = self.iter().fold(0_u64, |acc, (item, quantity)| {
            let mut hasher = DefaultHasher::new();
            item.hash(&mut hasher);
            quantity.hash(&mut hasher);
            acc.wrapping_add(hasher.finish())
        });

        let mut hasher = DefaultHasher::new();
        entries.hash(&mut hasher);
        self.size().hash(&mut hasher);
        hasher.finish()
    }
}

// Lets a decorator work with a borrowed bag, leaving ownership with the caller.
impl<T, B: Bag<T> + ?Sized> Bag<T> for &mut B {
    type Iter<'a> = B::Iter<'a> where Self: 'a, T: 'a;

    fn add(&mut self, item: T, quantity: i64) -> Result<bool, BagError> {
        (**self).add(item, quantity)
    }

    fn remove(&mut self, item: &T, quantity: i64) -> Result<bool, BagError> {
        (**self).remove(item, quantity)
    }

    fn clear(&mut self) -> Result<(), BagError> {
        (**self).clear()
    }

    fn count(&self, item: &T) -> u64 {
        (**self).count(item)
    }

    fn distinct(&self) -> usize {
        (**self).distinct()
    }

    fn size(&self) -> u64 {
        (**self).size()
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        (**self).iter()
    }

    fn min(&self) -> Option<&T> {
        (**self).min()
    }

    fn max(&self) -> Option<&T> {
        (**self).max()
    }
}
