//! Functions for creating and normalizing bags without having to pick an implementation.
//!
//! There is no null in Rust, so where a bag may be absent it is represented with an [`Option`].
//! Functions that would have to reject a missing argument instead take it by value, leaving the
//! type system to enforce its presence.

use std::hash::Hash;

use super::{quantity, BagError, EmptyDefault, Frozen, ImmutableBag, MapBag, Unmodifiable};
use crate::collections::traits::Bag;

/// Returns an empty, immutable bag.
///
/// No allocation takes place, so every empty bag is as good as any other.
pub const fn empty<T>() -> ImmutableBag<T> {
    ImmutableBag(Frozen::Empty)
}

/// Returns an immutable bag holding `quantity` copies of `item` and nothing else.
///
/// # Errors
/// Returns [`BagError::NegativeQuantity`] if `quantity` is negative.
///
/// # Examples
/// ```
/// # use bag_lib::collections::bag::bags;
/// # use bag_lib::collections::traits::Bag;
/// let bag = bags::singleton("foo", 3).unwrap();
/// assert_eq!(bag.count(&"foo"), 3);
/// assert_eq!(bag.min(), Some(&"foo"));
/// assert_eq!(bag.max(), Some(&"foo"));
///
/// assert_eq!(bags::singleton("foo", 0).unwrap(), bags::empty::<&str>());
/// ```
pub fn singleton<T>(item: T, quantity: i64) -> Result<ImmutableBag<T>, BagError> {
    Ok(match quantity::check(quantity)? {
        0 => empty(),
        quantity => ImmutableBag(Frozen::Singleton(item, quantity)),
    })
}

/// Returns an immutable bag counting the occurrences of each of the provided `items`.
///
/// # Panics
/// Panics if there are more than [`MAX_QUANTITY`](super::MAX_QUANTITY) items.
///
/// # Examples
/// ```
/// # use bag_lib::collections::bag::bags;
/// # use bag_lib::collections::traits::Bag;
/// let bag = bags::of(["a", "a", "b"]);
/// assert_eq!(bag.count(&"a"), 2);
/// assert_eq!(bag.distinct(), 2);
/// ```
pub fn of<T: Hash + Eq, I: IntoIterator<Item = T>>(items: I) -> ImmutableBag<T> {
    let counted: MapBag<T> = items.into_iter().collect();

    match counted.distinct() {
        0 => empty(),
        1 => {
            let mut entries = counted.into_map().into_iter();
            match entries.next() {
                Some((item, quantity)) => ImmutableBag(Frozen::Singleton(item, quantity)),
                None => empty(),
            }
        },
        _ => ImmutableBag(Frozen::Counted(counted)),
    }
}

/// Returns a read-only view of `bag`.
pub const fn unmodifiable<T, B: Bag<T>>(bag: B) -> Unmodifiable<T, B> {
    Unmodifiable::unmodifiable(bag)
}

/// Returns `bag`, or an empty bag of the same type if there is none.
pub fn none_to_empty<T, B: Bag<T> + Default>(bag: Option<B>) -> B {
    bag.unwrap_or_default()
}

/// Returns `bag` if it contains anything, otherwise None.
pub fn empty_to_none<T, B: Bag<T>>(bag: Option<B>) -> Option<B> {
    bag.filter(|bag| !bag.is_empty())
}

/// Returns `bag`, or `default` if there is none.
pub fn none_to_default<T, B: Bag<T>>(bag: Option<B>, default: B) -> B {
    bag.unwrap_or(default)
}

/// Returns `bag` if it contains anything, otherwise `default`.
///
/// # Errors
/// Returns [`BagError::EmptyDefault`] if `default` is empty, whether or not it would be used.
pub fn empty_to_default<T, B: Bag<T>>(bag: Option<B>, default: B) -> Result<B, BagError> {
    if default.is_empty() {
        return Err(EmptyDefault.into());
    }

    Ok(empty_to_none(bag).unwrap_or(default))
}

/// Creates an [`ImmutableBag`](crate::collections::bag::ImmutableBag) counting each of the
/// provided items, like [`bags::of`](crate::collections::bag::bags::of).
///
/// # Examples
/// ```
/// # use bag_lib::bag;
/// # use bag_lib::collections::traits::Bag;
/// let bag = bag!["a", "a", "b"];
/// assert_eq!(bag.count(&"a"), 2);
/// assert_eq!(bag.size(), 3);
/// ```
#[macro_export]
macro_rules! bag {
    () => {
        $crate::collections::bag::bags::empty()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::collections::bag::bags::of([$($item),+])
    };
}
