use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use super::{quantity, BagError, BagMap};
use crate::collections::traits::Bag;
use crate::util::fmt::FmtWith;

/// The canonical [`Bag`], storing a quantity for each distinct element in a backing [`BagMap`]
/// alongside a running total of all quantities.
///
/// By default, the backing map is a [`HashMap`]. Any other [`BagMap`] can be provided with
/// [`with_map`](MapBag::with_map), for example a [`BTreeMap`](std::collections::BTreeMap) to get
/// a deterministic iteration order and therefore a deterministic tie-break for [`Bag::min`] and
/// [`Bag::max`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of distinct elements in the MapBag.
///
/// | Method | Complexity |
/// |-|-|
/// | `add` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `count` | `O(1)`* |
/// | `distinct` | `O(1)` |
/// | `size` | `O(1)` |
/// | `min` / `max` | `O(n)` |
/// | `with_map` | `O(n)` |
///
/// \* For the default backing map. A [`BTreeMap`](std::collections::BTreeMap) takes `O(log n)`.
pub struct MapBag<T, M = HashMap<T, u64>> {
    map: M,
    size: u64,
    _item: PhantomData<T>,
}

impl<T: Hash + Eq> MapBag<T> {
    /// Creates a new, empty MapBag backed by a [`HashMap`].
    ///
    /// # Examples
    /// ```
    /// # use bag_lib::collections::bag::MapBag;
    /// # use bag_lib::collections::traits::Bag;
    /// let bag: MapBag<&str> = MapBag::new();
    /// assert_eq!(bag.size(), 0);
    /// assert_eq!(bag.distinct(), 0);
    /// ```
    pub fn new() -> MapBag<T> {
        MapBag {
            map: HashMap::new(),
            size: 0,
            _item: PhantomData,
        }
    }

    /// Creates a new, empty MapBag with room for `cap` distinct elements before reallocating.
    pub fn with_capacity(cap: usize) -> MapBag<T> {
        MapBag {
            map: HashMap::with_capacity(cap),
            size: 0,
            _item: PhantomData,
        }
    }
}

impl<T, M: BagMap<T>> MapBag<T, M> {
    /// Creates a MapBag backed by the provided `map`.
    ///
    /// The map may already contain entries: any with a quantity of 0 are dropped and the size of
    /// the bag is calculated from the rest.
    ///
    /// # Errors
    /// Returns [`BagError::QuantityOverflow`] if the quantities in `map` add up to more than
    /// [`MAX_QUANTITY`](super::MAX_QUANTITY).
    ///
    /// # Examples
    /// ```
    /// # use std::collections::BTreeMap;
    /// # use bag_lib::collections::bag::MapBag;
    /// # use bag_lib::collections::traits::Bag;
    /// let map = BTreeMap::from([("foo", 2_u64), ("bar", 0), ("baz", 1)]);
    /// let bag = MapBag::with_map(map).unwrap();
    /// assert_eq!(bag.distinct(), 2);
    /// assert_eq!(bag.size(), 3);
    /// ```
    pub fn with_map(mut map: M) -> Result<MapBag<T, M>, BagError> {
        map.retain(|_, quantity| *quantity > 0);

        let mut size = 0;
        for (_, held) in map.entries() {
            size = quantity::grow(size, held)?;
        }

        Ok(MapBag {
            map,
            size,
            _item: PhantomData,
        })
    }

    /// Consumes the MapBag, returning the backing map.
    pub fn into_map(self) -> M {
        self.map
    }

    /// Checks that the cached size still matches the backing map. This walks every entry, so it
    /// only runs in debug builds.
    ///
    /// # Panics
    /// Panics if the size has diverged from the sum of all quantities, or a quantity of 0 has been
    /// stored. Either indicates a bug in this type rather than bad input.
    #[cfg(debug_assertions)]
    fn assert_consistent(&self) {
        let mut sum = 0_u64;
        for (_, held) in self.map.entries() {
            assert!(held > 0, "MapBag stored an element with a quantity of 0!");
            sum += held;
        }
        assert_eq!(sum, self.size, "MapBag size diverged from the sum of its quantities!");
    }

    #[cfg(not(debug_assertions))]
    const fn assert_consistent(&self) {}
}

impl<T, M: BagMap<T>> Bag<T> for MapBag<T, M> {
    type Iter<'a> = M::Entries<'a> where Self: 'a, T: 'a;

    fn add(&mut self, item: T, quantity: i64) -> Result<bool, BagError> {
        let quantity = quantity::check(quantity)?;
        if quantity == 0 {
            return Ok(false);
        }

        // Because every quantity is at most the size, the new size bounds the new quantity.
        let size = quantity::grow(self.size, quantity)?;

        match self.map.get_mut(&item) {
            Some(held) => *held += quantity,
            None => self.map.insert(item, quantity),
        }
        self.size = size;

        self.assert_consistent();
        Ok(true)
    }

    fn remove(&mut self, item: &T, quantity: i64) -> Result<bool, BagError> {
        let quantity = quantity::check(quantity)?;
        let Some(held) = self.map.get(item) else {
            return Ok(false);
        };
        if quantity == 0 {
            return Ok(false);
        }

        if held <= quantity {
            self.map.remove(item);
            self.size -= held;
        } else if let Some(remaining) = self.map.get_mut(item) {
            *remaining -= quantity;
            self.size -= quantity;
        }

        self.assert_consistent();
        Ok(true)
    }

    fn clear(&mut self) -> Result<(), BagError> {
        self.map.clear();
        self.size = 0;
        Ok(())
    }

    fn count(&self, item: &T) -> u64 {
        self.map.get(item).unwrap_or(0)
    }

    fn distinct(&self) -> usize {
        self.map.len()
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        self.map.entries()
    }
}

impl<T: Hash + Eq> Default for MapBag<T> {
    fn default() -> Self {
        MapBag::new()
    }
}

impl<T, M: BagMap<T> + Clone> Clone for MapBag<T, M> {
    fn clone(&self) -> Self {
        MapBag {
            map: self.map.clone(),
            size: self.size,
            _item: PhantomData,
        }
    }
}

impl<T, M: BagMap<T>> Extend<T> for MapBag<T, M> {
    /// Adds one copy of each item.
    ///
    /// # Panics
    /// Panics if the size of the bag would exceed [`MAX_QUANTITY`](super::MAX_QUANTITY).
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            if let Err(error) = self.add(item, 1) {
                panic!("{error}");
            }
        }
    }
}

impl<T, M: BagMap<T> + Default> FromIterator<T> for MapBag<T, M> {
    /// Creates a MapBag counting the occurrences of each item, backed by the default `M`.
    ///
    /// # Examples
    /// ```
    /// # use bag_lib::collections::bag::MapBag;
    /// # use bag_lib::collections::traits::Bag;
    /// let bag: MapBag<char> = "hello".chars().collect();
    /// assert_eq!(bag.count(&'l'), 2);
    /// assert_eq!(bag.size(), 5);
    /// ```
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bag = MapBag {
            map: M::default(),
            size: 0,
            _item: PhantomData,
        };
        bag.extend(iter);
        bag
    }
}

impl<'a, T, M: BagMap<T>> IntoIterator for &'a MapBag<T, M> {
    type Item = (&'a T, u64);

    type IntoIter = M::Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.entries()
    }
}

impl<T, M: BagMap<T>, O: Bag<T>> PartialEq<O> for MapBag<T, M> {
    fn eq(&self, other: &O) -> bool {
        self.content_eq(other)
    }
}

impl<T, M: BagMap<T>> Eq for MapBag<T, M> {}

impl<T: Hash, M: BagMap<T>> Hash for MapBag<T, M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.content_hash());
    }
}

impl<T: Debug, M: BagMap<T>> Debug for MapBag<T, M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapBag")
            .field("contents", &FmtWith::new(|f| f.debug_map().entries(self.iter()).finish()))
            .field("distinct", &self.distinct())
            .field("size", &self.size)
            .finish()
    }
}

impl<T: Debug, M: BagMap<T>> Display for MapBag<T, M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
