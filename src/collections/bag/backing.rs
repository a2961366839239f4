use std::collections::{btree_map, hash_map, BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;

/// A map that can store the quantities of a [`MapBag`](super::MapBag).
///
/// The map itself knows nothing about the invariants of a bag. It is the responsibility of the
/// bag to never store a quantity of 0 and to keep its cached size in step with the map.
///
/// The iteration order of the map decides which element [`Bag::min`](crate::collections::traits::Bag::min)
/// and [`Bag::max`](crate::collections::traits::Bag::max) return when quantities are tied:
/// - [`HashMap`]: an arbitrary order, which only changes when the map is mutated.
/// - [`BTreeMap`]: ascending order of elements, making the smallest tied element win.
pub trait BagMap<T> {
    type Entries<'a>: Iterator<Item = (&'a T, u64)> where Self: 'a, T: 'a;

    fn get(&self, item: &T) -> Option<u64>;

    fn get_mut(&mut self, item: &T) -> Option<&mut u64>;

    fn insert(&mut self, item: T, quantity: u64);

    fn remove(&mut self, item: &T) -> Option<u64>;

    fn retain<P: FnMut(&T, &mut u64) -> bool>(&mut self, keep: P);

    fn clear(&mut self);

    fn len(&self) -> usize;

    fn entries(&self) -> Self::Entries<'_>;
}

impl<T: Hash + Eq, S: BuildHasher> BagMap<T> for HashMap<T, u64, S> {
    type Entries<'a> = Entries<hash_map::Iter<'a, T, u64>> where Self: 'a, T: 'a;

    fn get(&self, item: &T) -> Option<u64> {
        HashMap::get(self, item).copied()
    }

    fn get_mut(&mut self, item: &T) -> Option<&mut u64> {
        HashMap::get_mut(self, item)
    }

    fn insert(&mut self, item: T, quantity: u64) {
        HashMap::insert(self, item, quantity);
    }

    fn remove(&mut self, item: &T) -> Option<u64> {
        HashMap::remove(self, item)
    }

    fn retain<P: FnMut(&T, &mut u64) -> bool>(&mut self, keep: P) {
        HashMap::retain(self, keep)
    }

    fn clear(&mut self) {
        HashMap::clear(self)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn entries(&self) -> Self::Entries<'_> {
        Entries(HashMap::iter(self))
    }
}

impl<T: Ord> BagMap<T> for BTreeMap<T, u64> {
    type Entries<'a> = Entries<btree_map::Iter<'a, T, u64>> where Self: 'a, T: 'a;

    fn get(&self, item: &T) -> Option<u64> {
        BTreeMap::get(self, item).copied()
    }

    fn get_mut(&mut self, item: &T) -> Option<&mut u64> {
        BTreeMap::get_mut(self, item)
    }

    fn insert(&mut self, item: T, quantity: u64) {
        BTreeMap::insert(self, item, quantity);
    }

    fn remove(&mut self, item: &T) -> Option<u64> {
        BTreeMap::remove(self, item)
    }

    fn retain<P: FnMut(&T, &mut u64) -> bool>(&mut self, keep: P) {
        BTreeMap::retain(self, keep)
    }

    fn clear(&mut self) {
        BTreeMap::clear(self)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn entries(&self) -> Self::Entries<'_> {
        Entries(BTreeMap::iter(self))
    }
}

/// An iterator over the entries of a [`BagMap`], yielding quantities by value.
#[derive(Debug, Clone)]
pub struct Entries<I>(pub(crate) I);

impl<'a, T: 'a, I: Iterator<Item = (&'a T, &'a u64)>> Iterator for Entries<I> {
    type Item = (&'a T, u64);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(item, quantity)| (item, *quantity))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, T: 'a, I: ExactSizeIterator<Item = (&'a T, &'a u64)>> ExactSizeIterator for Entries<I> {}

impl<'a, T: 'a, I: FusedIterator<Item = (&'a T, &'a u64)>> FusedIterator for Entries<I> {}
