use std::collections::hash_map;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use super::{BagError, Entries, MapBag, Mutation, UnsupportedOperation};
use crate::collections::traits::Bag;
use crate::util::fmt::FmtWith;

/// A bag that can never change, as returned by [`bags::empty`](super::bags::empty),
/// [`bags::singleton`](super::bags::singleton) and [`bags::of`](super::bags::of).
///
/// Every mutation fails with [`BagError::UnsupportedOperation`]. Since nothing is ever mutated, an
/// ImmutableBag can be shared freely for reading.
pub struct ImmutableBag<T>(pub(crate) Frozen<T>);

pub(crate) enum Frozen<T> {
    Empty,
    // The quantity is never 0, bags::singleton returns Empty instead.
    Singleton(T, u64),
    Counted(MapBag<T>),
}

impl<T> ImmutableBag<T> {
    const fn reject(operation: Mutation) -> BagError {
        BagError::UnsupportedOperation(UnsupportedOperation { operation })
    }
}

impl<T: Hash + Eq> Bag<T> for ImmutableBag<T> {
    type Iter<'a> = ImmutableIter<'a, T> where Self: 'a, T: 'a;

    fn add(&mut self, _: T, _: i64) -> Result<bool, BagError> {
        Err(ImmutableBag::<T>::reject(Mutation::Add))
    }

    fn remove(&mut self, _: &T, _: i64) -> Result<bool, BagError> {
        Err(ImmutableBag::<T>::reject(Mutation::Remove))
    }

    fn clear(&mut self) -> Result<(), BagError> {
        Err(ImmutableBag::<T>::reject(Mutation::Clear))
    }

    fn count(&self, item: &T) -> u64 {
        match &self.0 {
            Frozen::Empty => 0,
            Frozen::Singleton(single, quantity) if single == item => *quantity,
            Frozen::Singleton(..) => 0,
            Frozen::Counted(bag) => bag.count(item),
        }
    }

    fn distinct(&self) -> usize {
        match &self.0 {
            Frozen::Empty => 0,
            Frozen::Singleton(..) => 1,
            Frozen::Counted(bag) => bag.distinct(),
        }
    }

    fn size(&self) -> u64 {
        match &self.0 {
            Frozen::Empty => 0,
            Frozen::Singleton(_, quantity) => *quantity,
            Frozen::Counted(bag) => bag.size(),
        }
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        match &self.0 {
            Frozen::Empty => ImmutableIter::Once(None),
            Frozen::Singleton(single, quantity) => ImmutableIter::Once(Some((single, *quantity))),
            Frozen::Counted(bag) => ImmutableIter::Counted(bag.iter()),
        }
    }
}

/// An iterator over the entries of an [`ImmutableBag`].
pub enum ImmutableIter<'a, T> {
    Once(Option<(&'a T, u64)>),
    Counted(Entries<hash_map::Iter<'a, T, u64>>),
}

impl<'a, T> Iterator for ImmutableIter<'a, T> {
    type Item = (&'a T, u64);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            ImmutableIter::Once(entry) => entry.take(),
            ImmutableIter::Counted(entries) => entries.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            ImmutableIter::Once(entry) => {
                let len = usize::from(entry.is_some());
                (len, Some(len))
            },
            ImmutableIter::Counted(entries) => entries.size_hint(),
        }
    }
}

impl<T> FusedIterator for ImmutableIter<'_, T> {}

impl<T> Default for ImmutableBag<T> {
    fn default() -> Self {
        ImmutableBag(Frozen::Empty)
    }
}

impl<T: Hash + Eq + Clone> Clone for ImmutableBag<T> {
    fn clone(&self) -> Self {
        ImmutableBag(match &self.0 {
            Frozen::Empty => Frozen::Empty,
            Frozen::Singleton(item, quantity) => Frozen::Singleton(item.clone(), *quantity),
            Frozen::Counted(bag) => Frozen::Counted(bag.clone()),
        })
    }
}

impl<T: Hash + Eq, O: Bag<T>> PartialEq<O> for ImmutableBag<T> {
    fn eq(&self, other: &O) -> bool {
        self.content_eq(other)
    }
}

impl<T: Hash + Eq> Eq for ImmutableBag<T> {}

impl<T: Hash + Eq> Hash for ImmutableBag<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.content_hash());
    }
}

impl<T: Hash + Eq + Debug> Debug for ImmutableBag<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImmutableBag")
            .field("contents", &FmtWith::new(|f| f.debug_map().entries(self.iter()).finish()))
            .field("distinct", &self.distinct())
            .field("size", &self.size())
            .finish()
    }
}

impl<T: Hash + Eq + Debug> Display for ImmutableBag<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
