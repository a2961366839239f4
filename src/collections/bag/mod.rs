//! A module containing [`MapBag`], its decorators and associated types.
//!
//! A bag (or multiset) counts how many copies of each distinct element it holds. The behaviour
//! shared by all bags is described by the [`Bag`](crate::collections::traits::Bag) trait.
//!
//! - [`MapBag`] is the canonical bag, storing quantities in a [`BagMap`].
//! - [`FilterBag`] wraps another bag and applies a [`Filter`] to every mutation. It is the base of
//!   [`Unmodifiable`], a read-only view, and [`LimitedBag`], which caps the number of distinct
//!   elements by evicting the least frequent one.
//! - [`ImmutableBag`] is returned by the constructors in [`bags`], which also contains helpers for
//!   normalizing optional bags.
//!
//! Decorators own the bag they wrap. A decorator can also wrap a `&mut` reference to a bag, in
//! which case the bag is borrowed rather than moved, but never copied.

mod backing;
pub mod bags;
mod error;
mod filter_bag;
mod immutable;
mod limited_bag;
mod map_bag;
pub(crate) mod quantity;
mod unmodifiable;

pub use backing::*;
pub use error::*;
pub use filter_bag::*;
pub use immutable::{ImmutableBag, ImmutableIter};
pub use limited_bag::*;
pub use map_bag::*;
pub use quantity::{check as check_quantity, MAX_QUANTITY};
pub use unmodifiable::*;

pub(crate) use immutable::Frozen;
