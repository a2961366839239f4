//! This crate is my attempt at writing a multiset, and a few decorators for it, properly.
//!
//! # Purpose
//! This repo / crate is a project that I'm working on as a learning experience. A multiset (or
//! "bag") is simple enough to write in an afternoon, but keeping its invariants intact through a
//! chain of decorators, one of which evicts elements behind the caller's back, turned out to be a
//! nice exercise in ownership.
//!
//! # Method
//! All behaviour shared by bags is described by the [`Bag`](collections::traits::Bag) trait,
//! with [`MapBag`](collections::bag::MapBag) as the canonical implementation. Decorators are
//! [`FilterBag`](collections::bag::FilterBag)s, each with a different filter deciding what happens
//! before a mutation is forwarded, rather than separate types that all forward the same methods.
//!
//! # Error Handling
//! Bad input is reported through [`Result`]s, using
//! [`BagError`](collections::bag::BagError), an enum of strongly typed error structs that each
//! implement [`Error`](std::error::Error). Every check happens before anything is mutated, so an
//! [`Err`] always means that nothing changed.
//!
//! A bag whose bookkeeping is inconsistent is a bug in this crate rather than something a caller
//! can recover from, so that panics instead.
//!
//! # Concurrency
//! There is none. Every method runs to completion on the caller's thread, and nothing is locked.
//! Mutating a bag from several threads requires an external lock, although immutable bags and
//! unmodifiable views can be read from several threads at once.
//!
//! # Dependencies
//! This crate depends on some derive macros for errors, because they remove the need for some very
//! repetitive programming, and on the `log` facade to report evictions.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
