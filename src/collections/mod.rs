//! Various general-purpose collection types.
//!
//! # Purpose
//! I wrote these types to learn about multisets and the decorator pattern, and how the latter
//! translates to a language where every decorator has to decide whether it owns or borrows the
//! thing it decorates.
//!
//! # Method
//! Behaviour common to a kind of collection is described by a trait in [`traits`], with provided
//! methods for anything that can be derived from the required ones. That saves me from writing
//! some of the more repetitive functionality for each implementation.

pub mod bag;
pub mod traits;
