//! Traits describing the behaviour shared by collections of the same kind.

mod bag;

pub use bag::*;
