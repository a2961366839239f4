use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NegativeQuantity {
    pub quantity: i64,
}

impl Display for NegativeQuantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Quantity must not be negative, got {}!", self.quantity)
    }
}

impl Error for NegativeQuantity {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitTooSmall {
    pub limit: u32,
}

impl Display for LimitTooSmall {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f, "Limit of a LimitedBag must be at least {}, got {}!",
            crate::collections::bag::MIN_LIMIT, self.limit
        )
    }
}

impl Error for LimitTooSmall {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyDefault;

impl Display for EmptyDefault {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Default bag must not be empty!")
    }
}

impl Error for EmptyDefault {}

/// The kind of mutation rejected by an immutable bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Add,
    Remove,
    Clear,
}

impl Display for Mutation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Mutation::Add => write!(f, "add to"),
            Mutation::Remove => write!(f, "remove from"),
            Mutation::Clear => write!(f, "clear"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedOperation {
    pub operation: Mutation,
}

impl Display for UnsupportedOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to {} an unmodifiable bag!", self.operation)
    }
}

impl Error for UnsupportedOperation {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityOverflow {
    pub requested: u64,
    pub size: u64,
}

impl Display for QuantityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f, "Adding {} to a bag of size {} would exceed the maximum quantity!",
            self.requested, self.size
        )
    }
}

impl Error for QuantityOverflow {}

/// Every way a [`Bag`](crate::collections::traits::Bag) operation can fail.
///
/// `NegativeQuantity`, `LimitTooSmall` and `EmptyDefault` are all invalid arguments and are
/// always returned before the bag is touched, see [`BagError::is_invalid_argument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum BagError {
    NegativeQuantity(NegativeQuantity),
    LimitTooSmall(LimitTooSmall),
    EmptyDefault(EmptyDefault),
    UnsupportedOperation(UnsupportedOperation),
    QuantityOverflow(QuantityOverflow),
}

impl BagError {
    /// Returns true if the error was caused by an argument that violated its precondition.
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            BagError::NegativeQuantity(_) | BagError::LimitTooSmall(_) | BagError::EmptyDefault(_)
        )
    }
}
