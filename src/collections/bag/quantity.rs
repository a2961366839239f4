use super::{BagError, NegativeQuantity, QuantityOverflow};

/// The largest quantity a bag can hold, either for one element or in total.
///
/// Quantities are accepted as [`i64`] so that this bound is also the largest quantity a caller can
/// request, which makes `remove(item, i64::MAX)` remove every copy of an element.
pub const MAX_QUANTITY: u64 = i64::MAX as u64;

/// Validates a requested `quantity`, converting it to the unsigned representation stored by bags.
pub fn check(quantity: i64) -> Result<u64, BagError> {
    u64::try_from(quantity).map_err(|_| NegativeQuantity { quantity }.into())
}

/// Returns the size of a bag of `size` after `requested` more items are added, or an error if
/// that would exceed [`MAX_QUANTITY`].
pub(crate) fn grow(size: u64, requested: u64) -> Result<u64, BagError> {
    size.checked_add(requested)
        .filter(|grown| *grown <= MAX_QUANTITY)
        .ok_or(QuantityOverflow { requested, size }.into())
}
