use std::fmt::{self, Debug, Formatter};

/// Formats a value with the provided closure when used as a [`Debug`] field.
pub struct FmtWith<F>(F);

impl<F: Fn(&mut Formatter<'_>) -> fmt::Result> FmtWith<F> {
    // Closures need this bound at construction to be inferred as generic over lifetimes.
    pub const fn new(write: F) -> FmtWith<F> {
        FmtWith(write)
    }
}

impl<F: Fn(&mut Formatter<'_>) -> fmt::Result> Debug for FmtWith<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (self.0)(f)
    }
}
