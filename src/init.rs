//! Module containing initialization routines for the cells of a node's probability table.

use fraction::Fraction;
use util::Result;

/// Defines possible ways to initialize the counts in a CPT cell.
///
/// Every cell of a freshly built network starts from the same pseudo-counts, set by the
/// `Prior` the network was built with.
#[derive(Clone, Copy, Debug)]
pub enum Prior {

    /// Add-one smoothing: every cell starts with counts of 1/1, so the first real observation
    /// lands on top of a pseudo-observation and no parent assignment can produce a
    /// zero-frequency cell.
    Laplace,

    /// User supplied pseudo-counts.
    Counts(u64, u64)

}


impl Prior {

    /// Construct a CPT cell, initialized according to ```self```.
    ///
    /// # Errors
    /// * `ThomasError::DivideByZero`, if the pseudo-counts have a zero denominator
    pub fn build_cell(&self) -> Result<Fraction> {
        match *self {
            Prior::Laplace => Fraction::new(1, 1),
            Prior::Counts(num, denom) => Fraction::new(num, denom)
        }
    }

}


impl Default for Prior {

    fn default() -> Self {
        Prior::Laplace
    }

}
