//! Data structures and algorithms implementations related to
//! simple continued fractions.
//!
//! 1. [ContinuedFraction][ContinuedFraction] represents a simple continued fraction with limited length or periodic
//! 2. [Terms][Terms] lazily expands any [ExactReal][crate::traits::ExactReal] number into its coefficients
//!
//! # References:
//! - <https://pi.math.cornell.edu/~gautam/ContinuedFractions.pdf>
//! - <https://crypto.stanford.edu/pbc/notes/contfrac/>
//! - <http://www.numbertheory.org/continued_fractions.html>

mod simple;
mod terms;

pub use simple::*;
pub use terms::*;
