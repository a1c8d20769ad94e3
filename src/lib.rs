//! Exact continued fraction expansions of real numbers.
//!
//! Every number type implements [ExactReal], a small set of exact primitives
//! (add an integer, compare with an integer, reciprocal) from which the terms
//! of the continued fraction are derived without any floating point.

mod algebraic;
pub mod cont_frac;
mod error;
mod logarithm;
pub mod polynomial;
pub mod quadratic;
mod rational;
pub mod traits;

pub use algebraic::IrrationalAlgebraicNumber;
pub use cont_frac::{continued_fraction_terms, ContinuedFraction, Terms};
pub use error::Error;
pub use logarithm::LogNumber;
pub use polynomial::Polynomial;
pub use quadratic::QuadraticNumber;
pub use traits::{add, Approximation, ExactReal, Outcome, TryAdd};
