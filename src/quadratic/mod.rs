//! Data structures and algorithms implementations related to
//! quadratic numbers (roots of quadratic equation).

mod number;

pub use number::QuadraticNumber;

use core::fmt::Debug;
use core::hash::Hash;
use num_integer::{Integer, Roots};
use num_traits::{NumRef, Signed};

/// A helper trait to define valid type that can be used for [QuadraticNumber]
pub trait QuadraticBase: Integer + NumRef + Clone + Roots + Signed + Hash + Debug {}
impl<T: Integer + NumRef + Clone + Roots + Signed + Hash + Debug> QuadraticBase for T {}
