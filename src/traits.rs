use crate::error::Error;
use core::any::type_name;
use core::fmt::Debug;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Represents a number that is either computed exactly or only approximated
#[derive(PartialEq, Debug, Clone)]
pub enum Approximation<T> {
    Approximated(T),
    Exact(T),
}

impl<T> Approximation<T> {
    /// Get the value regardless of whether it's exact
    #[inline]
    pub fn value(self) -> T {
        match self {
            Approximation::Approximated(v) | Approximation::Exact(v) => v,
        }
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(self, Approximation::Exact(_))
    }
}

/// The minimal set of exact operations needed to expand a real number into
/// a continued fraction. Implementors only provide the four primitives
/// `add_int`, `gt_int`, `eq_int` and `recip`, everything else is derived.
///
/// Comparisons take `&mut self` because some representations (for example
/// [IrrationalAlgebraicNumber][crate::IrrationalAlgebraicNumber]) refine their
/// internal state to answer them.
pub trait ExactReal: Sized {
    /// Integer type used for the operand of integer operations and for the
    /// terms of the continued fraction
    type Int: Integer + Signed + Clone + Debug;

    /// `self + n`
    fn add_int(&self, n: &Self::Int) -> Self;

    /// `self > n`
    fn gt_int(&mut self, n: &Self::Int) -> bool;

    /// `self == n`
    fn eq_int(&self, n: &Self::Int) -> bool;

    /// `1 / self`, fails with [Error::DivisionByZero] if `self` is exactly zero
    fn recip(&mut self) -> Result<Self, Error>;

    /// `self - n`
    #[inline]
    fn sub_int(&self, n: &Self::Int) -> Self {
        self.add_int(&-n.clone())
    }

    /// `n + self`
    #[inline]
    fn int_add(&self, n: &Self::Int) -> Self {
        self.add_int(n)
    }

    /// `self != n`
    #[inline]
    fn ne_int(&self, n: &Self::Int) -> bool {
        !self.eq_int(n)
    }

    /// `self <= n`
    #[inline]
    fn le_int(&mut self, n: &Self::Int) -> bool {
        !self.gt_int(n)
    }

    /// `self < n`
    #[inline]
    fn lt_int(&mut self, n: &Self::Int) -> bool {
        !self.gt_int(n) && !self.eq_int(n)
    }

    /// `self >= n`
    #[inline]
    fn ge_int(&mut self, n: &Self::Int) -> bool {
        self.gt_int(n) || self.eq_int(n)
    }

    /// Rounds towards minus infinity.
    ///
    /// The default implementation walks an integer counter one unit at a time
    /// until it brackets the value, so it's only suitable for values of
    /// moderate magnitude. Types with a faster way should override it.
    fn floor(&mut self) -> Self::Int {
        let mut f = Self::Int::zero();
        if self.ge_int(&f) {
            loop {
                let next = f.clone() + Self::Int::one();
                if self.ge_int(&next) {
                    f = next;
                } else {
                    break f;
                }
            }
        } else {
            loop {
                f = f - Self::Int::one();
                if !self.lt_int(&f) {
                    break f;
                }
            }
        }
    }
}

/// Result of a binary operation between two representations that may not be
/// able to express the result
#[derive(PartialEq, Debug, Clone)]
pub enum Outcome<T> {
    Done(T),
    Unsupported,
}

impl<T> Outcome<T> {
    #[inline]
    pub fn is_supported(&self) -> bool {
        matches!(self, Outcome::Done(_))
    }

    /// Use the alternative when this operation is not supported
    #[inline]
    pub fn or_else<F: FnOnce() -> Outcome<T>>(self, f: F) -> Outcome<T> {
        match self {
            Outcome::Done(v) => Outcome::Done(v),
            Outcome::Unsupported => f(),
        }
    }

    /// Convert to a [Result], reporting [Error::UnsupportedOperation] with the given message
    #[inline]
    pub fn ok_or_unsupported<F: FnOnce() -> String>(self, msg: F) -> Result<T, Error> {
        match self {
            Outcome::Done(v) => Ok(v),
            Outcome::Unsupported => Err(Error::UnsupportedOperation(msg())),
        }
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => Outcome::Done(v),
            None => Outcome::Unsupported,
        }
    }
}

/// Addition that is allowed to decline when the operands cannot be combined
/// in the representation of `Self`
pub trait TryAdd<Rhs = Self> {
    type Output;

    fn try_add(&self, rhs: &Rhs) -> Outcome<Self::Output>;
}

/// Add two exact numbers, trying `lhs + rhs` first and then the reversed form
/// `rhs + lhs` before reporting the operation as unsupported.
pub fn add<L, R, O>(lhs: &L, rhs: &R) -> Result<O, Error>
where
    L: TryAdd<R, Output = O>,
    R: TryAdd<L, Output = O>,
{
    lhs.try_add(rhs)
        .or_else(|| rhs.try_add(lhs))
        .ok_or_unsupported(|| format!("cannot add {} and {}", type_name::<L>(), type_name::<R>()))
}
