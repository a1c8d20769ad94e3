//! Logarithms of positive rationals with a rational base.

use crate::error::Error;
use crate::traits::{ExactReal, Outcome, TryAdd};
use log::trace;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::fmt;

/// The real number `log_base(arg)`.
///
/// Both `base` and `arg` are positive rationals and `base != 1`. Integer
/// operations are carried out on the argument, e.g. `log_b(a) + n` becomes
/// `log_b(a·bⁿ)`, so every primitive is answered exactly. Floor uses the
/// default unit walk of [ExactReal::floor].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LogNumber {
    base: BigRational,
    arg: BigRational,
}

// base^exp by repeated squaring, negative exponents go through the reciprocal
fn pow(base: &BigRational, exp: &BigInt) -> BigRational {
    let mut e = exp.abs();
    let mut b = if exp.is_negative() {
        base.recip()
    } else {
        base.clone()
    };
    let mut result = BigRational::one();
    while !e.is_zero() {
        if e.is_odd() {
            result = result * &b;
        }
        b = &b * &b;
        e = e / 2u32;
    }
    result
}

impl LogNumber {
    /// Create `log_base(arg)`
    pub fn new(base: BigRational, arg: BigRational) -> Result<Self, Error> {
        if !base.is_positive() {
            return Err(Error::init(format!("logarithm base {} must be positive", base)));
        }
        if base.is_one() {
            return Err(Error::init("logarithm base must not be one"));
        }
        if !arg.is_positive() {
            return Err(Error::init(format!("logarithm argument {} must be positive", arg)));
        }
        Ok(LogNumber { base, arg })
    }

    /// Create `log_base(arg)` from integer base and argument
    #[inline]
    pub fn from_integers<T: Into<BigInt>>(base: T, arg: T) -> Result<Self, Error> {
        Self::new(
            BigRational::from_integer(base.into()),
            BigRational::from_integer(arg.into()),
        )
    }

    #[inline]
    pub fn base(&self) -> &BigRational {
        &self.base
    }

    #[inline]
    pub fn arg(&self) -> &BigRational {
        &self.arg
    }
}

impl ExactReal for LogNumber {
    type Int = BigInt;

    #[inline]
    fn add_int(&self, n: &BigInt) -> Self {
        LogNumber {
            base: self.base.clone(),
            arg: &self.arg * pow(&self.base, n),
        }
    }

    fn gt_int(&mut self, n: &BigInt) -> bool {
        // log is decreasing when the base is below one
        let bound = pow(&self.base, n);
        if self.base > BigRational::one() {
            self.arg > bound
        } else {
            self.arg < bound
        }
    }

    #[inline]
    fn eq_int(&self, n: &BigInt) -> bool {
        self.arg == pow(&self.base, n)
    }

    fn recip(&mut self) -> Result<Self, Error> {
        if self.arg.is_one() {
            return Err(Error::DivisionByZero);
        }
        trace!("swap base {} and argument {}", self.base, self.arg);
        Ok(LogNumber {
            base: self.arg.clone(),
            arg: self.base.clone(),
        })
    }
}

/// Logarithms of the same base add by multiplying their arguments
impl TryAdd<LogNumber> for LogNumber {
    type Output = LogNumber;

    fn try_add(&self, rhs: &LogNumber) -> Outcome<LogNumber> {
        if self.base != rhs.base {
            return Outcome::Unsupported;
        }
        Outcome::Done(LogNumber {
            base: self.base.clone(),
            arg: &self.arg * &rhs.arg,
        })
    }
}

impl TryAdd<BigInt> for LogNumber {
    type Output = LogNumber;

    #[inline]
    fn try_add(&self, rhs: &BigInt) -> Outcome<LogNumber> {
        Outcome::Done(self.add_int(rhs))
    }
}

impl TryAdd<LogNumber> for BigInt {
    type Output = LogNumber;

    #[inline]
    fn try_add(&self, _: &LogNumber) -> Outcome<LogNumber> {
        Outcome::Unsupported
    }
}

impl fmt::Display for LogNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "log_{}({})", self.base, self.arg)
    }
}
