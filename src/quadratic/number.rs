//! Implementation of quadratic irrational numbers

use super::QuadraticBase;
use crate::cont_frac::ContinuedFraction;
use crate::error::Error;
use crate::traits::{ExactReal, Outcome, TryAdd};
use core::ops::{Add, Neg, Sub};
use log::{debug, trace};
use num_bigint::BigInt;
use num_integer::{Integer, Roots};
use num_traits::{RefNum, Signed};
use std::collections::HashMap;
use std::fmt;

/// A quadratic number represented as `(a + b*√d) / c`.
///
/// The components are always kept normalized: `d > 1` and is not a perfect
/// square, `c > 0` and `gcd(a, b, c) = 1`. Under these conditions two numbers
/// are equal if and only if their components are equal, so [Eq] and [Hash]
/// are structural. Note that `d` is not required to be square free, thus
/// `√8` and `2√2` are distinct (and unequal) representations.
#[derive(Hash, Clone, Debug, Copy, PartialEq, Eq)]
pub struct QuadraticNumber<T> {
    a: T,
    b: T, // zero if the number is rational
    c: T, // positive
    d: T, // greater than one
}

impl<T> QuadraticNumber<T> {
    #[inline]
    pub(crate) const fn new_raw(a: T, b: T, c: T, d: T) -> Self {
        QuadraticNumber { a, b, c, d }
    }

    /// Get return-only references to the components `(a, b, c, d)`
    pub const fn parts(&self) -> (&T, &T, &T, &T) {
        (&self.a, &self.b, &self.c, &self.d)
    }

    /// Get the radicand `d`
    #[inline]
    pub const fn radicand(&self) -> &T {
        &self.d
    }
}

impl<T> From<QuadraticNumber<T>> for (T, T, T, T) {
    /// Deconstruct the quadratic number `(a + b√d) / c` into tuple `(a, b, c, d)`
    fn from(q: QuadraticNumber<T>) -> Self {
        (q.a, q.b, q.c, q.d)
    }
}

impl<T: QuadraticBase> QuadraticNumber<T>
where
    for<'r> &'r T: RefNum<T>,
{
    // Simplify the number into normalized form
    fn reduce(&mut self) {
        debug_assert!(!self.c.is_zero());

        // reduce common divisor
        let g = self.a.gcd(&self.b).gcd(&self.c);
        if !g.is_one() {
            self.a = &self.a / &g;
            self.b = &self.b / &g;
            self.c = &self.c / g;
        }

        // keep denom positive
        if self.c.is_negative() {
            self.a = T::zero() - &self.a;
            self.b = T::zero() - &self.b;
            self.c = T::zero() - &self.c;
        }
    }

    // Construct with a radicand that is already known to be valid
    #[inline]
    fn normalized(a: T, b: T, c: T, d: T) -> Self {
        let mut ret = QuadraticNumber::new_raw(a, b, c, d);
        ret.reduce();
        ret
    }

    /// Create a number represented as `(a + b√d) / c` where `a`, `b`, `c`, `d` are integers.
    ///
    /// Fails if `c` is zero, if `d` is not greater than one, or if `d` is a
    /// perfect square (the number would be rational with a meaningless radicand).
    pub fn new(a: T, b: T, c: T, d: T) -> Result<Self, Error> {
        if c.is_zero() {
            return Err(Error::init("denominator of a quadratic number must be nonzero"));
        }
        if d <= T::one() {
            return Err(Error::init(format!(
                "radicand {:?} must be greater than one",
                d
            )));
        }
        let root = d.sqrt();
        if &root * &root == d {
            return Err(Error::init(format!("radicand {:?} is a perfect square", d)));
        }

        Ok(Self::normalized(a, b, c, d))
    }

    /// Create the square root `√d`
    #[inline]
    pub fn from_sqrt(d: T) -> Result<Self, Error> {
        Self::new(T::zero(), T::one(), T::one(), d)
    }

    /// Create a number from components that are already normalized, skipping
    /// the normalization and validation.
    #[inline]
    pub fn from_normalized(a: T, b: T, c: T, d: T) -> Self {
        debug_assert!(c.is_positive() && d > T::one());
        debug_assert!(a.gcd(&b).gcd(&c).is_one());
        QuadraticNumber::new_raw(a, b, c, d)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.a.is_zero() && self.b.is_zero()
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.b.is_zero() && self.c.is_one()
    }

    #[inline]
    pub fn is_rational(&self) -> bool {
        self.b.is_zero()
    }

    /// Return the conjugate of the number, i.e. `(a - b√d) / c`
    #[inline]
    pub fn conj(&self) -> Self {
        QuadraticNumber::new_raw(
            self.a.clone(),
            T::zero() - &self.b,
            self.c.clone(),
            self.d.clone(),
        )
    }

    /// Test if the number is positive
    pub fn is_positive(&self) -> bool {
        if self.b.is_zero() {
            self.a.is_positive()
        } else if self.b.is_positive() {
            if self.a.is_positive() {
                true
            } else {
                &self.a * &self.a < &self.b * &self.b * &self.d
            }
        } else {
            // self.b.is_negative()
            if !self.a.is_positive() {
                false
            } else {
                &self.a * &self.a > &self.b * &self.b * &self.d
            }
        }
    }

    /// Test if the number is negative
    pub fn is_negative(&self) -> bool {
        if self.b.is_zero() {
            self.a.is_negative()
        } else if self.b.is_negative() {
            if self.a.is_negative() {
                true
            } else {
                &self.a * &self.a < &self.b * &self.b * &self.d
            }
        } else {
            // self.b.is_positive()
            if !self.a.is_negative() {
                false
            } else {
                &self.a * &self.a > &self.b * &self.b * &self.d
            }
        }
    }

    // floor((a + b√d) / c) = floor(floor(a + b√d) / c) since c > 0
    fn floor_part(&self) -> T {
        let br = (&self.b * &self.b * &self.d).sqrt();
        let num = if self.b.is_negative() {
            // b√d is irrational, so its floor is one below -⌊|b|√d⌋
            &self.a - br - T::one()
        } else {
            &self.a + br
        };
        num.div_floor(&self.c)
    }

    // caller makes sure that self is nonzero
    fn recip_unchecked(&self) -> Self {
        let aa = &self.a * &self.a;
        let dbb = &self.d * &self.b * &self.b;
        QuadraticNumber::normalized(
            &self.c * &self.a,
            T::zero() - &self.c * &self.b,
            aa - dbb,
            self.d.clone(),
        )
    }

    /// Find the periodic continued fraction of the number.
    ///
    /// The aperiodic and periodic coefficients are found by remembering every
    /// complete quotient met during the expansion, until one of them repeats.
    /// The continued fraction of a quadratic irrational is always eventually
    /// periodic, and a rational number (`b == 0`) gives a finite expansion
    /// with an empty periodic part.
    pub fn repeating_continued_fraction(&self) -> ContinuedFraction<T> {
        match self.expand_periodic(None) {
            Ok(cf) => cf,
            Err(_) => unreachable!("unbounded expansion has no step limit"),
        }
    }

    /// Same as [repeating_continued_fraction][Self::repeating_continued_fraction],
    /// but gives up with [Error::StepLimitExceeded] after `max_steps` terms.
    pub fn repeating_continued_fraction_within(
        &self,
        max_steps: usize,
    ) -> Result<ContinuedFraction<T>, Error> {
        self.expand_periodic(Some(max_steps))
    }

    fn expand_periodic(&self, max_steps: Option<usize>) -> Result<ContinuedFraction<T>, Error> {
        let mut seen: HashMap<QuadraticNumber<T>, usize> = HashMap::new();
        let mut terms: Vec<T> = Vec::new();
        let mut current = self.clone();

        loop {
            let step = terms.len();
            if let Some(&start) = seen.get(&current) {
                debug!("period of length {} found after {} terms", step - start, start);
                let p_coeffs = terms.split_off(start);
                return Ok(ContinuedFraction::new(terms, p_coeffs));
            }
            if let Some(limit) = max_steps {
                if step >= limit {
                    return Err(Error::StepLimitExceeded(limit));
                }
            }

            let f = current.floor_part();
            trace!("complete quotient {:?} has floor {:?}", current, f);
            let rem = current.sub_int(&f);
            seen.insert(current, step);
            terms.push(f);

            if rem.is_zero() {
                debug!("finite expansion with {} terms", terms.len());
                return Ok(ContinuedFraction::from(terms));
            }
            current = rem.recip_unchecked();
        }
    }
}

impl<T: QuadraticBase> ExactReal for QuadraticNumber<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Int = T;

    #[inline]
    fn add_int(&self, n: &T) -> Self {
        QuadraticNumber::normalized(
            &self.a + &self.c * n,
            self.b.clone(),
            self.c.clone(),
            self.d.clone(),
        )
    }

    #[inline]
    fn gt_int(&mut self, n: &T) -> bool {
        self.add_int(&(T::zero() - n)).is_positive()
    }

    #[inline]
    fn eq_int(&self, n: &T) -> bool {
        self.b.is_zero() && self.a == &self.c * n
    }

    fn recip(&mut self) -> Result<Self, Error> {
        if self.is_zero() {
            Err(Error::DivisionByZero)
        } else {
            Ok(self.recip_unchecked())
        }
    }

    #[inline]
    fn floor(&mut self) -> T {
        self.floor_part()
    }
}

macro_rules! arith_impl {
    (impl $imp:ident, $method:ident) => {
        // Abstracts the (a + b√d)/c `op` k = (a `op` c*k + b√d) / c pattern
        impl<T: QuadraticBase> $imp<T> for QuadraticNumber<T>
        where
            for<'r> &'r T: RefNum<T>,
        {
            type Output = QuadraticNumber<T>;
            #[inline]
            fn $method(self, rhs: T) -> QuadraticNumber<T> {
                QuadraticNumber::normalized(self.a.$method(&self.c * rhs), self.b, self.c, self.d)
            }
        }
    };
}

arith_impl!(impl Add, add);
arith_impl!(impl Sub, sub);

impl<T: QuadraticBase> Neg for QuadraticNumber<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Output = QuadraticNumber<T>;

    #[inline]
    fn neg(self) -> QuadraticNumber<T> {
        QuadraticNumber::new_raw(-self.a, -self.b, self.c, self.d)
    }
}

impl<T: QuadraticBase> TryAdd for QuadraticNumber<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Output = QuadraticNumber<T>;

    /// Numbers with different radicands cannot be added in this representation
    fn try_add(&self, rhs: &QuadraticNumber<T>) -> Outcome<QuadraticNumber<T>> {
        if self.d != rhs.d {
            return Outcome::Unsupported;
        }

        Outcome::Done(QuadraticNumber::normalized(
            &self.a * &rhs.c + &self.c * &rhs.a,
            &self.b * &rhs.c + &self.c * &rhs.b,
            &self.c * &rhs.c,
            self.d.clone(),
        ))
    }
}

impl<T: QuadraticBase> TryAdd<T> for QuadraticNumber<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Output = QuadraticNumber<T>;

    #[inline]
    fn try_add(&self, rhs: &T) -> Outcome<QuadraticNumber<T>> {
        Outcome::Done(self.add_int(rhs))
    }
}

impl TryAdd<QuadraticNumber<BigInt>> for BigInt {
    type Output = QuadraticNumber<BigInt>;

    /// Integers leave the addition to the quadratic number
    #[inline]
    fn try_add(&self, _: &QuadraticNumber<BigInt>) -> Outcome<QuadraticNumber<BigInt>> {
        Outcome::Unsupported
    }
}

impl<T: Integer + Signed + fmt::Display> fmt::Display for QuadraticNumber<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b_is_mone = self.b == -T::one();
        match (
            self.a.is_zero(),
            self.b.is_zero(),
            self.b.is_one(),
            b_is_mone,
            self.c.is_one(),
        ) {
            (true, true, _, _, _) => write!(f, "0"),
            (true, false, true, _, true) => write!(f, "√{}", self.d),
            (true, false, true, _, false) => write!(f, "√{}/{}", self.d, self.c),
            (true, false, false, true, true) => write!(f, "-√{}", self.d),
            (true, false, false, true, false) => write!(f, "-√{}/{}", self.d, self.c),
            (true, false, false, false, true) => write!(f, "{}√{}", self.b, self.d),
            (true, false, false, false, false) => write!(f, "{}√{}/{}", self.b, self.d, self.c),
            (false, true, _, _, true) => write!(f, "{}", self.a),
            (false, true, _, _, false) => write!(f, "{}/{}", self.a, self.c),
            (false, false, true, _, true) => write!(f, "{}+√{}", self.a, self.d),
            (false, false, false, true, true) => write!(f, "{}-√{}", self.a, self.d),
            (false, false, false, false, true) => {
                if self.b.is_negative() {
                    write!(f, "{}{}√{}", self.a, self.b, self.d)
                } else {
                    write!(f, "{}+{}√{}", self.a, self.b, self.d)
                }
            }
            (false, false, true, _, false) => write!(f, "({}+√{})/{}", self.a, self.d, self.c),
            (false, false, false, true, false) => write!(f, "({}-√{})/{}", self.a, self.d, self.c),
            (false, false, false, false, false) => {
                if self.b.is_negative() {
                    write!(f, "({}{}√{})/{}", self.a, self.b, self.d, self.c)
                } else {
                    write!(f, "({}+{}√{})/{}", self.a, self.b, self.d, self.c)
                }
            }
        }
    }
}
