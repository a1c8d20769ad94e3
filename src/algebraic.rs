//! Irrational real algebraic numbers.
//!
//! An algebraic number is represented by a polynomial with rational
//! coefficients and an isolating interval `(lower, upper)` that contains
//! exactly one root of the polynomial. The value is never evaluated
//! numerically, instead the interval is narrowed by bisection whenever an
//! operation needs more precision.

use crate::error::Error;
use crate::polynomial::Polynomial;
use crate::quadratic::QuadraticNumber;
use crate::traits::{ExactReal, Outcome, TryAdd};
use core::cmp::Ordering;
use log::trace;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::fmt;

/// An irrational root of a polynomial inside an isolating interval.
///
/// Invariants: `lower < upper`, `poly(lower) < 0` and `poly(upper) > 0`.
/// The caller guarantees that `poly` has exactly one root in the interval and
/// that this root is irrational, only the signs at the endpoints are checked.
///
/// Comparisons and floor narrow the interval in place, hence they take
/// `&mut self`. Clone the number before handing it to code that must not
/// observe (or pay for) refinements made elsewhere.
#[derive(Clone, Debug)]
pub struct IrrationalAlgebraicNumber {
    poly: Polynomial,
    lower: BigRational,
    upper: BigRational,
}

impl IrrationalAlgebraicNumber {
    /// Create the root of `poly` between `lower` and `upper`
    pub fn new(poly: Polynomial, lower: BigRational, upper: BigRational) -> Result<Self, Error> {
        if lower >= upper {
            return Err(Error::init(format!(
                "lower bound {} is not below upper bound {}",
                lower, upper
            )));
        }
        if !poly.evaluate(&lower).is_negative() {
            return Err(Error::init(format!(
                "{} must be negative at the lower bound {}",
                poly, lower
            )));
        }
        if !poly.evaluate(&upper).is_positive() {
            return Err(Error::init(format!(
                "{} must be positive at the upper bound {}",
                poly, upper
            )));
        }

        Ok(IrrationalAlgebraicNumber { poly, lower, upper })
    }

    /// Create the real n-th root of `d`, as the root of `xⁿ - d` between 1 and `d`.
    ///
    /// `d` must not be a perfect n-th power for the result to be irrational,
    /// an exact root is rejected only when it lies on the interval boundary.
    pub fn nth_root(n: u32, d: BigInt) -> Result<Self, Error> {
        if n == 0 {
            return Err(Error::init("root degree must be positive"));
        }
        if d <= BigInt::one() {
            return Err(Error::init(format!("radicand {} must be greater than one", d)));
        }

        let mut coeffs = vec![BigRational::zero(); n as usize + 1];
        coeffs[0] = BigRational::from_integer(-d.clone());
        coeffs[n as usize] = BigRational::one();
        Self::new(
            Polynomial::new(coeffs),
            BigRational::one(),
            BigRational::from_integer(d),
        )
    }

    #[inline]
    pub fn polynomial(&self) -> &Polynomial {
        &self.poly
    }

    #[inline]
    pub fn lower_bound(&self) -> &BigRational {
        &self.lower
    }

    #[inline]
    pub fn upper_bound(&self) -> &BigRational {
        &self.upper
    }

    /// Halve the isolating interval.
    ///
    /// # Panics
    /// If the midpoint is a root of the polynomial, which means that the
    /// number is not irrational.
    pub fn bisect(&mut self) {
        let mid = (&self.lower + &self.upper) / BigRational::from_integer(BigInt::from(2));
        let value = self.poly.evaluate(&mid);
        if value.is_positive() {
            self.upper = mid;
        } else if value.is_negative() {
            self.lower = mid;
        } else {
            panic!("{} has a rational root {} in the isolating interval", self.poly, mid);
        }
        trace!("bisected to ({}, {})", self.lower, self.upper);
    }

    /// Bisect until the interval is not wider than `width`.
    ///
    /// # Panics
    /// If `width` is not positive
    pub fn refine(&mut self, width: &BigRational) {
        assert!(width.is_positive(), "refinement width must be positive");
        while &(&self.upper - &self.lower) > width {
            self.bisect();
        }
    }

    /// Compare the number with a rational, the result is never [Ordering::Equal].
    pub fn cmp_rational(&mut self, other: &BigRational) -> Ordering {
        // terminates because the root is irrational, so it can't be `other`
        while &self.lower < other && other < &self.upper {
            self.bisect();
        }
        if other <= &self.lower {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }

    /// `self + q` for a rational `q`, the polynomial is shifted by `-q`
    pub fn add_rational(&self, q: &BigRational) -> Self {
        IrrationalAlgebraicNumber {
            poly: self.poly.shift(&-q),
            lower: &self.lower + q,
            upper: &self.upper + q,
        }
    }

    // bisect until the interval pins down a single integer part
    fn floor_int(&mut self) -> BigInt {
        loop {
            let floor = self.lower.floor().to_integer();
            let ceil = self.upper.ceil().to_integer();
            if &floor + BigInt::one() == ceil {
                return floor;
            }
            self.bisect();
        }
    }
}

impl ExactReal for IrrationalAlgebraicNumber {
    type Int = BigInt;

    #[inline]
    fn add_int(&self, n: &BigInt) -> Self {
        self.add_rational(&BigRational::from_integer(n.clone()))
    }

    #[inline]
    fn gt_int(&mut self, n: &BigInt) -> bool {
        self.cmp_rational(&BigRational::from_integer(n.clone())) == Ordering::Greater
    }

    /// An irrational number never equals an integer
    #[inline]
    fn eq_int(&self, _: &BigInt) -> bool {
        false
    }

    fn recip(&mut self) -> Result<Self, Error> {
        // move the interval away from zero
        while !(self.lower.is_positive() || self.upper.is_negative()) {
            self.bisect();
        }

        // the reversed polynomial p*(y) = yⁿ p(1/y) has the root 1/x, but its
        // sign at 1/upper is the sign of yⁿ p(upper)
        let positive = self.lower.is_positive();
        let reversed = self.poly.reversed();
        let poly = if positive || self.poly.degree().is_even() {
            -reversed
        } else {
            reversed
        };
        IrrationalAlgebraicNumber::new(poly, self.upper.recip(), self.lower.recip())
    }

    #[inline]
    fn floor(&mut self) -> BigInt {
        self.floor_int()
    }
}

impl TryAdd<BigInt> for IrrationalAlgebraicNumber {
    type Output = IrrationalAlgebraicNumber;

    #[inline]
    fn try_add(&self, rhs: &BigInt) -> Outcome<IrrationalAlgebraicNumber> {
        Outcome::Done(self.add_int(rhs))
    }
}

impl TryAdd<BigRational> for IrrationalAlgebraicNumber {
    type Output = IrrationalAlgebraicNumber;

    #[inline]
    fn try_add(&self, rhs: &BigRational) -> Outcome<IrrationalAlgebraicNumber> {
        Outcome::Done(self.add_rational(rhs))
    }
}

impl TryAdd<IrrationalAlgebraicNumber> for BigInt {
    type Output = IrrationalAlgebraicNumber;

    #[inline]
    fn try_add(&self, _: &IrrationalAlgebraicNumber) -> Outcome<IrrationalAlgebraicNumber> {
        Outcome::Unsupported
    }
}

// Sums of two algebraic numbers are not supported
impl TryAdd<QuadraticNumber<BigInt>> for IrrationalAlgebraicNumber {
    type Output = IrrationalAlgebraicNumber;

    #[inline]
    fn try_add(&self, _: &QuadraticNumber<BigInt>) -> Outcome<IrrationalAlgebraicNumber> {
        Outcome::Unsupported
    }
}

impl TryAdd<IrrationalAlgebraicNumber> for QuadraticNumber<BigInt> {
    type Output = IrrationalAlgebraicNumber;

    #[inline]
    fn try_add(&self, _: &IrrationalAlgebraicNumber) -> Outcome<IrrationalAlgebraicNumber> {
        Outcome::Unsupported
    }
}

impl fmt::Display for IrrationalAlgebraicNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "root of {} in ({}, {})", self.poly, self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cont_frac::continued_fraction_terms;
    use crate::traits::add;
    use std::convert::TryFrom;

    fn r(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    fn ri(n: i64) -> BigRational {
        BigRational::from_integer(BigInt::from(n))
    }

    fn sqrt2() -> IrrationalAlgebraicNumber {
        IrrationalAlgebraicNumber::nth_root(2, BigInt::from(2)).unwrap()
    }

    fn terms(x: IrrationalAlgebraicNumber, n: usize) -> Vec<i64> {
        continued_fraction_terms(x, n)
            .unwrap()
            .into_iter()
            .map(|t| i64::try_from(t).unwrap())
            .collect()
    }

    #[test]
    fn creation_test() {
        let p = Polynomial::from_integers(&[-2, 0, 1]);
        assert!(IrrationalAlgebraicNumber::new(p.clone(), ri(1), ri(2)).is_ok());
        // empty interval
        assert!(matches!(
            IrrationalAlgebraicNumber::new(p.clone(), ri(2), ri(1)),
            Err(Error::Initialization(_))
        ));
        assert!(matches!(
            IrrationalAlgebraicNumber::new(p.clone(), ri(1), ri(1)),
            Err(Error::Initialization(_))
        ));
        // wrong signs
        assert!(matches!(
            IrrationalAlgebraicNumber::new(-p.clone(), ri(1), ri(2)),
            Err(Error::Initialization(_))
        ));
        assert!(matches!(
            IrrationalAlgebraicNumber::new(p.clone(), ri(2), ri(3)),
            Err(Error::Initialization(_))
        ));
        // root on the boundary
        assert!(matches!(
            IrrationalAlgebraicNumber::new(Polynomial::from_integers(&[-4, 0, 1]), ri(1), ri(2)),
            Err(Error::Initialization(_))
        ));

        assert!(IrrationalAlgebraicNumber::nth_root(0, BigInt::from(2)).is_err());
        assert!(IrrationalAlgebraicNumber::nth_root(2, BigInt::from(1)).is_err());
        assert!(IrrationalAlgebraicNumber::nth_root(1, BigInt::from(5)).is_err());
        assert_eq!(sqrt2().polynomial(), &p);
    }

    #[test]
    fn bisect_test() {
        let mut x = sqrt2();
        x.bisect();
        assert_eq!((x.lower_bound(), x.upper_bound()), (&ri(1), &r(3, 2)));
        x.bisect();
        assert_eq!((x.lower_bound(), x.upper_bound()), (&r(5, 4), &r(3, 2)));

        x.refine(&r(1, 1000));
        assert!(x.upper_bound() - x.lower_bound() <= r(1, 1000));
        assert!(x.lower_bound() < &r(1415, 1000) && x.upper_bound() > &r(1414, 1000));
    }

    #[test]
    #[should_panic]
    fn bisect_rational_root_test() {
        // the root 3/2 is hit by the first bisection
        let mut x = IrrationalAlgebraicNumber::new(Polynomial::from_integers(&[-3, 2]), ri(1), ri(2))
            .unwrap();
        x.bisect();
    }

    #[test]
    fn comparison_test() {
        let mut x = sqrt2();
        assert_eq!(x.cmp_rational(&r(7, 5)), Ordering::Greater);
        assert_eq!(x.cmp_rational(&r(3, 2)), Ordering::Less);
        assert_eq!(x.cmp_rational(&r(141421, 100000)), Ordering::Greater);
        assert_eq!(x.cmp_rational(&r(141422, 100000)), Ordering::Less);

        assert!(x.gt_int(&BigInt::from(1)));
        assert!(!x.gt_int(&BigInt::from(2)));
        assert!(x.lt_int(&BigInt::from(2)));
        assert!(x.ne_int(&BigInt::from(1)));
        assert!(!x.eq_int(&BigInt::from(1)));
    }

    #[test]
    fn floor_test() {
        assert_eq!(sqrt2().floor(), BigInt::from(1));
        for (n, d, expected) in [(2, 99, 9), (3, 999, 9), (3, 1001, 10), (5, 33, 2)].iter() {
            let mut x = IrrationalAlgebraicNumber::nth_root(*n, BigInt::from(*d)).unwrap();
            assert_eq!(x.floor(), BigInt::from(*expected));
        }

        // -√2 as the root of 2 - x^2 in (-2, -1)
        let mut neg = IrrationalAlgebraicNumber::new(Polynomial::from_integers(&[2, 0, -1]), ri(-2), ri(-1))
            .unwrap();
        assert_eq!(neg.floor(), BigInt::from(-2));
    }

    #[test]
    fn add_test() {
        let x = sqrt2();
        let mut y = x.add_int(&BigInt::from(3));
        assert_eq!(y.polynomial(), &Polynomial::from_integers(&[7, -6, 1]));
        assert_eq!((y.lower_bound(), y.upper_bound()), (&ri(4), &ri(5)));
        assert_eq!(y.floor(), BigInt::from(4));

        let mut z = x.sub_int(&BigInt::from(2));
        assert_eq!(z.floor(), BigInt::from(-1));

        let mut h = x.add_rational(&r(1, 2));
        assert_eq!(h.cmp_rational(&r(19, 10)), Ordering::Greater);
        assert_eq!(h.cmp_rational(&r(2, 1)), Ordering::Less);
    }

    #[test]
    fn dispatch_test() {
        let x = sqrt2();
        let one = BigInt::from(1);
        assert!(matches!(one.try_add(&x), Outcome::Unsupported));
        let mut y = add(&one, &x).unwrap();
        assert_eq!(y.floor(), BigInt::from(2));
        assert!(x.try_add(&r(1, 3)).is_supported());

        let q = QuadraticNumber::from_sqrt(BigInt::from(3)).unwrap();
        assert!(matches!(add(&x, &q), Err(Error::UnsupportedOperation(_))));
        assert!(matches!(add(&q, &x), Err(Error::UnsupportedOperation(_))));
    }

    #[test]
    fn recip_test() {
        let mut x = sqrt2();
        let mut y = x.recip().unwrap(); // 0.707
        assert_eq!(y.floor(), BigInt::from(0));
        assert_eq!(y.cmp_rational(&r(7, 10)), Ordering::Greater);
        assert_eq!(y.cmp_rational(&r(71, 100)), Ordering::Less);

        // interval (0, 1) touches zero
        let mut z = sqrt2().sub_int(&BigInt::from(1));
        assert_eq!(z.recip().unwrap().floor(), BigInt::from(2));

        // interval (-1, 1) straddles zero, root is 0.6823
        let mut w = IrrationalAlgebraicNumber::new(Polynomial::from_integers(&[-1, 1, 0, 1]), ri(-1), ri(1))
            .unwrap();
        assert_eq!(w.recip().unwrap().floor(), BigInt::from(1));

        // negative numbers with even and odd degree
        let mut neg = IrrationalAlgebraicNumber::new(Polynomial::from_integers(&[2, 0, -1]), ri(-2), ri(-1))
            .unwrap();
        assert_eq!(neg.recip().unwrap().floor(), BigInt::from(-1));
        let mut neg_cbrt = IrrationalAlgebraicNumber::new(Polynomial::from_integers(&[2, 0, 0, 1]), ri(-2), ri(-1))
            .unwrap();
        assert_eq!(neg_cbrt.recip().unwrap().floor(), BigInt::from(-1));
    }

    #[test]
    fn terms_test() {
        assert_eq!(terms(sqrt2(), 12), vec![1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2]);

        let cbrt2 = IrrationalAlgebraicNumber::nth_root(3, BigInt::from(2)).unwrap();
        assert_eq!(terms(cbrt2, 12), vec![1, 3, 1, 5, 1, 1, 4, 1, 1, 8, 1, 14]);

        let neg = IrrationalAlgebraicNumber::new(Polynomial::from_integers(&[2, 0, -1]), ri(-2), ri(-1))
            .unwrap();
        assert_eq!(terms(neg, 6), vec![-2, 1, 1, 2, 2, 2]);

        let w = IrrationalAlgebraicNumber::new(Polynomial::from_integers(&[-1, 1, 0, 1]), ri(-1), ri(1))
            .unwrap();
        assert_eq!(terms(w, 6), vec![0, 1, 2, 6, 1, 3]);
    }

    #[test]
    fn formatting_test() {
        assert_eq!(format!("{}", sqrt2()), "root of x^2 - 2 in (1, 2)");
    }
}
