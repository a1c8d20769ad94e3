//! Univariate polynomials with exact rational coefficients

use core::ops::Neg;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::fmt;

/// A polynomial `c0 + c1*x + c2*x^2 + ...` with [BigRational] coefficients.
///
/// The coefficient list is never empty and never ends with a zero, except for
/// the zero polynomial which is stored as the single coefficient `0`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Polynomial {
    coeffs: Vec<BigRational>, // low to high degree
}

impl Polynomial {
    /// Create a polynomial from coefficients ordered from the constant term upwards
    pub fn new(coeffs: Vec<BigRational>) -> Self {
        let mut coeffs = coeffs;
        while coeffs.len() > 1 && coeffs.last().map_or(false, Zero::is_zero) {
            coeffs.pop();
        }
        if coeffs.is_empty() {
            coeffs.push(BigRational::zero());
        }
        Polynomial { coeffs }
    }

    /// Create a polynomial with integer coefficients, ordered from the constant term upwards
    pub fn from_integers<T: Clone + Into<BigInt>>(coeffs: &[T]) -> Self {
        Self::new(
            coeffs
                .iter()
                .map(|c| BigRational::from_integer(c.clone().into()))
                .collect(),
        )
    }

    #[inline]
    pub fn zero() -> Self {
        Polynomial {
            coeffs: vec![BigRational::zero()],
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    #[inline]
    pub fn coeffs(&self) -> &[BigRational] {
        &self.coeffs[..]
    }

    /// Degree of the polynomial, -1 for the zero polynomial
    #[inline]
    pub fn degree(&self) -> isize {
        if self.is_zero() {
            -1
        } else {
            self.coeffs.len() as isize - 1
        }
    }

    /// Evaluate the polynomial at `x` with Horner's method
    pub fn evaluate(&self, x: &BigRational) -> BigRational {
        let mut iter = self.coeffs.iter().rev();
        let mut acc = iter.next().cloned().unwrap_or_else(BigRational::zero);
        for c in iter {
            acc = acc * x + c;
        }
        acc
    }

    /// Formal derivative of the polynomial
    pub fn derivative(&self) -> Self {
        if self.degree() < 1 {
            return Self::zero();
        }

        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| c * BigRational::from_integer(BigInt::from(i)))
            .collect();
        Self::new(coeffs)
    }

    /// Taylor shift, returns `g` such that `g(x) = f(x + a)`.
    ///
    /// The i-th coefficient of `g` is `f⁽ⁱ⁾(a) / i!`.
    pub fn shift(&self, a: &BigRational) -> Self {
        if self.degree() < 1 {
            return self.clone();
        }

        let mut coeffs = Vec::with_capacity(self.coeffs.len());
        let mut deriv = self.clone();
        let mut factorial = BigInt::one();
        for i in 0..self.coeffs.len() {
            if i > 1 {
                factorial *= BigInt::from(i);
            }
            coeffs.push(deriv.evaluate(a) / BigRational::from_integer(factorial.clone()));
            deriv = deriv.derivative();
        }
        Self::new(coeffs)
    }

    /// Reverse the coefficient order, i.e. `xⁿ f(1/x)` where `n` is the degree.
    ///
    /// If `r` is a nonzero root of `f`, then `1/r` is a root of the result.
    pub fn reversed(&self) -> Self {
        let mut coeffs = self.coeffs.clone();
        coeffs.reverse();
        Self::new(coeffs)
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial {
            coeffs: self.coeffs.into_iter().map(|c| -c).collect(),
        }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (i, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }

            // sign separator
            if first {
                if c.is_negative() {
                    write!(f, "-")?;
                }
            } else if c.is_negative() {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            first = false;

            let abs = c.abs();
            match (i, abs.is_one(), abs.is_integer()) {
                (0, _, _) => write!(f, "{}", abs)?,
                (_, true, _) => {}
                (_, false, true) => write!(f, "{}", abs)?,
                (_, false, false) => write!(f, "({})", abs)?,
            }
            match i {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{}", i)?,
            }
        }
        Ok(())
    }
}
