//! Implementation of simple continued fractions

use crate::traits::Approximation;
use core::mem::swap;
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{CheckedAdd, CheckedMul};
use std::fmt;

/// This struct represents a simple continued fraction `a0 + 1/(a1 + 1/ (a2 + ...))`
/// where a0 is a signed integer and a1, a2, .. are positive integers.
/// The coefficients consist of an aperiodic part followed by a periodic part
/// repeated forever, so it's capable of representing rational numbers and
/// quadratic irrationals.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContinuedFraction<T> {
    /// Coefficients of aperiodic part
    a_coeffs: Vec<T>,

    /// Coefficients of periodic part
    p_coeffs: Vec<T>,
}

impl<T> ContinuedFraction<T> {
    /// Create a continued fraction from its aperiodic and periodic coefficients.
    ///
    /// # Panics
    /// If both parts are empty
    pub fn new(a_coeffs: Vec<T>, p_coeffs: Vec<T>) -> Self {
        if a_coeffs.is_empty() && p_coeffs.is_empty() {
            panic!("at least one coefficient is required!");
        }
        ContinuedFraction { a_coeffs, p_coeffs }
    }

    #[inline]
    pub fn aperiodic_coeffs(&self) -> &[T] {
        &self.a_coeffs[..]
    }

    #[inline]
    pub fn periodic_coeffs(&self) -> &[T] {
        &self.p_coeffs[..]
    }

    #[inline]
    pub fn is_rational(&self) -> bool {
        self.p_coeffs.is_empty()
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.a_coeffs.len() == 1 && self.p_coeffs.is_empty()
    }

    /// Returns an iterator of the coefficients, the periodic part is repeated infinitely
    pub fn coeffs(&self) -> Coefficients<T> {
        Coefficients {
            a_iter: Some(self.a_coeffs.iter()),
            p_ref: &self.p_coeffs,
            p_iter: None,
        }
    }
}

impl<T> From<Vec<T>> for ContinuedFraction<T> {
    /// Create a finite continued fraction
    #[inline]
    fn from(coeffs: Vec<T>) -> Self {
        ContinuedFraction::new(coeffs, Vec::new())
    }
}

impl<T> From<ContinuedFraction<T>> for (Vec<T>, Vec<T>) {
    /// Deconstruct the continued fraction into `(aperiodic, periodic)` coefficients
    #[inline]
    fn from(cf: ContinuedFraction<T>) -> Self {
        (cf.a_coeffs, cf.p_coeffs)
    }
}

pub struct Coefficients<'a, T> {
    a_iter: Option<std::slice::Iter<'a, T>>, // None if aperiodic part has been consumed
    p_ref: &'a Vec<T>,
    p_iter: Option<std::slice::Iter<'a, T>>, // None before aperiodic part is consumed, or when periodic part is empty
}

impl<'a, T> Iterator for Coefficients<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(it) = self.a_iter.as_mut() {
            // in aperiodic part
            match it.next() {
                Some(v) => Some(v),
                None => {
                    self.a_iter = None;
                    if !self.p_ref.is_empty() {
                        let mut new_iter = self.p_ref.iter();
                        let result = new_iter.next();
                        self.p_iter = Some(new_iter);
                        result
                    } else {
                        None
                    }
                }
            }
        } else if let Some(it) = self.p_iter.as_mut() {
            // in periodic part
            match it.next() {
                Some(v) => Some(v),
                None => {
                    let mut new_iter = self.p_ref.iter();
                    let result = new_iter.next();
                    self.p_iter = Some(new_iter);
                    result
                }
            }
        } else {
            None
        }
    }
}

/// Iterator of the convergents `p_k / q_k`, stops early if `T` overflows
pub struct Convergents<'a, T> {
    coeffs: Coefficients<'a, T>,
    pm1: T, // p_(k-1)
    pm2: T, // p_(k-2)
    qm1: T, // q_(k-1)
    qm2: T, // q_(k-2)
}

impl<'a, T: Integer + Clone + CheckedAdd + CheckedMul> Iterator for Convergents<'a, T> {
    type Item = Ratio<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let a = self.coeffs.next()?;
        // p_k = a_k * p_(k-1) + p_(k-2)
        let p = a.checked_mul(&self.pm1).and_then(|v| v.checked_add(&self.pm2))?;
        // q_k = a_k * q_(k-1) + q_(k-2)
        let q = a.checked_mul(&self.qm1).and_then(|v| v.checked_add(&self.qm2))?;

        swap(&mut self.pm2, &mut self.pm1); // self.pm2 = self.pm1
        swap(&mut self.qm2, &mut self.qm1); // self.qm2 = self.qm1
        self.pm1 = p.clone();
        self.qm1 = q.clone();

        Some(Ratio::new(p, q))
    }
}

impl<T: Integer + Clone + CheckedAdd + CheckedMul> ContinuedFraction<T> {
    /// Returns an iterator of the convergents
    pub fn convergents(&self) -> Convergents<T> {
        Convergents {
            coeffs: self.coeffs(),
            pm1: T::one(),
            pm2: T::zero(),
            qm1: T::zero(),
            qm2: T::one(),
        }
    }

    /// This method returns the corresponding rational number if it's rational,
    /// returns the expansion until the end of the first period otherwise.
    /// Returns `None` if `T` overflows before the exact value is reached.
    pub fn to_rational(&self) -> Option<Approximation<Ratio<T>>> {
        let convergents = self.convergents();
        if self.is_rational() {
            let (count, last) = convergents.fold((0, None), |(n, _), r| (n + 1, Some(r)));
            if count < self.a_coeffs.len() {
                return None;
            }
            last.map(Approximation::Exact)
        } else {
            convergents
                .take(self.a_coeffs.len() + self.p_coeffs.len())
                .last()
                .map(Approximation::Approximated)
        }
    }
}

impl<T: fmt::Display> fmt::Display for ContinuedFraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, list: &[T]) -> fmt::Result {
            let mut iter = list.iter();
            if let Some(v) = iter.next() {
                write!(f, "{}", v)?;
            }
            for v in iter {
                write!(f, ", {}", v)?;
            }
            Ok(())
        }

        let (first, rest) = match self.a_coeffs.split_first() {
            Some(split) => split,
            None => {
                // purely periodic
                write!(f, "[(")?;
                write_list(f, &self.p_coeffs)?;
                return write!(f, ")]");
            }
        };

        write!(f, "[{}", first)?;
        if rest.is_empty() && self.p_coeffs.is_empty() {
            return write!(f, "]");
        }

        write!(f, "; ")?;
        write_list(f, rest)?;
        if !self.p_coeffs.is_empty() {
            if !rest.is_empty() {
                write!(f, ", ")?;
            }
            write!(f, "(")?;
            write_list(f, &self.p_coeffs)?;
            write!(f, ")")?;
        }
        write!(f, "]")
    }
}
