//! Generic expansion of exact real numbers into continued fraction terms

use crate::error::Error;
use crate::traits::ExactReal;
use core::mem::replace;
use log::{debug, trace};
use num_traits::Zero;

enum State<X> {
    Value(X),
    Failed(Error),
    Done,
}

/// Iterator of the continued fraction terms of an [ExactReal] number.
///
/// Each step takes the floor of the current value, yields it, and continues
/// with the reciprocal of the remainder. The iterator ends when the remainder
/// is exactly zero, so it's infinite for irrational numbers. No term is ever
/// derived from a floating point approximation.
pub struct Terms<X> {
    state: State<X>,
}

impl<X: ExactReal> Terms<X> {
    #[inline]
    pub fn new(x: X) -> Self {
        Terms {
            state: State::Value(x),
        }
    }
}

impl<X: ExactReal> Iterator for Terms<X> {
    type Item = Result<X::Int, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut x = match replace(&mut self.state, State::Done) {
            State::Value(x) => x,
            State::Failed(e) => return Some(Err(e)),
            State::Done => return None,
        };

        let f = x.floor();
        trace!("continued fraction term {:?}", f);

        let mut rem = x.sub_int(&f);
        if rem.eq_int(&X::Int::zero()) {
            debug!("continued fraction terminated at term {:?}", f);
        } else {
            self.state = match rem.recip() {
                Ok(next) => State::Value(next),
                Err(e) => State::Failed(e),
            };
        }
        Some(Ok(f))
    }
}

/// Compute at most `limit` terms of the continued fraction of `x`.
///
/// The result is shorter than `limit` only when the expansion is finite,
/// i.e. when `x` is rational.
pub fn continued_fraction_terms<X: ExactReal>(x: X, limit: usize) -> Result<Vec<X::Int>, Error> {
    Terms::new(x).take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cont_frac::ContinuedFraction;
    use crate::traits::Approximation;
    use num_rational::Ratio;

    #[test]
    fn rational_terms_test() {
        assert_eq!(continued_fraction_terms(Ratio::new(355, 113), 10), Ok(vec![3, 7, 16]));
        assert_eq!(continued_fraction_terms(Ratio::new(-3, 2), 10), Ok(vec![-2, 1, 1]));
        assert_eq!(continued_fraction_terms(Ratio::from(7), 10), Ok(vec![7]));
        assert_eq!(continued_fraction_terms(Ratio::from(0), 10), Ok(vec![0]));
        assert_eq!(continued_fraction_terms(Ratio::new(1, 3), 10), Ok(vec![0, 3]));

        // truncated by the limit
        assert_eq!(continued_fraction_terms(Ratio::new(355, 113), 2), Ok(vec![3, 7]));
        assert_eq!(continued_fraction_terms(Ratio::new(355, 113), 0), Ok(vec![]));
    }

    #[test]
    fn rational_roundtrip_test() {
        let r = Ratio::new(-1234i64, 577);
        let terms = continued_fraction_terms(r, 100).unwrap();
        assert!(terms.len() < 100);
        assert_eq!(
            ContinuedFraction::from(terms).to_rational(),
            Some(Approximation::Exact(r))
        );
    }

    #[test]
    fn iterator_test() {
        let mut it = Terms::new(Ratio::new(10, 7));
        assert_eq!(it.next(), Some(Ok(1)));
        assert_eq!(it.next(), Some(Ok(2)));
        assert_eq!(it.next(), Some(Ok(3)));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    /// Reports a reciprocal failure after the first term
    #[derive(Debug, Clone)]
    struct Faulty;

    impl ExactReal for Faulty {
        type Int = i32;

        fn add_int(&self, _: &i32) -> Self {
            Faulty
        }
        fn gt_int(&mut self, n: &i32) -> bool {
            *n < 0
        }
        fn eq_int(&self, _: &i32) -> bool {
            false
        }
        fn recip(&mut self) -> Result<Self, Error> {
            Err(Error::DivisionByZero)
        }
        fn floor(&mut self) -> i32 {
            0
        }
    }

    #[test]
    fn error_propagation_test() {
        let mut it = Terms::new(Faulty);
        assert_eq!(it.next(), Some(Ok(0)));
        assert_eq!(it.next(), Some(Err(Error::DivisionByZero)));
        assert_eq!(it.next(), None);
        assert_eq!(continued_fraction_terms(Faulty, 5), Err(Error::DivisionByZero));
    }
}
