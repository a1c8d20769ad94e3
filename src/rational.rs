use crate::error::Error;
use crate::traits::ExactReal;
use core::fmt::Debug;
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{Signed, Zero};

impl<T: Integer + Signed + Clone + Debug> ExactReal for Ratio<T> {
    type Int = T;

    #[inline]
    fn add_int(&self, n: &T) -> Self {
        self + Ratio::from_integer(n.clone())
    }

    #[inline]
    fn gt_int(&mut self, n: &T) -> bool {
        *self > Ratio::from_integer(n.clone())
    }

    #[inline]
    fn eq_int(&self, n: &T) -> bool {
        self.is_integer() && self.numer() == n
    }

    fn recip(&mut self) -> Result<Self, Error> {
        if self.is_zero() {
            Err(Error::DivisionByZero)
        } else {
            Ok(Ratio::recip(self))
        }
    }

    #[inline]
    fn floor(&mut self) -> T {
        Ratio::floor(self).to_integer()
    }
}
