//! Cosine.

use crate::common::util::check_accuracy;
use crate::defs::Error;
use crate::num::FixedPoint;
use crate::ops::factorial::factorial_lookup_table;
use crate::ops::series::series_run;
use crate::ops::series::PolycoeffGen;
use num_bigint::BigInt;

// Polynomial coefficient generator.
struct CosPolycoeffGen {
    fct: Vec<BigInt>,
    inc: usize,
    sign: i8,
}

impl CosPolycoeffGen {

    fn new(bound: usize) -> Self {
        CosPolycoeffGen {
            fct: factorial_lookup_table(bound),
            inc: 0,
            sign: -1,
        }
    }
}

impl PolycoeffGen for CosPolycoeffGen {

    fn next(&mut self) -> Option<(i8, &BigInt)> {
        let fct = self.fct.get(self.inc)?;
        self.inc += 2;
        self.sign *= -1;
        Some((self.sign, fct))
    }

    #[inline]
    fn first_power(&self) -> i64 {
        0
    }

    #[inline]
    fn step_power(&self) -> i64 {
        2
    }
}

impl FixedPoint {

    /// Computes the cosine of `self` with the Taylor series
    /// `1 - x^2/2! + x^4/4! - ...` using every term of power not greater than `accuracy`.
    ///
    /// The argument is not reduced, so precision degrades as `|self|` grows.
    ///
    /// ## Errors
    ///
    ///  - InvalidAccuracy: `accuracy` is 0.
    pub fn cos(&self, accuracy: usize) -> Result<Self, Error> {
        check_accuracy(accuracy)?;
        let mut polycoeff_gen = CosPolycoeffGen::new(accuracy);
        series_run(self, &mut polycoeff_gen, accuracy)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_cosine() {
        for one in [1, 10, 1000, 10_000_000] {
            for accuracy in 1..20 {
                let d1 = FixedPoint::zero(one).unwrap();
                assert_eq!(d1.cos(accuracy).unwrap(), FixedPoint::unit(one).unwrap());
            }
        }

        let one = 100_000_000;

        // cos(1) = 0.5403023058..
        let d1 = FixedPoint::unit(one).unwrap();
        assert_eq!(d1.cos(12).unwrap(), FixedPoint::new(54030231, one).unwrap());

        // even function
        assert_eq!(d1.neg().cos(12).unwrap(), d1.cos(12).unwrap());

        let one = 10_000_000;
        let half_pi = FixedPoint::new(15707963, one).unwrap();
        assert_eq!(half_pi.cos(12).unwrap(), FixedPoint::new(-1, one).unwrap());

        let pi = FixedPoint::new(31415926, one).unwrap();
        assert_eq!(pi.cos(6).unwrap(), FixedPoint::new(-12113529, one).unwrap());
        assert_eq!(pi.cos(20).unwrap(), FixedPoint::new(-10000001, one).unwrap());

        assert_eq!(pi.cos(0), Err(Error::InvalidAccuracy));
    }
}
