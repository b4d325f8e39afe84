//! Exponent.

use crate::common::util::check_accuracy;
use crate::defs::Error;
use crate::num::FixedPoint;
use crate::ops::factorial::factorial_lookup_table;
use crate::ops::series::series_run;
use crate::ops::series::PolycoeffGen;
use num_bigint::BigInt;

// Polynomial coefficient generator.
struct ExpPolycoeffGen {
    fct: Vec<BigInt>,
    inc: usize,
}

impl ExpPolycoeffGen {

    fn new(bound: usize) -> Self {
        ExpPolycoeffGen {
            fct: factorial_lookup_table(bound),
            inc: 0,
        }
    }
}

impl PolycoeffGen for ExpPolycoeffGen {

    fn next(&mut self) -> Option<(i8, &BigInt)> {
        let fct = self.fct.get(self.inc)?;
        self.inc += 1;
        Some((1, fct))
    }

    #[inline]
    fn first_power(&self) -> i64 {
        0
    }

    #[inline]
    fn step_power(&self) -> i64 {
        1
    }
}

impl FixedPoint {

    /// Computes `e` to the power of `self` with the Taylor series
    /// `1 + x + x^2/2! + ...` using every term of power not greater than `accuracy`.
    ///
    /// ## Errors
    ///
    ///  - InvalidAccuracy: `accuracy` is 0.
    pub fn exp(&self, accuracy: usize) -> Result<Self, Error> {
        check_accuracy(accuracy)?;
        let mut polycoeff_gen = ExpPolycoeffGen::new(accuracy);
        series_run(self, &mut polycoeff_gen, accuracy)
    }
}
