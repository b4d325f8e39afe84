//! Sine.

use crate::common::util::check_accuracy;
use crate::defs::Error;
use crate::num::FixedPoint;
use crate::ops::factorial::factorial_lookup_table;
use crate::ops::series::series_run;
use crate::ops::series::PolycoeffGen;
use num_bigint::BigInt;

// Polynomial coefficient generator.
struct SinPolycoeffGen {
    fct: Vec<BigInt>,
    inc: usize,
    sign: i8,
}

impl SinPolycoeffGen {

    fn new(bound: usize) -> Self {
        SinPolycoeffGen {
            fct: factorial_lookup_table(bound),
            inc: 1,
            sign: -1,
        }
    }
}

impl PolycoeffGen for SinPolycoeffGen {

    fn next(&mut self) -> Option<(i8, &BigInt)> {
        let fct = self.fct.get(self.inc)?;
        self.inc += 2;
        self.sign *= -1;
        Some((self.sign, fct))
    }

    #[inline]
    fn first_power(&self) -> i64 {
        1
    }

    #[inline]
    fn step_power(&self) -> i64 {
        2
    }
}

impl FixedPoint {

    /// Computes the sine of `self` with the Taylor series
    /// `x - x^3/3! + x^5/5! - ...` using every term of power not greater than `accuracy`.
    ///
    /// The argument is not reduced, so precision degrades as `|self|` grows.
    ///
    /// ## Errors
    ///
    ///  - InvalidAccuracy: `accuracy` is 0.
    pub fn sin(&self, accuracy: usize) -> Result<Self, Error> {
        check_accuracy(accuracy)?;
        let mut polycoeff_gen = SinPolycoeffGen::new(accuracy);
        series_run(self, &mut polycoeff_gen, accuracy)
    }
}
