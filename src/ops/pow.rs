//! Exponentiation.

use crate::common::util::check_accuracy;
use crate::common::util::power_to_u32;
use crate::defs::Error;
use crate::num::FixedPoint;
use crate::ops::factorial::factorial_lookup_table;
use log::debug;
use num_bigint::BigInt;
use num_traits::One;
use num_traits::Zero;

impl FixedPoint {

    /// Computes `self` to the integer power `power`.
    ///
    /// `|self|` is split into the integer part `a` and the fraction `h`, and
    /// `(a + h)^n` is expanded binomially. At most `factorial_lookup_bound + 1`
    /// terms are summed, so the cost is bounded by the caller. When
    /// `factorial_lookup_bound >= |power|` all terms are used and the result is exact
    /// for integer bases; otherwise the high-order fractional terms are dropped and
    /// the result is an approximation.
    ///
    /// Negative powers are computed as `1 / self^|power|`.
    ///
    /// ## Errors
    ///
    ///  - InvalidAccuracy: `factorial_lookup_bound` is 0.
    ///  - DivisionByZero: `power` is negative and `self^|power|` is zero.
    ///  - InvalidArgument: `|power|` does not fit in 32 bits.
    pub fn powi(&self, power: i64, factorial_lookup_bound: usize) -> Result<Self, Error> {
        check_accuracy(factorial_lookup_bound)?;

        let one = self.scale();
        let n = power_to_u32(power.unsigned_abs())?;

        if n == 0 {
            return Ok(Self::from_raw_parts(one.clone(), one.clone()));
        }

        let mut ret = self.abs().binomial_pow(n, factorial_lookup_bound);

        if self.is_negative() && n & 1 == 1 {
            ret = ret.neg();
        }

        if power < 0 {
            let unit = Self::from_raw_parts(one.clone(), one.clone());
            ret = unit.div(&ret)?;
        }

        Ok(ret)
    }

    // (a + h)^n for non-negative self.
    fn binomial_pow(&self, n: u32, bound: usize) -> Self {
        let one = self.scale();
        let a = self.value() / one;
        let h = self.value() % one;

        let last = (n as usize).min(bound) as u32;
        if last < n {
            debug!(
                "integer power {} truncated to {} terms of the expansion",
                n,
                last + 1
            );
        }

        let fct = factorial_lookup_table(last as usize);

        let mut acc = BigInt::zero();
        let mut h_pow = one.clone(); // h^k / one^(k-1)
        let mut falling = BigInt::one(); // n * (n-1) * ... * (n-k+1)

        for k in 0..=last {
            if k > 0 {
                falling *= n - k + 1;
                h_pow = h_pow * &h / one;
                if h_pow.is_zero() {
                    break;
                }
            }

            let binom = &falling / &fct[k as usize];
            let a_pow = a.pow(n - k);
            acc += binom * a_pow * &h_pow;
        }

        Self::from_raw_parts(acc, one.clone())
    }
}

/// Estimated number of big integer multiplications performed by
/// [`FixedPoint::powi`] for the given power and factorial lookup bound.
pub fn integer_power_cost(power: i64, factorial_lookup_bound: usize) -> usize {
    let n = power.unsigned_abs();
    if n == 0 {
        return 0;
    }

    let last = n.min(factorial_lookup_bound as u64);

    // factorial table
    let mut cost = last as usize;

    for k in 0..=last {
        let e = n - k;
        // square-and-multiply for a^e
        let pow_cost = if e > 1 {
            (64 - e.leading_zeros() as usize) + e.count_ones() as usize - 2
        } else {
            0
        };
        // falling factorial, fraction power, two products of the term
        cost += pow_cost + 4;
    }

    if power < 0 {
        cost += 1;
    }

    cost
}

#[cfg(test)]
mod tests {

    use super::*;

    fn fp(v: i64, one: i64) -> FixedPoint {
        FixedPoint::new(v, one).unwrap()
    }

    #[test]
    fn test_powi_integers() {
        assert_eq!(fp(2, 1).powi(3, 4).unwrap(), fp(8, 1));
        assert_eq!(fp(-2, 1).powi(3, 4).unwrap(), fp(-8, 1));
        assert_eq!(fp(4, 1).powi(3, 4).unwrap(), fp(64, 1));
        assert_eq!(fp(-4, 1).powi(3, 4).unwrap(), fp(-64, 1));
        assert_eq!(fp(-7, 1).powi(7, 7).unwrap(), fp(-823543, 1));
        assert_eq!(fp(-3, 1).powi(4, 4).unwrap(), fp(81, 1));

        // integer bases are exact with any bound
        assert_eq!(fp(-7, 1).powi(7, 1).unwrap(), fp(-823543, 1));
        assert_eq!(fp(5, 1).powi(0, 1).unwrap(), fp(1, 1));
        assert_eq!(fp(0, 1).powi(5, 5).unwrap(), fp(0, 1));

        assert_eq!(fp(2000, 1000).powi(3, 4).unwrap(), fp(8000, 1000));
        assert_eq!(fp(-4000, 1000).powi(3, 4).unwrap(), fp(-64000, 1000));
        assert_eq!(fp(-7000, 1000).powi(7, 7).unwrap(), fp(-823543000, 1000));
    }

    #[test]
    fn test_powi_fractions() {
        // 2.5^3 = 15.625
        assert_eq!(fp(2500, 1000).powi(3, 7).unwrap(), fp(15625, 1000));
        assert_eq!(fp(-2500, 1000).powi(3, 3).unwrap(), fp(-15625, 1000));

        // smaller bound drops high order fractional terms
        assert_eq!(fp(2500, 1000).powi(3, 2).unwrap(), fp(15500, 1000));
        assert_eq!(fp(2500, 1000).powi(3, 1).unwrap(), fp(14000, 1000));

        // 0.5^2 = 0.25, nothing left of it when only the integer part is expanded
        assert_eq!(fp(500, 1000).powi(2, 2).unwrap(), fp(250, 1000));
        assert_eq!(fp(500, 1000).powi(2, 1).unwrap(), fp(0, 1000));
    }

    #[test]
    fn test_powi_negative_power() {
        assert_eq!(fp(2000, 1000).powi(-2, 4).unwrap(), fp(250, 1000));
        assert_eq!(fp(-2000, 1000).powi(-3, 4).unwrap(), fp(-125, 1000));
        assert_eq!(fp(0, 1000).powi(-1, 4), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_powi_errors() {
        assert_eq!(fp(2, 1).powi(3, 0), Err(Error::InvalidAccuracy));
        assert_eq!(fp(2, 1).powi(1 << 40, 1), Err(Error::InvalidArgument));

        // the exponent is rejected before the factorial table is built
        assert_eq!(fp(2, 1).powi(1 << 40, 1 << 40), Err(Error::InvalidArgument));
        assert_eq!(fp(-3, 1).powi(i64::MIN, usize::MAX), Err(Error::InvalidArgument));
        assert_eq!(fp(2500, 1000).powi(-(1 << 33), 1 << 36), Err(Error::InvalidArgument));
    }

    #[test]
    fn test_powi_cost() {
        assert_eq!(integer_power_cost(0, 4), 0);

        let full = integer_power_cost(9, 9);
        assert_eq!(integer_power_cost(9, 100), full);
        assert!(integer_power_cost(9, 3) < full);
        assert!(integer_power_cost(-9, 9) > full);

        for b in 1..9 {
            assert!(integer_power_cost(9, b) < integer_power_cost(9, b + 1));
        }
    }
}
