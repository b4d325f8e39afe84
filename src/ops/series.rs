//! Power series computation appliance.

use crate::defs::Error;
use crate::num::FixedPoint;
use log::trace;
use num_bigint::BigInt;
use num_traits::Zero;

/// Generator of polynomial coefficients.
///
/// The series computed is `sum(sign_k * x^k / k!)` over the powers `k`
/// produced by the generator, i.e. each coefficient is a signed factorial divisor.
pub trait PolycoeffGen {

    /// Returns the next coefficient, or `None` when the factorial table is exhausted.
    fn next(&mut self) -> Option<(i8, &BigInt)>;

    /// Power of `x` in the first term.
    fn first_power(&self) -> i64;

    /// Difference between the powers of `x` in two consecutive terms.
    fn step_power(&self) -> i64;
}

/// Sums the series for `x` with coefficients from `polycoeff_gen`.
///
/// The first power of `x` and the step factor come from the power engine with
/// the factorial lookup bound `bound`; subsequent powers are advanced with
/// fixed-point multiplication. Every term is truncated toward zero.
pub fn series_run<T: PolycoeffGen>(
    x: &FixedPoint,
    polycoeff_gen: &mut T,
    bound: usize,
) -> Result<FixedPoint, Error> {
    let x_first = x.powi(polycoeff_gen.first_power(), bound)?;
    let x_step = x.powi(polycoeff_gen.step_power(), bound)?;

    let mut acc = BigInt::zero();
    let mut x_pow = x_first;
    let mut niter = 0;

    while let Some((sign, fct)) = polycoeff_gen.next() {
        let part = x_pow.value() / fct;
        if sign < 0 {
            acc -= part;
        } else {
            acc += part;
        }
        x_pow = x_pow.mul(&x_step)?;
        niter += 1;
    }

    trace!("series summed {} terms", niter);

    Ok(FixedPoint::from_raw_parts(acc, x.scale().clone()))
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::ops::factorial::factorial_lookup_table;

    // 1 + x + x^2/2 + ... with all signs positive, limited by the table size.
    struct TestGen {
        table: Vec<BigInt>,
        k: usize,
    }

    impl PolycoeffGen for TestGen {

        fn next(&mut self) -> Option<(i8, &BigInt)> {
            let fct = self.table.get(self.k)?;
            self.k += 1;
            Some((1, fct))
        }

        fn first_power(&self) -> i64 {
            0
        }

        fn step_power(&self) -> i64 {
            1
        }
    }

    #[test]
    fn test_series_run() {
        let x = FixedPoint::new(2, 1).unwrap();
        let mut gen = TestGen {
            table: factorial_lookup_table(4),
            k: 0,
        };

        // 1 + 2 + 4/2 + 8/6 + 16/24 with truncation of each term
        let s = series_run(&x, &mut gen, 4).unwrap();
        assert_eq!(s, FixedPoint::new(1 + 2 + 2 + 1, 1).unwrap());

        // exhausted generator contributes nothing
        let s = series_run(&x, &mut gen, 4).unwrap();
        assert!(s.is_zero());
    }
}
