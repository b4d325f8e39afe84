//! Fixed-calculus is a symbolic calculus kernel over fixed-point numbers.
//!
//! A number is an arbitrary precision integer `value` together with a positive scale `one`,
//! and represents `value / one`. Expressions of a single variable (polynomials, sine, cosine,
//! exponent, and compositions of them) can be evaluated at a number, differentiated, and
//! composed. Sine, cosine and exponent are computed with truncated Taylor series, and
//! integer powers with a binomial expansion, both bounded by a caller-chosen number of
//! terms so that the amount of computation is predictable.
//!
//! ## Examples
//!
//! ```
//! use fixed_calculus::{Expression, FixedPoint};
//!
//! let one = 100_000_000;
//!
//! // 3 * sin(x)
//! let s = Expression::sin(one, 3).unwrap();
//! let x = FixedPoint::new(50_000_000, one).unwrap();
//!
//! let v = s.evaluate(&x, 12).unwrap();
//! assert_eq!(v.to_string(), "143827659/100000000");
//!
//! // 3 * cos(x)
//! let d = s.differentiate().unwrap();
//! assert_eq!(d.to_string(), "3*cos(x)");
//! ```
//!
//! The [`calculus`] module provides the same operations over raw integers and numeric form tags.

#![deny(missing_docs)]
#![deny(clippy::suspicious)]

#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]

pub mod calculus;
mod common;
pub mod ctx;
mod defs;
pub mod expr;
mod num;
mod ops;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::defs::Error;
pub use crate::defs::Form;
pub use crate::defs::DEFAULT_ACCURACY;
pub use crate::expr::Coefficients;
pub use crate::expr::Composition;
pub use crate::expr::Expression;
pub use crate::expr::Polynomial;
pub use crate::expr::Transcendental;
pub use crate::num::FixedPoint;
pub use crate::ops::factorial::factorial_lookup_table;
pub use crate::ops::pow::integer_power_cost;

#[cfg(test)]
mod tests {

    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn test_fixed_calculus() {
        let one = 100_000_000;

        let s = Expression::sin(one, 3).unwrap();
        let x = FixedPoint::new(50_000_000, one).unwrap();

        // 3 * 0.47942553
        let v = s.evaluate(&x, 12).unwrap();
        assert_eq!(v, FixedPoint::new(143827659, one).unwrap());

        let d = s.differentiate().unwrap();
        assert_eq!(d.form(), Some(Form::Cos));
        assert_eq!(d.scalar(), Some(&BigInt::from(3)));

        // sin(x)^2 + cos(x)^2 = 1 for the generated series
        let sin = Expression::sin(one, 1).unwrap().evaluate(&x, 16).unwrap();
        let cos = Expression::cos(one, 1).unwrap().evaluate(&x, 16).unwrap();
        let sum = sin.mul(&sin).unwrap().add(&cos.mul(&cos).unwrap()).unwrap();
        let diff = sum.sub(&FixedPoint::unit(one).unwrap()).unwrap();
        assert!(diff.abs().value() <= &BigInt::from(10));

        assert_eq!(factorial_lookup_table(3), [1, 1, 2, 6].map(BigInt::from).to_vec());
        assert!(integer_power_cost(9, 9) > integer_power_cost(9, 3));
    }
}
