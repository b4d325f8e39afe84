//! Point evaluation.

use super::Expression;
use crate::common::util::check_accuracy;
use crate::defs::Error;
use crate::num::FixedPoint;
use log::trace;

impl Expression {

    /// Evaluates the expression at `input`.
    ///
    /// Polynomials are evaluated exactly with Horner's method (up to truncation).
    /// Sine, cosine and exponent are computed with their Taylor series using every
    /// term of power not greater than `accuracy`; the argument is not reduced.
    /// A composition evaluates its inner function, rescales the value into the scale
    /// of the outer function, and evaluates the outer function at it.
    ///
    /// The input must have the scale returned by `input_scale()`, and the result has
    /// the scale returned by `scale()`.
    ///
    /// ## Errors
    ///
    ///  - InvalidAccuracy: `accuracy` is 0.
    ///  - ScaleMismatch: `input` has an unexpected scale.
    ///  - MalformedExpression: a polynomial has no coefficients.
    ///  - InvalidScale: a scale is not positive.
    pub fn evaluate(&self, input: &FixedPoint, accuracy: usize) -> Result<FixedPoint, Error> {
        check_accuracy(accuracy)?;
        self.check()?;

        if input.scale() != self.input_scale() {
            return Err(Error::ScaleMismatch);
        }

        trace!("evaluating {} at {}", self, input);

        match self {
            Expression::Polynomial(p) => p.evaluate(input),
            Expression::Sin(t) => Ok(input.sin(accuracy)?.mul_int(t.scalar())),
            Expression::Cos(t) => Ok(input.cos(accuracy)?.mul_int(t.scalar())),
            Expression::Exp(t) => Ok(input.exp(accuracy)?.mul_int(t.scalar())),
            Expression::Composition(c) => c.evaluate(input, accuracy),
        }
    }
}
