//! Symbolic differentiation.

use super::Expression;
use crate::defs::Error;
use crate::num::FixedPoint;

impl Expression {

    /// Returns the derivative of the expression.
    ///
    /// Sine becomes cosine with the same scalar, cosine becomes sine with the scalar
    /// negated, so four derivatives of a trigonometric expression return it unchanged.
    /// The exponent is its own derivative.
    ///
    /// ## Errors
    ///
    ///  - Unrepresentable: the expression is a composition; use
    ///    [`Expression::differentiate_composition`] or [`Expression::derivative_at`].
    ///  - MalformedExpression: a polynomial has no coefficients.
    ///  - InvalidScale: a scale is not positive.
    pub fn differentiate(&self) -> Result<Expression, Error> {
        self.check()?;

        match self {
            Expression::Polynomial(p) => Ok(Expression::Polynomial(p.differentiate())),
            Expression::Sin(t) => Ok(Expression::Cos(t.clone())),
            Expression::Cos(t) => Ok(Expression::Sin(t.negated())),
            Expression::Exp(t) => Ok(Expression::Exp(t.clone())),
            Expression::Composition(_) => Err(Error::Unrepresentable),
        }
    }

    /// Returns the `n`-th derivative of the expression.
    ///
    /// ## Errors
    ///
    ///  - Unrepresentable: the expression is a composition and `n > 0`.
    ///  - MalformedExpression: a polynomial has no coefficients.
    ///  - InvalidScale: a scale is not positive.
    pub fn differentiate_n(&self, n: usize) -> Result<Expression, Error> {
        let mut ret = self.clone();
        for _ in 0..n {
            ret = ret.differentiate()?;
        }
        Ok(ret)
    }

    /// Evaluates the derivative of the expression at `input`.
    /// Compositions use the chain rule, the rest differentiate symbolically first.
    ///
    /// ## Errors
    ///
    ///  - InvalidAccuracy: `accuracy` is 0.
    ///  - ScaleMismatch: `input` has an unexpected scale.
    ///  - MalformedExpression: a polynomial has no coefficients.
    ///  - InvalidScale: a scale is not positive.
    pub fn derivative_at(&self, input: &FixedPoint, accuracy: usize) -> Result<FixedPoint, Error> {
        match self {
            Expression::Composition(c) => c.derivative_at(input, accuracy),
            _ => self.differentiate()?.evaluate(input, accuracy),
        }
    }
}
