//! Composition of two expressions and the chain rule.

use super::Expression;
use crate::defs::Error;
use crate::num::FixedPoint;
use num_bigint::BigInt;

#[cfg(feature = "serde")]
use serde::Deserialize;
#[cfg(feature = "serde")]
use serde::Serialize;

/// `f(g(x))`, where `f` and `g` keep their own scales.
///
/// The composition is never expanded symbolically. Evaluation substitutes the
/// value of `g` into `f`, so outer polynomials of degree above 1 accumulate
/// the truncation error of the rescaled inner value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Composition {
    f: Expression,
    g: Expression,
}

impl Composition {

    /// Returns the outer function `f`.
    pub fn outer(&self) -> &Expression {
        &self.f
    }

    /// Returns the inner function `g`.
    pub fn inner(&self) -> &Expression {
        &self.g
    }

    /// Destructures the composition into `(f, g)`.
    pub fn into_parts(self) -> (Expression, Expression) {
        (self.f, self.g)
    }

    pub(crate) fn evaluate(&self, input: &FixedPoint, accuracy: usize) -> Result<FixedPoint, Error> {
        let inner = self.g.evaluate(input, accuracy)?;
        let inner = inner.rescale(self.f.input_scale())?;
        self.f.evaluate(&inner, accuracy)
    }

    // f'(g(x)) * g'(x), in the scale of f.
    pub(crate) fn derivative_at(
        &self,
        input: &FixedPoint,
        accuracy: usize,
    ) -> Result<FixedPoint, Error> {
        let inner = self.g.evaluate(input, accuracy)?;
        let inner = inner.rescale(self.f.input_scale())?;

        let df = self.f.derivative_at(&inner, accuracy)?;
        let dg = self.g.derivative_at(input, accuracy)?;

        let value = df.value() * dg.value() / dg.scale();

        Ok(FixedPoint::from_raw_parts(value, df.scale().clone()))
    }

    pub(crate) fn scaled(&self, by: &BigInt) -> Self {
        Composition {
            f: self.f.scaled(by),
            g: self.g.clone(),
        }
    }
}

impl Expression {

    /// Returns the composition `self(g(x))`.
    ///
    /// ## Errors
    ///
    ///  - MalformedExpression: a polynomial has no coefficients.
    ///  - InvalidScale: a scale is not positive.
    pub fn compose(self, g: Expression) -> Result<Expression, Error> {
        self.check()?;
        g.check()?;
        Ok(Expression::Composition(Box::new(Composition { f: self, g })))
    }

    /// Evaluates `self(g(input))` without building the composition.
    ///
    /// `input` has the scale of `g`, the result has the scale of `self`.
    ///
    /// ## Errors
    ///
    ///  - InvalidAccuracy: `accuracy` is 0.
    ///  - ScaleMismatch: `input` has an unexpected scale.
    ///  - MalformedExpression: a polynomial has no coefficients.
    ///  - InvalidScale: a scale is not positive.
    pub fn evaluate_composition(
        &self,
        g: &Expression,
        input: &FixedPoint,
        accuracy: usize,
    ) -> Result<FixedPoint, Error> {
        let inner = g.evaluate(input, accuracy)?;
        let inner = inner.rescale(self.input_scale())?;
        self.evaluate(&inner, accuracy)
    }

    /// Computes the derivative of `self(g(x))` at `input` with the chain rule:
    /// `self'(g(input)) * g'(input)`.
    ///
    /// The product of two differently scaled derivatives has no closed form among the
    /// expression variants, so the value is returned instead of an expression.
    /// `input` has the scale of `g`, the result has the scale of `self`.
    ///
    /// ## Errors
    ///
    ///  - InvalidAccuracy: `accuracy` is 0.
    ///  - ScaleMismatch: `input` has an unexpected scale.
    ///  - MalformedExpression: a polynomial has no coefficients.
    ///  - InvalidScale: a scale is not positive.
    pub fn differentiate_composition(
        &self,
        g: &Expression,
        input: &FixedPoint,
        accuracy: usize,
    ) -> Result<FixedPoint, Error> {
        let composition = Composition {
            f: self.clone(),
            g: g.clone(),
        };
        composition.derivative_at(input, accuracy)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_compose_polynomials() {
        // f(x) = x^2 + 1, g(x) = 2x + 3, f(g(2)) = 50
        let f = Expression::polynomial([1, 0, 1], 1).unwrap();
        let g = Expression::polynomial([3, 2], 1).unwrap();
        let x = FixedPoint::new(2, 1).unwrap();

        let c = f.clone().compose(g.clone()).unwrap();
        assert_eq!(c.evaluate(&x, 1).unwrap(), FixedPoint::new(50, 1).unwrap());
        assert_eq!(f.evaluate_composition(&g, &x, 1).unwrap(), FixedPoint::new(50, 1).unwrap());

        // d/dx = 2 * (2x + 3) * 2 = 28
        assert_eq!(
            f.differentiate_composition(&g, &x, 1).unwrap(),
            FixedPoint::new(28, 1).unwrap()
        );
        assert_eq!(c.derivative_at(&x, 1).unwrap(), FixedPoint::new(28, 1).unwrap());
    }

    #[test]
    fn test_compose_rescale() {
        // f(x) = x^2 with one = 100, g(x) = x + 0.005 with one = 1000, at x = 1.5
        // g(1.5) = 1.505 -> 1.50 in the scale of f, f(1.50) = 2.25
        let f = Expression::polynomial([0, 0, 100], 100).unwrap();
        let g = Expression::polynomial([5, 1000], 1000).unwrap();
        let x = FixedPoint::new(1500, 1000).unwrap();

        let v = f.evaluate_composition(&g, &x, 4).unwrap();
        assert_eq!(v, FixedPoint::new(225, 100).unwrap());

        // inputs must come in the scale of g
        let x = FixedPoint::new(150, 100).unwrap();
        assert_eq!(f.evaluate_composition(&g, &x, 4), Err(Error::ScaleMismatch));

        // f'(1.50) * g'(1.5) = 3.00 * 1.000
        let x = FixedPoint::new(1500, 1000).unwrap();
        let d = f.differentiate_composition(&g, &x, 4).unwrap();
        assert_eq!(d, FixedPoint::new(300, 100).unwrap());
    }

    #[test]
    fn test_compose_transcendental() {
        let one = 100_000_000;

        // sin(2x) at 0.5 = sin(1)
        let f = Expression::sin(one, 1).unwrap();
        let g = Expression::polynomial([0, 2 * one], one).unwrap();
        let x = FixedPoint::new(50_000_000, one).unwrap();
        assert_eq!(
            f.evaluate_composition(&g, &x, 12).unwrap(),
            FixedPoint::new(84147099, one).unwrap()
        );

        // d/dx sin(2x) = 2 cos(2x), at 0.5 = 2 * cos(1)
        assert_eq!(
            f.differentiate_composition(&g, &x, 12).unwrap(),
            FixedPoint::new(108060462, one).unwrap()
        );

        // exp(cos(x)) at 0 = e
        let f = Expression::exp(one, 1).unwrap();
        let g = Expression::cos(one, 1).unwrap();
        let x = FixedPoint::zero(one).unwrap();
        let c = f.clone().compose(g.clone()).unwrap();
        assert_eq!(c.evaluate(&x, 12).unwrap(), FixedPoint::new(271828178, one).unwrap());

        // d/dx exp(cos(x)) = -sin(x) exp(cos(x)), zero at 0
        assert!(f.differentiate_composition(&g, &x, 12).unwrap().is_zero());
    }

    #[test]
    fn test_nested_composition() {
        // f(g(h(x))) with f(x) = x^2, g(x) = x + 1, h(x) = 3x at x = 1: (3 + 1)^2 = 16
        let f = Expression::polynomial([0, 0, 1], 1).unwrap();
        let g = Expression::polynomial([1, 1], 1).unwrap();
        let h = Expression::polynomial([0, 3], 1).unwrap();
        let x = FixedPoint::new(1, 1).unwrap();

        let gh = g.compose(h).unwrap();
        let fgh = f.compose(gh).unwrap();
        assert_eq!(fgh.evaluate(&x, 1).unwrap(), FixedPoint::new(16, 1).unwrap());

        // 2 * (3x + 1) * 3 = 24
        assert_eq!(fgh.derivative_at(&x, 1).unwrap(), FixedPoint::new(24, 1).unwrap());

        let (outer, inner) = match fgh {
            Expression::Composition(c) => c.into_parts(),
            _ => unreachable!(),
        };
        assert_eq!(outer.degree(), Some(2));
        assert_eq!(inner.form(), None);
    }

    #[test]
    fn test_compose_errors() {
        let f = Expression::sin(1000, 1).unwrap();
        let g = Expression::cos(1000, 1).unwrap();
        let x = FixedPoint::new(1, 1000).unwrap();
        assert_eq!(f.evaluate_composition(&g, &x, 0), Err(Error::InvalidAccuracy));
        assert_eq!(f.differentiate_composition(&g, &x, 0), Err(Error::InvalidAccuracy));
    }
}
