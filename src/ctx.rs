//! Context holding the scale and the accuracy shared by a group of operations.

use crate::common::consts::ONE;
use crate::common::util::check_accuracy;
use crate::common::util::check_scale;
use crate::defs::Error;
use crate::defs::DEFAULT_ACCURACY;
use crate::expr::Expression;
use crate::num::FixedPoint;
use num_bigint::BigInt;

/// Context contains the scale of created numbers and expressions and the
/// accuracy used for evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Context {
    one: BigInt,
    accuracy: usize,
}

impl Context {

    /// Creates a context with scale `one` and the default accuracy.
    ///
    /// ## Errors
    ///
    ///  - InvalidScale: `one` is not positive.
    pub fn new(one: impl Into<BigInt>) -> Result<Self, Error> {
        let one = one.into();
        check_scale(&one)?;
        Ok(Context {
            one,
            accuracy: DEFAULT_ACCURACY,
        })
    }

    /// Sets the scale of the context.
    ///
    /// ## Errors
    ///
    ///  - InvalidScale: `one` is not positive.
    pub fn set_scale(&mut self, one: impl Into<BigInt>) -> Result<&mut Self, Error> {
        let one = one.into();
        check_scale(&one)?;
        self.one = one;
        Ok(self)
    }

    /// Sets the accuracy of the context.
    ///
    /// ## Errors
    ///
    ///  - InvalidAccuracy: `accuracy` is 0.
    pub fn set_accuracy(&mut self, accuracy: usize) -> Result<&mut Self, Error> {
        check_accuracy(accuracy)?;
        self.accuracy = accuracy;
        Ok(self)
    }

    /// Returns the scale of the context.
    pub fn get_scale(&self) -> &BigInt {
        &self.one
    }

    /// Returns the accuracy of the context.
    pub fn get_accuracy(&self) -> usize {
        self.accuracy
    }

    /// Returns the scale and the accuracy.
    pub fn to_raw_parts(&self) -> (&BigInt, usize) {
        (&self.one, self.accuracy)
    }

    /// Returns the number with the raw value `value` in the scale of the context.
    pub fn fixed(&self, value: impl Into<BigInt>) -> FixedPoint {
        FixedPoint::from_raw_parts(value.into(), self.one.clone())
    }

    /// Returns the number representing the integer `n` in the scale of the context.
    pub fn from_int(&self, n: impl Into<BigInt>) -> FixedPoint {
        FixedPoint::from_raw_parts(n.into() * &self.one, self.one.clone())
    }

    /// Creates a polynomial with coefficients in the scale of the context.
    ///
    /// ## Errors
    ///
    ///  - MalformedExpression: no coefficients given.
    pub fn polynomial<C, I>(&self, coefficients: I) -> Result<Expression, Error>
    where
        C: Into<BigInt>,
        I: IntoIterator<Item = C>,
    {
        Expression::polynomial(coefficients, self.one.clone())
    }

    /// Evaluates `expr` at `input` with the accuracy of the context.
    ///
    /// ## Errors
    ///
    ///  - ScaleMismatch: `input` has an unexpected scale.
    ///  - MalformedExpression: a polynomial has no coefficients.
    ///  - InvalidScale: a scale is not positive.
    pub fn evaluate(&self, expr: &Expression, input: &FixedPoint) -> Result<FixedPoint, Error> {
        expr.evaluate(input, self.accuracy)
    }

    /// Evaluates the derivative of `expr` at `input` with the accuracy of the context.
    ///
    /// ## Errors
    ///
    ///  - ScaleMismatch: `input` has an unexpected scale.
    ///  - MalformedExpression: a polynomial has no coefficients.
    ///  - InvalidScale: a scale is not positive.
    pub fn derivative_at(&self, expr: &Expression, input: &FixedPoint) -> Result<FixedPoint, Error> {
        expr.derivative_at(input, self.accuracy)
    }

    /// Computes the derivative of `f(g(x))` at `input` with the accuracy of the context.
    ///
    /// ## Errors
    ///
    ///  - ScaleMismatch: `input` has an unexpected scale.
    ///  - MalformedExpression: a polynomial has no coefficients.
    ///  - InvalidScale: a scale is not positive.
    pub fn differentiate_composition(
        &self,
        f: &Expression,
        g: &Expression,
        input: &FixedPoint,
    ) -> Result<FixedPoint, Error> {
        f.differentiate_composition(g, input, self.accuracy)
    }

    /// Computes `base^power` using the accuracy of the context as the factorial lookup bound.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `power` is negative and `base` is zero.
    ///  - InvalidArgument: `|power|` does not fit in 32 bits.
    pub fn powi(&self, base: &FixedPoint, power: i64) -> Result<FixedPoint, Error> {
        base.powi(power, self.accuracy)
    }
}

macro_rules! impl_transcendental {
    ($comment:literal, $fname:ident) => {
        #[doc=$comment]
        ///
        /// ## Errors
        ///
        ///  - InvalidScale: the scale is not positive.
        pub fn $fname(&self, scalar: impl Into<BigInt>) -> Result<Expression, Error> {
            Expression::$fname(self.one.clone(), scalar)
        }
    };
}

impl Context {

    impl_transcendental!("Creates `scalar * sin(x)` in the scale of the context.", sin);
    impl_transcendental!("Creates `scalar * cos(x)` in the scale of the context.", cos);
    impl_transcendental!("Creates `scalar * e^x` in the scale of the context.", exp);
}

impl Default for Context {

    fn default() -> Self {
        Context {
            one: ONE.clone(),
            accuracy: DEFAULT_ACCURACY,
        }
    }
}

/// Create a new context with scale `one`.
///
/// ## Errors
///
///  - InvalidScale: `one` is not positive.
pub fn with_scale(one: impl Into<BigInt>) -> Result<Context, Error> {
    Context::new(one)
}

/// Create a new context with scale 1 and accuracy `accuracy`.
///
/// ## Errors
///
///  - InvalidAccuracy: `accuracy` is 0.
pub fn with_accuracy(accuracy: usize) -> Result<Context, Error> {
    check_accuracy(accuracy)?;
    Ok(Context {
        one: ONE.clone(),
        accuracy,
    })
}
