//! Closed-form expressions: polynomials, sine, cosine, exponent, and their compositions.

mod compose;
mod diff;
mod display;
mod eval;
mod poly;

use crate::common::util::check_scale;
use crate::defs::Error;
use crate::defs::Form;
use num_bigint::BigInt;
use num_traits::One;
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::Deserialize;
#[cfg(feature = "serde")]
use serde::Serialize;

pub use compose::Composition;

/// Polynomial coefficients, lowest degree first.
pub type Coefficients = SmallVec<[BigInt; 8]>;

/// Polynomial `c[0] + c[1]*x + ... + c[n]*x^n` with fixed-point coefficients of scale `one`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "crate::for_3rd::de::PolynomialParts"))]
pub struct Polynomial {
    coefficients: Coefficients,
    one: BigInt,
}

/// Payload of `scalar * f(x)` where `f` is sine, cosine or exponent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "crate::for_3rd::de::TranscendentalParts"))]
pub struct Transcendental {
    one: BigInt,
    scalar: BigInt,
}

impl Transcendental {

    /// Creates the payload.
    ///
    /// ## Errors
    ///
    ///  - InvalidScale: `one` is not positive.
    pub fn new(one: impl Into<BigInt>, scalar: impl Into<BigInt>) -> Result<Self, Error> {
        let one = one.into();
        check_scale(&one)?;
        Ok(Transcendental {
            one,
            scalar: scalar.into(),
        })
    }

    /// Returns the scale.
    pub fn scale(&self) -> &BigInt {
        &self.one
    }

    /// Returns the integer multiplier.
    pub fn scalar(&self) -> &BigInt {
        &self.scalar
    }

    pub(crate) fn negated(&self) -> Self {
        Transcendental {
            one: self.one.clone(),
            scalar: -&self.scalar,
        }
    }

    pub(crate) fn scaled(&self, by: &BigInt) -> Self {
        Transcendental {
            one: self.one.clone(),
            scalar: &self.scalar * by,
        }
    }

    fn check(&self) -> Result<(), Error> {
        check_scale(&self.one)
    }
}

/// Expression of a single variable `x`.
///
/// Values are immutable: evaluation, differentiation and composition return new values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expression {
    /// Polynomial.
    Polynomial(Polynomial),

    /// `scalar * sin(x)`.
    Sin(Transcendental),

    /// `scalar * cos(x)`.
    Cos(Transcendental),

    /// `scalar * e^x`.
    Exp(Transcendental),

    /// `f(g(x))`.
    Composition(Box<Composition>),
}

impl Expression {

    /// Creates a polynomial from coefficients of scale `one`, lowest degree first.
    ///
    /// ## Errors
    ///
    ///  - MalformedExpression: no coefficients given.
    ///  - InvalidScale: `one` is not positive.
    pub fn polynomial<C, I>(coefficients: I, one: impl Into<BigInt>) -> Result<Self, Error>
    where
        C: Into<BigInt>,
        I: IntoIterator<Item = C>,
    {
        Polynomial::new(coefficients, one).map(Expression::Polynomial)
    }

    /// Creates `scalar * sin(x)`.
    ///
    /// ## Errors
    ///
    ///  - InvalidScale: `one` is not positive.
    pub fn sin(one: impl Into<BigInt>, scalar: impl Into<BigInt>) -> Result<Self, Error> {
        Transcendental::new(one, scalar).map(Expression::Sin)
    }

    /// Creates `scalar * cos(x)`.
    ///
    /// ## Errors
    ///
    ///  - InvalidScale: `one` is not positive.
    pub fn cos(one: impl Into<BigInt>, scalar: impl Into<BigInt>) -> Result<Self, Error> {
        Transcendental::new(one, scalar).map(Expression::Cos)
    }

    /// Creates `scalar * e^x`.
    ///
    /// ## Errors
    ///
    ///  - InvalidScale: `one` is not positive.
    pub fn exp(one: impl Into<BigInt>, scalar: impl Into<BigInt>) -> Result<Self, Error> {
        Transcendental::new(one, scalar).map(Expression::Exp)
    }

    /// Creates a sine, cosine or exponent expression selected by `form`.
    ///
    /// ## Errors
    ///
    ///  - MalformedExpression: `form` is a polynomial.
    ///  - InvalidScale: `one` is not positive.
    pub fn transcendental(
        form: Form,
        one: impl Into<BigInt>,
        scalar: impl Into<BigInt>,
    ) -> Result<Self, Error> {
        match form {
            Form::Sin => Self::sin(one, scalar),
            Form::Cos => Self::cos(one, scalar),
            Form::Exp => Self::exp(one, scalar),
            Form::Polynomial => Err(Error::MalformedExpression),
        }
    }

    /// Returns the form tag, or `None` for a composition.
    pub fn form(&self) -> Option<Form> {
        match self {
            Expression::Polynomial(_) => Some(Form::Polynomial),
            Expression::Sin(_) => Some(Form::Sin),
            Expression::Cos(_) => Some(Form::Cos),
            Expression::Exp(_) => Some(Form::Exp),
            Expression::Composition(_) => None,
        }
    }

    /// Scale of the value produced by the expression.
    pub fn scale(&self) -> &BigInt {
        match self {
            Expression::Polynomial(p) => p.scale(),
            Expression::Sin(t) | Expression::Cos(t) | Expression::Exp(t) => t.scale(),
            Expression::Composition(c) => c.outer().scale(),
        }
    }

    /// Scale expected from the evaluation input.
    pub fn input_scale(&self) -> &BigInt {
        match self {
            Expression::Composition(c) => c.inner().input_scale(),
            _ => self.scale(),
        }
    }

    /// Returns the integer multiplier of sine, cosine or exponent.
    pub fn scalar(&self) -> Option<&BigInt> {
        match self {
            Expression::Sin(t) | Expression::Cos(t) | Expression::Exp(t) => Some(t.scalar()),
            _ => None,
        }
    }

    /// Returns the coefficients of a polynomial.
    pub fn coefficients(&self) -> Option<&[BigInt]> {
        match self {
            Expression::Polynomial(p) => Some(p.coefficients()),
            _ => None,
        }
    }

    /// Returns the degree of a polynomial.
    pub fn degree(&self) -> Option<usize> {
        match self {
            Expression::Polynomial(p) => Some(p.degree()),
            _ => None,
        }
    }

    /// Multiplies the expression by the integer `by`.
    ///
    /// The scalar of sine, cosine and exponent is multiplied, every polynomial
    /// coefficient is multiplied, and a composition scales its outer function.
    pub fn scaled(&self, by: &BigInt) -> Self {
        if by.is_one() {
            return self.clone();
        }
        match self {
            Expression::Polynomial(p) => Expression::Polynomial(p.scaled(by)),
            Expression::Sin(t) => Expression::Sin(t.scaled(by)),
            Expression::Cos(t) => Expression::Cos(t.scaled(by)),
            Expression::Exp(t) => Expression::Exp(t.scaled(by)),
            Expression::Composition(c) => Expression::Composition(Box::new(c.scaled(by))),
        }
    }

    /// Verifies the invariants of the expression tree.
    ///
    /// Values built with the constructors or deserialized always pass.
    ///
    /// ## Errors
    ///
    ///  - MalformedExpression: a polynomial has no coefficients.
    ///  - InvalidScale: a scale is not positive.
    pub fn check(&self) -> Result<(), Error> {
        match self {
            Expression::Polynomial(p) => p.check(),
            Expression::Sin(t) | Expression::Cos(t) | Expression::Exp(t) => t.check(),
            Expression::Composition(c) => {
                c.outer().check()?;
                c.inner().check()
            }
        }
    }
}
