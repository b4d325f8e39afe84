//! Polynomials.

use super::Coefficients;
use super::Polynomial;
use crate::common::consts::ZERO;
use crate::common::util::check_scale;
use crate::defs::Error;
use crate::num::FixedPoint;
use num_bigint::BigInt;

impl Polynomial {

    /// Creates a polynomial from coefficients of scale `one`, lowest degree first.
    /// Trailing zero coefficients are kept.
    ///
    /// ## Errors
    ///
    ///  - MalformedExpression: no coefficients given.
    ///  - InvalidScale: `one` is not positive.
    pub fn new<C, I>(coefficients: I, one: impl Into<BigInt>) -> Result<Self, Error>
    where
        C: Into<BigInt>,
        I: IntoIterator<Item = C>,
    {
        let one = one.into();
        check_scale(&one)?;

        let coefficients: Coefficients = coefficients.into_iter().map(Into::into).collect();
        if coefficients.is_empty() {
            return Err(Error::MalformedExpression);
        }

        Ok(Polynomial { coefficients, one })
    }

    /// Returns the coefficients, lowest degree first.
    pub fn coefficients(&self) -> &[BigInt] {
        &self.coefficients
    }

    /// Returns the scale of the coefficients.
    pub fn scale(&self) -> &BigInt {
        &self.one
    }

    /// Returns the degree, counting trailing zero coefficients.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluates the polynomial at `input` with Horner's method.
    /// Every intermediate product is truncated toward zero.
    ///
    /// ## Errors
    ///
    ///  - ScaleMismatch: `input` has a scale different from the polynomial.
    ///  - MalformedExpression: the polynomial has no coefficients.
    pub fn evaluate(&self, input: &FixedPoint) -> Result<FixedPoint, Error> {
        if input.scale() != &self.one {
            return Err(Error::ScaleMismatch);
        }

        let mut iter = self.coefficients.iter().rev();
        let mut acc = iter.next().cloned().ok_or(Error::MalformedExpression)?;

        for c in iter {
            acc = acc * input.value() / &self.one + c;
        }

        Ok(FixedPoint::from_raw_parts(acc, self.one.clone()))
    }

    /// Returns the derivative. A constant polynomial yields `[0]`.
    pub fn differentiate(&self) -> Self {
        let coefficients: Coefficients = if self.coefficients.len() > 1 {
            self.coefficients
                .iter()
                .enumerate()
                .skip(1)
                .map(|(i, c)| c * i)
                .collect()
        } else {
            Coefficients::from_elem(ZERO.clone(), 1)
        };

        Polynomial {
            coefficients,
            one: self.one.clone(),
        }
    }

    pub(crate) fn scaled(&self, by: &BigInt) -> Self {
        Polynomial {
            coefficients: self.coefficients.iter().map(|c| c * by).collect(),
            one: self.one.clone(),
        }
    }

    pub(crate) fn check(&self) -> Result<(), Error> {
        check_scale(&self.one)?;
        if self.coefficients.is_empty() {
            Err(Error::MalformedExpression)
        } else {
            Ok(())
        }
    }

    /// Returns a random polynomial of the given degree with `|c[i]| <= max_abs`.
    ///
    /// ## Errors
    ///
    ///  - InvalidScale: `one` is not positive.
    #[cfg(feature = "random")]
    pub fn random(degree: usize, one: impl Into<BigInt>, max_abs: u32) -> Result<Self, Error> {
        let one = one.into();
        let mut coefficients = Coefficients::with_capacity(degree + 1);
        for _ in 0..=degree {
            let (c, _) = FixedPoint::random(one.clone(), max_abs)?.into_raw_parts();
            coefficients.push(c);
        }
        Polynomial::new(coefficients, one)
    }
}
