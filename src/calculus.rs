//! Flat interface taking raw integers and numeric form tags.
//!
//! Every function validates its arguments and builds the typed values from
//! [`crate::Expression`] and [`crate::FixedPoint`] internally. Forms are encoded as
//! `0` polynomial, `1` sine, `2` cosine, `3` exponent. Accuracies and bounds are
//! signed so that negative values coming from a caller are reported as errors.

use crate::common::util::accuracy_from_signed;
use crate::defs::Error;
use crate::defs::Form;
use crate::expr::Expression;
use crate::num::FixedPoint;
use num_bigint::BigInt;

/// Builds a polynomial expression.
///
/// ## Errors
///
///  - MalformedExpression: `coefficients` is empty.
///  - InvalidScale: `one` is not positive.
pub fn make_polynomial(coefficients: &[BigInt], one: &BigInt) -> Result<Expression, Error> {
    Expression::polynomial(coefficients.iter().cloned(), one.clone())
}

/// Evaluates the polynomial at the raw `input` of scale `one`.
///
/// ## Errors
///
///  - MalformedExpression: `coefficients` is empty.
///  - InvalidScale: `one` is not positive.
pub fn evaluate_polynomial(
    coefficients: &[BigInt],
    input: &BigInt,
    one: &BigInt,
) -> Result<FixedPoint, Error> {
    let p = make_polynomial(coefficients, one)?;
    let x = FixedPoint::new(input.clone(), one.clone())?;
    p.evaluate(&x, 1)
}

/// Returns the derivative of the polynomial.
///
/// ## Errors
///
///  - MalformedExpression: `coefficients` is empty.
///  - InvalidScale: `one` is not positive.
pub fn differentiate_polynomial(coefficients: &[BigInt], one: &BigInt) -> Result<Expression, Error> {
    make_polynomial(coefficients, one)?.differentiate()
}

/// Builds `scalar * sin(x)` or `scalar * cos(x)`.
///
/// ## Errors
///
///  - MalformedExpression: `form` is not sine or cosine.
///  - InvalidScale: `one` is not positive.
pub fn make_trig(form: u8, one: &BigInt, scalar: &BigInt) -> Result<Expression, Error> {
    let form = Form::try_from(form)?;
    if !form.is_trig() {
        return Err(Error::MalformedExpression);
    }
    Expression::transcendental(form, one.clone(), scalar.clone())
}

/// Returns the derivative of a sine or cosine expression.
///
/// ## Errors
///
///  - MalformedExpression: `expr` is not sine or cosine.
///  - InvalidScale: the scale is not positive.
pub fn differentiate_trig(expr: &Expression) -> Result<Expression, Error> {
    match expr.form() {
        Some(form) if form.is_trig() => expr.differentiate(),
        _ => Err(Error::MalformedExpression),
    }
}

/// Evaluates `scalar * f(input)` where `f` is sine, cosine or exponent.
///
/// ## Errors
///
///  - MalformedExpression: `form` is unknown or a polynomial.
///  - InvalidScale: `one` is not positive.
///  - InvalidAccuracy: `accuracy` is not positive.
pub fn evaluate_transcendental(
    form: u8,
    one: &BigInt,
    scalar: &BigInt,
    input: &BigInt,
    accuracy: i64,
) -> Result<FixedPoint, Error> {
    let form = Form::try_from(form)?;
    let expr = Expression::transcendental(form, one.clone(), scalar.clone())?;
    let accuracy = accuracy_from_signed(accuracy)?;
    let x = FixedPoint::new(input.clone(), one.clone())?;
    expr.evaluate(&x, accuracy)
}

/// Evaluates `f(g(input))`. Index 0 of each array describes the outer function `f`,
/// index 1 the inner function `g`. Polynomials take their coefficients multiplied by
/// the scalar; sine, cosine and exponent ignore the coefficients. `input` has the
/// scale `ones[1]`, the result has the scale `ones[0]`.
///
/// ## Errors
///
///  - MalformedExpression: a form is unknown, or a polynomial has no coefficients.
///  - InvalidScale: a scale is not positive.
///  - InvalidAccuracy: `accuracy` is not positive.
pub fn compose(
    forms: [u8; 2],
    ones: &[BigInt; 2],
    coefficient_sets: [&[BigInt]; 2],
    scalars: &[BigInt; 2],
    input: &BigInt,
    accuracy: i64,
) -> Result<FixedPoint, Error> {
    let (f, g) = make_pair(forms, ones, coefficient_sets, scalars)?;
    let accuracy = accuracy_from_signed(accuracy)?;
    let x = FixedPoint::new(input.clone(), ones[1].clone())?;
    f.evaluate_composition(&g, &x, accuracy)
}

/// Computes the derivative of `f(g(x))` at `input` with the chain rule.
/// Arguments are the same as for [`compose`].
///
/// ## Errors
///
///  - MalformedExpression: a form is unknown, or a polynomial has no coefficients.
///  - InvalidScale: a scale is not positive.
///  - InvalidAccuracy: `accuracy` is not positive.
pub fn differentiate_composition(
    forms: [u8; 2],
    ones: &[BigInt; 2],
    coefficient_sets: [&[BigInt]; 2],
    scalars: &[BigInt; 2],
    input: &BigInt,
    accuracy: i64,
) -> Result<FixedPoint, Error> {
    let (f, g) = make_pair(forms, ones, coefficient_sets, scalars)?;
    let accuracy = accuracy_from_signed(accuracy)?;
    let x = FixedPoint::new(input.clone(), ones[1].clone())?;
    f.differentiate_composition(&g, &x, accuracy)
}

/// Returns `[0!, 1!, ..., n!]`.
///
/// ## Errors
///
///  - InvalidArgument: `n` is negative.
pub fn factorial_lookup_table(n: i64) -> Result<Vec<BigInt>, Error> {
    let n = usize::try_from(n).map_err(|_| Error::InvalidArgument)?;
    Ok(crate::ops::factorial::factorial_lookup_table(n))
}

/// Computes `base^power` for the raw `base` of scale `one`, summing at most
/// `bound + 1` terms of the binomial expansion.
///
/// ## Errors
///
///  - InvalidScale: `one` is not positive.
///  - InvalidAccuracy: `bound` is not positive.
///  - DivisionByZero: `power` is negative and `base` is zero.
///  - InvalidArgument: `|power|` does not fit in 32 bits.
pub fn integer_power(
    base: &BigInt,
    power: i64,
    one: &BigInt,
    bound: i64,
) -> Result<FixedPoint, Error> {
    let base = FixedPoint::new(base.clone(), one.clone())?;
    let bound = accuracy_from_signed(bound)?;
    base.powi(power, bound)
}

fn make_expression(
    form: u8,
    one: &BigInt,
    coefficients: &[BigInt],
    scalar: &BigInt,
) -> Result<Expression, Error> {
    match Form::try_from(form)? {
        Form::Polynomial => Ok(make_polynomial(coefficients, one)?.scaled(scalar)),
        form => Expression::transcendental(form, one.clone(), scalar.clone()),
    }
}

fn make_pair(
    forms: [u8; 2],
    ones: &[BigInt; 2],
    coefficient_sets: [&[BigInt]; 2],
    scalars: &[BigInt; 2],
) -> Result<(Expression, Expression), Error> {
    let f = make_expression(forms[0], &ones[0], coefficient_sets[0], &scalars[0])?;
    let g = make_expression(forms[1], &ones[1], coefficient_sets[1], &scalars[1])?;

    Ok((f, g))
}
