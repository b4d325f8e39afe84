//! Fixed-point number.

use crate::common::util::check_scale;
use crate::common::util::ratio_to_f64;
use crate::common::util::rescale;
use crate::defs::Error;
use core::fmt::Display;
use core::str::FromStr;
use num_bigint::BigInt;
use num_traits::Signed;
use num_traits::Zero;

/// A signed integer `value` interpreted as `value / one`.
///
/// Arithmetic between two numbers is defined only when their scales are equal.
/// Conversion between scales is always explicit with [`FixedPoint::rescale`].
/// All divisions truncate toward zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixedPoint {
    value: BigInt,
    one: BigInt,
}

impl FixedPoint {

    /// Creates a number from its raw value and the scale `one`.
    ///
    /// ## Errors
    ///
    ///  - InvalidScale: `one` is not positive.
    pub fn new(value: impl Into<BigInt>, one: impl Into<BigInt>) -> Result<Self, Error> {
        let one = one.into();
        check_scale(&one)?;
        Ok(FixedPoint {
            value: value.into(),
            one,
        })
    }

    /// Creates the number representing the integer `n`, i.e. raw value `n * one`.
    ///
    /// ## Errors
    ///
    ///  - InvalidScale: `one` is not positive.
    pub fn from_int(n: impl Into<BigInt>, one: impl Into<BigInt>) -> Result<Self, Error> {
        let one = one.into();
        check_scale(&one)?;
        let value = n.into() * &one;
        Ok(FixedPoint { value, one })
    }

    /// Returns zero with scale `one`.
    ///
    /// ## Errors
    ///
    ///  - InvalidScale: `one` is not positive.
    pub fn zero(one: impl Into<BigInt>) -> Result<Self, Error> {
        Self::new(BigInt::zero(), one)
    }

    /// Returns 1.0 with scale `one`.
    ///
    /// ## Errors
    ///
    ///  - InvalidScale: `one` is not positive.
    pub fn unit(one: impl Into<BigInt>) -> Result<Self, Error> {
        let one = one.into();
        Self::new(one.clone(), one)
    }

    // Caller guarantees that `one` is positive.
    pub(crate) fn from_raw_parts(value: BigInt, one: BigInt) -> Self {
        debug_assert!(one.is_positive());
        FixedPoint { value, one }
    }

    /// Decomposes `self` into the raw value and the scale.
    pub fn into_raw_parts(self) -> (BigInt, BigInt) {
        let FixedPoint { value, one } = self;
        (value, one)
    }

    /// Returns the raw integer value.
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// Returns the scale, the raw value that represents 1.0.
    pub fn scale(&self) -> &BigInt {
        &self.one
    }

    /// Returns true if `self` is zero.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Returns true if `self` is negative.
    pub fn is_negative(&self) -> bool {
        self.value.is_negative()
    }

    /// Returns true if `self` and `d2` share the same scale.
    pub fn same_scale(&self, d2: &Self) -> bool {
        self.one == d2.one
    }

    fn check_same_scale(&self, d2: &Self) -> Result<(), Error> {
        if self.same_scale(d2) {
            Ok(())
        } else {
            Err(Error::ScaleMismatch)
        }
    }

    /// Adds `d2` to `self`.
    ///
    /// ## Errors
    ///
    ///  - ScaleMismatch: the scales of the operands differ.
    pub fn add(&self, d2: &Self) -> Result<Self, Error> {
        self.check_same_scale(d2)?;
        Ok(Self::from_raw_parts(&self.value + &d2.value, self.one.clone()))
    }

    /// Subtracts `d2` from `self`.
    ///
    /// ## Errors
    ///
    ///  - ScaleMismatch: the scales of the operands differ.
    pub fn sub(&self, d2: &Self) -> Result<Self, Error> {
        self.check_same_scale(d2)?;
        Ok(Self::from_raw_parts(&self.value - &d2.value, self.one.clone()))
    }

    /// Multiplies `self` by `d2`. The product is truncated toward zero.
    ///
    /// ## Errors
    ///
    ///  - ScaleMismatch: the scales of the operands differ.
    pub fn mul(&self, d2: &Self) -> Result<Self, Error> {
        self.check_same_scale(d2)?;
        let value = &self.value * &d2.value / &self.one;
        Ok(Self::from_raw_parts(value, self.one.clone()))
    }

    /// Divides `self` by `d2`. The quotient is truncated toward zero.
    ///
    /// ## Errors
    ///
    ///  - ScaleMismatch: the scales of the operands differ.
    ///  - DivisionByZero: `d2` is zero.
    pub fn div(&self, d2: &Self) -> Result<Self, Error> {
        self.check_same_scale(d2)?;
        if d2.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let value = &self.value * &self.one / &d2.value;
        Ok(Self::from_raw_parts(value, self.one.clone()))
    }

    /// Multiplies `self` by the integer `n`. The result is exact.
    pub fn mul_int(&self, n: &BigInt) -> Self {
        Self::from_raw_parts(&self.value * n, self.one.clone())
    }

    /// Returns `-self`.
    pub fn neg(&self) -> Self {
        Self::from_raw_parts(-&self.value, self.one.clone())
    }

    /// Returns the absolute value of `self`.
    pub fn abs(&self) -> Self {
        Self::from_raw_parts(self.value.abs(), self.one.clone())
    }

    /// Converts `self` to the scale `one`, truncating toward zero.
    ///
    /// ## Errors
    ///
    ///  - InvalidScale: `one` is not positive.
    pub fn rescale(&self, one: &BigInt) -> Result<Self, Error> {
        check_scale(one)?;
        Ok(Self::from_raw_parts(
            rescale(&self.value, &self.one, one),
            one.clone(),
        ))
    }

    /// Returns the integer part of `self`, truncated toward zero.
    pub fn trunc(&self) -> BigInt {
        &self.value / &self.one
    }

    /// Returns an approximate value of `self` as f64.
    pub fn to_f64(&self) -> f64 {
        ratio_to_f64(&self.value, &self.one)
    }

    /// Returns a random number with scale `one` and `|value| <= max_abs`.
    ///
    /// ## Errors
    ///
    ///  - InvalidScale: `one` is not positive.
    #[cfg(feature = "random")]
    pub fn random(one: impl Into<BigInt>, max_abs: u32) -> Result<Self, Error> {
        let span = max_abs as i64 * 2 + 1;
        let value = (rand::random::<u64>() % span as u64) as i64 - max_abs as i64;
        Self::new(value, one)
    }
}

impl core::ops::Neg for FixedPoint {

    type Output = FixedPoint;

    fn neg(self) -> Self::Output {
        FixedPoint::neg(&self)
    }
}

impl Display for FixedPoint {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.value, self.one)
    }
}

impl FromStr for FixedPoint {

    type Err = Error;

    /// Parses `"value/one"`, or a bare integer with scale 1.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (value, one) = match s.split_once('/') {
            Some((v, o)) => (v.trim(), o.trim()),
            None => (s, "1"),
        };
        let value = BigInt::from_str(value).map_err(|_| Error::InvalidArgument)?;
        let one = BigInt::from_str(one).map_err(|_| Error::InvalidArgument)?;
        Self::new(value, one)
    }
}
