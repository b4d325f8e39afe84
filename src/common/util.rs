//! Auxiliary functions.

use crate::defs::Error;
use num_bigint::BigInt;
use num_traits::Signed;
use num_traits::ToPrimitive;

/// Checks that the scale is strictly positive.
#[inline]
pub fn check_scale(one: &BigInt) -> Result<(), Error> {
    if one.is_positive() {
        Ok(())
    } else {
        Err(Error::InvalidScale)
    }
}

/// Checks that the number of series terms is not zero.
#[inline]
pub fn check_accuracy(accuracy: usize) -> Result<(), Error> {
    if accuracy == 0 {
        Err(Error::InvalidAccuracy)
    } else {
        Ok(())
    }
}

/// Converts a signed accuracy or bound received from a caller into a term count.
pub fn accuracy_from_signed(accuracy: i64) -> Result<usize, Error> {
    if accuracy <= 0 {
        return Err(Error::InvalidAccuracy);
    }
    usize::try_from(accuracy).map_err(|_| Error::InvalidAccuracy)
}

/// Converts a power into an exponent accepted by `BigInt::pow`.
pub fn power_to_u32(power: u64) -> Result<u32, Error> {
    u32::try_from(power).map_err(|_| Error::InvalidArgument)
}

/// Approximate ratio `value / one` as f64, used for diagnostics and tests.
pub fn ratio_to_f64(value: &BigInt, one: &BigInt) -> f64 {
    let v = value.to_f64().unwrap_or(f64::NAN);
    let o = one.to_f64().unwrap_or(f64::NAN);
    v / o
}

/// Rescale `value` from scale `from` to scale `to`, truncating toward zero.
#[inline]
pub fn rescale(value: &BigInt, from: &BigInt, to: &BigInt) -> BigInt {
    if from == to {
        value.clone()
    } else {
        value * to / from
    }
}
