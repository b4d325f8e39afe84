//! Definitions.

use core::fmt::Display;

#[cfg(feature = "serde")]
use serde::Deserialize;
#[cfg(feature = "serde")]
use serde::Serialize;

/// Default number of series terms used by `ctx::Context`.
pub const DEFAULT_ACCURACY: usize = 12;

/// Possible errors.
#[derive(Debug, Clone, Copy)]
pub enum Error {
    /// The scale `one` is zero or negative.
    InvalidScale,

    /// The accuracy or the factorial lookup bound is zero or negative.
    InvalidAccuracy,

    /// Empty coefficient sequence or unknown form tag.
    MalformedExpression,

    /// Two fixed-point values with different scales were mixed without rescaling.
    ScaleMismatch,

    /// Divisor is zero.
    DivisionByZero,

    /// The result has no closed form among the expression variants.
    Unrepresentable,

    /// Invalid argument.
    InvalidArgument,
}

impl std::error::Error for Error {

    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let repr = match self {
            Error::InvalidScale => "scale must be a positive integer",
            Error::InvalidAccuracy => "accuracy must be a positive integer",
            Error::MalformedExpression => "malformed expression",
            Error::ScaleMismatch => "scale mismatch",
            Error::DivisionByZero => "division by zero",
            Error::Unrepresentable => "result is not representable as an expression",
            Error::InvalidArgument => "invalid argument",
        };
        f.write_str(repr)
    }
}

impl PartialEq for Error {

    fn eq(&self, other: &Self) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }
}

impl Eq for Error {}

/// Expression form tag.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Form {
    /// Polynomial.
    Polynomial = 0,

    /// Sine.
    Sin = 1,

    /// Cosine.
    Cos = 2,

    /// Exponent.
    Exp = 3,
}

impl Form {

    /// Returns true for the forms evaluated with a Taylor series.
    pub fn is_transcendental(&self) -> bool {
        !matches!(self, Form::Polynomial)
    }

    /// Returns true for sine and cosine.
    pub fn is_trig(&self) -> bool {
        matches!(self, Form::Sin | Form::Cos)
    }

    /// Returns the numeric tag of the form.
    pub fn to_int(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for Form {

    type Error = Error;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Form::Polynomial),
            1 => Ok(Form::Sin),
            2 => Ok(Form::Cos),
            3 => Ok(Form::Exp),
            _ => Err(Error::MalformedExpression),
        }
    }
}

impl Display for Form {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let repr = match self {
            Form::Polynomial => "polynomial",
            Form::Sin => "sin",
            Form::Cos => "cos",
            Form::Exp => "exp",
        };
        f.write_str(repr)
    }
}
