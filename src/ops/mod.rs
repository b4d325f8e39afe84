//! Numeric operations: the power engine and the Taylor series of the transcendental functions.

mod cos;
mod exp;
pub mod factorial;
pub mod pow;
mod series;
mod sin;
