//! Static constants.

use lazy_static::lazy_static;
use num_bigint::BigInt;

lazy_static! {

    /// 0
    pub(crate) static ref ZERO: BigInt = BigInt::from(0);

    /// 1
    pub(crate) static ref ONE: BigInt = BigInt::from(1);
}
