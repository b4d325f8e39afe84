//! Factorial lookup table.

use crate::common::consts::ONE;
use num_bigint::BigInt;

/// Returns the factorials `0!, 1!, ..., n!`.
///
/// The table is built on every call; the bound is chosen by the caller and
/// the table is never shared between computations.
pub fn factorial_lookup_table(n: usize) -> Vec<BigInt> {
    let mut table = Vec::with_capacity(n + 1);
    let mut fct = ONE.clone();
    table.push(fct.clone());
    for k in 1..=n {
        fct *= k;
        table.push(fct.clone());
    }
    table
}
