//! Serialization of FixedPoint.
//! A number is serialized to the string `"value/one"`.

use crate::FixedPoint;
use serde::Serialize;
use serde::Serializer;

impl Serialize for FixedPoint {

    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
