//! Deserialization of FixedPoint, and validation of deserialized expressions.

use core::fmt::Formatter;
use core::str::FromStr;

use num_bigint::BigInt;
use serde::de::Error;
use serde::de::Visitor;
use serde::Deserialize;
use serde::Deserializer;

use crate::Coefficients;
use crate::FixedPoint;
use crate::Polynomial;
use crate::Transcendental;

pub struct FixedPointVisitor {}

impl<'de> Deserialize<'de> for FixedPoint {

    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FixedPointVisitor {})
    }
}

impl<'de> Visitor<'de> for FixedPointVisitor {

    type Value = FixedPoint;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "expect `String` in the form \"value/one\", or an integer")
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        FixedPoint::new(v, 1).map_err(|e| Error::custom(format!("{e:?}")))
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        FixedPoint::new(v, 1).map_err(|e| Error::custom(format!("{e:?}")))
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        FixedPoint::from_str(v).map_err(|e| Error::custom(format!("{e:?}")))
    }

    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        self.visit_str(&v)
    }
}

/// Polynomial fields as they appear in the input, checked by [`Polynomial::new`].
#[derive(Deserialize)]
pub(crate) struct PolynomialParts {
    coefficients: Coefficients,
    one: BigInt,
}

impl TryFrom<PolynomialParts> for Polynomial {

    type Error = crate::Error;

    fn try_from(parts: PolynomialParts) -> Result<Self, Self::Error> {
        Polynomial::new(parts.coefficients, parts.one)
    }
}

/// Transcendental fields as they appear in the input, checked by [`Transcendental::new`].
#[derive(Deserialize)]
pub(crate) struct TranscendentalParts {
    one: BigInt,
    scalar: BigInt,
}

impl TryFrom<TranscendentalParts> for Transcendental {

    type Error = crate::Error;

    fn try_from(parts: TranscendentalParts) -> Result<Self, Self::Error> {
        Transcendental::new(parts.one, parts.scalar)
    }
}

#[cfg(test)]
mod tests {

    use num_bigint::BigInt;
    use serde_json::from_str;
    use serde_json::to_string;

    use crate::Expression;
    use crate::FixedPoint;

    #[test]
    fn from_json() {
        assert_eq!(
            from_str::<FixedPoint>("\"-84147099/100000000\"").unwrap(),
            FixedPoint::new(-84147099, 100_000_000).unwrap()
        );
        assert_eq!(from_str::<FixedPoint>("\"42\"").unwrap(), FixedPoint::new(42, 1).unwrap());
        assert_eq!(from_str::<FixedPoint>("-7").unwrap(), FixedPoint::new(-7, 1).unwrap());
        assert_eq!(from_str::<FixedPoint>("7").unwrap(), FixedPoint::new(7, 1).unwrap());

        assert!(from_str::<FixedPoint>("\"1/0\"").is_err());
        assert!(from_str::<FixedPoint>("\"abc\"").is_err());
        assert!(from_str::<FixedPoint>("0.5").is_err());
    }

    #[test]
    fn expression_from_json() {
        let f = Expression::polynomial([1, 0, 1], 100).unwrap();
        let g = Expression::cos(1000, -2).unwrap();
        let c = f.compose(g).unwrap();

        let s = to_string(&c).unwrap();
        let d: Expression = from_str(&s).unwrap();
        assert_eq!(d, c);
        assert!(d.check().is_ok());
    }

    #[test]
    fn empty_polynomial_rejected() {
        let p = Expression::polynomial([7], 1).unwrap();
        let good = to_string(&p).unwrap();
        let coeffs = to_string(p.coefficients().unwrap()).unwrap();

        let bad = good.replace(
            &format!("\"coefficients\":{coeffs}"),
            "\"coefficients\":[]",
        );
        assert_ne!(bad, good);

        let err = from_str::<Expression>(&bad).unwrap_err();
        assert!(err.to_string().contains("malformed expression"));
        assert!(from_str::<Expression>(&good).is_ok());

        // nested inside a composition
        let c = Expression::sin(1000, 1).unwrap().compose(p).unwrap();
        let good = to_string(&c).unwrap();
        let bad = good.replace(
            &format!("\"coefficients\":{coeffs}"),
            "\"coefficients\":[]",
        );
        assert_ne!(bad, good);
        assert!(from_str::<Expression>(&bad).is_err());
        assert_eq!(from_str::<Expression>(&good).unwrap(), c);
    }

    #[test]
    fn non_positive_scale_rejected() {
        let one = to_string(&BigInt::from(1000)).unwrap();

        for zero_or_neg in [0, -1000] {
            let repl = to_string(&BigInt::from(zero_or_neg)).unwrap();

            let s = to_string(&Expression::cos(1000, 7).unwrap()).unwrap();
            let bad = s.replace(&format!("\"one\":{one}"), &format!("\"one\":{repl}"));
            assert_ne!(bad, s);
            assert!(from_str::<Expression>(&bad).is_err());

            let s = to_string(&Expression::polynomial([1, 2], 1000).unwrap()).unwrap();
            let bad = s.replace(&format!("\"one\":{one}"), &format!("\"one\":{repl}"));
            assert_ne!(bad, s);
            assert!(from_str::<Expression>(&bad).is_err());
        }
    }
}
