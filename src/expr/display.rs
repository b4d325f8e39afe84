//! Human-readable form of expressions.

use super::Expression;
use super::Polynomial;
use super::Transcendental;
use core::fmt::Display;
use num_bigint::BigInt;
use num_traits::One;
use num_traits::Signed;
use num_traits::Zero;

const VAR: &str = "x";

impl Expression {

    fn render(&self, var: &str) -> String {
        match self {
            Expression::Polynomial(p) => p.render(var),
            Expression::Sin(t) => t.render("sin", var),
            Expression::Cos(t) => t.render("cos", var),
            Expression::Exp(t) => t.render("exp", var),
            Expression::Composition(c) => {
                let inner = c.inner().render(var);
                c.outer().render(&inner)
            }
        }
    }
}

impl Polynomial {

    fn render(&self, var: &str) -> String {
        let atom = if var.chars().all(char::is_alphanumeric) {
            var.to_owned()
        } else {
            format!("({var})")
        };

        let mut ret = String::new();

        for (i, c) in self.coefficients.iter().enumerate() {
            if c.is_zero() {
                continue;
            }

            if ret.is_empty() {
                if c.is_negative() {
                    ret.push('-');
                }
            } else if c.is_negative() {
                ret.push_str(" - ");
            } else {
                ret.push_str(" + ");
            }

            let m = c.abs();
            let term = match i {
                0 => fmt_coeff(&m, &self.one),
                1 if m == self.one => atom.clone(),
                1 => format!("{}*{}", fmt_coeff(&m, &self.one), atom),
                _ if m == self.one => format!("{}^{}", atom, i),
                _ => format!("{}*{}^{}", fmt_coeff(&m, &self.one), atom, i),
            };
            ret.push_str(&term);
        }

        if ret.is_empty() {
            ret.push('0');
        }

        ret
    }
}

impl Transcendental {

    fn render(&self, name: &str, var: &str) -> String {
        if self.scalar.is_zero() {
            "0".to_owned()
        } else if self.scalar.is_one() {
            format!("{name}({var})")
        } else if (-&self.scalar).is_one() {
            format!("-{name}({var})")
        } else {
            format!("{}*{name}({var})", self.scalar)
        }
    }
}

fn fmt_coeff(m: &BigInt, one: &BigInt) -> String {
    if one.is_one() {
        m.to_string()
    } else {
        format!("{m}/{one}")
    }
}

impl Display for Expression {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.render(VAR))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_display_polynomial() {
        let p = Expression::polynomial([1, 20, 3, 40], 1).unwrap();
        assert_eq!(p.to_string(), "1 + 20*x + 3*x^2 + 40*x^3");

        let p = Expression::polynomial([0, -1, 0, 5], 1).unwrap();
        assert_eq!(p.to_string(), "-x + 5*x^3");

        let p = Expression::polynomial([0, 0], 1).unwrap();
        assert_eq!(p.to_string(), "0");

        let p = Expression::polynomial([-3], 1).unwrap();
        assert_eq!(p.to_string(), "-3");

        let p = Expression::polynomial([5, 10, -25], 10).unwrap();
        assert_eq!(p.to_string(), "5/10 + x - 25/10*x^2");
    }

    #[test]
    fn test_display_transcendental() {
        assert_eq!(Expression::sin(1000, 3).unwrap().to_string(), "3*sin(x)");
        assert_eq!(Expression::cos(1000, -1).unwrap().to_string(), "-cos(x)");
        assert_eq!(Expression::exp(1000, 1).unwrap().to_string(), "exp(x)");
        assert_eq!(Expression::exp(1000, -12).unwrap().to_string(), "-12*exp(x)");
        assert_eq!(Expression::sin(1000, 0).unwrap().to_string(), "0");
    }

    #[test]
    fn test_display_composition() {
        let f = Expression::sin(1, 1).unwrap();
        let g = Expression::polynomial([0, 2], 1).unwrap();
        assert_eq!(f.compose(g).unwrap().to_string(), "sin(2*x)");

        let f = Expression::polynomial([1, 0, 1], 1).unwrap();
        let g = Expression::polynomial([3, 2], 1).unwrap();
        assert_eq!(f.compose(g).unwrap().to_string(), "1 + (3 + 2*x)^2");

        let f = Expression::polynomial([0, 0, 1], 1).unwrap();
        let g = Expression::polynomial([1, 1], 1).unwrap();
        let h = Expression::polynomial([0, 3], 1).unwrap();
        let fgh = f.compose(g.compose(h).unwrap()).unwrap();
        assert_eq!(fgh.to_string(), "(1 + (3*x))^2");
    }
}
