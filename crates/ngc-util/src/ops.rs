//! Operator semantics.
//!
//! Binary operators come in three precedence levels (handled by the
//! parser; this module only knows how to apply them):
//!
//! | Level | Operators                 |
//! |-------|---------------------------|
//! | 1     | `+` `-` `and` `or` `xor`  |
//! | 2     | `*` `/`                   |
//! | 3     | `**`                      |
//!
//! Unary operators are function-like and take a single bracketed
//! expression: `sin[90]`. Trigonometry works in degrees on both input
//! and output.

use std::f64::consts::PI;

use crate::error::{Error, Result};
use crate::number::Number;

fn to_deg(radians: f64) -> f64 {
    radians * 180.0 / PI
}

fn to_rad(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Rejects infinities produced from finite inputs (e.g. `exp[1000]`).
fn finite(value: f64, what: &str) -> Result<Number> {
    if value.is_finite() {
        Ok(Number::Float(value))
    } else {
        Err(Error::Arithmetic(format!("result of {what} out of range")))
    }
}

/// A binary operator of the expression language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    // Level 1
    Add,
    Sub,
    And,
    Or,
    Xor,
    // Level 2
    Mul,
    Div,
    // Level 3
    Pow,
}

impl BinOp {
    /// The operator as written in source.
    pub const fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::And => "and",
            BinOp::Or => "or",
            BinOp::Xor => "xor",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Pow => "**",
        }
    }

    /// Applies the operator to two evaluated operands.
    ///
    /// `+`, `-` and `*` preserve the integer tag when both inputs carry
    /// it; `/` always produces a float; the logical operators compare
    /// truthiness (nonzero) and yield integer 0 or 1.
    pub fn apply(self, lhs: Number, rhs: Number) -> Result<Number> {
        match self {
            BinOp::Add => self.arithmetic(lhs, rhs, i64::checked_add, |a, b| a + b),
            BinOp::Sub => self.arithmetic(lhs, rhs, i64::checked_sub, |a, b| a - b),
            BinOp::Mul => self.arithmetic(lhs, rhs, i64::checked_mul, |a, b| a * b),
            BinOp::Div => {
                if rhs.as_f64() == 0.0 {
                    return Err(Error::Arithmetic("division by zero".into()));
                }
                finite(lhs.as_f64() / rhs.as_f64(), "division")
            }
            BinOp::And => Ok(truth(lhs.is_truthy() && rhs.is_truthy())),
            BinOp::Or => Ok(truth(lhs.is_truthy() || rhs.is_truthy())),
            BinOp::Xor => Ok(truth(lhs.is_truthy() ^ rhs.is_truthy())),
            BinOp::Pow => pow(lhs, rhs),
        }
    }

    fn arithmetic(
        self,
        lhs: Number,
        rhs: Number,
        int_op: fn(i64, i64) -> Option<i64>,
        float_op: fn(f64, f64) -> f64,
    ) -> Result<Number> {
        match (lhs, rhs) {
            (Number::Int(a), Number::Int(b)) => int_op(a, b).map(Number::Int).ok_or_else(|| {
                Error::Arithmetic(format!("integer overflow in {a} {} {b}", self.symbol()))
            }),
            _ => finite(float_op(lhs.as_f64(), rhs.as_f64()), self.symbol()),
        }
    }
}

fn truth(value: bool) -> Number {
    Number::Int(value as i64)
}

/// Exponentiation. An integer base raised to a non-negative integer
/// exponent stays an integer (`0 ** 0` is pinned to 1); every other
/// combination goes through floating point, and combinations with no
/// real result (negative base, fractional exponent) fail.
fn pow(base: Number, exponent: Number) -> Result<Number> {
    if let (Number::Int(b), Number::Int(e)) = (base, exponent) {
        if (0..=u32::MAX as i64).contains(&e) {
            return b
                .checked_pow(e as u32)
                .map(Number::Int)
                .ok_or_else(|| Error::Arithmetic(format!("integer overflow in {b} ** {e}")));
        }
    }

    let value = base.as_f64().powf(exponent.as_f64());
    if value.is_nan() {
        return Err(Error::Arithmetic(format!(
            "no real result for {base} ** {exponent}"
        )));
    }
    finite(value, "exponentiation")
}

/// A unary (function-like) operator: `sin[...]`, `fix[...]`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Abs,
    Acos,
    Asin,
    Atan,
    Cos,
    Exp,
    Fix,
    Fup,
    Ln,
    Round,
    Sin,
    Sqrt,
    Tan,
}

impl UnaryOp {
    /// All operators, in the order the reference grammars list them.
    pub const ALL: [UnaryOp; 13] = [
        UnaryOp::Abs,
        UnaryOp::Acos,
        UnaryOp::Asin,
        UnaryOp::Atan,
        UnaryOp::Cos,
        UnaryOp::Exp,
        UnaryOp::Fix,
        UnaryOp::Fup,
        UnaryOp::Ln,
        UnaryOp::Round,
        UnaryOp::Sin,
        UnaryOp::Sqrt,
        UnaryOp::Tan,
    ];

    /// The operator name in lowercase.
    pub const fn name(self) -> &'static str {
        match self {
            UnaryOp::Abs => "abs",
            UnaryOp::Acos => "acos",
            UnaryOp::Asin => "asin",
            UnaryOp::Atan => "atan",
            UnaryOp::Cos => "cos",
            UnaryOp::Exp => "exp",
            UnaryOp::Fix => "fix",
            UnaryOp::Fup => "fup",
            UnaryOp::Ln => "ln",
            UnaryOp::Round => "round",
            UnaryOp::Sin => "sin",
            UnaryOp::Sqrt => "sqrt",
            UnaryOp::Tan => "tan",
        }
    }

    /// Looks an operator up by name, case-insensitively.
    pub fn from_name(name: &str) -> Option<UnaryOp> {
        UnaryOp::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(name))
    }

    /// Applies the operator to its evaluated argument.
    pub fn apply(self, value: Number) -> Result<Number> {
        let v = value.as_f64();
        match self {
            UnaryOp::Abs => Ok(match value {
                // i64::MIN has no integer absolute value.
                Number::Int(i) => i
                    .checked_abs()
                    .map(Number::Int)
                    .unwrap_or(Number::Float((i as f64).abs())),
                Number::Float(f) => Number::Float(f.abs()),
            }),
            UnaryOp::Acos => {
                self.check_domain((-1.0..=1.0).contains(&v), value)?;
                Ok(Number::Float(to_deg(v.acos())))
            }
            UnaryOp::Asin => {
                self.check_domain((-1.0..=1.0).contains(&v), value)?;
                Ok(Number::Float(to_deg(v.asin())))
            }
            UnaryOp::Atan => Ok(Number::Float(to_deg(v.atan()))),
            UnaryOp::Cos => Ok(Number::Float(to_rad(v).cos())),
            UnaryOp::Sin => Ok(Number::Float(to_rad(v).sin())),
            UnaryOp::Tan => Ok(Number::Float(to_rad(v).tan())),
            UnaryOp::Exp => finite(v.exp(), "exp"),
            UnaryOp::Fix => Ok(match value {
                Number::Int(i) => Number::Int(i),
                Number::Float(f) => Number::Int(f.floor() as i64),
            }),
            UnaryOp::Fup => Ok(match value {
                Number::Int(i) => Number::Int(i),
                Number::Float(f) => Number::Int(f.ceil() as i64),
            }),
            UnaryOp::Round => Ok(match value {
                Number::Int(i) => Number::Int(i),
                // f64::round rounds halves away from zero, as required.
                Number::Float(f) => Number::Int(f.round() as i64),
            }),
            UnaryOp::Ln => {
                self.check_domain(v > 0.0, value)?;
                Ok(Number::Float(v.ln()))
            }
            UnaryOp::Sqrt => {
                self.check_domain(v >= 0.0, value)?;
                Ok(Number::Float(v.sqrt()))
            }
        }
    }

    fn check_domain(self, ok: bool, value: Number) -> Result<()> {
        if ok {
            Ok(())
        } else {
            Err(Error::Arithmetic(format!(
                "{}[{value}] has no real result",
                self.name()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(i: i64) -> Number {
        Number::Int(i)
    }

    fn assert_close(actual: Number, expected: f64) {
        let actual = actual.as_f64();
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_add_sub_mul_preserve_integers() {
        assert_eq!(BinOp::Add.apply(int(1), int(1)).unwrap(), int(2));
        assert_eq!(BinOp::Sub.apply(int(5), int(7)).unwrap(), int(-2));
        assert_eq!(BinOp::Mul.apply(int(-2), int(-5)).unwrap(), int(10));
        assert!(matches!(
            BinOp::Add.apply(int(1), Number::Float(1.0)).unwrap(),
            Number::Float(_)
        ));
    }

    #[test]
    fn test_division_is_always_float() {
        assert!(matches!(
            BinOp::Div.apply(int(4), int(2)).unwrap(),
            Number::Float(f) if f == 2.0
        ));
        assert_close(BinOp::Div.apply(int(1), int(8)).unwrap(), 0.125);
    }

    #[test]
    fn test_division_by_zero() {
        assert!(matches!(
            BinOp::Div.apply(int(1), int(0)),
            Err(Error::Arithmetic(_))
        ));
        assert!(matches!(
            BinOp::Div.apply(int(1), Number::Float(0.0)),
            Err(Error::Arithmetic(_))
        ));
    }

    #[test]
    fn test_truth_operators() {
        assert_eq!(BinOp::Or.apply(int(0), int(0)).unwrap(), int(0));
        assert_eq!(BinOp::Or.apply(int(100), int(1)).unwrap(), int(1));
        assert_eq!(BinOp::Or.apply(int(0), Number::Float(0.001)).unwrap(), int(1));
        assert_eq!(BinOp::And.apply(int(1), int(1)).unwrap(), int(1));
        assert_eq!(BinOp::And.apply(int(0), int(1)).unwrap(), int(0));
        assert_eq!(BinOp::Xor.apply(int(1), int(1)).unwrap(), int(0));
        assert_eq!(BinOp::Xor.apply(int(1), int(0)).unwrap(), int(1));
    }

    #[test]
    fn test_pow() {
        assert_eq!(BinOp::Pow.apply(int(-2), int(10)).unwrap(), int(1024));
        assert_eq!(BinOp::Pow.apply(int(0), int(0)).unwrap(), int(1));
        assert_close(BinOp::Pow.apply(int(2), int(-1)).unwrap(), 0.5);
        assert!(matches!(
            BinOp::Pow.apply(int(2), int(-1)).unwrap(),
            Number::Float(_)
        ));
        // Negative base with a fractional exponent has no real result.
        assert!(matches!(
            BinOp::Pow.apply(int(-1), Number::Float(0.5)),
            Err(Error::Arithmetic(_))
        ));
    }

    #[test]
    fn test_integer_overflow_is_an_error() {
        assert!(matches!(
            BinOp::Add.apply(int(i64::MAX), int(1)),
            Err(Error::Arithmetic(_))
        ));
        assert!(matches!(
            BinOp::Pow.apply(int(10), int(100)),
            Err(Error::Arithmetic(_))
        ));
    }

    #[test]
    fn test_trig_in_degrees() {
        assert_close(UnaryOp::Acos.apply(int(1)).unwrap(), 0.0);
        assert_close(UnaryOp::Asin.apply(int(1)).unwrap(), 90.0);
        assert_close(UnaryOp::Atan.apply(int(1)).unwrap(), 45.0);
        assert_close(UnaryOp::Cos.apply(int(60)).unwrap(), 0.5);
        assert_close(UnaryOp::Sin.apply(int(-90)).unwrap(), -1.0);
        assert_close(UnaryOp::Tan.apply(int(45)).unwrap(), 1.0);
    }

    #[test]
    fn test_rounding_family() {
        assert_eq!(UnaryOp::Fix.apply(Number::Float(-0.2)).unwrap(), int(-1));
        assert_eq!(UnaryOp::Fup.apply(Number::Float(-0.9)).unwrap(), int(0));
        assert_eq!(UnaryOp::Round.apply(Number::Float(5.49)).unwrap(), int(5));
        assert_eq!(UnaryOp::Round.apply(Number::Float(5.5)).unwrap(), int(6));
        assert_eq!(UnaryOp::Round.apply(Number::Float(-5.5)).unwrap(), int(-6));
        assert_eq!(UnaryOp::Fix.apply(int(3)).unwrap(), int(3));
    }

    #[test]
    fn test_exp_ln_sqrt() {
        assert_close(UnaryOp::Exp.apply(int(2)).unwrap(), std::f64::consts::E.powi(2));
        assert_close(UnaryOp::Ln.apply(int(5)).unwrap(), 5.0_f64.ln());
        assert_close(UnaryOp::Sqrt.apply(int(16)).unwrap(), 4.0);
    }

    #[test]
    fn test_unary_domain_errors() {
        assert!(matches!(UnaryOp::Ln.apply(int(0)), Err(Error::Arithmetic(_))));
        assert!(matches!(UnaryOp::Ln.apply(int(-1)), Err(Error::Arithmetic(_))));
        assert!(matches!(UnaryOp::Sqrt.apply(int(-4)), Err(Error::Arithmetic(_))));
        assert!(matches!(UnaryOp::Asin.apply(int(2)), Err(Error::Arithmetic(_))));
        assert!(matches!(UnaryOp::Acos.apply(int(-2)), Err(Error::Arithmetic(_))));
        assert!(matches!(UnaryOp::Exp.apply(int(1000)), Err(Error::Arithmetic(_))));
    }

    #[test]
    fn test_abs_preserves_tag() {
        assert_eq!(UnaryOp::Abs.apply(int(-1)).unwrap(), int(1));
        assert!(matches!(
            UnaryOp::Abs.apply(Number::Float(-2.5)).unwrap(),
            Number::Float(f) if f == 2.5
        ));
    }

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(UnaryOp::from_name("COS"), Some(UnaryOp::Cos));
        assert_eq!(UnaryOp::from_name("Round"), Some(UnaryOp::Round));
        assert_eq!(UnaryOp::from_name("banana"), None);
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn additive_identity(x in -1_000_000i64..1_000_000) {
            prop_assert_eq!(BinOp::Add.apply(int(x), int(0)).unwrap(), int(x));
        }

        #[test]
        fn multiplicative_identity(x in -1_000_000i64..1_000_000) {
            prop_assert_eq!(BinOp::Mul.apply(int(x), int(1)).unwrap(), int(x));
        }

        #[test]
        fn power_zero_is_one(x in -1_000_000i64..1_000_000) {
            prop_assert_eq!(BinOp::Pow.apply(int(x), int(0)).unwrap(), int(1));
        }

        #[test]
        fn logic_matches_truth_tables(a in -10i64..10, b in -10i64..10) {
            let (ta, tb) = (a != 0, b != 0);
            prop_assert_eq!(BinOp::And.apply(int(a), int(b)).unwrap(), truth(ta && tb));
            prop_assert_eq!(BinOp::Or.apply(int(a), int(b)).unwrap(), truth(ta || tb));
            prop_assert_eq!(BinOp::Xor.apply(int(a), int(b)).unwrap(), truth(ta ^ tb));
        }
    }
}
