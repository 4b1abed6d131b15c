//! The numeric value domain.
//!
//! G-code arithmetic distinguishes exact integers from floating-point
//! numbers. Integer-closed operations on two integers yield an integer;
//! division and the transcendental functions yield floats. The tag also
//! drives word-table lookup: `G38.2` renders with its decimals while
//! `G0` renders without, so the two must stay distinguishable.

use std::fmt;

/// An exact integer or a floating-point number.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// The value as a float, promoting integers.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// The value as an integer index, if it has no fractional part.
    ///
    /// `Float(3.0)` converts to `Some(3)`; `Float(3.5)` is `None`.
    pub fn as_integer(self) -> Option<i64> {
        match self {
            Number::Int(i) => Some(i),
            Number::Float(f) if f.fract() == 0.0 && f.is_finite() => Some(f as i64),
            Number::Float(_) => None,
        }
    }

    /// True if the value is nonzero. `0.001` counts as true.
    pub fn is_truthy(self) -> bool {
        self.as_f64() != 0.0
    }

    /// Arithmetic negation, preserving the integer tag.
    pub fn negate(self) -> Number {
        match self {
            // i64::MIN has no integer negation; fall back to the float.
            Number::Int(i) => i
                .checked_neg()
                .map(Number::Int)
                .unwrap_or(Number::Float(-(i as f64))),
            Number::Float(f) => Number::Float(-f),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// Cross-tag equality by value: `Int(1) == Float(1.0)`.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            (Number::Int(a), Number::Float(b)) | (Number::Float(b), Number::Int(a)) => {
                *a as f64 == *b
            }
        }
    }
}

/// Integers render without a decimal point; fractionless floats keep a
/// trailing `.0` so they never collide with integer word-table keys.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(x) if x.fract() == 0.0 && x.is_finite() => write!(f, "{x:.1}"),
            Number::Float(x) => write!(f, "{x}"),
        }
    }
}
