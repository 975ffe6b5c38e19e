//! Numeric model for canonical encoding
//!
//! Numbers keep the integer/float split of the conversion boundary so that
//! large integers are never rounded through `f64`. Equality is numeric:
//! `Int(3)`, `UInt(3)`, and `Float(3.0)` are the same number. The two
//! exceptions come from the canonical-text contract: negative zero is
//! distinct from positive zero, and NaN is equal to itself.

use std::fmt::{self, Display, Formatter};

/// A number as classified at the conversion boundary.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// Signed integer, exact.
    Int(i64),
    /// Unsigned integer above `i64::MAX`, exact.
    UInt(u64),
    /// Double-precision float, including NaN, the infinities, and `-0.0`.
    Float(f64),
}

impl Number {
    /// Returns `true` for a float zero with the sign bit set.
    ///
    /// ```
    /// use canonize_core::Number;
    ///
    /// assert!(Number::Float(-0.0).is_negative_zero());
    /// assert!(!Number::Float(0.0).is_negative_zero());
    /// assert!(!Number::Int(0).is_negative_zero());
    /// ```
    pub fn is_negative_zero(&self) -> bool {
        matches!(self, Number::Float(x) if *x == 0.0 && x.is_sign_negative())
    }

    /// Classify a `serde_json` number, preferring the exact integer arms.
    pub(crate) fn from_json(n: &serde_json::Number) -> Self {
        if let Some(i) = n.as_i64() {
            Number::Int(i)
        } else if let Some(u) = n.as_u64() {
            Number::UInt(u)
        } else {
            Number::Float(n.as_f64().unwrap_or(f64::NAN))
        }
    }
}

/// Canonical text of a number.
///
/// Negative zero renders as `-0`, NaN as `NaN`, the infinities as
/// `Infinity`/`-Infinity`. Finite values use the shortest decimal form
/// that round-trips, so `3.0` renders as `3`, same as the integer.
impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::UInt(u) => write!(f, "{u}"),
            Number::Float(x) => {
                if *x == 0.0 && x.is_sign_negative() {
                    f.write_str("-0")
                } else if x.is_nan() {
                    f.write_str("NaN")
                } else if x.is_infinite() {
                    f.write_str(if *x > 0.0 { "Infinity" } else { "-Infinity" })
                } else {
                    write!(f, "{x}")
                }
            }
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::UInt(a), Number::UInt(b)) => a == b,
            (Number::Int(a), Number::UInt(b)) | (Number::UInt(b), Number::Int(a)) => {
                a >= 0 && a as u64 == b
            }
            (Number::Float(a), Number::Float(b)) => {
                if a.is_nan() {
                    b.is_nan()
                } else {
                    a == b && a.is_sign_negative() == b.is_sign_negative()
                }
            }
            (Number::Float(f), Number::Int(i)) | (Number::Int(i), Number::Float(f)) => {
                float_eq_exact_int(f, i as i128)
            }
            (Number::Float(f), Number::UInt(u)) | (Number::UInt(u), Number::Float(f)) => {
                float_eq_exact_int(f, u as i128)
            }
        }
    }
}

/// Exact comparison of a float against an integer.
///
/// An integral `f64` inside the `[-2^63, 2^64)` window converts to `i128`
/// without rounding, so the comparison never conflates neighbouring
/// integers the way `i as f64 == f` would. `-0.0` is not equal to zero.
fn float_eq_exact_int(f: f64, n: i128) -> bool {
    if !f.is_finite() || f.fract() != 0.0 {
        return false;
    }
    if f == 0.0 && f.is_sign_negative() {
        return false;
    }
    if f < -(2f64.powi(63)) || f >= 2f64.powi(64) {
        return false;
    }
    f as i128 == n
}

impl From<i64> for Number {
    fn from(i: i64) -> Self {
        Number::Int(i)
    }
}

impl From<u64> for Number {
    fn from(u: u64) -> Self {
        Number::UInt(u)
    }
}

impl From<f64> for Number {
    fn from(x: f64) -> Self {
        Number::Float(x)
    }
}
