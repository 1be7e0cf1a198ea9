//! `MarketScalar` bindings for the primitive and complex element types.
//!
//! Conversions accepted when reading:
//! - integer entries into real and complex types,
//! - real entries into complex types (zero imaginary part),
//! - pattern entries into any type, stored as one.
//!
//! Real entries into integer types, complex entries into real types and integers
//! outside the target range are rejected.

use num_complex::Complex;

use crate::core::traits::MarketScalar;
use crate::error::MmError;
use crate::format::{check_token_count, parse_real, parse_scalar, ScalarKind, ScalarValue};

macro_rules! impl_real_scalar {
    ($t:ty, $precision:expr) => {
        impl MarketScalar for $t {
            const KIND: ScalarKind = ScalarKind::Real;
            const PRECISION: usize = $precision;

            fn from_value(value: ScalarValue) -> Option<Self> {
                match value {
                    ScalarValue::Pattern => Some(1.0),
                    ScalarValue::Integer(i) => Some(i as $t),
                    ScalarValue::Real(x) => Some(x as $t),
                    ScalarValue::Complex(..) => None,
                }
            }

            fn from_tokens(tokens: &[&str], kind: ScalarKind) -> Result<Option<Self>, MmError> {
                match kind {
                    ScalarKind::Real => {
                        check_token_count(tokens, kind)?;
                        parse_real::<$t>(tokens[0]).map(Some)
                    }
                    _ => parse_scalar(tokens, kind).map(Self::from_value),
                }
            }

            fn to_value(self) -> ScalarValue {
                ScalarValue::Real(self as f64)
            }
        }
    };
}

macro_rules! impl_integer_scalar {
    ($t:ty) => {
        impl MarketScalar for $t {
            const KIND: ScalarKind = ScalarKind::Integer;
            const PRECISION: usize = 0;

            fn from_value(value: ScalarValue) -> Option<Self> {
                match value {
                    ScalarValue::Pattern => Some(1),
                    ScalarValue::Integer(i) => <$t>::try_from(i).ok(),
                    ScalarValue::Real(_) | ScalarValue::Complex(..) => None,
                }
            }

            fn to_value(self) -> ScalarValue {
                ScalarValue::Integer(self as i64)
            }
        }
    };
}

macro_rules! impl_complex_scalar {
    ($t:ty, $precision:expr) => {
        impl MarketScalar for Complex<$t> {
            const KIND: ScalarKind = ScalarKind::Complex;
            const PRECISION: usize = $precision;

            fn from_value(value: ScalarValue) -> Option<Self> {
                match value {
                    ScalarValue::Pattern => Some(Complex::new(1.0, 0.0)),
                    ScalarValue::Integer(i) => Some(Complex::new(i as $t, 0.0)),
                    ScalarValue::Real(x) => Some(Complex::new(x as $t, 0.0)),
                    ScalarValue::Complex(re, im) => Some(Complex::new(re as $t, im as $t)),
                }
            }

            fn from_tokens(tokens: &[&str], kind: ScalarKind) -> Result<Option<Self>, MmError> {
                check_token_count(tokens, kind)?;
                match kind {
                    ScalarKind::Real => Ok(Some(Complex::new(parse_real::<$t>(tokens[0])?, 0.0))),
                    ScalarKind::Complex => Ok(Some(Complex::new(
                        parse_real::<$t>(tokens[0])?,
                        parse_real::<$t>(tokens[1])?,
                    ))),
                    _ => parse_scalar(tokens, kind).map(Self::from_value),
                }
            }

            fn to_value(self) -> ScalarValue {
                ScalarValue::Complex(self.re as f64, self.im as f64)
            }
        }
    };
}

// f64 needs 17 significant digits to round-trip, f32 needs 9.
impl_real_scalar!(f64, 17);
impl_real_scalar!(f32, 9);
impl_integer_scalar!(i64);
impl_integer_scalar!(i32);
impl_complex_scalar!(f64, 17);
impl_complex_scalar!(f32, 9);
