//! Scalar codec: value tokens to `ScalarValue` and back.
//!
//! The codec is driven by an explicit [`ScalarKind`] tag rather than by the target
//! container's element type, so the same parsing rules apply whatever the element
//! type ends up being. Conversion into the element type happens afterwards through
//! [`MarketScalar`](crate::core::traits::MarketScalar).
//!
//! Numeric parsing is strict: the whole token must be consumed. Formatting follows
//! the C `%g` convention with a caller-chosen number of significant digits, always
//! with `.` as decimal point and no digit grouping.

use std::str::FromStr;

use crate::error::MmError;
use crate::format::ScalarKind;

/// A decoded entry value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarValue {
    Pattern,
    Integer(i64),
    Real(f64),
    Complex(f64, f64),
}

impl ScalarValue {
    pub fn kind(&self) -> ScalarKind {
        match self {
            ScalarValue::Pattern => ScalarKind::Pattern,
            ScalarValue::Integer(_) => ScalarKind::Integer,
            ScalarValue::Real(_) => ScalarKind::Real,
            ScalarValue::Complex(..) => ScalarKind::Complex,
        }
    }
}

fn parse_integer(token: &str) -> Result<i64, MmError> {
    token
        .parse::<i64>()
        .map_err(|_| MmError::format(format!("invalid integer value '{token}'")))
}

/// Parse one real token directly into `F`, so `f32` targets are rounded once.
pub fn parse_real<F: FromStr>(token: &str) -> Result<F, MmError> {
    token
        .parse::<F>()
        .map_err(|_| MmError::format(format!("invalid real value '{token}'")))
}

/// Ensure an entry carries exactly the value tokens `kind` requires.
pub fn check_token_count(tokens: &[&str], kind: ScalarKind) -> Result<(), MmError> {
    if tokens.len() != kind.token_count() {
        return Err(MmError::format(format!(
            "expected {} value token(s) for {kind} entry, found {}",
            kind.token_count(),
            tokens.len()
        )));
    }
    Ok(())
}

/// Decode the value tokens of one entry according to `kind`.
pub fn parse_scalar(tokens: &[&str], kind: ScalarKind) -> Result<ScalarValue, MmError> {
    check_token_count(tokens, kind)?;
    match kind {
        ScalarKind::Pattern => Ok(ScalarValue::Pattern),
        ScalarKind::Integer => parse_integer(tokens[0]).map(ScalarValue::Integer),
        ScalarKind::Real => parse_real(tokens[0]).map(ScalarValue::Real),
        ScalarKind::Complex => Ok(ScalarValue::Complex(
            parse_real(tokens[0])?,
            parse_real(tokens[1])?,
        )),
    }
}

/// Encode a value as its wire tokens. Pattern values produce no tokens.
pub fn format_scalar(value: ScalarValue, precision: usize) -> Vec<String> {
    match value {
        ScalarValue::Pattern => Vec::new(),
        ScalarValue::Integer(i) => vec![i.to_string()],
        ScalarValue::Real(x) => vec![format_real(x, precision)],
        ScalarValue::Complex(re, im) => vec![format_real(re, precision), format_real(im, precision)],
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// `%g`-style rendering of `x` with `precision` significant digits.
pub fn format_real(x: f64, precision: usize) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0".to_string() } else { "0".to_string() };
    }

    let p = precision.max(1);
    let sci = format!("{:.*e}", p - 1, x);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = match exp.parse() {
        Ok(e) => e,
        Err(_) => return sci,
    };

    if exp < -5 || exp >= p as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.unsigned_abs())
    } else {
        let decimals = (p as i32 - 1 - exp) as usize;
        trim_fraction(&format!("{x:.decimals$}")).to_string()
    }
}
