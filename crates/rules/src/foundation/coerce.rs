//! JavaScript-compatible value coercions
//!
//! The rules in this crate reproduce the behavior of validators written
//! against a dynamically typed host, so equality, ordering and
//! "is this string a number" follow the ECMAScript abstract operations
//! (`===`, the abstract relational comparison, `Number(string)`), applied
//! to JSON values.
//!
//! A field value is an `Option<&Value>`: `None` is an absent property
//! (`undefined`), `Some(Value::Null)` an explicit `null`.

use serde_json::Value;
use std::borrow::Cow;

// ============================================================================
// PRIMITIVES
// ============================================================================

/// Result of converting a field value to a primitive (`ToPrimitive`).
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive<'a> {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(Cow<'a, str>),
}

impl Primitive<'_> {
    /// `ToNumber` on an already primitive value.
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Primitive::Undefined => f64::NAN,
            Primitive::Null => 0.0,
            Primitive::Bool(b) => f64::from(u8::from(*b)),
            Primitive::Number(n) => *n,
            Primitive::String(s) => string_to_number(s),
        }
    }
}

/// Converts a field value to a primitive with the "number" hint.
///
/// Arrays become their elements joined with `,` and objects become
/// `"[object Object]"`, as the default `valueOf`/`toString` pair does.
#[must_use]
pub fn to_primitive(value: Option<&Value>) -> Primitive<'_> {
    match value {
        None => Primitive::Undefined,
        Some(Value::Null) => Primitive::Null,
        Some(Value::Bool(b)) => Primitive::Bool(*b),
        Some(Value::Number(n)) => Primitive::Number(n.as_f64().unwrap_or(f64::NAN)),
        Some(Value::String(s)) => Primitive::String(Cow::Borrowed(s)),
        Some(Value::Array(items)) => Primitive::String(Cow::Owned(join_array(items))),
        Some(Value::Object(_)) => Primitive::String(Cow::Borrowed("[object Object]")),
    }
}

/// `String(value)`: the text a field value renders as in messages.
#[must_use]
pub fn to_display_string(value: Option<&Value>) -> String {
    match to_primitive(value) {
        Primitive::Undefined => "undefined".to_owned(),
        Primitive::Null => "null".to_owned(),
        Primitive::Bool(b) => b.to_string(),
        Primitive::Number(n) => number_to_string(n),
        Primitive::String(s) => s.into_owned(),
    }
}

fn join_array(items: &[Value]) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        match item {
            Value::Null => {}
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => out.push_str(&number_to_string(n.as_f64().unwrap_or(f64::NAN))),
            Value::String(s) => out.push_str(s),
            Value::Array(inner) => out.push_str(&join_array(inner)),
            Value::Object(_) => out.push_str("[object Object]"),
        }
    }
    out
}

/// `Number::toString` for finite and non-finite doubles.
///
/// Uses exponent notation outside `[1e-6, 1e21)` like ECMAScript does.
#[must_use]
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_owned();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if n == 0.0 {
        return "0".to_owned();
    }
    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{n}");
    }
    let formatted = format!("{n:e}");
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => formatted,
    }
}

// ============================================================================
// EQUALITY AND ORDERING
// ============================================================================

/// Strict equality (`===`).
///
/// Arrays and objects are compared by identity in the host, and two
/// distinct properties never share one, so they are never equal here.
#[must_use]
pub fn strict_equals(left: Option<&Value>, right: Option<&Value>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(Value::Null), Some(Value::Null)) => true,
        (Some(Value::Bool(a)), Some(Value::Bool(b))) => a == b,
        (Some(Value::Number(a)), Some(Value::Number(b))) => {
            a.as_f64().unwrap_or(f64::NAN) == b.as_f64().unwrap_or(f64::NAN)
        }
        (Some(Value::String(a)), Some(Value::String(b))) => a == b,
        _ => false,
    }
}

/// Abstract relational comparison `left < right`.
///
/// Returns `None` for the "undefined" outcome (a NaN operand), which every
/// relational operator treats as `false`.
#[must_use]
pub fn less_than(left: Option<&Value>, right: Option<&Value>) -> Option<bool> {
    let px = to_primitive(left);
    let py = to_primitive(right);

    if let (Primitive::String(a), Primitive::String(b)) = (&px, &py) {
        return Some(a.encode_utf16().lt(b.encode_utf16()));
    }

    let nx = px.to_number();
    let ny = py.to_number();
    if nx.is_nan() || ny.is_nan() {
        None
    } else {
        Some(nx < ny)
    }
}

/// `left > right`
#[must_use]
pub fn greater_than(left: Option<&Value>, right: Option<&Value>) -> bool {
    less_than(right, left) == Some(true)
}

/// `left >= right`
#[must_use]
pub fn greater_than_or_equal(left: Option<&Value>, right: Option<&Value>) -> bool {
    less_than(left, right) == Some(false)
}

/// `left <= right`
#[must_use]
pub fn less_than_or_equal(left: Option<&Value>, right: Option<&Value>) -> bool {
    less_than(right, left) == Some(false)
}

// ============================================================================
// STRING TO NUMBER
// ============================================================================

/// `StrWhiteSpaceChar`: WhiteSpace plus LineTerminator.
#[must_use]
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{FEFF}'
            | '\u{000A}'
            | '\u{000D}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// `Number(string)`: NaN when the trimmed input is not a numeric literal.
///
/// Accepts an empty (or all-whitespace) string as `0`, signed decimals
/// with optional fraction and exponent, signed `Infinity`, and unsigned
/// `0x`/`0o`/`0b` integer literals.
#[must_use]
pub fn string_to_number(input: &str) -> f64 {
    let trimmed = input.trim_matches(is_js_whitespace);
    if trimmed.is_empty() {
        return 0.0;
    }

    if let Some(n) = parse_radix_literal(trimmed) {
        return n;
    }

    let (negative, body) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let magnitude = if body == "Infinity" {
        f64::INFINITY
    } else {
        match parse_decimal(body) {
            Some(n) => n,
            None => return f64::NAN,
        }
    };

    if negative { -magnitude } else { magnitude }
}

/// Whether `Number(input)` is not NaN.
#[must_use]
pub fn is_numeric_string(input: &str) -> bool {
    !string_to_number(input).is_nan()
}

fn parse_radix_literal(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &s[2..];
    let mut value = 0.0_f64;
    for c in digits.chars() {
        let d = c.to_digit(radix)?;
        value = value * f64::from(radix) + f64::from(d);
    }
    Some(value)
}

/// `StrUnsignedDecimalLiteral` without `Infinity`.
fn parse_decimal(body: &str) -> Option<f64> {
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(idx) => (&body[..idx], Some(&body[idx + 1..])),
        None => (body, None),
    };

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((i, f)) => (i, f),
        None => (mantissa, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit()) || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let exp = match exponent {
        None => "0",
        Some(e) => {
            let digits = e.strip_prefix(['+', '-']).unwrap_or(e);
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            e
        }
    };

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let frac_part = if frac_part.is_empty() { "0" } else { frac_part };
    format!("{int_part}.{frac_part}e{exp}").parse::<f64>().ok()
}

// ============================================================================
// TESTS
// ============================================================================
