//! Built-in validators and normalizers.
//!
//! Each function returns a closure that can be handed to
//! [`Question::with_validator`](crate::question::Question::with_validator) or
//! [`Question::with_normalizer`](crate::question::Question::with_normalizer).
//! Normalizers accept values that are already normalized, so running one
//! twice gives the same result.

use crate::error::{Error, Result};
use crate::value::Value;

fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_lowercase().as_str() {
        "y" | "yes" | "true" | "1" | "on" => Some(true),
        "n" | "no" | "false" | "0" | "off" => Some(false),
        _ => None,
    }
}

fn parse_finite(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|f| f.is_finite())
}

fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Integer(_) => true,
        Value::Float(f) => f.is_finite(),
        Value::String(s) => parse_finite(s).is_some(),
        _ => false,
    }
}

/// Whole floats that fit in an `i64`. `i64::MAX as f64` rounds up to 2^63,
/// hence the open upper bound.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn whole_float(f: f64) -> Option<i64> {
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.fract() == 0.0 && in_range).then_some(f as i64)
}

/// Accepts integers, finite floats and strings that parse as one.
pub fn numeric() -> impl Fn(Option<Value>) -> Result<Option<Value>> {
    |answer| match &answer {
        Some(value) if is_numeric(value) => Ok(answer),
        Some(value) => Err(Error::rejected(format!(
            "A numeric value is required, got \"{value}\""
        ))),
        None => Err(Error::rejected("A numeric value is required")),
    }
}

/// Rejects null, whitespace-only strings and empty lists.
pub fn non_empty() -> impl Fn(Option<Value>) -> Result<Option<Value>> {
    |answer| {
        let empty = match &answer {
            None => true,
            Some(Value::String(s)) => s.trim().is_empty(),
            Some(Value::List(items)) => items.is_empty(),
            Some(_) => false,
        };

        if empty {
            Err(Error::rejected("A value is required"))
        } else {
            Ok(answer)
        }
    }
}

/// Accepts booleans and yes/no style strings.
pub fn boolean() -> impl Fn(Option<Value>) -> Result<Option<Value>> {
    |answer| match &answer {
        Some(Value::Bool(_)) => Ok(answer),
        Some(Value::String(s)) if parse_bool(s).is_some() => Ok(answer),
        _ => Err(Error::rejected("Please answer yes or no")),
    }
}

/// Accepts only values whose text form is one of `choices`.
pub fn one_of(choices: Vec<String>) -> impl Fn(Option<Value>) -> Result<Option<Value>> {
    move |answer| {
        let text = answer.as_ref().map(ToString::to_string).unwrap_or_default();
        if choices.iter().any(|choice| *choice == text) {
            Ok(answer)
        } else {
            Err(Error::rejected(format!(
                "Value \"{text}\" is invalid; expected one of: {}",
                choices.join(", ")
            )))
        }
    }
}

/// Converts numeric strings and integral floats into [`Value::Integer`].
pub fn to_integer() -> impl Fn(Value) -> Result<Value> {
    |value| match value {
        Value::Integer(_) => Ok(value),
        Value::Float(f) => whole_float(f)
            .map(Value::Integer)
            .ok_or_else(|| Error::rejected(format!("Cannot convert {f} to an integer"))),
        Value::String(ref s) => {
            let trimmed = s.trim();
            if let Ok(i) = trimmed.parse::<i64>() {
                return Ok(Value::Integer(i));
            }
            parse_finite(trimmed)
                .and_then(whole_float)
                .map(Value::Integer)
                .ok_or_else(|| Error::rejected(format!("Cannot convert \"{s}\" to an integer")))
        }
        other => Err(Error::rejected(format!(
            "Cannot convert a {} to an integer",
            other.type_name()
        ))),
    }
}

/// Converts integers and numeric strings into [`Value::Float`].
pub fn to_float() -> impl Fn(Value) -> Result<Value> {
    |value| match value {
        Value::Float(_) => Ok(value),
        Value::Integer(i) => Ok(Value::Float(i as f64)),
        Value::String(ref s) => parse_finite(s)
            .map(Value::Float)
            .ok_or_else(|| Error::rejected(format!("Cannot convert \"{s}\" to a number"))),
        other => Err(Error::rejected(format!(
            "Cannot convert a {} to a number",
            other.type_name()
        ))),
    }
}

/// Converts yes/no style strings into [`Value::Bool`].
pub fn to_boolean() -> impl Fn(Value) -> Result<Value> {
    |value| match value {
        Value::Bool(_) => Ok(value),
        Value::Integer(i) => Ok(Value::Bool(i != 0)),
        Value::String(ref s) => parse_bool(s)
            .map(Value::Bool)
            .ok_or_else(|| Error::rejected(format!("Cannot convert \"{s}\" to a boolean"))),
        other => Err(Error::rejected(format!(
            "Cannot convert a {} to a boolean",
            other.type_name()
        ))),
    }
}

fn map_string(value: Value, f: impl Fn(&str) -> String) -> Value {
    match value {
        Value::String(s) => Value::String(f(&s)),
        other => other,
    }
}

pub fn trim() -> impl Fn(Value) -> Result<Value> {
    |value| Ok(map_string(value, |s| s.trim().to_string()))
}

pub fn lowercase() -> impl Fn(Value) -> Result<Value> {
    |value| Ok(map_string(value, str::to_lowercase))
}

pub fn uppercase() -> impl Fn(Value) -> Result<Value> {
    |value| Ok(map_string(value, str::to_uppercase))
}

/// Expands a leading `~` to the home directory.
pub fn expand_path() -> impl Fn(Value) -> Result<Value> {
    |value| Ok(map_string(value, |s| shellexpand::tilde(s).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric() {
        let validate = numeric();
        assert!(validate(Some(Value::from("42"))).is_ok());
        assert!(validate(Some(Value::from(" 4.5 "))).is_ok());
        assert!(validate(Some(Value::Integer(7))).is_ok());
        assert!(validate(Some(Value::from("x"))).is_err());
        assert!(validate(None).is_err());
    }

    #[test]
    fn test_numeric_rejects_non_finite() {
        let validate = numeric();
        assert!(validate(Some(Value::from("NaN"))).is_err());
        assert!(validate(Some(Value::from("inf"))).is_err());
        assert!(validate(Some(Value::from("-infinity"))).is_err());
        assert!(validate(Some(Value::Float(f64::NAN))).is_err());
        assert!(validate(Some(Value::from("1e300"))).is_ok());
    }

    #[test]
    fn test_non_empty() {
        let validate = non_empty();
        assert!(validate(Some(Value::from("a"))).is_ok());
        assert!(validate(Some(Value::from("  "))).is_err());
        assert!(validate(Some(Value::List(vec![]))).is_err());
        assert!(validate(None).is_err());
    }

    #[test]
    fn test_boolean() {
        let validate = boolean();
        assert!(validate(Some(Value::from("Yes"))).is_ok());
        assert!(validate(Some(Value::Bool(false))).is_ok());
        assert!(validate(Some(Value::from("maybe"))).is_err());
    }

    #[test]
    fn test_one_of() {
        let validate = one_of(vec!["dev".to_string(), "prod".to_string()]);
        assert_eq!(
            validate(Some(Value::from("dev"))).unwrap(),
            Some(Value::from("dev"))
        );
        let error = validate(Some(Value::from("qa"))).unwrap_err();
        assert!(error.to_string().contains("dev, prod"));
    }

    #[test]
    fn test_to_integer() {
        let normalize = to_integer();
        assert_eq!(normalize(Value::from("42")).unwrap(), Value::Integer(42));
        assert_eq!(normalize(Value::from(" 8.0")).unwrap(), Value::Integer(8));
        assert_eq!(normalize(Value::Integer(3)).unwrap(), Value::Integer(3));
        assert!(normalize(Value::from("4.5")).is_err());
        assert!(normalize(Value::Bool(true)).is_err());
    }

    #[test]
    fn test_to_integer_rejects_out_of_range() {
        let normalize = to_integer();
        assert!(normalize(Value::from("1e300")).is_err());
        assert!(normalize(Value::from("-1e19")).is_err());
        assert!(normalize(Value::from("NaN")).is_err());
        assert!(normalize(Value::Float(1e300)).is_err());
        assert!(normalize(Value::Float(f64::INFINITY)).is_err());
        assert_eq!(normalize(Value::from("1e3")).unwrap(), Value::Integer(1000));
        assert_eq!(
            normalize(Value::from("9223372036854775807")).unwrap(),
            Value::Integer(i64::MAX)
        );
    }

    #[test]
    fn test_to_float_and_boolean() {
        assert_eq!(to_float()(Value::Integer(2)).unwrap(), Value::Float(2.0));
        assert_eq!(to_float()(Value::from("0.5")).unwrap(), Value::Float(0.5));
        assert_eq!(to_boolean()(Value::from("no")).unwrap(), Value::Bool(false));
        assert_eq!(to_boolean()(Value::Bool(true)).unwrap(), Value::Bool(true));
    }

    #[test]
    fn test_string_normalizers() {
        assert_eq!(trim()(Value::from("  a ")).unwrap(), Value::from("a"));
        assert_eq!(lowercase()(Value::from("AbC")).unwrap(), Value::from("abc"));
        assert_eq!(uppercase()(Value::from("AbC")).unwrap(), Value::from("ABC"));
        assert_eq!(uppercase()(Value::Integer(1)).unwrap(), Value::Integer(1));
    }

    #[test]
    fn test_expand_path() {
        let expanded = expand_path()(Value::from("~/projects")).unwrap();
        let text = expanded.as_str().unwrap();
        assert!(!text.starts_with('~'));
        assert!(text.ends_with("projects"));
    }
}
