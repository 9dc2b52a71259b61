//! Printing of resolved parameter values.

use indexmap::IndexMap;
use itertools::Itertools;
use rust_params_core::error::{Error, Result};
use rust_params_core::value::Value;

pub type Resolved = IndexMap<String, Option<Value>>;

fn format_value(value: &Value) -> String {
    match value {
        Value::List(items) => items.iter().join(","),
        other => other.to_string(),
    }
}

/// One `name=value` line per parameter; list items are comma separated and
/// unset parameters print an empty value.
#[must_use]
pub fn format_lines(resolved: &Resolved) -> String {
    resolved
        .iter()
        .map(|(name, value)| {
            let value = value.as_ref().map(format_value).unwrap_or_default();
            format!("{name}={value}\n")
        })
        .collect()
}

/// # Errors
///
/// Returns an error if the values cannot be serialized.
pub fn format_yaml(resolved: &Resolved) -> Result<String> {
    serde_yaml::to_string(resolved).map_err(|e| {
        Error::yaml_error(
            "writing".to_string(),
            "resolved parameters".to_string(),
            "<stdout>".to_string(),
            e,
        )
    })
}
