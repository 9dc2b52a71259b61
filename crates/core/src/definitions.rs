use std::fmt::{Display, Formatter};

use serde::Deserialize;

use crate::question::Question;
use crate::value::Value;

/// Declarative description of a single parameter.
///
/// Definitions are built once, when the catalog is assembled, and are never
/// modified afterwards; the resolver works on clones of their questions.
#[derive(Debug, Clone)]
pub struct ParameterDefinition {
    pub name: String,
    pub question: Question,
    pub default: Option<Value>,
    pub required: bool,
    pub array_mode: bool,
}

impl ParameterDefinition {
    pub fn new(name: impl Into<String>, question: Question) -> Self {
        Self {
            name: name.into(),
            question,
            default: None,
            required: false,
            array_mode: false,
        }
    }

    #[must_use]
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Accept zero or more answers instead of exactly one.
    #[must_use]
    pub fn multiple(mut self, array_mode: bool) -> Self {
        self.array_mode = array_mode;
        self
    }
}

impl Display for ParameterDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "`{}`", self.name)?;

        if self.array_mode {
            formatter.write_str("[]")?;
        }

        if self.required {
            formatter.write_str(" (required)")?;
        }

        Ok(())
    }
}

/// Names of the built-in validators a catalog file may reference.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ValidatorKind {
    Numeric,
    NonEmpty,
    Boolean,
}

/// Names of the built-in normalizers a catalog file may reference.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NormalizerKind {
    Integer,
    Float,
    Boolean,
    Trim,
    Lowercase,
    Uppercase,
    Path,
}

/// One entry of a catalog YAML file.
#[derive(Deserialize, Debug, Clone)]
pub struct ParameterEntry {
    pub id: String,
    pub question: Option<String>,
    pub default: Option<Value>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub multiple: bool,
    pub choices: Option<Vec<String>>,
    pub validate: Option<ValidatorKind>,
    pub normalize: Option<NormalizerKind>,
}
