//! Loading parameter catalogs from YAML files.

use std::fs::File;

use log::debug;

use crate::catalog::ParameterCatalog;
use crate::checks;
use crate::definitions::{NormalizerKind, ParameterDefinition, ParameterEntry, ValidatorKind};
use crate::error::{Error, Result};
use crate::question::Question;
use crate::shaping::render_text;

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

fn with_validator(question: Question, kind: ValidatorKind) -> Question {
    match kind {
        ValidatorKind::Numeric => question.with_validator(checks::numeric()),
        ValidatorKind::NonEmpty => question.with_validator(checks::non_empty()),
        ValidatorKind::Boolean => question.with_validator(checks::boolean()),
    }
}

fn with_normalizer(question: Question, kind: NormalizerKind) -> Question {
    match kind {
        NormalizerKind::Integer => question.with_normalizer(checks::to_integer()),
        NormalizerKind::Float => question.with_normalizer(checks::to_float()),
        NormalizerKind::Boolean => question.with_normalizer(checks::to_boolean()),
        NormalizerKind::Trim => question.with_normalizer(checks::trim()),
        NormalizerKind::Lowercase => question.with_normalizer(checks::lowercase()),
        NormalizerKind::Uppercase => question.with_normalizer(checks::uppercase()),
        NormalizerKind::Path => question.with_normalizer(checks::expand_path()),
    }
}

/// Turns one catalog file entry into a definition.
///
/// A `choices` list installs a `one_of` validator, which takes precedence
/// over `validate`. Scalar parameters also use their default as the answer
/// to an empty interactive reply.
///
/// # Errors
///
/// Returns [`Error::Parse`] if the question text is not a valid template,
/// or [`Error::Render`] if it uses a placeholder other than `{name}` and
/// `{default}`.
pub fn build_definition(entry: ParameterEntry) -> Result<ParameterDefinition> {
    let text = entry
        .question
        .unwrap_or_else(|| format!("Value for `{}`", entry.id));

    let mut question = Question::new(text);

    if let Some(choices) = entry.choices {
        question = question
            .with_choices(choices.clone())
            .with_validator(checks::one_of(choices));
    } else if let Some(kind) = entry.validate {
        question = with_validator(question, kind);
    }

    if let Some(kind) = entry.normalize {
        question = with_normalizer(question, kind);
    }

    if !entry.multiple {
        if let Some(default) = &entry.default {
            question = question.with_default(default.clone());
        }
    }

    // Placeholders other than `{name}` and `{default}` fail at load time
    render_text(&question, &entry.id)?;

    let mut definition = ParameterDefinition::new(entry.id, question)
        .required(entry.required)
        .multiple(entry.multiple);
    definition.default = entry.default;

    Ok(definition)
}

/// Reads the parameter catalog YAML at `path`.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The file contains invalid YAML or unknown validator/normalizer names
/// - The file defines no parameters
/// - A parameter ID is invalid or repeated
/// - A question text is not a valid template
pub fn get_parameter_catalog(path: &str) -> Result<ParameterCatalog> {
    let reader = get_reader("parameter catalog", path)?;

    let entries: Vec<ParameterEntry> = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "parameter catalog".to_string(),
            path.to_string(),
            e,
        )
    })?;

    if entries.is_empty() {
        return Err(Error::empty_catalog(path.to_string()));
    }

    debug!("Loaded {} parameter entries from `{}`", entries.len(), path);

    let definitions = entries
        .into_iter()
        .map(build_definition)
        .collect::<Result<Vec<_>>>()?;

    ParameterCatalog::from_definitions(definitions)
}
