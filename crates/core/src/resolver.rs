//! Resolution of parameter values from the option store, defaults, or the
//! user.
//!
//! [`ParameterResolver::resolve`] is the single entry point. A call either
//! fully resolves a value or fails; nothing is caught internally.
//!
//! 1. Look the parameter up in the catalog.
//! 2. Read the stored value.
//! 3. In a non-interactive session, fall back to the default when nothing was
//!    supplied.
//! 4. A provided value is validated, normalized and returned without
//!    prompting.
//! 5. Otherwise a required parameter fails when the session is
//!    non-interactive; an interactive session shapes the question, prompts
//!    once (scalar) or until an empty answer (array mode), and the result is
//!    written back to the store.

use std::collections::HashSet;

use indexmap::IndexMap;
use log::{debug, info};

use crate::catalog::ParameterCatalog;
use crate::definitions::ParameterDefinition;
use crate::error::Error::{MissingRequiredValue, UnknownParameter};
use crate::error::{Error, Result};
use crate::prompter::Prompter;
use crate::question::{Question, Validator};
use crate::shaping::{QuestionShaper, ShapingContext};
use crate::store::OptionStore;
use crate::value::{is_blank, Value};

/// Wraps a validator so that null and `""` answers are accepted as they are
/// and only other answers reach the original.
fn pass_blank_through(validator: Option<Validator>) -> Option<Validator> {
    let original = validator?;
    let wrapped: Validator = std::rc::Rc::new(move |answer: Option<Value>| {
        if is_blank(answer.as_ref()) {
            return Ok(answer);
        }
        original(answer)
    });
    Some(wrapped)
}

/// Temporarily replaces the validator of a question. The validator the
/// question had when the override was created is put back on drop, whether
/// the exchanges succeeded or not.
struct ValidatorOverride<'q> {
    question: &'q mut Question,
    original: Option<Validator>,
}

impl<'q> ValidatorOverride<'q> {
    fn new(question: &'q mut Question) -> Self {
        let original = question.validator();
        Self { question, original }
    }

    fn original(&self) -> Option<Validator> {
        self.original.clone()
    }

    fn install(&mut self, validator: Option<Validator>) {
        self.question.set_validator(validator);
    }

    fn question(&self) -> &Question {
        self.question
    }
}

impl Drop for ValidatorOverride<'_> {
    fn drop(&mut self) {
        self.question.set_validator(self.original.take());
    }
}

fn is_provided(definition: &ParameterDefinition, value: Option<&Value>) -> bool {
    match value {
        None => false,
        Some(Value::List(items)) if definition.array_mode => !items.is_empty(),
        Some(_) => true,
    }
}

/// Produces the final value of catalog parameters for one session.
pub struct ParameterResolver<S, P> {
    store: S,
    catalog: ParameterCatalog,
    prompter: P,
    shaper: Box<dyn QuestionShaper>,
    settled: HashSet<String>,
}

impl<S: OptionStore, P: Prompter> ParameterResolver<S, P> {
    pub fn new(
        store: S,
        catalog: ParameterCatalog,
        prompter: P,
        shaper: Box<dyn QuestionShaper>,
    ) -> Self {
        Self {
            store,
            catalog,
            prompter,
            shaper,
            settled: HashSet::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn catalog(&self) -> &ParameterCatalog {
        &self.catalog
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Resolves the value of the parameter `name`.
    ///
    /// Returns `None` for optional parameters left without a value, and for
    /// a scalar parameter whose prompt was answered with null (input closed,
    /// or an empty reply without a question default) when its validator
    /// accepts null. Unlike array mode, a required scalar parameter is not
    /// failed here; give it a validator such as
    /// [`checks::non_empty`](crate::checks::non_empty) to insist on a value.
    /// Array-mode parameters always resolve to a [`Value::List`].
    ///
    /// The question is only shaped when prompting, so a supplied value or a
    /// default resolves even if the question text cannot be rendered.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownParameter`] if `name` is not in the catalog.
    /// - [`Error::MissingRequiredValue`] if a required parameter has no value
    ///   and cannot be prompted for, or if a required array-mode parameter
    ///   collected no answers.
    /// - [`Error::InvalidArrayValue`] if an array-mode parameter holds a
    ///   value that is not a list.
    /// - Any rejection raised by the parameter's validator or normalizer, or
    ///   by the prompter.
    pub fn resolve(&mut self, name: &str) -> Result<Option<Value>> {
        let definition = self
            .catalog
            .lookup(name)
            .ok_or_else(|| UnknownParameter(name.to_string()))?;

        let mut value = self.store.get(name);

        // Already answered interactively in this session; the stored value
        // went through the question's validator and normalizer back then.
        if self.settled.contains(name) {
            debug!("Parameter `{}` already settled this session", name);
            return Ok(value);
        }

        let interactive = self.store.is_interactive();

        if !is_provided(definition, value.as_ref()) && !interactive {
            debug!("Using default for `{}`: {:?}", name, definition.default);
            value.clone_from(&definition.default);
        }

        if let Some(provided) = value.filter(|v| is_provided(definition, Some(v))) {
            validate_value(&provided, definition, &definition.question)?;
            return normalize_value(provided, definition, &definition.question).map(Some);
        }

        if !interactive {
            if definition.required {
                return Err(MissingRequiredValue(name.to_string()));
            }

            debug!("Optional parameter `{}` left without a value", name);
            return Ok(definition.array_mode.then(|| Value::List(Vec::new())));
        }

        info!("Prompting for `{}`", name);

        // An empty reply has to end the loop in array mode
        let mut question = definition.question.clone();
        if definition.array_mode {
            question.set_default(None);
        }

        let context = ShapingContext {
            name,
            required: definition.required,
            array_mode: definition.array_mode,
        };
        let mut question = self.shaper.shape(question, &context)?;

        let resolved = {
            let mut validator_override = ValidatorOverride::new(&mut question);
            if !definition.required {
                let skip = pass_blank_through(validator_override.original());
                validator_override.install(skip);
            }

            if definition.array_mode {
                Some(collect_answers(
                    &mut self.prompter,
                    &mut validator_override,
                    definition,
                )?)
            } else {
                self.prompter.ask(validator_override.question())?
            }
        };

        info!("Storing resolved value for `{}`", name);
        self.store.set(name, resolved.clone());
        self.settled.insert(name.to_string());

        Ok(resolved)
    }

    /// Resolves several parameters in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// See [`ParameterResolver::resolve`].
    pub fn resolve_all<'a>(
        &mut self,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Result<IndexMap<String, Option<Value>>> {
        let mut resolved = IndexMap::new();
        for name in names {
            let value = self.resolve(name)?;
            resolved.insert(name.to_string(), value);
        }
        Ok(resolved)
    }
}

/// Prompts until an empty answer, collecting every other answer.
///
/// The first exchange of a required parameter runs under the original
/// validator, so it may reject an empty first answer. From then on empty
/// answers bypass the validator and only end the loop.
fn collect_answers<P: Prompter>(
    prompter: &mut P,
    validator_override: &mut ValidatorOverride<'_>,
    definition: &ParameterDefinition,
) -> Result<Value> {
    let active = validator_override.question().validator();
    let mut values: Vec<Value> = Vec::new();
    let mut first = true;

    loop {
        let answer = prompter.ask(validator_override.question())?;

        if first && definition.required {
            validator_override.install(pass_blank_through(active.clone()));
        }
        first = false;

        match answer {
            Some(value) if !value.is_empty_string() => {
                debug!(
                    "Collected answer {} for `{}`",
                    values.len() + 1,
                    definition.name
                );
                values.push(value);
            }
            _ => break,
        }
    }

    if definition.required && values.is_empty() {
        return Err(MissingRequiredValue(definition.name.clone()));
    }

    Ok(Value::List(values))
}

fn validate_value(
    value: &Value,
    definition: &ParameterDefinition,
    question: &Question,
) -> Result<()> {
    if definition.array_mode && !value.is_list() {
        return Err(Error::invalid_array_value(
            &definition.name,
            value.type_name(),
        ));
    }

    let Some(validator) = question.validator() else {
        return Ok(());
    };

    let Value::List(items) = value else {
        validator(Some(value.clone()))?;
        return Ok(());
    };

    if !definition.array_mode {
        validator(Some(value.clone()))?;
        return Ok(());
    }

    for item in items {
        validator(Some(item.clone()))?;
    }

    Ok(())
}

fn normalize_value(
    value: Value,
    definition: &ParameterDefinition,
    question: &Question,
) -> Result<Value> {
    let Some(normalizer) = question.normalizer() else {
        return Ok(value);
    };

    match value {
        Value::List(items) => items
            .into_iter()
            .map(|item| normalizer(item))
            .collect::<Result<Vec<_>>>()
            .map(Value::List),
        other if !definition.array_mode => normalizer(other),
        other => Err(Error::invalid_array_value(
            &definition.name,
            other.type_name(),
        )),
    }
}
