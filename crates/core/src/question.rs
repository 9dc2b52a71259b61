//! Questions asked by a [`Prompter`](crate::prompter::Prompter).
//!
//! A question carries the prompt text together with the caller-supplied
//! validator and normalizer. Both are plain closures shared through `Rc`, so a
//! question can be cloned cheaply and a validator can be wrapped without
//! losing the original.

use std::fmt::{Debug, Formatter};
use std::rc::Rc;

use crate::error::Result;
use crate::value::Value;

/// Checks a raw answer. Receives `None` for a null answer and returns the
/// accepted answer, or [`Error::ValidationRejected`](crate::error::Error::ValidationRejected).
pub type Validator = Rc<dyn Fn(Option<Value>) -> Result<Option<Value>>>;

/// Converts an accepted, non-null answer into its final form.
pub type Normalizer = Rc<dyn Fn(Value) -> Result<Value>>;

#[derive(Clone, Default)]
pub struct Question {
    text: String,
    default: Option<Value>,
    choices: Option<Vec<String>>,
    validator: Option<Validator>,
    normalizer: Option<Normalizer>,
}

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Answer used by interactive prompters when the user enters nothing.
    ///
    /// The resolver drops it when asking for an array-mode parameter, where
    /// an empty reply ends the list.
    #[must_use]
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn set_default(&mut self, default: Option<Value>) {
        self.default = default;
    }

    #[must_use]
    pub fn with_choices(mut self, choices: Vec<String>) -> Self {
        self.choices = Some(choices);
        self
    }

    #[must_use]
    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(Option<Value>) -> Result<Option<Value>> + 'static,
    {
        self.validator = Some(Rc::new(validator));
        self
    }

    #[must_use]
    pub fn with_normalizer<F>(mut self, normalizer: F) -> Self
    where
        F: Fn(Value) -> Result<Value> + 'static,
    {
        self.normalizer = Some(Rc::new(normalizer));
        self
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    #[must_use]
    pub fn default_answer(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    #[must_use]
    pub fn choices(&self) -> Option<&[String]> {
        self.choices.as_deref()
    }

    #[must_use]
    pub fn validator(&self) -> Option<Validator> {
        self.validator.clone()
    }

    pub fn set_validator(&mut self, validator: Option<Validator>) {
        self.validator = validator;
    }

    #[must_use]
    pub fn normalizer(&self) -> Option<Normalizer> {
        self.normalizer.clone()
    }

    /// Runs the validator, if any, over a raw answer.
    ///
    /// # Errors
    ///
    /// Whatever the validator raises, unchanged.
    pub fn validate(&self, answer: Option<Value>) -> Result<Option<Value>> {
        match &self.validator {
            Some(validator) => validator(answer),
            None => Ok(answer),
        }
    }

    /// Runs the normalizer, if any, over a value.
    ///
    /// # Errors
    ///
    /// Whatever the normalizer raises, unchanged.
    pub fn normalize(&self, value: Value) -> Result<Value> {
        match &self.normalizer {
            Some(normalizer) => normalizer(value),
            None => Ok(value),
        }
    }

    /// Turns a raw answer into the value a prompter hands back: validate
    /// first, then normalize. Null and `""` answers skip normalization.
    ///
    /// # Errors
    ///
    /// Returns the validator's or normalizer's rejection.
    pub fn process_answer(&self, raw: Option<Value>) -> Result<Option<Value>> {
        match self.validate(raw)? {
            Some(value) if !value.is_empty_string() => Ok(Some(self.normalize(value)?)),
            other => Ok(other),
        }
    }
}

impl Debug for Question {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Question")
            .field("text", &self.text)
            .field("default", &self.default)
            .field("choices", &self.choices)
            .field("validator", &self.validator.is_some())
            .field("normalizer", &self.normalizer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn numeric_question() -> Question {
        Question::new("Port").with_validator(|answer| {
            let numeric = matches!(&answer, Some(Value::String(s)) if s.parse::<i64>().is_ok());
            if numeric {
                Ok(answer)
            } else {
                Err(Error::rejected("not a number"))
            }
        })
    }

    #[test]
    fn test_process_answer_validates_then_normalizes() {
        let question = numeric_question().with_normalizer(|value| match value {
            Value::String(s) => Ok(Value::Integer(s.parse().unwrap_or_default())),
            other => Ok(other),
        });

        let result = question.process_answer(Some(Value::from("42"))).unwrap();
        assert_eq!(result, Some(Value::Integer(42)));
    }

    #[test]
    fn test_process_answer_propagates_rejection() {
        let result = numeric_question().process_answer(Some(Value::from("x")));
        assert!(matches!(result, Err(Error::ValidationRejected(_))));
    }

    #[test]
    fn test_blank_answers_skip_normalizer() {
        let question = Question::new("Name")
            .with_normalizer(|_| Err(Error::rejected("normalizer should not run")));

        assert_eq!(question.process_answer(None).unwrap(), None);
        assert_eq!(
            question.process_answer(Some(Value::from(""))).unwrap(),
            Some(Value::from(""))
        );
    }

    #[test]
    fn test_clone_shares_validator() {
        let question = numeric_question();
        let copy = question.clone();
        assert!(Rc::ptr_eq(
            &question.validator().unwrap(),
            &copy.validator().unwrap()
        ));
    }

    #[test]
    fn test_debug_hides_closures() {
        let debug = format!("{:?}", numeric_question());
        assert!(debug.contains("validator: true"));
        assert!(debug.contains("normalizer: false"));
    }
}
