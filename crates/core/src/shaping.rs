//! Question shaping: adjusting how a question is presented before it is asked.
//!
//! Shapers only change presentation. They receive a clone of the catalog's
//! question and must keep its validator and normalizer intact.

use std::collections::HashMap;

use leon::Template;

use crate::error::Result;
use crate::question::Question;

/// What a shaper knows about the parameter being resolved.
#[derive(Debug, Clone, Copy)]
pub struct ShapingContext<'a> {
    pub name: &'a str,
    pub required: bool,
    pub array_mode: bool,
}

/// Strategy injected into the resolver to adapt question rendering to the
/// environment.
pub trait QuestionShaper {
    /// # Errors
    ///
    /// Returns an error if the question text cannot be rendered.
    fn shape(&self, question: Question, context: &ShapingContext<'_>) -> Result<Question>;
}

/// Hint appended to array-mode questions.
pub const FINISH_HINT: &str = "(empty answer to finish)";

/// Renders `{name}` and `{default}` placeholders in a question text.
///
/// # Errors
///
/// Returns an error if the text is not a valid template or references an
/// unknown placeholder.
pub fn render_text(question: &Question, name: &str) -> Result<String> {
    let mut context: HashMap<String, String> = HashMap::new();
    context.insert("name".to_string(), name.to_string());
    context.insert(
        "default".to_string(),
        question
            .default_answer()
            .map(ToString::to_string)
            .unwrap_or_default(),
    );

    let template = Template::parse(question.text())?;
    Ok(template.render(&context)?)
}

/// Builds the single-line prompt used by [`PlainShaper`], without any
/// terminal styling.
///
/// # Errors
///
/// See [`render_text`].
pub fn plain_prompt(question: &Question, context: &ShapingContext<'_>) -> Result<String> {
    let mut prompt = render_text(question, context.name)?;

    if let Some(choices) = question.choices() {
        prompt.push_str(&format!(" ({})", choices.join("/")));
    }

    if let Some(default) = question.default_answer() {
        prompt.push_str(&format!(" [{default}]"));
    }

    if context.array_mode {
        prompt.push(' ');
        prompt.push_str(FINISH_HINT);
    }

    prompt.push_str(": ");
    Ok(prompt)
}

/// Shaper for terminals without styling support.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainShaper;

impl QuestionShaper for PlainShaper {
    fn shape(&self, mut question: Question, context: &ShapingContext<'_>) -> Result<Question> {
        let prompt = plain_prompt(&question, context)?;
        question.set_text(prompt);
        Ok(question)
    }
}
