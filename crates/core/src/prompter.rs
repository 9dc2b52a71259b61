//! The interactive side of resolution.

use std::collections::VecDeque;

use log::debug;

use crate::error::Result;
use crate::question::Question;
use crate::value::Value;

/// Performs one blocking question/answer exchange.
///
/// Implementations pass the raw answer through
/// [`Question::process_answer`], so the returned value has already been
/// validated and normalized. A rejection is returned as an error; whether to
/// re-ask first is up to the implementation.
pub trait Prompter {
    /// # Errors
    ///
    /// Returns the question's rejection, or an I/O failure.
    fn ask(&mut self, question: &Question) -> Result<Option<Value>>;
}

/// Replays a fixed sequence of raw answers.
///
/// Useful for tests and for driving resolution from a recorded session. Once
/// the script is exhausted every further exchange answers null.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Option<Value>>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Option<Value>>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Script made of string answers only.
    pub fn from_strings<'a>(answers: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(answers.into_iter().map(|a| Some(Value::from(a))))
    }

    /// Number of exchanges performed so far.
    #[must_use]
    pub fn exchanges(&self) -> usize {
        self.asked.len()
    }

    /// Text of every question asked, in order.
    #[must_use]
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &Question) -> Result<Option<Value>> {
        self.asked.push(question.text().to_string());
        let raw = self.answers.pop_front().flatten();
        debug!("Scripted answer {:?} for `{}`", raw, question.text());
        question.process_answer(raw)
    }
}
