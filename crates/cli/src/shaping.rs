//! Terminal-aware question shaping.

use std::env;
use std::io::{stderr, IsTerminal};

use crossterm::style::Stylize;
use rust_params_core::error::Result;
use rust_params_core::question::Question;
use rust_params_core::shaping::{render_text, PlainShaper, QuestionShaper, ShapingContext, FINISH_HINT};

/// Shaper for colour-capable terminals: bold question text, a red marker on
/// required parameters, highlighted choices and default.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecoratedShaper;

impl QuestionShaper for DecoratedShaper {
    fn shape(&self, mut question: Question, context: &ShapingContext<'_>) -> Result<Question> {
        let mut prompt = render_text(&question, context.name)?.bold().to_string();

        if context.required {
            prompt.push_str(&"*".red().to_string());
        }

        if let Some(choices) = question.choices() {
            let choices = format!("({})", choices.join("/"));
            prompt.push_str(&format!(" {}", choices.dark_cyan()));
        }

        if let Some(default) = question.default_answer() {
            let default = format!("[{default}]");
            prompt.push_str(&format!(" {}", default.yellow()));
        }

        if context.array_mode {
            prompt.push_str(&format!(" {}", FINISH_HINT.dark_grey()));
        }

        prompt.push_str(": ");
        question.set_text(prompt);
        Ok(question)
    }
}

/// Whether prompts written to stderr may carry terminal styling.
#[must_use]
pub fn supports_styling(no_color: bool) -> bool {
    !no_color && env::var_os("NO_COLOR").is_none() && stderr().is_terminal()
}

/// Picks the shaper matching the terminal's capabilities.
#[must_use]
pub fn select_shaper(styled: bool) -> Box<dyn QuestionShaper> {
    if styled {
        Box::new(DecoratedShaper)
    } else {
        Box::new(PlainShaper)
    }
}
