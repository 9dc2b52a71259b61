//! Line-based terminal prompter.
//!
//! Writes the (already shaped) question text, reads one line and runs it
//! through the question's validator and normalizer. A rejected answer is
//! reported and the question is asked again, up to the configured number of
//! attempts.

use std::io::{stderr, stdin, BufRead, Stderr, StdinLock, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use log::{debug, warn};
use rust_params_core::error::{Error, Result};
use rust_params_core::prompter::Prompter;
use rust_params_core::question::Question;
use rust_params_core::value::Value;

/// Attempts allowed per question unless configured otherwise.
pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

enum Reply {
    Line(Option<Value>),
    Closed,
}

pub struct TerminalPrompter<R, W> {
    reader: R,
    writer: W,
    max_attempts: Option<usize>,
    styled: bool,
}

impl TerminalPrompter<StdinLock<'static>, Stderr> {
    /// Prompter reading from stdin and writing questions to stderr, so that
    /// stdout only carries results.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(stdin().lock(), stderr())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
            styled: false,
        }
    }

    /// `None` keeps asking until an answer is accepted or input ends.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Colour rejection messages.
    #[must_use]
    pub fn with_styling(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_reply(&mut self, question: &Question) -> Result<Reply> {
        write!(self.writer, "{}", question.text())?;
        self.writer.flush()?;

        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            writeln!(self.writer)?;
            return Ok(Reply::Closed);
        }

        let read_value = input.trim();
        if read_value.is_empty() {
            return Ok(Reply::Line(question.default_answer().cloned()));
        }

        Ok(Reply::Line(Some(Value::from(read_value))))
    }

    fn report_rejection(&mut self, message: &str) -> Result<()> {
        if self.styled {
            queue!(
                self.writer,
                SetForegroundColor(Color::Red),
                Print(message),
                ResetColor,
                Print("\n")
            )?;
        } else {
            writeln!(self.writer, "{message}")?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn may_retry(&self, attempt: usize) -> bool {
        self.max_attempts.map_or(true, |max| attempt < max)
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn ask(&mut self, question: &Question) -> Result<Option<Value>> {
        let mut attempt = 0;

        loop {
            attempt += 1;

            let (raw, closed) = match self.read_reply(question)? {
                Reply::Line(raw) => (raw, false),
                Reply::Closed => {
                    debug!("Input closed while asking `{}`", question.text());
                    (None, true)
                }
            };

            match question.process_answer(raw) {
                Ok(answer) => return Ok(answer),
                Err(Error::ValidationRejected(message)) if !closed && self.may_retry(attempt) => {
                    warn!("Answer rejected (attempt {attempt}): {message}");
                    self.report_rejection(&message)?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_params_core::checks;
    use std::io::Cursor;

    fn prompter(input: &str) -> TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalPrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_reads_trimmed_line() {
        let mut prompter = prompter("  hello  \n");
        let answer = prompter.ask(&Question::new("Name: ")).unwrap();
        assert_eq!(answer, Some(Value::from("hello")));
        assert_eq!(String::from_utf8(prompter.into_writer()).unwrap(), "Name: ");
    }

    #[test]
    fn test_empty_line_uses_question_default() {
        let question = Question::new("Port: ").with_default(Value::Integer(8080));
        assert_eq!(
            prompter("\n").ask(&question).unwrap(),
            Some(Value::Integer(8080))
        );
        assert_eq!(prompter("\n").ask(&Question::new("Name: ")).unwrap(), None);
    }

    #[test]
    fn test_closed_input_answers_null() {
        assert_eq!(prompter("").ask(&Question::new("Name: ")).unwrap(), None);
    }

    #[test]
    fn test_rejected_answer_is_asked_again() {
        let question = Question::new("Port: ")
            .with_validator(checks::numeric())
            .with_normalizer(checks::to_integer());
        let mut prompter = prompter("abc\n42\n");

        assert_eq!(prompter.ask(&question).unwrap(), Some(Value::Integer(42)));

        let output = String::from_utf8(prompter.into_writer()).unwrap();
        assert_eq!(output.matches("Port: ").count(), 2);
        assert!(output.contains("A numeric value is required"));
    }

    #[test]
    fn test_gives_up_after_max_attempts() {
        let question = Question::new("Port: ").with_validator(checks::numeric());
        let mut prompter = prompter("a\nb\nc\n42\n").with_max_attempts(Some(2));

        let result = prompter.ask(&question);
        assert!(matches!(result, Err(Error::ValidationRejected(_))));
    }

    #[test]
    fn test_closed_input_stops_retrying() {
        let question = Question::new("Port: ").with_validator(checks::numeric());
        let mut prompter = prompter("").with_max_attempts(None);

        assert!(matches!(
            prompter.ask(&question),
            Err(Error::ValidationRejected(_))
        ));
    }
}
