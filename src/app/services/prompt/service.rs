//! Retrying prompt loop over explicit input and output handles

use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::debug;

use super::options::PromptOptions;
use crate::app::services::field_cursor::{FieldType, FieldValue};
use crate::constants::{FALSE_WORDS, TRUE_WORDS};
use crate::{Error, Result};

/// Typed question-and-answer session
///
/// Every getter prints the prompt, reads a single line and converts it.
/// Invalid answers print `on_invalid` (when set) and repeat the question.
/// Running out of input ends the loop with [`Error::InputClosed`].
pub struct PromptService<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptService<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the input and output handles
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Write text without a newline
    pub fn print(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)
            .and_then(|_| self.output.flush())
            .map_err(|e| Error::io("Failed to write prompt", e))
    }

    /// Write text followed by a newline
    pub fn println(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)
            .and_then(|_| self.output.flush())
            .map_err(|e| Error::io("Failed to write prompt", e))
    }

    /// Ask once and return the raw answer, which may be empty
    pub fn get_string(&mut self, prompt: &str) -> Result<String> {
        self.print(prompt)?;
        self.read_answer(prompt)
    }

    /// First character of a non-empty answer
    pub fn get_char(&mut self, options: &PromptOptions) -> Result<char> {
        self.ask_until(options, |answer| answer.chars().next())
    }

    /// `true`/`1` or `false`/`0`, case-insensitive
    pub fn get_boolean(&mut self, options: &PromptOptions) -> Result<bool> {
        self.ask_until(options, |answer| {
            let answer = answer.trim();
            if TRUE_WORDS.iter().any(|w| answer.eq_ignore_ascii_case(w)) {
                Some(true)
            } else if FALSE_WORDS.iter().any(|w| answer.eq_ignore_ascii_case(w)) {
                Some(false)
            } else {
                None
            }
        })
    }

    pub fn get_short(&mut self, options: &PromptOptions) -> Result<i16> {
        self.ask_parsed(options)
    }

    pub fn get_integer(&mut self, options: &PromptOptions) -> Result<i32> {
        self.ask_parsed(options)
    }

    pub fn get_long(&mut self, options: &PromptOptions) -> Result<i64> {
        self.ask_parsed(options)
    }

    pub fn get_float(&mut self, options: &PromptOptions) -> Result<f32> {
        self.ask_parsed(options)
    }

    pub fn get_double(&mut self, options: &PromptOptions) -> Result<f64> {
        self.ask_parsed(options)
    }

    /// Ask for a value of `field_type`
    ///
    /// String answers are returned as typed; numeric answers are trimmed
    /// before conversion.
    pub fn get_typed(
        &mut self,
        field_type: FieldType,
        options: &PromptOptions,
    ) -> Result<FieldValue> {
        match field_type {
            FieldType::String => Ok(FieldValue::String(self.get_string(&options.prompt)?)),
            _ => self.ask_until(options, |answer| field_type.parse_value(answer.trim()).ok()),
        }
    }

    fn ask_parsed<T: FromStr>(&mut self, options: &PromptOptions) -> Result<T> {
        self.ask_until(options, |answer| answer.trim().parse::<T>().ok())
    }

    fn ask_until<T>(
        &mut self,
        options: &PromptOptions,
        convert: impl Fn(&str) -> Option<T>,
    ) -> Result<T> {
        loop {
            self.print(&options.prompt)?;
            let answer = self.read_answer(&options.prompt)?;

            if let Some(value) = convert(&answer) {
                return Ok(value);
            }

            debug!("Rejected answer {:?} for prompt {:?}", answer, options.prompt);
            if let Some(message) = &options.on_invalid {
                self.println(message)?;
            }
        }
    }

    fn read_answer(&mut self, prompt: &str) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| Error::io("Failed to read user input", e))?;

        if read == 0 {
            return Err(Error::input_closed(prompt.trim_end()));
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}
