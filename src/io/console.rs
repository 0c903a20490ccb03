//! # Line oriented console
//!
//! Prompts for values and keeps asking until the user types one that is acceptable.
use std::fmt::Display;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::io::error::{Input, ParseResult};
use crate::io::number::{Parse, parse_integer_in_range};

/// Reading one real value after showing a prompt.
///
/// This is the seam through which the inequality systems get their data, it doesn't depend on
/// where the lines come from.
pub trait ReadReal<F> {
    /// Prompt until a valid value is typed.
    ///
    /// # Errors
    ///
    /// Only when no value can be read anymore, see `Input`.
    fn read_real(&mut self, prompt: &str) -> Result<F, Input>;
}

/// A prompt sink together with a line source.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a new console.
    ///
    /// # Arguments
    ///
    /// * `input`: Where lines are read from.
    /// * `output`: Where prompts, rejections and messages are written to.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, }
    }

    /// Read a finite real number, asking again after every invalid line.
    ///
    /// # Errors
    ///
    /// If the input ends or the console fails.
    pub fn read_real<F: Parse>(&mut self, prompt: &str) -> Result<F, Input> {
        self.read_until_valid(
            prompt,
            F::parse,
            "Please enter a finite number, using '.' as the decimal separator.",
        )
    }

    /// Read an integer in the inclusive range `[minimum, maximum]`, asking again after every
    /// invalid line.
    ///
    /// # Errors
    ///
    /// If the input ends or the console fails.
    pub fn read_integer_in_range(
        &mut self,
        prompt: &str,
        minimum: i64,
        maximum: i64,
    ) -> Result<i64, Input> {
        let hint = format!("Please enter a whole number from {} to {}.", minimum, maximum);
        self.read_until_valid(
            prompt,
            |text| parse_integer_in_range(text, minimum, maximum),
            &hint,
        )
    }

    /// Write a message on its own line.
    ///
    /// # Errors
    ///
    /// If the console fails.
    pub fn write_line(&mut self, message: impl Display) -> Result<(), Input> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;

        Ok(())
    }

    /// Everything written so far, for consoles that write to memory.
    pub fn output(&self) -> &W {
        &self.output
    }

    fn read_until_valid<T, P>(&mut self, prompt: &str, parse: P, hint: &str) -> Result<T, Input>
    where
        P: Fn(&str) -> ParseResult<T>,
    {
        loop {
            let line = match String::from_utf8(self.prompt_line(prompt)?) {
                Ok(line) => line,
                Err(error) => {
                    debug!(%error, "rejected console input");
                    writeln!(self.output, "Invalid input, not UTF-8. {}", hint)?;
                    continue;
                },
            };
            match parse(line.trim()) {
                Ok(value) => return Ok(value),
                Err(error) => {
                    debug!(%error, "rejected console input");
                    writeln!(self.output, "Invalid input \"{}\". {}", line.trim(), hint)?;
                },
            }
        }
    }

    /// Raw bytes, so that a line that isn't UTF-8 can be rejected like any other invalid line.
    fn prompt_line(&mut self, prompt: &str) -> Result<Vec<u8>, Input> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(Input::EndOfInput);
        }

        Ok(line)
    }
}

impl<R: BufRead, W: Write, F: Parse> ReadReal<F> for Console<R, W> {
    fn read_real(&mut self, prompt: &str) -> Result<F, Input> {
        Console::read_real::<F>(self, prompt)
    }
}
