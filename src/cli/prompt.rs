//! Line-oriented terminal prompts.

use std::io::{BufRead, Write};

use crate::error::{Error, Result};

const DEFAULT_RETRY: &str = "Please only write y or n: ";

/// Reads answers from `input` and writes prompts to `output`.
///
/// Every read blocks until a full line arrives.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl Prompt<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Prompt over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `text` as-is and flushes, so prompts without a newline show up.
    pub fn say(&mut self, text: impl std::fmt::Display) -> Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Writes `text` followed by a newline.
    pub fn sayln(&mut self, text: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Reads one line without its line terminator.
    ///
    /// # Errors
    /// Returns [`Error::InputClosed`] at end of input.
    pub fn line(&mut self) -> Result<String> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(Error::InputClosed);
        }
        let trimmed = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed);
        Ok(buf)
    }

    /// Asks until the answer is `y` or `n` (any case).
    ///
    /// `retry` replaces the default message shown after an invalid answer.
    pub fn yes_no(&mut self, retry: Option<&str>) -> Result<bool> {
        let retry = retry.unwrap_or(DEFAULT_RETRY);
        loop {
            match self.line()?.to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.say(format_args!("\n{retry}"))?,
            }
        }
    }

    /// Reads a free-text answer.
    ///
    /// Without `allowed` the raw line is returned. With it, asks again until the
    /// line exactly matches one of the allowed values.
    pub fn text(&mut self, allowed: Option<&[String]>) -> Result<String> {
        let Some(allowed) = allowed else {
            return self.line();
        };
        loop {
            self.say("\n>> ")?;
            let answer = self.line()?;
            if allowed.iter().any(|value| *value == answer) {
                return Ok(answer);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }
}
