//! Line-oriented prompts over any reader/writer pair.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::CliError;

pub(crate) struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub(crate) fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line (no prompt, no read).
    pub(crate) fn say(&mut self, text: &str) -> Result<(), CliError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Print `prompt` and read one line without its line ending.
    /// Returns `None` at end of input.
    pub(crate) fn line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Like [`line`](Self::line) but end of input is an error.
    pub(crate) fn required(&mut self, prompt: &str) -> Result<String, CliError> {
        self.line(prompt)?
            .ok_or_else(|| CliError::input("input closed"))
    }

    /// Ask until the answer parses as `T`.
    pub(crate) fn parsed<T>(&mut self, prompt: &str) -> Result<T, CliError>
    where
        T: FromStr,
        T::Err: Display,
    {
        loop {
            let answer = self.required(prompt)?;
            match answer.trim().parse::<T>() {
                Ok(value) => return Ok(value),
                Err(e) => self.say(&format!("Invalid value '{}': {}", answer.trim(), e))?,
            }
        }
    }

    /// Yes/no question; an answer starting with `y` (any case) is yes.
    /// End of input counts as no.
    pub(crate) fn confirm(&mut self, prompt: &str) -> Result<bool, CliError> {
        Ok(self
            .line(prompt)?
            .is_some_and(|a| a.trim_start().to_ascii_lowercase().starts_with('y')))
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn line_strips_line_ending() {
        let mut p = prompter("Alien\r\nnext\n");
        assert_eq!(p.line("> ").unwrap().as_deref(), Some("Alien"));
        assert_eq!(p.line("> ").unwrap().as_deref(), Some("next"));
        assert_eq!(p.line("> ").unwrap(), None);
        assert_eq!(String::from_utf8(p.output).unwrap(), "> > > ");
    }

    #[test]
    fn parsed_retries_until_valid() {
        let mut p = prompter("abc\n8.5\n");
        let value: f64 = p.parsed("Rating: ").unwrap();
        assert_eq!(value, 8.5);
        let out = String::from_utf8(p.output).unwrap();
        assert!(out.contains("Invalid value 'abc'"));
    }

    #[test]
    fn parsed_fails_at_end_of_input() {
        let mut p = prompter("x\n");
        assert!(matches!(p.parsed::<i64>("Year: "), Err(CliError::Input(_))));
    }

    #[test]
    fn confirm_answers() {
        let mut p = prompter("Y\nyes\nn\n\n");
        assert!(p.confirm("? ").unwrap());
        assert!(p.confirm("? ").unwrap());
        assert!(!p.confirm("? ").unwrap());
        assert!(!p.confirm("? ").unwrap());
        assert!(!p.confirm("? ").unwrap());
    }
}
