//! Line-oriented console prompts.
//!
//! Each question reads one line of input. Numeric answers that do not parse
//! fall back to zero with a warning; the flows keep going instead of failing.
//! End of input is treated as an empty answer. Bytes that are not valid
//! UTF-8 are replaced rather than rejected.

use fitlog_core::Result;
use std::io::{BufRead, Write};
use std::str::FromStr;

pub struct Prompter<R, W> {
    input: R,
    output: W,
    exhausted: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            exhausted: false,
        }
    }

    /// True once the input has hit end of file
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Write a full line of output
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Ask a question and return the whole answer line, trimmed
    pub fn text(&mut self, question: &str) -> Result<String> {
        Ok(self.ask(question)?.unwrap_or_default())
    }

    /// Ask a question and return the first word of the answer
    pub fn word(&mut self, question: &str) -> Result<String> {
        let answer = self.text(question)?;
        Ok(answer.split_whitespace().next().unwrap_or_default().to_string())
    }

    /// Ask for a number; anything unparseable counts as zero
    pub fn number<T>(&mut self, question: &str) -> Result<T>
    where
        T: FromStr + Default,
    {
        let Some(answer) = self.ask(question)? else {
            tracing::debug!("No answer to {:?}, using default", question.trim());
            return Ok(T::default());
        };

        let token = answer.split_whitespace().next().unwrap_or_default();
        match token.parse::<T>() {
            Ok(value) => Ok(value),
            Err(_) => {
                tracing::warn!("Could not read a number from {:?}, using 0", answer);
                Ok(T::default())
            }
        }
    }

    /// Ask a y/n question; only an answer starting with y or Y is a yes
    pub fn yes(&mut self, question: &str) -> Result<bool> {
        let answer = self.text(question)?;
        Ok(matches!(answer.chars().next(), Some('y' | 'Y')))
    }

    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        if self.exhausted {
            return Ok(None);
        }

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            self.exhausted = true;
            // Keep the transcript readable when answers are piped in
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        prompter_bytes(input.as_bytes())
    }

    fn prompter_bytes(input: &[u8]) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.to_vec()), Vec::new())
    }

    #[test]
    fn test_text_keeps_spaces() {
        let mut p = prompter("Ada Lovelace\n");
        assert_eq!(p.text("Name: ").unwrap(), "Ada Lovelace");
    }

    #[test]
    fn test_word_takes_first_token() {
        let mut p = prompter("  Ada Lovelace\n");
        assert_eq!(p.word("Name: ").unwrap(), "Ada");
    }

    #[test]
    fn test_number_parses() {
        let mut p = prompter("42\n-7\n72.5\n");
        assert_eq!(p.number::<i32>("a").unwrap(), 42);
        assert_eq!(p.number::<i32>("b").unwrap(), -7);
        assert_eq!(p.number::<f64>("c").unwrap(), 72.5);
    }

    #[test]
    fn test_malformed_number_is_zero() {
        let mut p = prompter("forty\n\n");
        assert_eq!(p.number::<i32>("a").unwrap(), 0);
        assert_eq!(p.number::<f64>("b").unwrap(), 0.0);
        assert!(!p.is_exhausted());
    }

    #[test]
    fn test_yes_answers() {
        let mut p = prompter("y\nYes\nn\nmaybe\n\n");
        assert!(p.yes("?").unwrap());
        assert!(p.yes("?").unwrap());
        assert!(!p.yes("?").unwrap());
        assert!(!p.yes("?").unwrap());
        assert!(!p.yes("?").unwrap());
    }

    #[test]
    fn test_eof_gives_defaults() {
        let mut p = prompter("");
        assert_eq!(p.number::<i64>("n").unwrap(), 0);
        assert!(p.is_exhausted());
        assert_eq!(p.text("t").unwrap(), "");
        assert!(!p.yes("y").unwrap());
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut p = prompter_bytes(b"Jos\xe9 Garc\xeda\n4\xff\n40\n");
        assert_eq!(p.text("Name: ").unwrap(), "Jos\u{FFFD} Garc\u{FFFD}a");
        assert_eq!(p.number::<i32>("Age: ").unwrap(), 0);
        assert_eq!(p.number::<i32>("Age: ").unwrap(), 40);
        assert!(!p.is_exhausted());
    }

    #[test]
    fn test_questions_are_written() {
        let mut p = prompter("1\n");
        p.number::<i32>("Pick one: ").unwrap();
        p.say("done").unwrap();

        let output = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(output, "Pick one: done\n");
    }
}
