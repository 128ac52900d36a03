//! Line-buffered prompts with default fallback
//!
//! Every interactive question in a run goes through [`Prompter`], so trimming,
//! defaults and the yes/no rule behave the same at every step.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Interactive questions asked during a run
pub trait Prompter {
    /// Ask for a value; a blank answer keeps `default`
    fn input(&mut self, label: &str, default: &str) -> io::Result<String>;

    /// Ask a yes/no question; anything but `y`/`yes` is a no
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

/// Trimmed answer, or `default` unchanged when the answer is blank
pub fn resolve_answer(answer: &str, default: &str) -> String {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

/// `y` or `yes` in any case, surrounding whitespace ignored
pub fn is_affirmative(answer: &str) -> bool {
    let trimmed = answer.trim();
    trimmed.eq_ignore_ascii_case("y") || trimmed.eq_ignore_ascii_case("yes")
}

/// Prompter reading one line per question from `reader`.
///
/// End of input and a line that is not valid UTF-8 both read as an empty
/// line. There is no timeout.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    #[cfg(test)]
    pub(crate) fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn ask(&mut self, text: &str) -> io::Result<String> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()?;

        let mut line = Vec::new();
        self.reader.read_until(b'\n', &mut line)?;
        Ok(String::from_utf8(line).unwrap_or_default())
    }
}

impl LinePrompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn input(&mut self, label: &str, default: &str) -> io::Result<String> {
        let answer = self.ask(&format!("{} ({}) : ", label, default))?;
        Ok(resolve_answer(&answer, default))
    }

    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.ask(&format!("{} (y/n) : ", question))?;
        Ok(is_affirmative(&answer))
    }
}
