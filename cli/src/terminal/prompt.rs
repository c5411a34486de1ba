use std::io::{self, BufRead, StdinLock};

use colored::*;
use console::Term;

use crate::terminal::colors;

/// Source of answers for the interactive menu.
pub trait Prompt {
    /// Shows `question` and reads one trimmed line.
    ///
    /// `Ok(None)` means the input is exhausted.
    fn ask(&mut self, question: &str) -> anyhow::Result<Option<String>>;
}

/// Line-based prompt over any buffered reader.
///
/// Questions are echoed to the terminal only when one is attached, which
/// keeps scripted sessions silent.
pub struct LinePrompt<R> {
    input: R,
    term: Option<Term>,
}

impl<R: BufRead> LinePrompt<R> {
    pub fn new(input: R) -> Self {
        Self { input, term: None }
    }

    pub fn with_term(mut self, term: Term) -> Self {
        self.term = Some(term);
        self
    }
}

impl LinePrompt<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock()).with_term(Term::stdout())
    }
}

impl<R: BufRead> Prompt for LinePrompt<R> {
    fn ask(&mut self, question: &str) -> anyhow::Result<Option<String>> {
        if let Some(term) = &self.term {
            term.write_str(&format!("{} ", question.color(colors::PRIMARY)))?;
            term.flush()?;
        }

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
