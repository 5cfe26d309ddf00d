//! Questions asked before a run.
//!
//! [`Ask`] is the seam between `ngfeat new` and the terminal. [`LinePrompter`]
//! reads answers line by line from any reader, which is what scripts and
//! piped input get; [`DialoguerPrompter`] is used on an interactive terminal.

use std::io::{self, BufRead, IsTerminal, Write};

use crate::error::{CliError, CliResult};

pub const NAME_PROMPT: &str = "Name feature (camelCase)";
pub const NESTED_PROMPT: &str = "Is it a nested component? (y/n)";
pub const CHILD_PROMPT: &str = "Name of the child component";

/// Source of answers.
pub trait Ask {
    /// Free-text answer, line terminator removed, otherwise verbatim.
    fn text(&mut self, prompt: &str) -> CliResult<String>;

    /// Yes/no answer; only `y` (any case, surrounding whitespace ignored)
    /// counts as yes.
    fn confirm(&mut self, prompt: &str) -> CliResult<bool> {
        Ok(is_yes(&self.text(prompt)?))
    }
}

pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Line-oriented prompter over a reader and a writer.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Ask for LinePrompter<R, W> {
    fn text(&mut self, prompt: &str) -> CliResult<String> {
        write!(self.writer, "{prompt}: ")?;
        self.writer.flush()?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| CliError::PromptFailed {
                message: e.to_string(),
            })?;
        if read == 0 {
            return Err(CliError::Cancelled);
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

/// Terminal prompter built on `dialoguer`.
#[cfg(feature = "interactive")]
pub struct DialoguerPrompter {
    theme: dialoguer::theme::ColorfulTheme,
}

#[cfg(feature = "interactive")]
impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

#[cfg(feature = "interactive")]
impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "interactive")]
impl Ask for DialoguerPrompter {
    fn text(&mut self, prompt: &str) -> CliResult<String> {
        dialoguer::Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| CliError::PromptFailed {
                message: e.to_string(),
            })
    }
}

/// Prompter for this process: `dialoguer` on a terminal, line input otherwise.
///
/// Line prompts go to stderr when stdout carries machine-readable output.
pub fn for_terminal(prompts_to_stderr: bool) -> Box<dyn Ask> {
    #[cfg(feature = "interactive")]
    if io::stdin().is_terminal() && io::stderr().is_terminal() {
        return Box::new(DialoguerPrompter::new());
    }

    if prompts_to_stderr {
        Box::new(LinePrompter::new(io::stdin().lock(), io::stderr()))
    } else {
        Box::new(LinePrompter::new(io::stdin().lock(), io::stdout()))
    }
}
