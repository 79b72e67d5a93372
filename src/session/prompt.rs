//! Input sources for the interactive session
//!
//! The session reads every answer through a [`Prompter`]. [`LinePrompter`]
//! reads plain lines (piped stdin, scripts, tests) and [`InquirePrompter`]
//! drives an interactive terminal with line editing.

use std::io::{BufRead, Write};

use inquire::{InquireError, Text, error::InquireResult};

use crate::error::Result;

/// Answer to a single prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A line of input, without its line terminator
    Line(String),
    /// The user abandoned the current question
    Cancelled,
    /// No more input will arrive
    Closed,
}

/// Source of user answers
pub trait Prompter {
    /// Show `message` and wait for one answer
    fn prompt(&mut self, message: &str) -> Result<Reply>;
}

/// Prompter reading newline-terminated answers from any reader
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    /// Prompts are written to `output` before each read
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn prompt(&mut self, message: &str) -> Result<Reply> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Reply::Closed);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Reply::Line(line))
    }
}

/// Prompter for an interactive terminal
///
/// ESC cancels the current question; Ctrl-C ends the session.
#[derive(Debug, Default)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn prompt(&mut self, message: &str) -> Result<Reply> {
        let message = message.trim_end().trim_end_matches(':');
        reply_from(Text::new(message).prompt_skippable())
    }
}

/// Map the outcome of a skippable inquire prompt onto a [`Reply`]
///
/// ESC yields `None` and cancels the question; Ctrl-C interrupts and closes
/// input. Any other failure is a prompt error.
fn reply_from(result: InquireResult<Option<String>>) -> Result<Reply> {
    match result {
        Ok(Some(answer)) => Ok(Reply::Line(answer)),
        Ok(None) => Ok(Reply::Cancelled),
        Err(InquireError::OperationInterrupted) => Ok(Reply::Closed),
        Err(e) => Err(e.into()),
    }
}

/// Prompter replaying a fixed script of answers, then reporting closed input
#[cfg(test)]
pub struct ScriptedPrompter {
    replies: std::collections::VecDeque<Reply>,
    pub asked: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_replies(lines.into_iter().map(|l| Reply::Line(l.into())))
    }

    pub fn from_replies(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: replies.into_iter().collect(),
            asked: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn prompt(&mut self, message: &str) -> Result<Reply> {
        self.asked.push(message.to_string());
        Ok(self.replies.pop_front().unwrap_or(Reply::Closed))
    }
}
