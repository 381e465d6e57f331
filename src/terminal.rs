// SPDX-License-Identifier: PMPL-1.0-or-later

//! Operator I/O for the publishing wizard
//!
//! The publisher never touches stdin/stdout directly; it talks to a
//! [`Terminal`]. [`ConsoleTerminal`] is the interactive implementation,
//! [`PipedTerminal`] reads answers line by line from any reader (used for
//! redirected stdin), and [`ScriptedTerminal`] replays canned answers and
//! records every line.

use anyhow::{anyhow, bail, Context, Result};
use colored::*;
use dialoguer::Input;
use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal};

/// How a printed line should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Plain,
    Info,
    Warn,
    Error,
}

pub trait Terminal {
    /// Print one line of output.
    fn line(&mut self, kind: LineKind, text: &str);

    /// Ask a free-text question. An empty answer is valid.
    fn ask(&mut self, question: &str) -> Result<String>;

    fn plain(&mut self, text: &str) {
        self.line(LineKind::Plain, text);
    }

    fn info(&mut self, text: &str) {
        self.line(LineKind::Info, text);
    }

    fn warn(&mut self, text: &str) {
        self.line(LineKind::Warn, text);
    }

    fn error(&mut self, text: &str) {
        self.line(LineKind::Error, text);
    }
}

/// Interactive terminal: coloured output on stdout/stderr, dialoguer input.
///
/// When stdin or stderr is not a terminal (piped answers, CI), questions are
/// still printed but answers are read one line at a time from stdin.
#[derive(Debug, Default)]
pub struct ConsoleTerminal;

impl ConsoleTerminal {
    pub fn new() -> Self {
        Self
    }

    fn is_interactive() -> bool {
        console::Term::stderr().is_term() && io::stdin().is_terminal()
    }
}

impl Terminal for ConsoleTerminal {
    fn line(&mut self, kind: LineKind, text: &str) {
        print_line(kind, text);
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        if !Self::is_interactive() {
            return PipedTerminal::new(io::stdin().lock()).ask(question);
        }
        println!("\n {}", question.green());
        Input::<String>::new()
            .with_prompt(" >")
            .allow_empty(true)
            .interact_text()
            .context("reading operator answer")
    }
}

/// Terminal that reads one answer per line from `reader`.
///
/// Output is styled exactly like [`ConsoleTerminal`].
#[derive(Debug)]
pub struct PipedTerminal<R> {
    reader: R,
}

impl<R: BufRead> PipedTerminal<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Terminal for PipedTerminal<R> {
    fn line(&mut self, kind: LineKind, text: &str) {
        print_line(kind, text);
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        println!("\n {}", question.green());
        read_answer(&mut self.reader)
    }
}

/// Read one answer line, without its line terminator.
///
/// End of input is an error: there is nobody left to answer.
pub fn read_answer<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .context("reading operator answer")?;
    if read == 0 {
        bail!("input closed before an answer was given");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn print_line(kind: LineKind, text: &str) {
    match kind {
        LineKind::Plain => println!("{}", text),
        LineKind::Info => println!("{}", text.green()),
        LineKind::Warn => println!("{}", text.yellow()),
        LineKind::Error => eprintln!("{}", text.white().on_red()),
    }
}

/// Terminal that answers from a fixed script and records all output.
///
/// Running out of scripted answers is an error, the same way a closed stdin
/// would be for the console.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    answers: VecDeque<String>,
    questions: Vec<String>,
    lines: Vec<(LineKind, String)>,
}

impl ScriptedTerminal {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            questions: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Every question asked so far, in order.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Every line printed so far, in order.
    pub fn lines(&self) -> &[(LineKind, String)] {
        &self.lines
    }

    /// Printed lines of one kind.
    pub fn lines_of(&self, kind: LineKind) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, text)| text.as_str())
            .collect()
    }

    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }
}

impl Terminal for ScriptedTerminal {
    fn line(&mut self, kind: LineKind, text: &str) {
        self.lines.push((kind, text.to_string()));
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        self.questions.push(question.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted answer left for: {}", question))
    }
}
