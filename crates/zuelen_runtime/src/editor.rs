//! Line editor abstraction for the REPL.
//!
//! The REPL talks to a [`LineEditor`]; [`RustylineEditor`] is the terminal
//! implementation, and tests supply their own.

use std::borrow::Cow;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};

use crate::error::{Result, RuntimeError};

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Replace the words offered for completion.
    fn set_completions(&mut self, words: Vec<String>);
}

/// Rustyline helper: word completion, history hints, a colored prompt.
#[derive(Helper, Completer, Hinter, Validator)]
struct ZuelenHelper {
    #[rustyline(Completer)]
    completer: WordCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Highlighter for ZuelenHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes vocabulary words, month names, and REPL commands.
#[derive(Debug, Default)]
pub struct WordCompleter {
    words: Vec<String>,
}

impl WordCompleter {
    /// Creates a completer over the given words.
    #[must_use]
    pub fn new(mut words: Vec<String>) -> Self {
        words.sort();
        words.dedup();
        Self { words }
    }

    /// Returns the start of the word under the cursor and its candidates.
    #[must_use]
    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<&str>) {
        let head = line.get(..pos).unwrap_or(line);
        let start = head
            .rfind(|c: char| c.is_whitespace() || c == '-')
            .map_or(0, |i| i + 1);
        let word = head[start..].to_lowercase();

        let candidates = self
            .words
            .iter()
            .map(String::as_str)
            .filter(|candidate| candidate.starts_with(&word))
            .collect();
        (start, candidates)
    }
}

impl Completer for WordCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, candidates) = self.candidates(line, pos);
        let pairs = candidates
            .into_iter()
            .map(|word| Pair {
                display: word.to_string(),
                replacement: word.to_string(),
            })
            .collect();
        Ok((start, pairs))
    }
}

/// Line editor backed by rustyline.
pub struct RustylineEditor {
    editor: Editor<ZuelenHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline fails to initialize.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| RuntimeError::Editor(e.to_string()))?
            .build();

        let helper = ZuelenHelper {
            completer: WordCompleter::default(),
            hinter: HistoryHinter::new(),
        };

        let mut editor =
            Editor::with_config(config).map_err(|e| RuntimeError::Editor(e.to_string()))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(RuntimeError::Editor(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_completions(&mut self, words: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer = WordCompleter::new(words);
        }
    }
}
