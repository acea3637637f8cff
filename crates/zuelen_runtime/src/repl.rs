//! The interactive REPL.
//!
//! Each line is a phrase evaluated in the session's mode, or a command
//! starting with `:`.

use std::io::{self, Write};

use zuelen_calendar::month::month_names;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::error::{Result, RuntimeError};
use crate::session::{Mode, Session};

/// REPL commands, offered for completion.
const COMMANDS: &[&str] = &[
    ":date", ":help", ":json", ":lang", ":number", ":quit", ":tokens",
];

/// What the REPL does after a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Print this text.
    Output(String),
    /// Nothing to print.
    Silent,
    /// Leave the REPL.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Language, mode, output format.
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Prompt shown before each line.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a REPL with the rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        let mut repl = Self {
            editor,
            session: Session::new(),
            show_banner: true,
            prompt: "zuel> ".to_string(),
        };
        repl.refresh_completions();
        repl
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self.refresh_completions();
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the REPL loop until EOF or `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => {
                    println!();
                    continue;
                }
                ReadResult::Eof => break,
            };

            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            match self.execute(&line) {
                Ok(Reply::Output(text)) => println!("\x1b[1m{text}\x1b[0m"),
                Ok(Reply::Silent) => {}
                Ok(Reply::Quit) => break,
                Err(e) => print_error(&e),
            }
        }

        println!("\nÄddi!");
        Ok(())
    }

    /// Executes one line: a command or a phrase.
    ///
    /// # Errors
    ///
    /// Returns the evaluation error for a phrase, or `Usage` for a bad command.
    pub fn execute(&mut self, line: &str) -> Result<Reply> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Reply::Silent);
        }
        if !line.starts_with(':') {
            return self.session.evaluate(line).map(Reply::Output);
        }

        let (command, argument) = match line.split_once(char::is_whitespace) {
            Some((command, argument)) => (command, argument.trim()),
            None => (line, ""),
        };
        tracing::trace!(command, argument, "repl command");

        match command {
            ":quit" | ":q" | ":exit" => Ok(Reply::Quit),
            ":help" | ":h" => Ok(Reply::Output(help_text())),
            ":lang" => self.language_command(argument),
            ":json" => {
                let json = !self.session.json();
                self.session.set_json(json);
                Ok(Reply::Output(format!("json output {}", if json { "on" } else { "off" })))
            }
            ":number" => self.mode_command(Mode::Number, argument),
            ":date" => self.mode_command(Mode::Date, argument),
            ":tokens" => self.mode_command(Mode::Tokens, argument),
            other => Err(RuntimeError::Usage(format!(
                "unknown command '{other}', try :help"
            ))),
        }
    }

    /// With a phrase, evaluates it once in `mode`; without one, switches to `mode`.
    fn mode_command(&mut self, mode: Mode, argument: &str) -> Result<Reply> {
        if argument.is_empty() {
            self.session.set_mode(mode);
            return Ok(Reply::Output(format!("mode: {mode}")));
        }
        self.session.evaluate_as(mode, argument).map(Reply::Output)
    }

    fn language_command(&mut self, argument: &str) -> Result<Reply> {
        if argument.is_empty() {
            return Ok(Reply::Output(format!(
                "language: {} (available: {})",
                self.session.language(),
                self.session.languages().join(", ")
            )));
        }
        self.session.set_language(argument)?;
        self.refresh_completions();
        Ok(Reply::Output(format!("language: {argument}")))
    }

    /// Offers the current vocabulary, month names, and commands for completion.
    fn refresh_completions(&mut self) {
        let mut words: Vec<String> = COMMANDS.iter().map(|c| (*c).to_string()).collect();
        words.extend(month_names().map(str::to_string));
        if let Ok(evaluator) = self.session.evaluator() {
            words.extend(evaluator.vocabulary().words());
        }
        self.editor.set_completions(words);
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mZuelen\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!("Type a number or date phrase. :help lists commands, Ctrl+D exits.\n");

        let _ = io::stdout().flush();
    }
}

/// Prints an error to stderr.
fn print_error(error: &RuntimeError) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
}

fn help_text() -> String {
    [
        "Commands:",
        "  :number [phrase]  read phrases as numbers",
        "  :date [phrase]    read phrases as dates",
        "  :tokens [phrase]  show the token stream of a phrase",
        "  :lang [tag]       show or switch the language",
        "  :json             toggle JSON output",
        "  :help             show this help",
        "  :quit             leave",
        "",
        "With a phrase, :number, :date and :tokens evaluate it once.",
    ]
    .join("\n")
}
