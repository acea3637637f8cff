//! Integration tests for Layer 3: Runtime
//!
//! Tests sessions and the REPL against a scripted editor.

use proptest::prelude::*;
use zuelen_runtime::{LineEditor, Mode, ReadResult, Repl, Reply, Result, RuntimeError, Session};

/// Feeds fixed lines to the REPL.
struct ScriptedEditor {
    lines: std::vec::IntoIter<String>,
}

impl ScriptedEditor {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines
                .iter()
                .map(|line| (*line).to_string())
                .collect::<Vec<_>>()
                .into_iter(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.lines.next().map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_completions(&mut self, _words: Vec<String>) {}
}

fn output(reply: Result<Reply>) -> String {
    match reply {
        Ok(Reply::Output(text)) => text,
        other => panic!("expected output, got {other:?}"),
    }
}

// =============================================================================
// Session
// =============================================================================

#[test]
fn session_defaults() {
    let session = Session::new();
    assert_eq!(session.language(), "lb");
    assert_eq!(session.mode(), Mode::Number);
    assert!(!session.json());
}

#[test]
fn session_renders_each_mode() {
    let session = Session::new();
    assert_eq!(session.evaluate("zweedausendvéier").unwrap(), "2004");
    assert_eq!(
        session
            .evaluate_as(Mode::Date, "éischte Januar zweedausendvéier")
            .unwrap(),
        "1.1.2004"
    );
    assert_eq!(
        session.evaluate_as(Mode::Tokens, "véier foffzeg").unwrap(),
        "[4:digit 50:tens]"
    );
}

#[test]
fn session_json() {
    let session = Session::new().with_json(true);
    assert_eq!(
        session.evaluate("zwee komma fënnef").unwrap(),
        r#"{"kind":"decimal","value":2.5}"#
    );
    assert_eq!(
        session
            .evaluate_as(Mode::Date, "éischte Januar zweedausendvéier")
            .unwrap(),
        r#"{"day":1,"month":1,"year":2004}"#
    );
}

#[test]
fn session_errors() {
    let session = Session::new();
    assert!(matches!(
        session.evaluate("bonjour"),
        Err(RuntimeError::Evaluation(ref err)) if err.is_tokenization()
    ));
    assert!(matches!(
        session.evaluate_as(Mode::Date, "bonjour"),
        Err(RuntimeError::InvalidDate(ref phrase)) if phrase == "bonjour"
    ));
    assert!(Session::new().with_language("fr").is_err());
}

// =============================================================================
// REPL
// =============================================================================

#[test]
fn repl_executes_commands_in_sequence() {
    let mut repl = Repl::with_editor(ScriptedEditor::new(&[])).without_banner();

    assert_eq!(output(repl.execute("nonnzénghonnertnénganzwanzeg")), "1929");
    assert_eq!(output(repl.execute(":date")), "mode: date");
    assert_eq!(output(repl.execute("néngten Dez")), "9.12.");
    assert_eq!(output(repl.execute(":tokens dräi milliounen")), "[3:digit] x [1000000:scale]");
    assert_eq!(repl.session().mode(), Mode::Date);
}

#[test]
fn repl_keeps_going_after_errors() {
    let editor = ScriptedEditor::new(&["bonjour", ":nope", ":lang xx", "véierafoffzeg"]);
    let mut repl = Repl::with_editor(editor).without_banner();
    repl.run().unwrap();
    assert_eq!(repl.session().language(), "lb");
}

#[test]
fn repl_with_session() {
    let session = Session::new().with_mode(Mode::Date);
    let mut repl = Repl::with_editor(ScriptedEditor::new(&[]))
        .with_session(session)
        .with_prompt("> ")
        .without_banner();
    assert_eq!(output(repl.execute("zwee Mee")), "2.5.");
}

// =============================================================================
// JSON output
// =============================================================================

proptest! {
    #[test]
    fn json_output_is_valid(words in prop::collection::vec(
        prop::sample::select(vec![
            "zwee", "dausend", "honnert", "véierafoffzeg", "komma", "fënnef",
            "milliounen", "drëtten", "bonjour", "an",
        ]),
        1..6,
    )) {
        let session = Session::new().with_json(true);
        if let Ok(rendered) = session.evaluate(&words.join(" ")) {
            let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
            prop_assert!(value.get("kind").is_some());
        }
    }
}
