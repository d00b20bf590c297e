//! Text presentation: rendering questions and mapping raw input to actions.

use std::io::{self, Write};

use quizforge_core::QuestionSnapshot;

pub const HELP: &str =
    "Commands: <number> answer, h/hint, n/next, r/restart, q/quit";

/// What a line of player input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Hint,
    Next,
    /// 1-based option number as typed.
    Answer(usize),
    Restart,
    Quit,
    Unknown(String),
}

pub fn parse_action(input: &str) -> Action {
    let input = input.trim();
    match input.to_lowercase().as_str() {
        "h" | "hint" => Action::Hint,
        "n" | "next" => Action::Next,
        "r" | "restart" => Action::Restart,
        "q" | "quit" | "exit" => Action::Quit,
        other => match other.parse::<usize>() {
            Ok(n) => Action::Answer(n),
            Err(_) => Action::Unknown(input.to_string()),
        },
    }
}

/// Print a question with numbered options.
pub fn render_question<W: Write>(
    out: &mut W,
    number: usize,
    question: &QuestionSnapshot,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Question {number}: {}", question.text)?;
    for (i, option) in question.options.iter().enumerate() {
        writeln!(out, "  {}. {option}", i + 1)?;
    }
    match question.hints_remaining {
        0 => writeln!(out, "(no hints available)"),
        1 => writeln!(out, "(1 hint available)"),
        n => writeln!(out, "({n} hints available)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizforge_core::Question;

    #[test]
    fn parse_known_actions() {
        assert_eq!(parse_action("h\n"), Action::Hint);
        assert_eq!(parse_action("  HINT "), Action::Hint);
        assert_eq!(parse_action("next"), Action::Next);
        assert_eq!(parse_action("r"), Action::Restart);
        assert_eq!(parse_action("quit"), Action::Quit);
        assert_eq!(parse_action("2"), Action::Answer(2));
        assert_eq!(parse_action("0"), Action::Answer(0));
    }

    #[test]
    fn parse_unknown_actions() {
        assert_eq!(parse_action("-1"), Action::Unknown("-1".into()));
        assert_eq!(parse_action("Paris"), Action::Unknown("Paris".into()));
        assert_eq!(parse_action(""), Action::Unknown(String::new()));
    }

    #[test]
    fn render_numbers_options() {
        let q = Question::new(
            "What is 2 + 2?",
            vec!["3".into(), "4".into()],
            "4",
            vec!["even".into()],
        )
        .unwrap();
        let mut out = Vec::new();
        render_question(&mut out, 3, &q.snapshot()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Question 3: What is 2 + 2?"));
        assert!(text.contains("  1. 3\n  2. 4\n"));
        assert!(text.contains("(1 hint available)"));
    }
}
