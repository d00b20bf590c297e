//! A single quiz item and its outbound snapshot.

use std::collections::HashSet;
use std::fmt;

use uuid::Uuid;

use crate::error::QuizError;

/// Stable identity of a question, assigned once at construction.
///
/// Two questions with identical text, options, and answer are still distinct
/// unless they share an id. Cloning a [`Question`] keeps its id, so a clone
/// is the same question as far as the bank is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId(Uuid);

impl QuestionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A quiz item: text, ordered options, the correct option, and ordered hints.
///
/// Everything except the hint cursor is fixed after construction. The correct
/// answer is only observable through [`Question::check_answer`].
#[derive(Clone)]
pub struct Question {
    id: QuestionId,
    text: String,
    options: Vec<String>,
    correct_answer: String,
    hints: Vec<String>,
    hints_consumed: usize,
}

impl Question {
    /// Build a question, checking that there are at least two distinct
    /// options and that the correct answer is one of them.
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
        hints: Vec<String>,
    ) -> Result<Self, QuizError> {
        let text = text.into();
        let correct_answer = correct_answer.into();

        if options.len() < 2 {
            return Err(QuizError::InvalidQuestion(format!(
                "\"{text}\" needs at least 2 options, got {}",
                options.len()
            )));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = options.iter().find(|o| !seen.insert(o.as_str())) {
            return Err(QuizError::InvalidQuestion(format!(
                "\"{text}\" has duplicate option \"{dup}\""
            )));
        }

        if !options.contains(&correct_answer) {
            return Err(QuizError::InvalidQuestion(format!(
                "\"{text}\": correct answer is not one of the options"
            )));
        }

        Ok(Self {
            id: QuestionId::new(),
            text,
            options,
            correct_answer,
            hints,
            hints_consumed: 0,
        })
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Total number of hints this question carries.
    pub fn hint_count(&self) -> usize {
        self.hints.len()
    }

    pub fn hints_consumed(&self) -> usize {
        self.hints_consumed
    }

    pub fn hints_remaining(&self) -> usize {
        self.hints.len() - self.hints_consumed
    }

    /// Returns whether `submitted` is the correct option (exact match).
    ///
    /// A value that was never offered is a usage error, not a wrong answer.
    pub fn check_answer(&self, submitted: &str) -> Result<bool, QuizError> {
        if !self.options.iter().any(|o| o == submitted) {
            return Err(QuizError::InvalidAnswer {
                answer: submitted.to_string(),
                options: self.options.clone(),
            });
        }
        Ok(submitted == self.correct_answer)
    }

    /// Consume and return the next unused hint.
    pub fn next_hint(&mut self) -> Result<&str, QuizError> {
        let hint = self
            .hints
            .get(self.hints_consumed)
            .ok_or(QuizError::NoMoreHints)?;
        self.hints_consumed += 1;
        Ok(hint)
    }

    /// Answer-free view of this question for the presentation layer.
    pub fn snapshot(&self) -> QuestionSnapshot {
        QuestionSnapshot {
            id: self.id,
            text: self.text.clone(),
            options: self.options.clone(),
            hints_remaining: self.hints_remaining(),
        }
    }
}

// Hand-written so the correct answer never lands in logs.
impl fmt::Debug for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Question")
            .field("id", &self.id)
            .field("text", &self.text)
            .field("options", &self.options)
            .field("correct_answer", &"***")
            .field("hints", &self.hints.len())
            .field("hints_consumed", &self.hints_consumed)
            .finish()
    }
}

/// What the caller gets back when a question is served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSnapshot {
    pub id: QuestionId,
    pub text: String,
    pub options: Vec<String>,
    pub hints_remaining: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn two_plus_two() -> Question {
        Question::new(
            "What is 2 + 2?",
            strings(&["3", "4", "5"]),
            "4",
            strings(&["It is even", "It is less than 5"]),
        )
        .unwrap()
    }

    #[test]
    fn accessors() {
        let q = two_plus_two();
        assert_eq!(q.text(), "What is 2 + 2?");
        assert_eq!(q.options(), &["3", "4", "5"]);
        assert_eq!(q.hint_count(), 2);
        assert_eq!(q.hints_consumed(), 0);
    }

    #[test]
    fn check_answer_correct_and_wrong() {
        let q = two_plus_two();
        assert_eq!(q.check_answer("4"), Ok(true));
        assert_eq!(q.check_answer("3"), Ok(false));
    }

    #[test]
    fn check_answer_rejects_unoffered_value() {
        let q = two_plus_two();
        let err = q.check_answer("22").unwrap_err();
        assert!(matches!(err, QuizError::InvalidAnswer { ref answer, .. } if answer == "22"));
        // Exact match only.
        assert!(q.check_answer(" 4").is_err());
    }

    #[test]
    fn hints_are_consumed_in_order() {
        let mut q = two_plus_two();
        assert_eq!(q.next_hint().unwrap(), "It is even");
        assert_eq!(q.next_hint().unwrap(), "It is less than 5");
        assert_eq!(q.hints_remaining(), 0);
        assert_eq!(q.next_hint(), Err(QuizError::NoMoreHints));
        assert_eq!(q.hints_consumed(), 2);
    }

    #[test]
    fn question_without_hints() {
        let mut q = Question::new("Yes?", strings(&["yes", "no"]), "yes", vec![]).unwrap();
        assert_eq!(q.next_hint(), Err(QuizError::NoMoreHints));
    }

    #[test]
    fn rejects_answer_outside_options() {
        let err = Question::new("Q", strings(&["a", "b"]), "c", vec![]).unwrap_err();
        assert!(matches!(err, QuizError::InvalidQuestion(_)));
    }

    #[test]
    fn rejects_single_option() {
        let err = Question::new("Q", strings(&["a"]), "a", vec![]).unwrap_err();
        assert!(err.to_string().contains("at least 2 options"));
    }

    #[test]
    fn rejects_duplicate_options() {
        let err = Question::new("Q", strings(&["a", "b", "a"]), "a", vec![]).unwrap_err();
        assert!(err.to_string().contains("duplicate option \"a\""));
    }

    #[test]
    fn identical_fields_are_distinct_questions() {
        let a = two_plus_two();
        let b = two_plus_two();
        assert_ne!(a.id(), b.id());
        assert_eq!(a.clone().id(), a.id());
    }

    #[test]
    fn debug_hides_answer() {
        let q = two_plus_two();
        let debug = format!("{q:?}");
        assert!(debug.contains("***"));
        assert!(!debug.contains("correct_answer: \"4\""));
    }

    #[test]
    fn snapshot_tracks_remaining_hints() {
        let mut q = two_plus_two();
        q.next_hint().unwrap();
        let snap = q.snapshot();
        assert_eq!(snap.id, q.id());
        assert_eq!(snap.hints_remaining, 1);
        assert_eq!(snap.options.len(), 3);
    }
}
