//! Question construction policy.
//!
//! The bank never calls [`Question::new`] directly; it asks its factory, so
//! the construction policy can be swapped without touching the bank.

use crate::error::QuizError;
use crate::question::Question;

/// Builds [`Question`]s from raw field data.
pub trait QuestionFactory {
    fn create_question(
        &self,
        text: String,
        options: Vec<String>,
        correct_answer: String,
        hints: Vec<String>,
    ) -> Result<Question, QuizError>;
}

/// Plain construction: the question's own invariants and nothing more.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultQuestionFactory;

impl QuestionFactory for DefaultQuestionFactory {
    fn create_question(
        &self,
        text: String,
        options: Vec<String>,
        correct_answer: String,
        hints: Vec<String>,
    ) -> Result<Question, QuizError> {
        Question::new(text, options, correct_answer, hints)
    }
}
