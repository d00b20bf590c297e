//! Engine error types.
//!
//! Every failure the engine reports is a local, synchronous precondition
//! violation or a terminal game state. Nothing here is transient, so callers
//! should never retry; the orchestration layer decides whether play goes on.

use thiserror::Error;

use crate::question::QuestionId;

/// Errors raised by questions, the bank, and the game state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The submitted answer was never offered as an option.
    #[error("invalid answer: \"{answer}\" is not one of the available options: {}", .options.join(", "))]
    InvalidAnswer {
        answer: String,
        options: Vec<String>,
    },

    /// This question has handed out all of its hints.
    #[error("no more hints available")]
    NoMoreHints,

    /// A question with this identity is already in the bank.
    #[error("question {0} is already in the bank")]
    DuplicateQuestion(QuestionId),

    /// No question with this identity is in the bank.
    #[error("question {0} is not in the bank")]
    QuestionNotFound(QuestionId),

    /// Every question in the bank has been served.
    #[error("no more questions available")]
    NoMoreQuestions,

    /// The game reached its terminal state; only a restart leaves it.
    #[error("game is over")]
    GameOver,

    /// Answer or hint requested before any question was fetched.
    #[error("no current question to check an answer against")]
    NoCurrentQuestion,

    /// The per-game hint budget is spent.
    #[error("maximum number of hints reached ({limit})")]
    MaxHintsLimit { limit: u32 },

    /// Question data that breaks a construction invariant.
    #[error("invalid question: {0}")]
    InvalidQuestion(String),
}

impl QuizError {
    /// Returns `true` if this error means there is nothing left to play
    /// until the game is restarted.
    pub fn is_terminal(&self) -> bool {
        matches!(self, QuizError::GameOver | QuizError::NoMoreQuestions)
    }
}
