//! quizforge-core — Game-state and scoring engine.
//!
//! This crate holds the question pool, serves questions without repetition,
//! validates answers, and keeps score under hint penalties. Presentation and
//! input handling live in `quizforge-cli`.

pub mod bank;
pub mod error;
pub mod factory;
pub mod game;
pub mod model;
pub mod parser;
pub mod question;
pub mod rules;
pub mod scoreboard;

pub use bank::QuestionBank;
pub use error::QuizError;
pub use factory::{DefaultQuestionFactory, QuestionFactory};
pub use game::{GameState, QuizGame};
pub use question::{Question, QuestionId, QuestionSnapshot};
pub use rules::GameRules;
pub use scoreboard::Scoreboard;
