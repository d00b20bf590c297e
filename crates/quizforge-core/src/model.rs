//! Question-set data model.
//!
//! These are the plain data types a question set is authored in. They carry
//! the correct answer in the clear; it only becomes hidden once the data is
//! turned into [`Question`](crate::question::Question)s inside a bank.

use serde::{Deserialize, Serialize};

use crate::bank::QuestionBank;
use crate::error::QuizError;
use crate::game::QuizGame;
use crate::rules::GameRules;
use crate::scoreboard::Scoreboard;

/// Raw field data for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSpec {
    /// The question text shown to the player.
    pub text: String,
    /// Options in display order.
    pub options: Vec<String>,
    /// Must equal one of `options`.
    pub answer: String,
    /// Hints in the order they are handed out.
    #[serde(default)]
    pub hints: Vec<String>,
}

/// A named collection of questions with the rules to play them under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionSet {
    /// Human-readable name.
    pub name: String,
    /// Description of this set.
    #[serde(default)]
    pub description: String,
    /// Scoring and hint rules.
    #[serde(default)]
    pub rules: GameRules,
    /// The questions in this set.
    #[serde(default)]
    pub questions: Vec<QuestionSpec>,
}

impl QuestionSet {
    /// Load every question into `bank` and wrap it in a game with this
    /// set's rules. Stops at the first question that fails construction.
    pub fn build_game(&self, mut bank: QuestionBank) -> Result<QuizGame, QuizError> {
        for q in &self.questions {
            bank.add_question(
                q.text.clone(),
                q.options.clone(),
                q.answer.clone(),
                q.hints.clone(),
            )?;
        }
        tracing::debug!(set = %self.name, questions = bank.len(), "question set loaded");
        Ok(QuizGame::with_rules(bank, Scoreboard::new(), self.rules))
    }

    /// A small built-in set, handy for demos and first runs.
    pub fn sample() -> Self {
        Self {
            name: "Web Basics".into(),
            description: "A couple of warm-up questions about JavaScript and HTTP".into(),
            rules: GameRules::default(),
            questions: vec![
                QuestionSpec {
                    text: "What does the term \"hoisting\" mean in JavaScript?".into(),
                    options: vec![
                        "Variable declaration".into(),
                        "Loop optimization".into(),
                        "Runtime scope".into(),
                    ],
                    answer: "Variable declaration".into(),
                    hints: vec![
                        "It describes a default behavior of JavaScript interpreters.".into(),
                        "It applies to var and function declarations but not to let and const."
                            .into(),
                        "It makes variables accessible before initialization.".into(),
                        "It moves declarations to the top of their scope.".into(),
                    ],
                },
                QuestionSpec {
                    text: "Which HTTP status code is used when a resource is successfully created?"
                        .into(),
                    options: vec!["200".into(), "201".into(), "204".into()],
                    answer: "201".into(),
                    hints: vec![
                        "It signals that a new resource, such as a database entry, now exists."
                            .into(),
                        "REST APIs commonly return it for resource creation.".into(),
                        "It usually answers a POST request.".into(),
                        "It lies between 200 OK and 204 No Content.".into(),
                    ],
                },
            ],
        }
    }
}
