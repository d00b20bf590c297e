//! The quiz state machine.
//!
//! A game moves from [`GameState::Playing`] to [`GameState::GameOver`] when
//! its last unserved question is handed out, and only [`QuizGame::restart`]
//! brings it back. Answers and hints are always evaluated against the
//! current question, including the last one after the terminal transition.

use crate::bank::QuestionBank;
use crate::error::QuizError;
use crate::question::{Question, QuestionId, QuestionSnapshot};
use crate::rules::GameRules;
use crate::scoreboard::Scoreboard;

/// Where a game is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    GameOver,
}

/// One single-player game: owns its bank and scoreboard exclusively.
#[derive(Debug)]
pub struct QuizGame {
    bank: QuestionBank,
    scoreboard: Scoreboard,
    rules: GameRules,
    current: Option<QuestionId>,
    state: GameState,
    hints_used: u32,
}

impl QuizGame {
    /// A game with the default rules.
    pub fn new(bank: QuestionBank, scoreboard: Scoreboard) -> Self {
        Self::with_rules(bank, scoreboard, GameRules::default())
    }

    pub fn with_rules(bank: QuestionBank, scoreboard: Scoreboard, rules: GameRules) -> Self {
        Self {
            bank,
            scoreboard,
            rules,
            current: None,
            state: GameState::Playing,
            hints_used: 0,
        }
    }

    /// Add a question to the bank. Not allowed once the game is over, since
    /// a terminal game must have nothing left to serve.
    pub fn add_question(
        &mut self,
        text: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
        hints: Vec<String>,
    ) -> Result<QuestionId, QuizError> {
        if self.is_game_over() {
            return Err(QuizError::GameOver);
        }
        self.bank.add_question(text, options, correct_answer, hints)
    }

    /// Remove a question from the bank. Removing the current question
    /// leaves the game without one.
    pub fn remove_question(&mut self, id: QuestionId) -> Result<Question, QuizError> {
        let removed = self.bank.remove_question(id)?;
        if self.current == Some(id) {
            self.current = None;
        }
        Ok(removed)
    }

    /// Serve the next random unserved question and make it current.
    pub fn next_question(&mut self) -> Result<QuestionSnapshot, QuizError> {
        if self.is_game_over() {
            return Err(QuizError::GameOver);
        }

        let question = self.bank.random_question()?;
        let snapshot = question.snapshot();
        self.current = Some(snapshot.id);

        if !self.bank.has_more_questions() {
            self.state = GameState::GameOver;
            tracing::info!(score = self.scoreboard.score(), "last question served, game over");
        }

        Ok(snapshot)
    }

    /// Snapshot of the current question, if any.
    pub fn current_question(&self) -> Option<QuestionSnapshot> {
        self.current
            .and_then(|id| self.bank.get(id))
            .map(Question::snapshot)
    }

    /// Check `submitted` against the current question; a correct answer
    /// earns the configured reward.
    pub fn check_answer(&mut self, submitted: &str) -> Result<bool, QuizError> {
        let correct = self.current_ref()?.check_answer(submitted)?;
        if correct {
            self.scoreboard.increase_score(self.rules.correct_answer_reward);
        }
        tracing::debug!(correct, score = self.scoreboard.score(), "answer checked");
        Ok(correct)
    }

    /// Hand out the current question's next hint and recompute the score.
    ///
    /// The score is zeroed and set to the hint-adjusted reward for the hints
    /// used so far, so earlier points do not survive a hint request.
    pub fn request_hint(&mut self) -> Result<String, QuizError> {
        let id = self.current.ok_or(QuizError::NoCurrentQuestion)?;
        if self.hints_used >= self.rules.max_hints {
            return Err(QuizError::MaxHintsLimit {
                limit: self.rules.max_hints,
            });
        }

        self.hints_used += 1;
        let hint = self
            .bank
            .get_mut(id)
            .ok_or(QuizError::NoCurrentQuestion)?
            .next_hint()?
            .to_string();

        let reward = self.rules.reward_for_hints(self.hints_used);
        self.scoreboard.reset_score();
        self.scoreboard.increase_score(reward);
        tracing::debug!(hints_used = self.hints_used, score = reward, "hint served");
        Ok(hint)
    }

    pub fn score(&self) -> i64 {
        self.scoreboard.score()
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    /// Hints left in this game's budget.
    pub fn hints_remaining(&self) -> u32 {
        self.rules.max_hints.saturating_sub(self.hints_used)
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Back to a fresh game over the same questions.
    pub fn restart(&mut self) {
        self.state = GameState::Playing;
        self.scoreboard.reset_score();
        self.current = None;
        self.hints_used = 0;
        self.bank.reset_attempted_questions();
        tracing::info!(questions = self.bank.len(), "game restarted");
    }

    fn current_ref(&self) -> Result<&Question, QuizError> {
        self.current
            .and_then(|id| self.bank.get(id))
            .ok_or(QuizError::NoCurrentQuestion)
    }
}
