//! The `quizforge play` command.
//!
//! Drives one game from a line-oriented input: each line is mapped to an
//! action, the action to an engine call, and engine errors to messages.
//! Errors never end the session; only quit or end of input do.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use quizforge_core::parser::{self, Severity};
use quizforge_core::{QuestionBank, QuizError, QuizGame};

use crate::console::{parse_action, render_question, Action, HELP};

pub fn execute(questions_path: PathBuf, seed: Option<u64>) -> Result<()> {
    let set = parser::parse_question_set(&questions_path)?;

    let errors = parser::validate_question_set(&set)
        .into_iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    anyhow::ensure!(
        errors == 0,
        "question set has {errors} error(s), run `quizforge validate` for details"
    );

    let bank = match seed {
        Some(seed) => QuestionBank::with_seed(seed),
        None => QuestionBank::new(),
    };
    let game = set.build_game(bank)?;
    tracing::info!(set = %set.name, questions = game.bank().len(), "starting game");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(game, stdin.lock(), stdout.lock());
    writeln!(session.out, "{}", set.name)?;
    session.run()
}

/// One interactive game over an input and an output stream.
pub struct Session<R, W> {
    game: QuizGame,
    input: R,
    out: W,
    question_number: usize,
    awaiting_answer: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: QuizGame, input: R, out: W) -> Self {
        Self {
            game,
            input,
            out,
            question_number: 0,
            awaiting_answer: false,
        }
    }

    /// Play until quit or end of input, then print the final score.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "{HELP}")?;
        self.advance()?;

        let mut line = String::new();
        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.out)?;
                break;
            }

            match parse_action(&line) {
                Action::Quit => break,
                Action::Hint => self.hint()?,
                Action::Next => self.advance()?,
                Action::Answer(n) => self.answer(n)?,
                Action::Restart => {
                    self.game.restart();
                    self.question_number = 0;
                    writeln!(self.out, "Game restarted.")?;
                    self.advance()?;
                }
                Action::Unknown(raw) => {
                    writeln!(self.out, "Unknown command: {raw:?}")?;
                    writeln!(self.out, "{HELP}")?;
                }
            }
        }

        writeln!(self.out, "Final score: {}", self.game.score())?;
        Ok(())
    }

    fn advance(&mut self) -> Result<()> {
        match self.game.next_question() {
            Ok(question) => {
                self.question_number += 1;
                self.awaiting_answer = true;
                render_question(&mut self.out, self.question_number, &question)?;
            }
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn answer(&mut self, choice: usize) -> Result<()> {
        if !self.awaiting_answer && self.game.is_game_over() {
            return self.announce_game_over();
        }

        let Some(current) = self.game.current_question() else {
            return self.report(&QuizError::NoCurrentQuestion);
        };
        // Option texts may themselves be numbers, so an out-of-range choice
        // must never reach the engine as an answer.
        let submitted = match choice.checked_sub(1).and_then(|i| current.options.get(i)) {
            Some(option) => option.clone(),
            None => {
                return self.report(&QuizError::InvalidAnswer {
                    answer: choice.to_string(),
                    options: current.options.clone(),
                })
            }
        };

        match self.game.check_answer(&submitted) {
            Ok(true) => writeln!(self.out, "Correct! Score: {}", self.game.score())?,
            Ok(false) => writeln!(self.out, "Wrong. Score: {}", self.game.score())?,
            Err(e) => return self.report(&e),
        }

        self.awaiting_answer = false;
        if self.game.is_game_over() {
            self.announce_game_over()
        } else {
            self.advance()
        }
    }

    fn hint(&mut self) -> Result<()> {
        if !self.awaiting_answer && self.game.is_game_over() {
            return self.announce_game_over();
        }

        match self.game.request_hint() {
            Ok(hint) => {
                writeln!(self.out, "Hint: {hint}")?;
                writeln!(
                    self.out,
                    "Score: {} ({} hint(s) left this game)",
                    self.game.score(),
                    self.game.hints_remaining()
                )?;
                Ok(())
            }
            Err(e) => self.report(&e),
        }
    }

    fn report(&mut self, e: &QuizError) -> Result<()> {
        tracing::debug!(error = %e, "action rejected");
        writeln!(self.out, "Error: {e}")?;
        if e.is_terminal() {
            self.announce_game_over()?;
        }
        Ok(())
    }

    fn announce_game_over(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "Game over! Final score: {}. Type 'restart' to play again or 'quit' to exit.",
            self.game.score()
        )?;
        Ok(())
    }
}
