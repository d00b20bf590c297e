//! The question pool and its served/unserved partition.

use std::collections::{HashMap, HashSet};
use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::QuizError;
use crate::factory::{DefaultQuestionFactory, QuestionFactory};
use crate::question::{Question, QuestionId};

/// All known questions for one game, plus which of them were served since
/// the last reset.
///
/// Membership is by [`QuestionId`], never by field equality. `served` is
/// always a subset of the stored questions. `order` keeps insertion order so
/// seeded draws are reproducible.
pub struct QuestionBank {
    questions: HashMap<QuestionId, Question>,
    order: Vec<QuestionId>,
    served: HashSet<QuestionId>,
    factory: Box<dyn QuestionFactory>,
    rng: StdRng,
}

impl QuestionBank {
    /// An empty bank with an entropy-seeded RNG and the default factory.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// An empty bank whose draws are reproducible for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            questions: HashMap::new(),
            order: Vec::new(),
            served: HashSet::new(),
            factory: Box::new(DefaultQuestionFactory),
            rng,
        }
    }

    /// Replace the construction policy used by [`QuestionBank::add_question`].
    pub fn with_factory(mut self, factory: Box<dyn QuestionFactory>) -> Self {
        self.factory = factory;
        self
    }

    /// Build a question through the factory and add it.
    pub fn add_question(
        &mut self,
        text: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
        hints: Vec<String>,
    ) -> Result<QuestionId, QuizError> {
        let question =
            self.factory
                .create_question(text.into(), options, correct_answer.into(), hints)?;
        self.insert(question)
    }

    /// Add an already-built question. Fails if its identity is present.
    pub fn insert(&mut self, question: Question) -> Result<QuestionId, QuizError> {
        let id = question.id();
        if self.contains(id) {
            return Err(QuizError::DuplicateQuestion(id));
        }
        tracing::debug!(%id, text = question.text(), "question added to bank");
        self.order.push(id);
        self.questions.insert(id, question);
        Ok(id)
    }

    /// Remove a question by identity and hand it back.
    pub fn remove_question(&mut self, id: QuestionId) -> Result<Question, QuizError> {
        let question = self
            .questions
            .remove(&id)
            .ok_or(QuizError::QuestionNotFound(id))?;
        self.order.retain(|other| *other != id);
        self.served.remove(&id);
        tracing::debug!(%id, "question removed from bank");
        Ok(question)
    }

    /// Pick one unserved question uniformly at random and mark it served.
    pub fn random_question(&mut self) -> Result<&Question, QuizError> {
        let unserved: Vec<QuestionId> = self
            .order
            .iter()
            .filter(|id| !self.served.contains(id))
            .copied()
            .collect();

        let &id = unserved
            .choose(&mut self.rng)
            .ok_or(QuizError::NoMoreQuestions)?;

        self.served.insert(id);
        tracing::debug!(%id, remaining = unserved.len() - 1, "question drawn");
        self.questions.get(&id).ok_or(QuizError::QuestionNotFound(id))
    }

    pub fn has_more_questions(&self) -> bool {
        self.remaining() > 0
    }

    /// Make every question eligible again. Hint state on the questions
    /// themselves is left alone.
    pub fn reset_attempted_questions(&mut self) {
        self.served.clear();
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.get(&id)
    }

    pub fn get_mut(&mut self, id: QuestionId) -> Option<&mut Question> {
        self.questions.get_mut(&id)
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.questions.contains_key(&id)
    }

    pub fn is_served(&self, id: QuestionId) -> bool {
        self.served.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Number of questions not yet served.
    pub fn remaining(&self) -> usize {
        self.questions.len() - self.served.len()
    }

    /// Questions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.order.iter().filter_map(|id| self.questions.get(id))
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for QuestionBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuestionBank")
            .field("questions", &self.iter().collect::<Vec<_>>())
            .field("served", &self.served.len())
            .finish_non_exhaustive()
    }
}
