//! TOML question-set parser.
//!
//! Loads question sets from TOML files and directories, validates them, and
//! writes them back out.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{QuestionSet, QuestionSpec};
use crate::rules::GameRules;

/// On-disk layout of a question-set file.
#[derive(Debug, Serialize, Deserialize)]
struct TomlQuizFile {
    quiz: TomlQuizHeader,
    #[serde(default)]
    rules: GameRules,
    #[serde(default)]
    questions: Vec<QuestionSpec>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TomlQuizHeader {
    name: String,
    #[serde(default)]
    description: String,
}

/// Parse a single TOML file into a `QuestionSet`.
pub fn parse_question_set(path: &Path) -> Result<QuestionSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question set file: {}", path.display()))?;

    parse_question_set_str(&content, path)
}

/// Parse a TOML string into a `QuestionSet` (useful for testing).
pub fn parse_question_set_str(content: &str, source_path: &Path) -> Result<QuestionSet> {
    let parsed: TomlQuizFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    Ok(QuestionSet {
        name: parsed.quiz.name,
        description: parsed.quiz.description,
        rules: parsed.rules,
        questions: parsed.questions,
    })
}

/// Render a `QuestionSet` in the same layout `parse_question_set_str` reads.
pub fn question_set_to_toml(set: &QuestionSet) -> Result<String> {
    let file = TomlQuizFile {
        quiz: TomlQuizHeader {
            name: set.name.clone(),
            description: set.description.clone(),
        },
        rules: set.rules,
        questions: set.questions.clone(),
    };
    toml::to_string_pretty(&file).context("failed to serialize question set")
}

/// Recursively load all `.toml` question-set files from a directory.
pub fn load_question_directory(dir: &Path) -> Result<Vec<QuestionSet>> {
    let mut sets = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            sets.extend(load_question_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_question_set(&path) {
                Ok(set) => sets.push(set),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(sets)
}

/// How bad a validation finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The set loads, but something looks off.
    Warning,
    /// The set cannot be turned into a game as written.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "WARNING"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// A finding from question-set validation.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// 1-based question number (if applicable).
    pub question: Option<usize>,
    pub severity: Severity,
    /// Issue message.
    pub message: String,
}

/// Validate a question set for common issues.
pub fn validate_question_set(set: &QuestionSet) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut push = |question: Option<usize>, severity, message: String| {
        issues.push(ValidationIssue {
            question,
            severity,
            message,
        })
    };

    let rules = &set.rules;
    if rules.max_hints == 0 {
        push(None, Severity::Error, "rules.max_hints must be at least 1".into());
    }
    if rules.hint_penalty < 0 {
        push(
            None,
            Severity::Warning,
            "rules.hint_penalty is negative, hints will raise the score".into(),
        );
    }
    if rules.hint_floor > rules.correct_answer_reward {
        push(
            None,
            Severity::Warning,
            "rules.hint_floor is above rules.correct_answer_reward".into(),
        );
    }

    if set.questions.is_empty() {
        push(None, Severity::Warning, "question set has no questions".into());
    }

    let mut seen_text = HashSet::new();
    for (i, q) in set.questions.iter().enumerate() {
        let n = Some(i + 1);

        if q.text.trim().is_empty() {
            push(n, Severity::Error, "question text is empty".into());
        } else if !seen_text.insert(q.text.trim()) {
            push(n, Severity::Warning, format!("duplicate question text: {}", q.text));
        }

        if q.options.len() < 2 {
            push(
                n,
                Severity::Error,
                format!("needs at least 2 options, has {}", q.options.len()),
            );
        }

        let mut seen_options = HashSet::new();
        for option in &q.options {
            if !seen_options.insert(option.as_str()) {
                push(n, Severity::Error, format!("duplicate option: {option}"));
            }
        }

        if !q.options.contains(&q.answer) {
            push(
                n,
                Severity::Error,
                format!("answer \"{}\" is not one of the options", q.answer),
            );
        }

        if q.hints.is_empty() {
            push(n, Severity::Warning, "question has no hints".into());
        } else if q.hints.len() > rules.max_hints as usize {
            push(
                n,
                Severity::Warning,
                format!(
                    "has {} hints but only {} can be requested per game",
                    q.hints.len(),
                    rules.max_hints
                ),
            );
        }
    }

    issues
}
