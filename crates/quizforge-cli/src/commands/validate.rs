//! The `quizforge validate` command.

use std::path::PathBuf;

use anyhow::Result;

use quizforge_core::parser::{self, Severity};

pub fn execute(questions_path: PathBuf) -> Result<()> {
    let sets = if questions_path.is_dir() {
        parser::load_question_directory(&questions_path)?
    } else {
        vec![parser::parse_question_set(&questions_path)?]
    };

    let mut total_warnings = 0;
    let mut total_errors = 0;

    for set in &sets {
        println!("Question set: {} ({} questions)", set.name, set.questions.len());

        let issues = parser::validate_question_set(set);
        for issue in &issues {
            let prefix = issue
                .question
                .map(|n| format!("  [#{n}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} {}: {}", issue.severity, issue.message);
            match issue.severity {
                Severity::Warning => total_warnings += 1,
                Severity::Error => total_errors += 1,
            }
        }
    }

    if total_warnings == 0 && total_errors == 0 {
        println!("All question sets valid.");
    } else {
        println!("\n{total_errors} error(s), {total_warnings} warning(s) found.");
    }

    anyhow::ensure!(total_errors == 0, "{total_errors} error(s)");
    Ok(())
}
