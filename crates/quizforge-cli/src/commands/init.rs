//! The `quizforge init` command.

use std::path::Path;

use anyhow::Result;

use quizforge_core::model::QuestionSet;
use quizforge_core::parser::question_set_to_toml;

const SAMPLE_PATH: &str = "quiz.toml";

pub fn execute() -> Result<()> {
    let path = Path::new(SAMPLE_PATH);
    if path.exists() {
        println!("{SAMPLE_PATH} already exists, skipping.");
    } else {
        std::fs::write(path, question_set_to_toml(&QuestionSet::sample())?)?;
        println!("Created {SAMPLE_PATH}");
    }

    println!("\nNext steps:");
    println!("  1. Edit {SAMPLE_PATH} to add your own questions");
    println!("  2. Run: quizforge validate --questions {SAMPLE_PATH}");
    println!("  3. Run: quizforge play --questions {SAMPLE_PATH}");

    Ok(())
}
