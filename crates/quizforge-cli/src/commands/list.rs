//! The `quizforge list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizforge_core::parser;

pub fn execute(questions_path: PathBuf) -> Result<()> {
    let set = parser::parse_question_set(&questions_path)?;

    println!("{}", set.name);
    if !set.description.is_empty() {
        println!("{}", set.description);
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Options", "Hints"]);

    for (i, q) in set.questions.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&q.text),
            Cell::new(q.options.join(" / ")),
            Cell::new(q.hints.len()),
        ]);
    }

    println!("{table}");
    println!(
        "Rules: {} points per correct answer, -{} per hint (floor {}), {} hints per game",
        set.rules.correct_answer_reward,
        set.rules.hint_penalty,
        set.rules.hint_floor,
        set.rules.max_hints
    );

    Ok(())
}
