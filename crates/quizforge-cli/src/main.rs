//! quizforge CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod console;

#[derive(Parser)]
#[command(name = "quizforge", version, about = "Single-player trivia game")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a question set interactively
    Play {
        /// Path to .toml question set
        #[arg(long)]
        questions: PathBuf,

        /// Seed for reproducible question order
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Validate question set TOML files
    Validate {
        /// Path to question set file or directory
        #[arg(long)]
        questions: PathBuf,
    },

    /// List the questions in a set (answers stay hidden)
    List {
        /// Path to .toml question set
        #[arg(long)]
        questions: PathBuf,
    },

    /// Create an example question set
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizforge=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { questions, seed } => commands::play::execute(questions, seed),
        Commands::Validate { questions } => commands::validate::execute(questions),
        Commands::List { questions } => commands::list::execute(questions),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
