//! Spelling Bee Solver - CLI
//!
//! Takes the seven puzzle letters (center letter first) and prints every
//! dictionary word they can spell, shortest first.

use anyhow::{Context, Result};
use bee_solver::{
    core::LetterSet,
    dictionary::{Trie, loader},
    output::print_results,
    solver::Solver,
};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "bee_solver",
    about = "Solve the NYT Spelling Bee: find every word spellable from seven letters",
    version,
    author
)]
struct Cli {
    /// The seven letters in the hive; the first is the center letter
    #[arg(value_name = "LETTER", num_args = 7, required = true)]
    letters: Vec<String>,

    /// Dictionary file (one word per line); defaults to the embedded word list
    #[arg(short = 'd', long, value_name = "PATH")]
    dictionary: Option<PathBuf>,

    /// Search the seven starting letters on separate threads
    #[arg(short, long)]
    parallel: bool,

    /// Print a summary around the word list
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let letters = LetterSet::from_tokens(&cli.letters)?;
    let trie = load_dictionary(cli.dictionary.as_deref())?;

    let solver = Solver::new(&trie);
    let words = if cli.parallel {
        solver.solve_parallel(&letters)
    } else {
        solver.solve(&letters)
    };

    print_results(&letters, &words, cli.verbose);
    Ok(())
}

/// Build the trie from the given file, or from the embedded list
fn load_dictionary(path: Option<&Path>) -> Result<Trie> {
    match path {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("Failed to read dictionary {}", path.display())),
        None => Ok(loader::load_embedded()),
    }
}
