//! Gordle - CLI
//!
//! Picks a word from the bundled corpus and lets the player guess it on the
//! console. Set `RUST_LOG` to see diagnostics.

use anyhow::{Context, Result};
use clap::Parser;
use gordle::game::{GameConfig, Session};
use gordle::wordlists::read_corpus;
use std::io;

#[derive(Parser)]
#[command(
    name = "gordle",
    about = "Guess the hidden word in 6 attempts, with feedback after every guess",
    version,
    author
)]
struct Cli {}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Load the corpus and play one game on stdin
fn run(config: &GameConfig) -> Result<()> {
    let corpus = read_corpus(&config.corpus_path).context("unable to read corpus")?;

    let mut session = Session::new(io::stdin().lock(), &corpus, config, &mut rand::rng())
        .context("unable to start game")?;

    let outcome = session.play();
    log::debug!("Game over: {outcome:?}");
    Ok(())
}

fn main() {
    let _cli = Cli::parse();
    init_logging();

    // Win, loss and startup failures all exit with status 0
    if let Err(err) = run(&GameConfig::default()) {
        eprintln!("{err:#}");
    }
}
