//! Terminal front end for the word-search game.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

use std::io;

use wordsearch_game::Session;
use wordsearch_generator::PuzzleSeed;

use self::{cli::Args, config::ConfigError};

pub mod cli;
pub mod config;
pub mod play;
pub mod render;

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CliError {
    #[display("{source}")]
    Config { source: ConfigError },
    #[display("I/O error: {source}")]
    Io { source: io::Error },
}

/// Runs the game described by `args` on standard input and output.
pub fn run(args: &Args) -> Result<(), CliError> {
    let config = args.load_config()?;
    if args.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let vocabulary = config.vocabulary()?;
    let mut session = Session::new(config.session_options()?);
    let seed = args.seed().unwrap_or_else(PuzzleSeed::random);
    session.start_round_with_seed(&vocabulary, seed);

    play::play(
        &mut session,
        &vocabulary,
        io::stdin().lock(),
        io::stdout().lock(),
    )?;
    Ok(())
}
