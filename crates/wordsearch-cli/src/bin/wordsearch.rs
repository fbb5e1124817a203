//! Word search in the terminal.

use std::process::ExitCode;

use clap::Parser as _;
use wordsearch_cli::cli::Args;

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match wordsearch_cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{err:?}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
