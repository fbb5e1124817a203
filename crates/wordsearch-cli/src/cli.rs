//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use wordsearch_core::DirectionSet;
use wordsearch_generator::PuzzleSeed;

use crate::config::{self, Config, ConfigError, VocabularyConfig};

/// Play word search in the terminal.
///
/// Settings come from the config file when one is given; flags override them.
#[derive(Debug, Default, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// JSON config file.
    #[arg(long, short, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Grid side length, at most 64.
    #[arg(long, value_name = "N", value_parser = parse_size)]
    pub size: Option<usize>,

    /// Allowed directions: `all`, `legacy-six`, `orthogonal`, or a comma list.
    #[arg(long, value_name = "DIRECTIONS")]
    pub directions: Option<DirectionSet>,

    /// Also accept words selected from their last letter to their first.
    #[arg(long)]
    pub reverse: bool,

    /// Round countdown in seconds.
    #[arg(long, value_name = "SECS", conflicts_with = "no_time_limit")]
    pub time_limit: Option<u64>,

    /// Play without a countdown.
    #[arg(long)]
    pub no_time_limit: bool,

    /// Word-list file with one word per line; may be repeated.
    #[arg(long = "word-list", value_name = "FILE")]
    pub word_lists: Vec<PathBuf>,

    /// Seed of the first round as 64 hex digits.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    pub seed: Option<PuzzleSeed>,

    /// Phrase to derive the first round's seed from.
    #[arg(long, value_name = "TEXT")]
    pub phrase: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    /// Loads the config file, if any, and applies the flag overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        self.apply(&mut config);
        Ok(config)
    }

    /// Overrides `config` with the flags that were given.
    pub fn apply(&self, config: &mut Config) {
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(directions) = self.directions {
            config.directions = directions.to_string();
        }
        if self.reverse {
            config.allow_reverse_match = true;
        }
        if self.no_time_limit {
            config.time_limit_secs = None;
        } else if let Some(secs) = self.time_limit {
            config.time_limit_secs = Some(secs);
        }
        if !self.word_lists.is_empty() {
            config.vocabulary = VocabularyConfig::Themed {
                lists: Vec::new(),
                files: self.word_lists.clone(),
            };
        }
    }

    /// Returns the seed requested for the first round.
    #[must_use]
    pub fn seed(&self) -> Option<PuzzleSeed> {
        self.seed
            .or_else(|| self.phrase.as_deref().map(PuzzleSeed::from_phrase))
    }
}

fn parse_size(s: &str) -> Result<usize, String> {
    let size = s.parse::<usize>().map_err(|err| err.to_string())?;
    config::check_size(size).map_err(|err| err.to_string())
}
