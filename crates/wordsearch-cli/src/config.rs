//! JSON game configuration.

use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};
use wordsearch_core::{DirectionSet, ParseDirectionError, Word, WordError};
use wordsearch_game::{MatchPolicy, SessionOptions};
use wordsearch_generator::{PuzzleGenerator, Vocabulary, VocabularyError, WordList};

/// Settings for a game, as stored in a config file.
///
/// Every field is optional in the file; missing fields take their defaults.
///
/// ```json
/// {
///   "size": 15,
///   "directions": "legacy-six",
///   "allow_reverse_match": true,
///   "time_limit_secs": null,
///   "vocabulary": { "kind": "themed", "files": ["planets.txt"] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub size: usize,
    /// `all`, `legacy-six`, `orthogonal`, or a comma-separated direction list.
    pub directions: String,
    pub allow_reverse_match: bool,
    /// Round countdown in seconds; `null` disables it.
    pub time_limit_secs: Option<u64>,
    pub retry_budget: usize,
    pub vocabulary: VocabularyConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: PuzzleGenerator::DEFAULT_SIZE,
            directions: "all".to_owned(),
            allow_reverse_match: false,
            time_limit_secs: Some(SessionOptions::CLASSIC_TIME_LIMIT.as_secs()),
            retry_budget: PuzzleGenerator::DEFAULT_RETRY_BUDGET,
            vocabulary: VocabularyConfig::default(),
        }
    }
}

/// Where round words come from.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum VocabularyConfig {
    /// The built-in themed lists.
    #[default]
    Builtin,
    /// A random sample of `count` words from `words`.
    Sample {
        words: Vec<String>,
        #[serde(default = "default_sample_count")]
        count: usize,
    },
    /// One list per round, chosen at random.
    Themed {
        #[serde(default)]
        lists: Vec<WordListConfig>,
        /// Word-list files with one word per line.
        #[serde(default)]
        files: Vec<PathBuf>,
    },
}

fn default_sample_count() -> usize {
    Vocabulary::DEFAULT_SAMPLE_COUNT
}

/// An inline word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordListConfig {
    pub name: String,
    pub words: Vec<String>,
}

/// Errors raised while loading or applying a [`Config`].
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[display("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[display("cannot serialize config: {source}")]
    Serialize { source: serde_json::Error },
    #[display("grid size must be at least 1")]
    ZeroSize,
    #[display("grid size {size} exceeds the maximum of {max}")]
    SizeTooLarge { size: usize, max: usize },
    #[display("invalid directions: {source}")]
    Directions { source: ParseDirectionError },
    #[display("invalid word {word:?} in list {list:?}: {source}")]
    Word {
        list: String,
        word: String,
        source: WordError,
    },
    #[display("word list {}: {source}", path.display())]
    WordList {
        path: PathBuf,
        source: VocabularyError,
    },
    #[display("vocabulary has no words")]
    EmptyVocabulary,
}

impl Config {
    /// Reads a config file.
    ///
    /// Relative word-list paths are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        let mut config = Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })?;
        if let (VocabularyConfig::Themed { files, .. }, Some(base)) =
            (&mut config.vocabulary, path.parent())
        {
            for file in files.iter_mut().filter(|file| file.is_relative()) {
                *file = base.join(&*file);
            }
        }
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Renders the config as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|source| ConfigError::Serialize { source })
    }

    #[must_use]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_secs.map(Duration::from_secs)
    }

    /// Builds the session options this config describes.
    pub fn session_options(&self) -> Result<SessionOptions, ConfigError> {
        check_size(self.size)?;
        let directions: DirectionSet = self
            .directions
            .parse()
            .map_err(|source| ConfigError::Directions { source })?;
        let generator = PuzzleGenerator::new(self.size)
            .with_directions(directions)
            .with_retry_budget(self.retry_budget);
        Ok(SessionOptions::default()
            .generator(generator)
            .match_policy(MatchPolicy::from_allow_reverse(self.allow_reverse_match))
            .time_limit(self.time_limit()))
    }

    /// Builds the vocabulary this config describes, reading any word-list files.
    pub fn vocabulary(&self) -> Result<Vocabulary, ConfigError> {
        match &self.vocabulary {
            VocabularyConfig::Builtin => Ok(Vocabulary::builtin()),
            VocabularyConfig::Sample { words, count } => {
                let words = parse_words("sample", words)?;
                if words.is_empty() || *count == 0 {
                    return Err(ConfigError::EmptyVocabulary);
                }
                Ok(Vocabulary::Sample {
                    words,
                    count: *count,
                })
            }
            VocabularyConfig::Themed { lists, files } => {
                let mut loaded = Vec::with_capacity(lists.len() + files.len());
                for list in lists {
                    let words = parse_words(&list.name, &list.words)?;
                    loaded.push(WordList::new(list.name.clone(), words));
                }
                for path in files {
                    loaded.push(load_word_list(path)?);
                }
                loaded.retain(|list| {
                    let keep = !list.words().is_empty();
                    if !keep {
                        log::warn!("ignoring empty word list {:?}", list.name());
                    }
                    keep
                });
                if loaded.is_empty() {
                    return Err(ConfigError::EmptyVocabulary);
                }
                Ok(Vocabulary::Themed { lists: loaded })
            }
        }
    }
}

/// Checks that `size` is a supported grid side length.
pub fn check_size(size: usize) -> Result<usize, ConfigError> {
    match size {
        0 => Err(ConfigError::ZeroSize),
        size if size > PuzzleGenerator::MAX_SIZE => Err(ConfigError::SizeTooLarge {
            size,
            max: PuzzleGenerator::MAX_SIZE,
        }),
        size => Ok(size),
    }
}

fn parse_words(list: &str, words: &[String]) -> Result<Vec<Word>, ConfigError> {
    words
        .iter()
        .map(|word| {
            Word::new(word).map_err(|source| ConfigError::Word {
                list: list.to_owned(),
                word: word.clone(),
                source,
            })
        })
        .collect()
}

fn load_word_list(path: &Path) -> Result<WordList, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_owned(),
        source,
    })?;
    let name = path
        .file_stem()
        .map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().into_owned());
    let list = WordList::parse(name, &text).map_err(|source| ConfigError::WordList {
        path: path.to_owned(),
        source,
    })?;
    log::debug!("loaded {} words from {}", list.words().len(), path.display());
    Ok(list)
}
