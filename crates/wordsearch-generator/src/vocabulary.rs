//! Master vocabularies and per-round word-set selection.

use std::collections::HashSet;

use rand::{
    Rng,
    seq::{IndexedRandom as _, SliceRandom as _},
};
use wordsearch_core::Word;

use crate::VocabularyError;

/// A named, pre-authored list of words sharing a theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    name: String,
    words: Vec<Word>,
}

impl WordList {
    /// Creates a word list.
    #[must_use]
    pub fn new(name: impl Into<String>, words: Vec<Word>) -> Self {
        Self {
            name: name.into(),
            words,
        }
    }

    /// Parses a word list from text with one word per line.
    ///
    /// Blank lines and lines starting with `#` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`VocabularyError::InvalidWord`] for the first line that is not a
    /// valid word.
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self, VocabularyError> {
        let words = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
            .map(|(line, text)| {
                Word::new(text).map_err(|source| VocabularyError::InvalidWord { line, source })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self::new(name, words))
    }

    /// Returns the theme name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the words in authored order.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

/// The source a round's word set is drawn from.
///
/// # Examples
///
/// ```
/// use wordsearch_generator::{PuzzleSeed, Vocabulary};
///
/// let vocabulary = Vocabulary::builtin();
/// let mut rng = PuzzleSeed::from_phrase("example").rng();
/// let words = vocabulary.choose_word_set(&mut rng);
/// assert!((10..=12).contains(&words.len()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Vocabulary {
    /// A fixed-size random subsample of one master list.
    Sample {
        /// The master list.
        words: Vec<Word>,
        /// Number of words drawn per round.
        count: usize,
    },
    /// Complete pre-authored lists, one chosen at random per round.
    Themed {
        /// The candidate lists.
        lists: Vec<WordList>,
    },
}

impl Vocabulary {
    /// Default number of words drawn by [`Vocabulary::Sample`].
    pub const DEFAULT_SAMPLE_COUNT: usize = 10;

    /// Returns the built-in themed lists.
    #[must_use]
    pub fn builtin() -> Self {
        Self::Themed {
            lists: vec![
                builtin_list("bible", BIBLE),
                builtin_list("animals", ANIMALS),
                builtin_list("fruits", FRUITS),
            ],
        }
    }

    /// Chooses the word set for one round.
    ///
    /// Duplicate words are removed; the result may be empty if the vocabulary is.
    pub fn choose_word_set<R>(&self, rng: &mut R) -> Vec<Word>
    where
        R: Rng + ?Sized,
    {
        match self {
            Self::Sample { words, count } => {
                let mut words = dedup(words);
                words.shuffle(rng);
                words.truncate(*count);
                words
            }
            Self::Themed { lists } => lists
                .choose(rng)
                .map(|list| {
                    log::debug!("chose word list {:?}", list.name());
                    dedup(list.words())
                })
                .unwrap_or_default(),
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

pub(crate) fn dedup(words: &[Word]) -> Vec<Word> {
    let mut seen = HashSet::new();
    words
        .iter()
        .filter(|word| seen.insert(word.as_str()))
        .cloned()
        .collect()
}

const BIBLE: &[&str] = &[
    "ABRAAO", "MOISES", "DAVID", "GOLIAS", "ESTER", "RUTE", "NOE", "PAULO", "PEDRO", "JESUS",
];

const ANIMALS: &[&str] = &[
    "TIGER", "LION", "ZEBRA", "GIRAFFE", "MONKEY", "RABBIT", "TURTLE", "EAGLE", "SHARK", "WHALE",
    "PANDA", "OTTER",
];

const FRUITS: &[&str] = &[
    "APPLE", "BANANA", "CHERRY", "GRAPE", "LEMON", "MANGO", "ORANGE", "PAPAYA", "PEACH", "PEAR",
    "PLUM",
];

fn builtin_list(name: &str, words: &[&str]) -> WordList {
    WordList::new(
        name,
        words.iter().filter_map(|word| Word::new(word).ok()).collect(),
    )
}
