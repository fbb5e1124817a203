use wordsearch_core::{LetterGrid, Placement, Word};
use wordsearch_generator::{GeneratedPuzzle, PuzzleSeed};

/// One round of play: a grid, its target words, and which of them have been found.
///
/// The found set only grows and is always a subset of the target words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    grid: LetterGrid,
    words: Vec<Word>,
    found: Vec<Word>,
    placements: Vec<Placement>,
    dropped: Vec<Word>,
    seed: Option<PuzzleSeed>,
}

impl Round {
    pub(crate) fn from_puzzle(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            grid,
            words,
            placements,
            dropped,
            seed,
        } = puzzle;
        Self {
            grid,
            words,
            found: Vec::new(),
            placements,
            dropped,
            seed: Some(seed),
        }
    }

    pub(crate) fn from_grid(grid: LetterGrid, words: Vec<Word>, dropped: Vec<Word>) -> Self {
        Self {
            grid,
            words,
            found: Vec::new(),
            placements: Vec::new(),
            dropped,
            seed: None,
        }
    }

    /// Returns the round's letter grid.
    #[must_use]
    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    /// Returns the target words.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Returns the found words, in the order they were found.
    #[must_use]
    pub fn found_words(&self) -> &[Word] {
        &self.found
    }

    /// Returns the target words not found yet.
    pub fn remaining_words(&self) -> impl Iterator<Item = &Word> + '_ {
        self.words.iter().filter(|word| !self.is_found(word))
    }

    /// Returns `true` if `word` is in the found set.
    #[must_use]
    pub fn is_found(&self, word: &Word) -> bool {
        self.found.contains(word)
    }

    /// Returns `true` once every target word has been found.
    ///
    /// A round without target words is never complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.words.is_empty() && self.found.len() == self.words.len()
    }

    /// Returns words that were requested but are not part of this round.
    #[must_use]
    pub fn dropped_words(&self) -> &[Word] {
        &self.dropped
    }

    /// Returns the seed that generated the grid, if it was generated.
    #[must_use]
    pub fn seed(&self) -> Option<PuzzleSeed> {
        self.seed
    }

    pub(crate) fn recorded_placement(&self, word: &Word) -> Option<&Placement> {
        self.placements.iter().find(|p| p.word() == word)
    }

    pub(crate) fn mark_found(&mut self, word: Word) -> bool {
        debug_assert!(self.words.contains(&word));
        if self.is_found(&word) {
            return false;
        }
        self.found.push(word);
        true
    }
}
