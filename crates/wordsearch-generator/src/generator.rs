use rand::{Rng, seq::SliceRandom as _};
use wordsearch_core::{
    ALPHABET, Direction, DirectionSet, DraftGrid, LetterGrid, Placement, Position, Word,
};

use crate::{PuzzleSeed, Vocabulary, vocabulary};

/// A puzzle produced by [`PuzzleGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The completed grid.
    pub grid: LetterGrid,
    /// The placed words, in word-set order. These are the round's targets.
    pub words: Vec<Word>,
    /// Where each placed word was written, in placement order.
    pub placements: Vec<Placement>,
    /// Words dropped because no placement was found within the retry budget.
    pub dropped: Vec<Word>,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

impl GeneratedPuzzle {
    /// Returns the placement recorded for `word`.
    #[must_use]
    pub fn placement_of(&self, word: &Word) -> Option<&Placement> {
        self.placements.iter().find(|p| p.word() == word)
    }
}

/// Builds word-search grids by randomized placement.
///
/// Words are tried in a shuffled order. For each word the generator draws up to
/// [`retry_budget`](Self::retry_budget) random `(origin, direction)` pairs and
/// writes the word at the first one the placement validator accepts. A word that
/// exhausts its budget is dropped from the round. Remaining empty cells are filled
/// with uniformly random letters.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{DirectionSet, Word};
/// use wordsearch_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new(12);
/// let words: Vec<Word> = ["DAVID", "GOLIAS", "ESTER"]
///     .into_iter()
///     .map(Word::new)
///     .collect::<Result<_, _>>()?;
///
/// let puzzle = generator.generate_with_seed(&words, PuzzleSeed::from_phrase("doc"));
/// assert_eq!(puzzle.words.len() + puzzle.dropped.len(), 3);
/// for placement in &puzzle.placements {
///     let found = puzzle.grid.locate(placement.word(), DirectionSet::all());
///     assert!(found.is_some());
/// }
/// # Ok::<(), wordsearch_core::WordError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleGenerator {
    size: usize,
    directions: DirectionSet,
    retry_budget: usize,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE)
    }
}

impl PuzzleGenerator {
    /// Default grid side length.
    pub const DEFAULT_SIZE: usize = 12;
    /// Largest supported grid side length.
    pub const MAX_SIZE: usize = 64;
    /// Default number of placement attempts per word.
    pub const DEFAULT_RETRY_BUDGET: usize = 1000;

    /// Creates a generator for `size`×`size` grids using all eight directions.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or greater than [`PuzzleGenerator::MAX_SIZE`].
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(
            (1..=Self::MAX_SIZE).contains(&size),
            "grid size must be between 1 and {}, got {size}",
            Self::MAX_SIZE
        );
        Self {
            size,
            directions: DirectionSet::all(),
            retry_budget: Self::DEFAULT_RETRY_BUDGET,
        }
    }

    /// Sets the directions words may be placed in.
    #[must_use]
    pub fn with_directions(mut self, directions: DirectionSet) -> Self {
        self.directions = directions;
        self
    }

    /// Sets the number of placement attempts per word.
    #[must_use]
    pub fn with_retry_budget(mut self, retry_budget: usize) -> Self {
        self.retry_budget = retry_budget;
        self
    }

    /// Returns the grid side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the placement directions.
    #[must_use]
    pub fn directions(&self) -> DirectionSet {
        self.directions
    }

    /// Returns the number of placement attempts per word.
    #[must_use]
    pub fn retry_budget(&self) -> usize {
        self.retry_budget
    }

    /// Generates a puzzle for `words` with a fresh random seed.
    #[must_use]
    pub fn generate(&self, words: &[Word]) -> GeneratedPuzzle {
        self.generate_with_seed(words, PuzzleSeed::random())
    }

    /// Generates the puzzle for `words` that `seed` describes.
    #[must_use]
    pub fn generate_with_seed(&self, words: &[Word], seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();
        self.generate_with_rng(words, seed, &mut rng)
    }

    /// Chooses a word set from `vocabulary` and generates its puzzle, both driven
    /// by `seed`.
    #[must_use]
    pub fn generate_round(&self, vocabulary: &Vocabulary, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();
        let words = vocabulary.choose_word_set(&mut rng);
        self.generate_with_rng(&words, seed, &mut rng)
    }

    fn generate_with_rng<R>(
        &self,
        words: &[Word],
        seed: PuzzleSeed,
        rng: &mut R,
    ) -> GeneratedPuzzle
    where
        R: Rng + ?Sized,
    {
        let words = vocabulary::dedup(words);
        let directions: Vec<Direction> = self.directions.directions().collect();
        let mut order: Vec<&Word> = words.iter().collect();
        order.shuffle(rng);

        let mut draft = DraftGrid::new(self.size);
        let mut placements = Vec::with_capacity(order.len());
        let mut dropped = Vec::new();
        for word in order {
            match self.place_word(&mut draft, word, &directions, rng) {
                Ok(placement) => {
                    log::debug!(
                        "placed {word} at {} heading {}",
                        placement.origin(),
                        placement.direction()
                    );
                    placements.push(placement);
                }
                Err(reason) => {
                    log::warn!("dropping {word}: {reason}");
                    dropped.push(word.clone());
                }
            }
        }

        let grid = draft.fill_with(|_| ALPHABET[rng.random_range(0..ALPHABET.len())]);
        let words = words
            .into_iter()
            .filter(|word| !dropped.contains(word))
            .collect();
        GeneratedPuzzle {
            grid,
            words,
            placements,
            dropped,
            seed,
        }
    }

    fn place_word<R>(
        &self,
        draft: &mut DraftGrid,
        word: &Word,
        directions: &[Direction],
        rng: &mut R,
    ) -> Result<Placement, DropReason>
    where
        R: Rng + ?Sized,
    {
        if directions.is_empty() {
            return Err(DropReason::NoDirections);
        }
        if word.len() > self.size {
            return Err(DropReason::TooLong { size: self.size });
        }
        for _ in 0..self.retry_budget {
            let direction = directions[rng.random_range(0..directions.len())];
            let origin = Position::new(
                rng.random_range(0..self.size),
                rng.random_range(0..self.size),
            );
            if let Ok(placement) = draft.place(word, origin, direction) {
                return Ok(placement);
            }
        }
        Err(DropReason::BudgetExhausted {
            attempts: self.retry_budget,
        })
    }
}

/// Why a word was left out of a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
enum DropReason {
    #[display("no placement directions allowed")]
    NoDirections,
    #[display("longer than the {size}x{size} grid")]
    TooLong { size: usize },
    #[display("no placement found in {attempts} attempts")]
    BudgetExhausted { attempts: usize },
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| Word::new(s).unwrap()).collect()
    }

    fn bible() -> Vec<Word> {
        words(&[
            "ABRAAO", "MOISES", "DAVID", "GOLIAS", "ESTER", "RUTE", "NOE", "PAULO", "PEDRO",
            "JESUS",
        ])
    }

    #[test]
    fn test_every_cell_is_an_uppercase_letter() {
        let generator = PuzzleGenerator::new(12);
        let puzzle = generator.generate(&bible());
        assert_eq!(puzzle.grid.size(), 12);
        for pos in Position::all(12) {
            assert!(puzzle.grid.letter(pos).is_ascii_uppercase());
        }
    }

    #[test]
    fn test_placements_are_spelled_in_grid() {
        let generator = PuzzleGenerator::new(12);
        let puzzle = generator.generate_with_seed(&bible(), PuzzleSeed::from_phrase("spelled"));
        assert_eq!(puzzle.placements.len(), puzzle.words.len());
        for placement in &puzzle.placements {
            assert!(puzzle.grid.spells(
                placement.word(),
                placement.origin(),
                placement.direction()
            ));
            assert!(puzzle.words.contains(placement.word()));
        }
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let generator = PuzzleGenerator::new(15);
        let seed = PuzzleSeed::from_phrase("repeatable");
        let a = generator.generate_with_seed(&bible(), seed);
        let b = generator.generate_with_seed(&bible(), seed);
        assert_eq!(a, b);

        let c = generator.generate_with_seed(&bible(), PuzzleSeed::from_phrase("different"));
        assert_ne!(a.grid, c.grid);
    }

    #[test]
    fn test_word_longer_than_grid_is_dropped() {
        let generator = PuzzleGenerator::new(4);
        let puzzle = generator.generate(&words(&["GIRAFFE", "CAT"]));
        assert_eq!(puzzle.dropped, words(&["GIRAFFE"]));
        assert_eq!(puzzle.words, words(&["CAT"]));
        assert!(puzzle.placement_of(&words(&["GIRAFFE"])[0]).is_none());
    }

    #[test]
    fn test_zero_budget_drops_everything() {
        let generator = PuzzleGenerator::new(12).with_retry_budget(0);
        let puzzle = generator.generate(&bible());
        assert!(puzzle.words.is_empty());
        assert_eq!(puzzle.dropped.len(), 10);
        assert!(Position::all(12).all(|pos| puzzle.grid.letter(pos).is_ascii_uppercase()));
    }

    #[test]
    fn test_drop_reasons() {
        let generator = PuzzleGenerator::new(4).with_retry_budget(3);
        let mut rng = PuzzleSeed::from_phrase("reasons").rng();
        let mut draft = DraftGrid::new(4);
        let all: Vec<Direction> = DirectionSet::all().directions().collect();
        let giraffe = &words(&["GIRAFFE"])[0];
        let cat = &words(&["CAT"])[0];

        assert_eq!(
            generator.place_word(&mut draft, cat, &[], &mut rng),
            Err(DropReason::NoDirections)
        );
        let too_long = generator.place_word(&mut draft, giraffe, &all, &mut rng);
        assert_eq!(too_long, Err(DropReason::TooLong { size: 4 }));
        assert_eq!(too_long.unwrap_err().to_string(), "longer than the 4x4 grid");

        let zzzz = &words(&["ZZZZ"])[0];
        let mut full = DraftGrid::new(4);
        for row in 0..4 {
            full.place(zzzz, Position::new(row, 0), Direction::East).unwrap();
        }
        assert_eq!(
            generator.place_word(&mut full, cat, &all, &mut rng),
            Err(DropReason::BudgetExhausted { attempts: 3 })
        );
    }

    #[test]
    #[should_panic(expected = "grid size must be between 1 and 64")]
    fn test_new_rejects_oversized_grid() {
        let _ = PuzzleGenerator::new(PuzzleGenerator::MAX_SIZE + 1);
    }

    #[test]
    fn test_duplicate_words_are_placed_once() {
        let generator = PuzzleGenerator::new(12);
        let puzzle = generator.generate(&words(&["NOE", "RUTE", "NOE"]));
        assert_eq!(puzzle.words, words(&["NOE", "RUTE"]));
        assert_eq!(puzzle.placements.len(), 2);
    }

    #[test]
    fn test_direction_policy_is_honored() {
        let generator = PuzzleGenerator::new(12).with_directions(DirectionSet::ORTHOGONAL);
        let puzzle = generator.generate(&bible());
        assert!(
            puzzle
                .placements
                .iter()
                .all(|p| !p.direction().is_diagonal())
        );

        let none = PuzzleGenerator::new(12).with_directions(DirectionSet::empty());
        assert!(none.generate(&bible()).words.is_empty());
    }

    #[test]
    fn test_generate_round_is_reproducible() {
        let generator = PuzzleGenerator::default();
        let vocabulary = Vocabulary::builtin();
        let seed = PuzzleSeed::from_phrase("round");
        assert_eq!(
            generator.generate_round(&vocabulary, seed),
            generator.generate_round(&vocabulary, seed)
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_locator_finds_every_placed_word(bytes in any::<[u8; 32]>()) {
            let generator = PuzzleGenerator::new(12);
            let puzzle = generator.generate_with_seed(&bible(), PuzzleSeed::from(bytes));
            for placement in &puzzle.placements {
                let located = puzzle.grid.locate(placement.word(), DirectionSet::all());
                prop_assert!(located.is_some());
                let occurrences: Vec<_> = puzzle
                    .grid
                    .placements_of(placement.word(), DirectionSet::all())
                    .collect();
                prop_assert!(occurrences.contains(placement));
                if occurrences.len() == 1 {
                    prop_assert_eq!(located.as_ref(), Some(placement));
                }
            }
        }
    }
}
