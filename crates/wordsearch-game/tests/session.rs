//! Plays complete rounds through the public API.

use std::time::Duration;

use proptest::prelude::*;
use wordsearch_core::{DirectionSet, Position, Word};
use wordsearch_game::{MatchPolicy, SelectionOutcome, Session, SessionOptions};
use wordsearch_generator::{PuzzleGenerator, PuzzleSeed, Vocabulary, WordList};

fn play_to_completion(session: &mut Session, reverse: bool) {
    let round = session.round().unwrap().clone();
    let directions = session.options().directions();
    let total = round.words().len();
    for (i, word) in round.words().iter().enumerate() {
        let placement = round.grid().locate(word, directions).unwrap();
        let (start, end) = if reverse {
            (placement.end(), placement.origin())
        } else {
            (placement.origin(), placement.end())
        };
        let outcome = session.on_gesture(start, end);
        assert_eq!(outcome.matched(), Some(word));
        assert_eq!(outcome.is_won, i + 1 == total);
        let shown = session.found_word_placement(word).unwrap();
        assert_eq!(shown.word(), word);
        assert!(round.grid().spells(word, shown.origin(), shown.direction()));
    }
}

#[test]
fn test_full_round_with_builtin_vocabulary() {
    let mut session = Session::default();
    session.start_round_with_seed(&Vocabulary::builtin(), PuzzleSeed::from_phrase("full"));
    assert!(!session.round().unwrap().words().is_empty());

    play_to_completion(&mut session, false);
    assert!(session.is_won());
}

#[test]
fn test_reverse_round_with_legacy_directions() {
    let options = SessionOptions::default()
        .generator(PuzzleGenerator::new(14).with_directions(DirectionSet::LEGACY_SIX))
        .match_policy(MatchPolicy::ForwardOrReverse);
    let mut session = Session::new(options);
    session.start_round_with_seed(&Vocabulary::builtin(), PuzzleSeed::from_phrase("legacy"));

    play_to_completion(&mut session, true);
    assert!(session.is_won());
}

#[test]
fn test_custom_word_list_round() {
    let list = WordList::parse("planets", "# inner\nmercury\nvenus\nearth\nmars\n").unwrap();
    let vocabulary = Vocabulary::Themed { lists: vec![list] };
    let mut session = Session::default();
    let round = session.start_round_with_seed(&vocabulary, PuzzleSeed::from_phrase("planets"));
    let words: Vec<&str> = round.words().iter().map(Word::as_str).collect();
    assert_eq!(words.len(), 4);
    for planet in ["MERCURY", "VENUS", "EARTH", "MARS"] {
        assert!(words.contains(&planet));
    }
}

#[test]
fn test_timed_out_round_keeps_progress() {
    let options = SessionOptions::default().time_limit(Some(SessionOptions::CLASSIC_TIME_LIMIT));
    let mut session = Session::new(options);
    let round = session
        .start_round_with_seed(&Vocabulary::builtin(), PuzzleSeed::from_phrase("timed"))
        .clone();
    let first = &round.words()[0];
    let placement = round.grid().locate(first, DirectionSet::all()).unwrap();
    session.on_gesture(placement.origin(), placement.end());

    for _ in 0..299 {
        assert!(session.advance_clock(Duration::from_secs(1)).is_in_progress());
    }
    assert!(session.advance_clock(Duration::from_secs(1)).is_timed_out());
    assert_eq!(session.round().unwrap().found_words(), [first.clone()]);
    assert_eq!(
        session.on_gesture(placement.origin(), placement.end()).selection,
        SelectionOutcome::Inactive
    );

    session.restart(&Vocabulary::builtin());
    assert!(session.status().is_in_progress());
    assert_eq!(session.remaining_time(), Some(SessionOptions::CLASSIC_TIME_LIMIT));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_gestures_never_corrupt_found_set(
        bytes in any::<[u8; 32]>(),
        gestures in prop::collection::vec((0usize..14, 0usize..14, 0usize..14, 0usize..14), 0..40),
    ) {
        let mut session = Session::default();
        session.start_round_with_seed(&Vocabulary::builtin(), PuzzleSeed::from(bytes));
        let grid = session.round().unwrap().grid().clone();

        let mut previous = 0;
        for (r1, c1, r2, c2) in gestures {
            let outcome = session.on_gesture(Position::new(r1, c1), Position::new(r2, c2));
            let round = session.round().unwrap();
            let found = round.found_words().len();
            let grew = found == previous + 1 && outcome.matched().is_some();
            prop_assert!(found == previous || grew);
            prop_assert!(round.found_words().iter().all(|w| round.words().contains(w)));
            prop_assert_eq!(round.grid(), &grid);
            prop_assert_eq!(outcome.is_won, session.is_won());
            previous = found;
        }
    }
}
