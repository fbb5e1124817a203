//! Word-search game session management.
//!
//! A [`Session`] plays rounds of word search: it generates a grid through
//! [`wordsearch_generator`], turns drag gestures into straight selections, matches
//! the selected letters against the round's target words and tracks progress until
//! every word is found or the countdown runs out.
//!
//! # Examples
//!
//! ```
//! use wordsearch_game::{Session, SessionOptions};
//! use wordsearch_generator::{PuzzleSeed, Vocabulary};
//!
//! let mut session = Session::new(SessionOptions::default());
//! let round = session
//!     .start_round_with_seed(&Vocabulary::builtin(), PuzzleSeed::from_phrase("example"))
//!     .clone();
//!
//! // Locate each word the way a player would spot it, then drag across it.
//! for word in round.words() {
//!     let placement = round
//!         .grid()
//!         .locate(word, session.options().directions())
//!         .unwrap();
//!     session.on_gesture(placement.origin(), placement.end());
//! }
//! assert!(session.is_won());
//! ```

pub use self::{options::*, outcome::*, round::*, session::*};

mod options;
mod outcome;
mod round;
mod session;
