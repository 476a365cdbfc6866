//! # chordkit
//!
//! Transposition and Nashville Number System conversion for worship chord
//! charts. Every operation is a pure function from text (plus a key or a step
//! count) to new text; anything that is not a chord is copied through exactly.
//!
//! ## Modules
//! - `pitch` - Pitch classes, key distance, key transposition
//! - `transpose` - Chord transposition over free-text progressions
//! - `nashville` - Chord names ↔ Nashville numbers
//! - `engine` - The string-level interface used by UI and service code
//! - `analysis` - Import-time heuristics (key detection, chord-line detection)
//! - `chart` - Chart documents with YAML frontmatter
//! - `song` - Catalog song records
//!
//! ## Example
//! ```rust
//! use chordkit::{chords_to_numbers, numbers_to_chords, transpose_progression};
//!
//! assert_eq!(transpose_progression("C  -  F | G\nAm", 2), "D  -  G | A\nBm");
//! assert_eq!(chords_to_numbers("C - F - G - Am", "C").unwrap(), "1 - 4 - 5 - 6m");
//! assert_eq!(numbers_to_chords("I - IV - V - vi", "G").unwrap(), "G - C - D - Em");
//! ```

pub mod analysis;
pub mod chart;
pub mod engine;
pub mod error;
pub mod nashville;
pub mod pitch;
pub mod scan;
pub mod song;
pub mod transpose;

pub use chart::{Chart, ChartMetadata, Notation};
pub use engine::Engine;
pub use error::*;
pub use nashville::{DiatonicTable, Direction, NashvilleCodec};
pub use pitch::PitchClass;
pub use song::Song;

/// Transpose every chord in `text` by `steps` semitones.
pub fn transpose_progression(text: &str, steps: i32) -> String {
    Engine::shared().transpose_progression(text, steps)
}

/// Shortest signed distance from one key to another, in `-6..=6`.
///
/// Returns 0 when either key is not recognized.
pub fn shortest_distance(from_key: &str, to_key: &str) -> i32 {
    Engine::shared().shortest_distance(from_key, to_key)
}

/// Shift a key name by `steps` semitones (sharp spelling).
pub fn transpose_key(key: &str, steps: i32) -> String {
    Engine::shared().transpose_key(key, steps)
}

/// The twelve canonical key spellings, starting from C.
pub fn all_keys() -> [&'static str; 12] {
    Engine::shared().all_keys()
}

/// Rewrite chord names in `text` as Nashville numbers in `key`.
///
/// # Errors
/// Returns [`ChartError::UnknownKey`] if `key` names no scale.
pub fn chords_to_numbers(text: &str, key: &str) -> Result<String, ChartError> {
    Engine::shared().chords_to_numbers(text, key)
}

/// Rewrite Nashville numbers in `text` as chord names in `key`.
///
/// # Errors
/// Returns [`ChartError::UnknownKey`] if `key` names no scale.
pub fn numbers_to_chords(text: &str, key: &str) -> Result<String, ChartError> {
    Engine::shared().numbers_to_chords(text, key)
}

/// Whether `text` appears to be written in Nashville numbers.
pub fn looks_like_number_notation(text: &str) -> bool {
    Engine::shared().looks_like_number_notation(text)
}
