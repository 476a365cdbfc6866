//! # Nashville Number System
//!
//! Converts chord charts between absolute chord names and scale-degree numbers
//! relative to a key.
//!
//! ## Sub-modules
//! - `scale` - Diatonic chord table (seven triads per key)
//! - `token` - Nashville number token parsing (Arabic and Roman degrees)
//! - `codec` - Both conversion directions over whole progressions
//!
//! ## Key Types
//! - [`DiatonicTable`] - Immutable per-key scale table, built once and shared
//! - [`NumberToken`] - A parsed number: degree, quality text, optional bass
//! - [`NashvilleCodec`] - Conversion, borrowing a [`DiatonicTable`]
//!
//! ## Example
//! ```rust
//! use chordkit::nashville::{DiatonicTable, Direction, NashvilleCodec};
//!
//! let table = DiatonicTable::new();
//! let codec = NashvilleCodec::new(&table);
//!
//! let numbers = codec.convert_progression("G - C - D - Em", "G", Direction::ToNumbers).unwrap();
//! assert_eq!(numbers, "1 - 4 - 5 - 6m");
//!
//! let chords = codec.convert_progression("I - IV - V - vi", "D", Direction::ToChords).unwrap();
//! assert_eq!(chords, "D - G - A - Bm");
//! ```
//!
//! ## Lossy Edge
//!
//! Numbers round-trip exactly for chords diatonic to the key. Chromatic roots
//! become flatted degrees (`♭2 ♭3 ♭5 ♭6 ♭7`), so converting back may respell
//! them (`Eb` in C becomes `♭3`, then `D#`). Non-diatonic qualities on
//! diatonic roots (`D` major in C is written `2`, read back as `Dm`) are lossy
//! in the same way.
//!
//! ## Lyric Ambiguity
//!
//! A degree followed directly by `:` is a section label (`Verse 1:`) and is
//! never converted. Other standalone digits and Roman numerals in lyrics,
//! such as the pronoun `I`, still read as numbers.

mod codec;
mod scale;
mod token;


pub use codec::{contains_nashville_numbers, Direction, NashvilleCodec};
pub use scale::{DiatonicChord, DiatonicScale, DiatonicTable, Quality, MAJOR_SCALE_STEPS};
pub use token::{parse_number_token, Bass, Degree, NumberToken};
