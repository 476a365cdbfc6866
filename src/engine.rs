//! # Engine
//!
//! The string-in, string-out surface that UI and service code calls. An
//! [`Engine`] owns the diatonic table and lends it to the Nashville codec; the
//! transposer needs no table. All methods are pure and `Engine` is `Sync`, so a
//! single instance can serve any number of threads.
//!
//! ## Operations
//! - [`Engine::transpose_progression`] - shift every chord by N semitones
//! - [`Engine::shortest_distance`] - signed key distance in `-6..=6`
//! - [`Engine::transpose_key`] - shift a key name by N semitones
//! - [`Engine::all_keys`] - the twelve canonical key spellings
//! - [`Engine::chords_to_numbers`] / [`Engine::numbers_to_chords`] - Nashville conversion
//! - [`Engine::looks_like_number_notation`] - cheap notation check
//!
//! Malformed key names given to the transposition helpers are logged and
//! treated as a no-op. The Nashville conversions fail with
//! [`ChartError::UnknownKey`] instead, since they have no sensible partial
//! result.

use once_cell::sync::Lazy;

use crate::error::ChartError;
use crate::nashville::{contains_nashville_numbers, DiatonicTable, Direction, NashvilleCodec};
use crate::pitch::{self, PitchClass};
use crate::transpose;

static SHARED: Lazy<Engine> = Lazy::new(Engine::new);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    scales: DiatonicTable,
}

impl Engine {
    pub fn new() -> Self {
        Self::with_scales(DiatonicTable::new())
    }

    pub fn with_scales(scales: DiatonicTable) -> Self {
        Self { scales }
    }

    /// Process-wide engine, built on first use
    pub fn shared() -> &'static Engine {
        &SHARED
    }

    pub fn scales(&self) -> &DiatonicTable {
        &self.scales
    }

    pub fn codec(&self) -> NashvilleCodec<'_> {
        NashvilleCodec::new(&self.scales)
    }

    pub fn transpose_progression(&self, text: &str, steps: i32) -> String {
        transpose::transpose_progression(text, steps)
    }

    /// Signed distance between two keys, or 0 when either is not a key
    pub fn shortest_distance(&self, from_key: &str, to_key: &str) -> i32 {
        match (from_key.parse::<PitchClass>(), to_key.parse::<PitchClass>()) {
            (Ok(from), Ok(to)) => pitch::shortest_distance(from, to),
            (Err(e), _) | (_, Err(e)) => {
                log::warn!("no key distance from {:?} to {:?}: {}", from_key, to_key, e);
                0
            }
        }
    }

    /// Shift a key name; an unrecognized name comes back unchanged
    pub fn transpose_key(&self, key: &str, steps: i32) -> String {
        match key.parse::<PitchClass>() {
            Ok(pitch) => pitch.transpose(steps).to_string(),
            Err(e) => {
                log::warn!("leaving key unchanged: {}", e);
                key.to_string()
            }
        }
    }

    pub fn all_keys(&self) -> [&'static str; 12] {
        pitch::all_keys()
    }

    pub fn chords_to_numbers(&self, text: &str, key: &str) -> Result<String, ChartError> {
        self.codec().convert_progression(text, key, Direction::ToNumbers)
    }

    pub fn numbers_to_chords(&self, text: &str, key: &str) -> Result<String, ChartError> {
        self.codec().convert_progression(text, key, Direction::ToChords)
    }

    pub fn looks_like_number_notation(&self, text: &str) -> bool {
        contains_nashville_numbers(text)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
