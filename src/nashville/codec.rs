//! Chord name ↔ Nashville number conversion

use once_cell::sync::Lazy;
use regex::Regex;

use super::scale::{DiatonicScale, DiatonicTable};
use super::token::{parse_number_token, Bass, Degree, NumberToken};
use crate::error::ChartError;
use crate::pitch::{split_root, Accidental, PitchClass};
use crate::scan::{count_tokens, replace_spans, replace_tokens, Tokens};

/// Absolute chord names (`Am7`, `G/B`, `Bbsus4`)
static CHORD_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-G][#b]?(?:maj|min|dim|aug|sus|add|m|M|\d|[b#]\d+)*(?:/[A-G][#b]?)?")
        .expect("chord name pattern")
});

/// Nashville numbers, Arabic or Roman, with an optional degree or note bass
static NUMBER_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"[b♭#♯]?(?:[1-7]|(?i:VII|VI|V|IV|III|II|I))",
        r"(?:maj|min|dim|aug|sus|add|m|M|\d|[b#]\d+)*",
        r"(?:/(?:[b♭#♯]?(?:[1-7]|(?i:VII|VI|V|IV|III|II|I))|[A-G][#b]?))?",
    ))
    .expect("number token pattern")
});

/// Which way [`NashvilleCodec::convert_progression`] converts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Chord names to Nashville numbers
    ToNumbers,
    /// Nashville numbers to chord names
    ToChords,
}

/// Converts between chord names and Nashville numbers using a shared
/// diatonic table.
#[derive(Debug, Clone, Copy)]
pub struct NashvilleCodec<'a> {
    scales: &'a DiatonicTable,
}

impl<'a> NashvilleCodec<'a> {
    pub fn new(scales: &'a DiatonicTable) -> Self {
        Self { scales }
    }

    /// Resolve a parsed number to a chord name in `key`.
    ///
    /// An explicit quality replaces the degree's diatonic quality rather than
    /// adding to it: in C, `2` is `Dm` but `27` is `D7`. Altered degrees
    /// (`♭7`) default to a major triad.
    pub fn number_to_chord(&self, token: &NumberToken, key: PitchClass) -> String {
        let scale = self.scales.scale(key);
        let base = scale.chord(token.degree.step);
        let root = altered_root(scale, token.degree);

        let quality = if !token.quality.is_empty() {
            token.quality.as_str()
        } else if token.degree.accidental.is_some() {
            ""
        } else {
            base.quality.suffix()
        };

        let mut chord = format!("{}{}", root, quality);
        if let Some(bass) = token.bass {
            let bass = match bass {
                Bass::Degree(degree) => altered_root(scale, degree),
                Bass::Note(note) => note,
            };
            chord.push('/');
            chord.push_str(bass.as_str());
        }
        chord
    }

    /// Write a chord name as a Nashville number in `key`.
    ///
    /// The quality suffix is kept verbatim; a slash bass note is converted to
    /// a degree as well.
    pub fn chord_to_number(&self, chord: &str, key: PitchClass) -> Result<String, ChartError> {
        let (root, suffix) =
            split_root(chord).ok_or_else(|| ChartError::InvalidPitchClass(chord.to_string()))?;
        let root = root.parse::<PitchClass>()?;
        let degree = Degree::from_interval(key.interval_to(root));

        let suffix = match suffix.split_once('/') {
            Some((quality, bass)) if split_root(bass).is_some() => {
                let bass = bass.parse::<PitchClass>()?;
                format!("{}/{}", quality, Degree::from_interval(key.interval_to(bass)))
            }
            _ => suffix.to_string(),
        };

        Ok(format!("{}{}", degree, suffix))
    }

    /// Convert every token of a progression in the given direction.
    ///
    /// Fails with [`ChartError::UnknownKey`] when `key` names no scale.
    /// Tokens that cannot be converted are left as they are.
    pub fn convert_progression(
        &self,
        text: &str,
        key: &str,
        direction: Direction,
    ) -> Result<String, ChartError> {
        let tonic = self.scales.lookup(key)?.tonic();

        let converted = match direction {
            Direction::ToNumbers => replace_tokens(text, &CHORD_NAME, |chord| {
                match self.chord_to_number(chord, tonic) {
                    Ok(number) => Some(number),
                    Err(e) => {
                        log::debug!("leaving chord token unchanged: {}", e);
                        None
                    }
                }
            }),
            Direction::ToChords => replace_spans(number_tokens(text), |token| {
                parse_number_token(token).map(|number| self.number_to_chord(&number, tonic))
            }),
        };
        Ok(converted)
    }
}

fn altered_root(scale: &DiatonicScale, degree: Degree) -> PitchClass {
    scale
        .chord(degree.step)
        .root
        .transpose(degree.accidental.map_or(0, Accidental::offset))
}

/// Standalone number tokens, ignoring labels such as `Verse 1:`
fn number_tokens(text: &str) -> Tokens<'static, '_> {
    Tokens::new(&NUMBER_TOKEN, text).skip_labels()
}

/// Cheap check for Nashville notation: at least one number token and no more
/// chord names than number tokens.
pub fn contains_nashville_numbers(text: &str) -> bool {
    let numbers = number_tokens(text).count();
    numbers > 0 && numbers >= count_tokens(text, &CHORD_NAME)
}
