//! Diatonic chord table
//!
//! For each of the twelve keys, the seven triads built on its major scale
//! (key C: `C Dm Em F G Am Bdim`). The table is built once and only ever read.

use std::fmt;

use crate::error::ChartError;
use crate::pitch::PitchClass;

/// Semitone offset of each major-scale degree from the tonic
pub const MAJOR_SCALE_STEPS: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Triad quality of a diatonic chord
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    Major,
    Minor,
    Diminished,
}

impl Quality {
    /// Chord-symbol suffix for this quality
    pub fn suffix(self) -> &'static str {
        match self {
            Quality::Major => "",
            Quality::Minor => "m",
            Quality::Diminished => "dim",
        }
    }
}

const MAJOR_SCALE_QUALITIES: [Quality; 7] = [
    Quality::Major,
    Quality::Minor,
    Quality::Minor,
    Quality::Major,
    Quality::Major,
    Quality::Minor,
    Quality::Diminished,
];

/// A triad built on one degree of a major scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiatonicChord {
    pub root: PitchClass,
    pub quality: Quality,
}

impl fmt::Display for DiatonicChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.quality.suffix())
    }
}

/// The seven diatonic chords of one key, degrees 1 through 7
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiatonicScale {
    tonic: PitchClass,
    chords: [DiatonicChord; 7],
}

impl DiatonicScale {
    fn major(tonic: PitchClass) -> Self {
        let mut chords = [DiatonicChord {
            root: tonic,
            quality: Quality::Major,
        }; 7];
        for (i, chord) in chords.iter_mut().enumerate() {
            chord.root = tonic.transpose(MAJOR_SCALE_STEPS[i] as i32);
            chord.quality = MAJOR_SCALE_QUALITIES[i];
        }
        Self { tonic, chords }
    }

    pub fn tonic(&self) -> PitchClass {
        self.tonic
    }

    /// Chord on a scale degree. `degree` is clamped to 1..=7.
    pub fn chord(&self, degree: u8) -> DiatonicChord {
        self.chords[(degree.clamp(1, 7) - 1) as usize]
    }

    pub fn chords(&self) -> &[DiatonicChord; 7] {
        &self.chords
    }
}

/// Diatonic scales for every key, indexed by tonic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiatonicTable {
    scales: Vec<DiatonicScale>,
}

impl DiatonicTable {
    pub fn new() -> Self {
        Self {
            scales: PitchClass::ALL.iter().map(|&tonic| DiatonicScale::major(tonic)).collect(),
        }
    }

    /// Scale for a tonic
    pub fn scale(&self, key: PitchClass) -> &DiatonicScale {
        &self.scales[key.index() as usize]
    }

    /// Scale for a key given by name (any of the 17 accepted spellings)
    pub fn lookup(&self, key: &str) -> Result<&DiatonicScale, ChartError> {
        let tonic = key
            .parse::<PitchClass>()
            .map_err(|_| ChartError::UnknownKey(key.trim().to_string()))?;
        Ok(self.scale(tonic))
    }
}

impl Default for DiatonicTable {
    fn default() -> Self {
        Self::new()
    }
}
