//! # Pitch Classes and Key Arithmetic
//!
//! Canonical 12-tone chromatic model. Every spelled note (sharp or flat) is
//! normalized to one of twelve [`PitchClass`] values; output is always in sharp
//! spelling.
//!
//! ## Accepted Spellings
//! `C C# D D# E F F# G G# A A# B` plus the flat aliases `Db Eb Gb Ab Bb`
//! (17 in total). `♯` and `♭` are accepted in place of `#` and `b`.
//!
//! ## Key Distance
//! [`shortest_distance`] is the single place where "how far is key A from key B"
//! is decided. It folds the raw index difference into `-6..=6` so that C→B is
//! `-1`, not `+11`.
//!
//! ## Example
//! ```rust
//! use chordkit::pitch::{shortest_distance, PitchClass};
//!
//! let g: PitchClass = "G".parse().unwrap();
//! assert_eq!(g.transpose(2).to_string(), "A");
//! assert_eq!(shortest_distance(PitchClass::C, PitchClass::B), -1);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ChartError;

/// Number of pitch classes in the chromatic scale
pub const SEMITONES: i32 = 12;

/// One of the twelve pitch classes, named by its sharp spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PitchClass {
    C,
    Cs, // C# / Db
    D,
    Ds, // D# / Eb
    E,
    F,
    Fs, // F# / Gb
    G,
    Gs, // G# / Ab
    A,
    As, // A# / Bb
    B,
}

impl PitchClass {
    /// All pitch classes in chromatic order, starting from C
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    /// Position in the chromatic sequence (0-11)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Pitch class at a chromatic position, wrapping modulo 12
    pub fn from_index(index: i32) -> Self {
        PitchClass::ALL[index.rem_euclid(SEMITONES) as usize]
    }

    /// Shift by a number of semitones (either direction, any magnitude)
    pub fn transpose(self, steps: i32) -> Self {
        PitchClass::from_index(self.index() as i32 + steps.rem_euclid(SEMITONES))
    }

    /// Ascending interval in semitones from `self` up to `other` (0-11)
    pub fn interval_to(self, other: PitchClass) -> u8 {
        (other.index() as i32 - self.index() as i32).rem_euclid(SEMITONES) as u8
    }

    /// Canonical (sharp) spelling
    pub fn as_str(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::Cs => "C#",
            PitchClass::D => "D",
            PitchClass::Ds => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Fs => "F#",
            PitchClass::G => "G",
            PitchClass::Gs => "G#",
            PitchClass::A => "A",
            PitchClass::As => "A#",
            PitchClass::B => "B",
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PitchClass {
    type Err = ChartError;

    /// Parse a spelled note such as `"C"`, `"F#"` or `"Bb"`.
    ///
    /// Only the 17 conventional spellings are accepted; `E#`, `Fb`, `B#` and
    /// `Cb` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ChartError::InvalidPitchClass(trimmed.to_string());

        let mut chars = trimmed.chars();
        let letter = chars.next().ok_or_else(invalid)?;
        let accidental = match chars.next() {
            None => None,
            Some(c) => Some(Accidental::from_char(c).ok_or_else(invalid)?),
        };
        if chars.next().is_some() {
            return Err(invalid());
        }

        let pitch = match (letter, accidental) {
            ('C', None) => PitchClass::C,
            ('C', Some(Accidental::Sharp)) | ('D', Some(Accidental::Flat)) => PitchClass::Cs,
            ('D', None) => PitchClass::D,
            ('D', Some(Accidental::Sharp)) | ('E', Some(Accidental::Flat)) => PitchClass::Ds,
            ('E', None) => PitchClass::E,
            ('F', None) => PitchClass::F,
            ('F', Some(Accidental::Sharp)) | ('G', Some(Accidental::Flat)) => PitchClass::Fs,
            ('G', None) => PitchClass::G,
            ('G', Some(Accidental::Sharp)) | ('A', Some(Accidental::Flat)) => PitchClass::Gs,
            ('A', None) => PitchClass::A,
            ('A', Some(Accidental::Sharp)) | ('B', Some(Accidental::Flat)) => PitchClass::As,
            ('B', None) => PitchClass::B,
            _ => return Err(invalid()),
        };
        Ok(pitch)
    }
}

/// Chromatic alteration of a note or scale degree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accidental {
    Flat,
    Sharp,
}

impl Accidental {
    /// Recognize `b`, `♭`, `#` or `♯`
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'b' | '♭' => Some(Accidental::Flat),
            '#' | '♯' => Some(Accidental::Sharp),
            _ => None,
        }
    }

    /// Semitone offset applied by this accidental
    pub fn offset(self) -> i32 {
        match self {
            Accidental::Flat => -1,
            Accidental::Sharp => 1,
        }
    }

    /// Glyph used when writing scale degrees
    pub fn glyph(self) -> char {
        match self {
            Accidental::Flat => '♭',
            Accidental::Sharp => '#',
        }
    }
}

/// Split a chord token into its root spelling and the rest.
///
/// The root is a letter `A`-`G` optionally followed by `#` or `b`. This is a
/// purely lexical split; the root is not validated.
///
/// ```
/// use chordkit::pitch::split_root;
///
/// assert_eq!(split_root("Bbm7"), Some(("Bb", "m7")));
/// assert_eq!(split_root("G/B"), Some(("G", "/B")));
/// assert_eq!(split_root("x7"), None);
/// ```
pub fn split_root(token: &str) -> Option<(&str, &str)> {
    let mut chars = token.char_indices();
    match chars.next() {
        Some((_, 'A'..='G')) => {}
        _ => return None,
    }
    let end = match chars.next() {
        Some((i, '#' | 'b')) => i + 1,
        _ => 1,
    };
    Some(token.split_at(end))
}

/// Chromatic index (0-11) of a spelled note
pub fn index_of(spelling: &str) -> Result<u8, ChartError> {
    Ok(spelling.parse::<PitchClass>()?.index())
}

/// Transpose a spelled note, returning it in sharp spelling
pub fn transpose(spelling: &str, steps: i32) -> Result<PitchClass, ChartError> {
    Ok(spelling.parse::<PitchClass>()?.transpose(steps))
}

/// Shortest signed distance in semitones from one key to another.
///
/// The raw difference is folded by one octave when it exceeds 6 in absolute
/// value, so the result is always in `-6..=6`.
pub fn shortest_distance(from: PitchClass, to: PitchClass) -> i32 {
    let raw = to.index() as i32 - from.index() as i32;
    if raw > SEMITONES / 2 {
        raw - SEMITONES
    } else if raw < -SEMITONES / 2 {
        raw + SEMITONES
    } else {
        raw
    }
}

/// The twelve canonical key spellings in chromatic order
pub fn all_keys() -> [&'static str; 12] {
    PitchClass::ALL.map(PitchClass::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sharp_and_flat_spellings() {
        assert_eq!("C#".parse::<PitchClass>().unwrap(), PitchClass::Cs);
        assert_eq!("Db".parse::<PitchClass>().unwrap(), PitchClass::Cs);
        assert_eq!("Bb".parse::<PitchClass>().unwrap(), PitchClass::As);
        assert_eq!("G♭".parse::<PitchClass>().unwrap(), PitchClass::Fs);
        assert_eq!(" E ".parse::<PitchClass>().unwrap(), PitchClass::E);
    }

    #[test]
    fn test_parse_rejects_unknown_spellings() {
        for bad in ["", "H", "E#", "Cb", "Fb", "B#", "c", "C##", "Cm"] {
            assert_eq!(
                bad.parse::<PitchClass>(),
                Err(ChartError::InvalidPitchClass(bad.trim().to_string())),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_index_of() {
        assert_eq!(index_of("C").unwrap(), 0);
        assert_eq!(index_of("Eb").unwrap(), 3);
        assert_eq!(index_of("B").unwrap(), 11);
        assert!(index_of("X").is_err());
    }

    #[test]
    fn test_transpose_wraps_and_emits_sharps() {
        assert_eq!(transpose("B", 1).unwrap(), PitchClass::C);
        assert_eq!(transpose("C", -1).unwrap(), PitchClass::B);
        assert_eq!(transpose("Bb", 2).unwrap().to_string(), "C");
        assert_eq!(transpose("Eb", 0).unwrap().to_string(), "D#");
        assert_eq!(PitchClass::D.transpose(25), PitchClass::Ds);
    }

    #[test]
    fn test_transpose_round_trip() {
        for pitch in PitchClass::ALL {
            for steps in -24..=24 {
                assert_eq!(pitch.transpose(steps).transpose(-steps), pitch);
            }
        }
    }

    #[test]
    fn test_transpose_extreme_steps() {
        assert_eq!(PitchClass::G.transpose(i32::MAX), PitchClass::D);
        assert_eq!(PitchClass::B.transpose(i32::MAX), PitchClass::Fs);
        assert_eq!(PitchClass::C.transpose(i32::MIN), PitchClass::E);
        for pitch in PitchClass::ALL {
            assert_eq!(pitch.transpose(i32::MAX).transpose(-i32::MAX), pitch);
            assert_eq!(pitch.transpose(i32::MIN).transpose(i32::MIN), pitch.transpose(8));
        }
    }

    #[test]
    fn test_shortest_distance() {
        assert_eq!(shortest_distance(PitchClass::C, PitchClass::B), -1);
        assert_eq!(shortest_distance(PitchClass::B, PitchClass::C), 1);
        assert_eq!(shortest_distance(PitchClass::C, PitchClass::G), -5);
        assert_eq!(shortest_distance(PitchClass::G, PitchClass::A), 2);
        assert_eq!(shortest_distance(PitchClass::C, PitchClass::Fs), 6);
        assert_eq!(shortest_distance(PitchClass::Fs, PitchClass::C), -6);
    }

    #[test]
    fn test_shortest_distance_bounds_and_consistency() {
        for a in PitchClass::ALL {
            assert_eq!(shortest_distance(a, a), 0);
            for b in PitchClass::ALL {
                let d = shortest_distance(a, b);
                assert!((-6..=6).contains(&d));
                assert_eq!(a.transpose(d), b);
            }
        }
    }

    #[test]
    fn test_interval_to() {
        assert_eq!(PitchClass::C.interval_to(PitchClass::B), 11);
        assert_eq!(PitchClass::A.interval_to(PitchClass::C), 3);
    }

    #[test]
    fn test_all_keys() {
        assert_eq!(
            all_keys(),
            ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"]
        );
    }

    #[test]
    fn test_split_root() {
        assert_eq!(split_root("C#m7"), Some(("C#", "m7")));
        assert_eq!(split_root("A"), Some(("A", "")));
        assert_eq!(split_root("Hm"), None);
        assert_eq!(split_root(""), None);
    }
}
