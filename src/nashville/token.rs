//! Nashville number tokens
//!
//! A token is a scale degree (Arabic `1`-`7` or Roman `I`-`VII`, any case),
//! optionally preceded by an accidental, followed by free-form quality text and
//! an optional `/bass`, where the bass is another degree or a note name.

use std::fmt;

use super::scale::MAJOR_SCALE_STEPS;
use crate::pitch::{Accidental, PitchClass};

/// Roman numerals, longest first so that `VII` wins over `VI` and `V`
const ROMAN_NUMERALS: [(&str, u8); 7] = [
    ("VII", 7),
    ("VI", 6),
    ("V", 5),
    ("IV", 4),
    ("III", 3),
    ("II", 2),
    ("I", 1),
];

/// A position in the major scale, possibly chromatically altered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Degree {
    /// 1 through 7
    pub step: u8,
    pub accidental: Option<Accidental>,
}

impl Degree {
    pub fn new(step: u8) -> Self {
        Self {
            step,
            accidental: None,
        }
    }

    pub fn flat(step: u8) -> Self {
        Self {
            step,
            accidental: Some(Accidental::Flat),
        }
    }

    /// Degree for a chromatic distance above the tonic.
    ///
    /// Non-diatonic distances are written as flatted degrees:
    /// 1 → ♭2, 3 → ♭3, 6 → ♭5, 8 → ♭6, 10 → ♭7.
    pub fn from_interval(semitones: u8) -> Self {
        match semitones % 12 {
            0 => Degree::new(1),
            1 => Degree::flat(2),
            2 => Degree::new(2),
            3 => Degree::flat(3),
            4 => Degree::new(3),
            5 => Degree::new(4),
            6 => Degree::flat(5),
            7 => Degree::new(5),
            8 => Degree::flat(6),
            9 => Degree::new(6),
            10 => Degree::flat(7),
            _ => Degree::new(7),
        }
    }

    /// Semitones above the tonic
    pub fn interval(self) -> i32 {
        let base = MAJOR_SCALE_STEPS[(self.step.clamp(1, 7) - 1) as usize] as i32;
        base + self.accidental.map_or(0, Accidental::offset)
    }

    /// Parse a degree at the start of `s`. Returns the degree and its length
    /// in bytes.
    pub fn parse_prefix(s: &str) -> Option<(Degree, usize)> {
        let (accidental, offset) = match s.chars().next().and_then(Accidental::from_char) {
            Some(acc) => (Some(acc), s.chars().next().map_or(0, char::len_utf8)),
            None => (None, 0),
        };
        let rest = &s[offset..];

        let (step, len) = match rest.chars().next()? {
            c @ '1'..='7' => (c as u8 - b'0', 1),
            _ => ROMAN_NUMERALS.iter().find_map(|&(numeral, step)| {
                rest.get(..numeral.len())
                    .filter(|head| head.eq_ignore_ascii_case(numeral))
                    .map(|_| (step, numeral.len()))
            })?,
        };

        Some((Degree { step, accidental }, offset + len))
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(acc) = self.accidental {
            write!(f, "{}", acc.glyph())?;
        }
        write!(f, "{}", self.step)
    }
}

/// Bass of a slash number: either another degree or an absolute note
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bass {
    Degree(Degree),
    Note(PitchClass),
}

/// A parsed Nashville number such as `6m`, `♭7`, `IV/1` or `5sus4`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberToken {
    pub degree: Degree,
    /// Quality and extension text, verbatim (empty when absent)
    pub quality: String,
    pub bass: Option<Bass>,
}

/// Parse a Nashville number token.
///
/// Returns `None` when the token does not start with a recognized degree.
/// A `/` part that is neither a degree nor a note name stays in the quality
/// text.
///
/// ```
/// use chordkit::nashville::{parse_number_token, Bass, Degree};
///
/// let token = parse_number_token("vi7/3").unwrap();
/// assert_eq!(token.degree, Degree::new(6));
/// assert_eq!(token.quality, "7");
/// assert_eq!(token.bass, Some(Bass::Degree(Degree::new(3))));
///
/// assert!(parse_number_token("Am").is_none());
/// ```
pub fn parse_number_token(token: &str) -> Option<NumberToken> {
    let (degree, len) = Degree::parse_prefix(token)?;
    let rest = &token[len..];

    let (quality, bass) = match rest.split_once('/') {
        Some((quality, bass)) => match parse_bass(bass) {
            Some(bass) => (quality, Some(bass)),
            None => (rest, None),
        },
        None => (rest, None),
    };

    Some(NumberToken {
        degree,
        quality: quality.to_string(),
        bass,
    })
}

fn parse_bass(s: &str) -> Option<Bass> {
    match Degree::parse_prefix(s) {
        Some((degree, len)) if len == s.len() => Some(Bass::Degree(degree)),
        _ => s.parse::<PitchClass>().ok().map(Bass::Note),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arabic_degrees() {
        let token = parse_number_token("1").unwrap();
        assert_eq!(token.degree, Degree::new(1));
        assert_eq!(token.quality, "");
        assert_eq!(token.bass, None);

        let token = parse_number_token("6m").unwrap();
        assert_eq!(token.degree, Degree::new(6));
        assert_eq!(token.quality, "m");
    }

    #[test]
    fn test_parse_roman_degrees_any_case() {
        let numerals = [
            ("I", 1),
            ("ii", 2),
            ("iii", 3),
            ("IV", 4),
            ("v", 5),
            ("Vi", 6),
            ("VII", 7),
        ];
        for (text, step) in numerals {
            assert_eq!(parse_number_token(text).unwrap().degree, Degree::new(step), "{}", text);
        }
    }

    #[test]
    fn test_parse_roman_prefers_longest_numeral() {
        let token = parse_number_token("viidim").unwrap();
        assert_eq!(token.degree, Degree::new(7));
        assert_eq!(token.quality, "dim");

        let token = parse_number_token("IVmaj7").unwrap();
        assert_eq!(token.degree, Degree::new(4));
        assert_eq!(token.quality, "maj7");
    }

    #[test]
    fn test_parse_accidentals() {
        assert_eq!(parse_number_token("♭7").unwrap().degree, Degree::flat(7));
        assert_eq!(parse_number_token("b3").unwrap().degree, Degree::flat(3));
        assert_eq!(
            parse_number_token("#4").unwrap().degree,
            Degree {
                step: 4,
                accidental: Some(Accidental::Sharp)
            }
        );
        assert_eq!(parse_number_token("bVII").unwrap().degree, Degree::flat(7));
    }

    #[test]
    fn test_parse_bass_forms() {
        assert_eq!(
            parse_number_token("1/3").unwrap().bass,
            Some(Bass::Degree(Degree::new(3)))
        );
        assert_eq!(
            parse_number_token("IV/♭7").unwrap().bass,
            Some(Bass::Degree(Degree::flat(7)))
        );
        assert_eq!(
            parse_number_token("5/B").unwrap().bass,
            Some(Bass::Note(PitchClass::B))
        );

        let token = parse_number_token("5/x").unwrap();
        assert_eq!(token.bass, None);
        assert_eq!(token.quality, "/x");
    }

    #[test]
    fn test_parse_rejects_non_degrees() {
        for text in ["", "8", "0", "C", "Am", "b", "x1"] {
            assert!(parse_number_token(text).is_none(), "{:?}", text);
        }
    }

    #[test]
    fn test_from_interval_table() {
        let written: Vec<String> = (0..12).map(|i| Degree::from_interval(i).to_string()).collect();
        assert_eq!(
            written,
            vec!["1", "♭2", "2", "♭3", "3", "4", "♭5", "5", "♭6", "6", "♭7", "7"]
        );
    }

    #[test]
    fn test_interval_inverts_from_interval() {
        for i in 0..12u8 {
            assert_eq!(Degree::from_interval(i).interval(), i as i32);
        }
    }
}
