//! # Chord Transposition
//!
//! Shifts every chord root inside a free-text progression by a number of
//! semitones, leaving bar lines, dashes, whitespace, line breaks and anything
//! that is not a chord exactly where it was.
//!
//! ## Chord Grammar
//! ```text
//! chord   = root quality* ("/" root)?
//! root    = "A".."G" ("#" | "b")?
//! quality = "maj" | "min" | "dim" | "aug" | "sus" | "add" | "m" | "M" | digit
//!         | ("b" | "#") digit+
//! ```
//! A match only counts when it is not glued to a neighbouring word, so
//! "Cab" and "Dog" in a lyric line are left alone.
//!
//! ## Example
//! ```rust
//! use chordkit::transpose::transpose_progression;
//!
//! assert_eq!(transpose_progression("G/B | C", 2), "A/C# | D");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ChartError;
use crate::pitch::{split_root, PitchClass};
use crate::scan::{replace_tokens, Tokens};

static CHORD_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-G][#b]?(?:maj|min|dim|aug|sus|add|m|M|\d|[b#]\d+)*(?:/[A-G][#b]?)?")
        .expect("chord token pattern")
});

/// Standalone chord tokens in `text`, in order of appearance
pub fn chord_tokens(text: &str) -> Tokens<'static, '_> {
    Tokens::new(&CHORD_TOKEN, text)
}

/// Transpose a single chord token, including the bass note of a slash chord.
///
/// Fails with [`ChartError::InvalidPitchClass`] when the root or bass is not a
/// recognized spelling.
pub fn try_transpose_chord(token: &str, steps: i32) -> Result<String, ChartError> {
    let (root, suffix) =
        split_root(token).ok_or_else(|| ChartError::InvalidPitchClass(token.to_string()))?;
    let root = root.parse::<PitchClass>()?.transpose(steps);

    // The bass of a slash chord is a second root and moves by the same amount
    let suffix = match suffix.split_once('/') {
        Some((quality, bass)) if split_root(bass).is_some() => {
            format!("{}/{}", quality, try_transpose_chord(bass, steps)?)
        }
        _ => suffix.to_string(),
    };

    Ok(format!("{}{}", root, suffix))
}

/// Transpose a single chord token; unrecognized tokens come back unchanged.
///
/// ```
/// use chordkit::transpose::transpose_chord;
///
/// assert_eq!(transpose_chord("Am7", 3), "Cm7");
/// assert_eq!(transpose_chord("G/B", 2), "A/C#");
/// assert_eq!(transpose_chord("Cb", 2), "Cb");
/// ```
pub fn transpose_chord(token: &str, steps: i32) -> String {
    if steps == 0 {
        return token.to_string();
    }
    try_transpose_chord(token, steps).unwrap_or_else(|e| {
        log::debug!("leaving chord token unchanged: {}", e);
        token.to_string()
    })
}

/// Transpose every chord in a progression by `steps` semitones.
///
/// Total over all input: text that is not a chord is copied through
/// verbatim, and a zero shift returns the input untouched.
pub fn transpose_progression(text: &str, steps: i32) -> String {
    if steps == 0 {
        return text.to_string();
    }
    replace_tokens(text, &CHORD_TOKEN, |token| match try_transpose_chord(token, steps) {
        Ok(chord) => Some(chord),
        Err(e) => {
            log::debug!("leaving chord token unchanged: {}", e);
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose_simple_chords() {
        assert_eq!(transpose_chord("C", 2), "D");
        assert_eq!(transpose_chord("Am", 2), "Bm");
        assert_eq!(transpose_chord("B", 1), "C");
        assert_eq!(transpose_chord("C", -1), "B");
    }

    #[test]
    fn test_transpose_keeps_quality_suffix() {
        assert_eq!(transpose_chord("Cmaj7", 5), "Fmaj7");
        assert_eq!(transpose_chord("Dsus4", 2), "Esus4");
        assert_eq!(transpose_chord("Gadd9", -2), "Fadd9");
        assert_eq!(transpose_chord("Em7b5", 1), "Fm7b5");
    }

    #[test]
    fn test_flats_normalize_to_sharps() {
        assert_eq!(transpose_chord("Bb", 2), "C");
        assert_eq!(transpose_chord("Eb", 1), "E");
        assert_eq!(transpose_chord("Ab", 1), "A");
        assert_eq!(transpose_chord("Db", 2), "D#");
    }

    #[test]
    fn test_slash_chord_bass_is_transposed() {
        assert_eq!(transpose_chord("G/B", 2), "A/C#");
        assert_eq!(transpose_chord("Cmaj7/E", -2), "A#maj7/D");
        assert_eq!(transpose_progression("G/B", 2), "A/C#");
    }

    #[test]
    fn test_invalid_tokens_are_errors_internally() {
        assert_eq!(
            try_transpose_chord("Cb", 1),
            Err(ChartError::InvalidPitchClass("Cb".to_string()))
        );
        assert_eq!(
            try_transpose_chord("C/E#", 1),
            Err(ChartError::InvalidPitchClass("E#".to_string()))
        );
        assert!(try_transpose_chord("hello", 1).is_err());
    }

    #[test]
    fn test_progression_preserves_separators() {
        assert_eq!(
            transpose_progression("C  -  F | G\nAm", 2),
            "D  -  G | A\nBm"
        );
        assert_eq!(
            transpose_progression("| C / / / | F / G / |\r\n", 7),
            "| G / / / | C / D / |\r\n"
        );
    }

    #[test]
    fn test_progression_ignores_lyric_words() {
        assert_eq!(
            transpose_progression("G\nCab to the Dog park", 2),
            "A\nCab to the Dog park"
        );
    }

    #[test]
    fn test_progression_passes_invalid_roots_through() {
        assert_eq!(transpose_progression("Cb - E# - F", 1), "Cb - E# - F#");
    }

    #[test]
    fn test_zero_steps_is_identity() {
        let text = "Bb - Eb | F\n  Gm7";
        assert_eq!(transpose_progression(text, 0), text);
        assert_eq!(transpose_chord("Bb", 0), "Bb");
    }

    #[test]
    fn test_progression_round_trip() {
        let text = "Intro: C  G/B | Am7  Fmaj7\n\nVerse:\nC - Dm7 - Esus4 - E\nF#m7b5 | B7";
        for steps in -12..=12 {
            let there = transpose_progression(text, steps);
            assert_eq!(transpose_progression(&there, -steps), text, "steps {}", steps);
        }
    }

    #[test]
    fn test_extreme_steps_never_fail() {
        assert_eq!(transpose_progression("G", i32::MAX), "D");
        assert_eq!(transpose_progression("G/B", i32::MIN), "B/D#");
        let text = "C - G/B | Am7";
        for steps in [i32::MAX, i32::MIN + 1, i32::MAX - 5] {
            let there = transpose_progression(text, steps);
            assert_eq!(transpose_progression(&there, -steps), text, "steps {}", steps);
        }
    }

    #[test]
    fn test_octave_shift_preserves_sharp_text() {
        assert_eq!(transpose_progression("C# F#m", 12), "C# F#m");
    }

    #[test]
    fn test_chord_tokens() {
        let found: Vec<&str> = chord_tokens("Am  G/B - Cadd9 Dog").map(|s| s.text).collect();
        assert_eq!(found, vec!["Am", "G/B", "Cadd9"]);
    }
}
