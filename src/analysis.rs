//! # Chart Analysis Heuristics
//!
//! Import-time helpers that decide how pasted text should be treated before it
//! reaches the transposer or the Nashville codec. They are heuristics, not part
//! of the transformation engine: a short lyric line full of note-letter words
//! can look like chords, and nothing here tries to be clever about that.
//!
//! - [`detect_key`] - most frequent chord root
//! - [`is_chord_line`] - at least two chord tokens on a line under 80 characters
//! - [`classify_lines`] - label every line as chords, lyrics or blank

use crate::pitch::{split_root, PitchClass};
use crate::transpose::chord_tokens;

/// Lines this long or longer are always treated as lyrics
pub const MAX_CHORD_LINE_CHARS: usize = 80;

/// Minimum number of chord tokens for a line to count as a chord line
pub const MIN_CHORDS_PER_LINE: usize = 2;

/// What a line of chart text holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Chords,
    Lyrics,
    Blank,
}

/// Guess the key of a progression as its most frequent chord root.
///
/// Ties go to the root that appears first. Returns `None` when the text has
/// no recognizable chords.
///
/// ```
/// use chordkit::analysis::detect_key;
/// use chordkit::pitch::PitchClass;
///
/// assert_eq!(detect_key("G - C - G - D"), Some(PitchClass::G));
/// assert_eq!(detect_key("no chords here"), None);
/// ```
pub fn detect_key(text: &str) -> Option<PitchClass> {
    // Root histogram, plus the order in which each root first appeared
    let mut histogram = [0usize; 12];
    let mut first_seen: Vec<PitchClass> = Vec::new();
    for span in chord_tokens(text) {
        let root = match split_root(span.text).map(|(root, _)| root.parse::<PitchClass>()) {
            Some(Ok(root)) => root,
            _ => continue,
        };
        if histogram[root.index() as usize] == 0 {
            first_seen.push(root);
        }
        histogram[root.index() as usize] += 1;
    }

    let mut best: Option<PitchClass> = None;
    for root in first_seen {
        let count = histogram[root.index() as usize];
        if best.map_or(true, |b| count > histogram[b.index() as usize]) {
            best = Some(root);
        }
    }
    best
}

/// Whether a single line looks like a line of chords
pub fn is_chord_line(line: &str) -> bool {
    line.chars().count() < MAX_CHORD_LINE_CHARS
        && chord_tokens(line).take(MIN_CHORDS_PER_LINE).count() >= MIN_CHORDS_PER_LINE
}

/// Label every line of `text`
pub fn classify_lines(text: &str) -> Vec<(LineKind, &str)> {
    text.lines()
        .map(|line| {
            let kind = if line.trim().is_empty() {
                LineKind::Blank
            } else if is_chord_line(line) {
                LineKind::Chords
            } else {
                LineKind::Lyrics
            };
            (kind, line)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_key_most_frequent_root() {
        assert_eq!(detect_key("D - G - A - D | Bm - G - D"), Some(PitchClass::D));
        assert_eq!(detect_key("Am F C G Am"), Some(PitchClass::A));
    }

    #[test]
    fn test_detect_key_tie_goes_to_first_seen() {
        assert_eq!(detect_key("F C F C"), Some(PitchClass::F));
    }

    #[test]
    fn test_detect_key_merges_enharmonics_and_skips_invalid() {
        assert_eq!(detect_key("Bb A# Cb Cb Cb"), Some(PitchClass::As));
        assert_eq!(detect_key("Cb E#"), None);
    }

    #[test]
    fn test_detect_key_counts_root_not_bass() {
        assert_eq!(detect_key("C/G C/G G"), Some(PitchClass::C));
    }

    #[test]
    fn test_is_chord_line() {
        assert!(is_chord_line("G   D/F#   Em   C"));
        assert!(is_chord_line("| Am | F |"));
        assert!(!is_chord_line("G"));
        assert!(!is_chord_line("Amazing grace how sweet the sound"));
    }

    #[test]
    fn test_long_lines_are_never_chord_lines() {
        let long = "C G ".repeat(20);
        assert!(long.chars().count() >= MAX_CHORD_LINE_CHARS);
        assert!(!is_chord_line(&long));
    }

    #[test]
    fn test_classify_lines() {
        let text = "G        C\nAmazing grace\n\nD   G";
        assert_eq!(
            classify_lines(text),
            vec![
                (LineKind::Chords, "G        C"),
                (LineKind::Lyrics, "Amazing grace"),
                (LineKind::Blank, ""),
                (LineKind::Chords, "D   G"),
            ]
        );
    }
}
