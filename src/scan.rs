//! Scan-transform-reassemble over free text.
//!
//! Both token grammars (absolute chords and Nashville numbers) run through the
//! same helper: find every grammar match that stands alone as a word, hand it
//! to a transform, and copy everything else through byte for byte.

use regex::Regex;

/// A token occurrence within the scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'t> {
    pub start: usize,
    pub end: usize,
    pub text: &'t str,
}

/// Iterator over grammar matches that are not glued to surrounding words.
///
/// A match counts only when the characters on either side of it (if any) are
/// not alphanumeric or `_`. This keeps lyric words like "Cab" or "Dog" from
/// being read as chords.
pub struct Tokens<'r, 't> {
    text: &'t str,
    matches: regex::Matches<'r, 't>,
    skip_labels: bool,
}

impl<'r, 't> Tokens<'r, 't> {
    pub fn new(pattern: &'r Regex, text: &'t str) -> Self {
        Self {
            text,
            matches: pattern.find_iter(text),
            skip_labels: false,
        }
    }

    /// Also reject matches directly followed by `:`, as in `Verse 1:`.
    pub fn skip_labels(mut self) -> Self {
        self.skip_labels = true;
        self
    }

    fn accepts(&self, start: usize, end: usize) -> bool {
        stands_alone(self.text, start, end)
            && !(self.skip_labels && self.text[end..].starts_with(':'))
    }
}

impl<'r, 't> Iterator for Tokens<'r, 't> {
    type Item = Span<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(m) = self.matches.next() {
            if self.accepts(m.start(), m.end()) {
                return Some(Span {
                    start: m.start(),
                    end: m.end(),
                    text: m.as_str(),
                });
            }
        }
        None
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn stands_alone(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.map_or(false, is_word_char) && !after.map_or(false, is_word_char)
}

/// Rebuild `text`, replacing each standalone token for which `transform`
/// returns `Some`. Tokens mapped to `None` and all text between tokens are
/// copied unchanged.
pub fn replace_tokens<F>(text: &str, pattern: &Regex, transform: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    replace_spans(Tokens::new(pattern, text), transform)
}

/// [`replace_tokens`] over an already configured token iterator
pub fn replace_spans<F>(tokens: Tokens<'_, '_>, mut transform: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let text = tokens.text;
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    let mut last = 0;
    for span in tokens {
        if let Some(replacement) = transform(span.text) {
            out.push_str(&text[last..span.start]);
            out.push_str(&replacement);
            last = span.end;
        }
    }
    out.push_str(&text[last..]);
    out
}

/// Number of standalone tokens in `text`
pub fn count_tokens(text: &str, pattern: &Regex) -> usize {
    Tokens::new(pattern, text).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters() -> Regex {
        Regex::new(r"[A-G]").unwrap()
    }

    #[test]
    fn test_tokens_skip_glued_matches() {
        let re = letters();
        let found: Vec<&str> = Tokens::new(&re, "C Cab xD E|F").map(|s| s.text).collect();
        assert_eq!(found, vec!["C", "E", "F"]);
    }

    #[test]
    fn test_replace_preserves_surrounding_text() {
        let re = letters();
        let out = replace_tokens("C  -  F |\nG", &re, |t| Some(t.to_lowercase()));
        assert_eq!(out, "c  -  f |\ng");
    }

    #[test]
    fn test_replace_passes_through_rejected_tokens() {
        let re = letters();
        let out = replace_tokens("C D E", &re, |t| {
            if t == "D" {
                None
            } else {
                Some("x".into())
            }
        });
        assert_eq!(out, "x D x");
    }

    #[test]
    fn test_skip_labels() {
        let re = letters();
        let found: Vec<&str> = Tokens::new(&re, "A: B C:\nD :")
            .skip_labels()
            .map(|s| s.text)
            .collect();
        assert_eq!(found, vec!["B", "D"]);
        assert_eq!(Tokens::new(&re, "A: B").count(), 2);

        let out = replace_spans(Tokens::new(&re, "Part A: A").skip_labels(), |t| {
            Some(t.to_lowercase())
        });
        assert_eq!(out, "Part A: a");
    }

    #[test]
    fn test_count_tokens() {
        let re = letters();
        assert_eq!(count_tokens("A B Dog", &re), 2);
        assert_eq!(count_tokens("", &re), 0);
    }
}
