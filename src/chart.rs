//! # Chord Charts
//!
//! A chart is a progression body with optional YAML frontmatter:
//!
//! ```text
//! ---
//! title: Amazing Grace
//! key: G
//! tempo: 72
//! ---
//! G   G7  C   G
//! G   Em  A   D
//! ```
//!
//! The frontmatter must start on the first line. Everything after the closing
//! `---` line is the body and is kept byte for byte.
//!
//! ## Example
//! ```rust
//! use chordkit::{Chart, Engine};
//!
//! let chart = Chart::parse("---\nkey: G\n---\nG - C - D\n").unwrap();
//! let moved = chart.transpose_to(Engine::shared(), "A").unwrap();
//! assert_eq!(moved.body, "A - D - E\n");
//! assert_eq!(moved.metadata.key.as_deref(), Some("A"));
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::detect_key;
use crate::engine::Engine;
use crate::error::ChartError;
use crate::pitch::{self, PitchClass};

/// Chart frontmatter
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ChartMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_signature: Option<String>,
}

/// Notation a chart body is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    Chords,
    Numbers,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    pub metadata: ChartMetadata,
    pub body: String,
}

impl Chart {
    /// Parse a chart, validating the declared key if there is one.
    pub fn parse(source: &str) -> Result<Self, ChartError> {
        let (frontmatter, body) = split_frontmatter(source);

        let metadata = match frontmatter {
            Some(content) if !content.trim().is_empty() => serde_yaml::from_str(content)
                .map_err(|e| ChartError::MetadataError(e.to_string()))?,
            _ => ChartMetadata::default(),
        };

        if let Some(key) = &metadata.key {
            parse_key(key)?;
        }

        Ok(Chart {
            metadata,
            body: body.to_string(),
        })
    }

    /// Write the chart back out. Frontmatter is omitted when there is none.
    pub fn render(&self) -> Result<String, ChartError> {
        if self.metadata == ChartMetadata::default() {
            return Ok(self.body.clone());
        }
        let yaml = serde_yaml::to_string(&self.metadata)
            .map_err(|e| ChartError::MetadataError(e.to_string()))?;
        Ok(format!("---\n{}---\n{}", yaml, self.body))
    }

    pub fn notation(&self, engine: &Engine) -> Notation {
        if engine.looks_like_number_notation(&self.body) {
            Notation::Numbers
        } else {
            Notation::Chords
        }
    }

    /// Declared key, or for a chord body the most frequent root
    pub fn current_key(&self, engine: &Engine) -> Result<PitchClass, ChartError> {
        match &self.metadata.key {
            Some(key) => parse_key(key),
            None if self.notation(engine) == Notation::Chords => {
                detect_key(&self.body).ok_or(ChartError::MissingKey)
            }
            None => Err(ChartError::MissingKey),
        }
    }

    /// Move the chart to `target` by the shortest distance.
    ///
    /// A Nashville body is key-independent, so only the key changes, and it
    /// needs no current key.
    pub fn transpose_to(&self, engine: &Engine, target: &str) -> Result<Chart, ChartError> {
        let target_pitch = parse_key(target)?;

        let body = match self.notation(engine) {
            Notation::Numbers => {
                if let Some(key) = &self.metadata.key {
                    parse_key(key)?;
                }
                self.body.clone()
            }
            Notation::Chords => {
                let current = self.current_key(engine)?;
                log::debug!("transposing chart from {} to {}", current, target_pitch);
                engine.transpose_progression(
                    &self.body,
                    pitch::shortest_distance(current, target_pitch),
                )
            }
        };

        Ok(Chart {
            metadata: ChartMetadata {
                key: Some(target.trim().to_string()),
                ..self.metadata.clone()
            },
            body,
        })
    }

    /// Rewrite a chord body as Nashville numbers, recording the key used
    pub fn to_numbers(&self, engine: &Engine) -> Result<Chart, ChartError> {
        if self.notation(engine) == Notation::Numbers {
            return Ok(self.clone());
        }
        let key = self.current_key(engine)?;
        Ok(Chart {
            metadata: ChartMetadata {
                key: Some(self.metadata.key.clone().unwrap_or_else(|| key.to_string())),
                ..self.metadata.clone()
            },
            body: engine.chords_to_numbers(&self.body, key.as_str())?,
        })
    }

    /// Rewrite a Nashville body as chords in the declared key
    pub fn to_chords(&self, engine: &Engine) -> Result<Chart, ChartError> {
        if self.notation(engine) == Notation::Chords {
            return Ok(self.clone());
        }
        let key = self.metadata.key.as_deref().ok_or(ChartError::MissingKey)?;
        Ok(Chart {
            metadata: self.metadata.clone(),
            body: engine.numbers_to_chords(&self.body, key)?,
        })
    }
}

fn parse_key(key: &str) -> Result<PitchClass, ChartError> {
    key.parse::<PitchClass>()
        .map_err(|_| ChartError::UnknownKey(key.trim().to_string()))
}

/// Split leading `---` frontmatter from the body.
///
/// Returns (frontmatter_content, body). Without a complete frontmatter block
/// the whole source is the body.
fn split_frontmatter(source: &str) -> (Option<&str>, &str) {
    let mut lines = source.split_inclusive('\n');
    let start = match lines.next() {
        Some(first) if first.trim() == "---" => first.len(),
        _ => return (None, source),
    };

    let mut offset = start;
    for line in lines {
        if line.trim() == "---" {
            return (Some(&source[start..offset]), &source[offset + line.len()..]);
        }
        offset += line.len();
    }
    (None, source)
}
