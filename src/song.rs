//! # Song Records
//!
//! The catalog record shape consumed from the song store:
//!
//! ```json
//! {
//!   "id": 42,
//!   "title": "Amazing Grace",
//!   "sections": [{ "name": "Verse", "chords": "G - C - G" }],
//!   "originalKey": "G",
//!   "defaultKey": "A",
//!   "worshipLeaders": [{ "name": "Sam", "preferredKey": "Bb" }]
//! }
//! ```
//!
//! Only `chords` is interpreted. Other section fields and the `id` are carried
//! through unchanged so the record can be written back to the store.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::engine::Engine;
use crate::error::ChartError;
use crate::pitch::{self, PitchClass};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub id: Value,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_key: Option<String>,
    #[serde(default)]
    pub worship_leaders: Vec<WorshipLeader>,
}

/// One section of a song; `chords` is the progression text
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Section {
    #[serde(default)]
    pub chords: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorshipLeader {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_key: Option<String>,
}

impl Song {
    pub fn from_json(json: &str) -> Result<Self, ChartError> {
        serde_json::from_str(json).map_err(|e| ChartError::RecordError(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ChartError> {
        serde_json::to_string_pretty(self).map_err(|e| ChartError::RecordError(e.to_string()))
    }

    /// Key the sections are currently written in: `defaultKey`, else `originalKey`
    pub fn current_key(&self) -> Option<&str> {
        self.default_key
            .as_deref()
            .or(self.original_key.as_deref())
    }

    /// Preferred key of a worship leader, matched by name ignoring case
    pub fn preferred_key(&self, leader: &str) -> Option<&str> {
        self.find_leader(leader)
            .and_then(|l| l.preferred_key.as_deref())
    }

    fn find_leader(&self, name: &str) -> Option<&WorshipLeader> {
        let name = name.trim();
        self.worship_leaders
            .iter()
            .find(|l| l.name.trim().eq_ignore_ascii_case(name))
    }

    /// Move every chord section to `target` and make it the default key.
    ///
    /// Sections written in Nashville numbers are left as they are.
    pub fn transposed_to(&self, engine: &Engine, target: &str) -> Result<Song, ChartError> {
        let target_pitch = parse_key(target)?;
        let current = parse_key(self.current_key().ok_or(ChartError::MissingKey)?)?;
        let steps = pitch::shortest_distance(current, target_pitch);
        log::debug!("transposing {:?} by {} steps", self.title, steps);

        let sections = self
            .sections
            .iter()
            .map(|section| {
                let chords = if engine.looks_like_number_notation(&section.chords) {
                    section.chords.clone()
                } else {
                    engine.transpose_progression(&section.chords, steps)
                };
                Section {
                    chords,
                    extra: section.extra.clone(),
                }
            })
            .collect();

        Ok(Song {
            sections,
            default_key: Some(target.trim().to_string()),
            ..self.clone()
        })
    }

    /// The song in a worship leader's preferred key (unchanged if they have none)
    pub fn for_leader(&self, engine: &Engine, leader: &str) -> Result<Song, ChartError> {
        let leader = self
            .find_leader(leader)
            .ok_or_else(|| ChartError::UnknownLeader(leader.trim().to_string()))?;
        match &leader.preferred_key {
            Some(key) => self.transposed_to(engine, key),
            None => Ok(self.clone()),
        }
    }

    /// Rewrite every chord section as Nashville numbers in the current key
    pub fn to_numbers(&self, engine: &Engine) -> Result<Song, ChartError> {
        let key = self.current_key().ok_or(ChartError::MissingKey)?;
        let sections = self
            .sections
            .iter()
            .map(|section| -> Result<Section, ChartError> {
                let chords = if engine.looks_like_number_notation(&section.chords) {
                    section.chords.clone()
                } else {
                    engine.chords_to_numbers(&section.chords, key)?
                };
                Ok(Section {
                    chords,
                    extra: section.extra.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Song {
            sections,
            ..self.clone()
        })
    }
}

fn parse_key(key: &str) -> Result<PitchClass, ChartError> {
    key.parse::<PitchClass>()
        .map_err(|_| ChartError::UnknownKey(key.trim().to_string()))
}
