//! # Error Types
//!
//! This module defines all error types for chordkit.
//!
//! Transposition is total over arbitrary text and never fails. Errors only
//! surface where a result genuinely cannot be produced: an unknown key handed
//! to the Nashville codec, malformed chart metadata, or a song record that does
//! not deserialize.
//!
//! ## Error Types
//! - `InvalidPitchClass` - A note spelling outside the accepted set
//! - `UnknownKey` - A key argument that names no known scale
//! - `MissingKey` - An operation needed a current key and none was available
//! - `MetadataError` - Invalid YAML frontmatter in a chart
//! - `RecordError` - A song record failed to (de)serialize
//! - `UnknownLeader` - A song does not list the requested worship leader
//!
//! ## Usage
//! ```rust
//! use chordkit::{chords_to_numbers, ChartError};
//!
//! match chords_to_numbers("C - F - G", "H") {
//!     Ok(numbers) => println!("{}", numbers),
//!     Err(ChartError::UnknownKey(key)) => eprintln!("No scale for key {}", key),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// A spelled note that is not one of the 17 accepted spellings.
    ///
    /// # Example
    /// ```
    /// # use chordkit::ChartError;
    /// let err = ChartError::InvalidPitchClass("E#".to_string());
    /// assert_eq!(err.to_string(), "Invalid pitch class: E#");
    /// ```
    #[error("Invalid pitch class: {0}")]
    InvalidPitchClass(String),

    /// A key argument that has no diatonic scale.
    ///
    /// # Example
    /// ```
    /// # use chordkit::ChartError;
    /// let err = ChartError::UnknownKey("H".to_string());
    /// assert_eq!(err.to_string(), "Unknown key: H");
    /// ```
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    /// No key was declared and none could be detected from the chords.
    #[error("No key declared and none could be detected")]
    MissingKey,

    /// Invalid chart frontmatter.
    ///
    /// # Example
    /// ```
    /// # use chordkit::ChartError;
    /// let err = ChartError::MetadataError("tempo must be a number".to_string());
    /// assert_eq!(err.to_string(), "Invalid metadata: tempo must be a number");
    /// ```
    #[error("Invalid metadata: {0}")]
    MetadataError(String),

    /// A song record that could not be read or written.
    #[error("Invalid song record: {0}")]
    RecordError(String),

    /// The song lists no worship leader by this name.
    #[error("Unknown worship leader: {0}")]
    UnknownLeader(String),
}
