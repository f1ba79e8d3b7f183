//! # Error Types
//!
//! All failures surfaced by the chord resolver and its collaborators.
//!
//! ## Error Types
//! - `InvalidRoot` - root note is not one of the 12 pitch class names
//! - `UnsupportedChord` - chord type is not in the chord table
//! - `RootOutOfRange` - root anchored at the base octave falls off the keyboard
//! - `InvalidPosition` - keyboard position text could not be parsed
//! - `ConfigError` - invalid YAML configuration
//!
//! A chord tone above C5 is not an error; the resolver drops it and logs a warning.
//!
//! ## Usage
//! ```rust
//! use chordkeys::{resolve_chord, ChordError};
//!
//! match resolve_chord("H", "major") {
//!     Ok(notes) => println!("{}", notes.join(", ")),
//!     Err(ChordError::InvalidRoot(root)) => eprintln!("no such root: {}", root),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChordError {
    /// Root note is not one of the 12 chromatic names.
    ///
    /// # Example
    /// ```
    /// # use chordkeys::ChordError;
    /// let err = ChordError::InvalidRoot("H".to_string());
    /// assert_eq!(err.to_string(), "Invalid root note: H");
    /// ```
    #[error("Invalid root note: {0}")]
    InvalidRoot(String),

    /// Chord type is not in the chord table.
    ///
    /// # Example
    /// ```
    /// # use chordkeys::ChordError;
    /// let err = ChordError::UnsupportedChord("unknown".to_string());
    /// assert_eq!(err.to_string(), "Unsupported chord type: unknown");
    /// ```
    #[error("Unsupported chord type: {0}")]
    UnsupportedChord(String),

    /// The root itself, anchored at the base octave, is not on the keyboard.
    #[error("Root {root}{octave} is outside the keyboard range C3-C5")]
    RootOutOfRange { root: String, octave: u8 },

    #[error("Invalid keyboard position: {0}")]
    InvalidPosition(String),

    #[error("Invalid config: {0}")]
    ConfigError(String),
}
