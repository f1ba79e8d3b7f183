//! # Chord Resolver
//!
//! Turns a (root, chord type) pair into the keyboard positions that sound in the chord.
//!
//! ## Algorithm
//! 1. Anchor the root at the base octave (3 unless configured otherwise)
//! 2. For each offset in the chord type, add it to the root's chromatic index
//! 3. Split the sum into an octave shift (`sum / 12`) and a pitch class (`sum % 12`)
//! 4. Keep the tone if it lands on the C3-C5 keyboard, otherwise drop it with a warning
//!
//! Offset order is preserved, so the root always comes first.
//!
//! ## Example
//! ```rust
//! use chordkeys::{ChordResolver, ChordType, PitchClass};
//!
//! let chord = ChordResolver::default().resolve(PitchClass::A, ChordType::Diminished7)?;
//! assert_eq!(chord.note_names(), vec!["A3", "C4", "D#4", "F#4"]);
//! # Ok::<(), chordkeys::ChordError>(())
//! ```
//!
//! ## Dropped Tones
//! The keyboard ends at C5. Extended chords on high roots lose their upper tones:
//! ```rust
//! use chordkeys::resolve_chord;
//!
//! // B maj9 = B3 D#4 F#4 A#4 C#5, and C#5 is off the keyboard
//! assert_eq!(resolve_chord("B", "maj9")?, vec!["B3", "D#4", "F#4", "A#4"]);
//! # Ok::<(), chordkeys::ChordError>(())
//! ```

use crate::error::ChordError;
use crate::theory::{
    ChordType, KeyboardPosition, PitchClass, DEFAULT_BASE_OCTAVE, HIGHEST_OCTAVE, LOWEST_OCTAVE,
};
use serde::Serialize;
use tracing::{debug, warn};

/// A resolved chord: the chord's tones that fit on the keyboard, root first
///
/// Derived on every request and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chord {
    pub root: PitchClass,
    pub chord_type: ChordType,
    pub notes: Vec<KeyboardPosition>,
}

impl Chord {
    /// Display name, root followed by the chord id (e.g. `Cmajor`, `F#min7`)
    pub fn name(&self) -> String {
        format!("{}{}", self.root, self.chord_type)
    }

    pub fn note_names(&self) -> Vec<String> {
        self.notes.iter().map(ToString::to_string).collect()
    }

    pub fn contains(&self, position: &KeyboardPosition) -> bool {
        self.notes.contains(position)
    }
}

/// Stateless resolver anchored at a fixed base octave
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordResolver {
    base_octave: u8,
}

impl Default for ChordResolver {
    fn default() -> Self {
        Self {
            base_octave: DEFAULT_BASE_OCTAVE,
        }
    }
}

impl ChordResolver {
    /// Resolver whose roots sit in `base_octave`. Only octaves 3 through 5 touch the keyboard.
    pub fn with_base_octave(base_octave: u8) -> Result<Self, ChordError> {
        if !(LOWEST_OCTAVE..=HIGHEST_OCTAVE).contains(&base_octave) {
            return Err(ChordError::ConfigError(format!(
                "base octave must be between {} and {}, got {}",
                LOWEST_OCTAVE, HIGHEST_OCTAVE, base_octave
            )));
        }
        Ok(Self { base_octave })
    }

    pub fn base_octave(&self) -> u8 {
        self.base_octave
    }

    /// Resolve a chord onto the keyboard.
    ///
    /// Tones past C5 are dropped, not reported as errors.
    ///
    /// # Errors
    /// Returns [`ChordError::RootOutOfRange`] when the root at the base octave is
    /// itself off the keyboard (only possible for base octave 5 and roots above C).
    pub fn resolve(&self, root: PitchClass, chord_type: ChordType) -> Result<Chord, ChordError> {
        let base = KeyboardPosition::new(root, self.base_octave);
        if !base.is_on_keyboard() {
            return Err(ChordError::RootOutOfRange {
                root: root.to_string(),
                octave: self.base_octave,
            });
        }

        let mut notes = Vec::with_capacity(chord_type.intervals().len());
        for &interval in chord_type.intervals() {
            let total = root.index() + interval;
            let position = KeyboardPosition::new(
                PitchClass::from_index(total % 12),
                self.base_octave + total / 12,
            );

            if position.is_on_keyboard() {
                notes.push(position);
            } else {
                warn!(
                    note = %position,
                    root = %root,
                    chord_type = %chord_type,
                    "chord tone is outside the keyboard range, dropping it"
                );
            }
        }

        debug!(root = %root, chord_type = %chord_type, notes = notes.len(), "resolved chord");

        Ok(Chord {
            root,
            chord_type,
            notes,
        })
    }

    /// Resolve from the textual root and chord type, returning note names like `"E3"`.
    ///
    /// # Errors
    /// - [`ChordError::InvalidRoot`] if `root` is not a pitch class name
    /// - [`ChordError::UnsupportedChord`] if `chord_type` is not in the chord table
    pub fn resolve_names(&self, root: &str, chord_type: &str) -> Result<Vec<String>, ChordError> {
        let root = root.parse::<PitchClass>()?;
        let chord_type = chord_type.parse::<ChordType>()?;
        Ok(self.resolve(root, chord_type)?.note_names())
    }
}

/// Resolve a chord with the root anchored at octave 3.
///
/// # Example
/// ```rust
/// use chordkeys::resolve_chord;
///
/// assert_eq!(resolve_chord("C", "major")?, vec!["C3", "E3", "G3"]);
/// # Ok::<(), chordkeys::ChordError>(())
/// ```
pub fn resolve_chord(root: &str, chord_type: &str) -> Result<Vec<String>, ChordError> {
    ChordResolver::default().resolve_names(root, chord_type)
}
