//! # Music Theory Tables
//!
//! Static, read-only data the resolver works from:
//! - the 12 chromatic pitch classes (index 0 = C),
//! - the chord table mapping each chord type to its semitone offsets,
//! - the 25 keyboard positions from C3 to C5 inclusive.
//!
//! ## Keyboard Range
//! ```text
//! index:  0   1    2   3    4   5   6    7   8    9   10   11   12 ... 24
//! note:   C3  C#3  D3  D#3  E3  F3  F#3  G3  G#3  A3  A#3  B3   C4 ... C5
//! ```
//! A position's index is its distance in semitones from C3, so
//! `index = (octave - 3) * 12 + pitch_class.index()`.
//!
//! ## Related Modules
//! - `resolver` - Stacks chord offsets on a root and maps them onto `KEYBOARD`
//! - `keyboard` - Visual layout of the same 25 keys

use crate::error::ChordError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Lowest octave on the keyboard (C3 is key 0)
pub const LOWEST_OCTAVE: u8 = 3;

/// Highest octave on the keyboard (only C5 exists in it)
pub const HIGHEST_OCTAVE: u8 = 5;

/// Octave the root is anchored at unless configured otherwise
pub const DEFAULT_BASE_OCTAVE: u8 = 3;

/// Number of keys from C3 to C5 inclusive
pub const KEYBOARD_LEN: usize = 25;

/// Pitch class names in chromatic order
pub const PITCH_CLASS_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// One of the 12 chromatic pitch classes, octave-independent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl PitchClass {
    /// All pitch classes in chromatic order
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// Semitones above C (C=0, B=11)
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Pitch class at a chromatic index, wrapping mod 12
    pub const fn from_index(index: u8) -> PitchClass {
        Self::ALL[(index % 12) as usize]
    }

    pub fn name(self) -> &'static str {
        PITCH_CLASS_NAMES[self.index() as usize]
    }

    /// True for the five black-key pitch classes
    pub fn is_sharp(self) -> bool {
        matches!(
            self,
            PitchClass::CSharp
                | PitchClass::DSharp
                | PitchClass::FSharp
                | PitchClass::GSharp
                | PitchClass::ASharp
        )
    }
}

impl FromStr for PitchClass {
    type Err = ChordError;

    /// Only the exact names in `PITCH_CLASS_NAMES` are accepted. No flats, no lowercase.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PITCH_CLASS_NAMES
            .iter()
            .position(|&name| name == s)
            .map(|i| Self::from_index(i as u8))
            .ok_or_else(|| ChordError::InvalidRoot(s.to_string()))
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for PitchClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A named interval pattern stacked on a root
///
/// # Chord Table
/// | id          | offsets            | alias |
/// |-------------|--------------------|-------|
/// | `major`     | 0, 4, 7            |       |
/// | `minor`     | 0, 3, 7            |       |
/// | `dim`       | 0, 3, 6            |       |
/// | `aug`       | 0, 4, 8            |       |
/// | `maj7`      | 0, 4, 7, 11        |       |
/// | `min7`      | 0, 3, 7, 10        |       |
/// | `dominant7` | 0, 4, 7, 10        | `7`   |
/// | `min7b5`    | 0, 3, 6, 10        |       |
/// | `dim7`      | 0, 3, 6, 9         |       |
/// | `maj9`      | 0, 4, 7, 11, 14    |       |
/// | `min9`      | 0, 3, 7, 10, 14    |       |
/// | `dominant9` | 0, 4, 7, 10, 14    | `9`   |
/// | `sus2`      | 0, 2, 7            |       |
/// | `sus4`      | 0, 5, 7            |       |
/// | `add9`      | 0, 4, 7, 14        |       |
/// | `six`       | 0, 4, 7, 9         | `6`   |
/// | `min6`      | 0, 3, 7, 9         |       |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChordType {
    Major,
    Minor,
    Diminished,
    Augmented,
    Major7,
    Minor7,
    Dominant7,
    Minor7Flat5,
    Diminished7,
    Major9,
    Minor9,
    Dominant9,
    Sus2,
    Sus4,
    Add9,
    Sixth,
    Minor6,
}

impl ChordType {
    /// All chord types in table order
    pub const ALL: [ChordType; 17] = [
        ChordType::Major,
        ChordType::Minor,
        ChordType::Diminished,
        ChordType::Augmented,
        ChordType::Major7,
        ChordType::Minor7,
        ChordType::Dominant7,
        ChordType::Minor7Flat5,
        ChordType::Diminished7,
        ChordType::Major9,
        ChordType::Minor9,
        ChordType::Dominant9,
        ChordType::Sus2,
        ChordType::Sus4,
        ChordType::Add9,
        ChordType::Sixth,
        ChordType::Minor6,
    ];

    /// Canonical identifier used for lookup and display
    pub fn id(self) -> &'static str {
        match self {
            ChordType::Major => "major",
            ChordType::Minor => "minor",
            ChordType::Diminished => "dim",
            ChordType::Augmented => "aug",
            ChordType::Major7 => "maj7",
            ChordType::Minor7 => "min7",
            ChordType::Dominant7 => "dominant7",
            ChordType::Minor7Flat5 => "min7b5",
            ChordType::Diminished7 => "dim7",
            ChordType::Major9 => "maj9",
            ChordType::Minor9 => "min9",
            ChordType::Dominant9 => "dominant9",
            ChordType::Sus2 => "sus2",
            ChordType::Sus4 => "sus4",
            ChordType::Add9 => "add9",
            ChordType::Sixth => "six",
            ChordType::Minor6 => "min6",
        }
    }

    /// Semitone offsets from the root, ascending. The first offset is always 0.
    pub fn intervals(self) -> &'static [u8] {
        match self {
            ChordType::Major => &[0, 4, 7],
            ChordType::Minor => &[0, 3, 7],
            ChordType::Diminished => &[0, 3, 6],
            ChordType::Augmented => &[0, 4, 8],
            ChordType::Major7 => &[0, 4, 7, 11],
            ChordType::Minor7 => &[0, 3, 7, 10],
            ChordType::Dominant7 => &[0, 4, 7, 10],
            ChordType::Minor7Flat5 => &[0, 3, 6, 10],
            ChordType::Diminished7 => &[0, 3, 6, 9],
            ChordType::Major9 => &[0, 4, 7, 11, 14],
            ChordType::Minor9 => &[0, 3, 7, 10, 14],
            ChordType::Dominant9 => &[0, 4, 7, 10, 14],
            ChordType::Sus2 => &[0, 2, 7],
            ChordType::Sus4 => &[0, 5, 7],
            ChordType::Add9 => &[0, 4, 7, 14],
            ChordType::Sixth => &[0, 4, 7, 9],
            ChordType::Minor6 => &[0, 3, 7, 9],
        }
    }
}

impl FromStr for ChordType {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Bare-digit keys from the older chord selector
        let canonical = match s {
            "7" => "dominant7",
            "9" => "dominant9",
            "6" => "six",
            other => other,
        };
        Self::ALL
            .iter()
            .copied()
            .find(|chord_type| chord_type.id() == canonical)
            .ok_or_else(|| ChordError::UnsupportedChord(s.to_string()))
    }
}

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl Serialize for ChordType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An absolute note: pitch class plus octave number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyboardPosition {
    pub octave: u8,
    pub pitch_class: PitchClass,
}

impl KeyboardPosition {
    pub const fn new(pitch_class: PitchClass, octave: u8) -> Self {
        Self {
            octave,
            pitch_class,
        }
    }

    /// Signed semitone distance from C3. Negative below the keyboard.
    pub fn semitone_index(&self) -> i32 {
        (self.octave as i32 - LOWEST_OCTAVE as i32) * 12 + self.pitch_class.index() as i32
    }

    pub fn is_on_keyboard(&self) -> bool {
        keyboard_index(self).is_some()
    }
}

impl fmt::Display for KeyboardPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class, self.octave)
    }
}

impl FromStr for KeyboardPosition {
    type Err = ChordError;

    /// Parse `<pitch class><octave>`, e.g. `C3` or `F#4`. The position need not be on the keyboard.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChordError::InvalidPosition(s.to_string());

        let split = s.find(|c: char| c.is_ascii_digit()).ok_or_else(invalid)?;
        let (name, octave) = s.split_at(split);
        let pitch_class = name.parse::<PitchClass>().map_err(|_| invalid())?;
        let octave = octave.parse::<u8>().map_err(|_| invalid())?;

        Ok(Self::new(pitch_class, octave))
    }
}

impl Serialize for KeyboardPosition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Every key from C3 to C5, ascending
pub const KEYBOARD: [KeyboardPosition; KEYBOARD_LEN] = build_keyboard();

const fn build_keyboard() -> [KeyboardPosition; KEYBOARD_LEN] {
    let mut keys = [KeyboardPosition::new(PitchClass::C, LOWEST_OCTAVE); KEYBOARD_LEN];
    let mut i = 0;
    while i < KEYBOARD_LEN {
        keys[i] = KeyboardPosition::new(PitchClass::ALL[i % 12], LOWEST_OCTAVE + (i / 12) as u8);
        i += 1;
    }
    keys
}

/// Index of a position within `KEYBOARD`, or `None` if it is off the keyboard
pub fn keyboard_index(position: &KeyboardPosition) -> Option<usize> {
    usize::try_from(position.semitone_index())
        .ok()
        .filter(|&index| index < KEYBOARD_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_class_order() {
        assert_eq!(PitchClass::ALL.len(), 12);
        for (i, pitch_class) in PitchClass::ALL.iter().enumerate() {
            assert_eq!(pitch_class.index() as usize, i);
            assert_eq!(pitch_class.name(), PITCH_CLASS_NAMES[i]);
        }
        assert_eq!(PitchClass::from_index(12), PitchClass::C);
        assert_eq!(PitchClass::from_index(23), PitchClass::B);
    }

    #[test]
    fn test_pitch_class_parsing() {
        assert_eq!("C#".parse::<PitchClass>(), Ok(PitchClass::CSharp));
        assert_eq!("B".parse::<PitchClass>(), Ok(PitchClass::B));
        assert_eq!("H".parse::<PitchClass>(), Err(ChordError::InvalidRoot("H".to_string())));
        // Flats and lowercase are not in the name table
        assert!("Db".parse::<PitchClass>().is_err());
        assert!("c".parse::<PitchClass>().is_err());
    }

    #[test]
    fn test_chord_table_offsets_start_at_root() {
        for chord_type in ChordType::ALL {
            let intervals = chord_type.intervals();
            assert_eq!(intervals[0], 0, "{} must include the root", chord_type);
            assert!(intervals.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_chord_type_lookup() {
        assert_eq!("major".parse::<ChordType>(), Ok(ChordType::Major));
        assert_eq!("dim7".parse::<ChordType>(), Ok(ChordType::Diminished7));
        assert_eq!("7".parse::<ChordType>(), Ok(ChordType::Dominant7));
        assert_eq!("9".parse::<ChordType>(), Ok(ChordType::Dominant9));
        assert_eq!("6".parse::<ChordType>(), Ok(ChordType::Sixth));
        assert_eq!(
            "unknown".parse::<ChordType>(),
            Err(ChordError::UnsupportedChord("unknown".to_string()))
        );

        for chord_type in ChordType::ALL {
            assert_eq!(chord_type.id().parse::<ChordType>(), Ok(chord_type));
        }
    }

    #[test]
    fn test_keyboard_range() {
        assert_eq!(KEYBOARD.len(), 25);
        assert_eq!(KEYBOARD[0].to_string(), "C3");
        assert_eq!(KEYBOARD[11].to_string(), "B3");
        assert_eq!(KEYBOARD[12].to_string(), "C4");
        assert_eq!(KEYBOARD[24].to_string(), "C5");

        for (i, position) in KEYBOARD.iter().enumerate() {
            assert_eq!(keyboard_index(position), Some(i));
        }
        assert!(KEYBOARD.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_off_keyboard_positions() {
        assert!(!KeyboardPosition::new(PitchClass::C, 2).is_on_keyboard());
        assert!(!KeyboardPosition::new(PitchClass::B, 2).is_on_keyboard());
        assert!(!KeyboardPosition::new(PitchClass::CSharp, 5).is_on_keyboard());
        assert!(KeyboardPosition::new(PitchClass::C, 5).is_on_keyboard());
    }

    #[test]
    fn test_keyboard_position_parsing() {
        assert_eq!(
            "F#4".parse::<KeyboardPosition>(),
            Ok(KeyboardPosition::new(PitchClass::FSharp, 4))
        );
        assert_eq!("D6".parse::<KeyboardPosition>(), Ok(KeyboardPosition::new(PitchClass::D, 6)));
        for text in ["", "C", "4", "H3", "C#x"] {
            assert_eq!(
                text.parse::<KeyboardPosition>(),
                Err(ChordError::InvalidPosition(text.to_string()))
            );
        }
    }
}
