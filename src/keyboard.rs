//! # Keyboard Layout
//!
//! Geometry and highlight state for the 25-key C3-C5 keyboard.
//!
//! ## Layout
//! White keys sit side by side, `WHITE_KEY_WIDTH` px apart. Each black key is
//! centered on the seam after the white key below it, shifted left by
//! `BLACK_KEY_OFFSET` px:
//! ```text
//!  |C#|D#|  |F#|G#|A#|  ...
//! | C | D | E | F | G | A | B | C ...
//! ```
//!
//! ## Highlighting
//! [`Keyboard::show`] always clears the previous chord before marking the new one.

use crate::resolver::Chord;
use crate::theory::{keyboard_index, KeyboardPosition, KEYBOARD, KEYBOARD_LEN};
use tracing::warn;

/// Horizontal distance between white keys, in px
pub const WHITE_KEY_WIDTH: u32 = 30;

/// Black keys start this many px left of the seam they straddle
pub const BLACK_KEY_OFFSET: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyColor {
    White,
    Black,
}

/// Placement of one key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyLayout {
    pub position: KeyboardPosition,
    pub color: KeyColor,
    pub left_px: u32,
}

/// All 25 keys, white keys first (ascending), then black keys (ascending).
///
/// Black keys are drawn after white keys so they overlap them.
pub fn layout() -> Vec<KeyLayout> {
    let mut white = Vec::new();
    let mut black = Vec::new();
    let mut white_keys_so_far = 0;

    for position in KEYBOARD {
        if position.pitch_class.is_sharp() {
            black.push(KeyLayout {
                position,
                color: KeyColor::Black,
                left_px: white_keys_so_far * WHITE_KEY_WIDTH - BLACK_KEY_OFFSET,
            });
        } else {
            white.push(KeyLayout {
                position,
                color: KeyColor::White,
                left_px: white_keys_so_far * WHITE_KEY_WIDTH,
            });
            white_keys_so_far += 1;
        }
    }

    white.extend(black);
    white
}

/// Highlight state for every key on the keyboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyboard {
    active: [bool; KEYBOARD_LEN],
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Keyboard {
    pub fn new() -> Self {
        Self {
            active: [false; KEYBOARD_LEN],
        }
    }

    /// Replace the current highlights with the notes of `chord`
    pub fn show(&mut self, chord: &Chord) {
        self.clear();
        for note in &chord.notes {
            match keyboard_index(note) {
                Some(index) => self.active[index] = true,
                None => warn!(note = %note, "no key for chord note"),
            }
        }
    }

    pub fn clear(&mut self) {
        self.active = [false; KEYBOARD_LEN];
    }

    pub fn is_highlighted(&self, position: &KeyboardPosition) -> bool {
        keyboard_index(position)
            .map(|index| self.active[index])
            .unwrap_or(false)
    }

    /// Highlighted keys in ascending order
    pub fn highlighted(&self) -> Vec<KeyboardPosition> {
        KEYBOARD
            .iter()
            .zip(self.active.iter())
            .filter(|(_, &active)| active)
            .map(|(&position, _)| position)
            .collect()
    }
}
