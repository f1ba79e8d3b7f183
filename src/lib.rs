pub mod config;
pub mod error;
pub mod keyboard;
pub mod render;
pub mod resolver;
pub mod theory;

pub use config::{Config, OutputFormat};
pub use error::*;
pub use keyboard::{layout, KeyColor, KeyLayout, Keyboard};
pub use render::{render_keyboard, render_summary};
pub use resolver::{resolve_chord, Chord, ChordResolver};
pub use theory::*;

/// Resolve a chord and return it with a keyboard showing its notes.
/// This is the entry point for front ends that draw the keyboard.
pub fn show_chord(
    resolver: &ChordResolver,
    root: &str,
    chord_type: &str,
) -> Result<(Chord, Keyboard), ChordError> {
    let root = root.parse::<PitchClass>()?;
    let chord_type = chord_type.parse::<ChordType>()?;
    let chord = resolver.resolve(root, chord_type)?;

    let mut keyboard = Keyboard::new();
    keyboard.show(&chord);
    Ok((chord, keyboard))
}
