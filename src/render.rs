//! # Text Rendering
//!
//! Draws a [`Keyboard`] and a resolved [`Chord`] for the terminal.
//!
//! ## Output
//! ```text
//!    [ ] [ ]     [ ] [ ] [ ]     [ ] [ ]     [ ] [ ] [ ]
//! |## |   |## |   |## |   |   |   |   |   |   |   |   |   |   |
//!  C3  D   E   F   G   A   B   C4  D   E   F   G   A   B   C5
//! ```
//! Every white key is a 4-column cell. A black key is drawn over the seam to the
//! right of the white key below it. Highlighted keys are filled with `#`.

use crate::keyboard::{layout, KeyColor, KeyLayout, Keyboard, WHITE_KEY_WIDTH};
use crate::resolver::Chord;
use crate::theory::PitchClass;

const CELL_WIDTH: usize = 4;

/// `"<chord name>: <notes>"`, e.g. `Cmajor: C3, E3, G3`
pub fn render_summary(chord: &Chord) -> String {
    format!("{}: {}", chord.name(), chord.note_names().join(", "))
}

/// Text column of a key's left edge: its pixel offset scaled to `CELL_WIDTH`, rounded
fn column(key: &KeyLayout) -> usize {
    let px = key.left_px as usize;
    let white_width = WHITE_KEY_WIDTH as usize;
    (px * CELL_WIDTH + white_width / 2) / white_width
}

/// Render the keyboard as text rows: black keys, white keys, and optionally labels
pub fn render_keyboard(keyboard: &Keyboard, labels: bool) -> String {
    let keys = layout();
    let white_count = keys.iter().filter(|k| k.color == KeyColor::White).count();
    let width = white_count * CELL_WIDTH + 1;

    let mut black_row = vec![' '; width];
    let mut white_row = vec![' '; width];
    let mut label_row = vec![' '; width];

    for key in &keys {
        let lit = keyboard.is_highlighted(&key.position);
        let col = column(key);

        match key.color {
            KeyColor::Black => put(&mut black_row, col, if lit { "[#]" } else { "[ ]" }),
            KeyColor::White => {
                put(&mut white_row, col, if lit { "|## " } else { "|   " });
                if key.position.pitch_class == PitchClass::C {
                    put(&mut label_row, col + 1, &key.position.to_string());
                } else {
                    put(&mut label_row, col + 1, key.position.pitch_class.name());
                }
            }
        }
    }
    white_row[width - 1] = '|';

    let mut rows = vec![black_row, white_row];
    if labels {
        rows.push(label_row);
    }

    rows.into_iter()
        .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn put(row: &mut [char], col: usize, text: &str) {
    for (offset, ch) in text.chars().enumerate() {
        if let Some(slot) = row.get_mut(col + offset) {
            *slot = ch;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::ChordResolver;
    use crate::theory::ChordType;

    fn keyboard_for(root: PitchClass, chord_type: ChordType) -> (Chord, Keyboard) {
        let chord = ChordResolver::default().resolve(root, chord_type).unwrap();
        let mut keyboard = Keyboard::new();
        keyboard.show(&chord);
        (chord, keyboard)
    }

    #[test]
    fn test_summary() {
        let (chord, _) = keyboard_for(PitchClass::C, ChordType::Major);
        assert_eq!(render_summary(&chord), "Cmajor: C3, E3, G3");

        let (chord, _) = keyboard_for(PitchClass::A, ChordType::Diminished7);
        assert_eq!(render_summary(&chord), "Adim7: A3, C4, D#4, F#4");
    }

    #[test]
    fn test_white_keys_highlighted() {
        let (_, keyboard) = keyboard_for(PitchClass::C, ChordType::Major);
        let text = render_keyboard(&keyboard, false);
        let rows: Vec<&str> = text.lines().collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], "|## |   |## |   |## |   |   |   |   |   |   |   |   |   |   |");
        assert!(!rows[0].contains('#'));
    }

    #[test]
    fn test_black_keys_highlighted() {
        // A major: A3, C#4, E4
        let (_, keyboard) = keyboard_for(PitchClass::A, ChordType::Major);
        let text = render_keyboard(&keyboard, false);
        let black_row: Vec<char> = text.lines().next().unwrap().chars().collect();

        // C#3 straddles the seam after C3
        assert_eq!(black_row[3..6].iter().collect::<String>(), "[ ]");
        // C#4 straddles the seam after C4, the eighth white key
        assert_eq!(black_row[31..34].iter().collect::<String>(), "[#]");
        assert_eq!(black_row.iter().filter(|&&c| c == '[').count(), 10);
    }

    #[test]
    fn test_labels_row() {
        let keyboard = Keyboard::new();
        let text = render_keyboard(&keyboard, true);
        let rows: Vec<&str> = text.lines().collect();

        assert_eq!(rows.len(), 3);
        assert!(rows[2].starts_with(" C3  D   E   F   G   A   B   C4"));
        assert!(rows[2].ends_with("C5"));
    }

    #[test]
    fn test_columns_follow_layout() {
        let mut keyboard = Keyboard::new();
        let chord = ChordResolver::default()
            .resolve(PitchClass::C, ChordType::Dominant9)
            .unwrap();
        keyboard.show(&chord);
        let text = render_keyboard(&keyboard, false);
        let rows: Vec<Vec<char>> = text.lines().map(|row| row.chars().collect()).collect();

        for key in layout() {
            let col = column(&key);
            match key.color {
                KeyColor::White => {
                    assert_eq!(col, (key.left_px / WHITE_KEY_WIDTH) as usize * CELL_WIDTH);
                    assert_eq!(rows[1][col], '|');
                    let fill = if keyboard.is_highlighted(&key.position) { '#' } else { ' ' };
                    assert_eq!(rows[1][col + 1], fill, "{}", key.position);
                }
                KeyColor::Black => {
                    // Centered on the seam between two white cells
                    assert_eq!((col + 1) % CELL_WIDTH, 0, "{}", key.position);
                    assert_eq!(rows[0][col], '[');
                    let fill = if keyboard.is_highlighted(&key.position) { '#' } else { ' ' };
                    assert_eq!(rows[0][col + 1], fill, "{}", key.position);
                }
            }
        }
    }
}
