//! # Chord Directory
//!
//! Diatonic chords of a key: their roman numerals, roots and names, and the
//! voicing of any chord in any of the key's five positions.
//!
//! Chord quality is never inferred. Each numeral carries exactly one suffix
//! ("" major, "m" minor, "°" diminished, "7" dominant seventh).
//!
//! ## Example
//! ```rust
//! use caged::{create_key, get_chord_list};
//!
//! let key = create_key("G", "major")?;
//! let names: Vec<String> = get_chord_list(&key).into_iter().map(|c| c.name).collect();
//! assert_eq!(names, ["G", "Am", "Bm", "C", "D", "Em", "F#°", "D7"]);
//! # Ok::<(), caged::CagedError>(())
//! ```

use crate::key::Key;
use crate::numeral::Numeral;
use crate::pitch::PitchName;
use crate::transpose::{get_positions, Voicing};
use serde::Serialize;

/// One row of the chord selector
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChordListEntry {
    pub roman: Numeral,
    pub root: PitchName,
    /// Root plus quality suffix, e.g. "F#°"
    pub name: String,
}

/// All diatonic chords of a key, in fixed numeral order
pub fn get_chord_list(key: &Key) -> Vec<ChordListEntry> {
    Numeral::for_mode(key.mode)
        .iter()
        .filter_map(|&roman| {
            let root = get_chord_root(key, roman)?;
            Some(ChordListEntry {
                roman,
                root,
                name: format!("{}{}", root, roman.suffix()),
            })
        })
        .collect()
}

/// Root of a chord, or `None` if the numeral is not used in the key's mode
pub fn get_chord_root(key: &Key, roman: Numeral) -> Option<PitchName> {
    let index = roman.degree_index(key.mode)?;
    key.scale_notes.get(index).copied()
}

/// Voicing of a chord in one of the key's positions.
///
/// Returns a fresh copy, or `None` when `position_index` is not 0-4 or the
/// numeral is not used in the key's mode.
pub fn get_chord_voicing(key: &Key, position_index: usize, roman: Numeral) -> Option<Voicing> {
    get_positions(key)
        .get(position_index)
        .and_then(|position| position.chords.get(roman))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::create_key;

    fn chord_names(tonic: &str, mode: &str) -> Vec<String> {
        let key = create_key(tonic, mode).unwrap();
        get_chord_list(&key).into_iter().map(|c| c.name).collect()
    }

    #[test]
    fn test_c_major_chord_names() {
        assert_eq!(chord_names("C", "major"), ["C", "Dm", "Em", "F", "G", "Am", "B°", "G7"]);
    }

    #[test]
    fn test_c_minor_chord_names() {
        assert_eq!(
            chord_names("C", "minor"),
            ["Cm", "D°", "Eb", "Fm", "Gm", "Ab", "Bb", "B°", "G", "G7"]
        );
    }

    #[test]
    fn test_flat_key_spelling() {
        assert_eq!(
            chord_names("Bb", "major"),
            ["Bb", "Cm", "Dm", "Eb", "F", "Gm", "A°", "F7"]
        );
        assert_eq!(
            chord_names("E", "minor"),
            ["Em", "F#°", "G", "Am", "Bm", "C", "D", "D#°", "B", "B7"]
        );
    }

    #[test]
    fn test_roman_order_and_roots() {
        let key = create_key("A", "minor").unwrap();
        let list = get_chord_list(&key);
        let romans: Vec<&str> = list.iter().map(|c| c.roman.as_str()).collect();
        assert_eq!(romans, ["i", "ii°", "bIII", "iv", "v", "bVI", "bVII", "vii°", "V", "V7"]);
        assert_eq!(list[7].root.to_string(), "G#");
        assert_eq!(list[8].root.to_string(), "E");
    }

    #[test]
    fn test_chord_root_outside_mode() {
        let key = create_key("C", "major").unwrap();
        assert_eq!(get_chord_root(&key, Numeral::FlatVII), None);
        assert_eq!(get_chord_root(&key, Numeral::V7).unwrap().to_string(), "G");
    }

    #[test]
    fn test_chord_voicing_is_a_copy() {
        let key = create_key("C", "major").unwrap();
        let mut voicing = get_chord_voicing(&key, 0, Numeral::I).unwrap();
        assert_eq!(voicing, [0, 1, 0, 2, 3, -1]);
        voicing[0] = 5;
        assert_eq!(get_chord_voicing(&key, 0, Numeral::I).unwrap(), [0, 1, 0, 2, 3, -1]);
    }

    #[test]
    fn test_chord_voicing_out_of_range() {
        let key = create_key("C", "major").unwrap();
        assert_eq!(get_chord_voicing(&key, 5, Numeral::I), None);
        assert_eq!(get_chord_voicing(&key, 0, Numeral::MinorI), None);
    }

    #[test]
    fn test_serialized_entry() {
        let key = create_key("G", "major").unwrap();
        let json = serde_json::to_value(&get_chord_list(&key)[6]).unwrap();
        assert_eq!(json, serde_json::json!({ "roman": "vii°", "root": "F#", "name": "F#°" }));
    }
}
