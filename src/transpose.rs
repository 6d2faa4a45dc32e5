//! # Position Transposer
//!
//! Moves the C-based CAGED templates into any key.
//!
//! Each template slides up the neck by the tonic's pitch class. When that
//! pushes the shape to fret 12 or beyond, it folds back down an octave. A
//! shape landing on fret 11 for a tonic with authored open-position grips is
//! pulled down to the open position instead, and those grips replace the
//! mechanically transposed ones.

use crate::catalog::{self, CagedShape, PositionTemplate, MUTED, ROMAN_POSITIONS};
use crate::key::Key;
use crate::numeral::Numeral;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Chord voicing: the fret stopped on each string, string 1 first. -1 means muted.
pub type Voicing = Vec<i8>;

/// Chord voicings of one position, in chord-list order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiatonicChords(Vec<(Numeral, Voicing)>);

impl DiatonicChords {
    pub fn get(&self, numeral: Numeral) -> Option<&Voicing> {
        self.0.iter().find(|(n, _)| *n == numeral).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Numeral, &Voicing)> {
        self.0.iter().map(|(n, v)| (*n, v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Numeral, Voicing)> for DiatonicChords {
    fn from_iter<T: IntoIterator<Item = (Numeral, Voicing)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Serialized as a `{ "I": [...], "ii": [...] }` map
impl Serialize for DiatonicChords {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (numeral, voicing) in &self.0 {
            map.serialize_entry(numeral.as_str(), voicing)?;
        }
        map.end()
    }
}

/// One fretboard position in a given key, hydrated from a [`PositionTemplate`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub caged: CagedShape,
    /// Lowest fret of the position, 0-11
    pub position_num: u8,
    /// "O", "I", ... "XII"
    pub roman: String,
    /// "Open" for the open position, otherwise the roman numeral
    pub label: String,
    pub chords: DiatonicChords,
}

/// Transpose a single fret, leaving muted strings alone
fn transpose_fret(fret: i8, semitones: i8) -> i8 {
    if fret == MUTED {
        fret
    } else {
        fret + semitones
    }
}

/// Convert a template written in C into a position in `key`
pub fn transpose(template: &PositionTemplate, key: &Key) -> Position {
    let key_chroma = key.tonic.chroma();
    let raw_position = template.position_num + key_chroma;
    let mut position_num = raw_position % 12;

    // An almost-open position becomes the open position when grips exist for it
    if position_num == 11 && catalog::has_open_position_voicings(key_chroma) {
        tracing::debug!(
            shape = %template.caged,
            tonic = %key.tonic,
            "folding fret-11 position to open position"
        );
        position_num = 0;
    }

    // Checked after the fold above so a folded position drops an octave too
    let octave_offset: i8 = if raw_position != position_num { 12 } else { 0 };
    let semitones = key_chroma as i8 - octave_offset;

    let roman = ROMAN_POSITIONS[position_num as usize];
    let label = if roman == "O" { "Open" } else { roman };

    let chords = template
        .chords
        .iter()
        .map(|(numeral, grip)| {
            let open_grip = if position_num == 0 {
                catalog::open_position_voicing(key_chroma, *numeral)
            } else {
                None
            };
            let voicing: Voicing = match open_grip {
                Some(open) => open.to_vec(),
                None => grip.iter().map(|&fret| transpose_fret(fret, semitones)).collect(),
            };
            (*numeral, voicing)
        })
        .collect();

    Position {
        caged: template.caged,
        position_num,
        roman: roman.to_string(),
        label: label.to_string(),
        chords,
    }
}

/// All five positions of a key, lowest fret first
pub fn get_positions(key: &Key) -> Vec<Position> {
    let mut positions: Vec<Position> = catalog::templates(key.mode)
        .iter()
        .map(|template| transpose(template, key))
        .collect();
    positions.sort_by_key(|p| p.position_num);
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{create_key, Mode};

    fn voicing(position: &Position, numeral: Numeral) -> Vec<i8> {
        position.chords.get(numeral).cloned().unwrap()
    }

    #[test]
    fn test_c_is_identity() {
        for (tonic, mode) in [("C", Mode::Major), ("C", Mode::Minor)] {
            let key = create_key(tonic, &mode.to_string()).unwrap();
            let positions = get_positions(&key);
            for (position, template) in positions.iter().zip(catalog::templates(mode)) {
                assert_eq!(position.position_num, template.position_num);
                assert_eq!(position.caged, template.caged);
                for (numeral, grip) in template.chords {
                    // C major vii° at the open position uses the authored Bdim grip
                    if position.position_num == 0 && catalog::open_position_voicing(0, *numeral).is_some() {
                        continue;
                    }
                    assert_eq!(voicing(position, *numeral), grip.to_vec(), "{} {}", mode, numeral);
                }
            }
        }
    }

    #[test]
    fn test_a_major_folds_a_shape_to_open() {
        let key = create_key("A", "major").unwrap();
        let positions = get_positions(&key);
        let open = &positions[0];
        assert_eq!(open.caged, CagedShape::A);
        assert_eq!(open.position_num, 0);
        assert_eq!(open.roman, "O");
        assert_eq!(open.label, "Open");
        // A-shape I chord dropped an octave: the open A chord
        assert_eq!(voicing(open, Numeral::I), [0, 2, 2, 2, 0, -1]);
        // Authored grips replace the transposed ones
        assert_eq!(voicing(open, Numeral::Ii), [2, 3, 4, 4, 2, -1]);
        assert_eq!(voicing(open, Numeral::V7), [0, 0, 1, 0, 2, 0]);
    }

    #[test]
    fn test_positions_without_open_grips_stay_at_eleven() {
        let key = create_key("B", "major").unwrap();
        let positions = get_positions(&key);
        let nums: Vec<u8> = positions.iter().map(|p| p.position_num).collect();
        assert_eq!(nums, [1, 3, 6, 8, 11]);
        assert_eq!(positions[4].caged, CagedShape::C);
        assert_eq!(positions[4].label, "XI");
        assert_eq!(voicing(&positions[4], Numeral::I), [11, 12, 11, 13, 14, -1]);
    }

    #[test]
    fn test_wrapped_positions_drop_an_octave() {
        let key = create_key("F", "major").unwrap();
        let positions = get_positions(&key);
        // E shape at 7 + 5 wraps to fret 0
        let open = &positions[0];
        assert_eq!(open.caged, CagedShape::E);
        assert_eq!(open.label, "Open");
        assert_eq!(voicing(open, Numeral::I), [1, 1, 2, 3, 3, 1]);
    }

    #[test]
    fn test_e_minor_open_position() {
        let key = create_key("E", "minor").unwrap();
        let positions = get_positions(&key);
        let open = &positions[0];
        assert_eq!(open.caged, CagedShape::E);
        assert_eq!(voicing(open, Numeral::MinorI), [0, 0, 0, 2, 2, 0]);
        assert_eq!(voicing(open, Numeral::V), [2, 4, 4, 4, 2, -1]);
        assert_eq!(voicing(open, Numeral::FlatIII), [3, 0, 0, 0, 2, 3]);
    }

    #[test]
    fn test_folded_open_position_mutes_lowest_fret() {
        // E shape at 7 + 4 lands on 11 and folds to open. Without an open
        // grip, v drops a full octave and string 3 (fret 7) falls off the neck.
        let key = create_key("E", "minor").unwrap();
        let open = &get_positions(&key)[0];
        assert_eq!(open.label, "Open");
        assert_eq!(open.caged, CagedShape::E);
        assert_eq!(voicing(open, Numeral::MinorV), [-1, 0, -1, 0, 2, -1]);
    }

    #[test]
    fn test_open_grips_only_at_open_position() {
        let key = create_key("A", "major").unwrap();
        for position in get_positions(&key).iter().filter(|p| p.position_num != 0) {
            assert_ne!(voicing(position, Numeral::V7), [0, 0, 1, 0, 2, 0]);
        }
    }

    #[test]
    fn test_serializes_chords_as_map() {
        let key = create_key("C", "major").unwrap();
        let position = &get_positions(&key)[0];
        let json = serde_json::to_value(position).unwrap();
        assert_eq!(json["positionNum"], 0);
        assert_eq!(json["caged"], "C");
        assert_eq!(json["label"], "Open");
        assert_eq!(json["chords"]["I"], serde_json::json!([0, 1, 0, 2, 3, -1]));
        assert_eq!(json["chords"]["vii°"], serde_json::json!([-1, 3, 4, 3, 2, -1]));
    }
}
