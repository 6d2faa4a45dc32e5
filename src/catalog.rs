//! # Position Catalog
//!
//! Hand-authored CAGED chord voicings in the key of C, for standard guitar
//! tuning. Nothing here is computed; the transposer reads these tables.
//!
//! ## Layout
//! - Voicings list frets from string 1 (high E) to string 6 (low E); `-1` is muted
//! - `position_num` is the lowest fret of the shape's I (or i) chord
//! - Major positions: C@0, A@2, G@4, E@7, D@9
//! - Minor positions: C@0, A@3, G@5, E@7, D@9
//!
//! Minor templates include `V` and `V7`, borrowed from the parallel major.
//!
//! ## Open-Position Voicings
//! For a few tonics, a transposed shape landing on the open position is
//! replaced chord-by-chord with a more idiomatic open grip.

use crate::error::CagedError;
use crate::key::Mode;
use crate::numeral::Numeral;
use serde::Serialize;
use std::fmt;

/// Muted string marker in a voicing
pub const MUTED: i8 = -1;

/// Number of strings the catalog voicings are written for
pub const CATALOG_STRINGS: usize = 6;

/// Position labels by lowest fret. "O" is the open position.
pub const ROMAN_POSITIONS: [&str; 13] = [
    "O", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII",
];

/// The five CAGED chord shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CagedShape {
    C,
    A,
    G,
    E,
    D,
}

impl fmt::Display for CagedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CagedShape::C => "C",
            CagedShape::A => "A",
            CagedShape::G => "G",
            CagedShape::E => "E",
            CagedShape::D => "D",
        };
        f.write_str(s)
    }
}

/// Fret per string, string 1 first
pub type GripData = [i8; CATALOG_STRINGS];

/// All diatonic chords of one CAGED position, in C
#[derive(Debug)]
pub struct PositionTemplate {
    pub caged: CagedShape,
    pub position_num: u8,
    pub chords: &'static [(Numeral, GripData)],
}

impl PositionTemplate {
    pub fn chord(&self, numeral: Numeral) -> Option<&'static GripData> {
        self.chords
            .iter()
            .find(|(n, _)| *n == numeral)
            .map(|(_, grip)| grip)
    }
}

static C_MAJOR_POSITIONS: [PositionTemplate; 5] = [
    PositionTemplate {
        caged: CagedShape::C,
        position_num: 0,
        chords: &[
            (Numeral::I, [0, 1, 0, 2, 3, -1]),
            (Numeral::Ii, [1, 3, 2, 0, -1, -1]),
            (Numeral::Iii, [0, 0, 0, 2, 2, 0]),
            (Numeral::IV, [1, 1, 2, 3, 3, 1]),
            (Numeral::V, [3, 0, 0, 0, 2, 3]),
            (Numeral::Vi, [0, 1, 2, 2, 0, -1]),
            (Numeral::ViiDim, [1, 0, -1, 0, 2, -1]),
            (Numeral::V7, [1, 0, 0, 0, 2, 3]),
        ],
    },
    PositionTemplate {
        caged: CagedShape::A,
        position_num: 2,
        chords: &[
            (Numeral::I, [3, 5, 5, 5, 3, -1]),
            (Numeral::Ii, [-1, 3, 2, 3, 5, -1]),
            (Numeral::Iii, [3, 5, 4, 2, -1, -1]),
            (Numeral::IV, [5, 6, 5, 3, -1, -1]),
            (Numeral::V, [3, 3, 4, 5, 5, 3]),
            (Numeral::Vi, [5, 5, 5, -1, -1, 5]),
            (Numeral::ViiDim, [-1, 3, 4, 3, 2, -1]),
            (Numeral::V7, [-1, 3, 4, 3, -1, 3]),
        ],
    },
    PositionTemplate {
        caged: CagedShape::G,
        position_num: 4,
        chords: &[
            (Numeral::I, [8, 5, 5, 5, 7, 8]),
            (Numeral::Ii, [5, 6, 7, 7, 5, -1]),
            (Numeral::Iii, [-1, 5, 4, 5, 7, -1]),
            (Numeral::IV, [5, 6, 5, 7, 8, -1]),
            (Numeral::V, [7, 8, 7, 5, -1, -1]),
            (Numeral::Vi, [5, 5, 5, 7, 7, 5]),
            (Numeral::ViiDim, [7, 6, 7, -1, -1, 7]),
            (Numeral::V7, [7, 6, 7, 5, -1, -1]),
        ],
    },
    PositionTemplate {
        caged: CagedShape::E,
        position_num: 7,
        chords: &[
            (Numeral::I, [8, 8, 9, 10, 10, 8]),
            (Numeral::Ii, [10, 10, 10, -1, -1, 10]),
            (Numeral::Iii, [7, 8, 9, 9, 7, -1]),
            (Numeral::IV, [8, 10, 10, 10, 8, -1]),
            (Numeral::V, [7, 8, 7, 9, 10, -1]),
            (Numeral::Vi, [8, 10, 9, 7, -1, -1]),
            (Numeral::ViiDim, [-1, -1, 10, 9, 8, 10]),
            (Numeral::V7, [-1, 8, 10, 9, 10, -1]),
        ],
    },
    PositionTemplate {
        caged: CagedShape::D,
        position_num: 9,
        chords: &[
            (Numeral::I, [12, 13, 12, 10, -1, -1]),
            (Numeral::Ii, [10, 10, 10, 12, 12, 10]),
            (Numeral::Iii, [12, 12, 12, -1, -1, 12]),
            (Numeral::IV, [13, 10, 10, 10, 12, 13]),
            (Numeral::V, [10, 12, 12, 12, 10, -1]),
            (Numeral::Vi, [-1, 10, 9, 10, 12, -1]),
            (Numeral::ViiDim, [10, 12, 10, 9, -1, -1]),
            (Numeral::V7, [10, 12, 10, 12, 10, -1]),
        ],
    },
];

static C_MINOR_POSITIONS: [PositionTemplate; 5] = [
    PositionTemplate {
        caged: CagedShape::C,
        position_num: 0,
        chords: &[
            (Numeral::MinorI, [-1, 1, 0, 1, 3, -1]),
            (Numeral::IiDim, [1, 3, 1, 0, -1, -1]),
            (Numeral::FlatIII, [3, 4, 3, 1, -1, -1]),
            (Numeral::MinorIv, [1, 1, 1, 3, 3, 1]),
            (Numeral::MinorV, [3, 3, 3, -1, -1, 3]),
            (Numeral::FlatVI, [4, 1, 1, 1, 3, 4]),
            (Numeral::FlatVII, [1, 3, 3, 3, 1, -1]),
            (Numeral::ViiDim, [1, 0, -1, 0, 2, -1]),
            (Numeral::V, [3, 0, 0, 0, 2, 3]),
            (Numeral::V7, [1, 0, 0, 0, 2, 3]),
        ],
    },
    PositionTemplate {
        caged: CagedShape::A,
        position_num: 3,
        chords: &[
            (Numeral::MinorI, [3, 4, 5, 5, 3, -1]),
            (Numeral::IiDim, [-1, 3, -1, 3, 5, 4]),
            (Numeral::FlatIII, [3, 4, 3, 5, 6, -1]),
            (Numeral::MinorIv, [4, 6, 5, 3, -1, -1]),
            (Numeral::MinorV, [3, 3, 3, 5, 5, 3]),
            (Numeral::FlatVI, [4, 4, 5, 6, 6, 4]),
            (Numeral::FlatVII, [6, 3, 3, 3, 5, 6]),
            (Numeral::ViiDim, [-1, 3, 4, 3, 5, -1]),
            (Numeral::V, [3, 3, 4, 5, 5, 3]),
            (Numeral::V7, [3, 3, 4, 3, 5, 3]),
        ],
    },
    PositionTemplate {
        caged: CagedShape::G,
        position_num: 5,
        chords: &[
            (Numeral::MinorI, [8, 8, 8, -1, -1, 8]),
            (Numeral::IiDim, [-1, 6, 7, 6, 5, -1]),
            (Numeral::FlatIII, [6, 8, 8, 8, 6, -1]),
            (Numeral::MinorIv, [-1, 6, 5, 6, 8, -1]),
            (Numeral::MinorV, [6, 8, 7, 5, -1, -1]),
            (Numeral::FlatVI, [8, 9, 8, 6, -1, -1]),
            (Numeral::FlatVII, [6, 6, 7, 8, 8, 6]),
            (Numeral::ViiDim, [7, 6, 7, -1, -1, 7]),
            (Numeral::V, [7, 8, 7, 5, -1, -1]),
            (Numeral::V7, [7, 6, 7, 5, -1, -1]),
        ],
    },
    PositionTemplate {
        caged: CagedShape::E,
        position_num: 7,
        chords: &[
            (Numeral::MinorI, [8, 8, 8, 10, 10, 8]),
            (Numeral::IiDim, [10, 9, 10, -1, -1, 10]),
            (Numeral::FlatIII, [11, 8, 8, 8, 10, 11]),
            (Numeral::MinorIv, [8, 9, 10, 10, 8, -1]),
            (Numeral::MinorV, [-1, 8, 7, 8, 10, -1]),
            (Numeral::FlatVI, [8, 9, 8, 10, 11, -1]),
            (Numeral::FlatVII, [10, 11, 10, 8, -1, -1]),
            (Numeral::ViiDim, [7, -1, 7, 9, 8, 7]),
            (Numeral::V, [7, 8, 7, 9, 10, -1]),
            (Numeral::V7, [-1, 8, 10, 9, 10, -1]),
        ],
    },
    PositionTemplate {
        caged: CagedShape::D,
        position_num: 9,
        chords: &[
            (Numeral::MinorI, [11, 13, 12, 10, -1, -1]),
            (Numeral::IiDim, [10, -1, 10, 12, 11, 10]),
            (Numeral::FlatIII, [11, 11, 12, 13, 13, 11]),
            (Numeral::MinorIv, [13, 13, 13, -1, -1, 13]),
            (Numeral::MinorV, [10, 11, 12, 12, 10, -1]),
            (Numeral::FlatVI, [11, 13, 13, 13, 11, -1]),
            (Numeral::FlatVII, [10, 11, 10, 12, 13, -1]),
            (Numeral::ViiDim, [10, 12, 10, 9, -1, -1]),
            (Numeral::V, [10, 12, 12, 12, 10, -1]),
            (Numeral::V7, [10, 12, 10, 12, 10, -1]),
        ],
    },
];

/// Alternate open-position grips, keyed by tonic pitch class
static OPEN_POSITION_VOICINGS: [(u8, &[(Numeral, GripData)]); 5] = [
    // C
    (0, &[
        (Numeral::ViiDim, [-1, 3, 4, 3, 2, -1]), // Bdim
    ]),
    // A
    (9, &[
        (Numeral::IiDim, [-1, 3, 4, 3, 2, -1]), // Bdim
        (Numeral::Ii, [2, 3, 4, 4, 2, -1]),     // Bm
        (Numeral::Iii, [0, 2, 1, 2, -1, -1]),   // C#m
        (Numeral::ViiDim, [-1, 0, 1, 0, 2, -1]), // G#dim
        (Numeral::V7, [0, 0, 1, 0, 2, 0]),      // E7
    ]),
    // G
    (7, &[
        (Numeral::Iii, [2, 3, 4, 4, 2, -1]), // Bm
    ]),
    // E
    (4, &[
        (Numeral::Iii, [-1, 0, 1, 1, 2, 4]),     // G#m
        (Numeral::V, [2, 4, 4, 4, 2, -1]),       // B
        (Numeral::Vi, [0, 2, 1, 2, -1, -1]),     // C#m
        (Numeral::V7, [2, 0, 2, 1, 2, -1]),      // B7
        (Numeral::ViiDim, [-1, -1, 2, 1, 0, 2]), // D#dim
    ]),
    // D
    (2, &[
        (Numeral::Vi, [2, 3, 4, 4, 2, -1]),     // Bm
        (Numeral::ViiDim, [0, 2, 0, 2, -1, -1]), // C#dim
    ]),
];

/// Position templates for a mode, in authored order
pub fn templates(mode: Mode) -> &'static [PositionTemplate] {
    match mode {
        Mode::Major => &C_MAJOR_POSITIONS,
        Mode::Minor => &C_MINOR_POSITIONS,
    }
}

/// Whether any open-position grips are authored for a tonic pitch class
pub fn has_open_position_voicings(tonic_chroma: u8) -> bool {
    OPEN_POSITION_VOICINGS
        .iter()
        .any(|(chroma, _)| *chroma == tonic_chroma)
}

/// Authored open-position grip for a tonic pitch class and chord
pub fn open_position_voicing(tonic_chroma: u8, numeral: Numeral) -> Option<&'static GripData> {
    OPEN_POSITION_VOICINGS
        .iter()
        .find(|(chroma, _)| *chroma == tonic_chroma)
        .and_then(|(_, grips)| grips.iter().find(|(n, _)| *n == numeral))
        .map(|(_, grip)| grip)
}

/// Check the static tables against an instrument with `string_count` strings.
///
/// # Errors
/// Returns [`CagedError::Catalog`] naming the first malformed template.
pub fn validate_catalog(string_count: usize) -> Result<(), CagedError> {
    for mode in [Mode::Major, Mode::Minor] {
        let table = templates(mode);
        if table.len() != 5 {
            return Err(CagedError::Catalog {
                shape: mode.to_string(),
                message: format!("expected 5 templates, found {}", table.len()),
            });
        }
        for template in table {
            validate_template(template, mode, string_count)?;
        }
        let duplicate = table
            .iter()
            .enumerate()
            .any(|(i, t)| table[..i].iter().any(|other| other.caged == t.caged));
        if duplicate {
            return Err(CagedError::Catalog {
                shape: mode.to_string(),
                message: "duplicate CAGED shape".to_string(),
            });
        }
    }

    if string_count != CATALOG_STRINGS {
        return Err(CagedError::Catalog {
            shape: "open".to_string(),
            message: format!(
                "open-position grips have {} strings, tuning has {}",
                CATALOG_STRINGS, string_count
            ),
        });
    }
    for (_, grips) in OPEN_POSITION_VOICINGS.iter() {
        for (numeral, grip) in grips.iter() {
            if grip.iter().any(|&fret| fret < MUTED) {
                return Err(CagedError::Catalog {
                    shape: "open".to_string(),
                    message: format!("{} has a negative fret", numeral),
                });
            }
        }
    }
    Ok(())
}

fn validate_template(
    template: &PositionTemplate,
    mode: Mode,
    string_count: usize,
) -> Result<(), CagedError> {
    let fail = |message: String| CagedError::Catalog {
        shape: template.caged.to_string(),
        message,
    };

    if template.position_num > 11 {
        return Err(fail(format!("position {} out of range", template.position_num)));
    }

    let numerals: Vec<Numeral> = template.chords.iter().map(|(n, _)| *n).collect();
    if numerals.as_slice() != Numeral::for_mode(mode) {
        return Err(fail(format!("{} chords do not match the {} numerals", mode, mode)));
    }

    for (numeral, grip) in template.chords {
        if grip.len() != string_count {
            return Err(fail(format!(
                "{} has {} strings, tuning has {}",
                numeral,
                grip.len(),
                string_count
            )));
        }
        if grip.iter().any(|&fret| fret < MUTED) {
            return Err(fail(format!("{} has a negative fret", numeral)));
        }
        // Shapes never reach below their own position, so a wrapped position
        // stays on the neck. A fret-11 shape folded to open drops 12 after
        // rising only 11, so a fret at its position_num comes out muted.
        if grip
            .iter()
            .any(|&fret| fret != MUTED && (fret as i16) < template.position_num as i16)
        {
            return Err(fail(format!(
                "{} reaches below fret {}",
                numeral, template.position_num
            )));
        }
    }
    Ok(())
}
