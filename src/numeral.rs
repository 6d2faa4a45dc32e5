//! Roman-numeral chord ids and their per-mode degree/quality tables.

use crate::error::CagedError;
use crate::key::Mode;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Diatonic chord id, written the way the chord list displays it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Numeral {
    /// `I`
    I,
    /// `ii`
    Ii,
    /// `iii`
    Iii,
    /// `IV`
    IV,
    /// `V` (major in both modes; borrowed from the parallel major in minor)
    V,
    /// `vi`
    Vi,
    /// `vii°`
    ViiDim,
    /// `V7`
    V7,
    /// `i`
    MinorI,
    /// `ii°`
    IiDim,
    /// `bIII`
    FlatIII,
    /// `iv`
    MinorIv,
    /// `v`
    MinorV,
    /// `bVI`
    FlatVI,
    /// `bVII`
    FlatVII,
}

const MAJOR_NUMERALS: [Numeral; 8] = [
    Numeral::I,
    Numeral::Ii,
    Numeral::Iii,
    Numeral::IV,
    Numeral::V,
    Numeral::Vi,
    Numeral::ViiDim,
    Numeral::V7,
];

const MINOR_NUMERALS: [Numeral; 10] = [
    Numeral::MinorI,
    Numeral::IiDim,
    Numeral::FlatIII,
    Numeral::MinorIv,
    Numeral::MinorV,
    Numeral::FlatVI,
    Numeral::FlatVII,
    Numeral::ViiDim,
    Numeral::V,
    Numeral::V7,
];

impl Numeral {
    /// Numerals available in a mode, in chord-list order
    pub fn for_mode(mode: Mode) -> &'static [Numeral] {
        match mode {
            Mode::Major => &MAJOR_NUMERALS,
            Mode::Minor => &MINOR_NUMERALS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Numeral::I => "I",
            Numeral::Ii => "ii",
            Numeral::Iii => "iii",
            Numeral::IV => "IV",
            Numeral::V => "V",
            Numeral::Vi => "vi",
            Numeral::ViiDim => "vii°",
            Numeral::V7 => "V7",
            Numeral::MinorI => "i",
            Numeral::IiDim => "ii°",
            Numeral::FlatIII => "bIII",
            Numeral::MinorIv => "iv",
            Numeral::MinorV => "v",
            Numeral::FlatVI => "bVI",
            Numeral::FlatVII => "bVII",
        }
    }

    /// Index into `Key::scale_notes` of the chord root, or `None` if the
    /// numeral is not part of the mode.
    ///
    /// `V` and `V7` share degree 4. In minor, `vii°` is built on index 7,
    /// the raised 7th.
    pub fn degree_index(self, mode: Mode) -> Option<usize> {
        let index = match (mode, self) {
            (Mode::Major, Numeral::I) => 0,
            (Mode::Major, Numeral::Ii) => 1,
            (Mode::Major, Numeral::Iii) => 2,
            (Mode::Major, Numeral::IV) => 3,
            (Mode::Major, Numeral::V) => 4,
            (Mode::Major, Numeral::Vi) => 5,
            (Mode::Major, Numeral::ViiDim) => 6,
            (Mode::Major, Numeral::V7) => 4,
            (Mode::Minor, Numeral::MinorI) => 0,
            (Mode::Minor, Numeral::IiDim) => 1,
            (Mode::Minor, Numeral::FlatIII) => 2,
            (Mode::Minor, Numeral::MinorIv) => 3,
            (Mode::Minor, Numeral::MinorV) => 4,
            (Mode::Minor, Numeral::FlatVI) => 5,
            (Mode::Minor, Numeral::FlatVII) => 6,
            (Mode::Minor, Numeral::ViiDim) => 7,
            (Mode::Minor, Numeral::V) => 4,
            (Mode::Minor, Numeral::V7) => 4,
            _ => return None,
        };
        Some(index)
    }

    /// Chord-name suffix: "" major, "m" minor, "°" diminished, "7" dominant seventh
    pub fn suffix(self) -> &'static str {
        match self {
            Numeral::I | Numeral::IV | Numeral::V => "",
            Numeral::FlatIII | Numeral::FlatVI | Numeral::FlatVII => "",
            Numeral::Ii | Numeral::Iii | Numeral::Vi => "m",
            Numeral::MinorI | Numeral::MinorIv | Numeral::MinorV => "m",
            Numeral::ViiDim | Numeral::IiDim => "°",
            Numeral::V7 => "7",
        }
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Numeral {
    type Err = CagedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MAJOR_NUMERALS
            .iter()
            .chain(MINOR_NUMERALS.iter())
            .copied()
            .find(|n| n.as_str() == s)
            .ok_or_else(|| CagedError::InvalidNumeral(s.to_string()))
    }
}

impl Serialize for Numeral {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
