//! # Pitch Spelling
//!
//! Note names, pitch classes and MIDI spelling shared by the key model and the
//! labeler.
//!
//! A [`PitchName`] is a letter plus a signed alteration, so `F##` and `Bbb` are
//! representable. Scales are spelled letter-by-letter and sometimes need them.
//!
//! ## MIDI Note Reference
//! - C4 = 60, octave = `midi / 12 - 1`
//! - Pitch class (chroma) = semitone offset from C, 0-11

use crate::error::CagedError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Note names C through B, in scale order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NoteName {
    #[default]
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NoteName {
    const ALL: [NoteName; 7] = [
        NoteName::C,
        NoteName::D,
        NoteName::E,
        NoteName::F,
        NoteName::G,
        NoteName::A,
        NoteName::B,
    ];

    /// Semitone offset of the natural note from C
    pub fn semitone(self) -> u8 {
        match self {
            NoteName::C => 0,
            NoteName::D => 2,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::G => 7,
            NoteName::A => 9,
            NoteName::B => 11,
        }
    }

    /// The letter `steps` letters above this one, wrapping B -> C
    pub fn step(self, steps: usize) -> NoteName {
        let index = Self::ALL.iter().position(|&n| n == self).unwrap_or(0);
        Self::ALL[(index + steps) % 7]
    }

    pub fn from_char(c: char) -> Option<NoteName> {
        match c {
            'C' => Some(NoteName::C),
            'D' => Some(NoteName::D),
            'E' => Some(NoteName::E),
            'F' => Some(NoteName::F),
            'G' => Some(NoteName::G),
            'A' => Some(NoteName::A),
            'B' => Some(NoteName::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            NoteName::C => 'C',
            NoteName::D => 'D',
            NoteName::E => 'E',
            NoteName::F => 'F',
            NoteName::G => 'G',
            NoteName::A => 'A',
            NoteName::B => 'B',
        }
    }
}

/// A spelled pitch class: letter plus alteration in semitones (+1 = #, -1 = b)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PitchName {
    pub name: NoteName,
    pub alteration: i8,
}

impl PitchName {
    pub fn new(name: NoteName, alteration: i8) -> Self {
        Self { name, alteration }
    }

    /// Pitch class 0-11
    pub fn chroma(&self) -> u8 {
        (self.name.semitone() as i16 + self.alteration as i16).rem_euclid(12) as u8
    }

    /// Spell a MIDI note with sharps or flats, natural notes when possible
    pub fn from_midi(midi: u8, prefer_sharps: bool) -> Self {
        // 0=C, 1=C#/Db, 2=D, 3=D#/Eb, 4=E, 5=F, 6=F#/Gb, 7=G, 8=G#/Ab, 9=A, 10=A#/Bb, 11=B
        let (name, alteration) = match midi % 12 {
            0 => (NoteName::C, 0),
            1 => if prefer_sharps { (NoteName::C, 1) } else { (NoteName::D, -1) },
            2 => (NoteName::D, 0),
            3 => if prefer_sharps { (NoteName::D, 1) } else { (NoteName::E, -1) },
            4 => (NoteName::E, 0),
            5 => (NoteName::F, 0),
            6 => if prefer_sharps { (NoteName::F, 1) } else { (NoteName::G, -1) },
            7 => (NoteName::G, 0),
            8 => if prefer_sharps { (NoteName::G, 1) } else { (NoteName::A, -1) },
            9 => (NoteName::A, 0),
            10 => if prefer_sharps { (NoteName::A, 1) } else { (NoteName::B, -1) },
            _ => (NoteName::B, 0),
        };
        Self { name, alteration }
    }

    /// Octave number of `midi` when written with this spelling.
    ///
    /// The octave follows the letter, so MIDI 72 spelled B# is in octave 4
    /// and MIDI 59 spelled Cb is in octave 4.
    pub fn octave_for_midi(&self, midi: u8) -> i16 {
        let natural = midi as i16 - self.alteration as i16 - self.name.semitone() as i16;
        natural.div_euclid(12) - 1
    }

    /// Name with octave number, e.g. `C4`, `Bb3`
    pub fn with_octave(&self, midi: u8) -> String {
        format!("{}{}", self, self.octave_for_midi(midi))
    }

    /// Parse a tonic: a letter A-G optionally followed by a single `#` or `b`.
    pub fn parse_tonic(s: &str) -> Result<Self, CagedError> {
        let mut chars = s.chars();
        let name = chars
            .next()
            .and_then(NoteName::from_char)
            .ok_or_else(|| CagedError::InvalidKey(format!("unrecognized tonic '{}'", s)))?;
        let alteration = match (chars.next(), chars.next()) {
            (None, _) => 0,
            (Some('#'), None) => 1,
            (Some('b'), None) => -1,
            _ => return Err(CagedError::InvalidKey(format!("unrecognized tonic '{}'", s))),
        };
        Ok(Self { name, alteration })
    }
}

impl fmt::Display for PitchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name.as_char())?;
        let symbol = if self.alteration > 0 { "#" } else { "b" };
        for _ in 0..self.alteration.unsigned_abs() {
            f.write_str(symbol)?;
        }
        Ok(())
    }
}

/// Accepts any run of one accidental kind (`F##`, `Bbb`), unlike
/// [`PitchName::parse_tonic`].
impl FromStr for PitchName {
    type Err = CagedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let name = chars
            .next()
            .and_then(NoteName::from_char)
            .ok_or_else(|| CagedError::InvalidKey(format!("unrecognized pitch '{}'", s)))?;
        let rest = chars.as_str();
        let run = i8::try_from(rest.len())
            .map_err(|_| CagedError::InvalidKey(format!("too many accidentals in '{}'", s)))?;
        let alteration = if rest.chars().all(|c| c == '#') {
            run
        } else if rest.chars().all(|c| c == 'b') {
            -run
        } else {
            return Err(CagedError::InvalidKey(format!("unrecognized pitch '{}'", s)));
        };
        Ok(Self { name, alteration })
    }
}

impl Serialize for PitchName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
