//! # Key Model
//!
//! Builds a [`Key`] value from a tonic and a mode.
//!
//! Scales are spelled letter-by-letter: every degree takes the next letter
//! name, and the accidental is whatever makes that letter hit the right pitch.
//! This gives standard key-signature spelling (F major has Bb, never A#).
//!
//! Minor keys carry eight scale notes: the natural minor scale plus the raised
//! 7th of the harmonic minor, which is the root of V, V7 and vii°.
//!
//! ## Example
//! ```rust
//! use caged::create_key;
//!
//! let key = create_key("F", "major")?;
//! let names: Vec<String> = key.scale_notes.iter().map(|n| n.to_string()).collect();
//! assert_eq!(names, ["F", "G", "A", "Bb", "C", "D", "E"]);
//! assert!(!key.prefer_sharps);
//! # Ok::<(), caged::CagedError>(())
//! ```

use crate::error::CagedError;
use crate::pitch::PitchName;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const MAJOR_STEPS: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];
const NATURAL_MINOR_STEPS: [u8; 7] = [0, 2, 3, 5, 7, 8, 10];
const LEADING_TONE_STEP: u8 = 11;

/// Key mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Major,
    Minor,
}

impl FromStr for Mode {
    type Err = CagedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(Mode::Major),
            "minor" => Ok(Mode::Minor),
            _ => Err(CagedError::InvalidKey(format!("unsupported mode '{}'", s))),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Major => f.write_str("major"),
            Mode::Minor => f.write_str("minor"),
        }
    }
}

/// A key with its derived scale.
///
/// `scale_chromas[i]` is always the pitch class of `scale_notes[i]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Key {
    pub tonic: PitchName,
    #[serde(rename = "type")]
    pub mode: Mode,
    /// Accidentals of the key signature: "" for C major / A minor, "###", "bb", ...
    pub key_signature: String,
    pub scale_notes: Vec<PitchName>,
    pub scale_chromas: Vec<u8>,
    pub prefer_sharps: bool,
}

impl Key {
    pub fn new(tonic: PitchName, mode: Mode) -> Self {
        let steps = match mode {
            Mode::Major => &MAJOR_STEPS,
            Mode::Minor => &NATURAL_MINOR_STEPS,
        };
        let mut scale_notes: Vec<PitchName> = steps
            .iter()
            .enumerate()
            .map(|(degree, &step)| spell_degree(tonic, degree, step))
            .collect();

        // Signature comes from the natural scale only
        let alterations: i32 = scale_notes.iter().map(|n| n.alteration as i32).sum();
        let has_flats = scale_notes.iter().any(|n| n.alteration < 0);
        let key_signature = if alterations < 0 {
            "b".repeat(alterations.unsigned_abs() as usize)
        } else {
            "#".repeat(alterations as usize)
        };

        if mode == Mode::Minor {
            scale_notes.push(spell_degree(tonic, 6, LEADING_TONE_STEP));
        }

        Self {
            tonic,
            mode,
            key_signature,
            scale_chromas: scale_notes.iter().map(|n| n.chroma()).collect(),
            scale_notes,
            prefer_sharps: !has_flats,
        }
    }

    /// Whether a pitch class belongs to the scale (including the raised 7th in minor)
    pub fn contains_chroma(&self, chroma: u8) -> bool {
        self.scale_chromas.contains(&(chroma % 12))
    }

    /// How this key spells a pitch class, if it is a scale note
    pub fn spelling_of(&self, chroma: u8) -> Option<PitchName> {
        self.scale_chromas
            .iter()
            .position(|&c| c == chroma % 12)
            .map(|i| self.scale_notes[i])
    }
}

/// Spell the scale degree `degree` (0-based) lying `step` semitones above the tonic
fn spell_degree(tonic: PitchName, degree: usize, step: u8) -> PitchName {
    let name = tonic.name.step(degree);
    let target = (tonic.chroma() + step) % 12;
    let mut alteration = (target as i8 - name.semitone() as i8).rem_euclid(12);
    if alteration > 6 {
        alteration -= 12;
    }
    PitchName::new(name, alteration)
}

/// Build a key from a tonic spelling and a mode id (`"major"` or `"minor"`).
///
/// # Errors
/// Returns [`CagedError::InvalidKey`] if the tonic is not a letter A-G with an
/// optional single `#`/`b`, or if the mode is not recognized.
pub fn create_key(tonic: &str, mode: &str) -> Result<Key, CagedError> {
    let tonic = PitchName::parse_tonic(tonic)?;
    let mode = mode.parse::<Mode>()?;
    Ok(Key::new(tonic, mode))
}
