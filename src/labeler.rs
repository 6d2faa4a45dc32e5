//! # Note Labeler
//!
//! Turns fretboard locations and MIDI notes into the text drawn on a note dot.
//!
//! ## Labeling Schemes
//! - `none` - no label
//! - `pitch` - note name and octave, e.g. `C4`
//! - `pitchClass` - note name only, e.g. `C`
//! - `scaleInterval` - interval above the key's tonic: `1 b2 2 b3 3 4 b5 5 b6 6 b7 7`
//! - `chordInterval` - interval above the chord root, with `R` for the root itself
//!
//! Names use sharps or flats according to the key, except that scale notes are
//! written the way the key spells them when a key is attached with
//! [`NoteLabeler::with_key_spelling`] (E# in F# major, Cb in Gb major).
//!
//! ## Example
//! ```rust
//! use caged::{create_key, LabelingScheme, NoteLabeler};
//!
//! let key = create_key("C", "major")?;
//! let labeler = NoteLabeler::for_key(&[64, 59, 55, 50, 45, 40], &key, LabelingScheme::Pitch);
//! assert_eq!(labeler.location_label((5, 3)), "C3");
//! # Ok::<(), caged::CagedError>(())
//! ```

use crate::error::CagedError;
use crate::key::Key;
use crate::pitch::PitchName;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// MIDI octave used as the interval reference (C1 = 24)
const REFERENCE_OCTAVE_MIDI: i16 = 24;

/// `(string number, fret number)`; string 1 is the highest-pitched string
pub type FretboardLocation = (usize, u8);

/// How note dots are labeled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelingScheme {
    #[default]
    None,
    Pitch,
    PitchClass,
    ChordInterval,
    ScaleInterval,
}

impl LabelingScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            LabelingScheme::None => "none",
            LabelingScheme::Pitch => "pitch",
            LabelingScheme::PitchClass => "pitchClass",
            LabelingScheme::ChordInterval => "chordInterval",
            LabelingScheme::ScaleInterval => "scaleInterval",
        }
    }
}

impl fmt::Display for LabelingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LabelingScheme {
    type Err = CagedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(LabelingScheme::None),
            "pitch" => Ok(LabelingScheme::Pitch),
            "pitchClass" => Ok(LabelingScheme::PitchClass),
            "chordInterval" => Ok(LabelingScheme::ChordInterval),
            "scaleInterval" => Ok(LabelingScheme::ScaleInterval),
            _ => Err(CagedError::InvalidScheme(s.to_string())),
        }
    }
}

/// Highlight for a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationStyle {
    Root,
}

/// Simple interval (degree, alteration) for a number of semitones above a reference
fn interval_from_semitones(semitones: u8) -> (u8, i8) {
    match semitones % 12 {
        0 => (1, 0),
        1 => (2, -1),
        2 => (2, 0),
        3 => (3, -1),
        4 => (3, 0),
        5 => (4, 0),
        6 => (5, -1),
        7 => (5, 0),
        8 => (6, -1),
        9 => (6, 0),
        10 => (7, -1),
        _ => (7, 0),
    }
}

/// `b3`, `5`, `#4`; an octave folds to `1`
fn format_interval(degree: u8, alteration: i8) -> String {
    let prefix = match alteration {
        -1 => "b",
        1 => "#",
        _ => "",
    };
    let degree = if degree == 8 { 1 } else { degree };
    format!("{}{}", prefix, degree)
}

/// Interval name of `midi` above the pitch class `reference`
pub fn interval_name(reference: PitchName, midi: u8) -> String {
    let reference_midi = REFERENCE_OCTAVE_MIDI + reference.chroma() as i16;
    let semitones = (midi as i16 - reference_midi).rem_euclid(12) as u8;
    let (degree, alteration) = interval_from_semitones(semitones);
    format_interval(degree, alteration)
}

/// Labels fretboard locations for one tuning
#[derive(Debug, Clone)]
pub struct NoteLabeler {
    tuning: Vec<u8>,
    scheme: LabelingScheme,
    prefer_sharps: bool,
    /// Scale reference
    tonic: Option<PitchName>,
    /// Chord reference
    root: Option<PitchName>,
    key_spelling: Vec<PitchName>,
}

impl NoteLabeler {
    pub fn new(tuning: &[u8], scheme: LabelingScheme, prefer_sharps: bool) -> Self {
        Self {
            tuning: tuning.to_vec(),
            scheme,
            prefer_sharps,
            tonic: None,
            root: None,
            key_spelling: Vec::new(),
        }
    }

    /// Labeler referenced to a key's tonic, spelling scale notes the key's way
    pub fn for_key(tuning: &[u8], key: &Key, scheme: LabelingScheme) -> Self {
        Self::new(tuning, scheme, key.prefer_sharps)
            .with_tonic(key.tonic)
            .with_key_spelling(key)
    }

    pub fn with_tonic(mut self, tonic: PitchName) -> Self {
        self.tonic = Some(tonic);
        self
    }

    pub fn with_root(mut self, root: Option<PitchName>) -> Self {
        self.root = root;
        self
    }

    pub fn with_key_spelling(mut self, key: &Key) -> Self {
        self.key_spelling = key.scale_notes.clone();
        self
    }

    pub fn scheme(&self) -> LabelingScheme {
        self.scheme
    }

    pub fn root(&self) -> Option<PitchName> {
        self.root
    }

    fn checked_location_midi(&self, (string_num, fret_num): FretboardLocation) -> Option<u8> {
        let open = self.tuning.get(string_num.checked_sub(1)?)?;
        Some(open.saturating_add(fret_num))
    }

    /// MIDI note at a location.
    ///
    /// Returns `0` when `string_num` is 0 or past the last string.
    /// [`location_style`](Self::location_style) skips this sentinel, so an
    /// off-board location is never styled as a C root.
    pub fn location_midi(&self, location: FretboardLocation) -> u8 {
        self.checked_location_midi(location).unwrap_or(0)
    }

    /// How a MIDI note is spelled, without octave
    pub fn midi_pitch_name(&self, midi: u8) -> PitchName {
        self.key_spelling
            .iter()
            .find(|n| n.chroma() == midi % 12)
            .copied()
            .unwrap_or_else(|| PitchName::from_midi(midi, self.prefer_sharps))
    }

    /// Note name with octave, e.g. `Bb3`
    pub fn midi_pitch(&self, midi: u8) -> String {
        self.midi_pitch_name(midi).with_octave(midi)
    }

    /// Label a MIDI note under `scheme`
    pub fn label(&self, midi: u8, scheme: LabelingScheme) -> String {
        match scheme {
            LabelingScheme::Pitch => self.midi_pitch(midi),
            LabelingScheme::PitchClass => self.midi_pitch_name(midi).to_string(),
            LabelingScheme::ScaleInterval => match self.tonic {
                Some(tonic) => interval_name(tonic, midi),
                None => String::new(),
            },
            LabelingScheme::ChordInterval => match self.root {
                Some(root) => {
                    let name = interval_name(root, midi);
                    if name == "1" {
                        "R".to_string()
                    } else {
                        name
                    }
                }
                None => String::new(),
            },
            LabelingScheme::None => String::new(),
        }
    }

    /// Label a location under the labeler's own scheme
    pub fn location_label(&self, location: FretboardLocation) -> String {
        self.label(self.location_midi(location), self.scheme)
    }

    pub fn location_pitch(&self, location: FretboardLocation) -> String {
        self.midi_pitch(self.location_midi(location))
    }

    pub fn location_pitch_class(&self, location: FretboardLocation) -> String {
        self.midi_pitch_name(self.location_midi(location)).to_string()
    }

    /// `Root` when the location sounds the chord root
    pub fn location_style(&self, location: FretboardLocation) -> Option<LocationStyle> {
        let root = self.root?;
        let midi = self.checked_location_midi(location)?;
        (midi % 12 == root.chroma()).then_some(LocationStyle::Root)
    }
}
