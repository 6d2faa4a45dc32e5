//! Fretted instrument definitions: tuning and inlay positions.

use serde::{Deserialize, Serialize};

/// A fretted instrument.
///
/// `tuning` holds the open-string MIDI notes, string 1 (highest) first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Instrument {
    pub name: String,
    pub tuning: Vec<u8>,
    #[serde(default)]
    pub fret_markers: Vec<u8>,
    #[serde(default)]
    pub double_fret_markers: Vec<u8>,
}

impl Instrument {
    /// Six-string guitar in standard tuning (E4 B3 G3 D3 A2 E2)
    pub fn guitar() -> Self {
        Self {
            name: "Guitar".to_string(),
            tuning: vec![64, 59, 55, 50, 45, 40],
            fret_markers: vec![3, 5, 7, 9, 12, 15, 17, 19, 21, 24],
            double_fret_markers: vec![12, 24],
        }
    }

    /// Look up a built-in instrument by name
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "Guitar" | "guitar" => Some(Self::guitar()),
            _ => None,
        }
    }

    pub fn string_count(&self) -> usize {
        self.tuning.len()
    }

    /// MIDI note sounded by `string_num` (1-based) stopped at `fret`
    pub fn midi_at(&self, string_num: usize, fret: u8) -> Option<u8> {
        let open = self.tuning.get(string_num.checked_sub(1)?)?;
        Some(open.saturating_add(fret))
    }

    /// Single or double inlay drawn at a fret
    pub fn marker_at(&self, fret: u8) -> Option<FretMarker> {
        if self.double_fret_markers.contains(&fret) {
            Some(FretMarker::Double)
        } else if self.fret_markers.contains(&fret) {
            Some(FretMarker::Single)
        } else {
            None
        }
    }
}

impl Default for Instrument {
    fn default() -> Self {
        Self::guitar()
    }
}

/// Inlay style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FretMarker {
    Single,
    Double,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guitar_midi() {
        let guitar = Instrument::guitar();
        assert_eq!(guitar.string_count(), 6);
        assert_eq!(guitar.midi_at(1, 0), Some(64));
        assert_eq!(guitar.midi_at(5, 3), Some(48));
        assert_eq!(guitar.midi_at(7, 0), None);
        assert_eq!(guitar.midi_at(0, 0), None);
    }

    #[test]
    fn test_markers() {
        let guitar = Instrument::guitar();
        assert_eq!(guitar.marker_at(3), Some(FretMarker::Single));
        assert_eq!(guitar.marker_at(12), Some(FretMarker::Double));
        assert_eq!(guitar.marker_at(4), None);
    }

    #[test]
    fn test_builtin_lookup() {
        assert_eq!(Instrument::builtin("Guitar"), Some(Instrument::guitar()));
        assert_eq!(Instrument::builtin("Banjo"), None);
    }
}
