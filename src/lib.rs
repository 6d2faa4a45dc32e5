pub mod catalog;
pub mod chords;
pub mod config;
pub mod error;
pub mod instrument;
pub mod key;
pub mod labeler;
pub mod numeral;
pub mod overlay;
pub mod pitch;
pub mod transpose;

pub use catalog::{validate_catalog, CagedShape, PositionTemplate, MUTED};
pub use chords::{get_chord_list, get_chord_root, get_chord_voicing, ChordListEntry};
pub use config::Settings;
pub use error::*;
pub use instrument::{FretMarker, Instrument};
pub use key::{create_key, Key, Mode};
pub use labeler::{FretboardLocation, LabelingScheme, LocationStyle, NoteLabeler};
pub use numeral::Numeral;
pub use overlay::{
    create_overlays, FretWindow, Overlay, OverlayEntry, OverlayRequest, OverlayStyle,
    StringOverlay,
};
pub use pitch::{NoteName, PitchName};
pub use transpose::{get_positions, transpose, DiatonicChords, Position, Voicing};

/// Diatonic chords for a tonic and mode given as strings.
pub fn chords_for(tonic: &str, mode: &str) -> Result<Vec<ChordListEntry>, CagedError> {
    let key = create_key(tonic, mode)?;
    Ok(get_chord_list(&key))
}

/// The five CAGED positions for a tonic and mode given as strings.
pub fn positions_for(tonic: &str, mode: &str) -> Result<Vec<Position>, CagedError> {
    let key = create_key(tonic, mode)?;
    Ok(get_positions(&key))
}

/// Voicing of a chord given by its numeral id (`"V7"`, `"bIII"`) in one position.
///
/// `Ok(None)` when the position index is out of range or the numeral is not
/// used in the mode.
pub fn voicing_for(
    tonic: &str,
    mode: &str,
    position_index: usize,
    roman: &str,
) -> Result<Option<Voicing>, CagedError> {
    let key = create_key(tonic, mode)?;
    let numeral = roman.parse::<Numeral>()?;
    Ok(get_chord_voicing(&key, position_index, numeral))
}
