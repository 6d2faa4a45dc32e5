//! # Overlay Generator
//!
//! Combines the active chord voicing with scale-tone highlighting into the
//! per-string data a fretboard diagram draws.
//!
//! ## Rules
//! For every string and every fret from 0 to `num_frets`:
//! 1. The stopped fret of the voicing gets a chord dot, labeled with the chord
//!    scheme. Its style is `chord-root` when it sounds the chord root, else `chord`.
//! 2. Any other fret inside the window that sounds a scale note gets a `scale`
//!    dot, labeled with the scale scheme.
//! 3. Everything else is left empty.
//!
//! Chord dots are drawn even outside the window, and a chord tone always
//! takes precedence over the scale tone on the same fret.
//!
//! ## Fret Window
//! - Full neck: `0..=num_frets`
//! - Position selected: `position..=position + 4`
//!
//! ## Example
//! ```rust
//! use caged::{create_key, create_overlays, LabelingScheme, OverlayRequest, OverlayStyle};
//!
//! let key = create_key("C", "major")?;
//! let tuning = [64, 59, 55, 50, 45, 40];
//! let voicing = [0, 1, 0, 2, 3, -1];
//! let request = OverlayRequest::new(&tuning, &key, &voicing)
//!     .with_chord_root(key.scale_notes.first().copied())
//!     .with_schemes(LabelingScheme::ChordInterval, LabelingScheme::ScaleInterval);
//! let overlay = create_overlays(&request);
//!
//! let c3 = overlay[4].get(3).unwrap();
//! assert_eq!(c3.label, "R");
//! assert_eq!(c3.style, OverlayStyle::ChordRoot);
//! # Ok::<(), caged::CagedError>(())
//! ```

use crate::catalog::MUTED;
use crate::key::Key;
use crate::labeler::{LabelingScheme, NoteLabeler};
use crate::pitch::PitchName;
use serde::Serialize;
use std::collections::BTreeMap;

/// Frets drawn when no other count is configured
pub const DEFAULT_NUM_FRETS: u8 = 15;

/// Frets spanned by a CAGED position above its lowest fret
pub const POSITION_SPAN: u8 = 4;

/// Inclusive range of frets where scale tones are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FretWindow {
    pub min_fret: u8,
    pub max_fret: u8,
}

impl FretWindow {
    pub fn full(num_frets: u8) -> Self {
        Self {
            min_fret: 0,
            max_fret: num_frets,
        }
    }

    /// Window of a CAGED position starting at `position_num`
    pub fn for_position(position_num: u8) -> Self {
        Self {
            min_fret: position_num,
            max_fret: position_num.saturating_add(POSITION_SPAN),
        }
    }

    pub fn contains(&self, fret: u8) -> bool {
        fret >= self.min_fret && fret <= self.max_fret
    }
}

/// Dot style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlayStyle {
    ChordRoot,
    Chord,
    Scale,
}

/// Label and style of one dot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayEntry {
    pub label: String,
    pub style: OverlayStyle,
    #[serde(skip_serializing_if = "is_false")]
    pub transparent: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Dots of one string, by fret number
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct StringOverlay(BTreeMap<u8, OverlayEntry>);

impl StringOverlay {
    pub fn get(&self, fret: u8) -> Option<&OverlayEntry> {
        self.0.get(&fret)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &OverlayEntry)> {
        self.0.iter().map(|(fret, entry)| (*fret, entry))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Mark every dot outside `window` transparent
    pub fn fade_outside(&mut self, window: FretWindow) {
        for (fret, entry) in self.0.iter_mut() {
            if !window.contains(*fret) {
                entry.transparent = true;
            }
        }
    }
}

/// One [`StringOverlay`] per string, string 1 first
pub type Overlay = Vec<StringOverlay>;

/// Everything an overlay is computed from
#[derive(Debug, Clone)]
pub struct OverlayRequest<'a> {
    pub tuning: &'a [u8],
    pub key: &'a Key,
    pub voicing: &'a [i8],
    pub chord_root: Option<PitchName>,
    pub chord_scheme: LabelingScheme,
    pub scale_scheme: LabelingScheme,
    /// `None` shows scale tones across the whole neck
    pub window: Option<FretWindow>,
    pub num_frets: u8,
    /// Draw chord dots outside the window transparent
    pub fade_outside_window: bool,
}

impl<'a> OverlayRequest<'a> {
    pub fn new(tuning: &'a [u8], key: &'a Key, voicing: &'a [i8]) -> Self {
        Self {
            tuning,
            key,
            voicing,
            chord_root: None,
            chord_scheme: LabelingScheme::None,
            scale_scheme: LabelingScheme::None,
            window: None,
            num_frets: DEFAULT_NUM_FRETS,
            fade_outside_window: false,
        }
    }

    pub fn with_chord_root(mut self, root: Option<PitchName>) -> Self {
        self.chord_root = root;
        self
    }

    pub fn with_schemes(mut self, chord_scheme: LabelingScheme, scale_scheme: LabelingScheme) -> Self {
        self.chord_scheme = chord_scheme;
        self.scale_scheme = scale_scheme;
        self
    }

    /// Limit scale tones to the CAGED position starting at `position_num`
    pub fn with_position(mut self, position_num: u8) -> Self {
        self.window = Some(FretWindow::for_position(position_num));
        self
    }

    pub fn with_window(mut self, window: FretWindow) -> Self {
        self.window = Some(window);
        self
    }

    pub fn with_num_frets(mut self, num_frets: u8) -> Self {
        self.num_frets = num_frets;
        self
    }

    pub fn fade_outside_window(mut self, fade: bool) -> Self {
        self.fade_outside_window = fade;
        self
    }

    fn effective_window(&self) -> FretWindow {
        self.window.unwrap_or_else(|| FretWindow::full(self.num_frets))
    }
}

/// Build the overlay for a fretboard diagram
pub fn create_overlays(request: &OverlayRequest) -> Overlay {
    let labeler = NoteLabeler::for_key(request.tuning, request.key, LabelingScheme::None)
        .with_root(request.chord_root);
    let window = request.effective_window();
    let root_chroma = request.chord_root.map(|root| root.chroma());

    request
        .tuning
        .iter()
        .enumerate()
        .map(|(string_index, &open_midi)| {
            let stopped_fret = request.voicing.get(string_index).copied().unwrap_or(MUTED);
            let mut overlay = StringOverlay::default();

            for fret in 0..=request.num_frets {
                let midi = open_midi.saturating_add(fret);
                let chroma = midi % 12;

                if stopped_fret as i16 == fret as i16 {
                    let style = if root_chroma == Some(chroma) {
                        OverlayStyle::ChordRoot
                    } else {
                        OverlayStyle::Chord
                    };
                    overlay.0.insert(
                        fret,
                        OverlayEntry {
                            label: labeler.label(midi, request.chord_scheme),
                            style,
                            transparent: false,
                        },
                    );
                } else if window.contains(fret) && request.key.contains_chroma(chroma) {
                    overlay.0.insert(
                        fret,
                        OverlayEntry {
                            label: labeler.label(midi, request.scale_scheme),
                            style: OverlayStyle::Scale,
                            transparent: false,
                        },
                    );
                }
            }

            if request.fade_outside_window {
                overlay.fade_outside(window);
            }
            overlay
        })
        .collect()
}
