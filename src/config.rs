//! # Settings
//!
//! Diagram settings loaded from YAML: instrument, neck length, current key
//! and labeling schemes. Every field is optional.
//!
//! ```yaml
//! instrument: Guitar          # built-in name, or a custom definition:
//! # instrument:
//! #   name: Drop D
//! #   tuning: [64, 59, 55, 50, 45, 38]
//! num-frets: 15
//! key: G
//! mode: major
//! chord-labels: chordInterval
//! scale-labels: scaleInterval
//! ```

use crate::catalog;
use crate::error::CagedError;
use crate::instrument::Instrument;
use crate::key::{create_key, Key};
use crate::labeler::LabelingScheme;
use crate::overlay::{OverlayRequest, DEFAULT_NUM_FRETS, POSITION_SPAN};
use crate::pitch::PitchName;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Longest neck a diagram may show
pub const MAX_NUM_FRETS: u8 = 24;

/// Instrument given by built-in name or inline definition
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum RawInstrument {
    Named(String),
    Custom(Instrument),
}

/// Raw settings for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawSettings {
    pub instrument: Option<RawInstrument>,
    pub num_frets: Option<u8>,
    pub key: Option<String>,
    pub mode: Option<String>,
    pub chord_labels: Option<String>,
    pub scale_labels: Option<String>,
}

/// Validated diagram settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub instrument: Instrument,
    pub num_frets: u8,
    pub key: Key,
    pub chord_scheme: LabelingScheme,
    pub scale_scheme: LabelingScheme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            instrument: Instrument::guitar(),
            num_frets: DEFAULT_NUM_FRETS,
            key: Key::new(PitchName::default(), Default::default()),
            chord_scheme: LabelingScheme::ChordInterval,
            scale_scheme: LabelingScheme::ScaleInterval,
        }
    }
}

impl Settings {
    /// Parse settings from YAML text.
    ///
    /// # Errors
    /// Returns [`CagedError::ConfigError`] for malformed YAML or unsupported
    /// values, and [`CagedError::InvalidKey`] for a bad key or mode.
    pub fn from_yaml(content: &str) -> Result<Self, CagedError> {
        // An empty document deserializes to unit, not a map
        let raw: RawSettings = if content.trim().is_empty() {
            RawSettings::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| CagedError::ConfigError(e.to_string()))?
        };
        Self::from_raw(raw)
    }

    /// Read and parse a settings file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, CagedError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CagedError::ConfigError(format!("cannot read '{}': {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), "loading settings");
        Self::from_yaml(&content)
    }

    fn from_raw(raw: RawSettings) -> Result<Self, CagedError> {
        let defaults = Settings::default();

        let instrument = match raw.instrument {
            None => defaults.instrument,
            Some(RawInstrument::Named(name)) => Instrument::builtin(&name).ok_or_else(|| {
                CagedError::ConfigError(format!("unknown instrument: {}", name))
            })?,
            Some(RawInstrument::Custom(instrument)) => instrument,
        };
        if instrument.tuning.is_empty() {
            return Err(CagedError::ConfigError(format!(
                "instrument '{}' has no strings",
                instrument.name
            )));
        }
        // Chord positions only exist for the catalog's string count
        catalog::validate_catalog(instrument.string_count()).map_err(|e| {
            CagedError::ConfigError(format!("instrument '{}': {}", instrument.name, e))
        })?;

        let num_frets = raw.num_frets.unwrap_or(defaults.num_frets);
        if !(POSITION_SPAN..=MAX_NUM_FRETS).contains(&num_frets) {
            return Err(CagedError::ConfigError(format!(
                "num-frets must be between {} and {}, got {}",
                POSITION_SPAN, MAX_NUM_FRETS, num_frets
            )));
        }

        let key = create_key(
            raw.key.as_deref().unwrap_or("C"),
            raw.mode.as_deref().unwrap_or("major"),
        )?;

        let chord_scheme = match &raw.chord_labels {
            Some(s) => parse_scheme(s)?,
            None => defaults.chord_scheme,
        };
        let scale_scheme = match &raw.scale_labels {
            Some(s) => parse_scheme(s)?,
            None => defaults.scale_scheme,
        };

        tracing::debug!(
            instrument = %instrument.name,
            num_frets,
            tonic = %key.tonic,
            mode = %key.mode,
            "settings loaded"
        );

        Ok(Self {
            instrument,
            num_frets,
            key,
            chord_scheme,
            scale_scheme,
        })
    }

    /// Overlay request for a voicing, carrying these settings
    pub fn overlay_request<'a>(
        &'a self,
        voicing: &'a [i8],
        chord_root: Option<PitchName>,
    ) -> OverlayRequest<'a> {
        OverlayRequest::new(&self.instrument.tuning, &self.key, voicing)
            .with_chord_root(chord_root)
            .with_schemes(self.chord_scheme, self.scale_scheme)
            .with_num_frets(self.num_frets)
    }
}

fn parse_scheme(s: &str) -> Result<LabelingScheme, CagedError> {
    s.parse()
        .map_err(|_| CagedError::ConfigError(format!("unknown labeling scheme: {}", s)))
}
