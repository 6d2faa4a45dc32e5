use caged::{CagedError, LabelingScheme, OverlayRequest, PitchName};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct EngineError {
    kind: &'static str,
    message: String,
}

fn error_to_engine_error(e: CagedError) -> EngineError {
    let kind = match &e {
        CagedError::InvalidKey(_) => "invalidKey",
        CagedError::InvalidNumeral(_) => "invalidNumeral",
        CagedError::InvalidScheme(_) => "invalidScheme",
        CagedError::ConfigError(_) => "config",
        CagedError::Catalog { .. } => "catalog",
    };
    EngineError {
        kind,
        message: e.to_string(),
    }
}

fn to_js_error(e: CagedError) -> JsValue {
    let error = error_to_engine_error(e);
    match serde_json::to_string(&error) {
        Ok(json) => JsValue::from_str(&json),
        Err(_) => JsValue::from_str(&error.message),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Diatonic chords of a key as a JSON array of `{ roman, root, name }`
#[wasm_bindgen]
pub fn chord_list(tonic: &str, mode: &str) -> Result<String, JsValue> {
    let chords = caged::chords_for(tonic, mode).map_err(to_js_error)?;
    to_json(&chords)
}

/// The five CAGED positions of a key as JSON, lowest fret first
#[wasm_bindgen]
pub fn positions(tonic: &str, mode: &str) -> Result<String, JsValue> {
    let positions = caged::positions_for(tonic, mode).map_err(to_js_error)?;
    to_json(&positions)
}

/// Voicing of one chord in one position as a JSON array, or `null`
#[wasm_bindgen]
pub fn chord_voicing(
    tonic: &str,
    mode: &str,
    position_index: usize,
    roman: &str,
) -> Result<String, JsValue> {
    let voicing = caged::voicing_for(tonic, mode, position_index, roman).map_err(to_js_error)?;
    to_json(&voicing)
}

/// Overlay for the fretboard diagram as a JSON array of per-string fret maps.
///
/// `position` limits scale tones to a CAGED position starting at that fret.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn overlays(
    tuning: Vec<u8>,
    tonic: &str,
    mode: &str,
    voicing: Vec<i8>,
    chord_root: Option<String>,
    chord_scheme: &str,
    scale_scheme: &str,
    position: Option<u8>,
) -> Result<String, JsValue> {
    let key = caged::create_key(tonic, mode).map_err(to_js_error)?;
    let chord_root = chord_root
        .as_deref()
        .map(str::parse::<PitchName>)
        .transpose()
        .map_err(to_js_error)?;
    let chord_scheme = chord_scheme.parse::<LabelingScheme>().map_err(to_js_error)?;
    let scale_scheme = scale_scheme.parse::<LabelingScheme>().map_err(to_js_error)?;

    let mut request = OverlayRequest::new(&tuning, &key, &voicing)
        .with_chord_root(chord_root)
        .with_schemes(chord_scheme, scale_scheme);
    if let Some(position) = position {
        request = request.with_position(position);
    }
    to_json(&caged::create_overlays(&request))
}

/// Label one fretboard location, e.g. `"C3"`, `"b3"`, `"R"`
#[wasm_bindgen]
pub fn location_label(
    tuning: Vec<u8>,
    tonic: &str,
    mode: &str,
    chord_root: Option<String>,
    scheme: &str,
    string_num: usize,
    fret_num: u8,
) -> Result<String, JsValue> {
    let key = caged::create_key(tonic, mode).map_err(to_js_error)?;
    let chord_root = chord_root
        .as_deref()
        .map(str::parse::<PitchName>)
        .transpose()
        .map_err(to_js_error)?;
    let scheme = scheme.parse::<LabelingScheme>().map_err(to_js_error)?;
    let labeler = caged::NoteLabeler::for_key(&tuning, &key, scheme).with_root(chord_root);
    Ok(labeler.location_label((string_num, fret_num)))
}
