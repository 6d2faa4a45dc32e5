//! Integration tests for the CAGED engine
//!
//! Tests the full path from a key to chord lists, positions, labels and overlays.

use caged::{
    chords_for, create_key, create_overlays, get_chord_list, get_chord_voicing, get_positions,
    positions_for, voicing_for, CagedError, CagedShape, Instrument, LabelingScheme, Mode,
    NoteLabeler, Numeral, OverlayRequest, OverlayStyle, Settings,
};

const TONICS: [&str; 17] = [
    "C", "C#", "Db", "D", "D#", "Eb", "E", "F", "F#", "Gb", "G", "G#", "Ab", "A", "A#", "Bb", "B",
];

const MODES: [&str; 2] = ["major", "minor"];

fn all_keys() -> Vec<caged::Key> {
    TONICS
        .iter()
        .flat_map(|tonic| MODES.iter().map(move |mode| create_key(tonic, mode).unwrap()))
        .collect()
}

#[test]
fn test_chord_list_lengths() {
    for key in all_keys() {
        let expected = match key.mode {
            Mode::Major => 8,
            Mode::Minor => 10,
        };
        assert_eq!(get_chord_list(&key).len(), expected, "{} {}", key.tonic, key.mode);
    }
}

#[test]
fn test_chord_list_order_is_fixed() {
    for key in all_keys() {
        let romans: Vec<Numeral> = get_chord_list(&key).iter().map(|c| c.roman).collect();
        assert_eq!(romans, Numeral::for_mode(key.mode));
    }
}

#[test]
fn test_five_sorted_distinct_positions() {
    for key in all_keys() {
        let positions = get_positions(&key);
        assert_eq!(positions.len(), 5);
        let nums: Vec<u8> = positions.iter().map(|p| p.position_num).collect();
        assert!(nums.windows(2).all(|w| w[0] < w[1]), "{} {}: {:?}", key.tonic, key.mode, nums);
        assert!(nums.iter().all(|&n| n <= 11));
        let mut shapes: Vec<String> = positions.iter().map(|p| p.caged.to_string()).collect();
        shapes.sort();
        assert_eq!(shapes, ["A", "C", "D", "E", "G"]);
    }
}

#[test]
fn test_every_voicing_is_playable() {
    let strings = Instrument::guitar().string_count();
    for key in all_keys() {
        for index in 0..5 {
            for &numeral in Numeral::for_mode(key.mode) {
                let voicing = get_chord_voicing(&key, index, numeral).unwrap();
                assert_eq!(voicing.len(), strings);
                assert!(
                    voicing.iter().all(|&fret| fret >= -1),
                    "{} {} position {} {}: {:?}",
                    key.tonic,
                    key.mode,
                    index,
                    numeral,
                    voicing
                );
            }
        }
    }
}

#[test]
fn test_every_position_has_every_chord() {
    for key in all_keys() {
        for position in get_positions(&key) {
            assert_eq!(position.chords.len(), Numeral::for_mode(key.mode).len());
            assert_eq!(position.label == "Open", position.position_num == 0);
        }
    }
}

#[test]
fn test_chord_names_scenarios() {
    let names = |tonic: &str, mode: &str| -> Vec<String> {
        chords_for(tonic, mode).unwrap().into_iter().map(|c| c.name).collect()
    };
    assert_eq!(names("C", "major"), ["C", "Dm", "Em", "F", "G", "Am", "B°", "G7"]);
    assert_eq!(names("G", "major"), ["G", "Am", "Bm", "C", "D", "Em", "F#°", "D7"]);
    assert_eq!(
        names("C", "minor"),
        ["Cm", "D°", "Eb", "Fm", "Gm", "Ab", "Bb", "B°", "G", "G7"]
    );
}

#[test]
fn test_position_scenarios() {
    let cases = [
        ("C", "major", 0, "O", CagedShape::C),
        ("A", "major", 0, "O", CagedShape::A),
        ("G", "major", 0, "O", CagedShape::G),
        ("E", "major", 0, "O", CagedShape::E),
        ("D", "major", 0, "O", CagedShape::D),
        ("C", "major", 4, "IX", CagedShape::D),
        ("C", "minor", 3, "VII", CagedShape::E),
        ("G", "major", 2, "IV", CagedShape::D),
        ("G", "minor", 1, "II", CagedShape::E),
    ];
    for (tonic, mode, index, roman, caged) in cases {
        let positions = positions_for(tonic, mode).unwrap();
        let position = &positions[index];
        assert_eq!(position.roman, roman, "{} {} index {}", tonic, mode, index);
        assert_eq!(position.caged, caged, "{} {} index {}", tonic, mode, index);
    }
}

#[test]
fn test_open_chords_in_open_keys() {
    // The open position of each override key plays its familiar open I chord
    let cases: [(&str, [i8; 6]); 5] = [
        ("C", [0, 1, 0, 2, 3, -1]),
        ("A", [0, 2, 2, 2, 0, -1]),
        ("G", [3, 0, 0, 0, 2, 3]),
        ("E", [0, 0, 1, 2, 2, 0]),
        ("D", [2, 3, 2, 0, -1, -1]),
    ];
    for (tonic, expected) in cases {
        let voicing = voicing_for(tonic, "major", 0, "I").unwrap().unwrap();
        assert_eq!(voicing, expected, "{} major", tonic);
    }
}

#[test]
fn test_voicing_for_errors() {
    assert!(matches!(voicing_for("H", "major", 0, "I"), Err(CagedError::InvalidKey(_))));
    assert!(matches!(
        voicing_for("C", "major", 0, "VIII"),
        Err(CagedError::InvalidNumeral(_))
    ));
    assert_eq!(voicing_for("C", "major", 0, "bIII").unwrap(), None);
    assert_eq!(voicing_for("C", "major", 9, "I").unwrap(), None);
}

#[test]
fn test_c_major_i_chord_labels() {
    let key = create_key("C", "major").unwrap();
    let tuning = Instrument::guitar().tuning;
    let locations = [(5, 3), (4, 2), (3, 0), (2, 1), (1, 0)];
    let root = get_chord_list(&key)[0].root;

    let labels = |scheme: LabelingScheme| -> String {
        let labeler = NoteLabeler::for_key(&tuning, &key, scheme).with_root(Some(root));
        locations
            .iter()
            .map(|&location| labeler.location_label(location))
            .collect::<Vec<_>>()
            .join(" ")
    };

    assert_eq!(labels(LabelingScheme::ScaleInterval), "1 3 5 1 3");
    assert_eq!(labels(LabelingScheme::ChordInterval), "R 3 5 R 3");
    assert_eq!(labels(LabelingScheme::PitchClass), "C E G C E");
    assert_eq!(labels(LabelingScheme::Pitch), "C3 E3 G3 C4 E4");
    assert_eq!(labels(LabelingScheme::None), "    ");
}

#[test]
fn test_overlay_for_selected_position() {
    let key = create_key("G", "major").unwrap();
    let positions = get_positions(&key);
    let position = &positions[2];
    let chords = get_chord_list(&key);
    let chord = &chords[4]; // D
    let voicing = position.chords.get(Numeral::V).unwrap();
    let tuning = Instrument::guitar().tuning;

    let request = OverlayRequest::new(&tuning, &key, voicing)
        .with_chord_root(Some(chord.root))
        .with_schemes(LabelingScheme::ChordInterval, LabelingScheme::ScaleInterval)
        .with_position(position.position_num);
    let overlay = create_overlays(&request);

    for (string_index, string) in overlay.iter().enumerate() {
        let stopped = voicing[string_index];
        for (fret, entry) in string.iter() {
            match entry.style {
                OverlayStyle::Chord | OverlayStyle::ChordRoot => {
                    assert_eq!(fret as i8, stopped);
                }
                OverlayStyle::Scale => {
                    assert!(fret >= position.position_num && fret <= position.position_num + 4);
                }
            }
        }
        if stopped >= 0 {
            assert!(string.get(stopped as u8).is_some());
        }
    }
    let roots = overlay
        .iter()
        .flat_map(|s| s.iter())
        .filter(|(_, e)| e.style == OverlayStyle::ChordRoot)
        .count();
    assert!(roots >= 1);
}

#[test]
fn test_settings_drive_overlay() {
    let settings = Settings::from_yaml("key: E\nmode: minor\nnum-frets: 12\n").unwrap();
    let positions = get_positions(&settings.key);
    let voicing = positions[0].chords.get(Numeral::MinorI).unwrap();
    let root = get_chord_list(&settings.key)[0].root;

    let overlay = create_overlays(&settings.overlay_request(voicing, Some(root)));
    assert_eq!(overlay.len(), 6);
    // Open E minor: both E strings ring open as the root
    assert_eq!(overlay[0].get(0).unwrap().style, OverlayStyle::ChordRoot);
    assert_eq!(overlay[5].get(0).unwrap().style, OverlayStyle::ChordRoot);
    assert_eq!(overlay[5].get(0).unwrap().label, "R");
    assert!(overlay.iter().all(|s| s.iter().all(|(fret, _)| fret <= 12)));
}

#[test]
fn test_catalog_validates_at_startup() {
    assert_eq!(caged::validate_catalog(Instrument::guitar().string_count()), Ok(()));
}
