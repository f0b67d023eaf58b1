//! Tests for Preset creation, mutation and validation

use pretty_assertions::assert_eq;
use umfkit::{
    parse, FieldValidator, InitialField, Metadata, Preset, PresetConfig, UmfError, Violation,
};

fn release_preset(allow_extra_fields: bool) -> Preset {
    Preset::new(
        PresetConfig::new()
            .field(
                "Type",
                FieldValidator::required().with_accepted_values(["BDRip", "WebRip"]),
            )
            .field(
                "Track Number",
                FieldValidator::optional().with_format(r"^\d+$").unwrap(),
            )
            .allow_extra_fields(allow_extra_fields),
    )
}

#[test]
fn required_field_detection() {
    let preset = release_preset(true);
    let mut m = Metadata::new("Item").unwrap();

    let err = preset.validate(&m).unwrap_err();
    assert!(matches!(err, UmfError::ValidationFailed(_)));
    assert!(err.to_string().contains("Required field 'Type' is missing"));

    m.set(None, "Type", "BDRip");
    assert!(preset.validate(&m).is_ok());
}

#[test]
fn required_field_in_group_counts() {
    let preset = release_preset(true);
    let m = parse("Item\n[ Release ]\nType: WebRip").unwrap();
    preset.validate(&m).unwrap();
}

#[test]
fn format_validator() {
    let preset = release_preset(false);
    let mut m = Metadata::new("Album").unwrap();

    preset
        .set_field(&mut m, None, "Track Number", "12")
        .unwrap();
    let err = preset
        .set_field(&mut m, None, "Track Number", "12a")
        .unwrap_err();

    assert!(matches!(err, UmfError::FieldValidationFailed(_)));
    assert_eq!(
        err.to_string(),
        "Field validation failed: Field 'Track Number' has invalid format: '12a'"
    );
    assert_eq!(m.get(None, "Track Number"), Some("12"));
}

#[test]
fn extra_field_policy() {
    let m = parse("Item\nType: BDRip\nFoo: bar").unwrap();

    let err = release_preset(false).validate(&m).unwrap_err();
    assert_eq!(
        err.violations(),
        &[Violation::NotAllowed {
            field: "Foo".to_string()
        }]
    );
    assert!(err.to_string().contains("Foo"));
    assert!(err.to_string().contains("not allowed"));

    release_preset(true).validate(&m).unwrap();
}

#[test]
fn validation_collects_every_violation() {
    let m = parse("Item\nTrack Number: one\nFoo: bar\n[ Disc ]\nBar: baz").unwrap();
    let err = release_preset(false).validate(&m).unwrap_err();

    let fields: Vec<_> = err.violations().iter().map(Violation::field).collect();
    assert_eq!(fields, vec!["Type", "Track Number", "Foo", "Bar"]);
}

#[test]
fn create_does_not_validate() {
    let preset = release_preset(false);
    let m = preset
        .create(
            "Item",
            [
                ("Type", InitialField::global("Cassette")),
                ("Unknown", InitialField::grouped("Extra", "yes")),
            ],
        )
        .unwrap();

    assert_eq!(m.get(None, "Type"), Some("Cassette"));
    assert_eq!(m.get(Some("Extra"), "Unknown"), Some("yes"));

    // The global Type is seen from the global scope and again through the
    // "Extra" group's fallback, then once more by the existing-field pass
    let err = preset.validate(&m).unwrap_err();
    let fields: Vec<_> = err.violations().iter().map(Violation::field).collect();
    assert_eq!(fields, vec!["Type", "Type", "Type", "Unknown"]);
}

#[test]
fn set_field_rejects_unknown_when_strict() {
    let preset = release_preset(false);
    let mut m = Metadata::new("Item").unwrap();

    let err = preset.set_field(&mut m, Some("H"), "Foo", "bar").unwrap_err();
    assert_eq!(err.to_string(), "Field 'Foo' is not allowed by this preset");
    assert!(m.groups().is_empty());

    release_preset(true)
        .set_field(&mut m, Some("H"), "Foo", "bar")
        .unwrap();
    assert_eq!(m.get(Some("H"), "Foo"), Some("bar"));
}

#[test]
fn config_copy_is_detached() {
    let preset = release_preset(false);
    let mut copy = preset.get_config();
    copy.required_fields.shift_remove("Type");

    assert!(preset.config().validator("Type").is_some());
    assert_ne!(&copy, preset.config());
}

#[cfg(feature = "presets")]
mod builtin {
    use umfkit::presets::{anime, music, ANIME, MUSIC};
    use umfkit::{parse, InitialField};

    #[test]
    fn anime_end_to_end() {
        let m = parse(
            "My Anime

# Release information
Type: BDRip
Source: Encoder (https://example.org)
Subtitle: Subs Team (https://example.org/subs)
Resolution: 1080p
Encoding: H.264 (AAC)",
        )
        .unwrap();
        ANIME.validate(&m).unwrap();
        assert_eq!(m.get(None, anime::RESOLUTION), Some("1080p"));
    }

    #[test]
    fn anime_reports_missing_fields() {
        let m = parse("My Anime\n[ Release ]\nType: BDRip\nResolution: 1080p").unwrap();
        let err = ANIME.validate(&m).unwrap_err();
        let missing: Vec<_> = err.violations().iter().map(|v| v.field()).collect();
        assert_eq!(missing, vec![anime::SOURCE, anime::SUBTITLE, anime::ENCODING]);
    }

    #[test]
    fn music_create_then_mutate() {
        let mut m = MUSIC
            .create("Soundtrack", [(music::TYPE, InitialField::global("CDRip"))])
            .unwrap();
        MUSIC
            .set_field(&mut m, Some("Track 1"), music::TRACK_NUMBER, "1")
            .unwrap();
        MUSIC
            .set_field(&mut m, Some("Track 1"), music::COMPOSER, "Somebody")
            .unwrap();
        MUSIC.validate(&m).unwrap();
    }
}
