//! Property-based tests for the UMF text format.
//!
//! These tests use proptest to check that metadata built from valid writes
//! survives a serialize/parse round trip.

use proptest::prelude::*;

use umfkit::{parse, Metadata, UmfSerializer};

/// Strategy for trimmed, non-blank media names.
fn media_name() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 ()#:._-]{0,30}".prop_map(|s| s.trim().to_string())
}

/// Strategy for header names; a `:` inside brackets is still a header.
fn header_name() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 :._-]{0,15}".prop_map(|s| s.trim().to_string())
}

/// Strategy for field names: no `:`, not starting with `#` or `[`.
fn field_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 _.-]{0,15}".prop_map(|s| s.trim().to_string())
}

/// Strategy for field values; colons and brackets are fine here.
fn field_value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9(\\[][A-Za-z0-9 :()\\[\\]/#._-]{0,30}".prop_map(|s| s.trim().to_string())
}

fn fields() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((field_name(), field_value()), 1..6)
}

/// Strategy for metadata built purely through `set`.
fn metadata() -> impl Strategy<Value = Metadata> {
    (
        media_name(),
        prop::collection::vec((field_name(), field_value()), 0..6),
        prop::collection::vec((header_name(), fields()), 0..5),
    )
        .prop_map(|(name, global, groups)| {
            let mut meta = Metadata::new(name).unwrap();
            for (field, value) in global {
                meta.set(None, field, value);
            }
            for (header, group) in groups {
                for (field, value) in group {
                    meta.set(Some(header.as_str()), field, value);
                }
            }
            meta
        })
}

proptest! {
    /// Any metadata built from valid writes round-trips through UMF text.
    #[test]
    fn metadata_text_roundtrip(meta in metadata()) {
        let reparsed = parse(&meta.to_string()).unwrap();
        prop_assert_eq!(&reparsed, &meta);
    }

    /// Header and field order survive the round trip.
    #[test]
    fn roundtrip_keeps_order(meta in metadata()) {
        let reparsed = parse(&meta.serialize()).unwrap();
        let before: Vec<_> = meta.fields().collect();
        let after: Vec<_> = reparsed.fields().collect();
        prop_assert_eq!(after, before);
    }

    /// Generated fields are all writable, and serializing is stable.
    #[test]
    fn serialize_is_idempotent(meta in metadata()) {
        for (_, name, value) in meta.fields() {
            prop_assert!(UmfSerializer::is_writable(name, value));
        }
        let text = meta.to_string();
        prop_assert_eq!(parse(&text).unwrap().to_string(), text);
    }

    /// A group lookup falls back to global exactly when the group lacks the field.
    #[test]
    fn group_lookup_falls_back_to_global(
        header in header_name(),
        name in field_name(),
        global_value in field_value(),
        group_value in proptest::option::of(field_value()),
    ) {
        let mut meta = Metadata::new("Item").unwrap();
        meta.set(None, name.as_str(), global_value.as_str());
        if let Some(value) = &group_value {
            meta.set(Some(header.as_str()), name.as_str(), value.as_str());
        }

        let expected = group_value.as_deref().unwrap_or(&global_value);
        prop_assert_eq!(meta.get(Some(header.as_str()), &name), Some(expected));
        prop_assert_eq!(meta.get(None, &name), Some(global_value.as_str()));
    }

    /// Parsing arbitrary text never panics.
    #[test]
    fn parse_never_panics(text in "\\PC*(\n\\PC*){0,8}") {
        let _ = parse(&text);
    }
}
