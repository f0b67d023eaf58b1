//! # UMFKit
//!
//! Pure Rust implementation of the Unified Metadata Format (UMF), a small
//! line-oriented text format describing a media item as key/value fields,
//! optionally grouped under named headers:
//!
//! ```text
//! My Anime
//!
//! Type: BDRip
//!
//! [ Release ]
//! Resolution: 1080p
//! ```
//!
//! The crate provides:
//! - [`Metadata`]: the data model with header-scoped lookups that fall back
//!   to the global scope
//! - [`parse`] / [`UmfParser`] and [`UmfSerializer`]: text round-tripping
//! - [`Preset`]: schema-checked creation, mutation and validation
//!
//! ## Example
//!
//! ```
//! use umfkit::{parse, FieldValidator, Preset, PresetConfig};
//!
//! let meta = parse("My Anime\n[ Release ]\nType: BDRip\nResolution: 1080p")?;
//! assert_eq!(meta.get(Some("Release"), "Type"), Some("BDRip"));
//!
//! let preset = Preset::new(
//!     PresetConfig::new()
//!         .field("Type", FieldValidator::required().with_accepted_values(["BDRip", "WebRip"]))
//!         .allow_extra_fields(true),
//! );
//! preset.validate(&meta)?;
//! # Ok::<(), umfkit::UmfError>(())
//! ```
//!
//! ## Features
//!
//! - `presets` (default): built-in [`presets::ANIME`] and [`presets::MUSIC`]
//! - `serde`: `Serialize`/`Deserialize` for metadata and schemas, plus
//!   [`PresetConfig::from_json`]

pub mod core;
pub mod preset;

pub use crate::core::{
    FieldMap, Location, Metadata, UmfError, UmfParser, UmfResult, UmfSerializer, Violation,
};
pub use crate::preset::{FieldValidator, FormatPattern, InitialField, Preset, PresetConfig};

#[cfg(feature = "presets")]
pub use crate::preset::presets;

/// Parse a UMF document
pub fn parse(input: &str) -> UmfResult<Metadata> {
    UmfParser::new().parse(input)
}
