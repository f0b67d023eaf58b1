//! Built-in presets
//!
//! Ready-made schemas for anime and music releases. Both accept extra fields.

use crate::preset::validator::{FieldValidator, PresetConfig};
use crate::preset::Preset;
use std::sync::LazyLock;

/// `<Source Name> (<Source URL?>)`
const SOURCE_FORMAT: &str = r"^.+\s*\([^)]*\)$";
/// `<Video Codec> (<Audio Codec>)`
const ENCODING_FORMAT: &str = r"^(H\.264|H\.265|VP9)\s*\((AAC|FLAC)\)$";
const TRACK_NUMBER_FORMAT: &str = r"^\d+$";

/// Field names used by the anime preset
pub mod anime {
    pub const TYPE: &str = "Type";
    pub const SOURCE: &str = "Source";
    pub const SUBTITLE: &str = "Subtitle";
    pub const RESOLUTION: &str = "Resolution";
    pub const ENCODING: &str = "Encoding";
}

/// Field names used by the music preset
pub mod music {
    pub const TYPE: &str = "Type";
    pub const TRACK_NUMBER: &str = "Track Number";
    pub const PERFORMER: &str = "Performer";
    pub const COMPOSER: &str = "Composer";
    pub const ARRANGER: &str = "Arranger";
    pub const LYRICIST: &str = "Lyricist";
}

/// Preset for anime video releases
pub static ANIME: LazyLock<Preset> = LazyLock::new(|| Preset::new(anime_config()));

/// Preset for music track releases
pub static MUSIC: LazyLock<Preset> = LazyLock::new(|| Preset::new(music_config()));

/// Schema behind [`ANIME`]
pub fn anime_config() -> PresetConfig {
    PresetConfig::new()
        .field(
            anime::TYPE,
            FieldValidator::required()
                .with_accepted_values(["BDRip", "WebRip"])
                .with_description("The type of the source video"),
        )
        .field(
            anime::SOURCE,
            builtin_format(SOURCE_FORMAT).with_description(
                "The source of the video (encoder, platform, etc.). \
                 Format: <Source Name> (<Source URL?>)",
            ),
        )
        .field(
            anime::SUBTITLE,
            builtin_format(SOURCE_FORMAT).with_description(
                "The source of the subtitle (subtitle team, platform, etc.). \
                 Format: <Source Name> (<Source URL?>)",
            ),
        )
        .field(
            anime::RESOLUTION,
            FieldValidator::required()
                .with_accepted_values(["720p", "1080p", "1440p", "4K"])
                .with_description("The resolution of the video"),
        )
        .field(
            anime::ENCODING,
            builtin_format(ENCODING_FORMAT).with_description(
                "The video and audio codec for the anime. \
                 Format: <Video Codec> (<Audio Codec>)",
            ),
        )
        .allow_extra_fields(true)
}

/// Schema behind [`MUSIC`]
pub fn music_config() -> PresetConfig {
    PresetConfig::new()
        .field(
            music::TYPE,
            FieldValidator::required()
                .with_accepted_values(["CDRip", "GameRip", "WebRip"])
                .with_description("The type of the source audio"),
        )
        .field(
            music::PERFORMER,
            FieldValidator::optional().with_description("The performer of the track (optional)"),
        )
        .field(
            music::COMPOSER,
            FieldValidator::optional().with_description("The composer of the track (optional)"),
        )
        .field(
            music::ARRANGER,
            FieldValidator::optional().with_description("The arranger of the track (optional)"),
        )
        .field(
            music::LYRICIST,
            FieldValidator::optional().with_description("The lyricist of the track (optional)"),
        )
        .field(
            music::TRACK_NUMBER,
            builtin_format(TRACK_NUMBER_FORMAT)
                .with_description("The index of the track in the album"),
        )
        .allow_extra_fields(true)
}

/// Required field with one of the constant patterns above
fn builtin_format(pattern: &str) -> FieldValidator {
    FieldValidator::required()
        .with_format(pattern)
        .expect("Invalid built-in format pattern")
}
