//! UMF serializer
//!
//! This module renders [`Metadata`] back to UMF text. The output is the
//! canonical counterpart of [`UmfParser`](crate::core::parser::UmfParser):
//! parsing it again yields equal metadata.

use crate::core::metadata::{FieldMap, Metadata};

/// Serializer for UMF documents
#[derive(Debug, Default, Clone, Copy)]
pub struct UmfSerializer;

impl UmfSerializer {
    /// Create a new UMF serializer
    pub fn new() -> Self {
        Self
    }

    /// Serialize metadata to UMF text
    ///
    /// Layout: the media name, then the global fields after a blank line,
    /// then each group as a `[ header ]` line surrounded by blank lines and
    /// followed by its fields. No trailing newline is written.
    pub fn serialize(&self, metadata: &Metadata) -> String {
        let mut lines: Vec<String> = vec![metadata.media_name().to_string()];

        if !metadata.global().is_empty() {
            lines.push(String::new());
            Self::push_fields(&mut lines, metadata.global());
        }

        for (header, group) in metadata.groups() {
            lines.push(String::new());
            lines.push(format!("[ {} ]", header));
            lines.push(String::new());
            Self::push_fields(&mut lines, group);
        }

        lines.join("\n")
    }

    /// Whether `name: value` re-parses as exactly this field
    ///
    /// Line breaks split the field, a `:` in the name moves the separator,
    /// and a name starting with `#` or `[` reads as a comment or header.
    pub fn is_writable(name: &str, value: &str) -> bool {
        let breaks = |s: &str| s.contains(['\n', '\r']);
        !breaks(name)
            && !breaks(value)
            && !name.contains(':')
            && !name.trim_start().starts_with(['#', '['])
    }

    fn push_fields(lines: &mut Vec<String>, fields: &FieldMap) {
        lines.extend(
            fields
                .iter()
                .map(|(name, value)| format!("{}: {}", name, value)),
        );
    }
}
