//! UMF text parser
//!
//! This module provides functionality for parsing UMF documents. Parsing is a
//! single forward pass over the lines; the first malformed line aborts the
//! whole parse.

use crate::core::error::{Location, UmfError, UmfResult};
use crate::core::metadata::Metadata;

/// Lines starting with this are ignored
const COMMENT_PREFIX: char = '#';
/// Separates a field name from its value
const FIELD_SEPARATOR: char = ':';

/// Parser for UMF documents
#[derive(Debug, Default)]
pub struct UmfParser {
    /// Header of the group that field lines are currently assigned to
    current_header: Option<String>,
}

impl UmfParser {
    /// Create a new UMF parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a UMF document from a string
    ///
    /// The first line is the media name. Every following line is blank, a
    /// `#` comment, a `[ header ]`, or a `name: value` field.
    pub fn parse(&mut self, input: &str) -> UmfResult<Metadata> {
        self.current_header = None;

        let mut lines = input.split('\n');
        let media_name = lines.next().unwrap_or_default().trim();
        if media_name.is_empty() {
            return Err(UmfError::EmptyMediaName {
                location: Some(Location::new(1, media_name)),
            });
        }

        tracing::debug!(media_name, "parsing UMF document");
        let mut metadata = Metadata::with_name(media_name.to_string());

        // Line 1 was the media name
        for (index, raw) in lines.enumerate() {
            let line_no = index + 2;
            let line = raw.trim();

            if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
                continue;
            }

            if let Some(inner) = Self::header_text(line) {
                self.parse_header_line(inner, line_no, line)?;
            } else if let Some((name, value)) = line.split_once(FIELD_SEPARATOR) {
                self.parse_field_line(&mut metadata, name, value, line_no, line)?;
            } else {
                return Err(UmfError::InvalidLine {
                    location: Location::new(line_no, line),
                });
            }
        }

        tracing::debug!(
            media_name = metadata.media_name(),
            groups = metadata.groups().len(),
            fields = metadata.len(),
            "parsed UMF document"
        );
        Ok(metadata)
    }

    /// Inner text of a `[ ... ]` line, if the line is one
    fn header_text(line: &str) -> Option<&str> {
        line.strip_prefix('[')?.strip_suffix(']')
    }

    fn parse_header_line(&mut self, inner: &str, line_no: usize, line: &str) -> UmfResult<()> {
        let header = inner.trim();
        if header.is_empty() {
            return Err(UmfError::EmptyHeaderName {
                location: Location::new(line_no, line),
            });
        }
        tracing::trace!(header, line = line_no, "entering group");
        self.current_header = Some(header.to_string());
        Ok(())
    }

    fn parse_field_line(
        &self,
        metadata: &mut Metadata,
        name: &str,
        value: &str,
        line_no: usize,
        line: &str,
    ) -> UmfResult<()> {
        let name = name.trim();
        let value = value.trim();

        if name.is_empty() {
            return Err(UmfError::EmptyFieldName {
                location: Some(Location::new(line_no, line)),
            });
        }
        if value.is_empty() {
            return Err(UmfError::EmptyFieldValue {
                location: Some(Location::new(line_no, line)),
            });
        }

        metadata.set(self.current_header.as_deref(), name, value);
        Ok(())
    }
}
