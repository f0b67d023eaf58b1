//! UMF Metadata
//!
//! This module provides the main [`Metadata`] struct: a media name, a global
//! field scope, and any number of named groups.

use crate::core::error::{UmfError, UmfResult};
use crate::core::parser::UmfParser;
use crate::core::serializer::UmfSerializer;
use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;

/// Field name to value mapping, in insertion order
pub type FieldMap = IndexMap<String, String>;

/// Main structure for working with UMF metadata
///
/// Lookups with a header consult that group first and fall back to the
/// global scope; the global scope never falls back to a group. A blank
/// header addresses the global scope.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "camelCase", try_from = "RawMetadata")
)]
pub struct Metadata {
    media_name: String,
    global: FieldMap,
    groups: IndexMap<String, FieldMap>,
}

impl Metadata {
    /// Create an empty metadata object for the given media
    ///
    /// Fails with [`UmfError::EmptyMediaName`] if the name is blank.
    pub fn new(media_name: impl Into<String>) -> UmfResult<Self> {
        let media_name = media_name.into();
        if media_name.trim().is_empty() {
            return Err(UmfError::EmptyMediaName { location: None });
        }
        Ok(Self::with_name(media_name))
    }

    /// Caller guarantees the name is not blank
    pub(crate) fn with_name(media_name: String) -> Self {
        Self {
            media_name,
            global: FieldMap::new(),
            groups: IndexMap::new(),
        }
    }

    /// Parse UMF text
    pub fn parse(s: &str) -> UmfResult<Self> {
        UmfParser::new().parse(s)
    }

    /// The media this metadata describes
    pub fn media_name(&self) -> &str {
        &self.media_name
    }

    /// Fields outside of any header
    pub fn global(&self) -> &FieldMap {
        &self.global
    }

    /// All groups, keyed by header name
    pub fn groups(&self) -> &IndexMap<String, FieldMap> {
        &self.groups
    }

    /// Fields of a single group, if it exists
    pub fn group(&self, header: &str) -> Option<&FieldMap> {
        self.groups.get(header)
    }

    /// Header names in insertion order
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Every field as `(header, name, value)`, global scope first
    pub fn fields(&self) -> impl Iterator<Item = (Option<&str>, &str, &str)> {
        let global = self
            .global
            .iter()
            .map(|(name, value)| (None, name.as_str(), value.as_str()));
        let grouped = self.groups.iter().flat_map(|(header, group)| {
            group
                .iter()
                .map(move |(name, value)| (Some(header.as_str()), name.as_str(), value.as_str()))
        });
        global.chain(grouped)
    }

    /// Total number of fields across all scopes
    pub fn len(&self) -> usize {
        self.global.len() + self.groups.values().map(FieldMap::len).sum::<usize>()
    }

    /// True when no scope holds any field
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if a field exists
    ///
    /// # Arguments
    ///
    /// * `header` - The group to look in first, or `None` for global only
    /// * `name` - The field name
    pub fn has(&self, header: Option<&str>, name: &str) -> bool {
        self.get(header, name).is_some()
    }

    /// Get a field value
    ///
    /// # Arguments
    ///
    /// * `header` - The group to look in first, or `None` for global only
    /// * `name` - The field name
    pub fn get(&self, header: Option<&str>, name: &str) -> Option<&str> {
        group_header(header)
            .and_then(|h| self.groups.get(h))
            .and_then(|group| group.get(name))
            .or_else(|| self.global.get(name))
            .map(String::as_str)
    }

    /// Set a field value, creating the group on first use
    ///
    /// An existing field in the same scope keeps its position and gets the
    /// new value.
    pub fn set(&mut self, header: Option<&str>, name: impl Into<String>, value: impl Into<String>) {
        let scope = match group_header(header) {
            None => &mut self.global,
            Some(h) => self.groups.entry(h.to_string()).or_default(),
        };
        scope.insert(name.into(), value.into());
    }

    /// Remove a field from exactly the addressed scope
    pub fn remove(&mut self, header: Option<&str>, name: &str) -> Option<String> {
        let scope = match group_header(header) {
            None => Some(&mut self.global),
            Some(h) => self.groups.get_mut(h),
        };
        scope.and_then(|fields| fields.shift_remove(name))
    }

    /// Serialize to UMF text
    pub fn serialize(&self) -> String {
        UmfSerializer::new().serialize(self)
    }
}

/// `None` for the global scope, including blank header names
fn group_header(header: Option<&str>) -> Option<&str> {
    header.filter(|h| !h.trim().is_empty())
}

/// Unchecked wire form; deserialization goes through [`Metadata::new`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMetadata {
    media_name: String,
    #[serde(default)]
    global: FieldMap,
    #[serde(default)]
    groups: IndexMap<String, FieldMap>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMetadata> for Metadata {
    type Error = UmfError;

    fn try_from(raw: RawMetadata) -> Result<Self, Self::Error> {
        let mut metadata = Metadata::new(raw.media_name)?;
        metadata.global = raw.global;
        // Through `set` so a blank header lands in the global scope
        for (header, fields) in raw.groups {
            for (name, value) in fields {
                metadata.set(Some(header.as_str()), name, value);
            }
        }
        Ok(metadata)
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl FromStr for Metadata {
    type Err = UmfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
