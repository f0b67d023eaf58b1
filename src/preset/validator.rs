//! Field validators and preset schemas
//!
//! A [`PresetConfig`] maps field names to [`FieldValidator`]s. Each validator
//! may restrict a value to a set of accepted values, to a [`FormatPattern`],
//! or both; the two checks are independent.

use crate::core::error::{UmfError, UmfResult, Violation};
use indexmap::IndexMap;
use regex::Regex;
use std::fmt;

/// A regular expression a field value must match in full
#[derive(Debug, Clone)]
pub struct FormatPattern {
    source: String,
    regex: Regex,
}

impl FormatPattern {
    /// Compile a pattern; matching always covers the whole value
    pub fn new(pattern: impl Into<String>) -> UmfResult<Self> {
        let source = pattern.into();
        let regex = Regex::new(&format!("^(?:{})$", source)).map_err(|e| UmfError::BadPattern {
            pattern: source.clone(),
            source: e,
        })?;
        Ok(Self { source, regex })
    }

    /// The pattern as written
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Check whether the whole value matches
    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

impl PartialEq for FormatPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for FormatPattern {}

impl fmt::Display for FormatPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FormatPattern {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FormatPattern {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        FormatPattern::new(source).map_err(serde::de::Error::custom)
    }
}

/// Rules for a single field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FieldValidator {
    /// Whether the field must be present in some scope
    #[cfg_attr(feature = "serde", serde(default))]
    pub required: bool,
    /// If set, the value must be one of these
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub accepted_values: Option<Vec<String>>,
    /// If set, the value must match this pattern in full
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub format: Option<FormatPattern>,
    /// Human readable description
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub description: Option<String>,
}

impl FieldValidator {
    /// A validator for a field that must be present
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    /// A validator for a field that may be absent
    pub fn optional() -> Self {
        Self::default()
    }

    /// Restrict the value to a fixed set
    pub fn with_accepted_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accepted_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Require the value to match a pattern
    pub fn with_format(mut self, pattern: &str) -> UmfResult<Self> {
        self.format = Some(FormatPattern::new(pattern)?);
        Ok(self)
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check a value against the accepted set and the format
    ///
    /// Returns every rule the value breaks; an empty list means valid.
    pub fn check(&self, field: &str, value: &str) -> Vec<Violation> {
        let mut violations = Vec::new();

        if let Some(accepted) = &self.accepted_values {
            if !accepted.iter().any(|a| a == value) {
                violations.push(Violation::InvalidValue {
                    field: field.to_string(),
                    value: value.to_string(),
                    accepted: accepted.clone(),
                });
            }
        }

        if let Some(format) = &self.format {
            if !format.is_match(value) {
                violations.push(Violation::InvalidFormat {
                    field: field.to_string(),
                    value: value.to_string(),
                });
            }
        }

        violations
    }
}

/// Schema of a preset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PresetConfig {
    /// Validators keyed by field name
    #[cfg_attr(feature = "serde", serde(default))]
    pub required_fields: IndexMap<String, FieldValidator>,
    /// Whether fields without a validator are accepted
    #[cfg_attr(feature = "serde", serde(default))]
    pub allow_extra_fields: bool,
}

impl PresetConfig {
    /// Create an empty schema that rejects extra fields
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a validator for a field
    pub fn field(mut self, name: impl Into<String>, validator: FieldValidator) -> Self {
        self.required_fields.insert(name.into(), validator);
        self
    }

    /// Set the extra-field policy
    pub fn allow_extra_fields(mut self, allow: bool) -> Self {
        self.allow_extra_fields = allow;
        self
    }

    /// Look up the validator for a field
    pub fn validator(&self, name: &str) -> Option<&FieldValidator> {
        self.required_fields.get(name)
    }

    /// Load a schema from JSON
    ///
    /// Keys follow the UMF schema convention: `requiredFields`,
    /// `allowExtraFields`, and per field `required`, `acceptedValues`,
    /// `format`, `description`.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> UmfResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Dump the schema as pretty-printed JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> UmfResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
