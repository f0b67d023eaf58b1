//! Error types for UMF operations
//!
//! This module defines all error types used throughout the crate: syntax
//! errors raised while parsing UMF text, and schema violations raised by
//! presets.

use std::fmt;
use thiserror::Error;

/// Position of an offending line in a UMF document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// 1-based line number
    pub line: usize,
    /// The offending line, trimmed
    pub content: String,
}

impl Location {
    /// Create a new location
    pub fn new(line: usize, content: impl Into<String>) -> Self {
        Self {
            line,
            content: content.into(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at line {}: \"{}\"", self.line, self.content)
    }
}

/// A single schema rule broken by a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A required field is present in no scope at all
    Missing { field: String },
    /// The value is not one of the accepted values
    InvalidValue {
        field: String,
        value: String,
        accepted: Vec<String>,
    },
    /// The value does not match the format pattern
    InvalidFormat { field: String, value: String },
    /// The field is unknown to a preset that rejects extra fields
    NotAllowed { field: String },
    /// The field cannot be written as a single UMF line
    Unwritable { field: String, value: String },
}

impl Violation {
    /// Name of the field this violation is about
    pub fn field(&self) -> &str {
        match self {
            Violation::Missing { field }
            | Violation::InvalidValue { field, .. }
            | Violation::InvalidFormat { field, .. }
            | Violation::NotAllowed { field }
            | Violation::Unwritable { field, .. } => field,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Missing { field } => write!(f, "Required field '{}' is missing", field),
            Violation::InvalidValue {
                field,
                value,
                accepted,
            } => write!(
                f,
                "Field '{}' has invalid value '{}'. Accepted values: {}",
                field,
                value,
                accepted.join(", ")
            ),
            Violation::InvalidFormat { field, value } => {
                write!(f, "Field '{}' has invalid format: '{}'", field, value)
            }
            Violation::NotAllowed { field } => {
                write!(f, "Field '{}' is not allowed by this preset", field)
            }
            Violation::Unwritable { field, value } => {
                write!(f, "Field '{}' cannot be written as UMF: {:?}", field, value)
            }
        }
    }
}

fn at(location: &Option<Location>) -> String {
    location
        .as_ref()
        .map(|l| format!(" {}", l))
        .unwrap_or_default()
}

fn joined(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Error types for UMF operations
#[derive(Debug, Error)]
pub enum UmfError {
    /// The media name (first line) is blank
    #[error("Empty Media Name{}", at(.location))]
    EmptyMediaName { location: Option<Location> },

    /// A `[ ]` header line has nothing between the brackets
    #[error("Empty Header Name {location}")]
    EmptyHeaderName { location: Location },

    /// A field has a blank name
    #[error("Empty Field Name{}", at(.location))]
    EmptyFieldName { location: Option<Location> },

    /// A field has a blank value
    #[error("Empty Field Value{}", at(.location))]
    EmptyFieldValue { location: Option<Location> },

    /// A line is neither blank, a comment, a header nor a field
    #[error("Invalid Line {location}")]
    InvalidLine { location: Location },

    /// Whole-document validation found one or more violations
    #[error("Validation failed: {}", joined(.0))]
    ValidationFailed(Vec<Violation>),

    /// A single field value was rejected by its validator
    #[error("Field validation failed: {}", joined(.0))]
    FieldValidationFailed(Vec<Violation>),

    /// A field unknown to the preset was set while extra fields are disallowed
    #[error("Field '{0}' is not allowed by this preset")]
    FieldNotAllowed(String),

    /// A format pattern failed to compile
    #[error("Bad format pattern '{pattern}': {source}")]
    BadPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Preset schema (de)serialization error
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl UmfError {
    fn location(&self) -> Option<&Location> {
        match self {
            UmfError::EmptyMediaName { location }
            | UmfError::EmptyFieldName { location }
            | UmfError::EmptyFieldValue { location } => location.as_ref(),
            UmfError::EmptyHeaderName { location } | UmfError::InvalidLine { location } => {
                Some(location)
            }
            _ => None,
        }
    }

    /// 1-based line number of a parse error
    pub fn line(&self) -> Option<usize> {
        self.location().map(|l| l.line)
    }

    /// Trimmed offending line of a parse error
    pub fn content(&self) -> Option<&str> {
        self.location().map(|l| l.content.as_str())
    }

    /// Violations carried by a validation error
    pub fn violations(&self) -> &[Violation] {
        match self {
            UmfError::ValidationFailed(v) | UmfError::FieldValidationFailed(v) => v,
            _ => &[],
        }
    }
}

/// Result type alias for UMF operations
pub type UmfResult<T> = Result<T, UmfError>;
