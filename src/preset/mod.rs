//! Presets: schema-checked creation, mutation and validation of metadata
//!
//! A [`Preset`] wraps an immutable [`PresetConfig`]. One preset can create and
//! validate any number of [`Metadata`] instances and can be shared freely
//! between threads.

#[cfg(feature = "presets")]
pub mod presets;
pub mod validator;

pub use validator::{FieldValidator, FormatPattern, PresetConfig};

use crate::core::error::{UmfError, UmfResult, Violation};
use crate::core::metadata::Metadata;
use crate::core::serializer::UmfSerializer;

/// A field supplied to [`Preset::create`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitialField {
    /// Group to place the field in; `None` or empty means global
    pub header: Option<String>,
    /// The field value
    pub value: String,
}

impl InitialField {
    /// A field in the global scope
    pub fn global(value: impl Into<String>) -> Self {
        Self {
            header: None,
            value: value.into(),
        }
    }

    /// A field inside a group
    pub fn grouped(header: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            header: Some(header.into()),
            value: value.into(),
        }
    }
}

/// Validation schema with convenience constructors for metadata
#[derive(Debug, Clone)]
pub struct Preset {
    config: PresetConfig,
}

impl Preset {
    /// Create a preset from a schema
    pub fn new(config: PresetConfig) -> Self {
        Self { config }
    }

    /// Create metadata for a media item
    ///
    /// Initial fields are written as given and are not checked against the
    /// schema; call [`Preset::validate`] to check them.
    ///
    /// # Arguments
    ///
    /// * `media_name` - Name of the media item, must not be blank
    /// * `initial_fields` - `(field name, field)` pairs to write
    pub fn create<I, N>(&self, media_name: &str, initial_fields: I) -> UmfResult<Metadata>
    where
        I: IntoIterator<Item = (N, InitialField)>,
        N: Into<String>,
    {
        let mut metadata = Metadata::new(media_name)?;

        for (name, field) in initial_fields {
            let header = field.header.as_deref().filter(|h| !h.is_empty());
            metadata.set(header, name, field.value);
        }

        Ok(metadata)
    }

    /// Validate a whole document against the schema
    ///
    /// All violations are collected before failing with
    /// [`UmfError::ValidationFailed`]. A field that appears in several scopes
    /// is reported once per scope.
    pub fn validate(&self, metadata: &Metadata) -> UmfResult<()> {
        let mut violations = Vec::new();

        self.check_required_fields(metadata, &mut violations);
        self.check_existing_fields(metadata, &mut violations);

        if violations.is_empty() {
            tracing::debug!(media_name = metadata.media_name(), "metadata passed validation");
            return Ok(());
        }

        tracing::debug!(
            media_name = metadata.media_name(),
            violations = violations.len(),
            "metadata failed validation"
        );
        Err(UmfError::ValidationFailed(violations))
    }

    /// Set a single field after checking it against the schema
    ///
    /// # Arguments
    ///
    /// * `metadata` - The metadata to modify
    /// * `header` - Target group, or `None` for the global scope
    /// * `name` - Field name, must not be blank
    /// * `value` - Field value, must not be blank
    ///
    /// Fields that would not survive a serialize/parse round trip (line
    /// breaks, a `:` in the name, a name starting with `#` or `[`) fail with
    /// [`UmfError::FieldValidationFailed`] carrying [`Violation::Unwritable`].
    pub fn set_field(
        &self,
        metadata: &mut Metadata,
        header: Option<&str>,
        name: &str,
        value: &str,
    ) -> UmfResult<()> {
        if name.trim().is_empty() {
            return Err(UmfError::EmptyFieldName { location: None });
        }
        if value.trim().is_empty() {
            return Err(UmfError::EmptyFieldValue { location: None });
        }
        if !UmfSerializer::is_writable(name, value) {
            return Err(UmfError::FieldValidationFailed(vec![Violation::Unwritable {
                field: name.to_string(),
                value: value.to_string(),
            }]));
        }

        match self.config.validator(name) {
            Some(validator) => {
                let violations = validator.check(name, value);
                if !violations.is_empty() {
                    return Err(UmfError::FieldValidationFailed(violations));
                }
            }
            None if !self.config.allow_extra_fields => {
                return Err(UmfError::FieldNotAllowed(name.to_string()));
            }
            None => {}
        }

        metadata.set(header, name, value);
        Ok(())
    }

    /// Get an owned copy of the schema
    pub fn get_config(&self) -> PresetConfig {
        self.config.clone()
    }

    /// Borrow the schema
    pub fn config(&self) -> &PresetConfig {
        &self.config
    }

    fn check_required_fields(&self, metadata: &Metadata, violations: &mut Vec<Violation>) {
        let required = self
            .config
            .required_fields
            .iter()
            .filter(|(_, validator)| validator.required);

        for (name, validator) in required {
            let scopes = std::iter::once(None).chain(metadata.headers().map(Some));
            let mut found = false;

            for header in scopes {
                if let Some(value) = metadata.get(header, name) {
                    found = true;
                    violations.extend(validator.check(name, value));
                }
            }

            if !found {
                violations.push(Violation::Missing {
                    field: name.clone(),
                });
            }
        }
    }

    fn check_existing_fields(&self, metadata: &Metadata, violations: &mut Vec<Violation>) {
        for (_, name, value) in metadata.fields() {
            match self.config.validator(name) {
                Some(validator) => violations.extend(validator.check(name, value)),
                None if !self.config.allow_extra_fields => violations.push(Violation::NotAllowed {
                    field: name.to_string(),
                }),
                None => {}
            }
        }
    }
}

impl From<PresetConfig> for Preset {
    fn from(config: PresetConfig) -> Self {
        Self::new(config)
    }
}
