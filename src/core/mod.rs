//! UMF Core module
//!
//! This module contains the core functionality for UMF metadata processing,
//! including parsing, manipulation, and serialization.

pub mod error;
pub mod metadata;
pub mod parser;
pub mod serializer;

pub use error::{Location, UmfError, UmfResult, Violation};
pub use metadata::{FieldMap, Metadata};
pub use parser::UmfParser;
pub use serializer::UmfSerializer;
