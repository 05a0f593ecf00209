//! Error types for SCIM resource decoding, encoding and extension handling.
//!
//! Every error is structural and deterministic: it carries enough context
//! (field path, expected and actual JSON kind, or extension URN) to diagnose
//! the problem without re-parsing the input.

use std::fmt::Display;

/// Main error type for SCIM resource operations.
#[derive(Debug, thiserror::Error)]
pub enum ScimError {
    /// A declared member's wire value has the wrong JSON type
    #[error("Attribute '{field}' has invalid type, expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: String,
        actual: String,
    },

    /// The top-level document is not a JSON object
    #[error("Malformed document: {message}")]
    MalformedDocument { message: String },

    /// An additional property shares its name with a declared attribute
    #[error("Additional property '{name}' collides with a declared attribute")]
    FieldNameCollision { name: String },

    /// Get or update of an extension the resource does not carry
    #[error("Extension not found: {urn}")]
    ExtensionNotFound { urn: String },

    /// Add of an extension the resource already carries
    #[error("Extension already exists: {urn}")]
    ExtensionAlreadyExists { urn: String },

    /// Stored extension payload fails to decode for a reason other than a
    /// member's JSON type, e.g. a missing required member
    #[error("Invalid payload for extension {urn}: {source}")]
    InvalidExtension {
        urn: String,
        #[source]
        source: serde_json::Error,
    },

    /// JSON syntax and serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScimError {
    /// Create a type mismatch error
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl Display,
        actual: impl Display,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create a malformed document error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedDocument {
            message: message.into(),
        }
    }

    /// Create a field name collision error
    pub fn collision(name: impl Into<String>) -> Self {
        Self::FieldNameCollision { name: name.into() }
    }

    /// Create an extension not found error
    pub fn extension_not_found(urn: impl Into<String>) -> Self {
        Self::ExtensionNotFound { urn: urn.into() }
    }

    /// Create an extension already exists error
    pub fn extension_exists(urn: impl Into<String>) -> Self {
        Self::ExtensionAlreadyExists { urn: urn.into() }
    }
}

pub type ScimResult<T> = Result<T, ScimError>;
