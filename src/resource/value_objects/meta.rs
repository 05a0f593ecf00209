//! Meta value object for SCIM resource metadata.
//!
//! Meta carries the common metadata block of every SCIM resource: resource
//! type, creation and modification timestamps, an opaque version tag and the
//! resource location. On the wire the block is always emitted in full, with
//! zero-value timestamps and empty strings standing in for unset members.

use crate::codec::strict::{ObjectDecoder, StrictDecode};
use crate::codec::timestamp;
use crate::error::ScimResult;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// SCIM `meta` attribute.
///
/// ## Examples
///
/// ```rust
/// use scim_resource::Meta;
///
/// let meta = Meta::new("User").with_location("https://example.com/v2/Users/2819c223");
/// assert_eq!(meta.resource_type, "User");
/// assert_eq!(meta.created, meta.last_modified);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meta {
    #[serde(rename = "resourceType")]
    pub resource_type: String,
    #[serde(serialize_with = "timestamp::serialize")]
    pub created: DateTime<Utc>,
    #[serde(rename = "lastModified", serialize_with = "timestamp::serialize")]
    pub last_modified: DateTime<Utc>,
    /// Opaque version tag, usually a weak ETag such as `W/3694e05e9dff590`.
    pub version: String,
    pub location: String,
}

impl Meta {
    /// Create metadata for a freshly created resource.
    ///
    /// Both timestamps are set to the current time in whole seconds.
    pub fn new(resource_type: impl Into<String>) -> Self {
        let now = timestamp::now();
        Self {
            resource_type: resource_type.into(),
            created: now,
            last_modified: now,
            version: String::new(),
            location: String::new(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Refresh the last modified timestamp.
    pub fn touch(&mut self) {
        self.last_modified = timestamp::now();
    }
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            resource_type: String::new(),
            created: timestamp::zero(),
            last_modified: timestamp::zero(),
            version: String::new(),
            location: String::new(),
        }
    }
}

impl StrictDecode for Meta {
    fn decode_strict(field: &str, value: Value) -> ScimResult<Self> {
        let mut decoder = ObjectDecoder::new(field, value)?;
        let meta = Self {
            resource_type: decoder.field("resourceType")?,
            created: decoder.field("created")?,
            last_modified: decoder.field("lastModified")?,
            version: decoder.field("version")?,
            location: decoder.field("location")?,
        };
        decoder.finish();
        Ok(meta)
    }

    fn zero_value() -> Self {
        Self::default()
    }
}

impl fmt::Display for Meta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Meta(resourceType={}, created={}, lastModified={})",
            self.resource_type,
            timestamp::format(&self.created),
            timestamp::format(&self.last_modified)
        )
    }
}
