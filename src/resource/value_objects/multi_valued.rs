//! Multi-valued attribute entries.
//!
//! SCIM represents emails, phone numbers and similar attributes as arrays of
//! small objects sharing the `value`/`display`/`type`/`primary` shape. Group
//! membership uses its own entry type because it carries a `$ref`.

use crate::codec::strict::{ObjectDecoder, StrictDecode};
use crate::error::ScimResult;
use serde::Serialize;
use serde_json::Value;

/// One entry of a multi-valued attribute such as `emails` or `phoneNumbers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MultiValuedAttribute {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,
}

impl MultiValuedAttribute {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_primary(mut self, primary: bool) -> Self {
        self.primary = Some(primary);
        self
    }

    pub fn is_primary(&self) -> bool {
        self.primary.unwrap_or(false)
    }
}

impl StrictDecode for MultiValuedAttribute {
    fn decode_strict(field: &str, value: Value) -> ScimResult<Self> {
        let mut decoder = ObjectDecoder::new(field, value)?;
        let entry = Self {
            value: decoder.field("value")?,
            display: decoder.field("display")?,
            kind: decoder.field("type")?,
            primary: decoder.field("primary")?,
        };
        decoder.finish();
        Ok(entry)
    }

    fn zero_value() -> Self {
        Self::default()
    }
}

/// Reference from a Group to one of its members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupMember {
    pub value: String,
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl GroupMember {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }
}

impl StrictDecode for GroupMember {
    fn decode_strict(field: &str, value: Value) -> ScimResult<Self> {
        let mut decoder = ObjectDecoder::new(field, value)?;
        let member = Self {
            value: decoder.field("value")?,
            reference: decoder.field("$ref")?,
            display: decoder.field("display")?,
            kind: decoder.field("type")?,
        };
        decoder.finish();
        Ok(member)
    }

    fn zero_value() -> Self {
        Self::default()
    }
}
