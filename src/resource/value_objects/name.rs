//! Name value object for the SCIM User `name` attribute.

use crate::codec::strict::{ObjectDecoder, StrictDecode};
use crate::error::ScimResult;
use serde::Serialize;
use serde_json::Value;

/// Components of a user's real name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Name {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub honorific_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub honorific_suffix: Option<String>,
}

impl Name {
    /// Create a name from given and family name, deriving `formatted`.
    pub fn new(given_name: impl Into<String>, family_name: impl Into<String>) -> Self {
        let given_name = given_name.into();
        let family_name = family_name.into();
        Self {
            formatted: Some(format!("{} {}", given_name, family_name)),
            family_name: Some(family_name),
            given_name: Some(given_name),
            ..Self::default()
        }
    }
}

impl StrictDecode for Name {
    fn decode_strict(field: &str, value: Value) -> ScimResult<Self> {
        let mut decoder = ObjectDecoder::new(field, value)?;
        let name = Self {
            formatted: decoder.field("formatted")?,
            family_name: decoder.field("familyName")?,
            given_name: decoder.field("givenName")?,
            middle_name: decoder.field("middleName")?,
            honorific_prefix: decoder.field("honorificPrefix")?,
            honorific_suffix: decoder.field("honorificSuffix")?,
        };
        decoder.finish();
        Ok(name)
    }

    fn zero_value() -> Self {
        Self::default()
    }
}
