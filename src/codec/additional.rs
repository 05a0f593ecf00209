//! Additional-properties codec.
//!
//! A SCIM resource on the wire is one flat JSON object. Some members belong
//! to the resource's declared attributes; every other member (extension
//! payloads keyed by schema URN, vendor properties) is kept verbatim in an
//! [`AdditionalProperties`] bag so it survives a decode/encode round trip.
//!
//! Decoding parses the document into a generic member map, lets the resource
//! claim its declared members through an [`ObjectDecoder`], and moves the rest
//! into the bag. Encoding writes the declared members through an
//! [`ObjectEncoder`] and then merges the bag into the same object, failing on
//! any name collision.

use crate::codec::strict::ObjectDecoder;
use crate::error::{ScimError, ScimResult};
use crate::resource::Resource;
use log::debug;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Top-level members not claimed by a resource's declared attributes.
///
/// Values are raw JSON fragments. Numbers keep their literal text, so big
/// integers and long decimals re-encode exactly as they arrived. Extension
/// payloads stay undecoded until a caller asks for them with a concrete type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdditionalProperties(Map<String, Value>);

impl AdditionalProperties {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Insert a raw value, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for AdditionalProperties {
    fn from(members: Map<String, Value>) -> Self {
        Self(members)
    }
}

impl FromIterator<(String, Value)> for AdditionalProperties {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Builds the flat JSON object of a resource.
///
/// Every name passed to [`field`](ObjectEncoder::field) or
/// [`optional_field`](ObjectEncoder::optional_field) is recorded as declared,
/// whether or not a value was written, so the bag can never shadow it.
#[derive(Debug, Default)]
pub struct ObjectEncoder {
    members: Map<String, Value>,
    declared: HashSet<String>,
}

impl ObjectEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a declared member. Zero values are written too.
    pub fn field<T: Serialize + ?Sized>(&mut self, name: &str, value: &T) -> ScimResult<()> {
        self.declared.insert(name.to_string());
        self.members
            .insert(name.to_string(), serde_json::to_value(value)?);
        Ok(())
    }

    /// Write a declared member that is omitted when unset.
    pub fn optional_field<T: Serialize>(
        &mut self,
        name: &str,
        value: Option<&T>,
    ) -> ScimResult<()> {
        self.declared.insert(name.to_string());
        if let Some(value) = value {
            self.members
                .insert(name.to_string(), serde_json::to_value(value)?);
        }
        Ok(())
    }

    /// Merge the bag into the object as sibling members.
    pub fn flatten(&mut self, properties: &AdditionalProperties) -> ScimResult<()> {
        for (name, value) in properties.iter() {
            if self.declared.contains(name) {
                return Err(ScimError::collision(name));
            }
            self.members.insert(name.to_string(), value.clone());
        }
        Ok(())
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.members)
    }
}

/// Decode a resource from an already parsed JSON value.
pub fn from_value<R: Resource>(value: Value) -> ScimResult<R> {
    let mut decoder = ObjectDecoder::document(value)?;
    let mut resource = R::decode_attributes(&mut decoder)?;
    let remaining = decoder.into_remaining();

    debug!(
        "Decoded {} resource '{}' with {} additional properties",
        R::RESOURCE_TYPE,
        resource.common().id,
        remaining.len()
    );

    resource.common_mut().additional_properties = AdditionalProperties::from(remaining);
    Ok(resource)
}

/// Decode a resource from a JSON byte buffer.
///
/// # Example
///
/// ```rust
/// use scim_resource::CommonAttributes;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let body = br#"{"id": "2819c223", "urn:fake.extension": {"name": "Fake"}}"#;
///     let resource: CommonAttributes = scim_resource::from_slice(body)?;
///
///     assert_eq!(resource.id, "2819c223");
///     assert!(resource.additional_properties.contains_key("urn:fake.extension"));
///     Ok(())
/// }
/// ```
pub fn from_slice<R: Resource>(bytes: &[u8]) -> ScimResult<R> {
    let value: Value = serde_json::from_slice(bytes)?;
    from_value(value)
}

/// Decode a resource from a JSON string.
pub fn from_str<R: Resource>(text: &str) -> ScimResult<R> {
    let value: Value = serde_json::from_str(text)?;
    from_value(value)
}

/// Encode a resource into one flat JSON object.
pub fn to_value<R: Resource>(resource: &R) -> ScimResult<Value> {
    let mut encoder = ObjectEncoder::new();
    resource.encode_attributes(&mut encoder)?;
    encoder.flatten(&resource.common().additional_properties)?;

    debug!(
        "Encoded {} resource '{}' with {} additional properties",
        R::RESOURCE_TYPE,
        resource.common().id,
        resource.common().additional_properties.len()
    );

    Ok(encoder.into_value())
}

/// Encode a resource into JSON bytes.
pub fn to_vec<R: Resource>(resource: &R) -> ScimResult<Vec<u8>> {
    Ok(serde_json::to_vec(&to_value(resource)?)?)
}

/// Encode a resource into a JSON string.
pub fn to_string<R: Resource>(resource: &R) -> ScimResult<String> {
    Ok(serde_json::to_string(&to_value(resource)?)?)
}
