//! Attributes shared by every SCIM resource.

use crate::codec::{AdditionalProperties, ObjectDecoder, ObjectEncoder};
use crate::error::ScimResult;
use crate::resource::Resource;
use crate::resource::value_objects::Meta;

/// The common attribute set every resource embeds.
///
/// `additional_properties` holds every top-level member the concrete
/// resource does not declare: extension payloads keyed by schema URN and
/// arbitrary custom properties. Its keys must never shadow a declared
/// attribute name; encoding such a resource fails.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommonAttributes {
    pub id: String,
    pub external_id: Option<String>,
    pub meta: Meta,
    pub additional_properties: AdditionalProperties,
}

impl CommonAttributes {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = meta;
        self
    }

    /// Claim `id`, `externalId` and `meta` from a resource document.
    ///
    /// Concrete resources call this before claiming their own attributes.
    /// The bag is left empty; the codec fills it once every declared member
    /// has been claimed.
    pub fn decode_common(decoder: &mut ObjectDecoder) -> ScimResult<Self> {
        Ok(Self {
            id: decoder.field("id")?,
            external_id: decoder.field("externalId")?,
            meta: decoder.field("meta")?,
            additional_properties: AdditionalProperties::new(),
        })
    }

    /// Write `id`, `externalId` and `meta`. `meta` is written even when unset.
    pub fn encode_common(&self, encoder: &mut ObjectEncoder) -> ScimResult<()> {
        encoder.field("id", &self.id)?;
        encoder.optional_field("externalId", self.external_id.as_ref())?;
        encoder.field("meta", &self.meta)
    }
}

impl Resource for CommonAttributes {
    const RESOURCE_TYPE: &'static str = "Resource";

    fn common(&self) -> &CommonAttributes {
        self
    }

    fn common_mut(&mut self) -> &mut CommonAttributes {
        self
    }

    fn decode_attributes(decoder: &mut ObjectDecoder) -> ScimResult<Self> {
        Self::decode_common(decoder)
    }

    fn encode_attributes(&self, encoder: &mut ObjectEncoder) -> ScimResult<()> {
        self.encode_common(encoder)
    }
}
