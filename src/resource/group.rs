//! SCIM core Group resource.

use crate::codec::{ObjectDecoder, ObjectEncoder};
use crate::error::ScimResult;
use crate::resource::value_objects::{GroupMember, Meta};
use crate::resource::{CommonAttributes, Resource};

/// Core Group schema URN.
pub const GROUP_SCHEMA: &str = "urn:ietf:params:scim:schemas:core:2.0:Group";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    pub common: CommonAttributes,
    pub schemas: Vec<String>,
    pub display_name: String,
    pub members: Vec<GroupMember>,
}

impl Group {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            common: CommonAttributes::new(id).with_meta(Meta::new(Self::RESOURCE_TYPE)),
            schemas: vec![GROUP_SCHEMA.to_string()],
            display_name: display_name.into(),
            members: Vec::new(),
        }
    }

    pub fn is_member(&self, id: &str) -> bool {
        self.members.iter().any(|member| member.value == id)
    }
}

impl Resource for Group {
    const RESOURCE_TYPE: &'static str = "Group";

    fn common(&self) -> &CommonAttributes {
        &self.common
    }

    fn common_mut(&mut self) -> &mut CommonAttributes {
        &mut self.common
    }

    fn decode_attributes(decoder: &mut ObjectDecoder) -> ScimResult<Self> {
        Ok(Self {
            common: CommonAttributes::decode_common(decoder)?,
            schemas: decoder.field("schemas")?,
            display_name: decoder.field("displayName")?,
            members: decoder.field("members")?,
        })
    }

    fn encode_attributes(&self, encoder: &mut ObjectEncoder) -> ScimResult<()> {
        self.common.encode_common(encoder)?;
        encoder.field("schemas", &self.schemas)?;
        encoder.field("displayName", &self.display_name)?;
        encoder.field("members", &self.members)
    }
}
