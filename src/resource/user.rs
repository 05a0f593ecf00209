//! SCIM core User resource.

use crate::codec::{ObjectDecoder, ObjectEncoder};
use crate::error::ScimResult;
use crate::resource::value_objects::{Meta, MultiValuedAttribute, Name};
use crate::resource::{CommonAttributes, Resource};

/// Core User schema URN.
pub const USER_SCHEMA: &str = "urn:ietf:params:scim:schemas:core:2.0:User";

/// A SCIM User.
///
/// ## Examples
///
/// ```rust
/// use scim_resource::{EnterpriseUser, Resource, User};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut user = User::new("2819c223", "bjensen@example.com");
///     user.add_extension(&EnterpriseUser {
///         employee_number: "701984".to_string(),
///         ..EnterpriseUser::default()
///     })?;
///
///     let body = scim_resource::to_string(&user)?;
///     let decoded: User = scim_resource::from_str(&body)?;
///     let enterprise: EnterpriseUser = decoded.extension()?;
///     assert_eq!(enterprise.employee_number, "701984");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    pub common: CommonAttributes,
    pub schemas: Vec<String>,
    pub user_name: String,
    pub name: Option<Name>,
    pub display_name: Option<String>,
    pub nick_name: Option<String>,
    pub profile_url: Option<String>,
    pub title: Option<String>,
    pub user_type: Option<String>,
    pub preferred_language: Option<String>,
    pub locale: Option<String>,
    pub timezone: Option<String>,
    pub active: Option<bool>,
    pub emails: Vec<MultiValuedAttribute>,
    pub phone_numbers: Vec<MultiValuedAttribute>,
}

impl User {
    /// Create a User carrying the core schema and fresh metadata.
    pub fn new(id: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            common: CommonAttributes::new(id).with_meta(Meta::new(Self::RESOURCE_TYPE)),
            schemas: vec![USER_SCHEMA.to_string()],
            user_name: user_name.into(),
            ..Self::default()
        }
    }

    /// The primary email, falling back to the first one.
    pub fn primary_email(&self) -> Option<&str> {
        self.emails
            .iter()
            .find(|email| email.is_primary())
            .or_else(|| self.emails.first())
            .map(|email| email.value.as_str())
    }
}

impl Resource for User {
    const RESOURCE_TYPE: &'static str = "User";

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
            user_name: decoder.field("userName")?,
            name: decoder.field("name")?,
            display_name: decoder.field("displayName")?,
            nick_name: decoder.field("nickName")?,
            profile_url: decoder.field("profileUrl")?,
            title: decoder.field("title")?,
            user_type: decoder.field("userType")?,
            preferred_language: decoder.field("preferredLanguage")?,
            locale: decoder.field("locale")?,
            timezone: decoder.field("timezone")?,
            active: decoder.field("active")?,
            emails: decoder.field("emails")?,
            phone_numbers: decoder.field("phoneNumbers")?,
        })
    }

    fn encode_attributes(&self, encoder: &mut ObjectEncoder) -> ScimResult<()> {
        self.common.encode_common(encoder)?;
        encoder.field("schemas", &self.schemas)?;
        encoder.field("userName", &self.user_name)?;
        encoder.optional_field("name", self.name.as_ref())?;
        encoder.optional_field("displayName", self.display_name.as_ref())?;
        encoder.optional_field("nickName", self.nick_name.as_ref())?;
        encoder.optional_field("profileUrl", self.profile_url.as_ref())?;
        encoder.optional_field("title", self.title.as_ref())?;
        encoder.optional_field("userType", self.user_type.as_ref())?;
        encoder.optional_field("preferredLanguage", self.preferred_language.as_ref())?;
        encoder.optional_field("locale", self.locale.as_ref())?;
        encoder.optional_field("timezone", self.timezone.as_ref())?;
        encoder.optional_field("active", self.active.as_ref())?;
        encoder.field("emails", &self.emails)?;
        encoder.field("phoneNumbers", &self.phone_numbers)
    }
}
