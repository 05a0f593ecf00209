//! SCIM resource model.
//!
//! Every resource embeds [`CommonAttributes`] (id, externalId, meta and the
//! additional-properties bag) and declares its own attributes on top. The
//! [`Resource`] trait ties a concrete type to the codec and exposes the
//! extension registry on the resource itself.
//!
//! # Key Components
//!
//! * [`Resource`] - capability implemented by every resource type
//! * [`CommonAttributes`] - the shared attribute set
//! * [`Extension`] - capability implemented by schema extensions
//! * [`User`], [`Group`] - core resource types
//! * [`EnterpriseUser`] - the enterprise User extension
//! * [`value_objects`] - complex attributes (Meta, Name, ...)

pub mod common;
pub mod enterprise;
pub mod extension;
pub mod group;
pub mod user;
pub mod value_objects;

pub use common::CommonAttributes;
pub use enterprise::{EnterpriseUser, Manager};
pub use extension::{Extension, NamespacePolicy, UrnPrefixPolicy};
pub use group::Group;
pub use user::User;
pub use value_objects::{GroupMember, Meta, MultiValuedAttribute, Name};

use crate::codec::{ObjectDecoder, ObjectEncoder};
use crate::error::ScimResult;

/// A SCIM resource type.
///
/// Implementors claim their declared attributes from an [`ObjectDecoder`]
/// and write them to an [`ObjectEncoder`]; the codec takes care of the
/// additional-properties bag. Implementations should start with
/// [`CommonAttributes::decode_common`] / [`CommonAttributes::encode_common`].
///
/// The provided methods forward to the extension registry of the bag.
pub trait Resource: Sized {
    /// Resource type name, as found in `meta.resourceType`.
    const RESOURCE_TYPE: &'static str;

    fn common(&self) -> &CommonAttributes;

    fn common_mut(&mut self) -> &mut CommonAttributes;

    /// Claim every declared attribute from the document.
    fn decode_attributes(decoder: &mut ObjectDecoder) -> ScimResult<Self>;

    /// Write every declared attribute.
    fn encode_attributes(&self, encoder: &mut ObjectEncoder) -> ScimResult<()>;

    fn add_extension<E: Extension>(&mut self, extension: &E) -> ScimResult<()> {
        self.common_mut().additional_properties.add_extension(extension)
    }

    fn get_extension<E: Extension>(&self, extension: &mut E) -> ScimResult<()> {
        self.common().additional_properties.get_extension(extension)
    }

    fn extension<E: Extension + Default>(&self) -> ScimResult<E> {
        self.common().additional_properties.extension()
    }

    fn has_extension<E: Extension>(&self, extension: &E) -> bool {
        self.common().additional_properties.has_extension(extension)
    }

    fn update_extension<E: Extension>(&mut self, extension: &E) -> ScimResult<()> {
        self.common_mut()
            .additional_properties
            .update_extension(extension)
    }

    fn remove_extension<E: Extension>(&mut self, extension: &E) -> bool {
        self.common_mut()
            .additional_properties
            .remove_extension(extension)
    }

    fn extension_urns(&self) -> Vec<String> {
        self.common().additional_properties.extension_urns()
    }

    fn extension_urns_with<P: NamespacePolicy + ?Sized>(&self, policy: &P) -> Vec<String> {
        self.common()
            .additional_properties
            .extension_urns_with(policy)
    }
}
