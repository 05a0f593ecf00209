//! SCIM 2.0 resource model for Rust.
//!
//! Resources carry a fixed set of declared attributes plus an open-ended set
//! of schema extensions. On the wire each extension is a sibling top-level
//! member named by its schema URN; in memory it lives in the resource's
//! additional-properties bag next to any unknown vendor properties, and is
//! decoded into a typed value only on demand.
//!
//! # Core Components
//!
//! - [`Resource`] - Capability implemented by every resource type
//! - [`CommonAttributes`] - id, externalId, meta and the additional-properties bag
//! - [`Extension`] - Capability implemented by schema extensions
//! - [`codec`] - Strict decoding and flat encoding of resource documents
//!
//! # Quick Start
//!
//! ```rust
//! use scim_resource::{Resource, User};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let body = br#"{
//!         "id": "2819c223-7f76-453a-919d-413861904646",
//!         "userName": "bjensen@example.com",
//!         "urn:example:params:scim:schemas:extension:badge:2.0:User": { "level": "gold" },
//!         "favouriteColour": "teal"
//!     }"#;
//!
//!     let user: User = scim_resource::from_slice(body)?;
//!     assert_eq!(user.extension_urns().len(), 1);
//!
//!     let encoded = scim_resource::to_value(&user)?;
//!     assert_eq!(encoded["favouriteColour"], "teal");
//!     Ok(())
//! }
//! ```

pub mod codec;
pub mod error;
pub mod resource;

pub use codec::{
    AdditionalProperties, JsonKind, ObjectDecoder, ObjectEncoder, StrictDecode, from_slice,
    from_str, from_value, to_string, to_value, to_vec,
};
pub use error::{ScimError, ScimResult};
pub use resource::{
    CommonAttributes, EnterpriseUser, Extension, Group, GroupMember, Manager, Meta,
    MultiValuedAttribute, Name, NamespacePolicy, Resource, UrnPrefixPolicy, User,
};
