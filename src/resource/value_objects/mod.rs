//! Value objects for SCIM resource attributes.
//!
//! Complex attributes shared by the shipped resource types. Each one
//! serializes with serde and decodes through [`StrictDecode`], so nested
//! members are type-checked with their full path.
//!
//! [`StrictDecode`]: crate::codec::StrictDecode

mod meta;
mod multi_valued;
mod name;

pub use meta::Meta;
pub use multi_valued::{GroupMember, MultiValuedAttribute};
pub use name::Name;
