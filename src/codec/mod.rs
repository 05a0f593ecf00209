//! JSON codec for SCIM resources.
//!
//! - [`strict`] - type-checked decoding of declared attributes
//! - [`additional`] - flattening of the additional-properties bag
//! - [`timestamp`] - the fixed date-time wire profile

pub mod additional;
pub mod strict;
pub mod timestamp;

pub use additional::{
    AdditionalProperties, ObjectEncoder, from_slice, from_str, from_value, to_string, to_value,
    to_vec,
};
pub use strict::{JsonKind, ObjectDecoder, StrictDecode};
