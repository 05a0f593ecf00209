//! Schema extensions stored in the additional-properties bag.
//!
//! A SCIM extension occupies its own top-level member of the resource,
//! named by the extension's schema URN. Extensions are unrelated types
//! unified only by the [`Extension`] capability: they report their URN, and
//! the registry operations below use it as the bag key.
//!
//! Payloads are kept as raw JSON in the bag and only decoded into a concrete
//! type when a caller asks for one. A resource can therefore carry
//! extensions nobody registered a type for, and still round-trip them.

use crate::codec::{AdditionalProperties, JsonKind};
use crate::error::{ScimError, ScimResult};
use log::trace;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_path_to_error::{Path, Segment};

/// A typed SCIM schema extension.
///
/// Payloads must be JSON objects. Decoding uses the type's serde
/// implementation, which rejects members of the wrong JSON type instead of
/// coercing them. Mark the type
/// `#[serde(default)]` to let absent members decode to their zero value.
///
/// ```rust
/// use scim_resource::Extension;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Default, Serialize, Deserialize)]
/// #[serde(default)]
/// struct Badge {
///     level: String,
/// }
///
/// impl Extension for Badge {
///     fn urn(&self) -> &str {
///         "urn:example:params:scim:schemas:extension:badge:2.0:User"
///     }
/// }
/// ```
pub trait Extension: Serialize + DeserializeOwned {
    /// Schema URN naming this extension and its top-level member.
    fn urn(&self) -> &str;
}

/// Decides which bag keys name extensions.
///
/// The protocol does not forbid colons or URN-looking names in ordinary
/// properties, so this is policy rather than grammar.
pub trait NamespacePolicy {
    fn is_namespace(&self, key: &str) -> bool;
}

impl<F> NamespacePolicy for F
where
    F: Fn(&str) -> bool,
{
    fn is_namespace(&self, key: &str) -> bool {
        self(key)
    }
}

/// Treats keys with a configured scheme prefix as extension URNs.
///
/// The default recognises `urn:`. Matching ignores ASCII case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrnPrefixPolicy {
    prefixes: Vec<String>,
}

impl UrnPrefixPolicy {
    /// A policy that recognises no prefixes until some are added.
    pub fn empty() -> Self {
        Self {
            prefixes: Vec::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefixes.push(prefix.into());
        self
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

impl Default for UrnPrefixPolicy {
    fn default() -> Self {
        Self::empty().with_prefix("urn:")
    }
}

impl NamespacePolicy for UrnPrefixPolicy {
    fn is_namespace(&self, key: &str) -> bool {
        self.prefixes.iter().any(|prefix| {
            key.get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        })
    }
}

impl AdditionalProperties {
    /// Attach an extension that is not present yet.
    ///
    /// Never overwrites: fails with [`ScimError::ExtensionAlreadyExists`] when
    /// the URN is already a key of the bag.
    pub fn add_extension<E: Extension>(&mut self, extension: &E) -> ScimResult<()> {
        let urn = extension.urn();
        if self.contains_key(urn) {
            return Err(ScimError::extension_exists(urn));
        }
        let payload = serde_json::to_value(extension)?;
        trace!("Adding extension {}", urn);
        self.insert(urn, payload);
        Ok(())
    }

    /// Decode the stored payload for `extension`'s URN into `extension`.
    ///
    /// On success `extension` is replaced wholesale by the decoded value:
    /// members absent from the payload take whatever the type's serde
    /// implementation gives them (their `Default` under `#[serde(default)]`),
    /// not the values `extension` held before. On failure `extension` is
    /// left untouched.
    ///
    /// A member of the wrong JSON type fails with [`ScimError::TypeMismatch`]
    /// whose field is `<urn>.<member path>`. Failures that are not about a
    /// member's type, such as a missing required member, are reported as
    /// [`ScimError::InvalidExtension`].
    ///
    /// The decoded value is an independent copy; the bag keeps its raw
    /// payload.
    pub fn get_extension<E: Extension>(&self, extension: &mut E) -> ScimResult<()> {
        let urn = extension.urn().to_string();
        let payload = self
            .get(&urn)
            .ok_or_else(|| ScimError::extension_not_found(&urn))?;
        // serde-derived structs also accept arrays positionally
        if !payload.is_object() {
            return Err(ScimError::type_mismatch(
                urn,
                JsonKind::Object,
                JsonKind::of(payload),
            ));
        }
        trace!("Decoding extension {}", urn);
        *extension = decode_payload(urn, payload)?;
        Ok(())
    }

    /// Decode an extension into a fresh value of type `E`.
    pub fn extension<E: Extension + Default>(&self) -> ScimResult<E> {
        let mut extension = E::default();
        self.get_extension(&mut extension)?;
        Ok(extension)
    }

    /// Whether the bag carries a payload under `extension`'s URN.
    pub fn has_extension<E: Extension>(&self, extension: &E) -> bool {
        self.contains_key(extension.urn())
    }

    /// Replace the payload of an extension that is already present.
    ///
    /// Never creates: fails with [`ScimError::ExtensionNotFound`] when the
    /// URN is absent.
    pub fn update_extension<E: Extension>(&mut self, extension: &E) -> ScimResult<()> {
        let urn = extension.urn();
        if !self.contains_key(urn) {
            return Err(ScimError::extension_not_found(urn));
        }
        let payload = serde_json::to_value(extension)?;
        trace!("Updating extension {}", urn);
        self.insert(urn, payload);
        Ok(())
    }

    /// Detach an extension. Returns whether it was present.
    pub fn remove_extension<E: Extension>(&mut self, extension: &E) -> bool {
        let removed = self.remove(extension.urn()).is_some();
        trace!("Removing extension {} (present: {})", extension.urn(), removed);
        removed
    }

    /// Bag keys that name extensions under the default `urn:` policy.
    ///
    /// Order is unspecified.
    pub fn extension_urns(&self) -> Vec<String> {
        self.extension_urns_with(&UrnPrefixPolicy::default())
    }

    /// Bag keys that name extensions under `policy`.
    pub fn extension_urns_with<P>(&self, policy: &P) -> Vec<String>
    where
        P: NamespacePolicy + ?Sized,
    {
        self.keys()
            .filter(|key| policy.is_namespace(key))
            .map(str::to_string)
            .collect()
    }
}

fn decode_payload<E: DeserializeOwned>(urn: String, payload: &Value) -> ScimResult<E> {
    serde_path_to_error::deserialize(payload).map_err(|error| {
        let member = member_at(payload, error.path());
        let source = error.into_inner();
        match (member, mismatched_kind(&source)) {
            (Some((path, member)), Some(expected)) => {
                let field = format!("{}.{}", urn, path);
                ScimError::type_mismatch(field, expected, JsonKind::of(member))
            }
            _ => ScimError::InvalidExtension { urn, source },
        }
    })
}

/// The member a deserialization error points at, with its dotted path.
///
/// `None` for the payload root or when the path cannot be followed.
fn member_at<'a>(payload: &'a Value, path: &Path) -> Option<(String, &'a Value)> {
    let mut field = String::new();
    let mut value = payload;
    for segment in path.iter() {
        value = match segment {
            Segment::Map { key } => {
                if !field.is_empty() {
                    field.push('.');
                }
                field.push_str(key);
                value.get(key.as_str())?
            }
            Segment::Seq { index } => {
                field.push_str(&format!("[{}]", index));
                value.get(*index)?
            }
            _ => return None,
        };
    }
    (!field.is_empty()).then_some((field, value))
}

/// Expected kind of an `invalid type` error, in the strict decoder's terms.
///
/// `None` for every other kind of failure.
fn mismatched_kind(error: &serde_json::Error) -> Option<String> {
    let message = error.to_string();
    let (_, expected) = message
        .strip_prefix("invalid type: ")?
        .rsplit_once(", expected ")?;
    let expected = expected
        .strip_prefix("an ")
        .or_else(|| expected.strip_prefix("a "))
        .unwrap_or(expected);

    let kind = if expected.starts_with("struct") || expected.starts_with("map") {
        JsonKind::Object.as_str()
    } else if expected.starts_with("sequence") || expected.starts_with("tuple") {
        JsonKind::Array.as_str()
    } else if expected.starts_with("bool") {
        JsonKind::Boolean.as_str()
    } else if expected.contains("string") || expected == "character" {
        JsonKind::String.as_str()
    } else if matches!(expected, "f32" | "f64") {
        JsonKind::Number.as_str()
    } else if is_integer_type(expected) {
        "integer"
    } else if expected == "unit" {
        JsonKind::Null.as_str()
    } else {
        expected
    };
    Some(kind.to_string())
}

fn is_integer_type(name: &str) -> bool {
    matches!(
        name,
        "i8" | "i16" | "i32" | "i64" | "i128" | "u8" | "u16" | "u32" | "u64" | "u128"
    )
}
