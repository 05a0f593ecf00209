//! Strict decoding of declared attributes.
//!
//! Generic JSON decoding happily coerces or zeroes values whose JSON type
//! does not line up with the target. Declared SCIM attributes are decoded
//! here instead: each member's [`JsonKind`] is compared against the kind the
//! target type declares and a mismatch fails with
//! [`ScimError::TypeMismatch`] naming the member path.
//!
//! Absent members are not an error; they decode to the type's zero value.

use crate::codec::timestamp;
use crate::error::{ScimError, ScimResult};
use chrono::{DateTime, Utc};
use log::debug;
use serde_json::{Map, Value};
use std::fmt;

/// The JSON type of a wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    /// Classify a JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Boolean,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Boolean => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoding of a declared attribute with JSON type checking.
///
/// Implementations must reject, never coerce, a value of the wrong kind.
/// `field` is the dotted path of the member being decoded and is what
/// errors report.
pub trait StrictDecode: Sized {
    /// Decode `value` found at `field`.
    fn decode_strict(field: &str, value: Value) -> ScimResult<Self>;

    /// The value an absent member decodes to.
    fn zero_value() -> Self;
}

fn mismatch(field: &str, expected: impl fmt::Display, value: &Value) -> ScimError {
    ScimError::type_mismatch(field, expected, JsonKind::of(value))
}

impl StrictDecode for String {
    fn decode_strict(field: &str, value: Value) -> ScimResult<Self> {
        match value {
            Value::String(text) => Ok(text),
            other => Err(mismatch(field, JsonKind::String, &other)),
        }
    }

    fn zero_value() -> Self {
        String::new()
    }
}

impl StrictDecode for bool {
    fn decode_strict(field: &str, value: Value) -> ScimResult<Self> {
        match value {
            Value::Bool(flag) => Ok(flag),
            other => Err(mismatch(field, JsonKind::Boolean, &other)),
        }
    }

    fn zero_value() -> Self {
        false
    }
}

impl StrictDecode for i64 {
    fn decode_strict(field: &str, value: Value) -> ScimResult<Self> {
        match &value {
            Value::Number(number) => number.as_i64().ok_or_else(|| {
                let actual = if number.is_f64() {
                    "decimal"
                } else {
                    "out-of-range integer"
                };
                ScimError::type_mismatch(field, "integer", actual)
            }),
            other => Err(mismatch(field, "integer", other)),
        }
    }

    fn zero_value() -> Self {
        0
    }
}

impl StrictDecode for f64 {
    fn decode_strict(field: &str, value: Value) -> ScimResult<Self> {
        match &value {
            Value::Number(number) => number.as_f64().ok_or_else(|| {
                ScimError::type_mismatch(field, JsonKind::Number, "out-of-range number")
            }),
            other => Err(mismatch(field, JsonKind::Number, other)),
        }
    }

    fn zero_value() -> Self {
        0.0
    }
}

impl StrictDecode for DateTime<Utc> {
    fn decode_strict(field: &str, value: Value) -> ScimResult<Self> {
        match &value {
            Value::String(text) => timestamp::parse(text).ok_or_else(|| {
                ScimError::type_mismatch(field, "date-time", "non-date-time string")
            }),
            other => Err(mismatch(field, "date-time", other)),
        }
    }

    fn zero_value() -> Self {
        timestamp::zero()
    }
}

/// Untyped members accept any JSON kind.
impl StrictDecode for Value {
    fn decode_strict(_field: &str, value: Value) -> ScimResult<Self> {
        Ok(value)
    }

    fn zero_value() -> Self {
        Value::Null
    }
}

/// JSON `null` is the only way to say "absent" explicitly.
impl<T: StrictDecode> StrictDecode for Option<T> {
    fn decode_strict(field: &str, value: Value) -> ScimResult<Self> {
        match value {
            Value::Null => Ok(None),
            other => T::decode_strict(field, other).map(Some),
        }
    }

    fn zero_value() -> Self {
        None
    }
}

impl<T: StrictDecode> StrictDecode for Vec<T> {
    fn decode_strict(field: &str, value: Value) -> ScimResult<Self> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| T::decode_strict(&format!("{}[{}]", field, index), item))
                .collect(),
            other => Err(mismatch(field, JsonKind::Array, &other)),
        }
    }

    fn zero_value() -> Self {
        Vec::new()
    }
}

/// Join a parent path and a member name into a dotted path.
pub(crate) fn member_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}

/// Claims declared members out of a JSON object one at a time.
///
/// Each [`field`](ObjectDecoder::field) call removes the member from the
/// object and decodes it strictly. Whatever nothing claimed is handed back
/// by [`into_remaining`](ObjectDecoder::into_remaining), which is how the
/// additional-properties bag of a resource is filled.
#[derive(Debug)]
pub struct ObjectDecoder {
    path: String,
    members: Map<String, Value>,
}

impl ObjectDecoder {
    /// Start decoding a nested object found at `path`.
    pub fn new(path: &str, value: Value) -> ScimResult<Self> {
        match value {
            Value::Object(members) => Ok(Self {
                path: path.to_string(),
                members,
            }),
            other => Err(mismatch(path, JsonKind::Object, &other)),
        }
    }

    /// Start decoding a top-level resource document.
    pub fn document(value: Value) -> ScimResult<Self> {
        match value {
            Value::Object(members) => Ok(Self {
                path: String::new(),
                members,
            }),
            other => Err(ScimError::malformed(format!(
                "resource must be a JSON object, got {}",
                JsonKind::of(&other)
            ))),
        }
    }

    /// Path of the object being decoded; empty for a top-level document.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Claim and strictly decode the member `name`.
    pub fn field<T: StrictDecode>(&mut self, name: &str) -> ScimResult<T> {
        match self.members.remove(name) {
            Some(value) => T::decode_strict(&member_path(&self.path, name), value),
            None => Ok(T::zero_value()),
        }
    }

    /// Whether a member is still unclaimed.
    pub fn contains(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    /// Members nothing has claimed yet.
    pub fn into_remaining(self) -> Map<String, Value> {
        self.members
    }

    /// Finish a nested object. Unclaimed members are dropped.
    pub fn finish(self) {
        if !self.members.is_empty() {
            debug!(
                "Ignoring {} unknown member(s) of '{}': {:?}",
                self.members.len(),
                self.path,
                self.members.keys().collect::<Vec<_>>()
            );
        }
    }
}
