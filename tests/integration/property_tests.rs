//! Property-based checks of the codec and the extension URN filter.

use chrono::DateTime;
use proptest::prelude::*;
use scim_resource::{AdditionalProperties, CommonAttributes, Meta};
use serde_json::Value;
use std::collections::BTreeSet;

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<f64>()
            .prop_filter("JSON has no NaN or infinity", |number| number.is_finite())
            .prop_map(Value::from),
        number_literal_strategy().prop_map(|text| serde_json::from_str::<Value>(&text).unwrap()),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::from),
    ]
}

/// Number literals whose text changes if held as i64, u64 or f64.
fn number_literal_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "-?[1-9][0-9]{20,32}",
        "-?0\\.[0-9]{17,24}[1-9]",
        "[1-9]\\.[0-9]{1,20}e[+-]?[1-9][0-9]?",
    ]
}

fn json_strategy() -> impl Strategy<Value = Value> {
    scalar_strategy().prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|members| Value::Object(members.into_iter().collect())),
        ]
    })
}

/// Extension URNs; never collide with custom property names.
fn urn_strategy() -> impl Strategy<Value = String> {
    "urn:[a-z]{1,6}(:[a-z0-9.]{1,8}){0,3}"
}

/// Plain custom property names; the leading `x` keeps them off declared names.
fn custom_key_strategy() -> impl Strategy<Value = String> {
    "x[a-zA-Z0-9]{0,8}"
}

fn meta_strategy() -> impl Strategy<Value = Meta> {
    (
        "[A-Z][a-z]{0,8}",
        0i64..4_000_000_000,
        0i64..4_000_000_000,
        "(W/[0-9a-f]{6})?",
    )
        .prop_map(|(resource_type, created, modified, version)| Meta {
            resource_type,
            created: DateTime::from_timestamp(created, 0).unwrap(),
            last_modified: DateTime::from_timestamp(modified, 0).unwrap(),
            version,
            location: String::new(),
        })
}

prop_compose! {
    fn resource_strategy()
        (id in "[0-9a-f-]{0,36}",
         external_id in proptest::option::of("[0-9a-f]{1,12}"),
         meta in meta_strategy(),
         extensions in prop::collection::btree_map(urn_strategy(), json_strategy(), 0..4),
         custom in prop::collection::btree_map(custom_key_strategy(), json_strategy(), 0..4))
        -> CommonAttributes {
        let additional_properties: AdditionalProperties =
            extensions.into_iter().chain(custom).collect();
        CommonAttributes {
            id,
            external_id,
            meta,
            additional_properties,
        }
    }
}

proptest! {
    #[test]
    fn encode_then_decode_is_identity(resource in resource_strategy()) {
        let encoded = scim_resource::to_vec(&resource).unwrap();
        let decoded: CommonAttributes = scim_resource::from_slice(&encoded).unwrap();
        prop_assert_eq!(&decoded, &resource);

        let again: CommonAttributes =
            scim_resource::from_slice(&scim_resource::to_vec(&decoded).unwrap()).unwrap();
        prop_assert_eq!(again, decoded);
    }

    #[test]
    fn number_literals_survive_as_written(
        key in custom_key_strategy(),
        literal in number_literal_strategy(),
        nested in any::<bool>(),
    ) {
        let member = if nested {
            format!("{{\"inner\":[{}]}}", literal)
        } else {
            literal.clone()
        };
        let document = format!("{{\"id\":\"1\",\"{}\":{}}}", key, member);

        let resource: CommonAttributes = scim_resource::from_str(&document).unwrap();
        let encoded = scim_resource::to_string(&resource).unwrap();
        let expected = format!("\"{}\":{}", key, member);
        prop_assert!(encoded.contains(&expected), "{} not in {}", expected, encoded);
    }

    #[test]
    fn extension_urns_are_exactly_the_urn_keys(
        extensions in prop::collection::btree_set(urn_strategy(), 0..6),
        custom in prop::collection::btree_set(custom_key_strategy(), 0..6),
        reverse in any::<bool>(),
    ) {
        let mut keys: Vec<String> = extensions.iter().chain(custom.iter()).cloned().collect();
        if reverse {
            keys.reverse();
        }

        let mut bag = AdditionalProperties::new();
        for key in keys {
            bag.insert(key, Value::Object(Default::default()));
        }

        let urns: BTreeSet<String> = bag.extension_urns().into_iter().collect();
        prop_assert_eq!(urns, extensions);
    }
}
