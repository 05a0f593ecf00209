//! Extension registry operations on decoded resources.

use crate::common::fixtures::{self, FakeExtension, WorthlessExtension};
use crate::common::init_logging;
use scim_resource::resource::enterprise::ENTERPRISE_USER_SCHEMA;
use scim_resource::{CommonAttributes, EnterpriseUser, Manager, Resource, ScimError, User};
use serde_json::json;

fn resource_with_additional_properties() -> CommonAttributes {
    scim_resource::from_str(fixtures::RESOURCE_WITH_ADDITIONAL_PROPERTIES_JSON).unwrap()
}

#[test]
fn test_add_then_get_yields_added_value() {
    init_logging();
    let mut user = User::new("2819c223", "bjensen@example.com");
    let enterprise = EnterpriseUser {
        employee_number: "701984".to_string(),
        cost_center: "4130".to_string(),
        manager: Some(Manager {
            value: "26118915-6090-4610-87e4-49d8ca9f808d".to_string(),
            ..Manager::default()
        }),
        ..EnterpriseUser::default()
    };

    user.add_extension(&enterprise).unwrap();
    assert!(user.has_extension(&enterprise));

    let mut fetched = EnterpriseUser::default();
    user.get_extension(&mut fetched).unwrap();
    assert_eq!(fetched, enterprise);

    let second = user.add_extension(&EnterpriseUser::default());
    match second {
        Err(ScimError::ExtensionAlreadyExists { urn }) => assert_eq!(urn, ENTERPRISE_USER_SCHEMA),
        other => panic!("Expected ExtensionAlreadyExists error, got: {:?}", other),
    }
    assert_eq!(user.extension::<EnterpriseUser>().unwrap(), enterprise);
}

#[test]
fn test_extension_survives_the_wire() {
    init_logging();
    let mut user = User::new("2819c223", "bjensen@example.com");
    user.add_extension(&EnterpriseUser {
        department: "Tour Operations".to_string(),
        ..EnterpriseUser::default()
    })
    .unwrap();

    let encoded = scim_resource::to_value(&user).unwrap();
    assert_eq!(encoded[ENTERPRISE_USER_SCHEMA]["department"], "Tour Operations");

    let decoded: User = scim_resource::from_value(encoded).unwrap();
    let enterprise: EnterpriseUser = decoded.extension().unwrap();
    assert_eq!(enterprise.department, "Tour Operations");
}

#[test]
fn test_get_extension_from_decoded_document() {
    init_logging();
    let resource = resource_with_additional_properties();
    let mut fake = FakeExtension::default();
    resource.get_extension(&mut fake).unwrap();
    assert_eq!(fake.name, "Fake Extension");
}

#[test]
fn test_decoded_copy_is_independent() {
    init_logging();
    let resource = resource_with_additional_properties();
    let mut fake: FakeExtension = resource.extension().unwrap();
    fake.name.push_str(" (edited)");

    assert_eq!(
        resource.additional_properties.get("urn:fake.extension"),
        Some(&json!({ "name": "Fake Extension" }))
    );
}

#[test]
fn test_update_requires_existing_extension() {
    init_logging();
    let mut resource = resource_with_additional_properties();

    let result = resource.update_extension(&WorthlessExtension {});
    match result {
        Err(ScimError::ExtensionNotFound { urn }) => assert_eq!(urn, "urn:worthless.extension"),
        other => panic!("Expected ExtensionNotFound error, got: {:?}", other),
    }
    assert!(!resource.has_extension(&WorthlessExtension {}));

    let updated = FakeExtension {
        name: "Updated Fake Extension".to_string(),
    };
    resource.update_extension(&updated).unwrap();
    assert_eq!(resource.extension::<FakeExtension>().unwrap(), updated);
}

#[test]
fn test_remove_twice() {
    init_logging();
    let mut resource = resource_with_additional_properties();

    assert!(resource.remove_extension(&FakeExtension::default()));
    assert!(!resource.remove_extension(&FakeExtension::default()));
    assert!(!resource.has_extension(&FakeExtension::default()));
    assert_eq!(resource.additional_properties.len(), 2);

    let result = resource.extension::<FakeExtension>();
    assert!(matches!(result, Err(ScimError::ExtensionNotFound { .. })));
}

#[test]
fn test_extension_urns() {
    init_logging();
    let mut resource = resource_with_additional_properties();
    assert_eq!(resource.extension_urns(), vec!["urn:fake.extension".to_string()]);

    resource.add_extension(&WorthlessExtension {}).unwrap();
    let mut urns = resource.extension_urns();
    urns.sort();
    assert_eq!(urns, vec!["urn:fake.extension", "urn:worthless.extension"]);

    let only_fake = resource.extension_urns_with(&|key: &str| key.ends_with("fake.extension"));
    assert_eq!(only_fake, vec!["urn:fake.extension".to_string()]);
}

#[test]
fn test_wrong_payload_shape_is_rejected() {
    init_logging();
    let mut resource = CommonAttributes::new("1");
    resource
        .additional_properties
        .insert(ENTERPRISE_USER_SCHEMA, json!(["not", "an", "object"]));

    let mut enterprise = EnterpriseUser::default();
    let result = resource.get_extension(&mut enterprise);
    assert!(matches!(result, Err(ScimError::TypeMismatch { .. })));
    assert_eq!(enterprise, EnterpriseUser::default());

    resource
        .additional_properties
        .insert(ENTERPRISE_USER_SCHEMA, json!({ "department": false }));
    match resource.get_extension(&mut enterprise) {
        Err(ScimError::TypeMismatch {
            field,
            expected,
            actual,
        }) => {
            assert_eq!(field, format!("{}.department", ENTERPRISE_USER_SCHEMA));
            assert_eq!(expected, "string");
            assert_eq!(actual, "boolean");
        }
        other => panic!("Expected TypeMismatch error, got: {:?}", other),
    }
    assert_eq!(enterprise, EnterpriseUser::default());
}

#[test]
fn test_nested_member_mismatch_names_the_path() {
    init_logging();
    let mut user = User::new("2819c223", "bjensen@example.com");
    user.common.additional_properties.insert(
        ENTERPRISE_USER_SCHEMA,
        json!({ "department": "Tour Operations", "manager": { "value": 42 } }),
    );

    match user.extension::<EnterpriseUser>() {
        Err(ScimError::TypeMismatch {
            field,
            expected,
            actual,
        }) => {
            assert_eq!(field, format!("{}.manager.value", ENTERPRISE_USER_SCHEMA));
            assert_eq!(expected, "string");
            assert_eq!(actual, "number");
        }
        other => panic!("Expected TypeMismatch error, got: {:?}", other),
    }
}
