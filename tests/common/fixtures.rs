//! Resource documents used across the integration suites.

use scim_resource::Extension;
use serde::{Deserialize, Serialize};

pub const RESOURCE_JSON: &str = r#"{
    "id": "2819c223-7f76-453a-919d-413861904646",
    "externalId": "43496746-7739-460b-bf99-3421f2970687",
    "meta": {
        "resourceType": "User",
        "created": "2010-01-23T04:56:22Z",
        "lastModified": "2011-05-13T04:42:34Z",
        "version": "W/3694e05e9dff590",
        "location": "https://example.com/v2/Users/2819c223-7f76-453a-919d-413861904646"
    }
}"#;

pub const RESOURCE_WITH_ADDITIONAL_PROPERTIES_JSON: &str = r#"{
    "id": "2819c223-7f76-453a-919d-413861904646",
    "externalId": "43496746-7739-460b-bf99-3421f2970687",
    "meta": {
        "resourceType": "User",
        "created": "2010-01-23T04:56:22Z",
        "lastModified": "2011-05-13T04:42:34Z",
        "version": "W/3694e05e9dff590",
        "location": "https://example.com/v2/Users/2819c223-7f76-453a-919d-413861904646"
    },
    "urn:fake.extension": {
        "name": "Fake Extension"
    },
    "additionalPropertyOne": "additionalPropertyOne",
    "additionalPropertyTwo": "additionalPropertyTwo"
}"#;

pub const BAD_RESOURCE_JSON: &str = r#"{
    "id": [
        "2819c223-7f76-453a-919d-413861904646"
    ],
    "externalId": {
        "id": "43496746-7739-460b-bf99-3421f2970687"
    },
    "meta": {
        "resourceType": "User",
        "created": "2010-01-23T04:56:22Z",
        "lastModified": "2011-05-13T04:42:34Z",
        "version": "W/3694e05e9dff590",
        "location": "https://example.com/v2/Users/2819c223-7f76-453a-919d-413861904646"
    }
}"#;

pub const ORGANIZATION_JSON: &str = r#"{
    "id": "430beb5c-a361-4c04-b308-2845789a496e",
    "schemas": ["urn:com:example:2.0:Organization"],
    "name": "Tour Promotion",
    "type": "Department",
    "parent": "../Organizations/4a7741a3-a436-4a52-a6d5-149e6c1b9578",
    "children": [
        "../Organizations/7eb59c46-35a4-4443-b8c1-5de8be88f973",
        "../Organizations/66506f29-8c44-414e-b52d-a993b94f370c",
        "../Organizations/0a365d4f-10e5-45c5-ae05-ee5184b59627"
    ],
    "meta": {
        "resourceType": "Organization",
        "created": "2010-01-23T04:56:22Z",
        "lastModified": "2011-05-13T04:42:34Z",
        "version": "W/3694e05e9dff590",
        "location": "https://example.com/v2/Organizations/430beb5c-a361-4c04-b308-2845789a496e"
    }
}"#;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FakeExtension {
    pub name: String,
}

impl Extension for FakeExtension {
    fn urn(&self) -> &str {
        "urn:fake.extension"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorthlessExtension {}

impl Extension for WorthlessExtension {
    fn urn(&self) -> &str {
        "urn:worthless.extension"
    }
}
