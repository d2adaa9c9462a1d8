//! Mobile push requests: platform applications and device endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::shape::{EMPTY_STRING_MAP, insert_entry};

/// Input for the `CreatePlatformApplication` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePlatformApplicationRequest {
    /// Application name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Push platform (`ADM`, `APNS`, `APNS_SANDBOX`, `GCM`, `BAIDU`, `MPNS`, `WNS`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    /// Platform credentials and event topics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
}

impl CreatePlatformApplicationRequest {
    #[must_use]
    pub fn new(name: impl Into<String>, platform: impl Into<String>) -> Self {
        Self::default().with_name(name).with_platform(platform)
    }

    /// The attributes, or an empty map when unset.
    #[must_use]
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        self.attributes.as_ref().unwrap_or(&EMPTY_STRING_MAP)
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Replace the attributes; `None` clears the field.
    #[must_use]
    pub fn set_attributes(mut self, attributes: Option<BTreeMap<String, String>>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Add one attribute. Fails if `key` is already present.
    pub fn add_attributes_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), ModelError> {
        insert_entry(&mut self.attributes, "Attributes", key.into(), value.into())
    }

    /// Fluent form of [`Self::add_attributes_entry`].
    pub fn with_attributes_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        self.add_attributes_entry(key, value)?;
        Ok(self)
    }

    /// Reset the attributes to unset.
    pub fn clear_attributes_entries(&mut self) {
        self.attributes = None;
    }
}

/// Input for the `DeletePlatformApplication` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeletePlatformApplicationRequest {
    /// The ARN of the platform application.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_application_arn: Option<String>,
}

impl DeletePlatformApplicationRequest {
    #[must_use]
    pub fn with_platform_application_arn(mut self, arn: impl Into<String>) -> Self {
        self.platform_application_arn = Some(arn.into());
        self
    }
}

/// Input for the `GetPlatformApplicationAttributes` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlatformApplicationAttributesRequest {
    /// The ARN of the platform application.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_application_arn: Option<String>,
}

impl GetPlatformApplicationAttributesRequest {
    #[must_use]
    pub fn with_platform_application_arn(mut self, arn: impl Into<String>) -> Self {
        self.platform_application_arn = Some(arn.into());
        self
    }
}

/// Input for the `SetPlatformApplicationAttributes` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetPlatformApplicationAttributesRequest {
    /// The ARN of the platform application.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_application_arn: Option<String>,

    /// Attributes to set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
}

impl SetPlatformApplicationAttributesRequest {
    /// The attributes, or an empty map when unset.
    #[must_use]
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        self.attributes.as_ref().unwrap_or(&EMPTY_STRING_MAP)
    }

    #[must_use]
    pub fn with_platform_application_arn(mut self, arn: impl Into<String>) -> Self {
        self.platform_application_arn = Some(arn.into());
        self
    }

    /// Replace the attributes; `None` clears the field.
    #[must_use]
    pub fn set_attributes(mut self, attributes: Option<BTreeMap<String, String>>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Add one attribute. Fails if `key` is already present.
    pub fn add_attributes_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), ModelError> {
        insert_entry(&mut self.attributes, "Attributes", key.into(), value.into())
    }

    /// Fluent form of [`Self::add_attributes_entry`].
    pub fn with_attributes_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        self.add_attributes_entry(key, value)?;
        Ok(self)
    }

    /// Reset the attributes to unset.
    pub fn clear_attributes_entries(&mut self) {
        self.attributes = None;
    }
}

/// Input for the `ListPlatformApplications` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPlatformApplicationsRequest {
    /// Continuation token from a previous result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListPlatformApplicationsRequest {
    #[must_use]
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

/// Input for the `CreatePlatformEndpoint` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePlatformEndpointRequest {
    /// The ARN of the platform application to register under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_application_arn: Option<String>,

    /// The device token issued by the push platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Arbitrary data associated with the endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_user_data: Option<String>,

    /// Endpoint attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
}

impl CreatePlatformEndpointRequest {
    #[must_use]
    pub fn new(platform_application_arn: impl Into<String>, token: impl Into<String>) -> Self {
        Self::default()
            .with_platform_application_arn(platform_application_arn)
            .with_token(token)
    }

    /// The attributes, or an empty map when unset.
    #[must_use]
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        self.attributes.as_ref().unwrap_or(&EMPTY_STRING_MAP)
    }

    #[must_use]
    pub fn with_platform_application_arn(mut self, arn: impl Into<String>) -> Self {
        self.platform_application_arn = Some(arn.into());
        self
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn with_custom_user_data(mut self, data: impl Into<String>) -> Self {
        self.custom_user_data = Some(data.into());
        self
    }

    /// Replace the attributes; `None` clears the field.
    #[must_use]
    pub fn set_attributes(mut self, attributes: Option<BTreeMap<String, String>>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Add one attribute. Fails if `key` is already present.
    pub fn add_attributes_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), ModelError> {
        insert_entry(&mut self.attributes, "Attributes", key.into(), value.into())
    }

    /// Fluent form of [`Self::add_attributes_entry`].
    pub fn with_attributes_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        self.add_attributes_entry(key, value)?;
        Ok(self)
    }

    /// Reset the attributes to unset.
    pub fn clear_attributes_entries(&mut self) {
        self.attributes = None;
    }
}

/// Input for the `DeleteEndpoint` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteEndpointRequest {
    /// The ARN of the endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_arn: Option<String>,
}

impl DeleteEndpointRequest {
    #[must_use]
    pub fn with_endpoint_arn(mut self, endpoint_arn: impl Into<String>) -> Self {
        self.endpoint_arn = Some(endpoint_arn.into());
        self
    }
}

/// Input for the `GetEndpointAttributes` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetEndpointAttributesRequest {
    /// The ARN of the endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_arn: Option<String>,
}

impl GetEndpointAttributesRequest {
    #[must_use]
    pub fn with_endpoint_arn(mut self, endpoint_arn: impl Into<String>) -> Self {
        self.endpoint_arn = Some(endpoint_arn.into());
        self
    }
}

/// Input for the `SetEndpointAttributes` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetEndpointAttributesRequest {
    /// The ARN of the endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_arn: Option<String>,

    /// Attributes to set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
}

impl SetEndpointAttributesRequest {
    /// The attributes, or an empty map when unset.
    #[must_use]
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        self.attributes.as_ref().unwrap_or(&EMPTY_STRING_MAP)
    }

    #[must_use]
    pub fn with_endpoint_arn(mut self, endpoint_arn: impl Into<String>) -> Self {
        self.endpoint_arn = Some(endpoint_arn.into());
        self
    }

    /// Replace the attributes; `None` clears the field.
    #[must_use]
    pub fn set_attributes(mut self, attributes: Option<BTreeMap<String, String>>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Add one attribute. Fails if `key` is already present.
    pub fn add_attributes_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), ModelError> {
        insert_entry(&mut self.attributes, "Attributes", key.into(), value.into())
    }

    /// Fluent form of [`Self::add_attributes_entry`].
    pub fn with_attributes_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        self.add_attributes_entry(key, value)?;
        Ok(self)
    }

    /// Reset the attributes to unset.
    pub fn clear_attributes_entries(&mut self) {
        self.attributes = None;
    }
}

/// Input for the `ListEndpointsByPlatformApplication` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListEndpointsByPlatformApplicationRequest {
    /// The ARN of the platform application.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_application_arn: Option<String>,

    /// Continuation token from a previous result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListEndpointsByPlatformApplicationRequest {
    #[must_use]
    pub fn with_platform_application_arn(mut self, arn: impl Into<String>) -> Self {
        self.platform_application_arn = Some(arn.into());
        self
    }

    #[must_use]
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

impl_shape_display!(
    CreatePlatformApplicationRequest,
    DeletePlatformApplicationRequest,
    GetPlatformApplicationAttributesRequest,
    SetPlatformApplicationAttributesRequest,
    ListPlatformApplicationsRequest,
    CreatePlatformEndpointRequest,
    DeleteEndpointRequest,
    GetEndpointAttributesRequest,
    SetEndpointAttributesRequest,
    ListEndpointsByPlatformApplicationRequest,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_build_platform_application_request() {
        let req = CreatePlatformApplicationRequest::new("mobile", "GCM")
            .with_attributes_entry("PlatformCredential", "server-key")
            .expect("first attribute");
        assert_eq!(req.platform.as_deref(), Some("GCM"));
        assert_eq!(req.attributes().len(), 1);

        let json = serde_json::to_string(&req).expect("serialize");
        assert_eq!(
            json,
            r#"{"Name":"mobile","Platform":"GCM","Attributes":{"PlatformCredential":"server-key"}}"#
        );
    }

    #[test]
    fn test_should_reject_duplicate_endpoint_attribute() {
        let mut req = CreatePlatformEndpointRequest::new(
            "arn:aws:sns:us-east-1:123456789012:app/GCM/mobile",
            "device-token",
        );
        req.add_attributes_entry("Enabled", "true").expect("insert");
        let err = req
            .add_attributes_entry("Enabled", "false")
            .expect_err("duplicate");
        assert!(matches!(err, ModelError::DuplicateKey { .. }));
        assert_eq!(req.attributes()["Enabled"], "true");
    }

    #[test]
    fn test_should_keep_explicit_empty_attribute_map() {
        let req = SetEndpointAttributesRequest::default()
            .with_endpoint_arn("arn:e")
            .set_attributes(Some(BTreeMap::new()));
        assert_eq!(req.attributes, Some(BTreeMap::new()));
        assert!(req.to_string().contains(r#""Attributes":{}"#));

        let cleared = req.set_attributes(None);
        assert!(!cleared.to_string().contains("Attributes"));
    }
}
