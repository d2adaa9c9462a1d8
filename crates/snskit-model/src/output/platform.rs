//! Mobile push results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::shape::{EMPTY_STRING_MAP, extend_list, insert_entry};
use crate::types::{Endpoint, PlatformApplication};

/// Output of the `CreatePlatformApplication` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePlatformApplicationResult {
    /// The ARN of the new platform application.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_application_arn: Option<String>,
}

impl CreatePlatformApplicationResult {
    #[must_use]
    pub fn with_platform_application_arn(mut self, arn: impl Into<String>) -> Self {
        self.platform_application_arn = Some(arn.into());
        self
    }
}

/// Output of the `DeletePlatformApplication` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeletePlatformApplicationResult {}

/// Output of the `GetPlatformApplicationAttributes` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlatformApplicationAttributesResult {
    /// Platform application attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
}

impl GetPlatformApplicationAttributesResult {
    /// The attributes, or an empty map when unset.
    #[must_use]
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        self.attributes.as_ref().unwrap_or(&EMPTY_STRING_MAP)
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

/// Output of the `SetPlatformApplicationAttributes` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetPlatformApplicationAttributesResult {}

/// Output of the `ListPlatformApplications` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPlatformApplicationsResult {
    /// One page of platform applications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_applications: Option<Vec<PlatformApplication>>,

    /// Token for the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListPlatformApplicationsResult {
    /// The applications, or an empty slice when unset.
    #[must_use]
    pub fn platform_applications(&self) -> &[PlatformApplication] {
        self.platform_applications.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn with_platform_applications(
        mut self,
        applications: impl IntoIterator<Item = PlatformApplication>,
    ) -> Self {
        extend_list(&mut self.platform_applications, applications);
        self
    }

    /// Replace the applications; `None` clears the field.
    #[must_use]
    pub fn set_platform_applications(
        mut self,
        applications: Option<Vec<PlatformApplication>>,
    ) -> Self {
        self.platform_applications = applications;
        self
    }

    #[must_use]
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

/// Output of the `CreatePlatformEndpoint` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePlatformEndpointResult {
    /// The ARN of the endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_arn: Option<String>,
}

impl CreatePlatformEndpointResult {
    #[must_use]
    pub fn with_endpoint_arn(mut self, endpoint_arn: impl Into<String>) -> Self {
        self.endpoint_arn = Some(endpoint_arn.into());
        self
    }
}

/// Output of the `DeleteEndpoint` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeleteEndpointResult {}

/// Output of the `GetEndpointAttributes` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetEndpointAttributesResult {
    /// Endpoint attributes (`CustomUserData`, `Enabled`, `Token`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
}

impl GetEndpointAttributesResult {
    /// The attributes, or an empty map when unset.
    #[must_use]
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        self.attributes.as_ref().unwrap_or(&EMPTY_STRING_MAP)
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

/// Output of the `SetEndpointAttributes` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetEndpointAttributesResult {}

/// Output of the `ListEndpointsByPlatformApplication` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListEndpointsByPlatformApplicationResult {
    /// One page of endpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<Vec<Endpoint>>,

    /// Token for the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListEndpointsByPlatformApplicationResult {
    /// The endpoints, or an empty slice when unset.
    #[must_use]
    pub fn endpoints(&self) -> &[Endpoint] {
        self.endpoints.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn with_endpoints(mut self, endpoints: impl IntoIterator<Item = Endpoint>) -> Self {
        extend_list(&mut self.endpoints, endpoints);
        self
    }

    /// Replace the endpoints; `None` clears the field.
    #[must_use]
    pub fn set_endpoints(mut self, endpoints: Option<Vec<Endpoint>>) -> Self {
        self.endpoints = endpoints;
        self
    }

    #[must_use]
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

impl_shape_display!(
    CreatePlatformApplicationResult,
    DeletePlatformApplicationResult,
    GetPlatformApplicationAttributesResult,
    SetPlatformApplicationAttributesResult,
    ListPlatformApplicationsResult,
    CreatePlatformEndpointResult,
    DeleteEndpointResult,
    GetEndpointAttributesResult,
    SetEndpointAttributesResult,
    ListEndpointsByPlatformApplicationResult,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_deserialize_endpoint_page() {
        let json = r#"{
            "Endpoints": [{
                "EndpointArn": "arn:aws:sns:us-east-1:123456789012:endpoint/GCM/app/1",
                "Attributes": {"Enabled": "true", "Token": "t1"}
            }]
        }"#;
        let page: ListEndpointsByPlatformApplicationResult =
            serde_json::from_str(json).expect("deserialize");
        assert_eq!(page.endpoints().len(), 1);
        assert!(page.endpoints()[0].is_enabled());
        assert!(page.next_token.is_none());
    }

    #[test]
    fn test_should_hash_equal_results_identically() {
        use std::collections::HashSet;

        let a = CreatePlatformEndpointResult::default().with_endpoint_arn("arn:e");
        let b = CreatePlatformEndpointResult::default().with_endpoint_arn("arn:e");
        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }
}
