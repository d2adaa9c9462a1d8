//! Topic management results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::shape::{EMPTY_STRING_MAP, extend_list, insert_entry};
use crate::types::Topic;

/// Output of the `CreateTopic` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTopicResult {
    /// The ARN of the created (or existing) topic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_arn: Option<String>,
}

impl CreateTopicResult {
    #[must_use]
    pub fn with_topic_arn(mut self, topic_arn: impl Into<String>) -> Self {
        self.topic_arn = Some(topic_arn.into());
        self
    }
}

/// Output of the `DeleteTopic` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeleteTopicResult {}

/// Output of the `GetTopicAttributes` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetTopicAttributesResult {
    /// Topic attributes (`TopicArn`, `Owner`, `Policy`, `SubscriptionsConfirmed`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
}

impl GetTopicAttributesResult {
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

/// Output of the `SetTopicAttributes` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetTopicAttributesResult {}

/// Output of the `ListTopics` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTopicsResult {
    /// One page of topics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<Topic>>,

    /// Token for the next page; `None` on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListTopicsResult {
    /// The topics, or an empty slice when unset.
    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        self.topics.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn with_topics(mut self, topics: impl IntoIterator<Item = Topic>) -> Self {
        extend_list(&mut self.topics, topics);
        self
    }

    /// Replace the topics; `None` clears the field.
    #[must_use]
    pub fn set_topics(mut self, topics: Option<Vec<Topic>>) -> Self {
        self.topics = topics;
        self
    }

    #[must_use]
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

/// Output of the `AddPermission` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddPermissionResult {}

/// Output of the `RemovePermission` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemovePermissionResult {}

/// Output of the `GetDataProtectionPolicy` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetDataProtectionPolicyResult {
    /// The policy document (JSON), if one is attached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_protection_policy: Option<String>,
}

impl GetDataProtectionPolicyResult {
    #[must_use]
    pub fn with_data_protection_policy(mut self, policy: impl Into<String>) -> Self {
        self.data_protection_policy = Some(policy.into());
        self
    }
}

/// Output of the `PutDataProtectionPolicy` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PutDataProtectionPolicyResult {}

impl_shape_display!(
    CreateTopicResult,
    DeleteTopicResult,
    GetTopicAttributesResult,
    SetTopicAttributesResult,
    ListTopicsResult,
    AddPermissionResult,
    RemovePermissionResult,
    GetDataProtectionPolicyResult,
    PutDataProtectionPolicyResult,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_deserialize_list_topics_page() {
        let json = r#"{
            "Topics": [
                {"TopicArn": "arn:aws:sns:us-east-1:123456789012:a"},
                {"TopicArn": "arn:aws:sns:us-east-1:123456789012:b"}
            ],
            "NextToken": "page-2"
        }"#;
        let page: ListTopicsResult = serde_json::from_str(json).expect("deserialize");
        assert_eq!(page.topics().len(), 2);
        assert_eq!(page.next_token.as_deref(), Some("page-2"));
    }

    #[test]
    fn test_should_yield_empty_topics_when_unset() {
        let page = ListTopicsResult::default();
        assert!(page.topics().is_empty());
        assert_eq!(page.to_string(), "{}");
    }

    #[test]
    fn test_should_clear_topic_attributes() {
        let mut result = GetTopicAttributesResult::default()
            .with_attributes_entry("DisplayName", "Orders")
            .expect("insert");
        assert_eq!(result.attributes()["DisplayName"], "Orders");
        result.clear_attributes_entries();
        assert!(result.attributes.is_none());
        assert!(result.attributes().is_empty());
    }

    #[test]
    fn test_should_render_empty_result_as_empty_object() {
        assert_eq!(DeleteTopicResult::default().to_string(), "{}");
        assert_eq!(DeleteTopicResult {}, DeleteTopicResult::default());
    }
}
