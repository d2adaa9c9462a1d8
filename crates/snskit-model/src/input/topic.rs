//! Topic management requests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::shape::{EMPTY_STRING_MAP, extend_list, insert_entry};
use crate::types::Tag;

/// Input for the `CreateTopic` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTopicRequest {
    /// The topic name. FIFO topic names end in `.fifo`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Topic attributes (`DisplayName`, `Policy`, `FifoTopic`, `KmsMasterKeyId`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,

    /// Tags to attach to the new topic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    /// A data protection policy document (JSON).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_protection_policy: Option<String>,
}

impl CreateTopicRequest {
    /// A request for a topic named `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::default().with_name(name)
    }

    /// The attributes, or an empty map when unset.
    #[must_use]
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        self.attributes.as_ref().unwrap_or(&EMPTY_STRING_MAP)
    }

    /// The tags, or an empty slice when unset.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        self.tags.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_data_protection_policy(mut self, policy: impl Into<String>) -> Self {
        self.data_protection_policy = Some(policy.into());
        self
    }

    /// Append tags, creating the list if it is unset.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        extend_list(&mut self.tags, tags);
        self
    }

    /// Replace the tags; `None` clears the field.
    #[must_use]
    pub fn set_tags(mut self, tags: Option<Vec<Tag>>) -> Self {
        self.tags = tags;
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

/// Input for the `DeleteTopic` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteTopicRequest {
    /// The ARN of the topic to delete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_arn: Option<String>,
}

impl DeleteTopicRequest {
    #[must_use]
    pub fn new(topic_arn: impl Into<String>) -> Self {
        Self::default().with_topic_arn(topic_arn)
    }

    #[must_use]
    pub fn with_topic_arn(mut self, topic_arn: impl Into<String>) -> Self {
        self.topic_arn = Some(topic_arn.into());
        self
    }
}

/// Input for the `GetTopicAttributes` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetTopicAttributesRequest {
    /// The ARN of the topic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_arn: Option<String>,
}

impl GetTopicAttributesRequest {
    #[must_use]
    pub fn new(topic_arn: impl Into<String>) -> Self {
        Self::default().with_topic_arn(topic_arn)
    }

    #[must_use]
    pub fn with_topic_arn(mut self, topic_arn: impl Into<String>) -> Self {
        self.topic_arn = Some(topic_arn.into());
        self
    }
}

/// Input for the `SetTopicAttributes` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetTopicAttributesRequest {
    /// The ARN of the topic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_arn: Option<String>,

    /// The attribute to change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,

    /// The new value; unset removes the attribute's override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_value: Option<String>,
}

impl SetTopicAttributesRequest {
    #[must_use]
    pub fn new(
        topic_arn: impl Into<String>,
        attribute_name: impl Into<String>,
        attribute_value: impl Into<String>,
    ) -> Self {
        Self::default()
            .with_topic_arn(topic_arn)
            .with_attribute_name(attribute_name)
            .with_attribute_value(attribute_value)
    }

    #[must_use]
    pub fn with_topic_arn(mut self, topic_arn: impl Into<String>) -> Self {
        self.topic_arn = Some(topic_arn.into());
        self
    }

    #[must_use]
    pub fn with_attribute_name(mut self, attribute_name: impl Into<String>) -> Self {
        self.attribute_name = Some(attribute_name.into());
        self
    }

    #[must_use]
    pub fn with_attribute_value(mut self, attribute_value: impl Into<String>) -> Self {
        self.attribute_value = Some(attribute_value.into());
        self
    }
}

/// Input for the `ListTopics` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTopicsRequest {
    /// Continuation token from a previous `ListTopics` result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListTopicsRequest {
    #[must_use]
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

/// Input for the `AddPermission` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddPermissionRequest {
    /// The ARN of the topic whose policy changes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_arn: Option<String>,

    /// Unique identifier for the new policy statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Account IDs of the principals being granted access.
    #[serde(rename = "AWSAccountId", skip_serializing_if = "Option::is_none")]
    pub aws_account_ids: Option<Vec<String>>,

    /// Actions to allow (`Publish`, `Subscribe`, ...).
    #[serde(rename = "ActionName", skip_serializing_if = "Option::is_none")]
    pub action_names: Option<Vec<String>>,
}

impl AddPermissionRequest {
    /// The account IDs, or an empty slice when unset.
    #[must_use]
    pub fn aws_account_ids(&self) -> &[String] {
        self.aws_account_ids.as_deref().unwrap_or_default()
    }

    /// The action names, or an empty slice when unset.
    #[must_use]
    pub fn action_names(&self) -> &[String] {
        self.action_names.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn with_topic_arn(mut self, topic_arn: impl Into<String>) -> Self {
        self.topic_arn = Some(topic_arn.into());
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Append account IDs, creating the list if it is unset.
    #[must_use]
    pub fn with_aws_account_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_list(&mut self.aws_account_ids, ids.into_iter().map(Into::into));
        self
    }

    /// Replace the account IDs; `None` clears the field.
    #[must_use]
    pub fn set_aws_account_ids(mut self, ids: Option<Vec<String>>) -> Self {
        self.aws_account_ids = ids;
        self
    }

    /// Append action names, creating the list if it is unset.
    #[must_use]
    pub fn with_action_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_list(&mut self.action_names, names.into_iter().map(Into::into));
        self
    }

    /// Replace the action names; `None` clears the field.
    #[must_use]
    pub fn set_action_names(mut self, names: Option<Vec<String>>) -> Self {
        self.action_names = names;
        self
    }
}

/// Input for the `RemovePermission` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemovePermissionRequest {
    /// The ARN of the topic whose policy changes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_arn: Option<String>,

    /// The statement to remove.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl RemovePermissionRequest {
    #[must_use]
    pub fn new(topic_arn: impl Into<String>, label: impl Into<String>) -> Self {
        Self::default().with_topic_arn(topic_arn).with_label(label)
    }

    #[must_use]
    pub fn with_topic_arn(mut self, topic_arn: impl Into<String>) -> Self {
        self.topic_arn = Some(topic_arn.into());
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Input for the `GetDataProtectionPolicy` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetDataProtectionPolicyRequest {
    /// The ARN of the topic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
}

impl GetDataProtectionPolicyRequest {
    #[must_use]
    pub fn with_resource_arn(mut self, resource_arn: impl Into<String>) -> Self {
        self.resource_arn = Some(resource_arn.into());
        self
    }
}

/// Input for the `PutDataProtectionPolicy` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutDataProtectionPolicyRequest {
    /// The ARN of the topic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,

    /// The policy document (JSON).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_protection_policy: Option<String>,
}

impl PutDataProtectionPolicyRequest {
    #[must_use]
    pub fn with_resource_arn(mut self, resource_arn: impl Into<String>) -> Self {
        self.resource_arn = Some(resource_arn.into());
        self
    }

    #[must_use]
    pub fn with_data_protection_policy(mut self, policy: impl Into<String>) -> Self {
        self.data_protection_policy = Some(policy.into());
        self
    }
}

impl_shape_display!(
    CreateTopicRequest,
    DeleteTopicRequest,
    GetTopicAttributesRequest,
    SetTopicAttributesRequest,
    ListTopicsRequest,
    AddPermissionRequest,
    RemovePermissionRequest,
    GetDataProtectionPolicyRequest,
    PutDataProtectionPolicyRequest,
);
