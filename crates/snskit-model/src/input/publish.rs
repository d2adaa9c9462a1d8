//! Message publishing requests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::shape::{EMPTY_MESSAGE_ATTRIBUTES, extend_list, insert_entry};
use crate::types::{MessageAttributeValue, PublishBatchRequestEntry};

/// Input for the `Publish` operation.
///
/// Exactly one of `topic_arn`, `target_arn` and `phone_number` selects the
/// destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PublishRequest {
    /// Publish to this topic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_arn: Option<String>,

    /// Publish directly to this platform endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_arn: Option<String>,

    /// Send an SMS to this number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// The message body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Subject line for email endpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Set to `json` to send a different message per protocol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_structure: Option<String>,

    /// Message attributes keyed by name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_attributes: Option<BTreeMap<String, MessageAttributeValue>>,

    /// FIFO topics: deduplication token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_deduplication_id: Option<String>,

    /// FIFO topics: ordering group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_group_id: Option<String>,
}

impl PublishRequest {
    /// The message attributes, or an empty map when unset.
    #[must_use]
    pub fn message_attributes(&self) -> &BTreeMap<String, MessageAttributeValue> {
        self.message_attributes
            .as_ref()
            .unwrap_or(&EMPTY_MESSAGE_ATTRIBUTES)
    }

    #[must_use]
    pub fn with_topic_arn(mut self, topic_arn: impl Into<String>) -> Self {
        self.topic_arn = Some(topic_arn.into());
        self
    }

    #[must_use]
    pub fn with_target_arn(mut self, target_arn: impl Into<String>) -> Self {
        self.target_arn = Some(target_arn.into());
        self
    }

    #[must_use]
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    #[must_use]
    pub fn with_message_structure(mut self, message_structure: impl Into<String>) -> Self {
        self.message_structure = Some(message_structure.into());
        self
    }

    #[must_use]
    pub fn with_message_deduplication_id(mut self, id: impl Into<String>) -> Self {
        self.message_deduplication_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_message_group_id(mut self, id: impl Into<String>) -> Self {
        self.message_group_id = Some(id.into());
        self
    }

    /// Replace the message attributes; `None` clears the field.
    #[must_use]
    pub fn set_message_attributes(
        mut self,
        attributes: Option<BTreeMap<String, MessageAttributeValue>>,
    ) -> Self {
        self.message_attributes = attributes;
        self
    }

    /// Add one message attribute. Fails if `name` is already present.
    pub fn add_message_attributes_entry(
        &mut self,
        name: impl Into<String>,
        value: MessageAttributeValue,
    ) -> Result<(), ModelError> {
        insert_entry(
            &mut self.message_attributes,
            "MessageAttributes",
            name.into(),
            value,
        )
    }

    /// Fluent form of [`Self::add_message_attributes_entry`].
    pub fn with_message_attributes_entry(
        mut self,
        name: impl Into<String>,
        value: MessageAttributeValue,
    ) -> Result<Self, ModelError> {
        self.add_message_attributes_entry(name, value)?;
        Ok(self)
    }

    /// Reset the message attributes to unset.
    pub fn clear_message_attributes_entries(&mut self) {
        self.message_attributes = None;
    }
}

/// Input for the `PublishBatch` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PublishBatchRequest {
    /// The topic to publish to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_arn: Option<String>,

    /// Up to ten entries, each with a batch-unique `Id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_batch_request_entries: Option<Vec<PublishBatchRequestEntry>>,
}

impl PublishBatchRequest {
    #[must_use]
    pub fn new(topic_arn: impl Into<String>) -> Self {
        Self::default().with_topic_arn(topic_arn)
    }

    /// The entries, or an empty slice when unset.
    #[must_use]
    pub fn publish_batch_request_entries(&self) -> &[PublishBatchRequestEntry] {
        self.publish_batch_request_entries
            .as_deref()
            .unwrap_or_default()
    }

    #[must_use]
    pub fn with_topic_arn(mut self, topic_arn: impl Into<String>) -> Self {
        self.topic_arn = Some(topic_arn.into());
        self
    }

    /// Append entries, keeping their order.
    #[must_use]
    pub fn with_publish_batch_request_entries(
        mut self,
        entries: impl IntoIterator<Item = PublishBatchRequestEntry>,
    ) -> Self {
        extend_list(&mut self.publish_batch_request_entries, entries);
        self
    }

    /// Replace the entries; `None` clears the field.
    #[must_use]
    pub fn set_publish_batch_request_entries(
        mut self,
        entries: Option<Vec<PublishBatchRequestEntry>>,
    ) -> Self {
        self.publish_batch_request_entries = entries;
        self
    }
}

impl_shape_display!(PublishRequest, PublishBatchRequest);

#[cfg(test)]
mod tests {
    use super::*;

    const TOPIC: &str = "arn:aws:sns:us-east-1:123456789012:my-topic";

    fn batch() -> PublishBatchRequest {
        PublishBatchRequest::new(TOPIC).with_publish_batch_request_entries([
            PublishBatchRequestEntry::new("1", "first"),
            PublishBatchRequestEntry::new("2", "second"),
        ])
    }

    #[test]
    fn test_should_keep_batch_entries_in_order() {
        let req = batch();
        assert_eq!(req.topic_arn.as_deref(), Some(TOPIC));
        let ids: Vec<_> = req
            .publish_batch_request_entries()
            .iter()
            .map(|e| e.id.as_deref().unwrap_or_default())
            .collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn test_should_render_batch_fields_in_display() {
        let rendered = batch().to_string();
        assert!(rendered.contains("TopicArn"));
        assert!(rendered.contains("PublishBatchRequestEntries"));

        let without_topic = PublishBatchRequest {
            topic_arn: None,
            ..batch()
        };
        let rendered = without_topic.to_string();
        assert!(!rendered.contains("TopicArn"));
        assert!(rendered.contains("PublishBatchRequestEntries"));
    }

    #[test]
    fn test_should_compare_batches_by_value() {
        assert_eq!(batch(), batch());
        let reordered = PublishBatchRequest::new(TOPIC).with_publish_batch_request_entries([
            PublishBatchRequestEntry::new("2", "second"),
            PublishBatchRequestEntry::new("1", "first"),
        ]);
        assert_ne!(batch(), reordered);
    }

    #[test]
    fn test_should_reject_duplicate_message_attribute() {
        let mut req = PublishRequest::default()
            .with_topic_arn(TOPIC)
            .with_message("hello");
        req.add_message_attributes_entry("source", MessageAttributeValue::string("web"))
            .expect("insert");
        let err = req
            .add_message_attributes_entry("source", MessageAttributeValue::string("cli"))
            .expect_err("duplicate");
        assert!(matches!(err, ModelError::DuplicateKey { field: "MessageAttributes", .. }));
        assert_eq!(
            req.message_attributes()["source"].string_value.as_deref(),
            Some("web")
        );
    }

    #[test]
    fn test_should_encode_binary_attribute_as_base64_json() {
        let req = PublishRequest::default()
            .with_message("m")
            .with_message_attributes_entry("blob", MessageAttributeValue::binary(&b"hi"[..]))
            .expect("insert");
        let json = serde_json::to_string(&req).expect("serialize");
        assert!(json.contains(r#""BinaryValue":"aGk=""#));

        let back: PublishRequest = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, req);
    }
}
