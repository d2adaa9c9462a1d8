//! Subscription lifecycle requests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::shape::{EMPTY_STRING_MAP, insert_entry};

/// Input for the `Subscribe` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubscribeRequest {
    /// The ARN of the topic to subscribe to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_arn: Option<String>,

    /// The delivery protocol (`http`, `https`, `email`, `email-json`, `sms`,
    /// `sqs`, `application`, `lambda`, `firehose`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,

    /// The delivery address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Subscription attributes (`FilterPolicy`, `RawMessageDelivery`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,

    /// Return the ARN even while the subscription is pending confirmation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_subscription_arn: Option<bool>,
}

impl SubscribeRequest {
    /// Subscribe `endpoint` to `topic_arn` over `protocol`.
    #[must_use]
    pub fn new(
        topic_arn: impl Into<String>,
        protocol: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self::default()
            .with_topic_arn(topic_arn)
            .with_protocol(protocol)
            .with_endpoint(endpoint)
    }

    /// The attributes, or an empty map when unset.
    #[must_use]
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        self.attributes.as_ref().unwrap_or(&EMPTY_STRING_MAP)
    }

    #[must_use]
    pub fn with_topic_arn(mut self, topic_arn: impl Into<String>) -> Self {
        self.topic_arn = Some(topic_arn.into());
        self
    }

    #[must_use]
    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    #[must_use]
    pub fn with_return_subscription_arn(mut self, value: bool) -> Self {
        self.return_subscription_arn = Some(value);
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

/// Input for the `ConfirmSubscription` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfirmSubscriptionRequest {
    /// The ARN of the topic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_arn: Option<String>,

    /// The token sent to the endpoint by `Subscribe`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// `"true"` to require authentication for unsubscribing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authenticate_on_unsubscribe: Option<String>,
}

impl ConfirmSubscriptionRequest {
    #[must_use]
    pub fn new(topic_arn: impl Into<String>, token: impl Into<String>) -> Self {
        Self::default().with_topic_arn(topic_arn).with_token(token)
    }

    #[must_use]
    pub fn with_topic_arn(mut self, topic_arn: impl Into<String>) -> Self {
        self.topic_arn = Some(topic_arn.into());
        self
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn with_authenticate_on_unsubscribe(mut self, value: impl Into<String>) -> Self {
        self.authenticate_on_unsubscribe = Some(value.into());
        self
    }
}

/// Input for the `Unsubscribe` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnsubscribeRequest {
    /// The ARN of the subscription to delete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_arn: Option<String>,
}

impl UnsubscribeRequest {
    #[must_use]
    pub fn new(subscription_arn: impl Into<String>) -> Self {
        Self::default().with_subscription_arn(subscription_arn)
    }

    #[must_use]
    pub fn with_subscription_arn(mut self, subscription_arn: impl Into<String>) -> Self {
        self.subscription_arn = Some(subscription_arn.into());
        self
    }
}

/// Input for the `GetSubscriptionAttributes` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetSubscriptionAttributesRequest {
    /// The ARN of the subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_arn: Option<String>,
}

impl GetSubscriptionAttributesRequest {
    #[must_use]
    pub fn new(subscription_arn: impl Into<String>) -> Self {
        Self::default().with_subscription_arn(subscription_arn)
    }

    #[must_use]
    pub fn with_subscription_arn(mut self, subscription_arn: impl Into<String>) -> Self {
        self.subscription_arn = Some(subscription_arn.into());
        self
    }
}

/// Input for the `SetSubscriptionAttributes` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetSubscriptionAttributesRequest {
    /// The ARN of the subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_arn: Option<String>,

    /// The attribute to change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,

    /// The new value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_value: Option<String>,
}

impl SetSubscriptionAttributesRequest {
    #[must_use]
    pub fn new(
        subscription_arn: impl Into<String>,
        attribute_name: impl Into<String>,
        attribute_value: impl Into<String>,
    ) -> Self {
        Self::default()
            .with_subscription_arn(subscription_arn)
            .with_attribute_name(attribute_name)
            .with_attribute_value(attribute_value)
    }

    #[must_use]
    pub fn with_subscription_arn(mut self, subscription_arn: impl Into<String>) -> Self {
        self.subscription_arn = Some(subscription_arn.into());
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

/// Input for the `ListSubscriptions` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListSubscriptionsRequest {
    /// Continuation token from a previous `ListSubscriptions` result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListSubscriptionsRequest {
    #[must_use]
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

/// Input for the `ListSubscriptionsByTopic` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListSubscriptionsByTopicRequest {
    /// The ARN of the topic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_arn: Option<String>,

    /// Continuation token from a previous `ListSubscriptionsByTopic` result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListSubscriptionsByTopicRequest {
    #[must_use]
    pub fn new(topic_arn: impl Into<String>) -> Self {
        Self::default().with_topic_arn(topic_arn)
    }

    #[must_use]
    pub fn with_topic_arn(mut self, topic_arn: impl Into<String>) -> Self {
        self.topic_arn = Some(topic_arn.into());
        self
    }

    #[must_use]
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

impl_shape_display!(
    SubscribeRequest,
    ConfirmSubscriptionRequest,
    UnsubscribeRequest,
    GetSubscriptionAttributesRequest,
    SetSubscriptionAttributesRequest,
    ListSubscriptionsRequest,
    ListSubscriptionsByTopicRequest,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_build_subscribe_with_filter_policy() {
        let req = SubscribeRequest::new(
            "arn:aws:sns:us-east-1:123456789012:orders",
            "sqs",
            "arn:aws:sqs:us-east-1:123456789012:orders-queue",
        )
        .with_return_subscription_arn(true)
        .with_attributes_entry("FilterPolicy", r#"{"kind":["created"]}"#)
        .expect("first attribute");

        assert_eq!(req.protocol.as_deref(), Some("sqs"));
        assert_eq!(req.return_subscription_arn, Some(true));
        assert!(req.attributes().contains_key("FilterPolicy"));

        let json = serde_json::to_string(&req).expect("serialize SubscribeRequest");
        assert!(json.contains(r#""ReturnSubscriptionArn":true"#));
    }

    #[test]
    fn test_should_carry_pagination_token_verbatim() {
        let token = "AAFzb21lLW9wYXF1ZS10b2tlbg==/+";
        let req = ListSubscriptionsByTopicRequest::new("arn:aws:sns:us-east-1:123456789012:t")
            .with_next_token(token);
        assert_eq!(req.next_token.as_deref(), Some(token));
    }

    #[test]
    fn test_should_distinguish_requests_by_any_field() {
        let a = ConfirmSubscriptionRequest::new("arn:t", "tok");
        let b = ConfirmSubscriptionRequest::new("arn:t", "tok");
        assert_eq!(a, b);
        assert_ne!(a, b.with_authenticate_on_unsubscribe("true"));
    }
}
