//! Subscription lifecycle results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::shape::{EMPTY_STRING_MAP, extend_list, insert_entry};
use crate::types::Subscription;

/// Output of the `Subscribe` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubscribeResult {
    /// The subscription ARN, or `pending confirmation`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_arn: Option<String>,
}

impl SubscribeResult {
    #[must_use]
    pub fn with_subscription_arn(mut self, subscription_arn: impl Into<String>) -> Self {
        self.subscription_arn = Some(subscription_arn.into());
        self
    }

    /// Returns `true` while the endpoint has not confirmed the subscription.
    #[must_use]
    pub fn is_pending_confirmation(&self) -> bool {
        self.subscription_arn.as_deref() == Some("pending confirmation")
    }
}

/// Output of the `ConfirmSubscription` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfirmSubscriptionResult {
    /// The ARN of the confirmed subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_arn: Option<String>,
}

impl ConfirmSubscriptionResult {
    #[must_use]
    pub fn with_subscription_arn(mut self, subscription_arn: impl Into<String>) -> Self {
        self.subscription_arn = Some(subscription_arn.into());
        self
    }
}

/// Output of the `Unsubscribe` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnsubscribeResult {}

/// Output of the `GetSubscriptionAttributes` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetSubscriptionAttributesResult {
    /// Subscription attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
}

impl GetSubscriptionAttributesResult {
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

/// Output of the `SetSubscriptionAttributes` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetSubscriptionAttributesResult {}

/// Output of the `ListSubscriptions` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListSubscriptionsResult {
    /// One page of subscriptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriptions: Option<Vec<Subscription>>,

    /// Token for the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListSubscriptionsResult {
    /// The subscriptions, or an empty slice when unset.
    #[must_use]
    pub fn subscriptions(&self) -> &[Subscription] {
        self.subscriptions.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn with_subscriptions(
        mut self,
        subscriptions: impl IntoIterator<Item = Subscription>,
    ) -> Self {
        extend_list(&mut self.subscriptions, subscriptions);
        self
    }

    /// Replace the subscriptions; `None` clears the field.
    #[must_use]
    pub fn set_subscriptions(mut self, subscriptions: Option<Vec<Subscription>>) -> Self {
        self.subscriptions = subscriptions;
        self
    }

    #[must_use]
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

/// Output of the `ListSubscriptionsByTopic` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListSubscriptionsByTopicResult {
    /// One page of the topic's subscriptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriptions: Option<Vec<Subscription>>,

    /// Token for the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListSubscriptionsByTopicResult {
    /// The subscriptions, or an empty slice when unset.
    #[must_use]
    pub fn subscriptions(&self) -> &[Subscription] {
        self.subscriptions.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn with_subscriptions(
        mut self,
        subscriptions: impl IntoIterator<Item = Subscription>,
    ) -> Self {
        extend_list(&mut self.subscriptions, subscriptions);
        self
    }

    /// Replace the subscriptions; `None` clears the field.
    #[must_use]
    pub fn set_subscriptions(mut self, subscriptions: Option<Vec<Subscription>>) -> Self {
        self.subscriptions = subscriptions;
        self
    }

    #[must_use]
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

impl_shape_display!(
    SubscribeResult,
    ConfirmSubscriptionResult,
    UnsubscribeResult,
    GetSubscriptionAttributesResult,
    SetSubscriptionAttributesResult,
    ListSubscriptionsResult,
    ListSubscriptionsByTopicResult,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_detect_pending_confirmation() {
        assert!(
            SubscribeResult::default()
                .with_subscription_arn("pending confirmation")
                .is_pending_confirmation()
        );
        assert!(
            !SubscribeResult::default()
                .with_subscription_arn("arn:aws:sns:us-east-1:123456789012:t:1b2c")
                .is_pending_confirmation()
        );
    }

    #[test]
    fn test_should_append_subscription_pages() {
        let result = ListSubscriptionsResult::default()
            .with_subscriptions([Subscription::default().with_protocol("sqs")])
            .with_subscriptions([Subscription::default().with_protocol("email")])
            .with_next_token("n");
        let protocols: Vec<_> = result
            .subscriptions()
            .iter()
            .filter_map(|s| s.protocol.as_deref())
            .collect();
        assert_eq!(protocols, ["sqs", "email"]);
    }

    #[test]
    fn test_should_clear_subscriptions_to_none() {
        let result = ListSubscriptionsByTopicResult::default()
            .with_subscriptions([Subscription::default()])
            .set_subscriptions(None);
        assert!(result.subscriptions.is_none());
        assert!(result.subscriptions().is_empty());
    }
}
