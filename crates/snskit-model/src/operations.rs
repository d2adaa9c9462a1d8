//! SNS operation enum.

use std::fmt;

/// All SNS API actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnsOperation {
    // Topics
    /// Create a topic (idempotent on name).
    CreateTopic,
    /// Delete a topic and its subscriptions.
    DeleteTopic,
    /// Read a topic's attributes.
    GetTopicAttributes,
    /// Set one topic attribute.
    SetTopicAttributes,
    /// List topics, one page at a time.
    ListTopics,
    /// Add a statement to a topic's access policy.
    AddPermission,
    /// Remove a statement from a topic's access policy.
    RemovePermission,
    /// Read a topic's data protection policy.
    GetDataProtectionPolicy,
    /// Replace a topic's data protection policy.
    PutDataProtectionPolicy,

    // Subscriptions
    /// Subscribe an endpoint to a topic.
    Subscribe,
    /// Confirm a pending subscription with its token.
    ConfirmSubscription,
    /// Delete a subscription.
    Unsubscribe,
    /// Read a subscription's attributes.
    GetSubscriptionAttributes,
    /// Set one subscription attribute.
    SetSubscriptionAttributes,
    /// List all subscriptions.
    ListSubscriptions,
    /// List the subscriptions of one topic.
    ListSubscriptionsByTopic,

    // Mobile push
    /// Register a push notification platform application.
    CreatePlatformApplication,
    /// Delete a platform application.
    DeletePlatformApplication,
    /// Read a platform application's attributes.
    GetPlatformApplicationAttributes,
    /// Set platform application attributes.
    SetPlatformApplicationAttributes,
    /// List platform applications.
    ListPlatformApplications,
    /// Register a device endpoint under a platform application.
    CreatePlatformEndpoint,
    /// Delete a device endpoint.
    DeleteEndpoint,
    /// Read a device endpoint's attributes.
    GetEndpointAttributes,
    /// Set device endpoint attributes.
    SetEndpointAttributes,
    /// List the endpoints of a platform application.
    ListEndpointsByPlatformApplication,

    // SMS
    /// Check whether a phone number has opted out.
    CheckIfPhoneNumberIsOptedOut,
    /// List opted-out phone numbers.
    ListPhoneNumbersOptedOut,
    /// Opt a phone number back in.
    OptInPhoneNumber,
    /// Read account SMS settings.
    GetSMSAttributes,
    /// Write account SMS settings.
    SetSMSAttributes,
    /// Add a destination number to the SMS sandbox and send it an OTP.
    CreateSMSSandboxPhoneNumber,
    /// Remove a destination number from the SMS sandbox.
    DeleteSMSSandboxPhoneNumber,
    /// Verify a sandbox number with its OTP.
    VerifySMSSandboxPhoneNumber,
    /// Check whether the account is in the SMS sandbox.
    GetSMSSandboxAccountStatus,
    /// List SMS sandbox destination numbers.
    ListSMSSandboxPhoneNumbers,
    /// List the account's origination numbers.
    ListOriginationNumbers,

    // Publishing
    /// Publish one message.
    Publish,
    /// Publish up to ten messages in one call.
    PublishBatch,

    // Tagging
    /// Add tags to a topic.
    TagResource,
    /// Remove tags from a topic.
    UntagResource,
    /// List a topic's tags.
    ListTagsForResource,
}

impl SnsOperation {
    /// Every operation, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::CreateTopic,
        Self::DeleteTopic,
        Self::GetTopicAttributes,
        Self::SetTopicAttributes,
        Self::ListTopics,
        Self::AddPermission,
        Self::RemovePermission,
        Self::GetDataProtectionPolicy,
        Self::PutDataProtectionPolicy,
        Self::Subscribe,
        Self::ConfirmSubscription,
        Self::Unsubscribe,
        Self::GetSubscriptionAttributes,
        Self::SetSubscriptionAttributes,
        Self::ListSubscriptions,
        Self::ListSubscriptionsByTopic,
        Self::CreatePlatformApplication,
        Self::DeletePlatformApplication,
        Self::GetPlatformApplicationAttributes,
        Self::SetPlatformApplicationAttributes,
        Self::ListPlatformApplications,
        Self::CreatePlatformEndpoint,
        Self::DeleteEndpoint,
        Self::GetEndpointAttributes,
        Self::SetEndpointAttributes,
        Self::ListEndpointsByPlatformApplication,
        Self::CheckIfPhoneNumberIsOptedOut,
        Self::ListPhoneNumbersOptedOut,
        Self::OptInPhoneNumber,
        Self::GetSMSAttributes,
        Self::SetSMSAttributes,
        Self::CreateSMSSandboxPhoneNumber,
        Self::DeleteSMSSandboxPhoneNumber,
        Self::VerifySMSSandboxPhoneNumber,
        Self::GetSMSSandboxAccountStatus,
        Self::ListSMSSandboxPhoneNumbers,
        Self::ListOriginationNumbers,
        Self::Publish,
        Self::PublishBatch,
        Self::TagResource,
        Self::UntagResource,
        Self::ListTagsForResource,
    ];

    /// Returns the `Action` name sent on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateTopic => "CreateTopic",
            Self::DeleteTopic => "DeleteTopic",
            Self::GetTopicAttributes => "GetTopicAttributes",
            Self::SetTopicAttributes => "SetTopicAttributes",
            Self::ListTopics => "ListTopics",
            Self::AddPermission => "AddPermission",
            Self::RemovePermission => "RemovePermission",
            Self::GetDataProtectionPolicy => "GetDataProtectionPolicy",
            Self::PutDataProtectionPolicy => "PutDataProtectionPolicy",
            Self::Subscribe => "Subscribe",
            Self::ConfirmSubscription => "ConfirmSubscription",
            Self::Unsubscribe => "Unsubscribe",
            Self::GetSubscriptionAttributes => "GetSubscriptionAttributes",
            Self::SetSubscriptionAttributes => "SetSubscriptionAttributes",
            Self::ListSubscriptions => "ListSubscriptions",
            Self::ListSubscriptionsByTopic => "ListSubscriptionsByTopic",
            Self::CreatePlatformApplication => "CreatePlatformApplication",
            Self::DeletePlatformApplication => "DeletePlatformApplication",
            Self::GetPlatformApplicationAttributes => "GetPlatformApplicationAttributes",
            Self::SetPlatformApplicationAttributes => "SetPlatformApplicationAttributes",
            Self::ListPlatformApplications => "ListPlatformApplications",
            Self::CreatePlatformEndpoint => "CreatePlatformEndpoint",
            Self::DeleteEndpoint => "DeleteEndpoint",
            Self::GetEndpointAttributes => "GetEndpointAttributes",
            Self::SetEndpointAttributes => "SetEndpointAttributes",
            Self::ListEndpointsByPlatformApplication => "ListEndpointsByPlatformApplication",
            Self::CheckIfPhoneNumberIsOptedOut => "CheckIfPhoneNumberIsOptedOut",
            Self::ListPhoneNumbersOptedOut => "ListPhoneNumbersOptedOut",
            Self::OptInPhoneNumber => "OptInPhoneNumber",
            Self::GetSMSAttributes => "GetSMSAttributes",
            Self::SetSMSAttributes => "SetSMSAttributes",
            Self::CreateSMSSandboxPhoneNumber => "CreateSMSSandboxPhoneNumber",
            Self::DeleteSMSSandboxPhoneNumber => "DeleteSMSSandboxPhoneNumber",
            Self::VerifySMSSandboxPhoneNumber => "VerifySMSSandboxPhoneNumber",
            Self::GetSMSSandboxAccountStatus => "GetSMSSandboxAccountStatus",
            Self::ListSMSSandboxPhoneNumbers => "ListSMSSandboxPhoneNumbers",
            Self::ListOriginationNumbers => "ListOriginationNumbers",
            Self::Publish => "Publish",
            Self::PublishBatch => "PublishBatch",
            Self::TagResource => "TagResource",
            Self::UntagResource => "UntagResource",
            Self::ListTagsForResource => "ListTagsForResource",
        }
    }

    /// Parse an `Action` name into an `SnsOperation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.as_str() == name)
    }

    /// Returns `true` for actions that page with a `NextToken`.
    #[must_use]
    pub fn is_paginated(&self) -> bool {
        matches!(
            self,
            Self::ListTopics
                | Self::ListSubscriptions
                | Self::ListSubscriptionsByTopic
                | Self::ListPlatformApplications
                | Self::ListEndpointsByPlatformApplication
                | Self::ListPhoneNumbersOptedOut
                | Self::ListSMSSandboxPhoneNumbers
                | Self::ListOriginationNumbers
        )
    }
}

impl fmt::Display for SnsOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_roundtrip_operation_names() {
        assert_eq!(SnsOperation::ALL.len(), 42);
        for op in SnsOperation::ALL {
            assert_eq!(SnsOperation::from_name(op.as_str()), Some(*op));
        }
    }

    #[test]
    fn test_should_reject_unknown_operation() {
        assert_eq!(SnsOperation::from_name("PublishEverything"), None);
        assert_eq!(SnsOperation::from_name("publish"), None);
    }

    #[test]
    fn test_should_flag_paginated_operations() {
        assert!(SnsOperation::ListTopics.is_paginated());
        assert!(SnsOperation::ListOriginationNumbers.is_paginated());
        assert!(!SnsOperation::Publish.is_paginated());
        assert!(!SnsOperation::ListTagsForResource.is_paginated());
    }
}
