//! Operation-driven encoding of requests given as JSON.
//!
//! Callers that only know the action name at runtime (the CLI, fixtures)
//! hand over the PascalCase JSON rendering of a request; the matching shape
//! is deserialized and then encoded like any typed request.

use http::Request;
use serde::de::DeserializeOwned;
use snskit_core::SnsClientConfig;
use snskit_model::SnsOperation;
use snskit_model::input::{
    AddPermissionRequest, CheckIfPhoneNumberIsOptedOutRequest, ConfirmSubscriptionRequest,
    CreatePlatformApplicationRequest, CreatePlatformEndpointRequest,
    CreateSMSSandboxPhoneNumberRequest, CreateTopicRequest, DeleteEndpointRequest,
    DeletePlatformApplicationRequest, DeleteSMSSandboxPhoneNumberRequest, DeleteTopicRequest,
    GetDataProtectionPolicyRequest, GetEndpointAttributesRequest,
    GetPlatformApplicationAttributesRequest, GetSMSAttributesRequest,
    GetSMSSandboxAccountStatusRequest, GetSubscriptionAttributesRequest,
    GetTopicAttributesRequest, ListEndpointsByPlatformApplicationRequest,
    ListOriginationNumbersRequest, ListPhoneNumbersOptedOutRequest,
    ListPlatformApplicationsRequest, ListSMSSandboxPhoneNumbersRequest,
    ListSubscriptionsByTopicRequest, ListSubscriptionsRequest, ListTagsForResourceRequest,
    ListTopicsRequest, OptInPhoneNumberRequest, PublishBatchRequest, PublishRequest,
    PutDataProtectionPolicyRequest, RemovePermissionRequest, SetEndpointAttributesRequest,
    SetPlatformApplicationAttributesRequest, SetSMSAttributesRequest,
    SetSubscriptionAttributesRequest, SetTopicAttributesRequest, SubscribeRequest,
    TagResourceRequest, UnsubscribeRequest, UntagResourceRequest,
    VerifySMSSandboxPhoneNumberRequest,
};

use crate::error::QueryError;
use crate::params::QueryParams;
use crate::serialize::{QuerySerialize, build_request, to_query};

/// Call the generic function `$f` with the request type of `$op`.
macro_rules! with_request_type {
    ($op:expr, $f:ident($($arg:expr),* $(,)?)) => {
        match $op {
            SnsOperation::CreateTopic => $f::<CreateTopicRequest>($($arg),*),
            SnsOperation::DeleteTopic => $f::<DeleteTopicRequest>($($arg),*),
            SnsOperation::GetTopicAttributes => $f::<GetTopicAttributesRequest>($($arg),*),
            SnsOperation::SetTopicAttributes => $f::<SetTopicAttributesRequest>($($arg),*),
            SnsOperation::ListTopics => $f::<ListTopicsRequest>($($arg),*),
            SnsOperation::AddPermission => $f::<AddPermissionRequest>($($arg),*),
            SnsOperation::RemovePermission => $f::<RemovePermissionRequest>($($arg),*),
            SnsOperation::GetDataProtectionPolicy => {
                $f::<GetDataProtectionPolicyRequest>($($arg),*)
            }
            SnsOperation::PutDataProtectionPolicy => {
                $f::<PutDataProtectionPolicyRequest>($($arg),*)
            }
            SnsOperation::Subscribe => $f::<SubscribeRequest>($($arg),*),
            SnsOperation::ConfirmSubscription => $f::<ConfirmSubscriptionRequest>($($arg),*),
            SnsOperation::Unsubscribe => $f::<UnsubscribeRequest>($($arg),*),
            SnsOperation::GetSubscriptionAttributes => {
                $f::<GetSubscriptionAttributesRequest>($($arg),*)
            }
            SnsOperation::SetSubscriptionAttributes => {
                $f::<SetSubscriptionAttributesRequest>($($arg),*)
            }
            SnsOperation::ListSubscriptions => $f::<ListSubscriptionsRequest>($($arg),*),
            SnsOperation::ListSubscriptionsByTopic => {
                $f::<ListSubscriptionsByTopicRequest>($($arg),*)
            }
            SnsOperation::CreatePlatformApplication => {
                $f::<CreatePlatformApplicationRequest>($($arg),*)
            }
            SnsOperation::DeletePlatformApplication => {
                $f::<DeletePlatformApplicationRequest>($($arg),*)
            }
            SnsOperation::GetPlatformApplicationAttributes => {
                $f::<GetPlatformApplicationAttributesRequest>($($arg),*)
            }
            SnsOperation::SetPlatformApplicationAttributes => {
                $f::<SetPlatformApplicationAttributesRequest>($($arg),*)
            }
            SnsOperation::ListPlatformApplications => {
                $f::<ListPlatformApplicationsRequest>($($arg),*)
            }
            SnsOperation::CreatePlatformEndpoint => {
                $f::<CreatePlatformEndpointRequest>($($arg),*)
            }
            SnsOperation::DeleteEndpoint => $f::<DeleteEndpointRequest>($($arg),*),
            SnsOperation::GetEndpointAttributes => $f::<GetEndpointAttributesRequest>($($arg),*),
            SnsOperation::SetEndpointAttributes => $f::<SetEndpointAttributesRequest>($($arg),*),
            SnsOperation::ListEndpointsByPlatformApplication => {
                $f::<ListEndpointsByPlatformApplicationRequest>($($arg),*)
            }
            SnsOperation::CheckIfPhoneNumberIsOptedOut => {
                $f::<CheckIfPhoneNumberIsOptedOutRequest>($($arg),*)
            }
            SnsOperation::ListPhoneNumbersOptedOut => {
                $f::<ListPhoneNumbersOptedOutRequest>($($arg),*)
            }
            SnsOperation::OptInPhoneNumber => $f::<OptInPhoneNumberRequest>($($arg),*),
            SnsOperation::GetSMSAttributes => $f::<GetSMSAttributesRequest>($($arg),*),
            SnsOperation::SetSMSAttributes => $f::<SetSMSAttributesRequest>($($arg),*),
            SnsOperation::CreateSMSSandboxPhoneNumber => {
                $f::<CreateSMSSandboxPhoneNumberRequest>($($arg),*)
            }
            SnsOperation::DeleteSMSSandboxPhoneNumber => {
                $f::<DeleteSMSSandboxPhoneNumberRequest>($($arg),*)
            }
            SnsOperation::VerifySMSSandboxPhoneNumber => {
                $f::<VerifySMSSandboxPhoneNumberRequest>($($arg),*)
            }
            SnsOperation::GetSMSSandboxAccountStatus => {
                $f::<GetSMSSandboxAccountStatusRequest>($($arg),*)
            }
            SnsOperation::ListSMSSandboxPhoneNumbers => {
                $f::<ListSMSSandboxPhoneNumbersRequest>($($arg),*)
            }
            SnsOperation::ListOriginationNumbers => {
                $f::<ListOriginationNumbersRequest>($($arg),*)
            }
            SnsOperation::Publish => $f::<PublishRequest>($($arg),*),
            SnsOperation::PublishBatch => $f::<PublishBatchRequest>($($arg),*),
            SnsOperation::TagResource => $f::<TagResourceRequest>($($arg),*),
            SnsOperation::UntagResource => $f::<UntagResourceRequest>($($arg),*),
            SnsOperation::ListTagsForResource => $f::<ListTagsForResourceRequest>($($arg),*),
        }
    };
}

/// Encode the JSON rendering of an `operation` request into query parameters.
///
/// # Errors
///
/// Returns [`QueryError::Json`] if `json` is not a valid rendering of the
/// operation's request shape.
///
/// # Examples
///
/// ```
/// use snskit_model::SnsOperation;
/// use snskit_query::encode_json;
///
/// let params = encode_json(SnsOperation::DeleteTopic, br#"{"TopicArn":"arn:t"}"#).unwrap();
/// assert_eq!(params.get("Action"), Some("DeleteTopic"));
/// assert_eq!(params.get("TopicArn"), Some("arn:t"));
/// ```
pub fn encode_json(operation: SnsOperation, json: &[u8]) -> Result<QueryParams, QueryError> {
    tracing::debug!(action = %operation, bytes = json.len(), "encoding request from JSON");
    with_request_type!(operation, encode(json))
}

/// Build the unsigned HTTP request for the JSON rendering of an
/// `operation` request.
///
/// # Errors
///
/// Returns [`QueryError::Json`] for an invalid rendering, or any error of
/// [`build_request`].
pub fn build_json_request(
    config: &SnsClientConfig,
    operation: SnsOperation,
    json: &[u8],
) -> Result<Request<String>, QueryError> {
    tracing::debug!(action = %operation, bytes = json.len(), "building request from JSON");
    with_request_type!(operation, build(config, json))
}

fn parse<T: DeserializeOwned>(json: &[u8]) -> Result<T, QueryError> {
    // An empty document stands for a request with no members.
    if json.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_slice(b"{}")?);
    }
    Ok(serde_json::from_slice(json)?)
}

fn encode<T: DeserializeOwned + QuerySerialize>(json: &[u8]) -> Result<QueryParams, QueryError> {
    let request: T = parse(json)?;
    Ok(to_query(&request))
}

fn build<T: DeserializeOwned + QuerySerialize>(
    config: &SnsClientConfig,
    json: &[u8],
) -> Result<Request<String>, QueryError> {
    let request: T = parse(json)?;
    build_request(config, &request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_encode_every_operation_from_empty_object() {
        for op in SnsOperation::ALL {
            let params = encode_json(*op, b"{}").expect("empty request");
            assert_eq!(params.get("Action"), Some(op.as_str()));
            assert_eq!(params.get("Version"), Some("2010-03-31"));
            assert_eq!(params.len(), 2, "{op}");
        }
    }

    #[test]
    fn test_should_treat_blank_input_as_empty_request() {
        let params = encode_json(SnsOperation::ListTopics, b"  \n").expect("blank");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_should_encode_publish_batch_json() {
        let json = br#"{
            "TopicArn": "arn:aws:sns:us-east-1:123456789012:orders",
            "PublishBatchRequestEntries": [
                {"Id": "1", "Message": "first"},
                {"Id": "2", "Message": "second", "MessageAttributes": {
                    "kind": {"DataType": "String", "StringValue": "x"}
                }}
            ]
        }"#;
        let params = encode_json(SnsOperation::PublishBatch, json).expect("valid batch");
        assert_eq!(
            params.get("PublishBatchRequestEntries.member.2.Message"),
            Some("second")
        );
        assert_eq!(
            params.get("PublishBatchRequestEntries.member.2.MessageAttributes.entry.1.Name"),
            Some("kind")
        );
    }

    #[test]
    fn test_should_use_camel_case_for_legacy_sms_json() {
        let json = br#"{"phoneNumber": "+15555550100"}"#;
        let params =
            encode_json(SnsOperation::CheckIfPhoneNumberIsOptedOut, json).expect("valid");
        assert_eq!(params.get("phoneNumber"), Some("+15555550100"));
    }

    #[test]
    fn test_should_reject_json_of_wrong_shape() {
        let err = encode_json(SnsOperation::ListTopics, br#"{"NextToken": 5}"#)
            .expect_err("number is not a token");
        assert!(matches!(err, QueryError::Json(_)));

        let err = encode_json(
            SnsOperation::CreateSMSSandboxPhoneNumber,
            br#"{"PhoneNumber": "+1", "LanguageCode": "xx-XX"}"#,
        )
        .expect_err("unknown language code");
        assert!(matches!(err, QueryError::Json(_)));
    }

    #[test]
    fn test_should_build_http_request_from_json() {
        let config = SnsClientConfig::builder()
            .region("us-west-2")
            .endpoint_url("http://localhost:4566")
            .build();
        let req = build_json_request(
            &config,
            SnsOperation::CreateTopic,
            br#"{"Name":"orders"}"#,
        )
        .expect("request");
        assert_eq!(req.uri(), "http://localhost:4566/");
        assert_eq!(req.body(), "Action=CreateTopic&Version=2010-03-31&Name=orders");
    }
}
