//! awsQuery request encoding.
//!
//! Every request shape implements [`QuerySerialize`], which names its
//! operation and flattens its fields into [`QueryParams`]. Member names
//! match the JSON rendering of the shape, including the camelCase names of
//! the older SMS actions.

use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http::{Method, Request};
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
use snskit_model::types::{LanguageCodeString, Tag};

use crate::error::QueryError;
use crate::params::QueryParams;

/// Content type of every awsQuery request body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

/// Trait for request shapes that encode to awsQuery parameters.
pub trait QuerySerialize {
    /// The action this request invokes.
    const OPERATION: SnsOperation;

    /// Append this request's members after the `Action`/`Version` pairs.
    fn serialize_query(&self, params: &mut QueryParams);
}

/// Encode a request into its full parameter list.
pub fn to_query<T: QuerySerialize>(request: &T) -> QueryParams {
    let mut params = QueryParams::new(T::OPERATION);
    request.serialize_query(&mut params);
    tracing::debug!(action = %T::OPERATION, pairs = params.len(), "encoded SNS query request");
    params
}

/// Build the unsigned HTTP request for `request`.
///
/// The request is a `POST` to the configured endpoint with a form-encoded
/// body. Nothing is sent.
///
/// # Errors
///
/// Returns [`QueryError::Config`] if the configuration cannot address a
/// request, or [`QueryError::Http`] if the request cannot be assembled.
pub fn build_request<T: QuerySerialize>(
    config: &SnsClientConfig,
    request: &T,
) -> Result<Request<String>, QueryError> {
    config.validate()?;
    let body = to_query(request).to_form_body();
    let uri = format!("{}/", config.endpoint());

    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
        .header(CONTENT_LENGTH, body.len())
        .body(body)?;
    Ok(req)
}

fn push_tags(params: &mut QueryParams, key: &str, tags: Option<&[Tag]>) {
    params.push_list(key, tags, |p, prefix, tag| {
        p.push_opt(&format!("{prefix}.Key"), tag.key.as_deref());
        p.push_opt(&format!("{prefix}.Value"), tag.value.as_deref());
    });
}

// ---------------------------------------------------------------------------
// Topics
// ---------------------------------------------------------------------------

impl QuerySerialize for CreateTopicRequest {
    const OPERATION: SnsOperation = SnsOperation::CreateTopic;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("Name", self.name.as_deref());
        params.push_string_map("Attributes", self.attributes.as_ref());
        push_tags(params, "Tags", self.tags.as_deref());
        params.push_opt("DataProtectionPolicy", self.data_protection_policy.as_deref());
    }
}

impl QuerySerialize for DeleteTopicRequest {
    const OPERATION: SnsOperation = SnsOperation::DeleteTopic;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("TopicArn", self.topic_arn.as_deref());
    }
}

impl QuerySerialize for GetTopicAttributesRequest {
    const OPERATION: SnsOperation = SnsOperation::GetTopicAttributes;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("TopicArn", self.topic_arn.as_deref());
    }
}

impl QuerySerialize for SetTopicAttributesRequest {
    const OPERATION: SnsOperation = SnsOperation::SetTopicAttributes;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("TopicArn", self.topic_arn.as_deref());
        params.push_opt("AttributeName", self.attribute_name.as_deref());
        params.push_opt("AttributeValue", self.attribute_value.as_deref());
    }
}

impl QuerySerialize for ListTopicsRequest {
    const OPERATION: SnsOperation = SnsOperation::ListTopics;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("NextToken", self.next_token.as_deref());
    }
}

impl QuerySerialize for AddPermissionRequest {
    const OPERATION: SnsOperation = SnsOperation::AddPermission;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("TopicArn", self.topic_arn.as_deref());
        params.push_opt("Label", self.label.as_deref());
        params.push_string_list("AWSAccountId", self.aws_account_ids.as_deref());
        params.push_string_list("ActionName", self.action_names.as_deref());
    }
}

impl QuerySerialize for RemovePermissionRequest {
    const OPERATION: SnsOperation = SnsOperation::RemovePermission;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("TopicArn", self.topic_arn.as_deref());
        params.push_opt("Label", self.label.as_deref());
    }
}

impl QuerySerialize for GetDataProtectionPolicyRequest {
    const OPERATION: SnsOperation = SnsOperation::GetDataProtectionPolicy;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("ResourceArn", self.resource_arn.as_deref());
    }
}

impl QuerySerialize for PutDataProtectionPolicyRequest {
    const OPERATION: SnsOperation = SnsOperation::PutDataProtectionPolicy;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("ResourceArn", self.resource_arn.as_deref());
        params.push_opt("DataProtectionPolicy", self.data_protection_policy.as_deref());
    }
}

// ---------------------------------------------------------------------------
// Subscriptions
// ---------------------------------------------------------------------------

impl QuerySerialize for SubscribeRequest {
    const OPERATION: SnsOperation = SnsOperation::Subscribe;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("TopicArn", self.topic_arn.as_deref());
        params.push_opt("Protocol", self.protocol.as_deref());
        params.push_opt("Endpoint", self.endpoint.as_deref());
        params.push_string_map("Attributes", self.attributes.as_ref());
        params.push_opt_bool("ReturnSubscriptionArn", self.return_subscription_arn);
    }
}

impl QuerySerialize for ConfirmSubscriptionRequest {
    const OPERATION: SnsOperation = SnsOperation::ConfirmSubscription;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("TopicArn", self.topic_arn.as_deref());
        params.push_opt("Token", self.token.as_deref());
        params.push_opt(
            "AuthenticateOnUnsubscribe",
            self.authenticate_on_unsubscribe.as_deref(),
        );
    }
}

impl QuerySerialize for UnsubscribeRequest {
    const OPERATION: SnsOperation = SnsOperation::Unsubscribe;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("SubscriptionArn", self.subscription_arn.as_deref());
    }
}

impl QuerySerialize for GetSubscriptionAttributesRequest {
    const OPERATION: SnsOperation = SnsOperation::GetSubscriptionAttributes;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("SubscriptionArn", self.subscription_arn.as_deref());
    }
}

impl QuerySerialize for SetSubscriptionAttributesRequest {
    const OPERATION: SnsOperation = SnsOperation::SetSubscriptionAttributes;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("SubscriptionArn", self.subscription_arn.as_deref());
        params.push_opt("AttributeName", self.attribute_name.as_deref());
        params.push_opt("AttributeValue", self.attribute_value.as_deref());
    }
}

impl QuerySerialize for ListSubscriptionsRequest {
    const OPERATION: SnsOperation = SnsOperation::ListSubscriptions;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("NextToken", self.next_token.as_deref());
    }
}

impl QuerySerialize for ListSubscriptionsByTopicRequest {
    const OPERATION: SnsOperation = SnsOperation::ListSubscriptionsByTopic;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("TopicArn", self.topic_arn.as_deref());
        params.push_opt("NextToken", self.next_token.as_deref());
    }
}

// ---------------------------------------------------------------------------
// Mobile push
// ---------------------------------------------------------------------------

impl QuerySerialize for CreatePlatformApplicationRequest {
    const OPERATION: SnsOperation = SnsOperation::CreatePlatformApplication;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("Name", self.name.as_deref());
        params.push_opt("Platform", self.platform.as_deref());
        params.push_string_map("Attributes", self.attributes.as_ref());
    }
}

impl QuerySerialize for DeletePlatformApplicationRequest {
    const OPERATION: SnsOperation = SnsOperation::DeletePlatformApplication;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt(
            "PlatformApplicationArn",
            self.platform_application_arn.as_deref(),
        );
    }
}

impl QuerySerialize for GetPlatformApplicationAttributesRequest {
    const OPERATION: SnsOperation = SnsOperation::GetPlatformApplicationAttributes;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt(
            "PlatformApplicationArn",
            self.platform_application_arn.as_deref(),
        );
    }
}

impl QuerySerialize for SetPlatformApplicationAttributesRequest {
    const OPERATION: SnsOperation = SnsOperation::SetPlatformApplicationAttributes;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt(
            "PlatformApplicationArn",
            self.platform_application_arn.as_deref(),
        );
        params.push_string_map("Attributes", self.attributes.as_ref());
    }
}

impl QuerySerialize for ListPlatformApplicationsRequest {
    const OPERATION: SnsOperation = SnsOperation::ListPlatformApplications;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("NextToken", self.next_token.as_deref());
    }
}

impl QuerySerialize for CreatePlatformEndpointRequest {
    const OPERATION: SnsOperation = SnsOperation::CreatePlatformEndpoint;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt(
            "PlatformApplicationArn",
            self.platform_application_arn.as_deref(),
        );
        params.push_opt("Token", self.token.as_deref());
        params.push_opt("CustomUserData", self.custom_user_data.as_deref());
        params.push_string_map("Attributes", self.attributes.as_ref());
    }
}

impl QuerySerialize for DeleteEndpointRequest {
    const OPERATION: SnsOperation = SnsOperation::DeleteEndpoint;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("EndpointArn", self.endpoint_arn.as_deref());
    }
}

impl QuerySerialize for GetEndpointAttributesRequest {
    const OPERATION: SnsOperation = SnsOperation::GetEndpointAttributes;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("EndpointArn", self.endpoint_arn.as_deref());
    }
}

impl QuerySerialize for SetEndpointAttributesRequest {
    const OPERATION: SnsOperation = SnsOperation::SetEndpointAttributes;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("EndpointArn", self.endpoint_arn.as_deref());
        params.push_string_map("Attributes", self.attributes.as_ref());
    }
}

impl QuerySerialize for ListEndpointsByPlatformApplicationRequest {
    const OPERATION: SnsOperation = SnsOperation::ListEndpointsByPlatformApplication;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt(
            "PlatformApplicationArn",
            self.platform_application_arn.as_deref(),
        );
        params.push_opt("NextToken", self.next_token.as_deref());
    }
}

// ---------------------------------------------------------------------------
// SMS
// ---------------------------------------------------------------------------

impl QuerySerialize for CheckIfPhoneNumberIsOptedOutRequest {
    const OPERATION: SnsOperation = SnsOperation::CheckIfPhoneNumberIsOptedOut;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("phoneNumber", self.phone_number.as_deref());
    }
}

impl QuerySerialize for ListPhoneNumbersOptedOutRequest {
    const OPERATION: SnsOperation = SnsOperation::ListPhoneNumbersOptedOut;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("nextToken", self.next_token.as_deref());
    }
}

impl QuerySerialize for OptInPhoneNumberRequest {
    const OPERATION: SnsOperation = SnsOperation::OptInPhoneNumber;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("phoneNumber", self.phone_number.as_deref());
    }
}

impl QuerySerialize for GetSMSAttributesRequest {
    const OPERATION: SnsOperation = SnsOperation::GetSMSAttributes;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_string_list("attributes", self.attributes.as_deref());
    }
}

impl QuerySerialize for SetSMSAttributesRequest {
    const OPERATION: SnsOperation = SnsOperation::SetSMSAttributes;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_string_map("attributes", self.attributes.as_ref());
    }
}

impl QuerySerialize for CreateSMSSandboxPhoneNumberRequest {
    const OPERATION: SnsOperation = SnsOperation::CreateSMSSandboxPhoneNumber;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("PhoneNumber", self.phone_number.as_deref());
        params.push_opt(
            "LanguageCode",
            self.language_code.as_ref().map(LanguageCodeString::as_str),
        );
    }
}

impl QuerySerialize for DeleteSMSSandboxPhoneNumberRequest {
    const OPERATION: SnsOperation = SnsOperation::DeleteSMSSandboxPhoneNumber;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("PhoneNumber", self.phone_number.as_deref());
    }
}

impl QuerySerialize for VerifySMSSandboxPhoneNumberRequest {
    const OPERATION: SnsOperation = SnsOperation::VerifySMSSandboxPhoneNumber;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("PhoneNumber", self.phone_number.as_deref());
        params.push_opt("OneTimePassword", self.one_time_password.as_deref());
    }
}

impl QuerySerialize for GetSMSSandboxAccountStatusRequest {
    const OPERATION: SnsOperation = SnsOperation::GetSMSSandboxAccountStatus;

    fn serialize_query(&self, _params: &mut QueryParams) {}
}

impl QuerySerialize for ListSMSSandboxPhoneNumbersRequest {
    const OPERATION: SnsOperation = SnsOperation::ListSMSSandboxPhoneNumbers;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("NextToken", self.next_token.as_deref());
        params.push_opt_i32("MaxResults", self.max_results);
    }
}

impl QuerySerialize for ListOriginationNumbersRequest {
    const OPERATION: SnsOperation = SnsOperation::ListOriginationNumbers;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("NextToken", self.next_token.as_deref());
        params.push_opt_i32("MaxResults", self.max_results);
    }
}

// ---------------------------------------------------------------------------
// Publishing
// ---------------------------------------------------------------------------

impl QuerySerialize for PublishRequest {
    const OPERATION: SnsOperation = SnsOperation::Publish;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("TopicArn", self.topic_arn.as_deref());
        params.push_opt("TargetArn", self.target_arn.as_deref());
        params.push_opt("PhoneNumber", self.phone_number.as_deref());
        params.push_opt("Message", self.message.as_deref());
        params.push_opt("Subject", self.subject.as_deref());
        params.push_opt("MessageStructure", self.message_structure.as_deref());
        params.push_message_attributes("MessageAttributes", self.message_attributes.as_ref());
        params.push_opt(
            "MessageDeduplicationId",
            self.message_deduplication_id.as_deref(),
        );
        params.push_opt("MessageGroupId", self.message_group_id.as_deref());
    }
}

impl QuerySerialize for PublishBatchRequest {
    const OPERATION: SnsOperation = SnsOperation::PublishBatch;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("TopicArn", self.topic_arn.as_deref());
        params.push_list(
            "PublishBatchRequestEntries",
            self.publish_batch_request_entries.as_deref(),
            |p, prefix, entry| {
                p.push_opt(&format!("{prefix}.Id"), entry.id.as_deref());
                p.push_opt(&format!("{prefix}.Message"), entry.message.as_deref());
                p.push_opt(&format!("{prefix}.Subject"), entry.subject.as_deref());
                p.push_opt(
                    &format!("{prefix}.MessageStructure"),
                    entry.message_structure.as_deref(),
                );
                p.push_message_attributes(
                    &format!("{prefix}.MessageAttributes"),
                    entry.message_attributes.as_ref(),
                );
                p.push_opt(
                    &format!("{prefix}.MessageDeduplicationId"),
                    entry.message_deduplication_id.as_deref(),
                );
                p.push_opt(
                    &format!("{prefix}.MessageGroupId"),
                    entry.message_group_id.as_deref(),
                );
            },
        );
    }
}

// ---------------------------------------------------------------------------
// Tagging
// ---------------------------------------------------------------------------

impl QuerySerialize for TagResourceRequest {
    const OPERATION: SnsOperation = SnsOperation::TagResource;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("ResourceArn", self.resource_arn.as_deref());
        push_tags(params, "Tags", self.tags.as_deref());
    }
}

impl QuerySerialize for UntagResourceRequest {
    const OPERATION: SnsOperation = SnsOperation::UntagResource;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("ResourceArn", self.resource_arn.as_deref());
        params.push_string_list("TagKeys", self.tag_keys.as_deref());
    }
}

impl QuerySerialize for ListTagsForResourceRequest {
    const OPERATION: SnsOperation = SnsOperation::ListTagsForResource;

    fn serialize_query(&self, params: &mut QueryParams) {
        params.push_opt("ResourceArn", self.resource_arn.as_deref());
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use snskit_model::types::PublishBatchRequestEntry;
    use snskit_model::MessageAttributeValue;

    use super::*;

    #[test]
    fn test_should_encode_create_topic_with_attributes_and_tags() {
        let req = CreateTopicRequest::new("orders.fifo")
            .with_attributes_entry("FifoTopic", "true")
            .expect("insert")
            .with_tags([Tag::new("env", "prod")]);
        let params = to_query(&req);
        assert_eq!(
            params.to_lines(),
            "Action=CreateTopic\nVersion=2010-03-31\nName=orders.fifo\n\
             Attributes.entry.1.key=FifoTopic\nAttributes.entry.1.value=true\n\
             Tags.member.1.Key=env\nTags.member.1.Value=prod\n"
        );
    }

    #[test]
    fn test_should_encode_publish_batch_entries_in_order() {
        let req = PublishBatchRequest::new("arn:aws:sns:us-east-1:123456789012:my-topic")
            .with_publish_batch_request_entries([
                PublishBatchRequestEntry::new("1", "first"),
                PublishBatchRequestEntry::new("2", "second")
                    .with_message_attributes_entry("n", MessageAttributeValue::number("7"))
                    .expect("insert"),
            ]);
        let params = to_query(&req);
        assert_eq!(params.get("Action"), Some("PublishBatch"));
        assert_eq!(
            params.get("PublishBatchRequestEntries.member.1.Id"),
            Some("1")
        );
        assert_eq!(
            params.get("PublishBatchRequestEntries.member.2.Message"),
            Some("second")
        );
        assert_eq!(
            params.get("PublishBatchRequestEntries.member.2.MessageAttributes.entry.1.Name"),
            Some("n")
        );
        assert_eq!(
            params.get(
                "PublishBatchRequestEntries.member.2.MessageAttributes.entry.1.Value.DataType"
            ),
            Some("Number")
        );
    }

    #[test]
    fn test_should_base64_encode_binary_attribute() {
        let req = PublishRequest::default()
            .with_target_arn("arn:aws:sns:us-east-1:123456789012:endpoint/GCM/app/1")
            .with_message("m")
            .with_message_attributes_entry(
                "blob",
                MessageAttributeValue::binary(Bytes::from_static(b"\x00\xffhi")),
            )
            .expect("insert");
        let params = to_query(&req);
        assert_eq!(
            params.get("MessageAttributes.entry.1.Value.BinaryValue"),
            Some("AP9oaQ==")
        );
        assert_eq!(params.get("MessageAttributes.entry.1.Value.StringValue"), None);
    }

    #[test]
    fn test_should_use_camel_case_names_for_legacy_sms_actions() {
        let params = to_query(&CheckIfPhoneNumberIsOptedOutRequest::new("+15555550100"));
        assert_eq!(params.get("phoneNumber"), Some("+15555550100"));

        let params = to_query(
            &GetSMSAttributesRequest::default().with_attributes(["DefaultSMSType"]),
        );
        assert_eq!(params.get("attributes.member.1"), Some("DefaultSMSType"));
    }

    #[test]
    fn test_should_render_enum_and_integer_members() {
        let params = to_query(
            &CreateSMSSandboxPhoneNumberRequest::new("+15555550100")
                .with_language_code(LanguageCodeString::PtBr),
        );
        assert_eq!(params.get("LanguageCode"), Some("pt-BR"));

        let params = to_query(&ListOriginationNumbersRequest::default().with_max_results(30));
        assert_eq!(params.get("MaxResults"), Some("30"));
        assert_eq!(params.get("NextToken"), None);
    }

    #[test]
    fn test_should_send_explicit_empty_tag_keys() {
        let req = UntagResourceRequest::new("arn:t").set_tag_keys(Some(Vec::new()));
        assert_eq!(to_query(&req).get("TagKeys"), Some(""));

        let req = UntagResourceRequest::new("arn:t");
        assert_eq!(to_query(&req).get("TagKeys"), None);
    }

    #[test]
    fn test_should_build_form_post_request() {
        let config = SnsClientConfig::builder().region("eu-central-1").build();
        let req = build_request(&config, &DeleteTopicRequest::new("arn:t")).expect("build");

        assert_eq!(req.method(), Method::POST);
        assert_eq!(req.uri(), "https://sns.eu-central-1.amazonaws.com/");
        assert_eq!(req.headers()[CONTENT_TYPE], FORM_CONTENT_TYPE);
        assert_eq!(
            req.body(),
            "Action=DeleteTopic&Version=2010-03-31&TopicArn=arn%3At"
        );
        assert_eq!(req.headers()[CONTENT_LENGTH], req.body().len().to_string().as_str());
    }

    #[test]
    fn test_should_reject_unaddressable_config() {
        let config = SnsClientConfig::builder().endpoint_url("localhost").build();
        let err = build_request(&config, &ListTopicsRequest::default()).expect_err("bad url");
        assert!(matches!(err, QueryError::Config(_)));
    }
}
