//! Shared SNS types: closed enumerations and the value shapes that appear
//! inside requests and results.
//!
//! Structs use `#[serde(rename_all = "PascalCase")]` to match the SNS member
//! names. Enum variants use idiomatic Rust naming with `#[serde(rename)]`
//! attributes carrying the exact wire strings, which differ in casing and
//! format from the variant names (`kr-KR`, `es-419`, `VOICE`).

use std::collections::BTreeMap;
use std::str::FromStr;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::shape::{EMPTY_MESSAGE_ATTRIBUTES, EMPTY_STRING_MAP, extend_list, insert_entry};

/// Reject empty input before matching an enum wire string.
fn ensure_non_empty(type_name: &'static str, value: &str) -> Result<(), ModelError> {
    if value.is_empty() {
        return Err(ModelError::EmptyEnumValue { type_name });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Language used for the verification message sent to an SMS sandbox number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageCodeString {
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "es-419")]
    Es419,
    #[serde(rename = "es-ES")]
    EsEs,
    #[serde(rename = "de-DE")]
    DeDe,
    #[serde(rename = "fr-CA")]
    FrCa,
    #[serde(rename = "fr-FR")]
    FrFr,
    #[serde(rename = "it-IT")]
    ItIt,
    #[serde(rename = "ja-JP")]
    JaJp,
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "kr-KR")]
    KrKr,
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "zh-TW")]
    ZhTw,
}

impl LanguageCodeString {
    /// Returns the SNS wire-format string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::EnGb => "en-GB",
            Self::Es419 => "es-419",
            Self::EsEs => "es-ES",
            Self::DeDe => "de-DE",
            Self::FrCa => "fr-CA",
            Self::FrFr => "fr-FR",
            Self::ItIt => "it-IT",
            Self::JaJp => "ja-JP",
            Self::PtBr => "pt-BR",
            Self::KrKr => "kr-KR",
            Self::ZhCn => "zh-CN",
            Self::ZhTw => "zh-TW",
        }
    }

    /// All variants, in declaration order.
    #[must_use]
    pub fn values() -> &'static [Self] {
        &[
            Self::EnUs,
            Self::EnGb,
            Self::Es419,
            Self::EsEs,
            Self::DeDe,
            Self::FrCa,
            Self::FrFr,
            Self::ItIt,
            Self::JaJp,
            Self::PtBr,
            Self::KrKr,
            Self::ZhCn,
            Self::ZhTw,
        ]
    }

    /// Parse a wire string. Fails on empty or unrecognized input.
    pub fn from_value(value: &str) -> Result<Self, ModelError> {
        ensure_non_empty("LanguageCodeString", value)?;
        Self::values()
            .iter()
            .copied()
            .find(|v| v.as_str() == value)
            .ok_or_else(|| ModelError::InvalidEnumValue {
                type_name: "LanguageCodeString",
                value: value.to_owned(),
            })
    }
}

impl std::fmt::Display for LanguageCodeString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageCodeString {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_value(s)
    }
}

impl TryFrom<&str> for LanguageCodeString {
    type Error = ModelError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::from_value(s)
    }
}

/// Messaging capability of an origination number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumberCapability {
    #[serde(rename = "SMS")]
    Sms,
    #[serde(rename = "MMS")]
    Mms,
    #[serde(rename = "VOICE")]
    Voice,
}

impl NumberCapability {
    /// Returns the SNS wire-format string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sms => "SMS",
            Self::Mms => "MMS",
            Self::Voice => "VOICE",
        }
    }

    /// All variants, in declaration order.
    #[must_use]
    pub fn values() -> &'static [Self] {
        &[Self::Sms, Self::Mms, Self::Voice]
    }

    /// Parse a wire string. Fails on empty or unrecognized input.
    pub fn from_value(value: &str) -> Result<Self, ModelError> {
        ensure_non_empty("NumberCapability", value)?;
        match value {
            "SMS" => Ok(Self::Sms),
            "MMS" => Ok(Self::Mms),
            "VOICE" => Ok(Self::Voice),
            _ => Err(ModelError::InvalidEnumValue {
                type_name: "NumberCapability",
                value: value.to_owned(),
            }),
        }
    }
}

impl std::fmt::Display for NumberCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumberCapability {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_value(s)
    }
}

impl TryFrom<&str> for NumberCapability {
    type Error = ModelError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::from_value(s)
    }
}

/// SMS route an origination number uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteType {
    Transactional,
    Promotional,
    Premium,
}

impl RouteType {
    /// Returns the SNS wire-format string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transactional => "Transactional",
            Self::Promotional => "Promotional",
            Self::Premium => "Premium",
        }
    }

    /// All variants, in declaration order.
    #[must_use]
    pub fn values() -> &'static [Self] {
        &[Self::Transactional, Self::Promotional, Self::Premium]
    }

    /// Parse a wire string. Fails on empty or unrecognized input.
    pub fn from_value(value: &str) -> Result<Self, ModelError> {
        ensure_non_empty("RouteType", value)?;
        match value {
            "Transactional" => Ok(Self::Transactional),
            "Promotional" => Ok(Self::Promotional),
            "Premium" => Ok(Self::Premium),
            _ => Err(ModelError::InvalidEnumValue {
                type_name: "RouteType",
                value: value.to_owned(),
            }),
        }
    }
}

impl std::fmt::Display for RouteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_value(s)
    }
}

impl TryFrom<&str> for RouteType {
    type Error = ModelError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::from_value(s)
    }
}

/// Verification state of a phone number in the SMS sandbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SMSSandboxPhoneNumberVerificationStatus {
    Pending,
    Verified,
}

impl SMSSandboxPhoneNumberVerificationStatus {
    /// Returns the SNS wire-format string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Verified => "Verified",
        }
    }

    /// All variants, in declaration order.
    #[must_use]
    pub fn values() -> &'static [Self] {
        &[Self::Pending, Self::Verified]
    }

    /// Parse a wire string. Fails on empty or unrecognized input.
    pub fn from_value(value: &str) -> Result<Self, ModelError> {
        ensure_non_empty("SMSSandboxPhoneNumberVerificationStatus", value)?;
        match value {
            "Pending" => Ok(Self::Pending),
            "Verified" => Ok(Self::Verified),
            _ => Err(ModelError::InvalidEnumValue {
                type_name: "SMSSandboxPhoneNumberVerificationStatus",
                value: value.to_owned(),
            }),
        }
    }
}

impl std::fmt::Display for SMSSandboxPhoneNumberVerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SMSSandboxPhoneNumberVerificationStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_value(s)
    }
}

impl TryFrom<&str> for SMSSandboxPhoneNumberVerificationStatus {
    type Error = ModelError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::from_value(s)
    }
}

// ---------------------------------------------------------------------------
// Topics and subscriptions
// ---------------------------------------------------------------------------

/// A topic, identified only by its ARN.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Topic {
    /// The topic's ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_arn: Option<String>,
}

impl Topic {
    #[must_use]
    pub fn with_topic_arn(mut self, topic_arn: impl Into<String>) -> Self {
        self.topic_arn = Some(topic_arn.into());
        self
    }
}

/// A binding of one delivery endpoint to a topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Subscription {
    /// The subscription's ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_arn: Option<String>,

    /// The subscription's owner (account ID).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    /// The delivery protocol (`http`, `https`, `email`, `sqs`, `lambda`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,

    /// The delivery address; its format depends on the protocol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// The ARN of the subscription's topic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_arn: Option<String>,
}

impl Subscription {
    #[must_use]
    pub fn with_subscription_arn(mut self, subscription_arn: impl Into<String>) -> Self {
        self.subscription_arn = Some(subscription_arn.into());
        self
    }

    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
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
    pub fn with_topic_arn(mut self, topic_arn: impl Into<String>) -> Self {
        self.topic_arn = Some(topic_arn.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Mobile push
// ---------------------------------------------------------------------------

/// A push notification platform registration (APNS, GCM/FCM, ADM, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlatformApplication {
    /// The platform application's ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_application_arn: Option<String>,

    /// Platform application attributes (`PlatformCredential`, `EventEndpointCreated`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
}

impl PlatformApplication {
    /// The attributes, or an empty map when unset.
    #[must_use]
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        self.attributes.as_ref().unwrap_or(&EMPTY_STRING_MAP)
    }

    #[must_use]
    pub fn with_platform_application_arn(
        mut self,
        platform_application_arn: impl Into<String>,
    ) -> Self {
        self.platform_application_arn = Some(platform_application_arn.into());
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

/// A device registered under a platform application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Endpoint {
    /// The endpoint's ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_arn: Option<String>,

    /// Endpoint attributes (`CustomUserData`, `Enabled`, `Token`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
}

impl Endpoint {
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

    /// Returns `true` unless the `Enabled` attribute is explicitly `false`.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.attributes()
            .get("Enabled")
            .is_none_or(|v| !v.eq_ignore_ascii_case("false"))
    }
}

// ---------------------------------------------------------------------------
// SMS
// ---------------------------------------------------------------------------

/// An origination phone number owned by the account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PhoneNumberInformation {
    /// When the number was provisioned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<DateTime<Utc>>,

    /// The phone number in E.164 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// The number's status (`ACTIVE`, `PENDING`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Two-character ISO country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso2_country_code: Option<String>,

    /// The SMS route the number uses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_type: Option<RouteType>,

    /// What the number can send.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_capabilities: Option<Vec<NumberCapability>>,
}

impl PhoneNumberInformation {
    /// The capabilities, or an empty slice when unset.
    #[must_use]
    pub fn number_capabilities(&self) -> &[NumberCapability] {
        self.number_capabilities.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn with_created_timestamp(mut self, created_timestamp: DateTime<Utc>) -> Self {
        self.created_timestamp = Some(created_timestamp);
        self
    }

    #[must_use]
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn with_iso2_country_code(mut self, iso2_country_code: impl Into<String>) -> Self {
        self.iso2_country_code = Some(iso2_country_code.into());
        self
    }

    #[must_use]
    pub fn with_route_type(mut self, route_type: RouteType) -> Self {
        self.route_type = Some(route_type);
        self
    }

    /// Append capabilities, creating the list if it is unset.
    #[must_use]
    pub fn with_number_capabilities(
        mut self,
        capabilities: impl IntoIterator<Item = NumberCapability>,
    ) -> Self {
        extend_list(&mut self.number_capabilities, capabilities);
        self
    }

    /// Replace the capabilities; `None` clears the field.
    #[must_use]
    pub fn set_number_capabilities(mut self, capabilities: Option<Vec<NumberCapability>>) -> Self {
        self.number_capabilities = capabilities;
        self
    }

    /// Returns `true` if the number lists `capability`.
    #[must_use]
    pub fn supports(&self, capability: NumberCapability) -> bool {
        self.number_capabilities().contains(&capability)
    }
}

/// A destination phone number in the SMS sandbox.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SMSSandboxPhoneNumber {
    /// The destination phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// Whether the number has been verified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SMSSandboxPhoneNumberVerificationStatus>,
}

impl SMSSandboxPhoneNumber {
    #[must_use]
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: SMSSandboxPhoneNumberVerificationStatus) -> Self {
        self.status = Some(status);
        self
    }
}

// ---------------------------------------------------------------------------
// Publishing
// ---------------------------------------------------------------------------

/// A typed message attribute.
///
/// `data_type` is `String`, `String.Array`, `Number` or `Binary`, optionally
/// followed by a custom suffix (`Number.float`). Exactly one of `string_value`
/// and `binary_value` is expected to be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MessageAttributeValue {
    /// The attribute's data type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,

    /// Value for `String`, `String.Array` and `Number` types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,

    /// Value for the `Binary` type (base64-encoded on the wire).
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::shape::base64_blob"
    )]
    pub binary_value: Option<Bytes>,
}

impl MessageAttributeValue {
    /// A `String` attribute.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::default()
            .with_data_type("String")
            .with_string_value(value)
    }

    /// A `Number` attribute. SNS keeps numbers string-encoded.
    #[must_use]
    pub fn number(value: impl Into<String>) -> Self {
        Self::default()
            .with_data_type("Number")
            .with_string_value(value)
    }

    /// A `Binary` attribute.
    #[must_use]
    pub fn binary(value: impl Into<Bytes>) -> Self {
        Self::default()
            .with_data_type("Binary")
            .with_binary_value(value)
    }

    #[must_use]
    pub fn with_data_type(mut self, data_type: impl Into<String>) -> Self {
        self.data_type = Some(data_type.into());
        self
    }

    #[must_use]
    pub fn with_string_value(mut self, string_value: impl Into<String>) -> Self {
        self.string_value = Some(string_value.into());
        self
    }

    #[must_use]
    pub fn with_binary_value(mut self, binary_value: impl Into<Bytes>) -> Self {
        self.binary_value = Some(binary_value.into());
        self
    }
}

/// One message of a `PublishBatch` request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PublishBatchRequestEntry {
    /// Batch-unique identifier echoed in the result entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

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

impl PublishBatchRequestEntry {
    /// An entry with the given batch ID and message body.
    #[must_use]
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::default().with_id(id).with_message(message)
    }

    /// The message attributes, or an empty map when unset.
    #[must_use]
    pub fn message_attributes(&self) -> &BTreeMap<String, MessageAttributeValue> {
        self.message_attributes
            .as_ref()
            .unwrap_or(&EMPTY_MESSAGE_ATTRIBUTES)
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
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

/// A successfully published batch entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PublishBatchResultEntry {
    /// The request entry's `Id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The ID assigned to the published message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,

    /// FIFO topics: the message's sequence number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<String>,
}

impl PublishBatchResultEntry {
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = Some(message_id.into());
        self
    }

    #[must_use]
    pub fn with_sequence_number(mut self, sequence_number: impl Into<String>) -> Self {
        self.sequence_number = Some(sequence_number.into());
        self
    }
}

/// A batch entry the service failed to publish.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchResultErrorEntry {
    /// The request entry's `Id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Error code for this entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Error message for this entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Whether the caller caused the failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_fault: Option<bool>,
}

impl BatchResultErrorEntry {
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_sender_fault(mut self, sender_fault: bool) -> Self {
        self.sender_fault = Some(sender_fault);
        self
    }
}

// ---------------------------------------------------------------------------
// Tagging
// ---------------------------------------------------------------------------

/// A resource tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    /// Tag key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Tag value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Tag {
    /// A tag with both key and value set.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::default().with_key(key).with_value(value)
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl_shape_display!(
    Topic,
    Subscription,
    PlatformApplication,
    Endpoint,
    PhoneNumberInformation,
    SMSSandboxPhoneNumber,
    MessageAttributeValue,
    PublishBatchRequestEntry,
    PublishBatchResultEntry,
    BatchResultErrorEntry,
    Tag,
);

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_should_roundtrip_every_enum_variant() {
        for v in LanguageCodeString::values() {
            assert_eq!(LanguageCodeString::from_value(v.as_str()), Ok(*v));
        }
        for v in NumberCapability::values() {
            assert_eq!(v.to_string().parse::<NumberCapability>(), Ok(*v));
        }
        for v in RouteType::values() {
            assert_eq!(RouteType::try_from(v.as_str()), Ok(*v));
        }
        for v in SMSSandboxPhoneNumberVerificationStatus::values() {
            assert_eq!(
                SMSSandboxPhoneNumberVerificationStatus::from_value(&v.to_string()),
                Ok(*v)
            );
        }
    }

    #[test]
    fn test_should_parse_en_us_language_code() {
        assert_eq!(
            LanguageCodeString::from_value("en-US"),
            Ok(LanguageCodeString::EnUs)
        );
        assert_eq!(LanguageCodeString::EnUs.to_string(), "en-US");
        assert_eq!(LanguageCodeString::KrKr.as_str(), "kr-KR");
        assert_eq!(LanguageCodeString::Es419.as_str(), "es-419");
    }

    #[test]
    fn test_should_reject_unknown_enum_values() {
        assert_eq!(
            LanguageCodeString::from_value("not-a-real-value"),
            Err(ModelError::InvalidEnumValue {
                type_name: "LanguageCodeString",
                value: "not-a-real-value".to_owned(),
            })
        );
        assert!(NumberCapability::from_value("sms").is_err());
        assert!(RouteType::from_value("transactional").is_err());
        assert!(SMSSandboxPhoneNumberVerificationStatus::from_value("Done").is_err());
    }

    #[test]
    fn test_should_reject_empty_enum_values() {
        assert_eq!(
            RouteType::from_value(""),
            Err(ModelError::EmptyEnumValue {
                type_name: "RouteType"
            })
        );
        assert!(LanguageCodeString::from_value("").is_err());
    }

    #[test]
    fn test_should_serialize_enum_wire_strings() {
        let json = serde_json::to_string(&LanguageCodeString::ZhTw).expect("serialize");
        assert_eq!(json, r#""zh-TW""#);
        let json = serde_json::to_string(&NumberCapability::Voice).expect("serialize");
        assert_eq!(json, r#""VOICE""#);
        assert!(serde_json::from_str::<RouteType>(r#""Bulk""#).is_err());
    }

    #[test]
    fn test_should_compare_shapes_structurally() {
        let a = Subscription::default()
            .with_topic_arn("arn:aws:sns:us-east-1:123456789012:orders")
            .with_protocol("sqs");
        let b = Subscription::default()
            .with_topic_arn("arn:aws:sns:us-east-1:123456789012:orders")
            .with_protocol("sqs");
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a.clone());
        assert!(set.contains(&b));

        let c = b.with_protocol("https");
        assert_ne!(a, c);
        assert!(!set.contains(&c));
    }

    #[test]
    fn test_should_treat_unset_and_empty_lists_differently() {
        let unset = PhoneNumberInformation::default();
        let empty = PhoneNumberInformation::default().set_number_capabilities(Some(vec![]));
        assert!(unset.number_capabilities().is_empty());
        assert!(empty.number_capabilities().is_empty());
        assert_ne!(unset, empty);
        assert_eq!(empty.set_number_capabilities(None), unset);
    }

    #[test]
    fn test_should_append_number_capabilities() {
        let info = PhoneNumberInformation::default()
            .with_number_capabilities([NumberCapability::Sms])
            .with_number_capabilities([NumberCapability::Voice]);
        assert_eq!(
            info.number_capabilities(),
            &[NumberCapability::Sms, NumberCapability::Voice]
        );
        assert!(info.supports(NumberCapability::Voice));
        assert!(!info.supports(NumberCapability::Mms));
    }

    #[test]
    fn test_should_manage_attribute_entries() {
        let mut endpoint = Endpoint::default()
            .with_endpoint_arn("arn:aws:sns:us-east-1:123456789012:endpoint/GCM/app/1")
            .with_attributes_entry("Enabled", "false")
            .expect("first insert");
        assert!(!endpoint.is_enabled());

        let err = endpoint
            .add_attributes_entry("Enabled", "true")
            .expect_err("duplicate key");
        assert_eq!(
            err,
            ModelError::DuplicateKey {
                field: "Attributes",
                key: "Enabled".to_owned(),
            }
        );

        endpoint.clear_attributes_entries();
        assert!(endpoint.attributes.is_none());
        assert!(endpoint.attributes().is_empty());
        assert!(endpoint.is_enabled());
    }

    #[test]
    fn test_should_display_only_set_fields() {
        let topic = Topic::default();
        assert_eq!(topic.to_string(), "{}");

        let tag = Tag::new("team", "core");
        assert_eq!(tag.to_string(), r#"{"Key":"team","Value":"core"}"#);
    }

    #[test]
    fn test_should_encode_binary_attribute_as_base64() {
        let attr = MessageAttributeValue::binary(Bytes::from_static(b"hi"));
        let json = serde_json::to_string(&attr).expect("serialize");
        assert_eq!(json, r#"{"DataType":"Binary","BinaryValue":"aGk="}"#);
        let parsed: MessageAttributeValue = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, attr);
    }

    #[test]
    fn test_should_deserialize_phone_number_information() {
        let json = r#"{
            "CreatedTimestamp": "2024-03-01T12:00:00Z",
            "PhoneNumber": "+15550100",
            "Status": "ACTIVE",
            "Iso2CountryCode": "US",
            "RouteType": "Transactional",
            "NumberCapabilities": ["SMS", "VOICE"]
        }"#;
        let info: PhoneNumberInformation = serde_json::from_str(json).expect("deserialize");
        assert_eq!(info.route_type, Some(RouteType::Transactional));
        assert_eq!(info.iso2_country_code.as_deref(), Some("US"));
        assert_eq!(
            info.number_capabilities(),
            &[NumberCapability::Sms, NumberCapability::Voice]
        );
        assert!(info.created_timestamp.is_some());
    }
}
