//! SMS requests: opt-out management, account settings, and the sandbox.
//!
//! The opt-out and account-settings actions predate the PascalCase
//! convention and keep camelCase member names on the wire.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::shape::{EMPTY_STRING_MAP, extend_list, insert_entry};
use crate::types::LanguageCodeString;

/// Input for the `CheckIfPhoneNumberIsOptedOut` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIfPhoneNumberIsOptedOutRequest {
    /// The phone number to check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl CheckIfPhoneNumberIsOptedOutRequest {
    #[must_use]
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self::default().with_phone_number(phone_number)
    }

    #[must_use]
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }
}

/// Input for the `ListPhoneNumbersOptedOut` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPhoneNumbersOptedOutRequest {
    /// Continuation token from a previous result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListPhoneNumbersOptedOutRequest {
    #[must_use]
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

/// Input for the `OptInPhoneNumber` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptInPhoneNumberRequest {
    /// The phone number to opt back in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl OptInPhoneNumberRequest {
    #[must_use]
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self::default().with_phone_number(phone_number)
    }

    #[must_use]
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }
}

/// Input for the `GetSMSAttributes` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSMSAttributesRequest {
    /// Attribute names to read. Unset reads every attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<String>>,
}

impl GetSMSAttributesRequest {
    /// The requested names, or an empty slice when unset.
    #[must_use]
    pub fn attributes(&self) -> &[String] {
        self.attributes.as_deref().unwrap_or_default()
    }

    /// Append attribute names to the request.
    #[must_use]
    pub fn with_attributes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_list(&mut self.attributes, names.into_iter().map(Into::into));
        self
    }

    /// Replace the attribute names; `None` clears the field.
    #[must_use]
    pub fn set_attributes(mut self, names: Option<Vec<String>>) -> Self {
        self.attributes = names;
        self
    }
}

/// Input for the `SetSMSAttributes` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSMSAttributesRequest {
    /// Account settings (`DefaultSMSType`, `MonthlySpendLimit`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
}

impl SetSMSAttributesRequest {
    /// The settings, or an empty map when unset.
    #[must_use]
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        self.attributes.as_ref().unwrap_or(&EMPTY_STRING_MAP)
    }

    /// Replace the settings; `None` clears the field.
    #[must_use]
    pub fn set_attributes(mut self, attributes: Option<BTreeMap<String, String>>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Add one setting. Fails if `key` is already present.
    pub fn add_attributes_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), ModelError> {
        insert_entry(&mut self.attributes, "attributes", key.into(), value.into())
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

    /// Reset the settings to unset.
    pub fn clear_attributes_entries(&mut self) {
        self.attributes = None;
    }
}

/// Input for the `CreateSMSSandboxPhoneNumber` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateSMSSandboxPhoneNumberRequest {
    /// Destination number in E.164 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// Language of the verification message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCodeString>,
}

impl CreateSMSSandboxPhoneNumberRequest {
    #[must_use]
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self::default().with_phone_number(phone_number)
    }

    #[must_use]
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    #[must_use]
    pub fn with_language_code(mut self, language_code: LanguageCodeString) -> Self {
        self.language_code = Some(language_code);
        self
    }
}

/// Input for the `DeleteSMSSandboxPhoneNumber` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteSMSSandboxPhoneNumberRequest {
    /// Destination number to remove.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl DeleteSMSSandboxPhoneNumberRequest {
    #[must_use]
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self::default().with_phone_number(phone_number)
    }

    #[must_use]
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }
}

/// Input for the `VerifySMSSandboxPhoneNumber` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VerifySMSSandboxPhoneNumberRequest {
    /// Destination number being verified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// The one-time password sent to the number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_time_password: Option<String>,
}

impl VerifySMSSandboxPhoneNumberRequest {
    #[must_use]
    pub fn new(phone_number: impl Into<String>, one_time_password: impl Into<String>) -> Self {
        Self::default()
            .with_phone_number(phone_number)
            .with_one_time_password(one_time_password)
    }

    #[must_use]
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    #[must_use]
    pub fn with_one_time_password(mut self, otp: impl Into<String>) -> Self {
        self.one_time_password = Some(otp.into());
        self
    }
}

/// Input for the `GetSMSSandboxAccountStatus` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GetSMSSandboxAccountStatusRequest {}

/// Input for the `ListSMSSandboxPhoneNumbers` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListSMSSandboxPhoneNumbersRequest {
    /// Continuation token from a previous result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    /// Page size (1-100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl ListSMSSandboxPhoneNumbersRequest {
    #[must_use]
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }

    #[must_use]
    pub fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

/// Input for the `ListOriginationNumbers` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListOriginationNumbersRequest {
    /// Continuation token from a previous result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    /// Page size (1-30).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl ListOriginationNumbersRequest {
    #[must_use]
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }

    #[must_use]
    pub fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

impl_shape_display!(
    CheckIfPhoneNumberIsOptedOutRequest,
    ListPhoneNumbersOptedOutRequest,
    OptInPhoneNumberRequest,
    GetSMSAttributesRequest,
    SetSMSAttributesRequest,
    CreateSMSSandboxPhoneNumberRequest,
    DeleteSMSSandboxPhoneNumberRequest,
    VerifySMSSandboxPhoneNumberRequest,
    GetSMSSandboxAccountStatusRequest,
    ListSMSSandboxPhoneNumbersRequest,
    ListOriginationNumbersRequest,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_use_camel_case_for_opt_out_members() {
        let req = CheckIfPhoneNumberIsOptedOutRequest::new("+15555550100");
        assert_eq!(req.to_string(), r#"{"phoneNumber":"+15555550100"}"#);

        let page = ListPhoneNumbersOptedOutRequest::default().with_next_token("n1");
        assert_eq!(page.to_string(), r#"{"nextToken":"n1"}"#);
    }

    #[test]
    fn test_should_accumulate_sms_attribute_names() {
        let req = GetSMSAttributesRequest::default()
            .with_attributes(["DefaultSMSType"])
            .with_attributes(vec!["MonthlySpendLimit".to_owned()]);
        assert_eq!(req.attributes(), ["DefaultSMSType", "MonthlySpendLimit"]);
        assert_eq!(
            req.to_string(),
            r#"{"attributes":["DefaultSMSType","MonthlySpendLimit"]}"#
        );
    }

    #[test]
    fn test_should_reject_duplicate_sms_setting() {
        let mut req = SetSMSAttributesRequest::default();
        req.add_attributes_entry("DefaultSMSType", "Transactional")
            .expect("insert");
        let err = req
            .add_attributes_entry("DefaultSMSType", "Promotional")
            .expect_err("duplicate");
        assert_eq!(
            err.to_string(),
            "duplicated key (DefaultSMSType) provided for attributes"
        );
    }

    #[test]
    fn test_should_serialize_language_code_as_wire_value() {
        let req = CreateSMSSandboxPhoneNumberRequest::new("+15555550100")
            .with_language_code(LanguageCodeString::EnUs);
        assert_eq!(
            req.to_string(),
            r#"{"PhoneNumber":"+15555550100","LanguageCode":"en-US"}"#
        );
    }

    #[test]
    fn test_should_render_empty_request_as_empty_object() {
        assert_eq!(GetSMSSandboxAccountStatusRequest::default().to_string(), "{}");
    }
}
