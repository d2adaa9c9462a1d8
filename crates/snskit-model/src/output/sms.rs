//! SMS results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::shape::{EMPTY_STRING_MAP, extend_list, insert_entry};
use crate::types::{PhoneNumberInformation, SMSSandboxPhoneNumber};

/// Output of the `CheckIfPhoneNumberIsOptedOut` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIfPhoneNumberIsOptedOutResult {
    /// Whether the number has opted out of SMS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_opted_out: Option<bool>,
}

impl CheckIfPhoneNumberIsOptedOutResult {
    #[must_use]
    pub fn with_is_opted_out(mut self, is_opted_out: bool) -> Self {
        self.is_opted_out = Some(is_opted_out);
        self
    }
}

/// Output of the `ListPhoneNumbersOptedOut` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPhoneNumbersOptedOutResult {
    /// One page of opted-out numbers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_numbers: Option<Vec<String>>,

    /// Token for the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListPhoneNumbersOptedOutResult {
    /// The numbers, or an empty slice when unset.
    #[must_use]
    pub fn phone_numbers(&self) -> &[String] {
        self.phone_numbers.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn with_phone_numbers<I, S>(mut self, numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_list(&mut self.phone_numbers, numbers.into_iter().map(Into::into));
        self
    }

    /// Replace the numbers; `None` clears the field.
    #[must_use]
    pub fn set_phone_numbers(mut self, numbers: Option<Vec<String>>) -> Self {
        self.phone_numbers = numbers;
        self
    }

    #[must_use]
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

/// Output of the `OptInPhoneNumber` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptInPhoneNumberResult {}

/// Output of the `GetSMSAttributes` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSMSAttributesResult {
    /// Account SMS settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
}

impl GetSMSAttributesResult {
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

/// Output of the `SetSMSAttributes` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetSMSAttributesResult {}

/// Output of the `CreateSMSSandboxPhoneNumber` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateSMSSandboxPhoneNumberResult {}

/// Output of the `DeleteSMSSandboxPhoneNumber` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeleteSMSSandboxPhoneNumberResult {}

/// Output of the `VerifySMSSandboxPhoneNumber` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerifySMSSandboxPhoneNumberResult {}

/// Output of the `GetSMSSandboxAccountStatus` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetSMSSandboxAccountStatusResult {
    /// Whether the account is still in the SMS sandbox.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_in_sandbox: Option<bool>,
}

impl GetSMSSandboxAccountStatusResult {
    #[must_use]
    pub fn with_is_in_sandbox(mut self, is_in_sandbox: bool) -> Self {
        self.is_in_sandbox = Some(is_in_sandbox);
        self
    }
}

/// Output of the `ListSMSSandboxPhoneNumbers` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListSMSSandboxPhoneNumbersResult {
    /// One page of sandbox destination numbers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_numbers: Option<Vec<SMSSandboxPhoneNumber>>,

    /// Token for the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListSMSSandboxPhoneNumbersResult {
    /// The numbers, or an empty slice when unset.
    #[must_use]
    pub fn phone_numbers(&self) -> &[SMSSandboxPhoneNumber] {
        self.phone_numbers.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn with_phone_numbers(
        mut self,
        numbers: impl IntoIterator<Item = SMSSandboxPhoneNumber>,
    ) -> Self {
        extend_list(&mut self.phone_numbers, numbers);
        self
    }

    /// Replace the numbers; `None` clears the field.
    #[must_use]
    pub fn set_phone_numbers(mut self, numbers: Option<Vec<SMSSandboxPhoneNumber>>) -> Self {
        self.phone_numbers = numbers;
        self
    }

    #[must_use]
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

/// Output of the `ListOriginationNumbers` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListOriginationNumbersResult {
    /// One page of origination numbers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_numbers: Option<Vec<PhoneNumberInformation>>,

    /// Token for the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListOriginationNumbersResult {
    /// The numbers, or an empty slice when unset.
    #[must_use]
    pub fn phone_numbers(&self) -> &[PhoneNumberInformation] {
        self.phone_numbers.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn with_phone_numbers(
        mut self,
        numbers: impl IntoIterator<Item = PhoneNumberInformation>,
    ) -> Self {
        extend_list(&mut self.phone_numbers, numbers);
        self
    }

    /// Replace the numbers; `None` clears the field.
    #[must_use]
    pub fn set_phone_numbers(mut self, numbers: Option<Vec<PhoneNumberInformation>>) -> Self {
        self.phone_numbers = numbers;
        self
    }

    #[must_use]
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

impl_shape_display!(
    CheckIfPhoneNumberIsOptedOutResult,
    ListPhoneNumbersOptedOutResult,
    OptInPhoneNumberResult,
    GetSMSAttributesResult,
    SetSMSAttributesResult,
    CreateSMSSandboxPhoneNumberResult,
    DeleteSMSSandboxPhoneNumberResult,
    VerifySMSSandboxPhoneNumberResult,
    GetSMSSandboxAccountStatusResult,
    ListSMSSandboxPhoneNumbersResult,
    ListOriginationNumbersResult,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NumberCapability, RouteType, SMSSandboxPhoneNumberVerificationStatus};

    #[test]
    fn test_should_use_camel_case_for_opt_out_result() {
        let result = CheckIfPhoneNumberIsOptedOutResult::default().with_is_opted_out(true);
        assert_eq!(result.to_string(), r#"{"isOptedOut":true}"#);

        let page: ListPhoneNumbersOptedOutResult =
            serde_json::from_str(r#"{"phoneNumbers":["+15555550100"],"nextToken":"n"}"#)
                .expect("deserialize");
        assert_eq!(page.phone_numbers(), ["+15555550100"]);
        assert_eq!(page.next_token.as_deref(), Some("n"));
    }

    #[test]
    fn test_should_deserialize_sandbox_numbers_with_status() {
        let json = r#"{"PhoneNumbers":[{"PhoneNumber":"+15555550100","Status":"Verified"}]}"#;
        let page: ListSMSSandboxPhoneNumbersResult =
            serde_json::from_str(json).expect("deserialize");
        assert_eq!(
            page.phone_numbers()[0].status,
            Some(SMSSandboxPhoneNumberVerificationStatus::Verified)
        );
    }

    #[test]
    fn test_should_reject_unknown_sandbox_status() {
        let json = r#"{"PhoneNumbers":[{"PhoneNumber":"+15555550100","Status":"Expired"}]}"#;
        assert!(serde_json::from_str::<ListSMSSandboxPhoneNumbersResult>(json).is_err());
    }

    #[test]
    fn test_should_deserialize_origination_numbers() {
        let json = r#"{"PhoneNumbers":[{
            "PhoneNumber": "+15555550199",
            "Iso2CountryCode": "US",
            "RouteType": "Transactional",
            "NumberCapabilities": ["SMS", "VOICE"],
            "CreatedTimestamp": "2024-05-01T12:00:00Z"
        }]}"#;
        let page: ListOriginationNumbersResult = serde_json::from_str(json).expect("deserialize");
        let number = &page.phone_numbers()[0];
        assert_eq!(number.route_type, Some(RouteType::Transactional));
        assert!(number.supports(NumberCapability::Voice));
        assert!(!number.supports(NumberCapability::Mms));
        assert!(number.created_timestamp.is_some());
    }
}
