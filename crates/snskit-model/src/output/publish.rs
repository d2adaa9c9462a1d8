//! Message publishing results.

use serde::{Deserialize, Serialize};

use crate::shape::extend_list;
use crate::types::{BatchResultErrorEntry, PublishBatchResultEntry};

/// Output of the `Publish` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PublishResult {
    /// The ID assigned to the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,

    /// FIFO topics: the message's sequence number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<String>,
}

impl PublishResult {
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

/// Output of the `PublishBatch` operation.
///
/// Every request entry appears in exactly one of `successful` and `failed`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PublishBatchResult {
    /// Entries that were published.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful: Option<Vec<PublishBatchResultEntry>>,

    /// Entries that were rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<Vec<BatchResultErrorEntry>>,
}

impl PublishBatchResult {
    /// The published entries, or an empty slice when unset.
    #[must_use]
    pub fn successful(&self) -> &[PublishBatchResultEntry] {
        self.successful.as_deref().unwrap_or_default()
    }

    /// The rejected entries, or an empty slice when unset.
    #[must_use]
    pub fn failed(&self) -> &[BatchResultErrorEntry] {
        self.failed.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn with_successful(
        mut self,
        entries: impl IntoIterator<Item = PublishBatchResultEntry>,
    ) -> Self {
        extend_list(&mut self.successful, entries);
        self
    }

    /// Replace the published entries; `None` clears the field.
    #[must_use]
    pub fn set_successful(mut self, entries: Option<Vec<PublishBatchResultEntry>>) -> Self {
        self.successful = entries;
        self
    }

    #[must_use]
    pub fn with_failed(mut self, entries: impl IntoIterator<Item = BatchResultErrorEntry>) -> Self {
        extend_list(&mut self.failed, entries);
        self
    }

    /// Replace the rejected entries; `None` clears the field.
    #[must_use]
    pub fn set_failed(mut self, entries: Option<Vec<BatchResultErrorEntry>>) -> Self {
        self.failed = entries;
        self
    }

    /// Returns `true` when no entry was rejected.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failed().is_empty()
    }
}

impl_shape_display!(PublishResult, PublishBatchResult);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_split_batch_outcomes() {
        let result = PublishBatchResult::default()
            .with_successful([PublishBatchResultEntry::default()
                .with_id("1")
                .with_message_id("m-1")])
            .with_failed([BatchResultErrorEntry::default()
                .with_id("2")
                .with_code("InvalidParameter")
                .with_sender_fault(true)]);
        assert_eq!(result.successful().len(), 1);
        assert_eq!(result.failed()[0].id.as_deref(), Some("2"));
        assert!(!result.all_succeeded());
    }

    #[test]
    fn test_should_treat_missing_failures_as_success() {
        let result: PublishBatchResult =
            serde_json::from_str(r#"{"Successful":[{"Id":"1","MessageId":"m"}]}"#)
                .expect("deserialize");
        assert!(result.failed.is_none());
        assert!(result.all_succeeded());
    }

    #[test]
    fn test_should_render_publish_result() {
        let result = PublishResult::default()
            .with_message_id("5d1c")
            .with_sequence_number("10000000000000000001");
        assert_eq!(
            result.to_string(),
            r#"{"MessageId":"5d1c","SequenceNumber":"10000000000000000001"}"#
        );
    }
}
