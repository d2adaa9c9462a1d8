//! Resource tagging requests.

use serde::{Deserialize, Serialize};

use crate::shape::extend_list;
use crate::types::Tag;

/// Input for the `TagResource` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagResourceRequest {
    /// The ARN of the topic to tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,

    /// Tags to add or overwrite.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl TagResourceRequest {
    #[must_use]
    pub fn new(resource_arn: impl Into<String>) -> Self {
        Self::default().with_resource_arn(resource_arn)
    }

    /// The tags, or an empty slice when unset.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        self.tags.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn with_resource_arn(mut self, resource_arn: impl Into<String>) -> Self {
        self.resource_arn = Some(resource_arn.into());
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        extend_list(&mut self.tags, tags);
        self
    }

    /// Replace the tags; `None` clears the field.
    #[must_use]
    pub fn set_tags(mut self, tags: Option<Vec<Tag>>) -> Self {
        self.tags = tags;
        self
    }
}

/// Input for the `UntagResource` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UntagResourceRequest {
    /// The ARN of the topic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,

    /// Keys of the tags to remove.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_keys: Option<Vec<String>>,
}

impl UntagResourceRequest {
    #[must_use]
    pub fn new(resource_arn: impl Into<String>) -> Self {
        Self::default().with_resource_arn(resource_arn)
    }

    /// The tag keys, or an empty slice when unset.
    #[must_use]
    pub fn tag_keys(&self) -> &[String] {
        self.tag_keys.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn with_resource_arn(mut self, resource_arn: impl Into<String>) -> Self {
        self.resource_arn = Some(resource_arn.into());
        self
    }

    #[must_use]
    pub fn with_tag_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_list(&mut self.tag_keys, keys.into_iter().map(Into::into));
        self
    }

    /// Replace the tag keys; `None` clears the field.
    #[must_use]
    pub fn set_tag_keys(mut self, keys: Option<Vec<String>>) -> Self {
        self.tag_keys = keys;
        self
    }
}

/// Input for the `ListTagsForResource` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsForResourceRequest {
    /// The ARN of the topic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
}

impl ListTagsForResourceRequest {
    #[must_use]
    pub fn new(resource_arn: impl Into<String>) -> Self {
        Self::default().with_resource_arn(resource_arn)
    }

    #[must_use]
    pub fn with_resource_arn(mut self, resource_arn: impl Into<String>) -> Self {
        self.resource_arn = Some(resource_arn.into());
        self
    }
}

impl_shape_display!(
    TagResourceRequest,
    UntagResourceRequest,
    ListTagsForResourceRequest
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_append_tags_across_calls() {
        let req = TagResourceRequest::new("arn:aws:sns:us-east-1:123456789012:t")
            .with_tags([Tag::new("env", "prod")])
            .with_tags([Tag::new("team", "payments")]);
        assert_eq!(req.tags().len(), 2);
        assert_eq!(req.tags()[1].key.as_deref(), Some("team"));
    }

    #[test]
    fn test_should_distinguish_unset_from_empty_tag_keys() {
        let unset = UntagResourceRequest::new("arn:t");
        let empty = UntagResourceRequest::new("arn:t").set_tag_keys(Some(Vec::new()));
        assert!(unset.tag_keys().is_empty());
        assert!(empty.tag_keys().is_empty());
        assert_ne!(unset, empty);
        assert!(empty.to_string().contains(r#""TagKeys":[]"#));
        assert!(!unset.to_string().contains("TagKeys"));
    }
}
