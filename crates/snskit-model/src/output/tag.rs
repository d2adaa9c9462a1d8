//! Resource tagging results.

use serde::{Deserialize, Serialize};

use crate::shape::extend_list;
use crate::types::Tag;

/// Output of the `TagResource` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagResourceResult {}

/// Output of the `UntagResource` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UntagResourceResult {}

/// Output of the `ListTagsForResource` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsForResourceResult {
    /// The resource's tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl ListTagsForResourceResult {
    /// The tags, or an empty slice when unset.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        self.tags.as_deref().unwrap_or_default()
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

    /// Look up a tag value by key.
    #[must_use]
    pub fn tag_value(&self, key: &str) -> Option<&str> {
        self.tags()
            .iter()
            .find(|t| t.key.as_deref() == Some(key))
            .and_then(|t| t.value.as_deref())
    }
}

impl_shape_display!(
    TagResourceResult,
    UntagResourceResult,
    ListTagsForResourceResult
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_find_tag_value_by_key() {
        let result = ListTagsForResourceResult::default()
            .with_tags([Tag::new("env", "prod"), Tag::new("team", "payments")]);
        assert_eq!(result.tag_value("team"), Some("payments"));
        assert_eq!(result.tag_value("owner"), None);
    }

    #[test]
    fn test_should_render_tags_in_order() {
        let result = ListTagsForResourceResult::default()
            .with_tags([Tag::new("b", "2"), Tag::new("a", "1")]);
        assert_eq!(
            result.to_string(),
            r#"{"Tags":[{"Key":"b","Value":"2"},{"Key":"a","Value":"1"}]}"#
        );
    }
}
