//! Ordered awsQuery parameter list.
//!
//! Collections flatten the way the SNS query protocol expects:
//!
//! - lists: `Name.member.1`, `Name.member.2`, ... (structured members add
//!   `.Field` suffixes)
//! - maps: `Name.entry.1.<key-label>` plus the value's own suffixes, emitted
//!   in key order
//! - an explicitly empty collection: a single `Name=` pair
//! - an unset collection: nothing

use std::collections::BTreeMap;
use std::fmt::Write as _;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use snskit_model::{MessageAttributeValue, SnsOperation};

/// API version sent with every request.
pub const SNS_API_VERSION: &str = "2010-03-31";

/// Ordered `(key, value)` pairs of one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Start a parameter list with the `Action` and `Version` pairs.
    #[must_use]
    pub fn new(operation: SnsOperation) -> Self {
        let mut params = Self::default();
        params.push("Action", operation.as_str());
        params.push("Version", SNS_API_VERSION);
        params
    }

    /// Append one pair.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Append `key=value` when the value is set.
    pub fn push_opt(&mut self, key: &str, value: Option<&str>) {
        if let Some(v) = value {
            self.push(key, v);
        }
    }

    /// Append a boolean as `true`/`false` when set.
    pub fn push_opt_bool(&mut self, key: &str, value: Option<bool>) {
        if let Some(v) = value {
            self.push(key, if v { "true" } else { "false" });
        }
    }

    /// Append an integer when set.
    pub fn push_opt_i32(&mut self, key: &str, value: Option<i32>) {
        if let Some(v) = value {
            self.push(key, v.to_string());
        }
    }

    /// Append a list, calling `each` with the `Name.member.N` prefix of
    /// every item.
    pub fn push_list<T>(
        &mut self,
        key: &str,
        items: Option<&[T]>,
        mut each: impl FnMut(&mut Self, &str, &T),
    ) {
        let Some(items) = items else { return };
        if items.is_empty() {
            self.push(key, "");
            return;
        }
        for (i, item) in items.iter().enumerate() {
            let prefix = format!("{key}.member.{}", i + 1);
            each(self, &prefix, item);
        }
    }

    /// Append a list of strings.
    pub fn push_string_list(&mut self, key: &str, items: Option<&[String]>) {
        self.push_list(key, items, |p, prefix, item| p.push(prefix, item.as_str()));
    }

    /// Append a map, writing each key under `Name.entry.N.<key_label>` and
    /// calling `each` with the `Name.entry.N` prefix for the value.
    pub fn push_map<V>(
        &mut self,
        key: &str,
        map: Option<&BTreeMap<String, V>>,
        key_label: &str,
        mut each: impl FnMut(&mut Self, &str, &V),
    ) {
        let Some(map) = map else { return };
        if map.is_empty() {
            self.push(key, "");
            return;
        }
        for (i, (k, v)) in map.iter().enumerate() {
            let prefix = format!("{key}.entry.{}", i + 1);
            self.push(format!("{prefix}.{key_label}"), k.as_str());
            each(self, &prefix, v);
        }
    }

    /// Append a string map as `entry.N.key` / `entry.N.value` pairs.
    pub fn push_string_map(&mut self, key: &str, map: Option<&BTreeMap<String, String>>) {
        self.push_map(key, map, "key", |p, prefix, value| {
            p.push(format!("{prefix}.value"), value.as_str());
        });
    }

    /// Append message attributes as `entry.N.Name` / `entry.N.Value.*` pairs.
    pub fn push_message_attributes(
        &mut self,
        key: &str,
        map: Option<&BTreeMap<String, MessageAttributeValue>>,
    ) {
        self.push_map(key, map, "Name", |p, prefix, value| {
            p.push_opt(
                &format!("{prefix}.Value.DataType"),
                value.data_type.as_deref(),
            );
            p.push_opt(
                &format!("{prefix}.Value.StringValue"),
                value.string_value.as_deref(),
            );
            if let Some(blob) = &value.binary_value {
                p.push(format!("{prefix}.Value.BinaryValue"), STANDARD.encode(blob));
            }
        });
    }

    /// Value of the first pair with `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over the pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of pairs, including `Action` and `Version`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if there are no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render the `application/x-www-form-urlencoded` body.
    #[must_use]
    pub fn to_form_body(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    /// Render one `key=value` line per pair, unencoded.
    #[must_use]
    pub fn to_lines(&self) -> String {
        let mut out = String::new();
        for (k, v) in &self.pairs {
            let _ = writeln!(out, "{k}={v}");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_start_with_action_and_version() {
        let params = QueryParams::new(SnsOperation::ListTopics);
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(
            pairs,
            [("Action", "ListTopics"), ("Version", "2010-03-31")]
        );
    }

    #[test]
    fn test_should_index_list_members_from_one() {
        let mut params = QueryParams::default();
        let items = vec!["a".to_owned(), "b".to_owned()];
        params.push_string_list("TagKeys", Some(items.as_slice()));
        assert_eq!(params.get("TagKeys.member.1"), Some("a"));
        assert_eq!(params.get("TagKeys.member.2"), Some("b"));
        assert_eq!(params.get("TagKeys.member.0"), None);
    }

    #[test]
    fn test_should_distinguish_empty_from_unset_collections() {
        let mut params = QueryParams::default();
        params.push_string_list("Unset", None);
        params.push_string_list("Empty", Some(&[] as &[String]));
        params.push_string_map("EmptyMap", Some(&BTreeMap::new()));
        params.push_string_map("UnsetMap", None);
        assert_eq!(params.to_lines(), "Empty=\nEmptyMap=\n");
    }

    #[test]
    fn test_should_emit_map_entries_in_key_order() {
        let map: BTreeMap<String, String> = [("b", "2"), ("a", "1")]
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        let mut params = QueryParams::default();
        params.push_string_map("Attributes", Some(&map));
        assert_eq!(
            params.to_lines(),
            "Attributes.entry.1.key=a\nAttributes.entry.1.value=1\n\
             Attributes.entry.2.key=b\nAttributes.entry.2.value=2\n"
        );
    }

    #[test]
    fn test_should_encode_form_body() {
        let mut params = QueryParams::new(SnsOperation::Publish);
        params.push("Message", "hello world & more");
        assert_eq!(
            params.to_form_body(),
            "Action=Publish&Version=2010-03-31&Message=hello+world+%26+more"
        );
    }
}
