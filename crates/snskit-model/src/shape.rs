//! Helpers shared by every generated shape: collection accessors, the
//! duplicate-checked map insert, blob serde, and the JSON `Display` impl.

use std::collections::BTreeMap;

use crate::error::ModelError;
use crate::types::MessageAttributeValue;

/// Returned by string-map getters when the field is `None`.
pub(crate) static EMPTY_STRING_MAP: BTreeMap<String, String> = BTreeMap::new();

/// Returned by message-attribute getters when the field is `None`.
pub(crate) static EMPTY_MESSAGE_ATTRIBUTES: BTreeMap<String, MessageAttributeValue> =
    BTreeMap::new();

/// Append `items` to an optional list, creating the list if it is `None`.
pub(crate) fn extend_list<T>(list: &mut Option<Vec<T>>, items: impl IntoIterator<Item = T>) {
    list.get_or_insert_with(Vec::new).extend(items);
}

/// Insert `key` into an optional map, creating the map if it is `None`.
///
/// Fails without modifying the map if `key` is already present.
pub(crate) fn insert_entry<V>(
    map: &mut Option<BTreeMap<String, V>>,
    field: &'static str,
    key: String,
    value: V,
) -> Result<(), ModelError> {
    let map = map.get_or_insert_with(BTreeMap::new);
    if map.contains_key(&key) {
        return Err(ModelError::DuplicateKey { field, key });
    }
    map.insert(key, value);
    Ok(())
}

/// Base64 serde for optional binary fields, matching the SNS JSON encoding.
pub(crate) mod base64_blob {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use bytes::Bytes;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub(crate) fn serialize<S: Serializer>(
        value: &Option<Bytes>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(data) => serializer.serialize_some(&STANDARD.encode(data)),
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Bytes>, D::Error> {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        encoded
            .map(|s| STANDARD.decode(s).map(Bytes::from).map_err(de::Error::custom))
            .transpose()
    }
}

/// Implement `Display` as the compact PascalCase JSON rendering of a shape.
///
/// Unset fields are skipped by the serde attributes on each shape, so the
/// output only names fields that hold a value.
macro_rules! impl_shape_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ::std::fmt::Display for $ty {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    let json = ::serde_json::to_string(self).map_err(|_| ::std::fmt::Error)?;
                    f.write_str(&json)
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_create_list_on_first_extend() {
        let mut list: Option<Vec<u32>> = None;
        extend_list(&mut list, [1, 2]);
        extend_list(&mut list, [3]);
        assert_eq!(list, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_should_reject_duplicate_entry() {
        let mut map: Option<BTreeMap<String, String>> = None;
        insert_entry(&mut map, "Attributes", "a".to_owned(), "1".to_owned())
            .expect("first insert");
        let err = insert_entry(&mut map, "Attributes", "a".to_owned(), "2".to_owned())
            .expect_err("duplicate insert");
        assert!(matches!(err, ModelError::DuplicateKey { field: "Attributes", ref key } if key == "a"));
        assert_eq!(map.expect("map exists")["a"], "1");
    }
}
