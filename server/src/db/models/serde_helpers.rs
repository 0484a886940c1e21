//! Serde helpers for SurrealDB record ids.
//!
//! Ids round-trip through two representations: the native `RecordId`
//! coming back from the database, and the `"table:key"` string used in
//! API JSON. [`option_record_id`] accepts both on the way in and always
//! emits the string form on the way out.

use serde::{Deserialize, Deserializer};
use surrealdb::RecordId;

/// Wrapper that deserializes from either a `"table:key"` string or a
/// native `RecordId`.
#[derive(Debug, Clone)]
pub(crate) struct FlexibleRecordId(pub RecordId);

impl<'de> Deserialize<'de> for FlexibleRecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};
        use std::fmt;

        struct FlexibleVisitor;

        impl<'de> Visitor<'de> for FlexibleVisitor {
            type Value = FlexibleRecordId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string 'table:key' or a RecordId")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value
                    .parse::<RecordId>()
                    .map(FlexibleRecordId)
                    .map_err(|_| de::Error::custom(format!("invalid RecordId: {}", value)))
            }

            fn visit_map<M>(self, map: M) -> Result<Self::Value, M::Error>
            where
                M: de::MapAccess<'de>,
            {
                RecordId::deserialize(de::value::MapAccessDeserializer::new(map))
                    .map(FlexibleRecordId)
            }

            fn visit_newtype_struct<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                RecordId::deserialize(deserializer).map(FlexibleRecordId)
            }
        }

        deserializer.deserialize_any(FlexibleVisitor)
    }
}

/// Use with `#[serde(default, with = "serde_helpers::option_record_id")]`.
pub mod option_record_id {
    use super::FlexibleRecordId;
    use serde::{Deserialize, Deserializer, Serializer};
    use surrealdb::RecordId;

    pub fn serialize<S>(value: &Option<RecordId>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(id) => serializer.serialize_str(&id.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<RecordId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt = Option::<FlexibleRecordId>::deserialize(deserializer)?;
        Ok(opt.map(|f| f.0))
    }
}
