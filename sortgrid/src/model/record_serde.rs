//! Serialization for Record as a JSON-style object.
//!
//! Object key order is preserved in both directions, so the document order of
//! the first record's keys is the dataset's shape.

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::Error as _;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;

use super::Record;
use super::Value;

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of field names to scalar values")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Record, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut record = Record::new();

        while let Some(key) = map.next_key::<String>()? {
            let raw: serde_json::Value = map.next_value()?;
            let value = Value::from_json(&key, raw).map_err(M::Error::custom)?;
            record.insert(key, value);
        }

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_preserves_key_order() {
        let json = r#"{"name": "hoge", "age": 12, "active": true}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.field_names(), vec!["name", "age", "active"]);
        assert_eq!(record.get("age"), Some(&Value::Int(12)));
        assert_eq!(record.get("active"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_deserialize_rejects_nested_values() {
        let json = r#"{"name": "hoge", "tags": ["a", "b"]}"#;
        let err = serde_json::from_str::<Record>(json).unwrap_err();
        assert!(err.to_string().contains("tags"));
    }

    #[test]
    fn test_serialize_simple_fields() {
        let record = Record::new().set("name", "hoge").set("age", 12).set("note", Value::Null);

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"hoge","age":12,"note":null}"#);
    }
}
