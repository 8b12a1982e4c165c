//! Capability values attached to agent descriptors.
//!
//! Capabilities are free-form: scalars, lists, and nested maps. They are
//! modelled as a closed value type so nesting survives serialization in both
//! directions without falling back to untyped JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Capability mapping of a descriptor. Ordered so serialized output is stable.
pub type Capabilities = BTreeMap<String, CapabilityValue>;

/// A single capability value.
///
/// Serialized untagged, so `{"skills": ["a", "b"], "maxOrderValue": 10000}`
/// reads and writes as plain JSON/YAML. `Null` is JSON `null` / YAML `~`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CapabilityValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<CapabilityValue>),
    Map(BTreeMap<String, CapabilityValue>),
}

impl CapabilityValue {
    /// Build a list of string values.
    pub fn strings<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CapabilityValue::List(
            items
                .into_iter()
                .map(|s| CapabilityValue::String(s.into()))
                .collect(),
        )
    }

    /// Returns the string payload, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CapabilityValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of the variant, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            CapabilityValue::Null => "null",
            CapabilityValue::Bool(_) => "bool",
            CapabilityValue::Integer(_) => "integer",
            CapabilityValue::Float(_) => "float",
            CapabilityValue::String(_) => "string",
            CapabilityValue::List(_) => "list",
            CapabilityValue::Map(_) => "map",
        }
    }
}

impl fmt::Display for CapabilityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl From<&str> for CapabilityValue {
    fn from(value: &str) -> Self {
        CapabilityValue::String(value.to_string())
    }
}

impl From<String> for CapabilityValue {
    fn from(value: String) -> Self {
        CapabilityValue::String(value)
    }
}

impl From<i64> for CapabilityValue {
    fn from(value: i64) -> Self {
        CapabilityValue::Integer(value)
    }
}

impl From<f64> for CapabilityValue {
    fn from(value: f64) -> Self {
        CapabilityValue::Float(value)
    }
}

impl From<bool> for CapabilityValue {
    fn from(value: bool) -> Self {
        CapabilityValue::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_json_parsing() {
        let json = r#"{"type": "ordering", "max": 10, "ratio": 0.5, "on": true,
                       "skills": ["a", "b"], "nested": {"depth": [1, {"x": "y"}]}}"#;
        let caps: Capabilities = serde_json::from_str(json).unwrap();

        assert_eq!(caps["type"], CapabilityValue::from("ordering"));
        assert_eq!(caps["max"], CapabilityValue::Integer(10));
        assert_eq!(caps["ratio"], CapabilityValue::Float(0.5));
        assert_eq!(caps["on"], CapabilityValue::Bool(true));
        assert_eq!(caps["skills"], CapabilityValue::strings(["a", "b"]));

        match &caps["nested"] {
            CapabilityValue::Map(inner) => match &inner["depth"] {
                CapabilityValue::List(items) => {
                    assert_eq!(items[0], CapabilityValue::Integer(1));
                    assert_eq!(items[1].kind(), "map");
                }
                other => panic!("expected list, got {}", other.kind()),
            },
            other => panic!("expected map, got {}", other.kind()),
        }
    }

    #[test]
    fn test_compact_output_sorts_keys() {
        let mut caps = Capabilities::new();
        caps.insert("version".to_string(), "1.0.0".into());
        caps.insert("type".to_string(), "root".into());
        caps.insert("maxConcurrentTasks".to_string(), CapabilityValue::Integer(10));

        let json = serde_json::to_string(&caps).unwrap();
        assert_eq!(json, r#"{"maxConcurrentTasks":10,"type":"root","version":"1.0.0"}"#);
    }

    #[test]
    fn test_null_values() {
        let caps: Capabilities =
            serde_json::from_str(r#"{"type": "x", "note": null, "tags": [null, "a"]}"#).unwrap();
        assert_eq!(caps["note"], CapabilityValue::Null);
        assert_eq!(caps["note"].kind(), "null");
        assert_eq!(caps["note"].as_str(), None);
        assert_eq!(
            caps["tags"],
            CapabilityValue::List(vec![CapabilityValue::Null, "a".into()])
        );

        let json = serde_json::to_string(&caps).unwrap();
        assert_eq!(json, r#"{"note":null,"tags":[null,"a"],"type":"x"}"#);
        assert_eq!(serde_json::from_str::<Capabilities>(&json).unwrap(), caps);

        let yaml_caps: Capabilities = serde_yaml::from_str("type: x\nnote: ~\n").unwrap();
        assert_eq!(yaml_caps["note"], CapabilityValue::Null);
        let yaml = serde_yaml::to_string(&yaml_caps).unwrap();
        assert_eq!(serde_yaml::from_str::<Capabilities>(&yaml).unwrap(), yaml_caps);
    }

    #[test]
    fn test_as_str() {
        assert_eq!(CapabilityValue::from("root").as_str(), Some("root"));
        assert_eq!(CapabilityValue::Integer(3).as_str(), None);
        assert_eq!(CapabilityValue::Integer(3).to_string(), "3");
    }
}
