use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

/// Identifier of a remote player, kept in the representation the API sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlayerId {
    /// Any JSON number: signed, unsigned beyond `i64::MAX`, or float.
    Numeric(Number),
    Text(String),
}

impl PlayerId {
    /// Compares the id with a raw path segment.
    ///
    /// Numeric ids match any segment that parses to the same number (`7`, `07`, `+7`),
    /// textual ids only match the exact same string.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            PlayerId::Numeric(id) => {
                if let Some(id) = id.as_i64() {
                    raw.parse::<i64>().is_ok_and(|parsed| parsed == id)
                } else if let Some(id) = id.as_u64() {
                    raw.parse::<u64>().is_ok_and(|parsed| parsed == id)
                } else {
                    id.as_f64()
                        .is_some_and(|id| raw.parse::<f64>().is_ok_and(|parsed| parsed == id))
                }
            }
            PlayerId::Text(id) => id == raw,
        }
    }
}

impl From<i64> for PlayerId {
    fn from(id: i64) -> Self {
        PlayerId::Numeric(id.into())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::Numeric(id) => write!(f, "{id}"),
            PlayerId::Text(id) => f.write_str(id),
        }
    }
}

/// A player record owned by the remote API.
///
/// `active` travels as `0`/`1` on the wire and is a plain `bool` locally.
/// Every other attribute is carried through untouched, in the order the API sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    #[serde(default, with = "active_flag")]
    pub active: bool,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// Body returned by `GET /api/players`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayersEnvelope {
    pub data: Vec<Player>,
}

/// Conversion between the wire integer and the local boolean.
pub mod active_flag {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};
    use serde_json::Value;

    pub fn serialize<S: Serializer>(active: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(to_wire(*active))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let value = Value::deserialize(deserializer)?;
        from_wire(&value).ok_or_else(|| D::Error::custom(format!("invalid active flag `{value}`")))
    }

    pub fn to_wire(active: bool) -> u8 {
        u8::from(active)
    }

    /// Accepts integers, booleans, strings and null. Arrays and objects are rejected.
    pub fn from_wire(value: &Value) -> Option<bool> {
        match value {
            Value::Null => Some(false),
            Value::Bool(active) => Some(*active),
            Value::Number(n) => Some(n.as_f64().is_some_and(|n| n != 0.0)),
            Value::String(s) => Some(!(s.is_empty() || s == "0")),
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}
