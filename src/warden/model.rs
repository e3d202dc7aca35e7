use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One computed action: the raw input line and its numeric result.
///
/// On disk an entry is a single-key object, `{"5 + 3": 8.0}`. Non-finite
/// results have no JSON literal, so they are written as `null` and read back
/// as NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub action: String,
    pub result: f64,
}

impl HistoryEntry {
    pub fn new(action: impl Into<String>, result: f64) -> Self {
        Self {
            action: action.into(),
            result,
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.action, format_value(self.result))
    }
}

impl Serialize for HistoryEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        if self.result.is_finite() {
            map.serialize_entry(&self.action, &self.result)?;
        } else {
            map.serialize_entry(&self.action, &Option::<f64>::None)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for HistoryEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(EntryVisitor)
    }
}

struct EntryVisitor;

impl<'de> Visitor<'de> for EntryVisitor {
    type Value = HistoryEntry;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object with a single action/result pair")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<HistoryEntry, A::Error> {
        let (action, result) = map
            .next_entry::<String, Option<f64>>()?
            .ok_or_else(|| <A::Error as de::Error>::invalid_length(0, &self))?;

        if map.next_key::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(2, &self));
        }

        Ok(HistoryEntry {
            action,
            result: result.unwrap_or(f64::NAN),
        })
    }
}

/// The whole history file: `{"actions": [...]}` in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryDocument {
    pub actions: Vec<HistoryEntry>,
}

/// Formats a result the way the calculator prints it: `8.0`, `0.5`, `NaN`, `inf`.
pub fn format_value(value: f64) -> String {
    format!("{:?}", value)
}
