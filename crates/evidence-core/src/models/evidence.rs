use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// A quoted excerpt claimed to support a persona trait.
///
/// Extraction output is loosely shaped: an item may arrive as a bare string
/// or as a record with `quote` (or `text`/`excerpt`) and an optional
/// `speaker`. Deserialization folds every shape into this struct once, and
/// never fails: unrecognizable shapes become an empty quote, which the
/// matcher reports as `no_match`.
///
/// An item parsed from JSON keeps that JSON and serializes back to it
/// unchanged, extra keys included. Equality only looks at quote and speaker.
#[derive(Debug, Clone)]
pub struct EvidenceItem {
    pub quote: String,
    pub speaker: Option<String>,
    original: Option<Value>,
}

impl EvidenceItem {
    pub fn new(quote: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            speaker: None,
            original: None,
        }
    }

    pub fn with_speaker(quote: impl Into<String>, speaker: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            speaker: non_blank(speaker.into()),
            original: None,
        }
    }

    /// Fold any JSON shape into an evidence item.
    pub fn from_value(value: &Value) -> Self {
        let mut item = match value {
            Value::String(s) => Self::new(s.clone()),
            Value::Object(map) => {
                let quote = ["quote", "text", "excerpt"]
                    .iter()
                    .find_map(|key| map.get(*key).and_then(Value::as_str))
                    .unwrap_or_default()
                    .to_string();
                let speaker = map
                    .get("speaker")
                    .and_then(Value::as_str)
                    .and_then(|s| non_blank(s.to_string()));
                Self {
                    quote,
                    speaker,
                    original: None,
                }
            }
            Value::Number(n) => Self::new(n.to_string()),
            _ => Self::new(String::new()),
        };
        item.original = Some(value.clone());
        item
    }

    /// The JSON this item was parsed from, if any.
    pub fn original(&self) -> Option<&Value> {
        self.original.as_ref()
    }

    /// The item as JSON: its original shape when parsed, else
    /// `{quote, speaker?}`.
    pub fn to_value(&self) -> Value {
        if let Some(original) = &self.original {
            return original.clone();
        }
        let mut map = Map::new();
        map.insert("quote".to_string(), Value::String(self.quote.clone()));
        if let Some(speaker) = &self.speaker {
            map.insert("speaker".to_string(), Value::String(speaker.clone()));
        }
        Value::Object(map)
    }
}

impl PartialEq for EvidenceItem {
    fn eq(&self, other: &Self) -> bool {
        self.quote == other.quote && self.speaker == other.speaker
    }
}

impl Eq for EvidenceItem {}

impl Serialize for EvidenceItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EvidenceItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Deserialize an evidence list from an array, a single item, or null.
pub(crate) fn deserialize_evidence_list<'de, D>(deserializer: D) -> Result<Vec<EvidenceItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(evidence_list_from_value(&value))
}

pub(crate) fn evidence_list_from_value(value: &Value) -> Vec<EvidenceItem> {
    match value {
        Value::Array(items) => items.iter().map(EvidenceItem::from_value).collect(),
        Value::Null => Vec::new(),
        other => vec![EvidenceItem::from_value(other)],
    }
}

/// Re-emit an evidence list in the shape it arrived in.
///
/// `original` is the list as received (`None` when the key was absent). A
/// bare single item or a `null` stays that way while the list still holds
/// exactly what it held; any other list is emitted as an array.
pub(crate) fn evidence_list_to_value(items: &[EvidenceItem], original: Option<&Value>) -> Value {
    let values: Vec<Value> = items.iter().map(EvidenceItem::to_value).collect();
    match original {
        Some(Value::Null) if values.is_empty() => Value::Null,
        Some(single @ (Value::String(_) | Value::Object(_) | Value::Number(_) | Value::Bool(_)))
            if values.len() == 1 && values[0] == *single =>
        {
            single.clone()
        }
        _ => Value::Array(values),
    }
}
