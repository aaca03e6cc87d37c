use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::evidence::{deserialize_evidence_list, evidence_list_to_value, EvidenceItem};
use crate::constants::{CORE_TRAIT_FIELDS, FIELD_DEMOGRAPHICS, UNKNOWN_MARKERS};
use crate::errors::{EvidenceError, EvidenceResult};

/// One persona trait assertion with its supporting evidence.
///
/// A trait parsed by [`Persona::from_value`] remembers the object it came
/// from. Serializing it re-emits that object key for key; only fields that
/// were changed since parsing (usually a trimmed evidence list) are written
/// back in their new form.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonaTrait {
    #[serde(default, deserialize_with = "deserialize_trait_value")]
    pub value: String,
    /// Extraction confidence, clamped to [0.0, 1.0].
    #[serde(default, deserialize_with = "deserialize_confidence")]
    pub confidence: f64,
    #[serde(default, deserialize_with = "deserialize_evidence_list")]
    pub evidence: Vec<EvidenceItem>,
    #[serde(skip)]
    original: Option<Map<String, Value>>,
}

impl PersonaTrait {
    pub fn new(value: impl Into<String>, confidence: f64, evidence: Vec<EvidenceItem>) -> Self {
        Self {
            value: value.into(),
            confidence: confidence.clamp(0.0, 1.0),
            evidence,
            original: None,
        }
    }

    /// Re-emit the trait as JSON.
    pub fn to_value(&self) -> Value {
        let Some(original) = &self.original else {
            let mut map = Map::new();
            map.insert("value".to_string(), Value::String(self.value.clone()));
            map.insert("confidence".to_string(), Value::from(self.confidence));
            map.insert("evidence".to_string(), evidence_list_to_value(&self.evidence, None));
            return Value::Object(map);
        };

        let mut map = original.clone();
        let received_value = original
            .get("value")
            .cloned()
            .map(fold_trait_value)
            .unwrap_or_default();
        if received_value != self.value {
            map.insert("value".to_string(), Value::String(self.value.clone()));
        }
        let received_confidence = original
            .get("confidence")
            .cloned()
            .map(fold_confidence)
            .unwrap_or(0.0);
        if received_confidence != self.confidence {
            map.insert("confidence".to_string(), Value::from(self.confidence));
        }
        let received_evidence = original.get("evidence");
        if received_evidence.is_some() || !self.evidence.is_empty() {
            map.insert(
                "evidence".to_string(),
                evidence_list_to_value(&self.evidence, received_evidence),
            );
        }
        Value::Object(map)
    }
}

/// Equality over the interpreted fields; the remembered source object is
/// ignored.
impl PartialEq for PersonaTrait {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.confidence == other.confidence && self.evidence == other.evidence
    }
}

impl Serialize for PersonaTrait {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

fn deserialize_trait_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Value::deserialize(deserializer).map(fold_trait_value)
}

fn fold_trait_value(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn deserialize_confidence<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Value::deserialize(deserializer).map(fold_confidence)
}

fn fold_confidence(value: Value) -> f64 {
    let raw = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if raw.is_finite() {
        raw.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Demographic attributes. Only a string age range is interpreted; every
/// other key, including an `age_range` of any other JSON type, is carried
/// through untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Demographics {
    pub age_range: Option<String>,
    pub other: Map<String, Value>,
}

impl Demographics {
    /// Whether the age range is missing, blank, or an "unknown" marker.
    ///
    /// A non-string, non-null `age_range` (e.g. `34`) counts as known.
    pub fn age_range_is_unknown(&self) -> bool {
        is_unknown(self.age_range.as_deref())
            && self.other.get("age_range").map_or(true, Value::is_null)
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        let mut other = map.clone();
        let age_range = match other.get("age_range") {
            Some(Value::String(range)) => Some(range.clone()),
            _ => None,
        };
        if age_range.is_some() {
            other.remove("age_range");
        }
        Self { age_range, other }
    }

    fn to_value(&self) -> Value {
        let mut map = self.other.clone();
        if let Some(range) = &self.age_range {
            map.insert("age_range".to_string(), Value::String(range.clone()));
        }
        Value::Object(map)
    }
}

/// Whether a demographic value counts as "not provided".
pub fn is_unknown(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(v) => {
            let v = v.trim().to_lowercase();
            v.is_empty() || UNKNOWN_MARKERS.contains(&v.as_str())
        }
    }
}

/// A named collection of trait fields produced by the extraction step.
///
/// Built once from loosely-shaped JSON by [`Persona::from_value`]. Keys that
/// look like traits (`{value, confidence, evidence}`) are parsed; all other
/// keys pass through verbatim. [`Persona::to_value`] re-emits every key as
/// it was received except where the persona has since been edited.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Persona {
    pub name: String,
    pub traits: BTreeMap<String, PersonaTrait>,
    pub demographics: Option<Demographics>,
    pub passthrough: Map<String, Value>,
}

impl Persona {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder-style helper for setting a trait field.
    pub fn with_trait(mut self, field: impl Into<String>, persona_trait: PersonaTrait) -> Self {
        self.traits.insert(field.into(), persona_trait);
        self
    }

    /// Parse a persona from extraction output.
    ///
    /// Only a non-object input is an error; malformed trait fields degrade to
    /// pass-through values.
    pub fn from_value(value: Value) -> EvidenceResult<Self> {
        let Value::Object(map) = value else {
            return Err(EvidenceError::InputShape {
                expected: "persona object".to_string(),
                found: json_kind(&value).to_string(),
            });
        };

        let mut persona = Persona::default();
        for (key, value) in map {
            match key.as_str() {
                "name" => match value {
                    Value::String(name) if !name.is_empty() => persona.name = name,
                    other => {
                        persona.passthrough.insert(key, other);
                    }
                },
                FIELD_DEMOGRAPHICS => match &value {
                    Value::Object(fields) => {
                        persona.demographics = Some(Demographics::from_map(fields));
                    }
                    _ => {
                        persona.passthrough.insert(key, value);
                    }
                },
                _ if looks_like_trait(&value) => {
                    match serde_json::from_value::<PersonaTrait>(value.clone()) {
                        Ok(mut parsed) => {
                            parsed.original = value.as_object().cloned();
                            persona.traits.insert(key, parsed);
                        }
                        Err(_) => {
                            persona.passthrough.insert(key, value);
                        }
                    }
                }
                _ => {
                    persona.passthrough.insert(key, value);
                }
            }
        }
        Ok(persona)
    }

    /// Re-emit the persona as JSON.
    pub fn to_value(&self) -> Value {
        let mut map = self.passthrough.clone();
        if !self.name.is_empty() {
            map.insert("name".to_string(), Value::String(self.name.clone()));
        }
        if let Some(demographics) = &self.demographics {
            map.insert(FIELD_DEMOGRAPHICS.to_string(), demographics.to_value());
        }
        for (field, persona_trait) in &self.traits {
            map.insert(field.clone(), persona_trait.to_value());
        }
        Value::Object(map)
    }

    pub fn trait_field(&self, field: &str) -> Option<&PersonaTrait> {
        self.traits.get(field)
    }

    /// Evidence of the validated core fields, in fixed field order.
    ///
    /// Yields `(field, index within field, item)`.
    pub fn core_evidence(&self) -> impl Iterator<Item = (&'static str, usize, &EvidenceItem)> {
        CORE_TRAIT_FIELDS.into_iter().flat_map(move |field| {
            self.traits
                .get(field)
                .into_iter()
                .flat_map(|t| t.evidence.iter().enumerate())
                .map(move |(index, item)| (field, index, item))
        })
    }
}

impl Serialize for Persona {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Persona {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Persona::from_value(value).map_err(serde::de::Error::custom)
    }
}

fn looks_like_trait(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|m| m.contains_key("value") || m.contains_key("evidence"))
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
