// ============================================================================
// Operation Trace
// Append-only provenance log carried by every Money value
// ============================================================================

use crate::numeric::{MoneyError, MoneyResult};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

// ============================================================================
// Trace Values
// ============================================================================

/// A canonicalized trace leaf: text, a list of texts, a nested map or null.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum TraceValue {
    Null,
    Text(String),
    List(Vec<String>),
    Map(BTreeMap<String, TraceValue>),
}

impl TraceValue {
    /// Canonicalize a top-level JSON field value.
    ///
    /// Strings stay as they are, numbers and booleans are stringified, array
    /// items become strings (non-string items as compact JSON) and objects
    /// are canonicalized recursively with sorted keys. `null` is kept here
    /// but stringified inside nested objects.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => TraceValue::Null,
            other => Self::nested(other),
        }
    }

    fn nested(value: &Value) -> Self {
        match value {
            Value::Null => TraceValue::Text("null".to_string()),
            Value::String(text) => TraceValue::Text(text.clone()),
            Value::Bool(_) | Value::Number(_) => TraceValue::Text(value.to_string()),
            Value::Array(items) => TraceValue::List(
                items
                    .iter()
                    .map(|item| match item {
                        Value::String(text) => text.clone(),
                        other => other.to_string(),
                    })
                    .collect(),
            ),
            Value::Object(fields) => TraceValue::Map(
                fields
                    .iter()
                    .map(|(key, value)| (key.clone(), TraceValue::nested(value)))
                    .collect(),
            ),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            TraceValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for TraceValue {
    fn from(text: &str) -> Self {
        TraceValue::Text(text.to_string())
    }
}

impl From<String> for TraceValue {
    fn from(text: String) -> Self {
        TraceValue::Text(text)
    }
}

impl From<Vec<String>> for TraceValue {
    fn from(items: Vec<String>) -> Self {
        TraceValue::List(items)
    }
}

// ============================================================================
// Trace Step
// ============================================================================

/// One trace record. Keys are kept sorted so serialization is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct TraceStep(BTreeMap<String, TraceValue>);

impl TraceStep {
    /// Start a record for the named operation.
    pub fn op(name: &str) -> Self {
        Self::default().with("op", name)
    }

    /// Builder method: add a field
    pub fn with(mut self, key: &str, value: impl Into<TraceValue>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Canonicalize caller-supplied metadata.
    ///
    /// # Errors
    /// Returns `InvalidMetadata` unless `metadata` is a JSON object.
    pub fn from_metadata(metadata: &Value) -> MoneyResult<Self> {
        match TraceValue::from_json(metadata) {
            TraceValue::Map(fields) => Ok(Self(fields)),
            _ => Err(MoneyError::InvalidMetadata(metadata.to_string())),
        }
    }

    pub fn get(&self, key: &str) -> Option<&TraceValue> {
        self.0.get(key)
    }

    /// The `op` field, absent for caller annotations that do not set one.
    pub fn op_name(&self) -> Option<&str> {
        self.get("op").and_then(TraceValue::as_text)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TraceValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }
}

// ============================================================================
// Trace
// ============================================================================

/// Immutable, structurally shared sequence of trace steps.
///
/// `push` returns a new trace; the receiver and every trace previously
/// derived from it keep their own view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Trace {
    steps: Arc<[Arc<TraceStep>]>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// A trace holding a single step.
    pub fn start(step: TraceStep) -> Self {
        Self::new().push(step)
    }

    /// Append a step, leaving `self` untouched.
    pub fn push(&self, step: TraceStep) -> Self {
        let steps: Vec<Arc<TraceStep>> = self
            .steps
            .iter()
            .cloned()
            .chain(std::iter::once(Arc::new(step)))
            .collect();
        Self {
            steps: steps.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last(&self) -> Option<&TraceStep> {
        self.steps.last().map(|step| step.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &TraceStep> {
        self.steps.iter().map(|step| step.as_ref())
    }
}

impl Serialize for Trace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_step_keys_sorted() {
        let step = TraceStep::op("multiply")
            .with("roundingMode", "halfExpand")
            .with("factor", "2");
        let json = serde_json::to_string(&step).unwrap();
        assert_eq!(
            json,
            r#"{"factor":"2","op":"multiply","roundingMode":"halfExpand"}"#
        );
        assert_eq!(step.op_name(), Some("multiply"));
    }

    #[test]
    fn test_metadata_canonicalization() {
        let step = TraceStep::from_metadata(&json!({
            "userId": 42,
            "flag": true,
            "tags": ["a", 1, null],
            "nested": {"z": 1.5, "a": {"deep": "x"}},
            "missing": null
        }))
        .unwrap();

        assert_eq!(step.get("userId"), Some(&TraceValue::from("42")));
        assert_eq!(step.get("flag"), Some(&TraceValue::from("true")));
        assert_eq!(
            step.get("tags"),
            Some(&TraceValue::List(vec!["a".into(), "1".into(), "null".into()]))
        );
        assert_eq!(step.get("missing"), Some(&TraceValue::Null));
        assert_eq!(step.op_name(), None);

        let json = serde_json::to_string(&step).unwrap();
        assert_eq!(
            json,
            r#"{"flag":"true","missing":null,"nested":{"a":{"deep":"x"},"z":"1.5"},"tags":["a","1","null"],"userId":"42"}"#
        );
    }

    #[test]
    fn test_nested_null_is_stringified() {
        let step = TraceStep::from_metadata(&json!({
            "ctx": {"user": null, "inner": {"gone": null}},
            "top": null
        }))
        .unwrap();

        assert_eq!(step.get("top"), Some(&TraceValue::Null));
        assert_eq!(
            serde_json::to_string(&step).unwrap(),
            r#"{"ctx":{"inner":{"gone":"null"},"user":"null"},"top":null}"#
        );
    }

    #[test]
    fn test_metadata_must_be_object() {
        for bad in [json!(null), json!("note"), json!([1, 2]), json!(7)] {
            assert!(matches!(
                TraceStep::from_metadata(&bad),
                Err(MoneyError::InvalidMetadata(_))
            ));
        }
    }

    #[test]
    fn test_push_does_not_affect_prior_views() {
        let base = Trace::start(TraceStep::op("fromMinorUnits"));
        let left = base.push(TraceStep::op("add"));
        let right = base.push(TraceStep::op("subtract"));

        assert_eq!(base.len(), 1);
        assert_eq!(left.len(), 2);
        assert_eq!(right.len(), 2);
        assert_eq!(left.last().and_then(TraceStep::op_name), Some("add"));
        assert_eq!(right.last().and_then(TraceStep::op_name), Some("subtract"));
    }

    #[test]
    fn test_trace_serializes_as_array() {
        let trace = Trace::start(TraceStep::op("a")).push(TraceStep::op("b"));
        assert_eq!(
            serde_json::to_string(&trace).unwrap(),
            r#"[{"op":"a"},{"op":"b"}]"#
        );
        assert!(Trace::new().is_empty());
    }
}
