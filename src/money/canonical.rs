// ============================================================================
// Canonical Representation
// Deterministic snapshot of a Money value for audit logs and comparison
// ============================================================================

use super::trace::Trace;
use crate::numeric::{MoneyError, MoneyResult};
use serde::Serialize;

/// Structural snapshot of a `Money` value.
///
/// Fields are declared in key order and every trace map is a sorted map, so
/// the JSON emitted by [`CanonicalMoney::to_json`] is byte-identical for
/// logically equal values. `scale` is the only numeric leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalMoney {
    pub amount: String,
    pub currency: String,
    pub minor: String,
    pub scale: u32,
    pub trace: Trace,
}

impl CanonicalMoney {
    /// Compact JSON with sorted keys.
    ///
    /// # Errors
    /// Returns `Serialization` if the serializer fails.
    pub fn to_json(&self) -> MoneyResult<String> {
        serde_json::to_string(self).map_err(|e| MoneyError::Serialization(e.to_string()))
    }

    /// The snapshot as a JSON value tree.
    pub fn to_value(&self) -> MoneyResult<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| MoneyError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::TraceStep;

    #[test]
    fn test_key_order() {
        let snapshot = CanonicalMoney {
            amount: "0.05".to_string(),
            currency: "USD".to_string(),
            minor: "5".to_string(),
            scale: 2,
            trace: Trace::start(TraceStep::op("fromMinorUnits").with("amount", "5")),
        };
        assert_eq!(
            snapshot.to_json().unwrap(),
            r#"{"amount":"0.05","currency":"USD","minor":"5","scale":2,"trace":[{"amount":"5","op":"fromMinorUnits"}]}"#
        );
        assert_eq!(snapshot.to_value().unwrap()["scale"], 2);
    }
}
