//! Operation requests and the derived computation over them.
//!
//! A request is a loosely shaped record: every field is optional and a
//! missing field is valid input. The derivation distinguishes "absent" from
//! "present but falsy" only where noted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ArithmeticError;

/// Request kind that enables the derived computation.
pub const SPECIAL_KIND: &str = "special";

/// Input record for [`derive_from_request`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationRequest {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<f64>,
}

impl OperationRequest {
    /// Request of the given kind with no numeric fields.
    pub fn of_kind(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Default::default()
        }
    }

    /// Builder-style method to set the value
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// Builder-style method to set the multiplier
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = Some(multiplier);
        self
    }

    /// Lenient conversion from an untyped JSON value.
    ///
    /// `null` is an absent request. Any other non-object is a request with
    /// every field absent. Fields of the wrong JSON type count as absent.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Object(map) => Some(Self {
                kind: map.get("type").and_then(Value::as_str).map(str::to_owned),
                value: map.get("value").and_then(Value::as_f64),
                multiplier: map.get("multiplier").and_then(Value::as_f64),
            }),
            _ => Some(Self::default()),
        }
    }

    /// Parse a JSON document and apply [`OperationRequest::from_json`].
    pub fn parse(input: &str) -> Result<Option<Self>, ArithmeticError> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| ArithmeticError::InvalidRequest(e.to_string()))?;
        Ok(Self::from_json(&value))
    }
}

/// Zero, negative zero and NaN are falsy numbers.
fn is_falsy(n: f64) -> bool {
    n == 0.0 || n.is_nan()
}

/// Derived computation over a request.
///
/// Branch order matters:
/// 1. No request, no kind, or kind other than `"special"` -> `None`
/// 2. Value absent or not strictly positive -> `Some(0.0)`
/// 3. Multiplier absent or falsy -> `Some(value)`
/// 4. Otherwise -> `Some(value * multiplier)`
///
/// A multiplier of `0` is treated exactly like a missing one, so
/// `{type: "special", value: 10, multiplier: 0}` yields `10`, not `0`.
pub fn derive_from_request(request: Option<&OperationRequest>) -> Option<f64> {
    let request = request?;
    if request.kind.as_deref() == Some(SPECIAL_KIND) {
        if let Some(value) = request.value.filter(|v| *v > 0.0) {
            if let Some(multiplier) = request.multiplier.filter(|m| !is_falsy(*m)) {
                Some(value * multiplier)
            } else {
                Some(value)
            }
        } else {
            Some(0.0)
        }
    } else {
        None
    }
}
