//! Structured value shapes returned by the extraction engine.

use serde_json::{Map, Value};

/// A structured value recovered from a response: a JSON object or array.
///
/// Scalar JSON values (strings, numbers, booleans, null) are never wrapped;
/// downstream consumers of model output always expect a container shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractedValue {
    /// A JSON object with unique string keys.
    Object(Map<String, Value>),
    /// An ordered JSON array.
    Array(Vec<Value>),
}

impl ExtractedValue {
    /// Wraps a parsed JSON value, rejecting scalar shapes.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(ExtractedValue::Object(map)),
            Value::Array(items) => Some(ExtractedValue::Array(items)),
            _ => None,
        }
    }

    /// Returns true for the `Object` case.
    pub fn is_object(&self) -> bool {
        matches!(self, ExtractedValue::Object(_))
    }

    /// Returns true for the `Array` case.
    pub fn is_array(&self) -> bool {
        matches!(self, ExtractedValue::Array(_))
    }

    /// Returns the object mapping for the `Object` case.
    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        match self {
            ExtractedValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the element slice for the `Array` case.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            ExtractedValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Converts back into a plain `serde_json::Value`.
    pub fn into_value(self) -> Value {
        match self {
            ExtractedValue::Object(map) => Value::Object(map),
            ExtractedValue::Array(items) => Value::Array(items),
        }
    }
}

impl From<ExtractedValue> for Value {
    fn from(value: ExtractedValue) -> Self {
        value.into_value()
    }
}
