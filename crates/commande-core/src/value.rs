//! Dynamic values carried in payloads and arguments

use std::collections::BTreeMap;

use serde::Serialize;

use crate::outcome::Outcome;

/// Named values: a command's arguments, or an outcome's payload.
///
/// Arguments and payloads share one representation so a chain can feed one
/// step's payload straight into the next step.
pub type Payload = BTreeMap<String, Value>;

/// Arguments passed to a command invocation.
pub type Args = Payload;

/// A value stored in an output slot, a payload, or an argument map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Plain data.
    Data(serde_json::Value),
    /// A whole sub-outcome, e.g. the last step of a chain.
    Outcome(Box<Outcome>),
}

impl Value {
    /// Projection of an unset output slot.
    pub const NULL: Value = Value::Data(serde_json::Value::Null);

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Data(serde_json::Value::Null))
    }

    pub fn as_data(&self) -> Option<&serde_json::Value> {
        match self {
            Value::Data(data) => Some(data),
            Value::Outcome(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_data().and_then(serde_json::Value::as_str)
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_data().and_then(serde_json::Value::as_i64)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_data().and_then(serde_json::Value::as_f64)
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_data().and_then(serde_json::Value::as_bool)
    }

    pub fn as_outcome(&self) -> Option<&Outcome> {
        match self {
            Value::Outcome(outcome) => Some(outcome),
            Value::Data(_) => None,
        }
    }

    /// True for string data; used by commands that branch on argument type.
    pub fn is_string(&self) -> bool {
        self.as_str().is_some()
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::NULL
    }
}

impl From<serde_json::Value> for Value {
    fn from(data: serde_json::Value) -> Self {
        Value::Data(data)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Data(serde_json::Value::String(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Data(serde_json::Value::String(s))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Data(serde_json::Value::Bool(b))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Data(n.into())
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Data(n.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Data(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        // Non-finite floats have no JSON form
        Value::Data(
            serde_json::Number::from_f64(n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
        )
    }
}

impl From<Outcome> for Value {
    fn from(outcome: Outcome) -> Self {
        Value::Outcome(Box::new(outcome))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::NULL)
    }
}

/// Build a [`Payload`] (or [`Args`]) from `name => value` pairs.
///
/// ```
/// use commande_core::payload;
///
/// let args = payload! { "test" => 3, "name" => "foo" };
/// assert_eq!(args["test"].as_i64(), Some(3));
/// ```
#[macro_export]
macro_rules! payload {
    () => {
        $crate::value::Payload::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut payload = $crate::value::Payload::new();
        $(
            payload.insert(::std::string::String::from($name), $crate::value::Value::from($value));
        )+
        payload
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_default() {
        assert!(Value::default().is_null());
        assert!(Value::NULL.is_null());
        assert!(!Value::from(0).is_null());
    }

    #[test]
    fn test_scalar_accessors() {
        assert_eq!(Value::from("foo").as_str(), Some("foo"));
        assert_eq!(Value::from(42).as_i64(), Some(42));
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(1.5).as_f64(), Some(1.5));
        assert!(Value::from("x").is_string());
        assert!(!Value::from(42).is_string());
    }

    #[test]
    fn test_non_finite_float_is_null() {
        assert!(Value::from(f64::NAN).is_null());
    }

    #[test]
    fn test_option_conversion() {
        assert!(Value::from(None::<i64>).is_null());
        assert_eq!(Value::from(Some("a")).as_str(), Some("a"));
    }

    #[test]
    fn test_outcome_value() {
        let value = Value::from(Outcome::new());
        assert!(value.as_outcome().is_some());
        assert!(value.as_data().is_none());
        assert!(!value.is_null());
    }

    #[test]
    fn test_payload_macro() {
        let empty: Payload = payload! {};
        assert!(empty.is_empty());

        let args = payload! { "test" => 3, "name" => "foo" };
        assert_eq!(args.len(), 2);
        assert_eq!(args["name"].as_str(), Some("foo"));
    }

    #[test]
    fn test_untagged_serialization() {
        let json = serde_json::to_value(Value::from("foo")).unwrap();
        assert_eq!(json, serde_json::json!("foo"));
    }
}
