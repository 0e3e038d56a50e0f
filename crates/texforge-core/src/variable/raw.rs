//! Conversions between variables and raw JSON values
//!
//! A variable serializes to its raw value (`"text"`, `42`, `[...]`), never to a
//! tagged wrapper. Deserialization classifies the incoming shape without
//! re-running the typed constructor checks.

use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

use super::value::Variable;

/// Largest float that still maps onto an exact integer
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

impl Variable {
    /// Infer a variable from the shape of a raw value
    pub fn from_raw(value: Value) -> Self {
        match value {
            Value::String(s) => Variable::String(s),
            Value::Number(n) => n.as_f64().map_or(Variable::Null, Variable::Number),
            Value::Bool(b) => Variable::Boolean(b),
            Value::Array(items) => Variable::Array(items),
            Value::Object(fields) => Variable::Object(fields),
            Value::Null => Variable::Null,
        }
    }

    pub fn to_raw(&self) -> Value {
        self.clone().into_raw()
    }

    /// Unwrap to the raw value
    ///
    /// JSON has no infinity or NaN, so a non-finite `Number` (only reachable
    /// by building the variant directly) becomes `Value::Null`. Serializing
    /// such a variable fails instead.
    pub fn into_raw(self) -> Value {
        match self {
            Variable::String(s) => Value::String(s),
            Variable::Number(n) => number_to_raw(n),
            Variable::Boolean(b) => Value::Bool(b),
            Variable::Array(items) => Value::Array(items),
            Variable::Object(fields) => Value::Object(fields),
            Variable::Null => Value::Null,
        }
    }
}

impl From<Value> for Variable {
    fn from(value: Value) -> Self {
        Variable::from_raw(value)
    }
}

impl From<Variable> for Value {
    fn from(variable: Variable) -> Self {
        variable.into_raw()
    }
}

/// Integral numbers become JSON integers so `42` stays `42` on the wire
fn as_exact_int(n: f64) -> Option<i64> {
    (n.fract() == 0.0 && n.abs() < MAX_EXACT_INT).then_some(n as i64)
}

fn number_to_raw(n: f64) -> Value {
    match as_exact_int(n) {
        Some(i) => Value::from(i),
        None => Number::from_f64(n).map_or(Value::Null, Value::Number),
    }
}

impl Serialize for Variable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Variable::String(s) => serializer.serialize_str(s),
            Variable::Number(n) if !n.is_finite() => Err(S::Error::custom(format!(
                "NOT_FINITE: number {} has no JSON representation",
                n
            ))),
            Variable::Number(n) => match as_exact_int(*n) {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(*n),
            },
            Variable::Boolean(b) => serializer.serialize_bool(*b),
            Variable::Array(items) => items.serialize(serializer),
            Variable::Object(fields) => fields.serialize(serializer),
            Variable::Null => serializer.serialize_unit(),
        }
    }
}

impl<'de> Deserialize<'de> for Variable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Variable::from_raw)
    }
}
