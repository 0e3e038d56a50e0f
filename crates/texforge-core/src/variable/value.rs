use std::fmt;

use serde_json::{Map, Value};

use super::error::VariableError;
use super::kind::VariableKind;
use crate::config::consts::variable::{
    MAX_ARRAY_LEN, MAX_NUMBER, MAX_OBJECT_KEYS, MAX_STRING_CHARS,
};

/// A typed template variable
///
/// Array and object payloads hold raw JSON values; nested entries are only
/// wrapped into `Variable`s when they are read back out.
#[derive(Debug, Clone)]
pub enum Variable {
    String(String),
    Number(f64),
    Boolean(bool),
    Array(Vec<Value>),
    Object(Map<String, Value>),
    Null,
}

impl Variable {
    /// Create a string variable; the text is stored trimmed
    pub fn new_string(text: impl AsRef<str>) -> Result<Self, VariableError> {
        let trimmed = text.as_ref().trim();
        check_string(trimmed)?;
        Ok(Variable::String(trimmed.to_string()))
    }

    /// Create a number variable in `0..=1e10`
    pub fn new_number(n: f64) -> Result<Self, VariableError> {
        check_number(n)?;
        Ok(Variable::Number(n))
    }

    pub fn new_boolean(b: bool) -> Self {
        Variable::Boolean(b)
    }

    pub fn new_array(items: Vec<Value>) -> Result<Self, VariableError> {
        check_array(&items)?;
        Ok(Variable::Array(items))
    }

    pub fn new_object(fields: Map<String, Value>) -> Result<Self, VariableError> {
        check_object(&fields)?;
        Ok(Variable::Object(fields))
    }

    pub fn new_null() -> Self {
        Variable::Null
    }

    /// Re-run the constructor rules against this value
    ///
    /// Inferred variables skip validation, so `Variable::from_raw(json!(-5))`
    /// is a valid `Number` until this is called.
    pub fn validate(&self) -> Result<(), VariableError> {
        match self {
            Variable::String(s) => check_string(s.trim()),
            Variable::Number(n) => check_number(*n),
            Variable::Array(items) => check_array(items),
            Variable::Object(fields) => check_object(fields),
            Variable::Boolean(_) | Variable::Null => Ok(()),
        }
    }

    pub fn kind(&self) -> VariableKind {
        match self {
            Variable::String(_) => VariableKind::String,
            Variable::Number(_) => VariableKind::Number,
            Variable::Boolean(_) => VariableKind::Boolean,
            Variable::Array(_) => VariableKind::Array,
            Variable::Object(_) => VariableKind::Object,
            Variable::Null => VariableKind::Null,
        }
    }

    pub fn as_string(&self) -> Result<&str, VariableError> {
        match self {
            Variable::String(s) => Ok(s),
            other => Err(other.mismatch(VariableKind::String)),
        }
    }

    pub fn as_number(&self) -> Result<f64, VariableError> {
        match self {
            Variable::Number(n) => Ok(*n),
            other => Err(other.mismatch(VariableKind::Number)),
        }
    }

    pub fn as_boolean(&self) -> Result<bool, VariableError> {
        match self {
            Variable::Boolean(b) => Ok(*b),
            other => Err(other.mismatch(VariableKind::Boolean)),
        }
    }

    pub fn as_array(&self) -> Result<&[Value], VariableError> {
        match self {
            Variable::Array(items) => Ok(items),
            other => Err(other.mismatch(VariableKind::Array)),
        }
    }

    pub fn as_object(&self) -> Result<&Map<String, Value>, VariableError> {
        match self {
            Variable::Object(fields) => Ok(fields),
            other => Err(other.mismatch(VariableKind::Object)),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Variable::Null)
    }

    /// Null, blank strings and empty containers are empty; `0` and `false` are not
    pub fn is_empty(&self) -> bool {
        match self {
            Variable::Null => true,
            Variable::String(s) => s.trim().is_empty(),
            Variable::Array(items) => items.is_empty(),
            Variable::Object(fields) => fields.is_empty(),
            Variable::Number(_) | Variable::Boolean(_) => false,
        }
    }

    /// Canonical text form: quoted strings, literal numbers, compact JSON containers
    pub fn to_display_string(&self) -> String {
        match self {
            Variable::String(s) => Value::String(s.clone()).to_string(),
            Variable::Number(n) => n.to_string(),
            Variable::Boolean(b) => b.to_string(),
            Variable::Array(items) => Value::Array(items.clone()).to_string(),
            Variable::Object(fields) => Value::Object(fields.clone()).to_string(),
            Variable::Null => "null".to_string(),
        }
    }

    fn mismatch(&self, expected: VariableKind) -> VariableError {
        VariableError::TypeMismatch {
            expected,
            actual: self.kind(),
        }
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Variable::String(a), Variable::String(b)) => a == b,
            (Variable::Number(a), Variable::Number(b)) => a == b,
            (Variable::Boolean(a), Variable::Boolean(b)) => a == b,
            // serde_json values compare the same way their compact JSON does
            (Variable::Array(a), Variable::Array(b)) => a == b,
            (Variable::Object(a), Variable::Object(b)) => a == b,
            (Variable::Null, Variable::Null) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

fn check_string(trimmed: &str) -> Result<(), VariableError> {
    if trimmed.is_empty() {
        return Err(VariableError::EmptyString);
    }
    let length = trimmed.chars().count();
    if length > MAX_STRING_CHARS {
        return Err(VariableError::StringTooLong {
            length,
            max: MAX_STRING_CHARS,
        });
    }
    Ok(())
}

fn check_number(n: f64) -> Result<(), VariableError> {
    if n.is_nan() {
        return Err(VariableError::NotANumber);
    }
    if n < 0.0 {
        return Err(VariableError::NegativeNumber(n));
    }
    if n > MAX_NUMBER {
        return Err(VariableError::NumberTooLarge {
            value: n,
            max: MAX_NUMBER,
        });
    }
    Ok(())
}

fn check_array(items: &[Value]) -> Result<(), VariableError> {
    if items.len() > MAX_ARRAY_LEN {
        return Err(VariableError::ArrayTooLarge {
            length: items.len(),
            max: MAX_ARRAY_LEN,
        });
    }
    Ok(())
}

fn check_object(fields: &Map<String, Value>) -> Result<(), VariableError> {
    if fields.len() > MAX_OBJECT_KEYS {
        return Err(VariableError::ObjectTooLarge {
            keys: fields.len(),
            max: MAX_OBJECT_KEYS,
        });
    }
    Ok(())
}
