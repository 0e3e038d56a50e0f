//! Named variable store with dotted-path access

use std::collections::btree_map::{self, BTreeMap};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::VariableError;
use super::kind::VariableKind;
use super::value::Variable;

/// Named variables backing one document
///
/// Keys iterate in sorted order, so anything derived from a collection
/// (flat maps, rendered output) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableCollection {
    vars: BTreeMap<String, Variable>,
}

impl VariableCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from a raw mapping, inferring each variable's type
    pub fn from_raw_map(map: Map<String, Value>) -> Self {
        map.into_iter()
            .map(|(name, value)| (name, Variable::from_raw(value)))
            .collect()
    }

    /// Build a collection from a raw value whose root must be a mapping
    pub fn from_raw(value: Value) -> Result<Self, VariableError> {
        match value {
            Value::Object(map) => Ok(Self::from_raw_map(map)),
            other => Err(VariableError::TypeMismatch {
                expected: VariableKind::Object,
                actual: VariableKind::of_raw(&other),
            }),
        }
    }

    /// Unwrap every variable to its raw value
    pub fn to_flat_map(&self) -> Map<String, Value> {
        self.vars
            .iter()
            .map(|(name, var)| (name.clone(), var.to_raw()))
            .collect()
    }

    /// Insert or replace a top-level variable, returning the previous one
    pub fn set(&mut self, name: impl Into<String>, value: Variable) -> Option<Variable> {
        self.vars.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.vars.get(name)
    }

    /// Like [`get`](Self::get) but reports a missing key as `NotFound`
    pub fn try_get(&self, name: &str) -> Result<&Variable, VariableError> {
        self.vars
            .get(name)
            .ok_or_else(|| VariableError::not_found(name, name))
    }

    pub fn has(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn delete(&mut self, name: &str) -> Option<Variable> {
        self.vars.remove(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn get_all(&self) -> &BTreeMap<String, Variable> {
        &self.vars
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Variable> {
        self.vars.iter()
    }

    /// Resolve a dotted path (`user.address.city`) through nested objects
    ///
    /// The result is a snapshot: later writes through [`set_nested`](Self::set_nested)
    /// are not reflected in values returned earlier.
    pub fn get_nested(&self, path: &str) -> Result<Variable, VariableError> {
        let (root, rest) = match path.split_once('.') {
            Some((root, rest)) => (root, Some(rest)),
            None => (path, None),
        };

        let root_var = self
            .vars
            .get(root)
            .ok_or_else(|| VariableError::not_found(path, root))?;

        let Some(rest) = rest else {
            return Ok(root_var.clone());
        };

        let mut current = match root_var {
            Variable::Object(fields) => fields,
            other => return Err(VariableError::not_an_object(path, root, other.kind())),
        };

        let (intermediate, leaf) = match rest.rsplit_once('.') {
            Some((intermediate, leaf)) => (Some(intermediate), leaf),
            None => (None, rest),
        };

        for segment in intermediate.into_iter().flat_map(|i| i.split('.')) {
            current = match current.get(segment) {
                Some(Value::Object(fields)) => fields,
                Some(other) => {
                    return Err(VariableError::not_an_object(
                        path,
                        segment,
                        VariableKind::of_raw(other),
                    ))
                }
                None => return Err(VariableError::not_found(path, segment)),
            };
        }

        current
            .get(leaf)
            .cloned()
            .map(Variable::from_raw)
            .ok_or_else(|| VariableError::not_found(path, leaf))
    }

    /// Write a value at a dotted path, creating missing objects along the way
    ///
    /// The leaf is stored as its raw value inside the innermost object.
    /// Existing non-object intermediates are not overwritten.
    pub fn set_nested(&mut self, path: &str, value: Variable) -> Result<(), VariableError> {
        let Some((root, rest)) = path.split_once('.') else {
            self.set(path, value);
            return Ok(());
        };

        let root_var = self
            .vars
            .entry(root.to_string())
            .or_insert_with(|| Variable::Object(Map::new()));

        let mut current = match root_var {
            Variable::Object(fields) => fields,
            other => return Err(VariableError::not_an_object(path, root, other.kind())),
        };

        let (intermediate, leaf) = match rest.rsplit_once('.') {
            Some((intermediate, leaf)) => (Some(intermediate), leaf),
            None => (None, rest),
        };

        for segment in intermediate.into_iter().flat_map(|i| i.split('.')) {
            let slot = current
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            current = match slot {
                Value::Object(fields) => fields,
                other => {
                    return Err(VariableError::not_an_object(
                        path,
                        segment,
                        VariableKind::of_raw(other),
                    ))
                }
            };
        }

        current.insert(leaf.to_string(), value.into_raw());
        Ok(())
    }

    /// Expand nested objects into dotted top-level keys
    ///
    /// `{"user": {"name": "Ana"}}` becomes `{"user.name": "Ana"}`. Empty objects
    /// are kept as-is under their dotted key.
    pub fn flatten(&self) -> Self {
        let mut flat = Self::new();
        for (name, var) in &self.vars {
            match var {
                Variable::Object(fields) if !fields.is_empty() => {
                    flatten_into(name, fields, &mut flat);
                }
                other => {
                    flat.set(name.clone(), other.clone());
                }
            }
        }
        flat
    }

    /// Run strict validation on every variable, naming the first bad key
    pub fn validate(&self) -> Result<(), VariableError> {
        for (name, var) in &self.vars {
            var.validate().map_err(|e| VariableError::InvalidEntry {
                key: name.clone(),
                source: Box::new(e),
            })?;
        }
        Ok(())
    }
}

fn flatten_into(prefix: &str, fields: &Map<String, Value>, out: &mut VariableCollection) {
    for (key, value) in fields {
        let name = format!("{prefix}.{key}");
        match value {
            Value::Object(inner) if !inner.is_empty() => flatten_into(&name, inner, out),
            other => {
                out.set(name, Variable::from_raw(other.clone()));
            }
        }
    }
}

impl FromIterator<(String, Variable)> for VariableCollection {
    fn from_iter<I: IntoIterator<Item = (String, Variable)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}

impl Extend<(String, Variable)> for VariableCollection {
    fn extend<I: IntoIterator<Item = (String, Variable)>>(&mut self, iter: I) {
        self.vars.extend(iter);
    }
}

impl<'a> IntoIterator for &'a VariableCollection {
    type Item = (&'a String, &'a Variable);
    type IntoIter = btree_map::Iter<'a, String, Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.iter()
    }
}
