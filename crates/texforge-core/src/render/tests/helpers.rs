//! Shared test helpers for render tests

use crate::variable::{Variable, VariableCollection};
use serde_json::json;

/// Scalar variables for the greeting template
pub(super) fn greeting_vars() -> VariableCollection {
    let mut vars = VariableCollection::new();
    vars.set("name", Variable::new_string("Ana").unwrap());
    vars.set("age", Variable::new_number(30.0).unwrap());
    vars
}

/// Nested document metadata, as loaded from a config file
pub(super) fn paper_vars() -> VariableCollection {
    VariableCollection::from_raw(json!({
        "title": "Research Paper",
        "draft": false,
        "tags": ["a", "b", "c"],
        "author": {"name": "John Doe", "affiliation": {"short": "MIT"}},
        "note": null
    }))
    .unwrap()
}
