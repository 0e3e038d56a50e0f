//! Integration tests for the variable model and nested collections

use proptest::prelude::*;
use serde_json::{json, Value};
use texforge_core::{Variable, VariableCollection, VariableError, VariableKind};

/// Arbitrary JSON trees up to a few levels deep
fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        // Quarters parse back exactly
        (-4_000_000i32..4_000_000).prop_map(|n| json!(f64::from(n) / 4.0)),
        "[a-zA-Z0-9 ]{0,16}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn prop_serde_round_trip_is_idempotent(raw in arb_json()) {
        let v = Variable::from_raw(raw);
        let once: Variable = serde_json::from_str(&serde_json::to_string(&v).unwrap()).unwrap();
        let twice: Variable = serde_json::from_str(&serde_json::to_string(&once).unwrap()).unwrap();
        prop_assert_eq!(&once, &v);
        prop_assert_eq!(&twice, &once);
    }

    #[test]
    fn prop_set_nested_then_get_nested(
        segments in prop::collection::vec("[a-z]{1,5}", 1..5),
        text in "[a-z]{1,10}",
    ) {
        let path = segments.join(".");
        let value = Variable::new_string(&text).unwrap();
        let mut vars = VariableCollection::new();
        vars.set_nested(&path, value.clone()).unwrap();
        prop_assert_eq!(vars.get_nested(&path).unwrap(), value);
    }
}

#[test]
fn test_round_trip_nested_object_with_mixed_array() {
    let v = Variable::new_object(
        json!({"items": ["a", 1, true, null, 2.5], "inner": {"k": "v"}})
            .as_object()
            .unwrap()
            .clone(),
    )
    .unwrap();

    let text = serde_json::to_string(&v).unwrap();
    let back: Variable = serde_json::from_str(&text).unwrap();
    assert_eq!(back, v);
    assert_eq!(back.kind(), VariableKind::Object);
}

#[test]
fn test_nested_resolution_from_config_shape() {
    let vars = VariableCollection::from_raw(json!({
        "user": {"name": "John", "address": {"city": "NYC"}}
    }))
    .unwrap();

    assert_eq!(
        vars.get_nested("user.name").unwrap(),
        Variable::new_string("John").unwrap()
    );
    assert_eq!(
        vars.get_nested("user.address.city").unwrap(),
        Variable::new_string("NYC").unwrap()
    );
    assert!(matches!(
        vars.get_nested("user.missing"),
        Err(VariableError::NotFound { .. })
    ));
    assert!(matches!(
        vars.get_nested("missing.key"),
        Err(VariableError::NotFound { .. })
    ));
    assert!(matches!(
        vars.get_nested("user.name.x"),
        Err(VariableError::NotAnObject { .. })
    ));
}

#[test]
fn test_auto_vivification_on_empty_collection() {
    let mut vars = VariableCollection::new();
    vars.set_nested("a.b.c", Variable::new_string("x").unwrap())
        .unwrap();

    assert_eq!(
        vars.get_nested("a.b.c").unwrap(),
        Variable::new_string("x").unwrap()
    );
    let a = vars.get_nested("a").unwrap();
    assert!(a.as_object().unwrap().get("b").is_some());
}

#[test]
fn test_snapshots_do_not_alias() {
    let mut vars = VariableCollection::new();
    vars.set_nested("doc.meta.title", Variable::new_string("Draft").unwrap())
        .unwrap();

    let before = vars.get_nested("doc.meta").unwrap();
    vars.set_nested("doc.meta.title", Variable::new_string("Final").unwrap())
        .unwrap();
    let after = vars.get_nested("doc.meta").unwrap();

    assert_eq!(before.to_raw(), json!({"title": "Draft"}));
    assert_eq!(after.to_raw(), json!({"title": "Final"}));
    assert_ne!(before, after);
}

#[test]
fn test_error_messages_carry_path() {
    let vars = VariableCollection::from_raw(json!({"paper": {"title": "T"}})).unwrap();
    let err = vars.get_nested("paper.author.name").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("paper.author.name"), "message was: {msg}");
    assert!(msg.contains("'author'"), "message was: {msg}");
}
