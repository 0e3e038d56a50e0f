//! Value formatting for placeholder substitution

use serde_json::Value;

use crate::variable::Variable;

/// Format a variable the way it appears in rendered LaTeX output
///
/// - String: raw content, no quoting
/// - Number: two decimal places (`42` → `42.00`)
/// - Boolean: `true` / `false`
/// - Array: elements joined with `", "`
/// - Object: compact JSON
/// - Null: empty
pub(crate) fn format_variable(variable: &Variable) -> String {
    match variable {
        Variable::String(s) => s.clone(),
        Variable::Number(n) => format!("{:.2}", n),
        Variable::Boolean(b) => b.to_string(),
        Variable::Array(items) => items
            .iter()
            .map(format_array_item)
            .collect::<Vec<_>>()
            .join(", "),
        Variable::Object(_) => variable.to_display_string(),
        Variable::Null => String::new(),
    }
}

/// String elements print raw; anything else uses its canonical display form
fn format_array_item(item: &Value) -> String {
    match item {
        Value::String(s) => s.clone(),
        other => Variable::from_raw(other.clone()).to_display_string(),
    }
}
