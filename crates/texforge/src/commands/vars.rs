//! Vars command - inspect variables loaded from a file

use crate::context::Context;
use crate::output::{print_json, print_text};
use crate::vars_file::load_variables;
use anyhow::{Context as _, Result};
use serde_json::Value;
use std::path::Path;

/// List variables in canonical form, or resolve a single dotted path
pub fn run(file: &Path, get: Option<&str>, json: bool, ctx: &Context) -> Result<()> {
    let vars = load_variables(file)?;

    if ctx.config.variables.strict {
        vars.validate()
            .with_context(|| format!("Invalid variables in {}", file.display()))?;
    }

    if let Some(path) = get {
        let value = vars
            .get_nested(path)
            .with_context(|| format!("Failed to resolve '{}' in {}", path, file.display()))?;
        if json {
            print_json(&value.to_raw())?;
        } else {
            print_text(value)?;
        }
        return Ok(());
    }

    if json {
        print_json(&Value::Object(vars.to_flat_map()))?;
    } else {
        for (name, value) in &vars {
            print_text(format_args!("{} = {} ({})", name, value, value.kind()))?;
        }
    }

    Ok(())
}
