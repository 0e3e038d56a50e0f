//! Loading variable files into a collection

use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::fs;
use std::path::Path;
use texforge_core::VariableCollection;

/// Load a variables file, choosing the parser from its extension
pub fn load_variables(path: &Path) -> Result<VariableCollection> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read variables file {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let raw: Value = match extension.as_str() {
        "json" => serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in {}", path.display()))?,
        "yaml" | "yml" => serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid YAML in {}", path.display()))?,
        "toml" => toml::from_str(&content)
            .with_context(|| format!("Invalid TOML in {}", path.display()))?,
        other => bail!(
            "Unsupported variables file extension '{}' for {} (expected json, yaml, yml or toml)",
            other,
            path.display()
        ),
    };

    let vars = VariableCollection::from_raw(raw)
        .with_context(|| format!("Variables file {} must contain a mapping", path.display()))?;
    tracing::debug!(count = vars.len(), path = %path.display(), "loaded variables");
    Ok(vars)
}
