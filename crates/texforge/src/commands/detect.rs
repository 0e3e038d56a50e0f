//! Detect command - report a template's document type

use crate::output::{print_json, print_text};
use anyhow::{Context, Result};
use serde_json::json;
use std::fs;
use std::path::Path;
use texforge_core::detect_document_type;

/// Print the detected document-type tag, or its metadata as JSON
pub fn run(file: &Path, json: bool) -> Result<()> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let doc = detect_document_type(&content);

    if json {
        let info = json!({
            "tag": doc.tag(),
            "name": doc.display_name(),
            "extension": doc.extension(),
            "latex": doc.is_latex_family(),
        });
        print_json(&info)?;
    } else {
        print_text(doc.tag())?;
    }

    Ok(())
}
