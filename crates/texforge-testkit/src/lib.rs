//! Test utilities for texforge
//!
//! This crate provides shared testing utilities used across the texforge workspace.

use std::path::{Path, PathBuf};
use std::sync::Once;
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

/// Fresh temp directory under `<crate>/.tmp/`, removed on drop
///
/// CLI tests run the binary with this as its working directory, so a
/// `texforge.toml` written here is picked up as the project config.
///
/// # Panics
///
/// Panics if `.tmp/` or the subdirectory cannot be created.
pub fn temp_dir_in_workspace() -> TempDir {
    let base = std::env::current_dir()
        .expect("current directory unavailable")
        .join(".tmp");
    std::fs::create_dir_all(&base).expect("cannot create .tmp/");
    tempfile::Builder::new()
        .prefix("texforge-")
        .tempdir_in(&base)
        .expect("cannot create temp dir under .tmp/")
}

/// Write a fixture file under `dir`, creating parent directories
///
/// Returns the full path of the written file.
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    std::fs::write(&path, content).expect("Failed to write fixture");
    path
}

/// LaTeX template exercising scalar, array and flattened nested placeholders
pub const REPORT_TEMPLATE: &str = r"\documentclass{article}
\title{{{.title}}}
\author{{{.author.name}}}
\begin{document}
Pages: {{.pages}}. Keywords: {{.keywords}}.
\end{document}
";

/// Variables for [`REPORT_TEMPLATE`] in JSON
pub const REPORT_VARS_JSON: &str = r#"{
  "title": "Quarterly Report",
  "pages": 12,
  "keywords": ["finance", "q3"],
  "author": {"name": "Ana"}
}"#;

/// Variables for [`REPORT_TEMPLATE`] in YAML
pub const REPORT_VARS_YAML: &str = "title: Quarterly Report
pages: 12
keywords:
  - finance
  - q3
author:
  name: Ana
";

/// Initialize tracing for tests
///
/// Uses `level` when given, otherwise `RUST_LOG`; does nothing when neither
/// is set. Safe to call from every test.
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}
