use std::path::Path;

use serde::{Deserialize, Serialize};

use super::consts::{render, CONFIG_FILE_NAME};
use crate::error::{Result, TexforgeError};
use crate::render::Delimiters;
use crate::variable::VariableCollection;

/// texforge.toml schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub variables: VariablesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_left_delimiter")]
    pub left_delimiter: String,
    #[serde(default = "default_right_delimiter")]
    pub right_delimiter: String,
    /// Document-type tag used instead of content detection
    #[serde(default)]
    pub default_type: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            left_delimiter: default_left_delimiter(),
            right_delimiter: default_right_delimiter(),
            default_type: None,
        }
    }
}

fn default_left_delimiter() -> String {
    render::DEFAULT_LEFT_DELIMITER.to_string()
}

fn default_right_delimiter() -> String {
    render::DEFAULT_RIGHT_DELIMITER.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariablesConfig {
    /// Re-run constructor validation on loaded variables
    #[serde(default)]
    pub strict: bool,
    /// Expand nested objects into dotted keys before rendering
    #[serde(default = "default_flatten")]
    pub flatten: bool,
}

impl Default for VariablesConfig {
    fn default() -> Self {
        Self {
            strict: false,
            flatten: true,
        }
    }
}

fn default_flatten() -> bool {
    true
}

impl VariablesConfig {
    /// Apply `strict` and `flatten` to freshly loaded variables
    pub fn prepare(&self, variables: VariableCollection) -> Result<VariableCollection> {
        if self.strict {
            variables.validate()?;
        }
        if self.flatten {
            Ok(variables.flatten())
        } else {
            Ok(variables)
        }
    }
}

impl Config {
    /// Read texforge.toml
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;

        toml::from_str(&content).map_err(|e| TexforgeError::ConfigInvalid(e.to_string()))
    }

    /// Read `dir/texforge.toml` if present, otherwise fall back to defaults
    pub fn load_or_default(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::from_file(&path)
        } else {
            tracing::debug!(
                "no {} in {}, using defaults",
                CONFIG_FILE_NAME,
                dir.as_ref().display()
            );
            Ok(Self::default())
        }
    }

    /// Placeholder delimiters configured for rendering
    pub fn delimiters(&self) -> Result<Delimiters> {
        Ok(Delimiters::new(
            &self.render.left_delimiter,
            &self.render.right_delimiter,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.render.left_delimiter, "{{");
        assert_eq!(config.render.right_delimiter, "}}");
        assert!(config.render.default_type.is_none());
        assert!(!config.variables.strict);
        assert!(config.variables.flatten);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[render]
left_delimiter = "<<"
right_delimiter = ">>"
default_type = "beamer"

[variables]
strict = true
flatten = false
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.render.left_delimiter, "<<");
        assert_eq!(config.render.default_type.as_deref(), Some("beamer"));
        assert!(config.variables.strict);
        assert!(!config.variables.flatten);

        let delimiters = config.delimiters().unwrap();
        assert_eq!(delimiters.placeholder("name"), "<<.name>>");
    }

    #[test]
    fn test_empty_delimiter_rejected() {
        let toml = r#"
[render]
left_delimiter = ""
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let result = config.delimiters();
        assert!(matches!(result, Err(TexforgeError::Render(_))));
    }

    #[test]
    fn test_load_or_default_without_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = Config::load_or_default(temp.path()).unwrap();
        assert!(config.variables.flatten);
    }

    #[test]
    fn test_load_or_default_reads_file() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[variables]\nstrict = true\n",
        )
        .unwrap();

        let config = Config::load_or_default(temp.path()).unwrap();
        assert!(config.variables.strict);
    }

    #[test]
    fn test_prepare_strict_rejects_invalid_entry() {
        let vars = VariableCollection::from_raw(serde_json::json!({"price": -3})).unwrap();
        let config = VariablesConfig {
            strict: true,
            flatten: true,
        };

        let err = config.prepare(vars).unwrap_err();
        assert!(matches!(
            err,
            TexforgeError::Variable(crate::variable::VariableError::InvalidEntry { ref key, .. })
                if key == "price"
        ));
        assert!(err.to_string().starts_with("INVALID_VARIABLE: 'price'"));
    }

    #[test]
    fn test_prepare_flattens_unless_disabled() {
        let raw = serde_json::json!({"author": {"name": "Ana"}});
        let vars = VariableCollection::from_raw(raw).unwrap();

        let flat = VariablesConfig::default().prepare(vars.clone()).unwrap();
        assert!(flat.has("author.name"));

        let kept = VariablesConfig {
            strict: false,
            flatten: false,
        }
        .prepare(vars)
        .unwrap();
        assert!(kept.has("author"));
        assert!(!kept.has("author.name"));
    }

    #[test]
    fn test_invalid_toml_reports_config_invalid() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[render\nleft_delimiter = 1").unwrap();

        let result = Config::from_file(&path);
        assert!(matches!(result, Err(TexforgeError::ConfigInvalid(_))));
    }
}
