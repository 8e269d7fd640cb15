use crate::config::SeatingConfig;
use crate::domain::model::{ExportFormat, RoomLayout};
use crate::utils::error::{Result, SeatingError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk settings file. Every section and key is optional; whatever is
/// missing falls back to the built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub layout: Option<LayoutSection>,
    pub branches: Option<BranchesSection>,
    pub files: Option<FilesSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutSection {
    pub rooms: Option<usize>,
    pub rows: Option<usize>,
    pub columns: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BranchesSection {
    pub order: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilesSection {
    pub input: Option<String>,
    pub output: Option<String>,
    pub format: Option<ExportFormat>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| SeatingError::ConfigError {
            message: format!(
                "cannot read config file '{}': {}",
                path.as_ref().display(),
                e
            ),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SeatingError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SeatingError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// Layers this file over `base`.
    pub fn apply_to(&self, base: SeatingConfig) -> SeatingConfig {
        let mut config = base;

        if let Some(layout) = &self.layout {
            config.layout = RoomLayout::new(
                layout.rooms.unwrap_or(config.layout.rooms),
                layout.rows.unwrap_or(config.layout.rows),
                layout.columns.unwrap_or(config.layout.columns),
            );
        }

        if let Some(order) = self.branches.as_ref().and_then(|b| b.order.clone()) {
            config.branches = order;
        }

        if let Some(files) = &self.files {
            if let Some(input) = &files.input {
                config.input_path = input.clone();
            }
            if let Some(output) = &files.output {
                config.output_path = output.clone();
            }
            if let Some(format) = files.format {
                config.export_format = format;
            }
        }

        config
    }
}
