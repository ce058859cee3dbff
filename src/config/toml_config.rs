use crate::domain::model::{OutputFormat, Strategy};
use crate::utils::error::{PalindromeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file; every section and key may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub finder: Option<FinderConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FinderConfig {
    pub strategy: Option<Strategy>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub pretty: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PalindromeError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PalindromeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn strategy(&self) -> Option<Strategy> {
        self.finder.as_ref().and_then(|f| f.strategy)
    }

    pub fn format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }

    pub fn pretty(&self) -> Option<bool> {
        self.output.as_ref().and_then(|o| o.pretty)
    }
}
