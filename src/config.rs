use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Naming convention configuration.
///
/// Everything the rules compare names against lives here so tests and
/// hosts can substitute alternate conventions without touching rule logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Suffix required on asynchronous callable names
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// Attribute name markers that exempt a declaration (prefix match).
    /// Test-framework attributes dictate names for discovery, not for
    /// async-ness.
    #[serde(default = "default_exempt_attributes")]
    pub exempt_attributes: Vec<String>,

    /// Entry-point names exempt from the missing-suffix rule, including
    /// synthesized top-level forms
    #[serde(default = "default_entry_points")]
    pub entry_points: Vec<String>,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
            exempt_attributes: default_exempt_attributes(),
            entry_points: default_entry_points(),
        }
    }
}

fn default_suffix() -> String {
    "Async".to_string()
}

fn default_exempt_attributes() -> Vec<String> {
    [
        "TestMethod",
        "Test",
        "SetUp",
        "Theory",
        "Fact",
        "DataTestMethod",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_entry_points() -> Vec<String> {
    vec!["Main".to_string(), "<Main>$".to_string()]
}

impl NamingConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.suffix.is_empty() {
            return Err("suffix must not be empty".to_string());
        }
        if self.exempt_attributes.iter().any(|a| a.is_empty()) {
            return Err("exempt attribute markers must not be empty".to_string());
        }
        Ok(())
    }

    /// Parse a configuration from a TOML string
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: NamingConfig =
            toml::from_str(content).context("Failed to parse naming configuration")?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid naming configuration: {e}"))?;
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
    }
}
