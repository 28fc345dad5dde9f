//! Plugin configuration types

use crate::{DeployError, DeployResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration of one deploy plugin instance
///
/// Keys use the camelCase names of the deploy pipeline's configuration
/// (`skipFrameworkBuild`). Anything not declared here lands in
/// [`passthrough`](Self::passthrough) and is forwarded to the packaging tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployConfig {
    /// Run the plugin at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Native platform identifier (e.g. `android`)
    #[serde(default = "default_platform")]
    pub platform: String,

    /// Build in release instead of debug mode
    #[serde(default)]
    pub release: bool,

    /// Ask the packaging tool not to rebuild the web assets itself
    #[serde(default = "default_true")]
    pub skip_framework_build: bool,

    /// Options forwarded verbatim to the packaging tool
    #[serde(flatten)]
    pub passthrough: BTreeMap<String, serde_json::Value>,
}

fn default_true() -> bool {
    true
}

fn default_platform() -> String {
    "android".to_string()
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            platform: default_platform(),
            release: false,
            skip_framework_build: default_true(),
            passthrough: BTreeMap::new(),
        }
    }
}

impl DeployConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }

    /// Create configuration from a TOML document
    ///
    /// The options may sit at the top level or under a `[corber]` table.
    pub fn from_toml_str(content: &str) -> DeployResult<Self> {
        let mut table: toml::Table = toml::from_str(content)?;
        let section = match table.remove("corber") {
            Some(toml::Value::Table(section)) => section,
            Some(other) => {
                return Err(DeployError::ConfigError(format!(
                    "[corber] must be a table, found {}",
                    other.type_str()
                )));
            }
            None => table,
        };
        let config: Self = toml::Value::Table(section).try_into()?;
        Ok(config)
    }

    /// Read a single option by its configuration key
    pub fn read(&self, name: &str) -> Option<serde_json::Value> {
        match name {
            "enabled" => Some(self.enabled.into()),
            "platform" => Some(self.platform.clone().into()),
            "release" => Some(self.release.into()),
            "skipFrameworkBuild" => Some(self.skip_framework_build.into()),
            other => self.passthrough.get(other).cloned(),
        }
    }

    /// Set a pass-through option
    pub fn set<T: Serialize>(&mut self, key: &str, value: T) -> Result<(), serde_json::Error> {
        self.passthrough
            .insert(key.to_string(), serde_json::to_value(value)?);
        Ok(())
    }

    /// Every option keyed by its configuration name, in key order
    pub fn options(&self) -> BTreeMap<String, serde_json::Value> {
        let mut options = self.passthrough.clone();
        for key in ["enabled", "platform", "release", "skipFrameworkBuild"] {
            if let Some(value) = self.read(key) {
                options.insert(key.to_string(), value);
            }
        }
        options
    }

    /// Check that the configuration can drive a deploy cycle
    pub fn validate(&self) -> DeployResult<()> {
        if self.platform.trim().is_empty() {
            return Err(DeployError::ConfigError(
                "platform cannot be empty".to_string(),
            ));
        }
        if self.passthrough.contains_key("") {
            return Err(DeployError::ConfigError(
                "option name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
