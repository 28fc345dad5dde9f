//! Configuration loading, command line overrides, and `check`

use anyhow::{Context, Result};
use cordeploy_core::DeployConfig;
use cordeploy_native::{NativeLayout, Platform};
use std::path::{Path, PathBuf};

/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "cordeploy.toml";

/// Options shared by every command that needs a configuration
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Path to the configuration file (default: ./cordeploy.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Target platform, overrides the configuration
    #[arg(long)]
    pub platform: Option<String>,

    /// Build in release mode
    #[arg(short, long)]
    pub release: bool,

    /// Extra corber option as KEY=VALUE (repeatable)
    #[arg(short = 'o', long = "option", value_name = "KEY=VALUE")]
    pub options: Vec<String>,
}

impl ConfigArgs {
    /// Defaults, then the configuration file, then command line overrides
    pub fn load(&self) -> Result<DeployConfig> {
        let mut config = match &self.config {
            Some(path) => load_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                load_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => DeployConfig::new(),
        };

        if let Some(platform) = &self.platform {
            config.platform = platform.clone();
        }
        if self.release {
            config.release = true;
        }
        for option in &self.options {
            let (key, value) = parse_option(option)?;
            config
                .set(&key, value)
                .with_context(|| format!("Invalid option: {}", option))?;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Load a configuration file, TOML unless it ends in `.json`
pub fn load_file(path: &Path) -> Result<DeployConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration: {:?}", path))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let config = if is_json {
        DeployConfig::from_json(content.as_bytes())
            .with_context(|| format!("Failed to parse configuration: {:?}", path))?
    } else {
        DeployConfig::from_toml_str(&content)
            .with_context(|| format!("Failed to parse configuration: {:?}", path))?
    };
    Ok(config)
}

/// Split `KEY=VALUE`; the value is read as JSON when it parses, as a string
/// otherwise
pub fn parse_option(option: &str) -> Result<(String, serde_json::Value)> {
    let (key, raw) = option
        .split_once('=')
        .with_context(|| format!("Expected KEY=VALUE, got '{}'", option))?;
    if key.is_empty() {
        anyhow::bail!("Option name cannot be empty in '{}'", option);
    }

    let value = serde_json::from_str(raw)
        .unwrap_or_else(|_| serde_json::Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

/// Check command implementation
pub fn check(config_path: Option<PathBuf>) -> Result<()> {
    let path = config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    println!("Checking configuration: {}", path.display());

    let config = load_file(&path)?;
    config.validate()?;

    for line in summary(&config) {
        println!("{}", line);
    }
    println!("\nConfiguration is valid!");

    Ok(())
}

/// Human readable description of a configuration
pub fn summary(config: &DeployConfig) -> Vec<String> {
    let mode = if config.release { "release" } else { "debug" };
    let mut lines = vec![
        format!("✓ Enabled: {}", config.enabled),
        format!("✓ Platform: {} ({})", config.platform, mode),
        format!("✓ Forwarded options: {}", config.passthrough.len()),
    ];

    let capture = NativeLayout::for_project(".")
        .locate(&config.platform, config.release)
        .is_some();
    if !capture {
        let known = Platform::parse(&config.platform).is_some();
        lines.push(format!(
            "! Artifact capture is not supported yet for platform {}{}",
            config.platform,
            if known { "" } else { " (unknown to corber)" }
        ));
    }
    lines
}
