//! Configuration loading and validation.

use crate::constants;
use crate::models::app_config::AppConfig;
use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve the configuration path from CLI arg, then environment.
pub fn resolve_path(config_arg: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = config_arg {
        return Some(path);
    }
    match env::var(constants::CONFIG_ENV) {
        Ok(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => None,
    }
}

/// Load configuration; a missing file yields defaults.
pub fn load(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let config = parse(&content).with_context(|| format!("load config {}", path.display()))?;
    Ok(config)
}

/// Parse and validate configuration content (testable without filesystem).
pub fn parse(content: &str) -> Result<AppConfig> {
    let config: AppConfig = toml::from_str(content).context("parse config")?;
    validate(&config)?;
    Ok(config)
}

pub fn validate(config: &AppConfig) -> Result<()> {
    if config.policy.min_length == 0 {
        bail!("policy.min_length must be at least 1");
    }
    if config.policy.special_chars.is_empty() {
        bail!("policy.special_chars cannot be empty");
    }
    if config.generator.length == 0 || config.generator.length > constants::MAX_GENERATED_LENGTH {
        bail!(
            "generator.length must be between 1 and {}",
            constants::MAX_GENERATED_LENGTH
        );
    }
    validate_format(&config.output.format)?;
    Ok(())
}

pub fn validate_format(format: &str) -> Result<()> {
    if !constants::VALID_FORMATS.contains(&format) {
        bail!(
            "invalid format: {} (use {})",
            format,
            constants::VALID_FORMATS.join("|")
        );
    }
    Ok(())
}
