// Configuration file parser

//! Configuration file parsing and validation
//!
//! This module loads the JSON (or TOML) configuration file and validates
//! its contents. Profiles in the `profile` table must be inline objects, so an
//! alias pointing at another alias is rejected while parsing.

use crate::types::{Config, WifiEntry};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load configuration from a JSON or TOML file
///
/// Files with a `.toml` extension are parsed as TOML, everything else as JSON.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).context("Failed to read config file")?;

    let is_toml = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("toml"))
        .unwrap_or(false);

    let config = if is_toml {
        parse_toml(&contents)?
    } else {
        parse_json(&contents)?
    };

    validate_config(&config)?;
    Ok(config)
}

/// Parse a JSON configuration document
pub fn parse_json(contents: &str) -> Result<Config> {
    serde_json::from_str(contents).context("Failed to parse config file")
}

/// Parse a TOML configuration document
pub fn parse_toml(contents: &str) -> Result<Config> {
    toml::from_str(contents).context("Failed to parse config file")
}

/// Validate configuration values
pub fn validate_config(config: &Config) -> Result<()> {
    if config.interval == 0 {
        anyhow::bail!("interval must be > 0");
    }

    if let Some(iface) = &config.network_interface {
        validate_interface_name(iface).context("Invalid network-interface")?;
    }

    if config.log_level.trim().is_empty() {
        anyhow::bail!("log-level cannot be empty");
    }

    Ok(())
}

/// Validates that an interface name is safe to pass to system tools.
/// Only allows alphanumeric characters, hyphens, underscores and dots.
pub fn validate_interface_name(name: &str) -> Result<()> {
    if name.is_empty() {
        anyhow::bail!("Interface name cannot be empty");
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
    {
        anyhow::bail!(
            "Interface name contains invalid characters: '{}'. Only alphanumeric, hyphens, underscores and dots are allowed",
            name
        );
    }

    Ok(())
}

/// SSIDs whose alias names no entry in the `profile` table
///
/// Returned as `(ssid, alias)` pairs sorted by SSID. These are not fatal: the
/// dispatcher reports them each time the network is entered or exited.
pub fn dangling_aliases(config: &Config) -> Vec<(&str, &str)> {
    let mut dangling: Vec<(&str, &str)> = config
        .wifi
        .iter()
        .filter_map(|(ssid, entry)| match entry {
            WifiEntry::Alias(alias) => {
                let known = config
                    .profile
                    .as_ref()
                    .map(|profiles| profiles.contains_key(alias))
                    .unwrap_or(false);
                (!known).then_some((ssid.as_str(), alias.as_str()))
            }
            WifiEntry::Inline(_) => None,
        })
        .collect();
    dangling.sort();
    dangling
}
