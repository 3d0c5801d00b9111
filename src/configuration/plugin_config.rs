//! Plugin configuration file support.
//!
//! Provides TOML-based configuration through `scan-plugin.toml` files:
//! the general (scan service connection) settings, the per-module
//! sections, file loading/discovery, and unknown-field warnings.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::configuration::report::PropertyGroupReport;
use crate::modules::{InspectionModuleConfig, ScanModuleConfig};
use crate::shared::{PluginError, Result};

pub const CONFIG_FILENAME: &str = "scan-plugin.toml";

pub const GENERAL_SETTINGS_NAME: &str = "General Settings";

pub const URL_PROPERTY: &str = "scan.service.url";
pub const API_TOKEN_PROPERTY: &str = "scan.service.api.token";
pub const TIMEOUT_PROPERTY: &str = "scan.service.timeout";
pub const TRUST_CERT_PROPERTY: &str = "scan.service.trust.cert";

const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// General settings: how to reach the scan service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PluginConfig {
    pub url: Option<String>,
    pub api_token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub trust_cert: bool,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for PluginConfig {
    fn default() -> PluginConfig {
        PluginConfig {
            url: None,
            api_token: None,
            timeout_secs: default_timeout_secs(),
            trust_cert: false,
        }
    }
}

impl PluginConfig {
    /// Validates the general settings into a group report, one result
    /// per property.
    pub fn validate(&self, report: &mut PropertyGroupReport) {
        match self.url.as_deref().map(str::trim) {
            None | Some("") => {
                report.add_error(URL_PROPERTY, "No scan service URL is configured.")
            }
            Some(url) => match reqwest::Url::parse(url) {
                Ok(_) => report.add_valid(URL_PROPERTY),
                Err(e) => report.add_error(
                    URL_PROPERTY,
                    format!("The scan service URL is not a valid URL: {e}"),
                ),
            },
        }

        match self.api_token.as_deref().map(str::trim) {
            None | Some("") => {
                report.add_error(API_TOKEN_PROPERTY, "No API token is configured.")
            }
            Some(_) => report.add_valid(API_TOKEN_PROPERTY),
        }

        if self.timeout_secs == 0 {
            report.add_error(TIMEOUT_PROPERTY, "The timeout must be greater than zero.");
        } else {
            report.add_valid(TIMEOUT_PROPERTY);
        }

        // Any boolean is acceptable; the property line still shows up in
        // the status report.
        report.add_valid(TRUST_CERT_PROPERTY);
    }
}

/// Top-level configuration file schema.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigFile {
    #[serde(default)]
    pub general: PluginConfig,
    #[serde(default)]
    pub inspection: InspectionModuleConfig,
    #[serde(default)]
    pub scan: ScanModuleConfig,
    /// Captures unknown sections for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, toml::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| PluginError::ConfigRead {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&content).map_err(|e| PluginError::ConfigParse {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Warn about unknown sections in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!(field = key.as_str(), "unknown config field will be ignored");
    }
}
