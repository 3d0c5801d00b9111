//! Configuration for the scan module, which submits repository artifacts
//! to the scan service for analysis.

use serde::Deserialize;

use super::{rules, ModuleConfig};
use crate::configuration::report::PropertyGroupReport;

pub const MODULE_NAME: &str = "Scan";

pub const REPOS_PROPERTY: &str = "scan.repos";
pub const NAME_PATTERNS_PROPERTY: &str = "scan.name.patterns";
pub const CRON_PROPERTY: &str = "scan.cron";
pub const MEMORY_PROPERTY: &str = "scan.memory.mb";

const DEFAULT_CRON: &str = "0 0/1 * 1/1 * ?";
const DEFAULT_MEMORY_MB: u32 = 4096;
const MIN_MEMORY_MB: u32 = 256;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScanModuleConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Repositories whose artifacts are submitted for scanning.
    #[serde(default)]
    pub repos: Vec<String>,
    /// Artifact name patterns eligible for scanning, e.g. "*.jar".
    #[serde(default)]
    pub name_patterns: Vec<String>,
    /// Schedule for picking up artifacts that still need a scan.
    #[serde(default = "default_cron")]
    pub cron: String,
    /// Memory ceiling handed to the scanner process.
    #[serde(default = "default_memory_mb")]
    pub memory_mb: u32,
}

fn default_cron() -> String {
    DEFAULT_CRON.to_string()
}

fn default_memory_mb() -> u32 {
    DEFAULT_MEMORY_MB
}

impl Default for ScanModuleConfig {
    fn default() -> ScanModuleConfig {
        ScanModuleConfig {
            enabled: false,
            repos: Vec::new(),
            name_patterns: Vec::new(),
            cron: default_cron(),
            memory_mb: default_memory_mb(),
        }
    }
}

impl ModuleConfig for ScanModuleConfig {
    fn module_name(&self) -> &str {
        MODULE_NAME
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn validate(&self, report: &mut PropertyGroupReport) {
        report.record(REPOS_PROPERTY, rules::require_repos(self.enabled, &self.repos));

        if self.enabled && self.name_patterns.is_empty() {
            report.add_error(
                NAME_PATTERNS_PROPERTY,
                "No artifact name patterns are configured.",
            );
        } else {
            report.add_valid(NAME_PATTERNS_PROPERTY);
        }

        report.record(CRON_PROPERTY, rules::require_cron(&self.cron));

        if self.memory_mb < MIN_MEMORY_MB {
            report.add_error(
                MEMORY_PROPERTY,
                format!("The scanner needs at least {MIN_MEMORY_MB} MB of memory."),
            );
        } else {
            report.add_valid(MEMORY_PROPERTY);
        }
    }
}
