//! Configuration for the inspection module, which tags existing
//! repository artifacts with scan service metadata.

use serde::Deserialize;

use super::{rules, ModuleConfig};
use crate::configuration::report::PropertyGroupReport;

pub const MODULE_NAME: &str = "Inspection";

pub const REPOS_PROPERTY: &str = "inspection.repos";
pub const CRON_PROPERTY: &str = "inspection.cron";
pub const RETRY_COUNT_PROPERTY: &str = "inspection.retry.count";

const DEFAULT_CRON: &str = "0 0/2 * 1/1 * ?";
const DEFAULT_RETRY_COUNT: u32 = 5;
const MAX_RETRY_COUNT: u32 = 100;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct InspectionModuleConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Repositories whose artifacts are inspected.
    #[serde(default)]
    pub repos: Vec<String>,
    /// Schedule for re-inspecting artifacts that previously failed.
    #[serde(default = "default_cron")]
    pub cron: String,
    /// How often a failed artifact inspection is retried before giving up.
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,
}

fn default_cron() -> String {
    DEFAULT_CRON.to_string()
}

fn default_retry_count() -> u32 {
    DEFAULT_RETRY_COUNT
}

impl Default for InspectionModuleConfig {
    fn default() -> InspectionModuleConfig {
        InspectionModuleConfig {
            enabled: false,
            repos: Vec::new(),
            cron: default_cron(),
            retry_count: default_retry_count(),
        }
    }
}

impl ModuleConfig for InspectionModuleConfig {
    fn module_name(&self) -> &str {
        MODULE_NAME
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn validate(&self, report: &mut PropertyGroupReport) {
        report.record(REPOS_PROPERTY, rules::require_repos(self.enabled, &self.repos));
        report.record(CRON_PROPERTY, rules::require_cron(&self.cron));

        if self.retry_count > MAX_RETRY_COUNT {
            report.add_error(
                RETRY_COUNT_PROPERTY,
                format!("The retry count exceeds the maximum of {MAX_RETRY_COUNT}."),
            );
        } else {
            report.add_valid(RETRY_COUNT_PROPERTY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate_cleanly() {
        let config = InspectionModuleConfig::default();
        let mut report = PropertyGroupReport::new(MODULE_NAME);
        config.validate(&mut report);
        assert!(!report.has_error());
        assert_eq!(report.property_reports().len(), 3);
    }

    #[test]
    fn test_enabled_without_repos_is_an_error() {
        let config = InspectionModuleConfig {
            enabled: true,
            ..InspectionModuleConfig::default()
        };
        let mut report = PropertyGroupReport::new(MODULE_NAME);
        config.validate(&mut report);

        assert!(report.has_error());
        let repos_result = &report.property_reports()[0];
        assert_eq!(repos_result.property_key(), REPOS_PROPERTY);
        assert!(repos_result.error_message().is_some());
    }

    #[test]
    fn test_excessive_retry_count() {
        let config = InspectionModuleConfig {
            retry_count: 500,
            ..InspectionModuleConfig::default()
        };
        let mut report = PropertyGroupReport::new(MODULE_NAME);
        config.validate(&mut report);
        assert!(report.has_error());
    }

    #[test]
    fn test_deserialize_kebab_case() {
        let toml = r#"
            enabled = true
            repos = ["npm-local"]
            retry-count = 3
        "#;
        let config: InspectionModuleConfig = toml::from_str(toml).unwrap();
        assert!(config.enabled);
        assert_eq!(config.retry_count, 3);
        assert_eq!(config.cron, DEFAULT_CRON);
    }
}
