//! Module-configuration framework: the `ModuleConfig` trait and the
//! registration-order `ModuleManager`.

pub mod inspection_config;
pub mod scan_config;

pub use inspection_config::InspectionModuleConfig;
pub use scan_config::ScanModuleConfig;

use crate::configuration::report::PropertyGroupReport;

/// One pluggable feature module of the plugin.
///
/// A module knows its display name, whether it is enabled, and how to
/// validate its own properties into a group report.
pub trait ModuleConfig {
    fn module_name(&self) -> &str;

    fn is_enabled(&self) -> bool;

    fn validate(&self, report: &mut PropertyGroupReport);
}

/// Registry of all known module configurations, in registration order.
#[derive(Default)]
pub struct ModuleManager {
    module_configs: Vec<Box<dyn ModuleConfig>>,
}

impl ModuleManager {
    pub fn new() -> ModuleManager {
        ModuleManager::default()
    }

    pub fn register(&mut self, module_config: Box<dyn ModuleConfig>) {
        self.module_configs.push(module_config);
    }

    pub fn all_module_configs(&self) -> &[Box<dyn ModuleConfig>] {
        &self.module_configs
    }

    /// Looks a module up by its display name. Names are expected to be
    /// unique; on duplicates the first registered match wins.
    pub fn first_module_config_by_name(&self, name: &str) -> Option<&dyn ModuleConfig> {
        self.module_configs
            .iter()
            .find(|config| config.module_name() == name)
            .map(|config| config.as_ref())
    }
}

/// Shared validation helpers for module property rules.
pub(crate) mod rules {
    /// A repo list must name at least one repository when the module is on.
    pub fn require_repos(enabled: bool, repos: &[String]) -> Result<(), String> {
        if enabled && repos.is_empty() {
            return Err("No repositories are configured.".to_string());
        }
        if repos.iter().any(|repo| repo.trim().is_empty()) {
            return Err("Repository names must not be blank.".to_string());
        }
        Ok(())
    }

    /// Accepts the 6- or 7-field cron form the repository manager's
    /// scheduler understands.
    pub fn require_cron(cron: &str) -> Result<(), String> {
        if cron.trim().is_empty() {
            return Err("The cron expression is blank.".to_string());
        }
        let fields = cron.split_whitespace().count();
        if !(6..=7).contains(&fields) {
            return Err(format!(
                "The cron expression has {fields} fields; expected 6 or 7."
            ));
        }
        Ok(())
    }
}
