use artifactory_scan_plugin::prelude::*;

/// Mock ModuleConfig with scripted validation outcomes.
pub struct MockModuleConfig {
    name: String,
    enabled: bool,
    results: Vec<(String, Option<String>)>,
}

impl MockModuleConfig {
    pub fn new(name: &str, enabled: bool) -> Self {
        Self {
            name: name.to_string(),
            enabled,
            results: Vec::new(),
        }
    }

    pub fn with_valid_property(mut self, property_key: &str) -> Self {
        self.results.push((property_key.to_string(), None));
        self
    }

    pub fn with_property_error(mut self, property_key: &str, error_message: &str) -> Self {
        self.results
            .push((property_key.to_string(), Some(error_message.to_string())));
        self
    }
}

impl ModuleConfig for MockModuleConfig {
    fn module_name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn validate(&self, report: &mut PropertyGroupReport) {
        for (property_key, error_message) in &self.results {
            match error_message {
                Some(message) => report.add_error(property_key.clone(), message.clone()),
                None => report.add_valid(property_key.clone()),
            }
        }
    }
}
