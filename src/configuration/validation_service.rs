//! Composes the whole-plugin validation report and renders it as a
//! human-readable status-check message.

use std::path::PathBuf;

use tracing::debug;

use crate::configuration::plugin_config::{PluginConfig, GENERAL_SETTINGS_NAME};
use crate::configuration::report::{ConfigValidationReport, PropertyGroupReport};
use crate::modules::ModuleManager;

const LINE_CHARACTER_LIMIT: usize = 100;
const CONTINUATION_INDENT: &str = "        ";
const UNKNOWN_VERSION: &str = "Unknown";

pub struct ConfigValidationService {
    module_manager: ModuleManager,
    plugin_config: PluginConfig,
    version_file: PathBuf,
}

impl ConfigValidationService {
    pub fn new(
        module_manager: ModuleManager,
        plugin_config: PluginConfig,
        version_file: PathBuf,
    ) -> ConfigValidationService {
        ConfigValidationService {
            module_manager,
            plugin_config,
            version_file,
        }
    }

    /// Builds one group report for the general settings plus one per
    /// registered module, in registration order. Enabled/disabled state
    /// is not decided here; it is read back from the module manager when
    /// rendering.
    pub fn validate_config(&self) -> ConfigValidationReport {
        let mut general_property_report = PropertyGroupReport::new(GENERAL_SETTINGS_NAME);
        self.plugin_config.validate(&mut general_property_report);

        let mut module_property_reports = Vec::new();
        for module_config in self.module_manager.all_module_configs() {
            let mut module_report = PropertyGroupReport::new(module_config.module_name());
            module_config.validate(&mut module_report);
            module_property_reports.push(module_report);
        }

        ConfigValidationReport::new(general_property_report, module_property_reports)
    }

    /// Renders a validation report as the status-check text an operator
    /// sees: a version banner, then one block per settings group.
    pub fn generate_status_check_message(
        &self,
        report: &ConfigValidationReport,
        include_valid: bool,
    ) -> String {
        let block_separator = format!("\n{}\n", "-".repeat(LINE_CHARACTER_LIMIT));
        let plugin_version = self.plugin_version();

        let mut message = format!(
            "{block_separator}Status Check: Plugin Version - {plugin_version}{block_separator}"
        );

        let general_report = report.general_property_report();
        let error_marker = if general_report.has_error() {
            "CONFIGURATION ERROR"
        } else {
            ""
        };
        message.push_str(&format!("General Settings: {error_marker}\n"));
        self.append_property_group_report(&mut message, general_report, include_valid);
        message.push_str(&block_separator);

        for module_report in report.module_property_reports() {
            let enabled = self
                .module_manager
                .first_module_config_by_name(module_report.property_group_name())
                .map(|config| config.is_enabled())
                .unwrap_or(false);
            self.append_module_report(&mut message, module_report, enabled, include_valid);
            message.push_str(&block_separator);
        }

        message
    }

    fn append_module_report(
        &self,
        message: &mut String,
        module_report: &PropertyGroupReport,
        enabled: bool,
        include_valid: bool,
    ) {
        let state = if enabled { "Enabled" } else { "Disabled" };
        let error_marker = if module_report.has_error() {
            "CONFIGURATION ERROR"
        } else {
            ""
        };
        message.push_str(&format!(
            "{} [{}] {}\n",
            module_report.property_group_name(),
            state,
            error_marker
        ));

        self.append_property_group_report(message, module_report, include_valid);
    }

    fn append_property_group_report(
        &self,
        message: &mut String,
        property_group_report: &PropertyGroupReport,
        include_valid: bool,
    ) {
        for property_report in property_group_report.property_reports() {
            let error_message = property_report.error_message();

            let mark = if error_message.is_some() { "X" } else { "✔" };
            let report_suffix = match error_message {
                Some(error) => format!("\n      * {error}"),
                None => String::new(),
            };
            let report_line =
                format!("[{}] - {} {}", mark, property_report.property_key(), report_suffix);

            if include_valid || error_message.is_some() {
                message.push_str(&wrap_line(&report_line));
                message.push('\n');
            }
        }

        let builder_status = property_group_report.builder_status();
        if !builder_status.is_valid() {
            let other_messages = wrap_line(&format!(
                "Other Messages: {}",
                builder_status.full_error_message()
            ));
            message.push_str(&other_messages);
            message.push('\n');
        }
    }

    /// Reads the plugin's display version from the version marker file.
    /// An unreadable file yields a fixed placeholder, never an error.
    fn plugin_version(&self) -> String {
        match std::fs::read_to_string(&self.version_file) {
            Ok(content) => content.trim().to_string(),
            Err(e) => {
                debug!(
                    file = %self.version_file.display(),
                    error = %e,
                    "failed to load plugin version"
                );
                UNKNOWN_VERSION.to_string()
            }
        }
    }
}

/// Wraps free text to the report's column limit, indenting continuation
/// lines. Words longer than the limit are kept intact.
fn wrap_line(line: &str) -> String {
    line.split('\n')
        .map(wrap_single_line)
        .collect::<Vec<String>>()
        .join("\n")
}

fn wrap_single_line(line: &str) -> String {
    let mut wrapped = String::new();
    let mut column = 0;

    for (index, word) in line.split(' ').enumerate() {
        let width = word.chars().count();
        if index == 0 {
            wrapped.push_str(word);
            column = width;
        } else if column + 1 + width > LINE_CHARACTER_LIMIT {
            wrapped.push('\n');
            wrapped.push_str(CONTINUATION_INDENT);
            wrapped.push_str(word);
            column = CONTINUATION_INDENT.len() + width;
        } else {
            wrapped.push(' ');
            wrapped.push_str(word);
            column += 1 + width;
        }
    }

    wrapped
}
