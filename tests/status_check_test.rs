/// Integration tests for config validation and status-check rendering
mod test_utilities;

use std::fs;
use std::path::PathBuf;

use artifactory_scan_plugin::prelude::*;
use tempfile::TempDir;
use test_utilities::mocks::MockModuleConfig;

fn plugin_config() -> PluginConfig {
    PluginConfig {
        url: Some("https://scan.example.com".to_string()),
        api_token: Some("token-abc".to_string()),
        ..PluginConfig::default()
    }
}

#[test]
fn test_module_error_rendering_without_valid_lines() {
    // Module "X" has one property error among valid properties
    let mut manager = ModuleManager::new();
    manager.register(Box::new(
        MockModuleConfig::new("X", true)
            .with_valid_property("x.repos")
            .with_property_error("x.cron", "The cron expression is blank.")
            .with_valid_property("x.retry.count"),
    ));

    let service = ConfigValidationService::new(
        manager,
        plugin_config(),
        PathBuf::from("does-not-exist.version"),
    );
    let report = service.validate_config();
    let message = service.generate_status_check_message(&report, false);

    assert!(message.contains("X [Enabled] CONFIGURATION ERROR"));
    assert!(message.contains("[X] - x.cron"));
    assert!(message.contains("* The cron expression is blank."));
    // Valid property lines of module "X" are omitted
    assert!(!message.contains("x.repos"));
    assert!(!message.contains("x.retry.count"));
}

#[test]
fn test_report_groups_follow_registration_order() {
    let mut manager = ModuleManager::new();
    manager.register(Box::new(MockModuleConfig::new("First", true)));
    manager.register(Box::new(MockModuleConfig::new("Second", false)));

    let service = ConfigValidationService::new(
        manager,
        plugin_config(),
        PathBuf::from("does-not-exist.version"),
    );
    let report = service.validate_config();

    let names: Vec<&str> = report
        .module_property_reports()
        .iter()
        .map(|group| group.property_group_name())
        .collect();
    assert_eq!(names, vec!["First", "Second"]);
    assert!(!report.has_error());
}

#[test]
fn test_full_flow_from_config_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("scan-plugin.toml");
    fs::write(
        &config_path,
        r#"
        [general]
        url = "https://scan.example.com"
        api-token = "token-abc"

        [inspection]
        enabled = true
        repos = ["npm-local"]

        [scan]
        enabled = true
        "#,
    )
    .unwrap();
    let version_file = dir.path().join("plugin.version");
    fs::write(&version_file, "2.0.1").unwrap();

    let config = load_config_from_path(&config_path).unwrap();
    let mut manager = ModuleManager::new();
    manager.register(Box::new(config.inspection.clone()));
    manager.register(Box::new(config.scan.clone()));

    let service = ConfigValidationService::new(manager, config.general.clone(), version_file);
    let report = service.validate_config();
    let message = service.generate_status_check_message(&report, true);

    // Scan module is enabled without repos or name patterns
    assert!(report.has_error());
    assert!(message.contains("Status Check: Plugin Version - 2.0.1"));
    assert!(message.contains("General Settings: \n"));
    assert!(message.contains("Inspection [Enabled] \n"));
    assert!(message.contains("Scan [Enabled] CONFIGURATION ERROR"));
    assert!(message.contains("[X] - scan.repos"));
    assert!(message.contains("[✔] - inspection.repos"));
}

#[test]
fn test_enabled_state_is_read_from_manager_not_report() {
    // A report group whose name has no live module config renders Disabled
    let manager = ModuleManager::new();
    let service = ConfigValidationService::new(
        manager,
        plugin_config(),
        PathBuf::from("does-not-exist.version"),
    );

    let mut orphan = PropertyGroupReport::new("Policy");
    orphan.add_valid("policy.severity.types");
    let report = ConfigValidationReport::new(
        PropertyGroupReport::new("General Settings"),
        vec![orphan],
    );
    let message = service.generate_status_check_message(&report, true);

    assert!(message.contains("Policy [Disabled]"));
}
