//! Configuration: general settings, the validation result tree, and the
//! status-check composer/renderer.

pub mod plugin_config;
pub mod report;
pub mod validation_service;

pub use plugin_config::{discover_config, load_config_from_path, ConfigFile, PluginConfig};
pub use report::{
    BuilderStatus, ConfigValidationReport, PropertyGroupReport, PropertyValidationResult,
};
pub use validation_service::ConfigValidationService;
