//! artifactory-scan-plugin - scan service integration for an artifact
//! repository manager
//!
//! This library validates the plugin's module configuration, renders a
//! human-readable status-check report, and enriches repository artifacts
//! with metadata (policy status, vulnerability severity counts) fetched
//! from a binary-composition-analysis scan service by walking its
//! component-origin graph.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Inspection** (`inspection`): the aggregation domain model and the
//!   metadata-aggregation traversal
//! - **Configuration** (`configuration`): general settings, the
//!   validation result tree, and the status-check composer/renderer
//! - **Modules** (`modules`): the module-configuration framework
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use artifactory_scan_plugin::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let client = ScanHttpClient::new("https://scan.example.com", "api-token", 300)?;
//! let aggregator = MetadataAggregator::new(client);
//!
//! let metadata = aggregator.aggregate("npm-local", "my-project", "1.0.0")?;
//! for record in metadata {
//!     println!("{}/{} -> {:?}", record.forge, record.origin_id, record.policy_status);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod configuration;
pub mod inspection;
pub mod modules;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::network::ScanHttpClient;
    pub use crate::configuration::{
        discover_config, load_config_from_path, BuilderStatus, ConfigFile, ConfigValidationReport,
        ConfigValidationService, PluginConfig, PropertyGroupReport, PropertyValidationResult,
    };
    pub use crate::inspection::domain::{
        ArtifactMetadata, BomComponentView, ComponentVersionView, CompositeComponentModel,
        OriginKey, OriginView, PolicyStatus, ProjectVersionView, ProjectView, ResourceLink,
        ResourceMetadata, Severity, VulnerabilityCounts, VulnerabilityView,
    };
    pub use crate::inspection::MetadataAggregator;
    pub use crate::modules::{
        InspectionModuleConfig, ModuleConfig, ModuleManager, ScanModuleConfig,
    };
    pub use crate::ports::outbound::ScanServiceClient;
    pub use crate::shared::{ExitCode, PluginError, Result};
}
