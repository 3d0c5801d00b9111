//! Domain model for the metadata aggregation traversal.

pub mod artifact_metadata;
pub mod composite_component;
pub mod severity;
pub mod views;

pub use artifact_metadata::{ArtifactMetadata, OriginKey};
pub use composite_component::CompositeComponentModel;
pub use severity::{Severity, VulnerabilityCounts};
pub use views::{
    BomComponentView, ComponentVersionView, OriginView, PagedView, PolicyStatus, ProjectVersionView,
    ProjectView, ResourceLink, ResourceMetadata, VulnerabilityView,
};
