use crate::inspection::domain::{
    BomComponentView, ComponentVersionView, OriginView, ProjectVersionView, VulnerabilityView,
};
use crate::shared::Result;

/// ScanServiceClient port for the scan service REST API.
///
/// This port abstracts the remote lookups the aggregation traversal
/// performs, so the traversal itself stays free of HTTP concerns and can
/// be exercised against mock implementations in tests.
///
/// Paginated collections ("fetch all" methods) are returned fully
/// materialized; the pagination mechanics belong to the adapter.
pub trait ScanServiceClient {
    /// Resolves a project version by project name and version name.
    ///
    /// Returns `Ok(None)` when no matching project or version exists;
    /// absence is a normal outcome, not an error.
    fn find_project_version(
        &self,
        project_name: &str,
        version_name: &str,
    ) -> Result<Option<ProjectVersionView>>;

    /// Fetches all BOM component entries linked from a project version.
    fn fetch_bom_components(
        &self,
        project_version: &ProjectVersionView,
    ) -> Result<Vec<BomComponentView>>;

    /// Fetches the component version detail referenced by a BOM entry.
    fn fetch_component_version(&self, uri: &str) -> Result<ComponentVersionView>;

    /// Fetches all origin records linked from a component version.
    fn fetch_origins(&self, component_version: &ComponentVersionView) -> Result<Vec<OriginView>>;

    /// Fetches all vulnerability records from a vulnerabilities link.
    fn fetch_vulnerabilities(&self, vulnerabilities_url: &str) -> Result<Vec<VulnerabilityView>>;
}
