use std::cell::Cell;
use std::collections::{HashMap, HashSet};

use artifactory_scan_plugin::prelude::*;

/// Mock ScanServiceClient for testing the aggregation traversal.
///
/// Scripted with a fixed project version, BOM, component versions keyed
/// by URI, origins keyed by component-version href, and vulnerability
/// lists keyed by vulnerabilities link. Lookups with no scripted entry
/// for component versions or marked-failing vulnerability links fail,
/// simulating remote fetch errors. Every remote call is counted.
pub struct MockScanService {
    project_version: Option<ProjectVersionView>,
    bom_components: Vec<BomComponentView>,
    component_versions: HashMap<String, ComponentVersionView>,
    origins: HashMap<String, Vec<OriginView>>,
    vulnerabilities: HashMap<String, Vec<VulnerabilityView>>,
    failing_vulnerability_links: HashSet<String>,
    remote_calls: Cell<usize>,
}

impl MockScanService {
    pub fn new() -> Self {
        Self {
            project_version: None,
            bom_components: Vec::new(),
            component_versions: HashMap::new(),
            origins: HashMap::new(),
            vulnerabilities: HashMap::new(),
            failing_vulnerability_links: HashSet::new(),
            remote_calls: Cell::new(0),
        }
    }

    pub fn with_project_version(mut self, version_name: &str, href: &str) -> Self {
        self.project_version = Some(ProjectVersionView {
            version_name: version_name.to_string(),
            meta: ResourceMetadata {
                href: href.to_string(),
                links: Vec::new(),
            },
        });
        self
    }

    pub fn with_bom_component(mut self, component: BomComponentView) -> Self {
        self.bom_components.push(component);
        self
    }

    pub fn with_component_version(mut self, uri: &str, component_version: ComponentVersionView) -> Self {
        self.component_versions.insert(uri.to_string(), component_version);
        self
    }

    pub fn with_origins(mut self, component_version_href: &str, origins: Vec<OriginView>) -> Self {
        self.origins.insert(component_version_href.to_string(), origins);
        self
    }

    pub fn with_vulnerabilities(mut self, link: &str, severities: &[&str]) -> Self {
        self.vulnerabilities.insert(
            link.to_string(),
            severities.iter().map(|severity| vulnerability(severity)).collect(),
        );
        self
    }

    pub fn with_failing_vulnerability_link(mut self, link: &str) -> Self {
        self.failing_vulnerability_links.insert(link.to_string());
        self
    }

    pub fn remote_call_count(&self) -> usize {
        self.remote_calls.get()
    }

    fn count_call(&self) {
        self.remote_calls.set(self.remote_calls.get() + 1);
    }
}

impl Default for MockScanService {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanServiceClient for MockScanService {
    fn find_project_version(
        &self,
        _project_name: &str,
        _version_name: &str,
    ) -> Result<Option<ProjectVersionView>> {
        self.count_call();
        Ok(self.project_version.clone())
    }

    fn fetch_bom_components(
        &self,
        _project_version: &ProjectVersionView,
    ) -> Result<Vec<BomComponentView>> {
        self.count_call();
        Ok(self.bom_components.clone())
    }

    fn fetch_component_version(&self, uri: &str) -> Result<ComponentVersionView> {
        self.count_call();
        self.component_versions
            .get(uri)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Mock scan service failure fetching {}", uri))
    }

    fn fetch_origins(&self, component_version: &ComponentVersionView) -> Result<Vec<OriginView>> {
        self.count_call();
        Ok(self
            .origins
            .get(&component_version.meta.href)
            .cloned()
            .unwrap_or_default())
    }

    fn fetch_vulnerabilities(&self, vulnerabilities_url: &str) -> Result<Vec<VulnerabilityView>> {
        self.count_call();
        if self.failing_vulnerability_links.contains(vulnerabilities_url) {
            anyhow::bail!(
                "Mock scan service failure fetching {}",
                vulnerabilities_url
            );
        }
        Ok(self
            .vulnerabilities
            .get(vulnerabilities_url)
            .cloned()
            .unwrap_or_default())
    }
}

// View construction helpers shared by the aggregation tests.

pub fn bom_component(
    name: &str,
    version: &str,
    component_version_uri: Option<&str>,
    policy_status: PolicyStatus,
) -> BomComponentView {
    BomComponentView {
        component_name: name.to_string(),
        component_version_name: version.to_string(),
        component_version: component_version_uri.map(str::to_string),
        policy_status,
    }
}

pub fn component_version(href: &str, vulnerabilities_link: Option<&str>) -> ComponentVersionView {
    let mut links = Vec::new();
    if let Some(link) = vulnerabilities_link {
        links.push(ResourceLink {
            rel: "vulnerabilities".to_string(),
            href: link.to_string(),
        });
    }
    ComponentVersionView {
        version_name: String::new(),
        meta: ResourceMetadata {
            href: href.to_string(),
            links,
        },
    }
}

pub fn origin(forge: &str, origin_id: &str) -> OriginView {
    OriginView {
        origin_name: forge.to_string(),
        origin_id: origin_id.to_string(),
    }
}

pub fn vulnerability(severity: &str) -> VulnerabilityView {
    VulnerabilityView {
        vulnerability_name: String::new(),
        severity: severity.to_string(),
    }
}
