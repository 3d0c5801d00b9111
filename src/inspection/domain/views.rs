//! Deserialization views for the scan service REST resources.
//!
//! These mirror the JSON shapes returned by the scan service API. Only the
//! fields the aggregation traversal actually reads are modeled; everything
//! else in the payload is ignored by serde.

use serde::{Deserialize, Serialize};

/// A single `rel`/`href` pair from a resource's `_meta.links` array.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceLink {
    pub rel: String,
    pub href: String,
}

/// The `_meta` block every scan service resource carries: its canonical
/// href plus navigable links to related collections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceMetadata {
    pub href: String,
    #[serde(default)]
    pub links: Vec<ResourceLink>,
}

impl ResourceMetadata {
    /// Returns the href of the first link with the given relation, if any.
    pub fn first_link(&self, rel: &str) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.rel == rel)
            .map(|link| link.href.as_str())
    }
}

/// Envelope for paginated collection responses (`totalCount` + `items`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedView<T> {
    #[serde(default)]
    pub total_count: usize,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// A project as returned by the project search endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub name: String,
    #[serde(rename = "_meta")]
    pub meta: ResourceMetadata,
}

/// A named version of a project; the root of the aggregation traversal.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectVersionView {
    pub version_name: String,
    #[serde(rename = "_meta")]
    pub meta: ResourceMetadata,
}

impl ProjectVersionView {
    pub const COMPONENTS_LINK: &'static str = "components";

    pub fn components_link(&self) -> Option<&str> {
        self.meta.first_link(Self::COMPONENTS_LINK)
    }
}

/// Policy evaluation outcome for a BOM entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyStatus {
    InViolation,
    InViolationOverridden,
    NotInViolation,
    #[serde(other)]
    #[default]
    Unknown,
}

/// One entry in a project version's bill of materials.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BomComponentView {
    #[serde(default)]
    pub component_name: String,
    #[serde(default)]
    pub component_version_name: String,
    /// URI of the resolved component version, absent for entries the scan
    /// service could not match to a known component.
    #[serde(default)]
    pub component_version: Option<String>,
    #[serde(default)]
    pub policy_status: PolicyStatus,
}

/// Detail view of a component version; carries the vulnerabilities link.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentVersionView {
    #[serde(default)]
    pub version_name: String,
    #[serde(rename = "_meta")]
    pub meta: ResourceMetadata,
}

impl ComponentVersionView {
    pub const ORIGINS_LINK: &'static str = "origins";
    pub const VULNERABILITIES_LINK: &'static str = "vulnerabilities";

    pub fn origins_link(&self) -> Option<&str> {
        self.meta.first_link(Self::ORIGINS_LINK)
    }

    pub fn vulnerabilities_link(&self) -> Option<&str> {
        self.meta.first_link(Self::VULNERABILITIES_LINK)
    }
}

/// A package-ecosystem-specific coordinate for a component version.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginView {
    /// Name of the origin package ecosystem, e.g. "npm" or "maven".
    pub origin_name: String,
    /// Ecosystem-specific component coordinate.
    pub origin_id: String,
}

/// A vulnerability record attached to a component version.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VulnerabilityView {
    #[serde(default)]
    pub vulnerability_name: String,
    #[serde(default)]
    pub severity: String,
}
