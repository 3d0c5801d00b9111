//! The metadata record the aggregation traversal produces per origin.

use super::views::{OriginView, PolicyStatus};
use serde::Serialize;

/// Composite deduplication key for the aggregation result map.
///
/// A tuple of forge and origin id rather than a synthesized
/// `forge:originId` string, so coordinates that themselves contain `:`
/// cannot collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OriginKey {
    pub forge: String,
    pub origin_id: String,
}

impl OriginKey {
    pub fn new(forge: impl Into<String>, origin_id: impl Into<String>) -> OriginKey {
        OriginKey {
            forge: forge.into(),
            origin_id: origin_id.into(),
        }
    }
}

impl From<&OriginView> for OriginKey {
    fn from(origin: &OriginView) -> OriginKey {
        OriginKey::new(origin.origin_name.as_str(), origin.origin_id.as_str())
    }
}

/// One metadata record per unique (forge, origin id) pair, carrying the
/// policy status and vulnerability tallies used to tag repository artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactMetadata {
    /// The artifact repository the metadata applies to.
    pub repo_key: String,
    /// Name of the origin package ecosystem, e.g. "npm" or "maven".
    pub forge: String,
    /// Ecosystem-specific component coordinate.
    pub origin_id: String,
    /// Canonical reference to the resolved component version.
    pub component_version_link: String,
    /// Policy evaluation outcome for the BOM entry.
    pub policy_status: PolicyStatus,
    pub high_severity_count: u32,
    pub medium_severity_count: u32,
    pub low_severity_count: u32,
}
