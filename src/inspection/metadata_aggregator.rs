//! The metadata aggregation traversal.
//!
//! Walks the component-origin graph of one project version on the scan
//! service (project version → BOM components → component versions →
//! origins → vulnerabilities) and folds the results into one
//! [`ArtifactMetadata`] record per unique (forge, origin id) pair.

use std::collections::HashMap;

use tracing::{debug, error};

use crate::inspection::domain::{
    ArtifactMetadata, BomComponentView, ComponentVersionView, CompositeComponentModel, OriginKey,
    VulnerabilityCounts,
};
use crate::ports::outbound::ScanServiceClient;
use crate::shared::Result;

/// MetadataAggregator - the aggregation use case.
///
/// The traversal is synchronous and strictly sequential: one project
/// version lookup, one materialized BOM fetch, then per BOM entry a
/// component-version fetch plus an origins fetch, then per newly
/// deduplicated record at most one vulnerabilities fetch.
///
/// # Failure policy
/// Every remote fetch inside the per-entry resolution is caught, logged
/// with the entry's identity, and treated as "produced nothing for this
/// branch". Only the top-level project-version lookup and the BOM
/// collection fetch propagate errors to the caller.
///
/// # Type Parameters
/// * `C` - ScanServiceClient implementation
pub struct MetadataAggregator<C: ScanServiceClient> {
    client: C,
}

impl<C: ScanServiceClient> MetadataAggregator<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Aggregates artifact metadata for one repository's project version.
    ///
    /// Returns one record per unique (forge, origin id) pair,
    /// first-writer-wins; iteration order of the result is unspecified.
    /// An absent project or version yields an empty vec, not an error.
    pub fn aggregate(
        &self,
        repo_key: &str,
        project_name: &str,
        project_version_name: &str,
    ) -> Result<Vec<ArtifactMetadata>> {
        let Some(project_version) =
            self.client.find_project_version(project_name, project_version_name)?
        else {
            debug!(
                project = project_name,
                version = project_version_name,
                repo = repo_key,
                "no matching project version on the scan service"
            );
            return Ok(Vec::new());
        };

        let bom_components = self.client.fetch_bom_components(&project_version)?;
        debug!(
            project = project_name,
            version = project_version_name,
            components = bom_components.len(),
            "resolved project version BOM"
        );

        let composite_models: Vec<CompositeComponentModel> = bom_components
            .into_iter()
            .map(|bom_component| self.resolve_composite(bom_component))
            .collect();

        let mut metadata_by_origin: HashMap<OriginKey, ArtifactMetadata> = HashMap::new();
        for composite in &composite_models {
            self.fold_origins(repo_key, &mut metadata_by_origin, composite);
        }

        Ok(metadata_by_origin.into_values().collect())
    }

    /// Resolves one BOM entry into its composite model.
    ///
    /// Any fetch failure is isolated to this entry: the error is logged
    /// and an unresolved model (zero origins) is substituted so the
    /// surrounding traversal continues.
    fn resolve_composite(&self, bom_component: BomComponentView) -> CompositeComponentModel {
        let Some(component_version_uri) = bom_component.component_version.clone() else {
            debug!(
                component = bom_component.component_name.as_str(),
                "BOM entry has no resolved component version"
            );
            return CompositeComponentModel::unresolved(bom_component);
        };

        let resolution = self
            .client
            .fetch_component_version(&component_version_uri)
            .and_then(|component_version| {
                let origins = self.client.fetch_origins(&component_version)?;
                Ok((component_version, origins))
            });

        match resolution {
            Ok((component_version, origins)) => {
                CompositeComponentModel::resolved(bom_component, component_version, origins)
            }
            Err(e) => {
                error!(
                    component = bom_component.component_name.as_str(),
                    version = bom_component.component_version_name.as_str(),
                    error = %e,
                    "could not resolve component version and origins for BOM entry"
                );
                CompositeComponentModel::unresolved(bom_component)
            }
        }
    }

    /// Folds one composite model's origins into the result map,
    /// first-writer-wins per (forge, origin id).
    fn fold_origins(
        &self,
        repo_key: &str,
        metadata_by_origin: &mut HashMap<OriginKey, ArtifactMetadata>,
        composite: &CompositeComponentModel,
    ) {
        let Some(component_version) = composite.component_version.as_ref() else {
            return;
        };

        for origin in &composite.origins {
            let key = OriginKey::from(origin);
            if metadata_by_origin.contains_key(&key) {
                continue;
            }

            let counts = self.vulnerability_counts(component_version);
            metadata_by_origin.insert(
                key,
                ArtifactMetadata {
                    repo_key: repo_key.to_string(),
                    forge: origin.origin_name.clone(),
                    origin_id: origin.origin_id.clone(),
                    component_version_link: component_version.meta.href.clone(),
                    policy_status: composite.bom_component.policy_status,
                    high_severity_count: counts.high,
                    medium_severity_count: counts.medium,
                    low_severity_count: counts.low,
                },
            );
        }
    }

    /// Tallies vulnerability severities for a component version.
    ///
    /// A component version without a vulnerabilities link contributes
    /// zeros. A failed fetch also contributes zeros; the list is fully
    /// materialized before counting, so a failure never leaves partial
    /// increments.
    fn vulnerability_counts(&self, component_version: &ComponentVersionView) -> VulnerabilityCounts {
        let Some(vulnerabilities_url) = component_version.vulnerabilities_link() else {
            return VulnerabilityCounts::default();
        };

        match self.client.fetch_vulnerabilities(vulnerabilities_url) {
            Ok(vulnerabilities) => VulnerabilityCounts::tally(&vulnerabilities),
            Err(e) => {
                error!(
                    component_version = component_version.meta.href.as_str(),
                    error = %e,
                    "could not count vulnerabilities for component version"
                );
                VulnerabilityCounts::default()
            }
        }
    }
}
