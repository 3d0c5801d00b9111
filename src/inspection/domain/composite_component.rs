//! Transient per-BOM-entry aggregation unit.

use super::views::{BomComponentView, ComponentVersionView, OriginView};

/// Everything the fold step needs for one BOM entry: the BOM line item
/// (policy status), the resolved component version (canonical href and
/// vulnerabilities link) and its known origins, in the order the scan
/// service returned them.
///
/// When resolution fails the entry becomes an `unresolved` model with no
/// component version and no origins, so the fold consumes it uniformly
/// and produces nothing for that branch.
#[derive(Debug, Clone)]
pub struct CompositeComponentModel {
    pub bom_component: BomComponentView,
    pub component_version: Option<ComponentVersionView>,
    pub origins: Vec<OriginView>,
}

impl CompositeComponentModel {
    pub fn resolved(
        bom_component: BomComponentView,
        component_version: ComponentVersionView,
        origins: Vec<OriginView>,
    ) -> CompositeComponentModel {
        CompositeComponentModel {
            bom_component,
            component_version: Some(component_version),
            origins,
        }
    }

    pub fn unresolved(bom_component: BomComponentView) -> CompositeComponentModel {
        CompositeComponentModel {
            bom_component,
            component_version: None,
            origins: Vec::new(),
        }
    }

    /// A short identity string for log context.
    pub fn describe(&self) -> String {
        format!(
            "{} {}",
            self.bom_component.component_name, self.bom_component.component_version_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspection::domain::views::PolicyStatus;

    #[test]
    fn test_unresolved_model_has_no_origins() {
        let bom_component = BomComponentView {
            component_name: "lodash".to_string(),
            component_version_name: "4.17.20".to_string(),
            component_version: None,
            policy_status: PolicyStatus::Unknown,
        };

        let model = CompositeComponentModel::unresolved(bom_component);
        assert!(model.component_version.is_none());
        assert!(model.origins.is_empty());
        assert_eq!(model.describe(), "lodash 4.17.20");
    }
}
