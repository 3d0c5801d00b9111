//! Validation result tree: property-level results aggregated into
//! per-group reports, aggregated into one whole-plugin report.

/// Accumulator for group-level validation failures that are not tied to a
/// single property.
#[derive(Debug, Default)]
pub struct BuilderStatus {
    error_messages: Vec<String>,
}

impl BuilderStatus {
    pub fn new() -> BuilderStatus {
        BuilderStatus::default()
    }

    pub fn add_error_message(&mut self, message: impl Into<String>) {
        self.error_messages.push(message.into());
    }

    pub fn is_valid(&self) -> bool {
        self.error_messages.is_empty()
    }

    pub fn full_error_message(&self) -> String {
        self.error_messages.join(" ")
    }
}

/// Validation outcome for one configuration property. Absence of an error
/// message means the property is valid.
#[derive(Debug)]
pub struct PropertyValidationResult {
    property_key: String,
    error_message: Option<String>,
}

impl PropertyValidationResult {
    pub fn valid(property_key: impl Into<String>) -> PropertyValidationResult {
        PropertyValidationResult {
            property_key: property_key.into(),
            error_message: None,
        }
    }

    pub fn error(
        property_key: impl Into<String>,
        error_message: impl Into<String>,
    ) -> PropertyValidationResult {
        PropertyValidationResult {
            property_key: property_key.into(),
            error_message: Some(error_message.into()),
        }
    }

    pub fn property_key(&self) -> &str {
        &self.property_key
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}

/// Validation results for one settings group (general settings or one
/// module), in the order the properties were validated.
#[derive(Debug)]
pub struct PropertyGroupReport {
    property_group_name: String,
    property_reports: Vec<PropertyValidationResult>,
    builder_status: BuilderStatus,
}

impl PropertyGroupReport {
    pub fn new(property_group_name: impl Into<String>) -> PropertyGroupReport {
        PropertyGroupReport {
            property_group_name: property_group_name.into(),
            property_reports: Vec::new(),
            builder_status: BuilderStatus::new(),
        }
    }

    pub fn property_group_name(&self) -> &str {
        &self.property_group_name
    }

    pub fn property_reports(&self) -> &[PropertyValidationResult] {
        &self.property_reports
    }

    pub fn builder_status(&self) -> &BuilderStatus {
        &self.builder_status
    }

    pub fn builder_status_mut(&mut self) -> &mut BuilderStatus {
        &mut self.builder_status
    }

    pub fn add_valid(&mut self, property_key: impl Into<String>) {
        self.property_reports
            .push(PropertyValidationResult::valid(property_key));
    }

    pub fn add_error(
        &mut self,
        property_key: impl Into<String>,
        error_message: impl Into<String>,
    ) {
        self.property_reports
            .push(PropertyValidationResult::error(property_key, error_message));
    }

    /// Records a property as valid or erroneous depending on the outcome
    /// of a validation closure.
    pub fn record(&mut self, property_key: &str, outcome: std::result::Result<(), String>) {
        match outcome {
            Ok(()) => self.add_valid(property_key),
            Err(message) => self.add_error(property_key, message),
        }
    }

    /// A group has an error iff any property result carries an error
    /// message or the group's own builder status is invalid.
    pub fn has_error(&self) -> bool {
        let property_error = self
            .property_reports
            .iter()
            .any(|result| result.error_message().is_some());
        property_error || !self.builder_status.is_valid()
    }
}

/// The whole-plugin validation report: general settings first, then one
/// group per registered module in registration order.
#[derive(Debug)]
pub struct ConfigValidationReport {
    general_property_report: PropertyGroupReport,
    module_property_reports: Vec<PropertyGroupReport>,
}

impl ConfigValidationReport {
    pub fn new(
        general_property_report: PropertyGroupReport,
        module_property_reports: Vec<PropertyGroupReport>,
    ) -> ConfigValidationReport {
        ConfigValidationReport {
            general_property_report,
            module_property_reports,
        }
    }

    pub fn general_property_report(&self) -> &PropertyGroupReport {
        &self.general_property_report
    }

    pub fn module_property_reports(&self) -> &[PropertyGroupReport] {
        &self.module_property_reports
    }

    pub fn has_error(&self) -> bool {
        self.general_property_report.has_error()
            || self.module_property_reports.iter().any(|r| r.has_error())
    }
}
