//! Severity classification for vulnerability tallies.

use super::views::VulnerabilityView;
use serde::Serialize;

/// The three severity buckets tracked on artifact metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Classifies a severity string from the scan service.
    ///
    /// Only the exact, case-sensitive literals "HIGH", "MEDIUM" and "LOW"
    /// map to a bucket. Anything else (e.g. "CRITICAL", "high") is not
    /// counted anywhere.
    pub fn from_exact(value: &str) -> Option<Severity> {
        match value {
            "HIGH" => Some(Severity::High),
            "MEDIUM" => Some(Severity::Medium),
            "LOW" => Some(Severity::Low),
            _ => None,
        }
    }
}

/// Per-bucket vulnerability tallies for one component version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VulnerabilityCounts {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl VulnerabilityCounts {
    /// Tallies a fully-materialized vulnerability list into buckets.
    pub fn tally(vulnerabilities: &[VulnerabilityView]) -> VulnerabilityCounts {
        let mut counts = VulnerabilityCounts::default();
        for vulnerability in vulnerabilities {
            counts.record(&vulnerability.severity);
        }
        counts
    }

    fn record(&mut self, severity: &str) {
        match Severity::from_exact(severity) {
            Some(Severity::High) => self.high += 1,
            Some(Severity::Medium) => self.medium += 1,
            Some(Severity::Low) => self.low += 1,
            None => {}
        }
    }
}
