//! Metadata aggregation: domain model and the traversal use case.

pub mod domain;
pub mod metadata_aggregator;

pub use metadata_aggregator::MetadataAggregator;
