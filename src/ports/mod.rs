//! Port definitions following hexagonal architecture.

pub mod outbound;
