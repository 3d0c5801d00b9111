//! Adapter implementations following hexagonal architecture.

pub mod outbound;
