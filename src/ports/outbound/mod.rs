/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (scan service, file system, etc.).
pub mod scan_service;

pub use scan_service::ScanServiceClient;
