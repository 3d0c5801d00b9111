pub mod mock_module_config;
pub mod mock_scan_service;

pub use mock_module_config::MockModuleConfig;
pub use mock_scan_service::*;
