//! Shared utilities and error types used across all layers.

pub mod error;
pub mod result;

pub use error::{ExitCode, PluginError};
pub use result::Result;
