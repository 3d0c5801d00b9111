use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - operation completed, configuration valid
    Success = 0,
    /// The configuration report contains at least one error
    ConfigurationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ConfigurationError => write!(f, "Configuration Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the plugin.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("Scan service request failed: {url}\nDetails: {details}")]
    RemoteFetch { url: String, details: String },

    #[error("Scan service URL is not valid: {url}\nDetails: {details}\n\n💡 Hint: The URL must include a scheme, e.g. https://scan.example.com")]
    InvalidServiceUrl { url: String, details: String },

    #[error("Failed to read config file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    ConfigRead { path: PathBuf, details: String },

    #[error("Failed to parse config file: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file contains valid TOML syntax")]
    ConfigParse { path: PathBuf, details: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::ConfigurationError.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_remote_fetch_error_message() {
        let err = PluginError::RemoteFetch {
            url: "https://scan.example.com/api/projects".to_string(),
            details: "status code 503".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("https://scan.example.com/api/projects"));
        assert!(message.contains("503"));
    }

    #[test]
    fn test_config_parse_error_has_hint() {
        let err = PluginError::ConfigParse {
            path: PathBuf::from("scan-plugin.toml"),
            details: "unexpected token".to_string(),
        };
        assert!(err.to_string().contains("💡 Hint"));
    }
}
