use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Integrate an artifact repository with a composition-analysis scan service
#[derive(Parser, Debug)]
#[command(name = "artifactory-scan-plugin")]
#[command(version)]
#[command(about = "Validate plugin configuration and aggregate artifact metadata from a scan service", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Aggregate artifact metadata for one repository's project version
    /// and print it as JSON
    Aggregate {
        /// Base URL of the scan service
        #[arg(long)]
        url: String,

        /// API token for the scan service
        #[arg(long)]
        api_token: String,

        /// Key of the artifact repository the metadata applies to
        #[arg(long)]
        repo_key: String,

        /// Project name on the scan service
        #[arg(long)]
        project: String,

        /// Project version name on the scan service
        #[arg(long)]
        project_version: String,

        /// Request timeout in seconds
        #[arg(long, default_value_t = 300)]
        timeout_secs: u64,
    },

    /// Validate the plugin configuration and print the status-check report
    StatusCheck {
        /// Path to the plugin config file (default: discover
        /// scan-plugin.toml in the working directory)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Path to the plugin version marker file
        #[arg(long, default_value = "plugin.version")]
        version_file: PathBuf,

        /// Also print properties that validated cleanly
        #[arg(long)]
        include_valid: bool,
    },
}

impl Args {
    pub fn parse_args() -> Args {
        Args::parse()
    }
}
