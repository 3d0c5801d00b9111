mod adapters;
mod cli;
mod configuration;
mod inspection;
mod modules;
mod ports;
mod shared;

use std::path::Path;
use std::process;
use std::time::Duration;

use indicatif::ProgressBar;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use adapters::outbound::network::ScanHttpClient;
use cli::{Args, Command};
use configuration::{discover_config, load_config_from_path, ConfigFile, ConfigValidationService};
use inspection::MetadataAggregator;
use modules::ModuleManager;
use shared::{ExitCode, Result};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // clap exits with code 2 on parse failure
    let args = Args::parse_args();

    match run(args) {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red());
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    match args.command {
        Command::Aggregate {
            url,
            api_token,
            repo_key,
            project,
            project_version,
            timeout_secs,
        } => {
            let client = ScanHttpClient::new(&url, &api_token, timeout_secs)?;
            let aggregator = MetadataAggregator::new(client);

            let spinner = ProgressBar::new_spinner();
            spinner.enable_steady_tick(Duration::from_millis(100));
            spinner.set_message(format!(
                "Aggregating metadata for {project} {project_version}..."
            ));

            let metadata = aggregator.aggregate(&repo_key, &project, &project_version);
            spinner.finish_and_clear();

            let metadata = metadata?;
            eprintln!("Aggregated {} metadata record(s).", metadata.len());
            println!("{}", serde_json::to_string_pretty(&metadata)?);
            Ok(ExitCode::Success)
        }

        Command::StatusCheck {
            config,
            version_file,
            include_valid,
        } => {
            let config_file = match config {
                Some(path) => load_config_from_path(&path)?,
                None => discover_config(Path::new("."))?.unwrap_or_default(),
            };

            let ConfigFile {
                general,
                inspection,
                scan,
                ..
            } = config_file;

            let mut module_manager = ModuleManager::new();
            module_manager.register(Box::new(inspection));
            module_manager.register(Box::new(scan));

            let validation_service =
                ConfigValidationService::new(module_manager, general, version_file);
            let report = validation_service.validate_config();
            let has_error = report.has_error();

            println!(
                "{}",
                validation_service.generate_status_check_message(&report, include_valid)
            );

            if has_error {
                Ok(ExitCode::ConfigurationError)
            } else {
                Ok(ExitCode::Success)
            }
        }
    }
}
