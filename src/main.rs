use clap::Parser;
use football_tables::app::{print_summary, run_export, run_without_client};
use football_tables::cli::Args;
use football_tables::config::Config;
use football_tables::data_fetcher::create_http_client;
use football_tables::error::AppError;
use football_tables::logging::setup_logging;
use std::process::ExitCode;

/// Loads config from file and environment, then applies the command line.
async fn load_config(args: &Args) -> Result<Config, AppError> {
    let mut config = Config::load().await?;
    config.apply_cli_overrides(args)?;
    Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(&args).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("⚠ ERROR: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.list_config {
        config.display();
        return ExitCode::SUCCESS;
    }

    println!("Champions League Data Fetcher");
    println!("{}", "=".repeat(50));

    if let Err(e) = config.require_api_key() {
        eprintln!("⚠ ERROR: {e}");
        return ExitCode::FAILURE;
    }

    // The guard must be kept alive for the duration of the program
    let _guard = match setup_logging(&config, args.debug).await {
        Ok((log_file_path, guard)) => {
            tracing::info!("Logs are being written to: {log_file_path}");
            Some(guard)
        }
        Err(e) => {
            eprintln!("⚠ WARNING: {e}. Continuing without a log file.");
            None
        }
    };

    tracing::info!(
        "Exporting competition {} from {}",
        config.competition,
        config.api_base_url
    );

    let summary = match create_http_client(config.http_timeout_seconds) {
        Ok(client) => run_export(&client, &config).await,
        Err(e) => run_without_client(&config, &AppError::from(e)),
    };
    print_summary(&summary);

    ExitCode::SUCCESS
}
