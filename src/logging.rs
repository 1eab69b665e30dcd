use crate::config::Config;
use crate::constants::{APP_NAME, LOG_FILE_NAME};
use crate::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Builds the default filter: `RUST_LOG` if set, plus info for this crate.
fn log_filter() -> Result<EnvFilter, AppError> {
    let directive = format!("{APP_NAME}=info")
        .parse::<Directive>()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Splits a log file path into its directory and file name.
fn split_log_path(log_file_path: &str) -> (String, String) {
    let path = Path::new(log_file_path);
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(LOG_FILE_NAME);
    (parent.to_string_lossy().to_string(), file_name.to_string())
}

/// Sets up logging for the run.
///
/// - Always logs to a daily rolling file (config or default location)
/// - With `debug`, additionally mirrors logs to stdout
/// - Creates the log directory if it doesn't exist
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(config: &Config, debug: bool) -> Result<(String, WorkerGuard), AppError> {
    let (log_dir, log_file_name) = split_log_path(&config.log_file_path());

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must outlive every log call or buffered lines are lost
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(log_filter()?);

    let registry = tracing_subscriber::registry().with(file_layer);

    let init_result = if debug {
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(stdout)
                    .with_ansi(true)
                    .with_filter(log_filter()?),
            )
            .try_init()
    } else {
        registry.try_init()
    };
    init_result.map_err(|e| AppError::log_setup_error(e.to_string()))?;

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_log_path() {
        let (dir, file) = split_log_path("/var/log/football/run.log");
        assert_eq!(dir, "/var/log/football");
        assert_eq!(file, "run.log");
    }

    #[test]
    fn test_split_log_path_bare_file_name() {
        let (dir, file) = split_log_path("run.log");
        assert_eq!(dir, ".");
        assert_eq!(file, "run.log");
    }

    #[test]
    fn test_log_filter_builds() {
        assert!(log_filter().is_ok());
    }
}
