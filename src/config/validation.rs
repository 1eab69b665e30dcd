use crate::error::AppError;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API base URL cannot be empty and must use http:// or https://
/// - Competition code must be non-empty ASCII alphanumeric (e.g. `CL`, `PL`)
/// - If log file path is provided, it cannot be empty
///
/// The API key is not checked here; a missing key is reported separately
/// so the caller can tell it apart from a malformed config.
pub fn validate_config(
    api_base_url: &str,
    competition: &str,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if api_base_url.is_empty() {
        return Err(AppError::config_error("API base URL cannot be empty"));
    }

    if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "API base URL must start with http:// or https://, got '{api_base_url}'"
        )));
    }

    if competition.is_empty() || !competition.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::config_error(format!(
            "Invalid competition code '{competition}'"
        )));
    }

    if let Some(log_path) = log_file_path
        && log_path.is_empty()
    {
        return Err(AppError::config_error("Log file path cannot be empty"));
    }

    Ok(())
}
