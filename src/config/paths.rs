use crate::constants::{APP_NAME, LOG_FILE_NAME};
use std::path::Path;

/// Returns the platform-specific path for the config file.
///
/// # Notes
/// - Uses platform-specific config directory (e.g., ~/.config on Linux)
/// - Falls back to current directory if config directory is unavailable
pub fn get_config_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(APP_NAME)
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(APP_NAME)
        .join("logs")
        .to_string_lossy()
        .to_string()
}

/// Returns the default log file path inside the log directory.
pub fn get_default_log_file_path() -> String {
    Path::new(&get_log_dir_path())
        .join(LOG_FILE_NAME)
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_namespaced() {
        assert!(get_config_path().contains(APP_NAME));
        assert!(get_config_path().ends_with("config.toml"));
        assert!(get_log_dir_path().contains(APP_NAME));
        assert!(get_default_log_file_path().ends_with(LOG_FILE_NAME));
    }
}
