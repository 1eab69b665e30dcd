use crate::cli::Args;
use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_COMPETITION, env};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_default_log_file_path};
use validation::validate_config;

/// Configuration structure for the application.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// football-data.org API token, sent as `X-Auth-Token`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL of the API, without a trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Competition code, e.g. `CL` for the Champions League.
    #[serde(default = "default_competition")]
    pub competition: String,
    /// Directory the CSV tables are written to. Defaults to the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
    /// Path to the log file. If not specified, logs go to the platform config dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds. No timeout is applied when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_timeout_seconds: Option<u64>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_competition() -> String {
    DEFAULT_COMPETITION.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: None,
            api_base_url: default_api_base_url(),
            competition: default_competition(),
            output_dir: None,
            log_file_path: None,
            http_timeout_seconds: None,
        }
    }
}

/// Reads an environment variable, treating blank values as unset.
fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl Config {
    /// Loads configuration from the default config file location, falling
    /// back to defaults when no file exists. Environment variables override
    /// config file values.
    ///
    /// # Environment Variables
    /// - `API_KEY` / `FOOTBALL_DATA_API_KEY` - API token
    /// - `FOOTBALL_DATA_API_URL` - Override API base URL
    /// - `FOOTBALL_DATA_COMPETITION` - Override competition code
    /// - `FOOTBALL_TABLES_OUTPUT_DIR` - Override output directory
    /// - `FOOTBALL_TABLES_LOG_FILE` - Override log file path
    /// - `FOOTBALL_TABLES_HTTP_TIMEOUT` - HTTP timeout in seconds
    ///
    /// A missing API key is not an error here; see [`Config::require_api_key`].
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_environment();
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration from a custom file path without applying
    /// environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Loads a `.env` file from the working directory or one of its parents,
    /// then applies the environment. Variables already set in the process
    /// take precedence over the file.
    pub fn apply_environment(&mut self) {
        dotenvy::dotenv().ok();
        self.apply_env_overrides();
    }

    /// Applies environment variable overrides on top of the current values.
    pub fn apply_env_overrides(&mut self) {
        if let Some(api_key) = non_empty_env(env::API_KEY).or_else(|| non_empty_env(env::API_KEY_ALT))
        {
            self.api_key = Some(api_key);
        }

        if let Some(base_url) = non_empty_env(env::API_BASE_URL) {
            self.api_base_url = base_url;
        }

        if let Some(competition) = non_empty_env(env::COMPETITION) {
            self.competition = competition;
        }

        if let Some(output_dir) = non_empty_env(env::OUTPUT_DIR) {
            self.output_dir = Some(output_dir);
        }

        if let Some(log_file_path) = non_empty_env(env::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = non_empty_env(env::HTTP_TIMEOUT).and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = Some(timeout);
        }
    }

    /// Applies command line overrides, which take precedence over both the
    /// config file and the environment.
    pub fn apply_cli_overrides(&mut self, args: &Args) -> Result<(), AppError> {
        if let Some(competition) = &args.competition {
            self.competition = competition.clone();
        }
        if let Some(output_dir) = &args.output_dir {
            self.output_dir = Some(output_dir.clone());
        }
        if let Some(log_file) = &args.log_file {
            self.log_file_path = Some(log_file.clone());
        }
        self.validate()
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.api_base_url, &self.competition, &self.log_file_path)
    }

    /// Returns the API key, or [`AppError::MissingApiKey`] when none was configured.
    pub fn require_api_key(&self) -> Result<&str, AppError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AppError::missing_api_key(get_config_path()))
    }

    /// Directory the CSV tables are written to.
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Log file path, falling back to the platform default.
    pub fn log_file_path(&self) -> String {
        self.log_file_path
            .clone()
            .unwrap_or_else(get_default_log_file_path)
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Displays the effective configuration settings to stdout with the
    /// API key masked.
    pub fn display(&self) {
        let config_path = get_config_path();
        let file_state = if Path::new(&config_path).exists() {
            ""
        } else {
            " (not present, using defaults)"
        };

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}{file_state}");
        println!("────────────────────────────────────");
        println!("API Base URL:");
        println!("{}", self.api_base_url);
        println!("────────────────────────────────────");
        println!("Competition:");
        println!("{}", self.competition);
        println!("────────────────────────────────────");
        println!("API Key:");
        println!("{}", mask_api_key(self.api_key.as_deref()));
        println!("────────────────────────────────────");
        println!("Output Directory:");
        println!("{}", self.output_dir().display());
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        match self.http_timeout_seconds {
            Some(seconds) => println!("{seconds} seconds"),
            None => println!("(transport default)"),
        }
        println!("────────────────────────────────────");
        println!("Log File Location:");
        println!("{}", self.log_file_path());
        if self.log_file_path.is_none() {
            println!("(Default location)");
        }
    }
}

/// Masks all but the last four characters of the API key.
pub fn mask_api_key(api_key: Option<&str>) -> String {
    match api_key.map(str::trim).filter(|key| !key.is_empty()) {
        None => "(not set)".to_string(),
        Some(key) => {
            let chars: Vec<char> = key.chars().collect();
            if chars.len() <= 4 {
                "*".repeat(chars.len())
            } else {
                let visible: String = chars[chars.len() - 4..].iter().collect();
                format!("{}{visible}", "*".repeat(chars.len() - 4))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serial_test::serial;
    use tempfile::tempdir;

    const ALL_ENV_VARS: &[&str] = &[
        env::API_KEY,
        env::API_KEY_ALT,
        env::API_BASE_URL,
        env::COMPETITION,
        env::OUTPUT_DIR,
        env::LOG_FILE,
        env::HTTP_TIMEOUT,
    ];

    fn clear_env() {
        for name in ALL_ENV_VARS {
            // SAFETY: tests touching the environment are marked #[serial].
            unsafe { std::env::remove_var(name) };
        }
    }

    fn set_env(name: &str, value: &str) {
        // SAFETY: tests touching the environment are marked #[serial].
        unsafe { std::env::set_var(name, value) };
    }

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let config_content = r#"
api_key = "secret-token"
api_base_url = "https://api.example.com/v4"
competition = "PL"
output_dir = "/tmp/tables"
http_timeout_seconds = 20
"#;
        tokio::fs::write(&config_path, config_content).await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config.api_key.as_deref(), Some("secret-token"));
        assert_eq!(config.api_base_url, "https://api.example.com/v4");
        assert_eq!(config.competition, "PL");
        assert_eq!(config.output_dir(), PathBuf::from("/tmp/tables"));
        assert_eq!(config.http_timeout_seconds, Some(20));
        assert_eq!(config.log_file_path, None);
    }

    #[tokio::test]
    async fn test_config_load_minimal_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "api_key = \"abc\"\n")
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.competition, DEFAULT_COMPETITION);
        assert_eq!(config.output_dir(), PathBuf::from("."));
        assert_eq!(config.http_timeout_seconds, None);
    }

    #[tokio::test]
    async fn test_config_load_invalid_toml() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "api_key = [unterminated")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        set_env(env::API_KEY, "env-key");
        set_env(env::COMPETITION, "SA");
        set_env(env::API_BASE_URL, "http://localhost:9999");
        set_env(env::HTTP_TIMEOUT, "15");

        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(config.api_key.as_deref(), Some("env-key"));
        assert_eq!(config.competition, "SA");
        assert_eq!(config.api_base_url, "http://localhost:9999");
        assert_eq!(config.http_timeout_seconds, Some(15));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_env_alternate_api_key_and_blank_values() {
        clear_env();
        set_env(env::API_KEY, "   ");
        set_env(env::API_KEY_ALT, "alt-key");
        set_env(env::HTTP_TIMEOUT, "not-a-number");

        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(config.api_key.as_deref(), Some("alt-key"));
        assert_eq!(config.http_timeout_seconds, None);

        clear_env();
    }

    /// Runs `f` with the working directory set to `dir`, restoring it after.
    fn in_dir<T>(dir: &Path, f: impl FnOnce() -> T) -> T {
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir).unwrap();
        let result = f();
        std::env::set_current_dir(previous).unwrap();
        result
    }

    #[test]
    #[serial]
    fn test_dotenv_file_supplies_api_key() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        std::fs::write(
            temp_dir.path().join(".env"),
            "API_KEY=dotenv-key\nFOOTBALL_DATA_COMPETITION=PL\n",
        )
        .unwrap();

        let config = in_dir(temp_dir.path(), || {
            let mut config = Config::default();
            config.apply_environment();
            config
        });

        assert_eq!(config.require_api_key().unwrap(), "dotenv-key");
        assert_eq!(config.competition, "PL");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_process_env_wins_over_dotenv_file() {
        clear_env();
        set_env(env::API_KEY, "process-key");
        let temp_dir = tempdir().unwrap();
        std::fs::write(temp_dir.path().join(".env"), "API_KEY=dotenv-key\n").unwrap();

        let config = in_dir(temp_dir.path(), || {
            let mut config = Config::default();
            config.apply_environment();
            config
        });

        assert_eq!(config.api_key.as_deref(), Some("process-key"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_env_does_not_clear_file_values() {
        clear_env();
        let mut config = Config {
            api_key: Some("file-key".to_string()),
            ..Config::default()
        };
        config.apply_env_overrides();
        assert_eq!(config.api_key.as_deref(), Some("file-key"));
    }

    #[test]
    fn test_require_api_key() {
        let config = Config::default();
        assert!(matches!(
            config.require_api_key(),
            Err(AppError::MissingApiKey { .. })
        ));

        let blank = Config {
            api_key: Some("  ".to_string()),
            ..Config::default()
        };
        assert!(blank.require_api_key().is_err());

        let set = Config {
            api_key: Some("token".to_string()),
            ..Config::default()
        };
        assert_eq!(set.require_api_key().unwrap(), "token");
    }

    #[test]
    fn test_cli_overrides_take_precedence() {
        let mut config = Config {
            competition: "PL".to_string(),
            ..Config::default()
        };
        let args = Args::parse_from([
            "football_tables",
            "--competition",
            "BL1",
            "--output-dir",
            "out",
        ]);
        config.apply_cli_overrides(&args).unwrap();

        assert_eq!(config.competition, "BL1");
        assert_eq!(config.output_dir(), PathBuf::from("out"));
    }

    #[test]
    fn test_cli_override_is_validated() {
        let mut config = Config::default();
        let args = Args::parse_from(["football_tables", "--competition", "not valid"]);
        assert!(config.apply_cli_overrides(&args).is_err());
    }

    #[test]
    fn test_config_toml_round_trip_skips_unset_fields() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        assert!(!serialized.contains("api_key"));
        assert!(!serialized.contains("http_timeout_seconds"));

        let loaded: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_mask_api_key() {
        assert_eq!(mask_api_key(None), "(not set)");
        assert_eq!(mask_api_key(Some("")), "(not set)");
        assert_eq!(mask_api_key(Some("abc")), "***");
        assert_eq!(mask_api_key(Some("abcdef123456")), "********3456");
    }
}
