use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{API_URL_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, TOKEN_FILE_NAME};
use crate::errors::{SiteSageError, SiteSageResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# SiteSage CLI configuration

[api]
# Base URL of the SiteSage audit service (overridden by SITESAGE_API_URL)
base_url = "http://localhost:8080"

[polling]
# How often pending audits are re-fetched, in milliseconds
interval_ms = 5000

[auth]
# Where the session token is kept (defaults to ~/sitesage/auth.json)
# token_file = "/home/user/.sitesage-auth.json"
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR_NAME))
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE_NAME)
    }

    pub fn token_path(config: &Config) -> PathBuf {
        match &config.auth.token_file {
            Some(path) => PathBuf::from(path),
            None => Self::config_dir().join(TOKEN_FILE_NAME),
        }
    }

    /// Loads `~/sitesage/config.toml` if present, then applies environment
    /// overrides.
    pub fn load() -> SiteSageResult<Config> {
        let mut config = Self::load_from(&Self::config_path())?;
        Self::apply_env_overrides(&mut config, std::env::var(API_URL_ENV).ok());
        Ok(config)
    }

    pub fn load_from(path: &Path) -> SiteSageResult<Config> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        log::debug!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| SiteSageError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| SiteSageError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })
    }

    pub fn apply_env_overrides(config: &mut Config, api_url: Option<String>) {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            log::debug!("Using API URL from {}: {}", API_URL_ENV, url);
            config.api.base_url = url.trim().to_string();
        }
    }

    pub fn create_sample_config() -> SiteSageResult<PathBuf> {
        let path = Self::config_path();
        Self::create_sample_config_at(&path)?;
        Ok(path)
    }

    pub fn create_sample_config_at(path: &Path) -> SiteSageResult<()> {
        if path.exists() {
            return Err(SiteSageError::config_error(
                &format!("Configuration already exists at {}", path.display()),
                None,
                Some("Edit the existing file or remove it first"),
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, SAMPLE_CONFIG)?;
        println!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        match url::Url::parse(&config.api.base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => errors.push(format!("api.base_url must use http or https, got '{}'", url.scheme())),
            Err(e) => errors.push(format!("api.base_url '{}' is not a valid URL: {}", config.api.base_url, e)),
        }

        if config.polling.interval_ms == 0 {
            errors.push("polling.interval_ms must be greater than zero".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
