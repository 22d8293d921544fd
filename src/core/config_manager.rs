// src/core/config_manager.rs
//! Configuration for the backend connection: defaults, config.yaml, environment, CLI

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const CONFIG_FILE: &str = "config.yaml";

pub const ENV_SELECTOR: &str = "RESUME_SCANNER_ENV";
pub const BACKEND_URL_VAR: &str = "RESUME_SCANNER_BACKEND_URL";
pub const TIMEOUT_VAR: &str = "RESUME_SCANNER_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigManager {
    pub environment: String,
    pub service: ServiceConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    pub backend_url: String,
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            timeout_seconds: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: Option<ServiceConfig>,
    production: Option<ServiceConfig>,
}

/// Overrides read from the environment or the command line
#[derive(Debug, Clone, Default)]
pub struct ServiceOverrides {
    pub backend_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl ConfigManager {
    /// Load configuration from the working directory and process environment
    pub fn load(cli: &ServiceOverrides) -> Result<Self> {
        let environment = Self::get_environment();
        let config_path = PathBuf::from(CONFIG_FILE);
        let env_overrides = Self::env_overrides()?;
        Self::load_from(&environment, &config_path, &env_overrides, cli)
    }

    /// Resolve layers in order: defaults, config file, environment, command line
    pub fn load_from(
        environment: &str,
        config_path: &Path,
        env: &ServiceOverrides,
        cli: &ServiceOverrides,
    ) -> Result<Self> {
        info!("Loading configuration for environment: {}", environment);

        let mut service = Self::load_file(environment, config_path)?.unwrap_or_default();

        for overrides in [env, cli] {
            if let Some(url) = &overrides.backend_url {
                service.backend_url = url.clone();
            }
            if overrides.timeout_seconds.is_some() {
                service.timeout_seconds = overrides.timeout_seconds;
            }
        }

        reqwest::Url::parse(&service.backend_url)
            .with_context(|| format!("Invalid backend URL: {}", service.backend_url))?;

        Ok(Self {
            environment: environment.to_string(),
            service,
        })
    }

    fn get_environment() -> String {
        std::env::var(ENV_SELECTOR)
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn env_overrides() -> Result<ServiceOverrides> {
        let backend_url = std::env::var(BACKEND_URL_VAR).ok();
        let timeout_seconds = match std::env::var(TIMEOUT_VAR) {
            Ok(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("{} must be a number of seconds", TIMEOUT_VAR))?,
            ),
            Err(_) => None,
        };

        Ok(ServiceOverrides {
            backend_url,
            timeout_seconds,
        })
    }

    fn load_file(environment: &str, config_path: &Path) -> Result<Option<ServiceConfig>> {
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config_file: ConfigFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(match environment {
            "production" => config_file.production,
            _ => config_file.local,
        })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.service.timeout_seconds.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = "\
local:
  backend_url: http://127.0.0.1:5001
production:
  backend_url: https://scanner.example.com
  timeout_seconds: 60
";

    fn write_config(dir: &Path) -> PathBuf {
        let path = dir.join(CONFIG_FILE);
        std::fs::write(&path, YAML).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_config_file() {
        let config = ConfigManager::load_from(
            "local",
            Path::new("/nonexistent/config.yaml"),
            &ServiceOverrides::default(),
            &ServiceOverrides::default(),
        )
        .unwrap();
        assert_eq!(config.service.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_config_file_section_by_environment() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_config(dir.path());
        let none = ServiceOverrides::default();

        let local = ConfigManager::load_from("local", &path, &none, &none).unwrap();
        assert_eq!(local.service.backend_url, "http://127.0.0.1:5001");

        let production = ConfigManager::load_from("production", &path, &none, &none).unwrap();
        assert_eq!(production.service.backend_url, "https://scanner.example.com");
        assert_eq!(production.timeout(), Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_cli_overrides_environment_overrides_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_config(dir.path());
        let env = ServiceOverrides {
            backend_url: Some("http://env-host:5000".to_string()),
            timeout_seconds: Some(5),
        };
        let cli = ServiceOverrides {
            backend_url: Some("http://cli-host:5000".to_string()),
            timeout_seconds: None,
        };

        let config = ConfigManager::load_from("local", &path, &env, &cli).unwrap();
        assert_eq!(config.service.backend_url, "http://cli-host:5000");
        assert_eq!(config.service.timeout_seconds, Some(5));
    }

    #[test]
    fn test_invalid_backend_url_rejected() {
        let cli = ServiceOverrides {
            backend_url: Some("not a url".to_string()),
            timeout_seconds: None,
        };
        let result = ConfigManager::load_from(
            "local",
            Path::new("/nonexistent/config.yaml"),
            &ServiceOverrides::default(),
            &cli,
        );
        assert!(result.is_err());
    }
}
