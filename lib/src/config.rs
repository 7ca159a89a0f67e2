use crate::error::Result;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable that overrides every other base URL setting
pub const BASE_URL_ENV: &str = "FIREHOSE_BASE_URL";

const PRODUCTION_BASE_URL: &str = "https://firehose-api.herokuapp.com/api";
const LOCALHOST_BASE_URL: &str = "http://localhost:3000/api";
const ANDROID_EMULATOR_BASE_URL: &str = "http://10.0.2.2:3000/api";

/// Which backend deployment the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    #[default]
    Production,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub environment: Environment,

    /// Explicit API base URL, wins over `local_ip` and `environment`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// LAN address of a development backend (`ifconfig | grep "inet "`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_ip: Option<String>,

    /// Talk to the host machine from inside an Android emulator
    #[serde(default)]
    pub android_emulator: bool,

    /// Custom user-agent string for HTTP requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// HTTP timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            base_url: None,
            local_ip: None,
            android_emulator: false,
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_user_agent() -> String {
    format!("firehose/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Load configuration from a file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from default location (~/.config/firehose/config.yml)
    /// Falls back to default config if file doesn't exist
    pub fn load() -> Self {
        let config_path = crate::utils::get_config_dir().join("config.yml");

        if config_path.exists() {
            match Self::load_from_path(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    warn!(
                        "Failed to load config from {:?}: {}; using defaults",
                        config_path, e
                    );
                    Self::default()
                }
            }
        } else {
            Self::default()
        }
    }

    /// Save configuration to a file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Save configuration to default location
    pub fn save(&self) -> Result<()> {
        let config_path = crate::utils::get_config_dir().join("config.yml");
        self.save_to_path(&config_path)
    }

    /// API base URL, honouring `FIREHOSE_BASE_URL`
    pub fn base_url(&self) -> String {
        self.resolve_base_url(std::env::var(BASE_URL_ENV).ok().as_deref())
    }

    /// Resolution order: override, `base_url`, `local_ip`, then the environment default
    pub fn resolve_base_url(&self, env_override: Option<&str>) -> String {
        if let Some(url) = env_override.filter(|u| !u.trim().is_empty()) {
            return url.trim_end_matches('/').to_string();
        }

        if let Some(url) = self.base_url.as_deref() {
            return url.trim_end_matches('/').to_string();
        }

        if let Some(ip) = self.local_ip.as_deref() {
            return format!("http://{}:3000/api", ip);
        }

        match self.environment {
            Environment::Production => PRODUCTION_BASE_URL.to_string(),
            Environment::Development if self.android_emulator => {
                ANDROID_EMULATOR_BASE_URL.to_string()
            }
            Environment::Development => LOCALHOST_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.user_agent.starts_with("firehose/"));
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_save_and_load() {
        let temp_file = NamedTempFile::new().unwrap();
        let config_path = temp_file.path();

        let saved = Config {
            environment: Environment::Development,
            local_ip: Some("10.0.1.52".to_string()),
            user_agent: "Custom User Agent".to_string(),
            ..Config::default()
        };

        saved.save_to_path(config_path).unwrap();
        let loaded = Config::load_from_path(config_path).unwrap();

        assert_eq!(saved.user_agent, loaded.user_agent);
        assert_eq!(loaded.environment, Environment::Development);
        assert_eq!(loaded.local_ip.as_deref(), Some("10.0.1.52"));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_file = NamedTempFile::new().unwrap();
        let config_path = temp_file.path();

        fs::write(config_path, "invalid: yaml: content:").unwrap();

        let result = Config::load_from_path(config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_partial_config() {
        let temp_file = NamedTempFile::new().unwrap();
        let config_path = temp_file.path();

        fs::write(config_path, "environment: development\n").unwrap();

        let config = Config::load_from_path(config_path).unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.user_agent, default_user_agent());
        assert_eq!(config.timeout_secs, default_timeout_secs());
    }

    #[rstest]
    #[case(Environment::Production, false, None, None, "https://firehose-api.herokuapp.com/api")]
    #[case(Environment::Development, false, None, None, "http://localhost:3000/api")]
    #[case(Environment::Development, true, None, None, "http://10.0.2.2:3000/api")]
    #[case(Environment::Production, false, Some("10.0.1.52"), None, "http://10.0.1.52:3000/api")]
    #[case(
        Environment::Development,
        true,
        Some("10.0.1.52"),
        Some("https://api.example.com/api/"),
        "https://api.example.com/api"
    )]
    fn test_resolve_base_url(
        #[case] environment: Environment,
        #[case] android_emulator: bool,
        #[case] local_ip: Option<&str>,
        #[case] base_url: Option<&str>,
        #[case] expected: &str,
    ) {
        let config = Config {
            environment,
            android_emulator,
            local_ip: local_ip.map(str::to_string),
            base_url: base_url.map(str::to_string),
            ..Config::default()
        };
        assert_eq!(config.resolve_base_url(None), expected);
    }

    #[test]
    fn test_env_override_wins() {
        let config = Config {
            base_url: Some("https://configured.example.com/api".to_string()),
            ..Config::default()
        };
        assert_eq!(
            config.resolve_base_url(Some("http://override:4000/api/")),
            "http://override:4000/api"
        );
        assert_eq!(
            config.resolve_base_url(Some("  ")),
            "https://configured.example.com/api"
        );
    }
}
