use crate::{Error, Result};
use postboard_client::{ClientOptions, DEFAULT_ENDPOINT, FetchPolicy};
use postboard_types::{DEFAULT_PAGE_SIZE, PageQueryOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const PATH_ENV_VAR: &str = "POSTBOARD_PATH";

/// Resolve the config file path based on priority:
/// 1. Explicit file path (with tilde expansion)
/// 2. POSTBOARD_PATH environment variable, a directory (with tilde expansion)
/// 3. Platform config directory
/// 4. ~/.postboard
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(PATH_ENV_VAR) {
        return Ok(expand_tilde(&env_path).join(CONFIG_FILE_NAME));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("postboard").join(CONFIG_FILE_NAME));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".postboard").join(CONFIG_FILE_NAME));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or config directory found"
            .to_string(),
    ))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            page_size: default_page_size(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply command-line overrides on top of file values.
    pub fn with_overrides(mut self, endpoint: Option<String>, page_size: Option<u32>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        if let Some(page_size) = page_size {
            self.page_size = page_size;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(Error::Config("endpoint must not be empty".to_string()));
        }
        if self.page_size == 0 {
            return Err(Error::Config("page_size must be at least 1".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(Error::Config("timeout_secs must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            endpoint: self.endpoint.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            fetch_policy: FetchPolicy::CacheFirst,
        }
    }

    pub fn query_options(&self) -> PageQueryOptions {
        PageQueryOptions::latest(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.endpoint, "https://graphqlzero.almansi.me/api");
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "endpoint = \"http://localhost:4000/graphql\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.endpoint, "http://localhost:4000/graphql");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_flag_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "endpoint = \"http://file\"\npage_size = 3\n").unwrap();

        let config = Config::load_from(&path)
            .unwrap()
            .with_overrides(Some("http://flag".to_string()), None);

        assert_eq!(config.endpoint, "http://flag");
        assert_eq!(config.page_size, 3);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "page_size = 0\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("page_size"), "{}", err);

        let config: Config = toml::from_str("timeout_secs = 0\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_secs"), "{}", err);
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join(CONFIG_FILE_NAME);
        let config = Config {
            page_size: 25,
            ..Config::default()
        };

        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_config_path(Some("/tmp/postboard/custom.toml")).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/postboard/custom.toml"));
    }

    #[test]
    fn test_query_options_use_page_size() {
        let config = Config::default().with_overrides(None, Some(4));
        let options = config.query_options();
        assert_eq!(options.slice.unwrap().limit, 4);
    }
}
