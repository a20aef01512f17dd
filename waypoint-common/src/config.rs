//! Configuration loading and root folder resolution

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Environment variable overriding the root folder
pub const ROOT_FOLDER_ENV: &str = "WAYPOINT_ROOT_FOLDER";

/// Default API base URL used by the tracker when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5780";

/// Default bind address for the API service
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5780";

/// Optional settings read from `config.toml`
///
/// Every field is optional; a missing or unreadable file yields the defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TomlConfig {
    pub root_folder: Option<PathBuf>,
    pub api_base_url: Option<String>,
    pub bind_addr: Option<String>,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load the platform config file, falling back to defaults with a warning
    pub fn load_or_default() -> Self {
        let path = match config_file_path() {
            Ok(path) => path,
            Err(_) => return Self::default(),
        };

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring config file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// API base URL, trimmed of any trailing slash
    pub fn api_base_url(&self) -> String {
        self.api_base_url
            .as_deref()
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string()
    }

    pub fn bind_addr(&self) -> String {
        self.bind_addr
            .clone()
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
    }

    pub fn log_level(&self) -> String {
        self.log_level.clone().unwrap_or_else(|| "info".to_string())
    }
}

/// Root folder resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_root_folder(cli_arg: Option<&Path>, config: &TomlConfig) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(ROOT_FOLDER_ENV) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Some(root_folder) = &config.root_folder {
        return root_folder.clone();
    }

    // Priority 4: OS-dependent compiled default
    default_root_folder()
}

/// Get default configuration file path for the platform
pub fn config_file_path() -> Result<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("waypoint").join("config.toml"));

    if cfg!(target_os = "linux") {
        // Try ~/.config/waypoint/config.toml first, then /etc/waypoint/config.toml
        let system_config = PathBuf::from("/etc/waypoint/config.toml");

        if let Some(path) = user_config {
            if path.exists() {
                return Ok(path);
            }
        }
        if system_config.exists() {
            return Ok(system_config);
        }
        return Err(Error::Config("No config file found".to_string()));
    }

    let path = user_config
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;
    if path.exists() {
        Ok(path)
    } else {
        Err(Error::Config(format!("Config file not found: {:?}", path)))
    }
}

/// Get OS-dependent default root folder path
pub fn default_root_folder() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("waypoint"))
        .unwrap_or_else(|| PathBuf::from("./waypoint_data"))
}

/// Path of the API service database inside a root folder
pub fn database_path(root_folder: &Path) -> PathBuf {
    root_folder.join("waypoint.db")
}

/// Directory holding the tracker's local stores inside a root folder
pub fn local_state_dir(root_folder: &Path) -> PathBuf {
    root_folder.join("local")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::parse(
            r#"
            root_folder = "/srv/waypoint"
            api_base_url = "http://example.test:9000/"
            bind_addr = "0.0.0.0:9000"
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.root_folder, Some(PathBuf::from("/srv/waypoint")));
        assert_eq!(config.api_base_url(), "http://example.test:9000");
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::parse("").unwrap();
        assert_eq!(config, TomlConfig::default());
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(config.bind_addr(), DEFAULT_BIND_ADDR);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::parse("root_folder = ").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_paths_inside_root() {
        let root = PathBuf::from("/data/wp");
        assert_eq!(database_path(&root), PathBuf::from("/data/wp/waypoint.db"));
        assert_eq!(local_state_dir(&root), PathBuf::from("/data/wp/local"));
    }
}
