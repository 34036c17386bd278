//! Configuration management for sysreport
//!
//! Config file location:
//! - Linux: ~/.config/sysreport/config.toml
//! - macOS: ~/Library/Application Support/sysreport/config.toml
//! - Windows: %APPDATA%/sysreport/config.toml
//!
//! You can override the config location by setting `SYSREPORT_CONFIG_PATH`.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Web UI settings
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Load configuration from file or fall back to defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

            let config: Config = toml::from_str(&content).with_context(|| {
                format!("Failed to parse config from {}", config_path.display())
            })?;

            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(&config_path, toml)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("SYSREPORT_CONFIG_PATH") {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Ok(PathBuf::from(trimmed));
            }
        }

        let proj_dirs = ProjectDirs::from("com", "sysreport", "sysreport")
            .context("Could not determine project directories")?;

        Ok(proj_dirs.config_dir().join("config.toml"))
    }

    /// Create default config file if it doesn't exist
    pub fn init() -> Result<Self> {
        let config = Self::load()?;

        let config_path = Self::config_path()?;
        if !config_path.exists() {
            config.save()?;
        }

        Ok(config)
    }
}

/// Web UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Port the local server binds to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Open the browser automatically when the server starts
    #[serde(default = "default_true")]
    pub open_browser: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            open_browser: default_true(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    // Tests below mutate SYSREPORT_CONFIG_PATH; serialize them.
    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarGuard {
        key: &'static str,
        prev: Option<String>,
    }

    impl EnvVarGuard {
        fn set(key: &'static str, value: impl AsRef<str>) -> Self {
            let prev = std::env::var(key).ok();
            std::env::set_var(key, value.as_ref());
            Self { key, prev }
        }
    }

    impl Drop for EnvVarGuard {
        fn drop(&mut self) {
            if let Some(prev) = &self.prev {
                std::env::set_var(self.key, prev);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    #[test]
    fn test_config_path_env_override() {
        let _guard = env_lock().lock().unwrap();
        let _path = EnvVarGuard::set("SYSREPORT_CONFIG_PATH", "/tmp/sysreport-custom.toml");

        assert_eq!(
            Config::config_path().unwrap(),
            PathBuf::from("/tmp/sysreport-custom.toml")
        );
    }

    #[test]
    fn test_save_creates_parent_dirs_and_reloads() {
        let _guard = env_lock().lock().unwrap();
        let temp_dir = tempfile::tempdir().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let _path = EnvVarGuard::set("SYSREPORT_CONFIG_PATH", config_file.to_string_lossy());

        let mut config = Config::default();
        config.ui.port = 8123;
        config.ui.open_browser = false;
        config.save().unwrap();

        assert!(config_file.exists());
        let loaded = Config::load().unwrap();
        assert_eq!(loaded.ui.port, 8123);
        assert!(!loaded.ui.open_browser);
    }

    #[test]
    fn test_init_persists_defaults_on_first_run() {
        let _guard = env_lock().lock().unwrap();
        let temp_dir = tempfile::tempdir().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        let _path = EnvVarGuard::set("SYSREPORT_CONFIG_PATH", config_file.to_string_lossy());

        assert!(!config_file.exists());
        let config = Config::init().unwrap();
        assert!(config_file.exists());
        assert_eq!(config.ui.port, 3000);

        // Second init keeps the saved file as-is.
        let mut saved = Config::load().unwrap();
        saved.ui.port = 4321;
        saved.save().unwrap();
        let reloaded = Config::init().unwrap();
        assert_eq!(reloaded.ui.port, 4321);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.ui.port, 3000);
        assert!(config.ui.open_browser);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();

        assert!(toml.contains("[ui]"));
        assert!(toml.contains("port"));
        assert!(toml.contains("open_browser"));
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = Config::default();
        config.ui.port = 8123;
        config.ui.open_browser = false;

        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.ui.port, 8123);
        assert!(!parsed.ui.open_browser);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed: Config = toml::from_str("[ui]\nport = 4000\n").unwrap();
        assert_eq!(parsed.ui.port, 4000);
        assert!(parsed.ui.open_browser);
    }
}
