//! Configuration management for tunenotes

use crate::error::ConfigError;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub paths: PathsConfig,
    pub transcribe: TranscribeConfig,
    pub temp: TempConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Request body limit for uploads, in bytes
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Path to yt-dlp binary (auto-detected if not set)
    pub yt_dlp: Option<PathBuf>,
    /// Path to Python binary (auto-detected if not set)
    pub python: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscribeConfig {
    /// Instrument hint used when the request omits one
    pub default_instrument: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TempConfig {
    /// Custom scratch directory (uses system temp if not set)
    pub directory: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
                max_upload_bytes: 50 * 1024 * 1024,
            },
            paths: PathsConfig {
                yt_dlp: None,
                python: None,
            },
            transcribe: TranscribeConfig {
                default_instrument: "flute".to_string(),
            },
            temp: TempConfig { directory: None },
        }
    }
}

impl Config {
    /// Load configuration from file and environment
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Load from default config directory
        if let Some(config_dir) = dirs::config_dir() {
            let default_config = config_dir.join("tunenotes/config.toml");
            if default_config.exists() {
                figment = figment.merge(Toml::file(&default_config));
            }
        }

        // Load from specified config file
        if let Some(path) = config_file {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment. Double underscore separates sections so
        // multi-word keys stay addressable (TUNENOTES_SERVER__MAX_UPLOAD_BYTES).
        figment = figment.merge(Env::prefixed("TUNENOTES_").split("__"));

        figment
            .extract()
            .map_err(|e| ConfigError::LoadError(e.to_string()))
    }

    /// Get yt-dlp path, auto-detecting if not configured
    pub fn yt_dlp_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(ref path) = self.paths.yt_dlp {
            Ok(path.clone())
        } else {
            which::which("yt-dlp")
                .map_err(|_| ConfigError::InvalidValue("yt-dlp not found in PATH".to_string()))
        }
    }

    /// Get Python path, preferring venv if available
    pub fn python_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(ref path) = self.paths.python {
            return Ok(path.clone());
        }

        // Check for venv Python in multiple locations
        let venv_paths = [
            dirs::data_dir().map(|d| d.join("tunenotes/venv/bin/python")),
            dirs::home_dir().map(|d| d.join(".local/share/tunenotes/venv/bin/python")),
        ];

        for path in venv_paths.into_iter().flatten() {
            if path.exists() {
                return Ok(path);
            }
        }

        // Fall back to system Python
        which::which("python3")
            .map_err(|_| ConfigError::InvalidValue("python3 not found in PATH".to_string()))
    }

    /// Get scratch directory root
    pub fn temp_dir(&self) -> PathBuf {
        self.temp
            .directory
            .clone()
            .unwrap_or_else(std::env::temp_dir)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.transcribe.default_instrument, "flute");
        assert!(config.paths.yt_dlp.is_none());
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_env_overrides() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("TUNENOTES_SERVER__PORT", "9100");
            jail.set_env("TUNENOTES_SERVER__MAX_UPLOAD_BYTES", "1048576");
            jail.set_env("TUNENOTES_TRANSCRIBE__DEFAULT_INSTRUMENT", "violin");

            let config = Config::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.server.port, 9100);
            assert_eq!(config.server.max_upload_bytes, 1048576);
            assert_eq!(config.transcribe.default_instrument, "violin");
            Ok(())
        });
    }

    #[test]
    fn test_temp_dir_fallback() {
        let config = Config::default();
        assert_eq!(config.temp_dir(), std::env::temp_dir());

        let custom = Config {
            temp: TempConfig {
                directory: Some(PathBuf::from("/var/scratch")),
            },
            ..Config::default()
        };
        assert_eq!(custom.temp_dir(), PathBuf::from("/var/scratch"));
    }
}
