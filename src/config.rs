use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "http://localhost:1337";
pub const DEFAULT_VOLUME: f32 = 0.7;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub volume: f32,
}

#[derive(Deserialize)]
struct ConfigImport {
    api_url: Option<String>,
    volume: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            volume: DEFAULT_VOLUME,
        }
    }
}

impl Config {
    /// Reads `config.toml` from the platform config dir, falling back
    /// to defaults when the file is absent or unreadable.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };

        match Self::load_from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                if path.exists() {
                    tracing::warn!("ignoring malformed config at {}: {e}", path.display());
                }
                Config::default()
            }
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_str = std::fs::read_to_string(path.as_ref())?;
        let import = toml::from_str::<ConfigImport>(&file_str)?;
        Ok(Self::from(import))
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ostinato").join("config.toml"))
    }
}

impl From<ConfigImport> for Config {
    fn from(import: ConfigImport) -> Self {
        let defaults = Config::default();

        Config {
            api_url: import
                .api_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            volume: import.volume.unwrap_or(defaults.volume).clamp(0.0, 1.0),
        }
    }
}
