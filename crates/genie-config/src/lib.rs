use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Global configuration for genie (`config.toml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub export: ExportDefaults,
}

/// Where listings and file bytes come from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Transport timeout for a single listing or fetch call
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDefaults {
    #[serde(default = "default_grid_cols")]
    pub grid_cols: u32,

    #[serde(default = "default_hue")]
    pub hue: i64,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ExportDefaults {
    fn default() -> Self {
        Self {
            grid_cols: default_grid_cols(),
            hue: default_hue(),
            output_dir: default_output_dir(),
            max_depth: default_max_depth(),
        }
    }
}

fn default_api_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_timeout_secs() -> u64 {
    300
}

fn default_user_agent() -> String {
    "genie/0.1 (snapshot exporter)".to_string()
}

fn default_grid_cols() -> u32 {
    1
}

fn default_hue() -> i64 {
    180
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_max_depth() -> usize {
    64
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            // Create default config file
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(path, content)?;
            Ok(config)
        }
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "genie", "genie") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.genie/config.toml")
        }
    }
}
