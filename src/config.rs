use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct KinshipConfig {
    pub log: LogConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ReportConfig {
    /// Name queried by `kinship demo` when `--name` is not given.
    pub default_subject: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            default_subject: "John".into(),
        }
    }
}

/// Returns `~/.kinship/`
pub fn default_kinship_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".kinship")
}

/// Returns the default config file path: `~/.kinship/config.toml`
pub fn default_config_path() -> PathBuf {
    default_kinship_dir().join("config.toml")
}

impl KinshipConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            KinshipConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (KINSHIP_LOG_LEVEL, KINSHIP_SUBJECT).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("KINSHIP_LOG_LEVEL") {
            self.log.level = val;
        }
        if let Ok(val) = std::env::var("KINSHIP_SUBJECT") {
            self.report.default_subject = val;
        }
    }
}
