use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::Args;

const CONFIG_ENV: &str = "ECGATE_CONFIG";
const DEFAULT_PATH: &str = "ecgate.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_info")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// The public key that may log in, as PEM or DER.
    pub allowed_key: Option<PathBuf>,
    /// Accept identical canonical encodings before decoding points.
    #[serde(default = "default_true")]
    pub canonical_fast_path: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            allowed_key: None,
            canonical_fast_path: default_true(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_info(),
            log_format: LogFormat::default(),
            auth: AuthConfig::default(),
        }
    }
}

impl Config {
    /// Reads the config from `ECGATE_CONFIG`, `--config` or `ecgate.toml`,
    /// in that order. Only a missing `ecgate.toml` is not an error.
    pub fn load(args: &Args) -> Result<Self> {
        let explicit = std::env::var(CONFIG_ENV)
            .map(PathBuf::from)
            .ok()
            .or_else(|| args.config.clone());

        let path = match explicit {
            Some(path) => path,
            None => {
                let path = PathBuf::from(DEFAULT_PATH);
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = std::fs::read_to_string(&path).wrap_err_with(|| {
            format!("failed to open config file '{}'. you can change the config file path with the --config arg or the {CONFIG_ENV} environment variable", path.display())
        })?;

        let mut config = Self::parse(&content)
            .wrap_err_with(|| format!("invalid config file '{}'", path.display()))?;

        // Relative key paths are relative to the config file.
        if let (Some(key), Some(dir)) = (&mut config.auth.allowed_key, path.parent()) {
            if key.is_relative() {
                *key = dir.join(&*key);
            }
        }

        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config = toml::from_str(content)?;
        Ok(config)
    }
}

fn default_info() -> String {
    "info".to_owned()
}

fn default_true() -> bool {
    true
}
