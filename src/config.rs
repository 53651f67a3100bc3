use std::path::{Path, PathBuf};

use clap::Parser;
use figment::{
    Figment,
    providers::{Format, Json, Serialized, Toml, Yaml},
};
use normalize_path::NormalizePath;
use resolve_path::PathResolveExt;
use serde::{Deserialize, Serialize};

use crate::{cli::CliArgs, error::ConfigError};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Telegram media groups hold at most ten items.
const MAX_LIMIT: u8 = 10;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct General {
    /// Scratch directory for downloaded images
    pub downloads_dir: PathBuf,
}

#[derive(Deserialize, Serialize, Clone)]
pub struct Telegram {
    /// Telegram bot token
    pub(crate) token: String,
}

#[derive(Deserialize, Serialize, Clone)]
pub struct SauceNao {
    pub(crate) api_key: String,
    /// Minimal similarity in percent a result needs to be shown
    pub threshold: f32,
    /// Number of results requested per search
    pub limit: u8,
    /// Request timeout in sec
    pub timeout: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    pub general: General,
    pub telegram: Telegram,
    pub saucenao: SauceNao,
}

impl std::fmt::Debug for Telegram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Telegram").field("token", &"<redacted>").finish()
    }
}

impl std::fmt::Debug for SauceNao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SauceNao")
            .field("api_key", &"<redacted>")
            .field("threshold", &self.threshold)
            .field("limit", &self.limit)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: General {
                downloads_dir: PathBuf::from("./downloads"),
            },
            telegram: Telegram {
                token: String::new(),
            },
            saucenao: SauceNao {
                api_key: String::new(),
                threshold: 50.0,
                limit: 6,
                timeout: 30,
            },
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.telegram.token.trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }

        if self.saucenao.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        let threshold = self.saucenao.threshold;
        if !threshold.is_finite() || !(0.0..=100.0).contains(&threshold) {
            return Err(ConfigError::InvalidThreshold(threshold));
        }

        if !(1..=MAX_LIMIT).contains(&self.saucenao.limit) {
            return Err(ConfigError::InvalidLimit(self.saucenao.limit));
        }

        if self.saucenao.timeout == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(())
    }
}

pub(crate) fn load_config() -> Result<Config, ConfigError> {
    log::debug!("Parsing CLI args...");
    load_from_args(CliArgs::parse())
}

fn load_from_args(args: CliArgs) -> Result<Config, ConfigError> {
    let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

    let config_path = PathBuf::from(
        args.config
            .clone()
            .unwrap_or(DEFAULT_CONFIG_PATH.to_string()),
    );

    if config_path.exists() {
        log::info!("Config file found: {}", config_path.display());
        figment = merge_file(figment, &config_path)?;
    } else if config_path.to_str() != Some(DEFAULT_CONFIG_PATH) {
        return Err(ConfigError::NotFound(config_path));
    }

    extract(figment.merge(Serialized::defaults(args.as_overrides())))
}

fn merge_file(figment: Figment, path: &Path) -> Result<Figment, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Ok(figment.merge(Toml::file(path))),
        Some("json") => Ok(figment.merge(Json::file(path))),
        Some("yaml") | Some("yml") => Ok(figment.merge(Yaml::file(path))),
        _ => Err(ConfigError::UnknownFormat(path.to_path_buf())),
    }
}

fn extract(figment: Figment) -> Result<Config, ConfigError> {
    let mut config: Config = figment.extract()?;

    log::debug!("Loaded config: {:#?}", config);

    config.general.downloads_dir = config.general.downloads_dir.resolve().normalize();
    config.validate()?;

    Ok(config)
}
