use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(about = "Telegram bot looking up image sources on SauceNAO")]
pub(crate) struct CliArgs {
    /// Telegram bot token
    #[arg(short, long, env = "SAUCEBOT_TELEGRAM_TOKEN")]
    pub(crate) token: Option<String>,

    /// SauceNAO API key
    #[arg(short, long, env = "SAUCEBOT_SAUCENAO_API_KEY")]
    pub(crate) api_key: Option<String>,

    /// Downloads directory (default: "downloads")
    #[arg(short, long, env = "SAUCEBOT_DOWNLOADS")]
    pub(crate) downloads: Option<String>,

    /// Minimal similarity in percent a result needs to be shown (default: 50)
    #[arg(long, env = "SAUCEBOT_THRESHOLD")]
    pub(crate) threshold: Option<f32>,

    /// Number of results requested from SauceNAO, at most 10 (default: 6)
    #[arg(long, env = "SAUCEBOT_LIMIT")]
    pub(crate) limit: Option<u8>,

    /// SauceNAO request timeout in sec (default: 30)
    #[arg(long, env = "SAUCEBOT_TIMEOUT")]
    pub(crate) timeout: Option<u64>,

    /// Config file path (default: "config.toml")
    #[arg(short, long, env = "SAUCEBOT_CONFIG")]
    pub(crate) config: Option<String>,
}

#[derive(Serialize, Debug, Default)]
pub(crate) struct Overrides {
    general: GeneralOverrides,
    telegram: TelegramOverrides,
    saucenao: SauceNaoOverrides,
}

#[derive(Serialize, Debug, Default)]
struct GeneralOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    downloads_dir: Option<PathBuf>,
}

#[derive(Serialize, Debug, Default)]
struct TelegramOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<String>,
}

#[derive(Serialize, Debug, Default)]
struct SauceNaoOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    threshold: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timeout: Option<u64>,
}

impl CliArgs {
    /// Only the values given on the command line or through the environment.
    pub fn as_overrides(&self) -> Overrides {
        Overrides {
            general: GeneralOverrides {
                downloads_dir: self.downloads.as_ref().map(PathBuf::from),
            },
            telegram: TelegramOverrides {
                token: self.token.clone(),
            },
            saucenao: SauceNaoOverrides {
                api_key: self.api_key.clone(),
                threshold: self.threshold,
                limit: self.limit,
                timeout: self.timeout,
            },
        }
    }
}
