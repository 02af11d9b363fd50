use std::env;

use crate::error::ConfigError;

/// Telegram credentials. Both values are required for a send to happen; if
/// either is missing the notifier is skipped entirely.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
}

/// Runtime configuration, resolved from the environment once at startup.
///
/// Presence of required values is checked here, at construction, so the
/// provider and notifier never read the environment themselves.
#[derive(Debug, Clone)]
pub struct Config {
    /// WeatherAPI.com API key (`WEATHERAPI_KEY`).
    pub weather_api_key: String,

    /// Telegram credentials, present only when both `TELEGRAM_BOT_TOKEN` and
    /// `TELEGRAM_CHAT_ID` are set.
    pub telegram: Option<TelegramConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup, so tests don't have to touch
    /// the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let weather_api_key = lookup("WEATHERAPI_KEY")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let telegram = match (lookup("TELEGRAM_BOT_TOKEN"), lookup("TELEGRAM_CHAT_ID")) {
            (Some(bot_token), Some(chat_id)) if !bot_token.is_empty() && !chat_id.is_empty() => {
                Some(TelegramConfig { bot_token, chat_id })
            }
            _ => None,
        };

        Ok(Self { weather_api_key, telegram })
    }
}
