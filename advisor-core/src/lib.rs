//! Core library for the `weather-advisor` CLI.
//!
//! This crate defines:
//! - The advisory engine (pure temperature/condition rules)
//! - Configuration resolved from the environment
//! - The WeatherAPI.com provider client
//! - The Telegram notification sink
//!
//! It is used by `advisor-cli`, but can also be reused by other binaries or services.

pub mod advice;
pub mod config;
pub mod error;
pub mod model;
pub mod notify;
pub mod provider;

pub use advice::advise;
pub use config::{Config, TelegramConfig};
pub use error::{ConfigError, NotifyError, ProviderError};
pub use model::WeatherReading;
pub use notify::TelegramNotifier;
pub use provider::{WeatherProvider, weatherapi::WeatherApiProvider};
