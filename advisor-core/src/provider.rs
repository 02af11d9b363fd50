use std::fmt::Debug;

use async_trait::async_trait;

use crate::{error::ProviderError, model::WeatherReading};

pub mod weatherapi;

/// A source of current weather for a named city.
///
/// Any failure here is fatal for the run; callers do not retry.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, city: &str) -> Result<WeatherReading, ProviderError>;
}
