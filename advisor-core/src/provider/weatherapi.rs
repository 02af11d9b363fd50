use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::{ProviderError, truncate_body},
    model::WeatherReading,
};

use super::WeatherProvider;

const CURRENT_URL: &str = "https://api.weatherapi.com/v1/current.json";
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the WeatherAPI.com current-weather endpoint.
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        let http = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self { api_key, http }
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherReading, ProviderError> {
        let res = self
            .http
            .get(CURRENT_URL)
            .query(&[("key", self.api_key.as_str()), ("q", city), ("aqi", "no")])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                status,
                message: extract_error_message(&body),
            });
        }

        let parsed: WaResponse = serde_json::from_str(&body)?;

        Ok(normalize(parsed, city))
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn current(&self, city: &str) -> Result<WeatherReading, ProviderError> {
        self.fetch_current(city).await
    }
}

#[derive(Debug, Deserialize, Default)]
struct WaLocation {
    name: Option<String>,
    country: Option<String>,
    localtime: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_f: f64,
    feelslike_f: Option<f64>,
    condition: WaCondition,
    humidity: Option<u8>,
    wind_mph: Option<f64>,
    wind_dir: Option<String>,
    gust_mph: Option<f64>,
    precip_in: Option<f64>,
    pressure_in: Option<f64>,
    uv: Option<f64>,
    vis_miles: Option<f64>,
    last_updated: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    #[serde(default)]
    location: Option<WaLocation>,
    current: WaCurrent,
}

fn normalize(parsed: WaResponse, requested_city: &str) -> WeatherReading {
    let loc = parsed.location.unwrap_or_default();
    let cur = parsed.current;

    let city = loc
        .name
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| requested_city.to_string());

    WeatherReading {
        city,
        country: loc.country,
        localtime: loc.localtime,
        temp_f: cur.temp_f,
        feelslike_f: cur.feelslike_f.unwrap_or(cur.temp_f),
        condition: cur.condition.text.to_lowercase(),
        humidity: cur.humidity,
        wind_mph: cur.wind_mph,
        wind_dir: cur.wind_dir,
        gust_mph: cur.gust_mph,
        precip_in: cur.precip_in,
        pressure_in: cur.pressure_in,
        uv: cur.uv,
        vis_miles: cur.vis_miles,
        last_updated: cur.last_updated,
    }
}

/// Pull `error.message` out of the WeatherAPI error envelope, falling back to
/// the truncated raw body when the envelope doesn't parse.
fn extract_error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct Envelope {
        error: EnvelopeError,
    }

    #[derive(Deserialize)]
    struct EnvelopeError {
        message: String,
    }

    match serde_json::from_str::<Envelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => truncate_body(body),
    }
}
