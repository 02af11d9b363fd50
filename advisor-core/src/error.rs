use reqwest::StatusCode;
use thiserror::Error;

/// Fatal at startup: required configuration is missing.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("WEATHERAPI_KEY is not set in your environment")]
    MissingApiKey,
}

/// Fatal during a run: the weather fetch failed, so there is nothing to
/// report on.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Weather request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Status { status: StatusCode, message: String },

    #[error("Failed to parse weather API response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Never fatal: the caller reports these to stderr and the run completes.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Telegram network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Telegram send error ({status}): {description}")]
    Status { status: StatusCode, description: String },
}

/// Cap a raw response body for inclusion in an error message. The cut is
/// backed off to a char boundary so multibyte bodies never panic the
/// error path.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;

    if body.len() <= MAX {
        return body.to_string();
    }

    let mut cut = MAX;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }

    format!("{}...", &body[..cut])
}
