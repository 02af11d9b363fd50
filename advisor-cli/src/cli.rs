use anyhow::Result;
use clap::Parser;
use inquire::Text;

use advisor_core::{Config, TelegramNotifier, WeatherApiProvider, WeatherProvider, advise};

use crate::{output, selftest};

const DEFAULT_CITY: &str = "Misawa";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather-advisor",
    version,
    about = "Fetch current weather for a city and get simple advice"
)]
pub struct Cli {
    /// City to look up; prompts interactively when omitted.
    pub city: Option<String>,

    /// Run the offline advisory checks and exit.
    #[arg(long)]
    pub self_test: bool,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        if self.self_test {
            selftest::run();
            println!("Self-test passed.");
            return Ok(());
        }

        let city = match self.city {
            Some(city) => city,
            None => prompt_city()?,
        };

        // Missing API key or a failed fetch propagates out of here and
        // terminates the run with a non-zero exit.
        let config = Config::from_env()?;

        let provider = WeatherApiProvider::new(config.weather_api_key.clone());
        let reading = provider.current(&city).await?;

        // Advise on feels-like: closer to what you feel outdoors.
        let advice = advise(reading.feelslike_f, &reading.condition);

        println!("\n{}", output::console_summary(&reading, &advice));

        match config.telegram {
            Some(telegram) => {
                let notifier = TelegramNotifier::new(telegram);
                if let Err(err) = notifier.send(&output::message_text(&reading, &advice)).await {
                    eprintln!("{err}");
                }
            }
            None => {
                eprintln!("Telegram not configured (set TELEGRAM_BOT_TOKEN and TELEGRAM_CHAT_ID).");
            }
        }

        Ok(())
    }
}

fn prompt_city() -> Result<String> {
    let input = Text::new("City:").with_default(DEFAULT_CITY).prompt()?;

    let trimmed = input.trim();
    Ok(if trimmed.is_empty() { DEFAULT_CITY.to_string() } else { trimmed.to_string() })
}
