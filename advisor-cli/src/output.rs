//! Rendering of the console summary and the Telegram message.

use std::fmt::Display;

use advisor_core::WeatherReading;

/// Multi-line weather report for stdout.
pub fn console_summary(reading: &WeatherReading, advice: &[&str]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Current weather in {}, {}\n",
        reading.city,
        reading.country.as_deref().unwrap_or("")
    ));
    out.push_str(&format!(" - Local time:  {}\n", opt(&reading.localtime)));
    out.push_str(&format!(
        " - Temp:        {:.1}°F (feels like {:.1}°F)\n",
        reading.temp_f, reading.feelslike_f
    ));
    out.push_str(&format!(" - Condition:   {}\n", reading.condition));
    out.push_str(&format!(" - Humidity:    {}%\n", opt(&reading.humidity)));
    out.push_str(&format!(
        " - Wind:        {} mph {}, gusts {} mph\n",
        opt(&reading.wind_mph),
        reading.wind_dir.as_deref().unwrap_or(""),
        opt(&reading.gust_mph)
    ));
    out.push_str(&format!(
        " - Precip:      {} in, Pressure: {} inHg\n",
        opt(&reading.precip_in),
        opt(&reading.pressure_in)
    ));
    out.push_str(&format!(
        " - Visibility:  {} mi, UV: {}\n",
        opt(&reading.vis_miles),
        opt(&reading.uv)
    ));

    out.push_str("\nAdvice:\n");
    out.push_str(&format!(" - {}", advice.join("\n - ")));

    out
}

/// Compact line-per-field layout for the Telegram message, advice appended.
pub fn message_text(reading: &WeatherReading, advice: &[&str]) -> String {
    let mut lines = vec![
        format!(
            "Weather in {}, {}",
            reading.city,
            reading.country.as_deref().unwrap_or("")
        ),
        format!("Local time: {}", opt(&reading.localtime)),
        String::new(),
        format!(
            "Temp: {:.1}°F (feels like {:.1}°F)",
            reading.temp_f, reading.feelslike_f
        ),
        format!("Condition: {}", reading.condition),
        format!("Humidity: {}%", opt(&reading.humidity)),
        format!(
            "Wind: {} mph {}, gusts {} mph",
            opt(&reading.wind_mph),
            reading.wind_dir.as_deref().unwrap_or(""),
            opt(&reading.gust_mph)
        ),
        format!(
            "Precip: {} in | Pressure: {} inHg",
            opt(&reading.precip_in),
            opt(&reading.pressure_in)
        ),
        format!(
            "Visibility: {} mi | UV: {}",
            opt(&reading.vis_miles),
            opt(&reading.uv)
        ),
        String::new(),
        "Advice:".to_string(),
    ];

    lines.extend(advice.iter().map(|a| format!("- {a}")));

    lines.join("\n")
}

fn opt<T: Display>(value: &Option<T>) -> String {
    value.as_ref().map_or_else(|| "N/A".to_string(), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reading() -> WeatherReading {
        WeatherReading {
            city: "Misawa".to_string(),
            country: Some("Japan".to_string()),
            localtime: Some("2024-01-15 08:30".to_string()),
            temp_f: 28.4,
            feelslike_f: 21.2,
            condition: "light snow".to_string(),
            humidity: Some(84),
            wind_mph: Some(12.5),
            wind_dir: Some("NW".to_string()),
            gust_mph: Some(20.1),
            precip_in: Some(0.02),
            pressure_in: Some(29.95),
            uv: Some(1.0),
            vis_miles: Some(5.0),
            last_updated: Some("2024-01-15 08:15".to_string()),
        }
    }

    #[test]
    fn console_summary_lists_all_fields_and_advice() {
        let reading = sample_reading();
        let advice = vec!["Very cold — heavy coat, gloves, and hat."];

        let text = console_summary(&reading, &advice);

        assert!(text.starts_with("Current weather in Misawa, Japan"));
        assert!(text.contains("28.4°F (feels like 21.2°F)"));
        assert!(text.contains(" - Condition:   light snow"));
        assert!(text.contains(" - Humidity:    84%"));
        assert!(text.contains("gusts 20.1 mph"));
        assert!(text.contains("\nAdvice:\n - Very cold"));
    }

    #[test]
    fn missing_metadata_renders_as_not_available() {
        let mut reading = sample_reading();
        reading.country = None;
        reading.localtime = None;
        reading.humidity = None;
        reading.wind_mph = None;
        reading.wind_dir = None;

        let text = console_summary(&reading, &["Feels mild — a t-shirt should be fine."]);

        assert!(text.contains("Current weather in Misawa, \n"));
        assert!(text.contains(" - Local time:  N/A"));
        assert!(text.contains(" - Humidity:    N/A%"));
        assert!(text.contains(" - Wind:        N/A mph ,"));
    }

    #[test]
    fn message_text_ends_with_the_advice_list() {
        let reading = sample_reading();
        let advice =
            vec!["It’s cold — wear a warm jacket.", "It’s snowing — waterproof jacket and warm shoes."];

        let text = message_text(&reading, &advice);

        assert!(text.starts_with("Weather in Misawa, Japan"));
        assert!(text.contains("Temp: 28.4°F (feels like 21.2°F)"));
        assert!(text.ends_with("- It’s snowing — waterproof jacket and warm shoes."));
    }
}
