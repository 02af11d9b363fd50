//! The advisory engine: pure rules mapping a temperature and a condition
//! description to clothing/preparation advice.

/// Derive advice from a temperature (°F) and a free-text condition.
///
/// Callers normally pass the feels-like temperature. The condition is matched
/// case-insensitively by substring, so "light rain" and "Patchy rain nearby"
/// both trigger the rain advisory.
///
/// The result is never empty: exactly one temperature advisory comes first,
/// followed by any condition advisories in snow, rain, wind order.
pub fn advise(temp_f: f64, condition: &str) -> Vec<&'static str> {
    let mut advice = Vec::new();

    // Threshold ladder, first match wins. The hot check is strict, so
    // 60..=85 inclusive falls through to "mild".
    if temp_f < 25.0 {
        advice.push("Very cold — heavy coat, gloves, and hat.");
    } else if temp_f < 40.0 {
        advice.push("It’s cold — wear a warm jacket.");
    } else if temp_f < 60.0 {
        advice.push("A bit cool — bring a light jacket or hoodie.");
    } else if temp_f > 85.0 {
        advice.push("Hot — hydrate and consider sunscreen.");
    } else {
        advice.push("Feels mild — a t-shirt should be fine.");
    }

    let condition = condition.to_lowercase();

    if condition.contains("snow") {
        advice.push("It’s snowing — waterproof jacket and warm shoes.");
    }
    if condition.contains("rain") {
        advice.push("Rain expected — bring an umbrella or rain jacket.");
    }
    if condition.contains("wind") {
        advice.push("Windy — a windbreaker is recommended.");
    }

    advice
}
