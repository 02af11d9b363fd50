//! Offline checks behind `--self-test`: no network, no environment reads.

use advisor_core::advise;

fn joined(temp_f: f64, condition: &str) -> String {
    advise(temp_f, condition).join(" ").to_lowercase()
}

/// Panics on the first failed assertion, so the process exits non-zero.
pub fn run() {
    // Temperature thresholds
    assert!(joined(20.0, "clear").contains("heavy coat"));
    assert!(joined(35.0, "clear").contains("warm jacket"));
    assert!(joined(55.0, "clear").contains("hoodie"));
    assert!(joined(70.0, "clear").contains("t-shirt"));
    assert!(joined(90.0, "clear").contains("hydrate"));

    // Conditions layering
    let adv = joined(50.0, "rain and windy");
    assert!(adv.contains("umbrella") && adv.contains("windbreaker"));

    // Snow rule
    assert!(joined(28.0, "snow").contains("snowing"));
}
