/// A normalized current-weather snapshot, immutable once constructed.
///
/// Temperatures are Fahrenheit. The condition text is lowercased by the
/// provider so advisory matching stays case-insensitive. Everything beyond
/// the first few fields is display metadata the API may omit.
#[derive(Debug, Clone)]
pub struct WeatherReading {
    /// Display name; falls back to the requested city when the provider
    /// omits one.
    pub city: String,
    pub country: Option<String>,
    pub localtime: Option<String>,

    pub temp_f: f64,
    /// Defaults to `temp_f` when the provider omits it.
    pub feelslike_f: f64,
    pub condition: String,

    pub humidity: Option<u8>,
    pub wind_mph: Option<f64>,
    pub wind_dir: Option<String>,
    pub gust_mph: Option<f64>,
    pub precip_in: Option<f64>,
    pub pressure_in: Option<f64>,
    pub uv: Option<f64>,
    pub vis_miles: Option<f64>,
    pub last_updated: Option<String>,
}
