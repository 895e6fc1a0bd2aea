//! Contracts for the weather, news, and media collaborators.
//!
//! The shell only formats what these services return. Real API clients live outside this crate;
//! the `Unavailable*` defaults report that no client was configured.

use std::fmt;

/// Current conditions for one city.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    /// City name as requested.
    pub city: String,
    /// Temperature in degrees Celsius.
    pub temperature_c: f64,
    /// Apparent temperature in degrees Celsius.
    pub feels_like_c: f64,
    /// Short condition text, e.g. `scattered clouds`.
    pub description: String,
    /// Relative humidity.
    pub humidity_percent: u8,
    /// Wind speed in meters per second.
    pub wind_speed_ms: f64,
    /// Sea-level pressure in hectopascals.
    pub pressure_hpa: u32,
    /// Local sunrise time, `HH:MM`.
    pub sunrise: String,
    /// Local sunset time, `HH:MM`.
    pub sunset: String,
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Weather in {}:", title_case(&self.city))?;
        writeln!(f, "------------------------")?;
        writeln!(f, "Temperature: {}°C", self.temperature_c)?;
        writeln!(f, "Feels like: {}°C", self.feels_like_c)?;
        writeln!(f, "Weather: {}", title_case(&self.description))?;
        writeln!(f, "Humidity: {}%", self.humidity_percent)?;
        writeln!(f, "Wind Speed: {} m/s", self.wind_speed_ms)?;
        writeln!(f, "Pressure: {} hPa", self.pressure_hpa)?;
        writeln!(f, "Sunrise: {}", self.sunrise)?;
        write!(f, "Sunset: {}", self.sunset)
    }
}

/// Host service returning current weather.
pub trait WeatherService {
    /// Fetches current conditions for `city`.
    fn current(&self, city: &str) -> Result<WeatherReport, String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Weather service used when no API client is configured.
pub struct UnavailableWeatherService;

impl WeatherService for UnavailableWeatherService {
    fn current(&self, _city: &str) -> Result<WeatherReport, String> {
        Err("Weather service is not configured.".to_string())
    }
}

/// Headline categories accepted by `news category`.
pub const NEWS_CATEGORIES: [&str; 7] = [
    "business",
    "entertainment",
    "general",
    "health",
    "science",
    "sports",
    "technology",
];

/// Which headlines to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsQuery {
    /// Top headlines in one category.
    Category(String),
    /// Recent articles about one country.
    Country(String),
    /// Recent articles about one country within one category.
    CountryCategory {
        /// Country name as typed.
        country: String,
        /// Lower-cased category.
        category: String,
    },
}

/// One news article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Headline.
    pub title: String,
    /// Publisher name.
    pub source: String,
    /// Publication time, `YYYY-MM-DD HH:MM`.
    pub published: String,
    /// Optional summary.
    pub description: Option<String>,
    /// Link to the full article.
    pub url: String,
}

/// Host service returning news headlines.
pub trait NewsService {
    /// Fetches articles for `query`.
    fn headlines(&self, query: &NewsQuery) -> Result<Vec<Article>, String>;

    /// Country names accepted by `news country`.
    fn countries(&self) -> Vec<String> {
        Vec::new()
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// News service used when no API client is configured.
pub struct UnavailableNewsService;

impl NewsService for UnavailableNewsService {
    fn headlines(&self, _query: &NewsQuery) -> Result<Vec<Article>, String> {
        Err("News service is not configured.".to_string())
    }
}

/// One parsed media-player request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaCommand {
    /// Resume playback, or search and play `query`.
    Play {
        /// Track search text.
        query: Option<String>,
    },
    /// Toggle pause.
    Pause,
    /// Skip to the next track.
    Next,
    /// Return to the previous track.
    Previous,
    /// Toggle shuffle.
    Shuffle,
    /// Show the current track.
    Status,
    /// Set the output volume.
    Volume(u8),
    /// List the user's playlists.
    Playlists,
    /// Start a playlist by name.
    PlaylistPlay(String),
    /// Add the current track to a playlist.
    PlaylistAdd(String),
    /// Create an empty playlist.
    PlaylistCreate(String),
    /// Suggest tracks based on recent listening.
    Recommend,
    /// Show the playback queue.
    Queue,
    /// Search and enqueue a track.
    QueueAdd(String),
    /// Show detailed information about the current track.
    Info,
}

/// Host service controlling a media player account.
pub trait MediaService {
    /// Executes `command` and returns the lines to print.
    fn execute(&self, command: &MediaCommand) -> Result<Vec<String>, String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Media service used when no player client is connected.
pub struct UnavailableMediaService;

impl MediaService for UnavailableMediaService {
    fn execute(&self, _command: &MediaCommand) -> Result<Vec<String>, String> {
        Err("Spotify controller not properly initialized".to_string())
    }
}

/// Upper-cases the first letter of every whitespace-separated word.
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn weather_report_renders_block() {
        let report = WeatherReport {
            city: "new york".to_string(),
            temperature_c: 21.5,
            feels_like_c: 20.0,
            description: "light rain".to_string(),
            humidity_percent: 80,
            wind_speed_ms: 3.2,
            pressure_hpa: 1012,
            sunrise: "06:12".to_string(),
            sunset: "19:40".to_string(),
        };
        assert_eq!(
            report.to_string(),
            "Weather in New York:\n------------------------\nTemperature: 21.5°C\nFeels like: 20°C\nWeather: Light Rain\nHumidity: 80%\nWind Speed: 3.2 m/s\nPressure: 1012 hPa\nSunrise: 06:12\nSunset: 19:40"
        );
    }

    #[test]
    fn title_case_handles_mixed_input() {
        assert_eq!(title_case("uNITED kingdom"), "United Kingdom");
        assert_eq!(title_case(""), "");
    }
}
