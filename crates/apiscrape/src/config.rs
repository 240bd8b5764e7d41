use std::time::Duration;

use url::{Position, Url};

use crate::API_KEY_PLACEHOLDER;
use crate::pacing::Pacer;

pub(crate) const POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";
pub(crate) const BBC_NEWS_URL: &str = "https://www.bbc.com/news";
pub(crate) const NWS_FORECAST_URL: &str =
    "https://forecast.weather.gov/MapClick.php?lat=40.7128&lon=-74.006";
pub(crate) const ASTROS_URL: &str = "http://api.open-notify.org/astros.json";
pub(crate) const ISS_NOW_URL: &str = "http://api.open-notify.org/iss-now.json";
pub(crate) const COINGECKO_MARKETS_URL: &str = "https://api.coingecko.com/api/v3/coins/markets";
pub(crate) const OPENWEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub(crate) const QUOTES_URL: &str = "https://quotes.toscrape.com/";

/// One URL per data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub posts: String,
    pub bbc_news: String,
    pub weather_alerts: String,
    pub astronauts: String,
    pub iss_position: String,
    pub crypto_markets: String,
    pub weather: String,
    pub quotes: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            posts: POSTS_URL.to_string(),
            bbc_news: BBC_NEWS_URL.to_string(),
            weather_alerts: NWS_FORECAST_URL.to_string(),
            astronauts: ASTROS_URL.to_string(),
            iss_position: ISS_NOW_URL.to_string(),
            crypto_markets: COINGECKO_MARKETS_URL.to_string(),
            weather: OPENWEATHER_URL.to_string(),
            quotes: QUOTES_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Moves every default endpoint onto `base`, keeping each path and query.
    ///
    /// `Endpoints::with_base("http://127.0.0.1:8080")` maps the posts endpoint to
    /// `http://127.0.0.1:8080/posts`, which is how tests point all sources at one
    /// mock server.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        let rebase = |url: &str| format!("{}{}", base, path_and_query(url));

        Self {
            posts: rebase(POSTS_URL),
            bbc_news: rebase(BBC_NEWS_URL),
            weather_alerts: rebase(NWS_FORECAST_URL),
            astronauts: rebase(ASTROS_URL),
            iss_position: rebase(ISS_NOW_URL),
            crypto_markets: rebase(COINGECKO_MARKETS_URL),
            weather: rebase(OPENWEATHER_URL),
            quotes: rebase(QUOTES_URL),
        }
    }
}

fn path_and_query(url: &str) -> String {
    Url::parse(url).map_or_else(
        |_| "/".to_string(),
        |parsed| parsed[Position::BeforePath..].to_string(),
    )
}

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub endpoints: Endpoints,
    pub openweather_api_key: String,
    pub city: String,
    pub pacing: Pacer,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            openweather_api_key: API_KEY_PLACEHOLDER.to_string(),
            city: "London".to_string(),
            pacing: Pacer::default(),
            timeout: Duration::from_secs(30),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ScrapeConfig {
    /// Default configuration with every source pointed at `base` and pacing off.
    pub fn for_base_url(base: &str) -> Self {
        Self {
            endpoints: Endpoints::with_base(base),
            pacing: Pacer::disabled(),
            ..Self::default()
        }
    }

    pub fn has_weather_credential(&self) -> bool {
        let key = self.openweather_api_key.as_str();
        !key.is_empty() && key != API_KEY_PLACEHOLDER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_base_keeps_paths_and_queries() {
        let endpoints = Endpoints::with_base("http://127.0.0.1:4000/");

        assert_eq!(endpoints.posts, "http://127.0.0.1:4000/posts");
        assert_eq!(endpoints.quotes, "http://127.0.0.1:4000/");
        assert_eq!(endpoints.astronauts, "http://127.0.0.1:4000/astros.json");
        assert_eq!(
            endpoints.weather_alerts,
            "http://127.0.0.1:4000/MapClick.php?lat=40.7128&lon=-74.006"
        );
        assert_eq!(
            endpoints.crypto_markets,
            "http://127.0.0.1:4000/api/v3/coins/markets"
        );
    }

    #[test]
    fn test_default_credential_is_placeholder() {
        let config = ScrapeConfig::default();
        assert_eq!(config.openweather_api_key, API_KEY_PLACEHOLDER);
        assert!(!config.has_weather_credential());
    }

    #[test]
    fn test_only_empty_or_placeholder_credential_is_unset() {
        let config = ScrapeConfig {
            openweather_api_key: String::new(),
            ..ScrapeConfig::default()
        };
        assert!(!config.has_weather_credential());

        let config = ScrapeConfig {
            openweather_api_key: "   ".to_string(),
            ..ScrapeConfig::default()
        };
        assert!(config.has_weather_credential());

        let config = ScrapeConfig {
            openweather_api_key: "abc123".to_string(),
            ..ScrapeConfig::default()
        };
        assert!(config.has_weather_credential());
    }
}
