use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::client::Request;
use crate::config::ScrapeConfig;
use crate::error::ParseError;
use crate::source::{Source, SourceId};

pub const MISSING_KEY_MESSAGE: &str = "OpenWeatherMap API key not set. Sign up for a free key at https://openweathermap.org/api and pass it with --api-key to fetch weather data.";

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    name: String,
    weather: Vec<Condition>,
    main: Readings,
    wind: Wind,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct Readings {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub city: String,
    pub temperature_c: f64,
    pub description: String,
    pub humidity: u8,
    pub wind_speed: f64,
}

impl Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Weather in {}: {:.1}°C, {}",
            self.city, self.temperature_c, self.description
        )?;
        writeln!(f, "Humidity: {}%", self.humidity)?;
        write!(f, "Wind Speed: {} m/s", self.wind_speed)
    }
}

/// Current conditions for one city from OpenWeatherMap. Needs an API key.
#[derive(Debug, Clone, Copy, Default)]
pub struct Weather;

impl Source for Weather {
    type Record = WeatherReport;

    fn id(&self) -> SourceId {
        SourceId::Weather
    }

    fn heading(&self, config: &ScrapeConfig) -> String {
        format!("Current Weather in {}", config.city)
    }

    fn gate(&self, config: &ScrapeConfig) -> Option<String> {
        if config.has_weather_credential() {
            None
        } else {
            Some(MISSING_KEY_MESSAGE.to_string())
        }
    }

    fn request(&self, config: &ScrapeConfig) -> Request {
        Request::get(&config.endpoints.weather)
            .query("q", &config.city)
            .query("appid", &config.openweather_api_key)
            .query("units", "metric")
    }

    fn extract(&self, body: &str) -> Result<Vec<WeatherReport>, ParseError> {
        let response: WeatherResponse = serde_json::from_str(body)?;

        let description = response
            .weather
            .into_iter()
            .next()
            .map(|c| c.description)
            .ok_or_else(|| ParseError::MissingField("weather[0].description".to_string()))?;

        Ok(vec![WeatherReport {
            city: response.name,
            temperature_c: response.main.temp,
            description,
            humidity: response.main.humidity,
            wind_speed: response.wind.speed,
        }])
    }
}
