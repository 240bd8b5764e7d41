use std::fmt::{self, Display};

use scraper::Html;
use serde::Serialize;

use super::{element_text, selector};
use crate::client::Request;
use crate::config::ScrapeConfig;
use crate::error::ParseError;
use crate::headers::browser_headers;
use crate::source::{Source, SourceId};

const ALERT_SELECTOR: &str = ".panel-danger li";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub text: String,
}

impl Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}", self.text)
    }
}

/// Active hazard notices on a National Weather Service forecast page.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeatherAlerts;

impl Source for WeatherAlerts {
    type Record = Alert;

    fn id(&self) -> SourceId {
        SourceId::Alerts
    }

    fn heading(&self, _config: &ScrapeConfig) -> String {
        "Weather Alerts (National Weather Service)".to_string()
    }

    fn request(&self, config: &ScrapeConfig) -> Request {
        Request::get(&config.endpoints.weather_alerts).header_map(browser_headers())
    }

    fn extract(&self, body: &str) -> Result<Vec<Alert>, ParseError> {
        let document = Html::parse_document(body);
        let sel = selector(ALERT_SELECTOR)?;

        Ok(document
            .select(&sel)
            .map(element_text)
            .filter(|text| !text.is_empty())
            .map(|text| Alert { text })
            .collect())
    }

    fn empty_message(&self) -> Option<&'static str> {
        Some("No active weather alerts found.")
    }
}
