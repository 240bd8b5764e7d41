use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::client::Request;
use crate::config::ScrapeConfig;
use crate::error::ParseError;
use crate::source::{Source, SourceId};

#[derive(Debug, Deserialize)]
struct IssNowResponse {
    timestamp: i64,
    iss_position: RawPosition,
}

// Open Notify sends the coordinates as strings.
#[derive(Debug, Deserialize)]
struct RawPosition {
    latitude: String,
    longitude: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssReport {
    pub timestamp: i64,
    pub latitude: f64,
    pub longitude: f64,
}

impl Display for IssReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ISS Position: Latitude {}, Longitude {}",
            self.latitude, self.longitude
        )
    }
}

fn parse_coordinate(name: &str, raw: &str) -> Result<f64, ParseError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidValue {
            field: name.to_string(),
            value: raw.to_string(),
        })
}

/// Current position of the International Space Station.
#[derive(Debug, Clone, Copy, Default)]
pub struct IssPosition;

impl Source for IssPosition {
    type Record = IssReport;

    fn id(&self) -> SourceId {
        SourceId::Iss
    }

    fn heading(&self, _config: &ScrapeConfig) -> String {
        "ISS Current Location".to_string()
    }

    fn request(&self, config: &ScrapeConfig) -> Request {
        Request::get(&config.endpoints.iss_position)
    }

    fn extract(&self, body: &str) -> Result<Vec<IssReport>, ParseError> {
        let response: IssNowResponse = serde_json::from_str(body)?;

        Ok(vec![IssReport {
            timestamp: response.timestamp,
            latitude: parse_coordinate("latitude", &response.iss_position.latitude)?,
            longitude: parse_coordinate("longitude", &response.iss_position.longitude)?,
        }])
    }
}
