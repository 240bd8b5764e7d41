use std::fmt::{self, Display};
use std::str::FromStr;

use serde::Serialize;

use crate::client::Request;
use crate::config::ScrapeConfig;
use crate::error::ParseError;

#[derive(Debug, thiserror::Error)]
#[error("Unknown source '{0}'. Accepted values: {accepted}", accepted = SourceId::accepted())]
pub struct SourceIdParseError(String);

/// Every data source, in the order a full run visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceId {
    Posts,
    Headlines,
    Alerts,
    Astronauts,
    Iss,
    Crypto,
    Weather,
    Quotes,
}

impl SourceId {
    pub const ALL: [SourceId; 8] = [
        SourceId::Posts,
        SourceId::Headlines,
        SourceId::Alerts,
        SourceId::Astronauts,
        SourceId::Iss,
        SourceId::Crypto,
        SourceId::Weather,
        SourceId::Quotes,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            SourceId::Posts => "posts",
            SourceId::Headlines => "headlines",
            SourceId::Alerts => "alerts",
            SourceId::Astronauts => "astronauts",
            SourceId::Iss => "iss",
            SourceId::Crypto => "crypto",
            SourceId::Weather => "weather",
            SourceId::Quotes => "quotes",
        }
    }

    /// Human readable name used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            SourceId::Posts => "API data",
            SourceId::Headlines => "BBC News headlines",
            SourceId::Alerts => "weather alerts",
            SourceId::Astronauts => "astronaut data",
            SourceId::Iss => "ISS position",
            SourceId::Crypto => "cryptocurrency data",
            SourceId::Weather => "weather data",
            SourceId::Quotes => "quotes",
        }
    }

    fn accepted() -> String {
        Self::ALL
            .iter()
            .map(|id| format!("'{}'", id.slug()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for SourceId {
    type Err = SourceIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|id| id.slug() == wanted)
            .ok_or_else(|| SourceIdParseError(s.to_string()))
    }
}

impl Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// One data source: how to ask for its data and how to turn the reply into
/// printable records.
pub trait Source {
    type Record: Display + Serialize;

    fn id(&self) -> SourceId;

    /// Section title, printed between `===` markers.
    fn heading(&self, config: &ScrapeConfig) -> String;

    /// A message to print instead of fetching, when the source cannot run
    /// with the given configuration.
    fn gate(&self, _config: &ScrapeConfig) -> Option<String> {
        None
    }

    fn request(&self, config: &ScrapeConfig) -> Request;

    fn extract(&self, body: &str) -> Result<Vec<Self::Record>, ParseError>;

    /// Printed in place of an empty record list.
    fn empty_message(&self) -> Option<&'static str> {
        None
    }
}
