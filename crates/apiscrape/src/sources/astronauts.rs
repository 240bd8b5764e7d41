use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::client::Request;
use crate::config::ScrapeConfig;
use crate::error::ParseError;
use crate::source::{Source, SourceId};

#[derive(Debug, Deserialize)]
struct AstrosResponse {
    number: u32,
    people: Vec<Astronaut>,
}

#[derive(Debug, Deserialize)]
struct Astronaut {
    name: String,
    craft: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpaceRecord {
    Summary { count: u32 },
    Person { name: String, craft: String },
}

impl Display for SpaceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpaceRecord::Summary { count } => write!(f, "Currently {} people in space:", count),
            SpaceRecord::Person { name, craft } => write!(f, "- {} ({})", name, craft),
        }
    }
}

/// People currently in space, from Open Notify.
#[derive(Debug, Clone, Copy, Default)]
pub struct Astronauts;

impl Source for Astronauts {
    type Record = SpaceRecord;

    fn id(&self) -> SourceId {
        SourceId::Astronauts
    }

    fn heading(&self, _config: &ScrapeConfig) -> String {
        "People in Space (Open Notify)".to_string()
    }

    fn request(&self, config: &ScrapeConfig) -> Request {
        Request::get(&config.endpoints.astronauts)
    }

    fn extract(&self, body: &str) -> Result<Vec<SpaceRecord>, ParseError> {
        let response: AstrosResponse = serde_json::from_str(body)?;

        let mut records = Vec::with_capacity(response.people.len() + 1);
        records.push(SpaceRecord::Summary {
            count: response.number,
        });
        records.extend(
            response
                .people
                .into_iter()
                .map(|p| SpaceRecord::Person {
                    name: p.name,
                    craft: p.craft,
                }),
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASTROS: &str = r#"{
        "message": "success",
        "number": 3,
        "people": [
            {"craft": "ISS", "name": "Oleg Kononenko"},
            {"craft": "ISS", "name": "Tracy Caldwell Dyson"},
            {"craft": "Tiangong", "name": "Ye Guangfu"}
        ]
    }"#;

    #[test]
    fn test_extract_summary_then_people_in_source_order() {
        let records = Astronauts.extract(ASTROS).expect("Failed to extract astronauts");
        let lines: Vec<String> = records.iter().map(ToString::to_string).collect();

        assert_eq!(
            lines,
            vec![
                "Currently 3 people in space:",
                "- Oleg Kononenko (ISS)",
                "- Tracy Caldwell Dyson (ISS)",
                "- Ye Guangfu (Tiangong)",
            ]
        );
    }

    #[test]
    fn test_missing_people_is_a_parse_error() {
        let err = Astronauts
            .extract(r#"{"message": "success", "number": 0}"#)
            .unwrap_err();
        assert!(err.to_string().contains("people"));
    }

    #[test]
    fn test_records_serialize_with_kind_tag() {
        let json = serde_json::to_value(SpaceRecord::Person {
            name: "Ye Guangfu".to_string(),
            craft: "Tiangong".to_string(),
        })
        .unwrap();
        assert_eq!(json["kind"], "person");
        assert_eq!(json["craft"], "Tiangong");
    }
}
