pub mod client;
pub mod config;
pub mod error;
pub mod format;
mod headers;
pub mod pacing;
pub mod render;
pub mod scraper;
pub mod source;
pub mod sources;

pub use config::ScrapeConfig;
pub use error::{ParseError, ScrapeError};
pub use scraper::{Outcome, RunSummary, Scraper};
pub use source::{Source, SourceId};

/// Placeholder credential that marks the OpenWeatherMap key as not configured.
pub const API_KEY_PLACEHOLDER: &str = "YOUR_API_KEY";
