use std::io;
use std::process;
use std::str::FromStr;
use std::time::Duration;

use apiscrape::pacing::Pacer;
use apiscrape::render::{OutputFormat, Printer};
use apiscrape::{ScrapeConfig, Scraper, SourceId};
use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "apiscrape")]
#[command(
    about = "Fetch a handful of public APIs and web pages and print what they return",
    long_about = None
)]
struct Cli {
    #[arg(
        short = 'l',
        long = "log-level",
        value_enum,
        default_value = "warn",
        help = "Set the logging level"
    )]
    log_level: LogLevel,

    #[arg(
        long,
        value_parser = parse_source,
        value_delimiter = ',',
        help = "Only scrape these sources (comma separated, run order is kept)"
    )]
    only: Vec<SourceId>,

    #[arg(long = "api-key", help = "OpenWeatherMap API key")]
    api_key: Option<String>,

    #[arg(long, default_value = "London", help = "City for the weather report")]
    city: String,

    #[arg(
        long,
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Request timeout in seconds"
    )]
    timeout: u64,

    #[arg(
        long,
        default_value_t = 1000,
        help = "Minimum pause between sources in milliseconds"
    )]
    min_delay: u64,

    #[arg(
        long,
        default_value_t = 3000,
        help = "Maximum pause between sources in milliseconds"
    )]
    max_delay: u64,

    #[arg(long, help = "Do not pause between sources")]
    no_delay: bool,

    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value = "text",
        help = "Output format"
    )]
    format: Format,
}

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn parse_source(s: &str) -> Result<SourceId, String> {
    SourceId::from_str(s).map_err(|e| e.to_string())
}

/// Sources to visit, in run order, without repeats.
fn selected_sources(only: &[SourceId]) -> Vec<SourceId> {
    if only.is_empty() {
        return SourceId::ALL.to_vec();
    }
    SourceId::ALL
        .into_iter()
        .filter(|id| only.contains(id))
        .collect()
}

impl Cli {
    fn config(&self) -> ScrapeConfig {
        let defaults = ScrapeConfig::default();
        let pacing = if self.no_delay {
            Pacer::disabled()
        } else {
            Pacer::new(
                Duration::from_millis(self.min_delay),
                Duration::from_millis(self.max_delay),
            )
        };

        ScrapeConfig {
            openweather_api_key: self
                .api_key
                .clone()
                .unwrap_or_else(|| defaults.openweather_api_key.clone()),
            city: self.city.clone(),
            pacing,
            timeout: Duration::from_secs(self.timeout),
            ..defaults
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.clone().into())
        .init();

    let scraper = Scraper::new(cli.config()).unwrap_or_else(|e| {
        log::error!("Error creating scraper: {}", e);
        process::exit(1);
    });

    let sources = selected_sources(&cli.only);
    log::info!(
        "Scraping {} source(s): {}",
        sources.len(),
        sources
            .iter()
            .map(SourceId::slug)
            .collect::<Vec<_>>()
            .join(", ")
    );

    let mut printer = Printer::new(io::stdout().lock(), cli.format.clone().into());
    let summary = scraper.run(&sources, &mut printer).await;

    log::info!("{}", summary);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_keeps_run_order_and_drops_repeats() {
        let picked = selected_sources(&[SourceId::Quotes, SourceId::Posts, SourceId::Quotes]);
        assert_eq!(picked, vec![SourceId::Posts, SourceId::Quotes]);
    }

    #[test]
    fn test_no_filter_selects_everything() {
        assert_eq!(selected_sources(&[]), SourceId::ALL.to_vec());
    }

    #[test]
    fn test_config_from_flags() {
        let cli = Cli::parse_from([
            "apiscrape",
            "--api-key",
            "k",
            "--city",
            "Nairobi",
            "--no-delay",
            "--only",
            "weather,crypto",
        ]);
        let config = cli.config();

        assert_eq!(config.openweather_api_key, "k");
        assert_eq!(config.city, "Nairobi");
        assert!(config.pacing.is_disabled());
        assert_eq!(cli.only, vec![SourceId::Weather, SourceId::Crypto]);
    }

    #[test]
    fn test_defaults_keep_placeholder_key_and_pacing() {
        let config = Cli::parse_from(["apiscrape"]).config();

        assert!(!config.has_weather_credential());
        assert_eq!(config.pacing, Pacer::default());
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_unknown_source_is_rejected() {
        assert!(Cli::try_parse_from(["apiscrape", "--only", "moon"]).is_err());
    }
}
