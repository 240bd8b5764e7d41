use std::io::Write;
use std::time::Duration;

use crate::client::HttpClient;
use crate::config::ScrapeConfig;
use crate::error::ScrapeError;
use crate::render::Printer;
use crate::source::{Source, SourceId};
use crate::sources::{
    Astronauts, Crypto, Headlines, IssPosition, Posts, Quotes, Weather, WeatherAlerts,
};

pub const START_BANNER: &str = "Starting web scraping demo...";
pub const DONE_MESSAGE: &str = "Scraping complete!";

/// What happened to one source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Printed(usize),
    Skipped,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub skipped: usize,
    pub failed: usize,
    pub paused: Duration,
}

impl RunSummary {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Printed(_) => self.succeeded += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Failed => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.skipped + self.failed
    }
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} source(s): {} printed, {} skipped, {} failed, paused {:.1}s",
            self.total(),
            self.succeeded,
            self.skipped,
            self.failed,
            self.paused.as_secs_f64()
        )
    }
}

/// Runs data sources one after another and prints what they return.
#[derive(Debug, Clone)]
pub struct Scraper {
    client: HttpClient,
    config: ScrapeConfig,
}

impl Scraper {
    pub fn new(config: ScrapeConfig) -> Result<Self, ScrapeError> {
        let client = HttpClient::new(&config)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// Fetches one source and prints its section. Errors never escape: they
    /// become a single diagnostic line.
    pub async fn scrape<S, W>(&self, source: &S, printer: &mut Printer<W>) -> Outcome
    where
        S: Source,
        W: Write,
    {
        let id = source.id();
        let heading = source.heading(&self.config);

        if let Some(message) = source.gate(&self.config) {
            log::warn!("Skipping {}: not configured", id);
            printer.skipped(id, &heading, &message);
            return Outcome::Skipped;
        }

        match self.fetch_records(source).await {
            Ok(records) => {
                log::info!("{}: {} record(s)", id, records.len());
                printer.records(id, &heading, &records, source.empty_message());
                Outcome::Printed(records.len())
            }
            Err(e) => {
                log::error!("{} failed: {}", id, e);
                printer.failure(id, &heading, &e);
                Outcome::Failed
            }
        }
    }

    pub async fn scrape_id<W: Write>(&self, id: SourceId, printer: &mut Printer<W>) -> Outcome {
        match id {
            SourceId::Posts => self.scrape(&Posts, printer).await,
            SourceId::Headlines => self.scrape(&Headlines, printer).await,
            SourceId::Alerts => self.scrape(&WeatherAlerts, printer).await,
            SourceId::Astronauts => self.scrape(&Astronauts, printer).await,
            SourceId::Iss => self.scrape(&IssPosition, printer).await,
            SourceId::Crypto => self.scrape(&Crypto, printer).await,
            SourceId::Weather => self.scrape(&Weather, printer).await,
            SourceId::Quotes => self.scrape(&Quotes, printer).await,
        }
    }

    /// Scrapes `ids` in order, pausing between sources but not after the last.
    pub async fn run<W: Write>(&self, ids: &[SourceId], printer: &mut Printer<W>) -> RunSummary {
        let mut summary = RunSummary::default();
        printer.status(START_BANNER);
        printer.status("");

        for (i, id) in ids.iter().enumerate() {
            if i > 0 {
                summary.paused += self.config.pacing.pause().await;
            }
            summary.record(self.scrape_id(*id, printer).await);
        }

        printer.status("");
        printer.status(DONE_MESSAGE);
        log::info!("Run finished: {}", summary);
        summary
    }

    async fn fetch_records<S: Source>(&self, source: &S) -> Result<Vec<S::Record>, ScrapeError> {
        let request = source.request(&self.config);
        let body = self.client.fetch(&request).await?;
        Ok(source.extract(&body)?)
    }
}
