use crate::config::ScrapeConfig;
use crate::error::ScrapeError;

use reqwest::header::HeaderMap;
use reqwest::{Client, Url};

/// A single outbound GET: target URL plus optional headers and query pairs.
#[derive(Debug, Clone, Default)]
pub struct Request {
    pub url: String,
    pub headers: HeaderMap,
    pub query: Vec<(String, String)>,
}

impl Request {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn header_map(mut self, headers: HeaderMap) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Full URL with the query pairs appended to any already present.
    pub fn to_url(&self) -> Result<Url, ScrapeError> {
        let invalid = |reason: String| ScrapeError::InvalidUrl {
            url: self.url.clone(),
            reason,
        };

        let mut url = Url::parse(&self.url).map_err(|e| invalid(e.to_string()))?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        Ok(url)
    }
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(config: &ScrapeConfig) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }

    /// Issues the GET and returns the body text. Non-2xx statuses are errors.
    pub async fn fetch(&self, request: &Request) -> Result<String, ScrapeError> {
        let url = request.to_url()?;
        log::info!("GET {}", url);

        Ok(self
            .client
            .get(url)
            .headers(request.headers.clone())
            .send()
            .await
            .inspect_err(|e| log::error!("HTTP error: {e:?}"))?
            .error_for_status()
            .inspect_err(|e| log::error!("HTTP status error: {e}"))?
            .text()
            .await
            .inspect_err(|e| log::error!("Decode error: {e:?}"))?)
    }
}
