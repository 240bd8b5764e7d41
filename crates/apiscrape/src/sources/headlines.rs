use std::collections::HashSet;
use std::fmt::{self, Display};

use scraper::Html;
use serde::Serialize;

use super::{element_text, selector};
use crate::client::Request;
use crate::config::ScrapeConfig;
use crate::error::ParseError;
use crate::headers::browser_headers;
use crate::source::{Source, SourceId};

const HEADLINE_LIMIT: usize = 15;

/// Tried in order; the BBC front page has changed markup more than once.
const HEADLINE_SELECTORS: &[&str] = &[
    r#"h2[data-testid="card-headline"]"#,
    "h3",
    ".gs-c-promo-heading__title",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Headline {
    pub rank: usize,
    pub text: String,
}

impl Display for Headline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.rank, self.text)
    }
}

/// Merges several text lists into one, dropping exact duplicates and
/// keeping each entry at the position of its first appearance.
pub fn merge_unique<I, S>(groups: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    for text in groups.into_iter().flatten() {
        let text = text.into();
        if seen.insert(text.clone()) {
            merged.push(text);
        }
    }
    merged
}

/// Front page headlines from BBC News.
#[derive(Debug, Clone, Copy, Default)]
pub struct Headlines;

impl Source for Headlines {
    type Record = Headline;

    fn id(&self) -> SourceId {
        SourceId::Headlines
    }

    fn heading(&self, _config: &ScrapeConfig) -> String {
        "Headlines from BBC News".to_string()
    }

    fn request(&self, config: &ScrapeConfig) -> Request {
        Request::get(&config.endpoints.bbc_news).header_map(browser_headers())
    }

    fn extract(&self, body: &str) -> Result<Vec<Headline>, ParseError> {
        let document = Html::parse_document(body);

        let mut groups = Vec::with_capacity(HEADLINE_SELECTORS.len());
        for css in HEADLINE_SELECTORS {
            let sel = selector(css)?;
            let texts: Vec<String> = document
                .select(&sel)
                .map(element_text)
                .filter(|text| !text.is_empty())
                .collect();
            log::debug!("Selector '{}' matched {} headline(s)", css, texts.len());
            groups.push(texts);
        }

        Ok(merge_unique(groups)
            .into_iter()
            .take(HEADLINE_LIMIT)
            .enumerate()
            .map(|(i, text)| Headline { rank: i + 1, text })
            .collect())
    }

    fn empty_message(&self) -> Option<&'static str> {
        Some("No headlines found.")
    }
}
