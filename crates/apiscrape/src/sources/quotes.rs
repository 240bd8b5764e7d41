use std::fmt::{self, Display};

use scraper::Html;
use serde::Serialize;

use super::{element_text, selector};
use crate::client::Request;
use crate::config::ScrapeConfig;
use crate::error::ParseError;
use crate::source::{Source, SourceId};

const QUOTE_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.text, self.author)
    }
}

/// Quotes from quotes.toscrape.com.
#[derive(Debug, Clone, Copy, Default)]
pub struct Quotes;

impl Source for Quotes {
    type Record = Quote;

    fn id(&self) -> SourceId {
        SourceId::Quotes
    }

    fn heading(&self, _config: &ScrapeConfig) -> String {
        "Quotes to Scrape".to_string()
    }

    fn request(&self, config: &ScrapeConfig) -> Request {
        Request::get(&config.endpoints.quotes)
    }

    fn extract(&self, body: &str) -> Result<Vec<Quote>, ParseError> {
        let document = Html::parse_document(body);
        let quote_sel = selector("div.quote")?;
        let text_sel = selector("span.text")?;
        let author_sel = selector("small.author")?;

        let mut quotes = Vec::new();
        for element in document.select(&quote_sel) {
            let text = element.select(&text_sel).next().map(element_text);
            let author = element.select(&author_sel).next().map(element_text);

            match (text, author) {
                (Some(text), Some(author)) if !text.is_empty() && !author.is_empty() => {
                    quotes.push(Quote { text, author });
                }
                _ => log::warn!("Skipping quote block without text or author"),
            }

            if quotes.len() == QUOTE_LIMIT {
                break;
            }
        }

        Ok(quotes)
    }

    fn empty_message(&self) -> Option<&'static str> {
        Some("No quotes found.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_extract_first_five_quotes() {
        let html = fs::read_to_string("fixtures/quotes.html").expect("Failed to read fixture");

        let quotes = Quotes.extract(&html).expect("Failed to extract quotes");

        assert_eq!(quotes.len(), 5);
        assert_eq!(
            quotes[0].to_string(),
            "\u{201c}The world as we have created it is a process of our thinking. It cannot be changed without changing our thinking.\u{201d} - Albert Einstein"
        );
        assert_eq!(quotes[1].author, "J.K. Rowling");
        assert!(quotes.iter().all(|q| q.author != "Steve Martin"));
    }

    #[test]
    fn test_quote_without_author_is_skipped() {
        let html = r#"<html><body>
            <div class="quote"><span class="text">Orphaned words</span></div>
            <div class="quote"><span class="text">Kept</span><small class="author">Someone</small></div>
        </body></html>"#;

        let quotes = Quotes.extract(html).expect("Failed to extract quotes");

        assert_eq!(
            quotes,
            vec![Quote {
                text: "Kept".to_string(),
                author: "Someone".to_string()
            }]
        );
    }
}
