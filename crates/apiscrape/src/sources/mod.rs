mod alerts;
mod astronauts;
mod crypto;
mod headlines;
mod iss;
mod posts;
mod quotes;
mod weather;

pub use alerts::{Alert, WeatherAlerts};
pub use astronauts::{Astronauts, SpaceRecord};
pub use crypto::{Coin, Crypto};
pub use headlines::{Headline, Headlines, merge_unique};
pub use iss::{IssPosition, IssReport};
pub use posts::{Post, Posts};
pub use quotes::{Quote, Quotes};
pub use weather::{MISSING_KEY_MESSAGE, Weather, WeatherReport};

use scraper::{ElementRef, Selector};

use crate::error::ParseError;

pub(crate) fn selector(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|e| ParseError::InvalidSelector(format!("{css}: {e}")))
}

/// Text content of an element with runs of whitespace collapsed to one space.
pub(crate) fn element_text(element: ElementRef) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
