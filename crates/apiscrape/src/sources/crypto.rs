use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::client::Request;
use crate::config::ScrapeConfig;
use crate::error::ParseError;
use crate::format::{or_na, percent, usd, usd_whole};
use crate::source::{Source, SourceId};

const COIN_LIMIT: usize = 10;

/// One row of CoinGecko's `/coins/markets` listing.
///
/// CoinGecko reports `null` for prices and market caps of thinly traded
/// coins, so every number is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub name: String,
    pub symbol: String,
    pub current_price: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub market_cap: Option<f64>,
}

impl Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} | 24h: {} | Market Cap: {}",
            self.name,
            self.symbol.to_uppercase(),
            or_na(self.current_price, usd),
            or_na(self.price_change_percentage_24h, percent),
            or_na(self.market_cap, usd_whole),
        )
    }
}

/// Top coins by market cap, priced in US dollars.
#[derive(Debug, Clone, Copy, Default)]
pub struct Crypto;

impl Source for Crypto {
    type Record = Coin;

    fn id(&self) -> SourceId {
        SourceId::Crypto
    }

    fn heading(&self, _config: &ScrapeConfig) -> String {
        format!("Top {} Cryptocurrencies (CoinGecko)", COIN_LIMIT)
    }

    fn request(&self, config: &ScrapeConfig) -> Request {
        Request::get(&config.endpoints.crypto_markets)
            .query("vs_currency", "usd")
            .query("order", "market_cap_desc")
            .query("per_page", COIN_LIMIT.to_string())
            .query("page", "1")
    }

    fn extract(&self, body: &str) -> Result<Vec<Coin>, ParseError> {
        let items: Vec<serde_json::Value> = serde_json::from_str(body)?;

        Ok(items
            .into_iter()
            .take(COIN_LIMIT)
            .map(serde_json::from_value)
            .collect::<Result<_, _>>()?)
    }
}
