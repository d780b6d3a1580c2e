use anyhow::Result;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use crate::{Quote, QuoteError, quote::normalize_symbol};

pub const DEFAULT_BASE_API: &str = "https://www.alphavantage.co/query";

const TIME_SERIES_DAILY: &str = "TIME_SERIES_DAILY";

#[derive(Clone)]
pub struct QuoteClient {
    client: Client,
    base_api: String,
    api_key: String,
}

impl QuoteClient {
    pub fn new(base_api: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        // no timeout: a hung upstream blocks the caller
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_api: base_api.into(),
            api_key: api_key.into(),
        })
    }

    pub fn base_api(&self) -> &str {
        &self.base_api
    }

    /// Fetch the daily series for `symbol` and derive its latest [`Quote`].
    ///
    /// Makes exactly one request. Any failure along the way comes back as a
    /// [`QuoteError`] carrying the cause's message.
    #[instrument(name = "fetch_daily_quote", skip(self))]
    pub async fn fetch_daily_quote(&self, symbol: &str) -> Result<Quote, QuoteError> {
        let symbol = normalize_symbol(symbol)?;

        let body = match self.fetch_daily_series(&symbol).await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %format!("{e:#}"), "daily series request failed");
                return Err(e.into());
            }
        };

        match Quote::from_daily_response(&symbol, &body) {
            Ok(quote) => {
                info!(
                    date = %quote.date,
                    close = %quote.close,
                    daily_change = quote.daily_change,
                    "derived quote"
                );
                Ok(quote)
            }
            Err(e) => {
                warn!(error = %e, "quote derivation failed");
                Err(e)
            }
        }
    }

    async fn fetch_daily_series(&self, symbol: &str) -> Result<String> {
        debug!(base_api = %self.base_api, "requesting daily series");

        // the query string carries the api key, so keep urls out of errors
        let body = self
            .client
            .get(&self.base_api)
            .query(&[
                ("function", TIME_SERIES_DAILY),
                ("symbol", symbol),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(reqwest::Error::without_url)?
            .error_for_status()
            .map_err(reqwest::Error::without_url)?
            .text()
            .await
            .map_err(reqwest::Error::without_url)?;

        debug!(bytes = body.len(), "received daily series");
        Ok(body)
    }
}
