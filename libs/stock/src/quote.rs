use std::{cmp::Ordering, collections::BTreeMap, fmt};

use anyhow::{Context, Result, anyhow, bail, ensure};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::QuoteError;

pub const TIME_SERIES_DAILY_KEY: &str = "Time Series (Daily)";

const OPEN: &str = "1. open";
const CLOSE: &str = "4. close";
const VOLUME: &str = "5. volume";

// Not derived from market data yet. These are fixed stand-ins until a
// fundamentals source is wired in.
pub const PLACEHOLDER_PE_RATIO: f64 = 15.0;
pub const PLACEHOLDER_TARGET_PRICE: f64 = 200.0;
pub const PLACEHOLDER_RECOMMENDATION: &str = "Bullish";

/// Ordering used for provider date keys.
///
/// `YYYY-MM-DD` strings sort chronologically as plain strings as long as every
/// key shares that format. Anything calendar-aware replaces this function.
pub fn compare_trading_dates(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

/// A provider date key, ordered by [`compare_trading_dates`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TradingDate(String);

impl TradingDate {
    pub fn new(date: impl Into<String>) -> Self {
        Self(date.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Ord for TradingDate {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_trading_dates(&self.0, &other.0)
    }
}

impl PartialOrd for TradingDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TradingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//
// Match Alpha Vantage TIME_SERIES_DAILY JSON
// https://www.alphavantage.co/documentation/#daily
//
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DailyBar {
    #[serde(rename = "1. open")]
    pub open: Option<String>,

    #[serde(rename = "2. high")]
    pub high: Option<String>,

    #[serde(rename = "3. low")]
    pub low: Option<String>,

    #[serde(rename = "4. close")]
    pub close: Option<String>,

    #[serde(rename = "5. volume")]
    pub volume: Option<String>,
}

impl DailyBar {
    fn require<'a>(value: &'a Option<String>, label: &str, date: &TradingDate) -> Result<&'a str> {
        value
            .as_deref()
            .ok_or_else(|| anyhow!("missing field \"{label}\" for {date}"))
    }

    fn close_price(&self, date: &TradingDate) -> Result<f64> {
        let raw = Self::require(&self.close, CLOSE, date)?;
        raw.trim()
            .parse::<f64>()
            .with_context(|| format!("invalid \"{CLOSE}\" value {raw:?} for {date}"))
    }
}

/// Date-keyed daily observations, kept sorted by [`TradingDate`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct DailySeries(BTreeMap<TradingDate, DailyBar>);

impl DailySeries {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The maximal date key and its bar.
    pub fn latest(&self) -> Option<(&TradingDate, &DailyBar)> {
        self.0.last_key_value()
    }

    /// The maximal date key strictly before `date`.
    pub fn previous_to(&self, date: &TradingDate) -> Option<(&TradingDate, &DailyBar)> {
        self.0.range(..date).next_back()
    }
}

impl FromIterator<(TradingDate, DailyBar)> for DailySeries {
    fn from_iter<I: IntoIterator<Item = (TradingDate, DailyBar)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Deserialize)]
struct DailyResponse {
    #[serde(rename = "Time Series (Daily)")]
    series: Option<DailySeries>,

    #[serde(rename = "Error Message")]
    error_message: Option<String>,

    #[serde(rename = "Note")]
    note: Option<String>,

    #[serde(rename = "Information")]
    information: Option<String>,
}

impl DailyResponse {
    fn into_series(self) -> Result<DailySeries> {
        if let Some(series) = self.series {
            return Ok(series);
        }

        // rate limits and bad symbols come back as 200 with one of these instead
        match self.error_message.or(self.note).or(self.information) {
            Some(msg) => bail!("missing \"{TIME_SERIES_DAILY_KEY}\": {msg}"),
            None => bail!("missing \"{TIME_SERIES_DAILY_KEY}\" in response"),
        }
    }
}

/// Most recent trading day for one symbol, with day-over-day metrics.
///
/// `open`, `close` and `volume` keep the provider's original strings. Only the
/// change metrics are computed numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub symbol: String,
    pub date: String,
    pub open: String,
    pub close: String,
    pub volume: String,
    /// `close(latest) - close(previous)`, 4 decimal places.
    pub daily_change: f64,
    /// `daily_change / close(previous) * 100`, 2 decimal places.
    pub daily_change_percentage: f64,
    /// Placeholder, see [`PLACEHOLDER_PE_RATIO`].
    pub pe_ratio: f64,
    /// Placeholder, see [`PLACEHOLDER_TARGET_PRICE`].
    pub target_price: f64,
    /// Placeholder, see [`PLACEHOLDER_RECOMMENDATION`].
    pub bullish_bearish_recommendations: String,
}

impl Quote {
    /// Parse a TIME_SERIES_DAILY response body and derive the quote for its
    /// latest date.
    pub fn from_daily_response(symbol: &str, body: &str) -> Result<Self, QuoteError> {
        Self::derive(symbol, body).map_err(QuoteError::from)
    }

    fn derive(symbol: &str, body: &str) -> Result<Self> {
        let symbol = normalize_symbol(symbol)?;

        let response: DailyResponse =
            serde_json::from_str(body).context("malformed response body")?;
        let series = response.into_series()?;
        debug!(symbol = %symbol, dates = series.len(), "parsed daily series");

        let (latest_date, latest) = series
            .latest()
            .ok_or_else(|| anyhow!("\"{TIME_SERIES_DAILY_KEY}\" is empty"))?;
        let (previous_date, previous) = series
            .previous_to(latest_date)
            .ok_or_else(|| anyhow!("no previous date before {latest_date}"))?;

        let open = DailyBar::require(&latest.open, OPEN, latest_date)?;
        let close = DailyBar::require(&latest.close, CLOSE, latest_date)?;
        let volume = DailyBar::require(&latest.volume, VOLUME, latest_date)?;

        let (daily_change, daily_change_percentage) = day_over_day(
            latest.close_price(latest_date)?,
            previous.close_price(previous_date)?,
        )?;

        Ok(Self {
            symbol,
            date: latest_date.to_string(),
            open: open.to_owned(),
            close: close.to_owned(),
            volume: volume.to_owned(),
            daily_change,
            daily_change_percentage,
            pe_ratio: PLACEHOLDER_PE_RATIO,
            target_price: PLACEHOLDER_TARGET_PRICE,
            bullish_bearish_recommendations: PLACEHOLDER_RECOMMENDATION.to_owned(),
        })
    }
}

pub(crate) fn normalize_symbol(symbol: &str) -> Result<String> {
    let symbol = symbol.to_uppercase();
    ensure!(!symbol.is_empty(), "symbol is empty");
    Ok(symbol)
}

/// Change and percentage change between two closes.
///
/// The percentage is taken from the already rounded change.
pub fn day_over_day(latest_close: f64, previous_close: f64) -> Result<(f64, f64)> {
    ensure!(
        previous_close != 0.0,
        "previous close is zero, cannot compute percentage change"
    );

    let change = round_to(latest_close - previous_close, 4);
    let percentage = round_to(change / previous_close * 100.0, 2);
    ensure!(
        change.is_finite() && percentage.is_finite(),
        "non-finite daily change from closes {latest_close} and {previous_close}"
    );

    Ok((change, percentage))
}

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let rounded = (value * factor).round() / factor;
    // drop the sign of -0.0
    if rounded == 0.0 { 0.0 } else { rounded }
}
