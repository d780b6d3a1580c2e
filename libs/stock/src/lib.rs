mod error;
mod quote;
mod quote_client;

pub use error::QuoteError;
pub use quote::{
    DailyBar, DailySeries, PLACEHOLDER_PE_RATIO, PLACEHOLDER_RECOMMENDATION,
    PLACEHOLDER_TARGET_PRICE, Quote, TIME_SERIES_DAILY_KEY, TradingDate, compare_trading_dates,
    day_over_day, round_to,
};
pub use quote_client::{DEFAULT_BASE_API, QuoteClient};
