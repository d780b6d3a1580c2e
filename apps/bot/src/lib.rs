use stock::QuoteClient;
use tracing::{info_span, warn};
use tracing_futures::Instrument;

pub mod command;
pub mod config;
pub mod report;

/// Handle one line of input and return the text to print.
///
/// A line that is not a `!stock` command never reaches the network.
pub async fn respond(client: &QuoteClient, line: &str) -> String {
    let Some(symbol) = command::extract_symbol(line) else {
        warn!(input = %line, "invalid command format");
        return report::FORMAT_ERROR.to_string();
    };

    let span = info_span!("command", symbol = %symbol);
    match client.fetch_daily_quote(symbol).instrument(span).await {
        Ok(quote) => report::render_quote(&quote),
        Err(e) => report::render_quote_error(&e),
    }
}
