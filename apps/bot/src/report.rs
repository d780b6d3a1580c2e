use stock::{Quote, QuoteError};

pub const FORMAT_ERROR: &str =
    "Invalid command format. Please use the format \"!stock <company>\".";

pub fn render_quote(quote: &Quote) -> String {
    [
        format!("Stock Data for {} on {}:", quote.symbol, quote.date),
        format!("Open: {}", quote.open),
        format!("Close: {}", quote.close),
        format!("Volume: {}", quote.volume),
        format!("Daily Change: {:.4}", quote.daily_change),
        format!("Daily Change Percentage: {:.2}%", quote.daily_change_percentage),
        format!("P/E Ratio: {:.1}", quote.pe_ratio),
        format!("Target Price: {:.1}", quote.target_price),
        format!(
            "Bullish/Bearish Recommendations: {}",
            quote.bullish_bearish_recommendations
        ),
    ]
    .join("\n")
}

pub fn render_quote_error(err: &QuoteError) -> String {
    format!("Error: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(daily_change: f64, daily_change_percentage: f64) -> Quote {
        Quote {
            symbol: "AAPL".into(),
            date: "2023-09-15".into(),
            open: "150.6300".into(),
            close: "150.0800".into(),
            volume: "79815284".into(),
            daily_change,
            daily_change_percentage,
            pe_ratio: stock::PLACEHOLDER_PE_RATIO,
            target_price: stock::PLACEHOLDER_TARGET_PRICE,
            bullish_bearish_recommendations: stock::PLACEHOLDER_RECOMMENDATION.into(),
        }
    }

    #[test]
    fn renders_fields_in_order() {
        let text = render_quote(&quote(0.44, 0.29));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "Stock Data for AAPL on 2023-09-15:",
                "Open: 150.6300",
                "Close: 150.0800",
                "Volume: 79815284",
                "Daily Change: 0.4400",
                "Daily Change Percentage: 0.29%",
                "P/E Ratio: 15.0",
                "Target Price: 200.0",
                "Bullish/Bearish Recommendations: Bullish",
            ]
        );
    }

    #[test]
    fn renders_negative_change() {
        let text = render_quote(&quote(-50.08, -33.37));
        assert!(text.contains("Daily Change: -50.0800\n"), "{text}");
        assert!(text.contains("Daily Change Percentage: -33.37%\n"), "{text}");
    }

    #[test]
    fn renders_repeating_percentage_unsigned() {
        let text = render_quote(&quote(1.0, 33.33));
        assert!(text.contains("Daily Change: 1.0000\n"), "{text}");
        assert!(text.contains("Daily Change Percentage: 33.33%\n"), "{text}");
    }

    #[test]
    fn format_error_text() {
        assert_eq!(
            FORMAT_ERROR,
            r#"Invalid command format. Please use the format "!stock <company>"."#
        );
    }

    #[test]
    fn renders_error_line() {
        let err = QuoteError::new("no previous date before 2023-09-15");
        assert_eq!(
            render_quote_error(&err),
            "Error: no previous date before 2023-09-15"
        );
    }
}
