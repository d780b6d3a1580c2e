use thiserror::Error;

/// Failure to obtain or derive a [`Quote`](crate::Quote).
///
/// Every cause (network, HTTP status, malformed JSON, missing series, missing
/// fields, arithmetic) is flattened into this one type. The message is the
/// cause's description; it is the only way to tell causes apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct QuoteError {
    message: String,
}

impl QuoteError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<anyhow::Error> for QuoteError {
    fn from(err: anyhow::Error) -> Self {
        Self::new(format!("{err:#}"))
    }
}
