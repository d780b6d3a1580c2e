use std::env::var;

use anyhow::{Result, bail};
use stock::DEFAULT_BASE_API;

pub const API_KEY_VAR: &str = "ALPHA_VANTAGE_API_KEY";
pub const BASE_API_VAR: &str = "ALPHA_VANTAGE_BASE_URL";

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub base_api: String,
}

impl Config {
    /// Read configuration once at startup. A missing api key is fatal.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = match lookup(API_KEY_VAR) {
            Some(key) if !key.trim().is_empty() => key.trim().to_string(),
            _ => bail!("{API_KEY_VAR} environment variable is not set"),
        };

        let base_api = lookup(BASE_API_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_API.to_string());

        Ok(Self { api_key, base_api })
    }
}
