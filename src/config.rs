use anyhow::{Context, Result, bail};
use reqwest::Url;
use std::env;
use std::time::Duration;

use crate::request::{DEFAULT_ENDPOINT, parse_endpoint};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MANDRILL_URL: &str = "https://mandrillapp.com/api/1.0";
pub const DEFAULT_TEMPLATE: &str = "notification";
pub const DEFAULT_FROM_EMAIL: &str = "checkin@isengard.io";
pub const DEFAULT_FROM_NAME: &str = "Checkin Agent";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: Url,
    pub timeout: Duration,
    /// `None` when no Mandrill key is configured; notifications are then skipped.
    pub mandrill: Option<MandrillConfig>,
}

/// Settings for sending the outcome email through Mandrill
#[derive(Debug, Clone)]
pub struct MandrillConfig {
    pub api_key: String,
    pub base_url: String,
    pub template: String,
    pub from_email: String,
    pub from_name: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// # Environment Variables
    /// - `CHECKIN_ENDPOINT`: Optional - Check-in servlet URL (default: the airline's mobile endpoint)
    /// - `CHECKIN_TIMEOUT_SECS`: Optional - HTTP timeout in seconds (default: 30)
    /// - `MANDRILL_KEY`: Optional - Mandrill API key, required to send email notifications
    /// - `MANDRILL_URL`: Optional - Mandrill API base URL (default: "https://mandrillapp.com/api/1.0")
    /// - `MANDRILL_TEMPLATE`: Optional - Stored template name (default: "notification")
    /// - `FROM_EMAIL`: Optional - Sender address (default: "checkin@isengard.io")
    /// - `FROM_NAME`: Optional - Sender name (default: "Checkin Agent")
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        // Parse endpoint (optional, has default)
        let endpoint = var("CHECKIN_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let endpoint = parse_endpoint(&endpoint).context("CHECKIN_ENDPOINT is not a valid URL")?;

        // Parse timeout (optional, has default)
        let timeout_secs = match var("CHECKIN_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("CHECKIN_TIMEOUT_SECS must be a number, got {raw}"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        if timeout_secs == 0 {
            bail!("CHECKIN_TIMEOUT_SECS must be greater than zero");
        }

        // Mandrill settings only matter once a key is present
        let mandrill = var("MANDRILL_KEY").map(|api_key| MandrillConfig {
            api_key: api_key.trim().to_string(),
            base_url: var("MANDRILL_URL")
                .unwrap_or_else(|| DEFAULT_MANDRILL_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            template: var("MANDRILL_TEMPLATE").unwrap_or_else(|| DEFAULT_TEMPLATE.to_string()),
            from_email: var("FROM_EMAIL").unwrap_or_else(|| DEFAULT_FROM_EMAIL.to_string()),
            from_name: var("FROM_NAME").unwrap_or_else(|| DEFAULT_FROM_NAME.to_string()),
        });

        Ok(Config {
            endpoint,
            timeout: Duration::from_secs(timeout_secs),
            mandrill,
        })
    }
}
