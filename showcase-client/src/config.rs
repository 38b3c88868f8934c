use crate::error::ShowcaseError;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com";
pub const API_URL_ENV: &str = "SHOWCASE_API_URL";
pub const TIMEOUT_ENV: &str = "SHOWCASE_TIMEOUT_SECS";

/// Where and how the data source talks to the API.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads `SHOWCASE_API_URL` and `SHOWCASE_TIMEOUT_SECS`, falling back to
    /// the defaults for anything unset.
    pub fn from_env() -> Result<Self, ShowcaseError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ShowcaseError> {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_ENV) {
            config.base_url = url;
        }

        if let Some(secs) = lookup(TIMEOUT_ENV) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                ShowcaseError::InvalidConfig(format!("{} must be a number of seconds, got {:?}", TIMEOUT_ENV, secs))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ShowcaseError> {
        let parsed = url::Url::parse(&self.base_url)
            .map_err(|e| ShowcaseError::InvalidConfig(format!("invalid API URL {:?}: {}", self.base_url, e)))?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ShowcaseError::InvalidConfig(format!(
                    "unsupported URL scheme {:?}",
                    other
                )))
            }
        }

        if self.timeout.is_zero() {
            return Err(ShowcaseError::InvalidConfig("timeout must be positive".into()));
        }

        Ok(())
    }
}
