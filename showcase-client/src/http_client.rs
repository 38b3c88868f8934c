use crate::config::ClientConfig;
use crate::error::ShowcaseError;
use crate::source::{DataSource, Endpoint};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let config = ClientConfig::new(base_url);
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url,
        }
    }

    pub fn with_config(config: &ClientConfig) -> Result<Self, ShowcaseError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn get_json(&self, path: &str) -> Result<serde_json::Value, ShowcaseError> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        match status {
            StatusCode::OK => {
                let text = response.text().await?;
                serde_json::from_str(&text).map_err(|e| {
                    ShowcaseError::SerializationError(format!("{}: {}", path, e))
                })
            }
            StatusCode::NOT_FOUND => Err(ShowcaseError::NotFound),
            _ => {
                let error_text = response.text().await?;
                Err(ShowcaseError::TransportError(format!(
                    "HTTP {}: {}",
                    status, error_text
                )))
            }
        }
    }
}

#[async_trait(?Send)]
impl DataSource for HttpClient {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<serde_json::Value, ShowcaseError> {
        self.get_json(&endpoint.path()).await
    }
}
