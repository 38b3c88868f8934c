use async_trait::async_trait;
use gloo_net::http::Request;
use showcase_client::config::ClientConfig;
use showcase_client::error::ShowcaseError;
use showcase_client::source::{DataSource, Endpoint};
use showcase_client::ShowcaseClient;

/// Browser `fetch` backed data source.
#[derive(Debug, Clone)]
pub struct GlooSource {
    base_url: String,
}

impl GlooSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for GlooSource {
    fn default() -> Self {
        Self::new(ClientConfig::default().base_url)
    }
}

#[async_trait(?Send)]
impl DataSource for GlooSource {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<serde_json::Value, ShowcaseError> {
        let url = self.url(&endpoint.path());
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ShowcaseError::TransportError(format!("Network error: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ShowcaseError::TransportError(format!("Failed to read response: {}", e)))?;

        match status {
            200..=299 => serde_json::from_str(&text).map_err(|e| {
                ShowcaseError::SerializationError(format!("{}: {}", endpoint, e))
            }),
            404 => Err(ShowcaseError::NotFound),
            _ => Err(ShowcaseError::TransportError(format!("HTTP {}: {}", status, text))),
        }
    }
}

pub type ApiClient = ShowcaseClient<GlooSource>;

pub fn api_client() -> ApiClient {
    ShowcaseClient::new(GlooSource::default())
}
