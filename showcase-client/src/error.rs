use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShowcaseError {
    // HTTP ошибки
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Resource not found")]
    NotFound,

    // Транспортные ошибки
    #[error("Transport error: {0}")]
    TransportError(String),

    // Ошибки сериализации/десериализации
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ShowcaseError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ShowcaseError::NotFound)
    }

    /// Errors that may go away if the same request is issued again.
    pub fn is_transient(&self) -> bool {
        match self {
            #[cfg(feature = "http")]
            ShowcaseError::HttpError(_) => true,
            ShowcaseError::TransportError(_) => true,
            ShowcaseError::NotFound
            | ShowcaseError::SerializationError(_)
            | ShowcaseError::InvalidConfig(_) => false,
        }
    }
}

/// Result of a single read against the data source, after logging.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Loaded(T),
    NotFound,
    Failed(String),
}

impl<T> FetchOutcome<T> {
    /// Converts a fetch result, logging every non-success under `what`.
    pub fn from_result(what: &str, result: Result<T, ShowcaseError>) -> Self {
        match result {
            Ok(value) => FetchOutcome::Loaded(value),
            Err(ShowcaseError::NotFound) => {
                tracing::warn!("{} not found", what);
                FetchOutcome::NotFound
            }
            Err(e) => {
                tracing::error!("Error fetching {}: {}", what, e);
                FetchOutcome::Failed(e.to_string())
            }
        }
    }

    pub fn loaded(self) -> Option<T> {
        match self {
            FetchOutcome::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchOutcome<U> {
        match self {
            FetchOutcome::Loaded(value) => FetchOutcome::Loaded(f(value)),
            FetchOutcome::NotFound => FetchOutcome::NotFound,
            FetchOutcome::Failed(reason) => FetchOutcome::Failed(reason),
        }
    }
}
