use thiserror::Error;

/// Ways a headlines/search request can fail. None of these reach the page:
/// the fetcher answers every one of them with fallback data.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {status}")]
    Api { status: reqwest::StatusCode },

    #[error("response body exceeded {limit} bytes")]
    BodyTooLarge { limit: usize },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

impl FetchError {
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network",
            FetchError::Api { .. } => "api",
            FetchError::BodyTooLarge { .. } => "body_too_large",
            FetchError::Decode(_) => "decode",
            FetchError::Url(_) => "url",
        }
    }
}
