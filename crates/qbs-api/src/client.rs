//! HTTP client for the question bank endpoints.

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;

use qbs_model::{FilterSet, Metadata, Question};

use crate::error::{ApiError, Result};

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("question-bank-studio/", env!("CARGO_PKG_VERSION"));

/// How much of an error response body is kept for diagnostics.
const ERROR_BODY_LIMIT: usize = 256;

/// Client for the question bank's read endpoints.
///
/// Both operations are plain GETs: the taxonomy snapshot has no parameters,
/// the question list is parameterized by a full [`FilterSet`]. The client is
/// cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the API at `base_url` (scheme + host + optional
    /// path prefix, no trailing slash required).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let trimmed = base_url.trim_end_matches('/');
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(ApiError::InvalidBaseUrl(base_url));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: trimmed.to_string(),
        })
    }

    /// Fetches the taxonomy snapshot.
    ///
    /// One structured response, no pagination, no parameters.
    pub async fn fetch_metadata(&self) -> Result<Metadata> {
        let url = format!("{}/courses/metadata", self.base_url);
        tracing::debug!("Fetching taxonomy metadata from {}", url);

        let response = self.client.get(&url).send().await?;
        handle_response(response).await
    }

    /// Fetches the question list matching `filters`.
    ///
    /// An empty list is a valid, non-error result.
    pub async fn fetch_questions(&self, filters: &FilterSet) -> Result<Vec<Question>> {
        let url = format!("{}/questions", self.base_url);
        tracing::debug!(?filters, "Fetching questions from {}", url);

        let response = self.client.get(&url).query(filters).send().await?;
        handle_response(response).await
    }
}

/// Checks the HTTP status and decodes the JSON body.
async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        let body: String = response
            .text()
            .await
            .unwrap_or_default()
            .chars()
            .take(ERROR_BODY_LIMIT)
            .collect();
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let value = response.json().await?;
    Ok(value)
}
