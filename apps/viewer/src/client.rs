//! API client — the single point of entry for all backend calls in the
//! viewer. Two read-only operations against the configured base URL; no
//! retries, no caching, no timeout beyond the platform default.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::models::{Profile, Project};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned status {status}")]
    Status { status: u16 },

    #[error("Failed to decode response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// The backend surface the orchestrator consumes. Trait-fronted so tests
/// can swap in a canned implementation without a network.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// `GET {base}/profile` — the full portfolio document.
    async fn fetch_profile(&self) -> Result<Profile, ApiError>;

    /// `GET {base}/projects?q=<query>` — projects matching a skill query.
    /// Callers must not pass an empty query; the orchestrator serves that
    /// case from its cache instead.
    async fn fetch_filtered_projects(&self, query: &str) -> Result<Vec<Project>, ApiError>;
}

/// reqwest-backed client for the live backend.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl ProfileApi for ApiClient {
    async fn fetch_profile(&self) -> Result<Profile, ApiError> {
        let url = format!("{}/profile", self.base_url);
        debug!("GET {url}");
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }
        response.json().await.map_err(ApiError::Decode)
    }

    async fn fetch_filtered_projects(&self, query: &str) -> Result<Vec<Project>, ApiError> {
        let url = format!("{}/projects", self.base_url);
        debug!("GET {url}?q={query}");
        // reqwest percent-encodes the query pair.
        let response = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }
        response.json().await.map_err(ApiError::Decode)
    }
}
