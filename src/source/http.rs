//! HTTP launch source.
//!
//! Issues `GET <base_url>?page=<n>&limit=<m>` and expects a JSON array.

use super::{FetchedPage, LaunchSource, PageRequest};
use crate::model::FetchError;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Remote launch API client.
#[derive(Debug, Clone)]
pub struct HttpLaunchSource {
    client: Client,
    base_url: String,
}

impl HttpLaunchSource {
    /// Build a client for `base_url` with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Client` if the TLS backend cannot be initialized.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("launchdeck/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Endpoint queried for every page.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn transport_error(&self, source: reqwest::Error) -> FetchError {
        FetchError::Transport {
            url: self.base_url.clone(),
            source,
        }
    }
}

impl LaunchSource for HttpLaunchSource {
    async fn fetch_page(&self, request: PageRequest) -> Result<FetchedPage, FetchError> {
        debug!(url = %self.base_url, page = request.page, limit = request.limit, "GET launches");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("page", request.page), ("limit", request.limit)])
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.base_url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        let values: Vec<Value> =
            serde_json::from_str(&body).map_err(|source| FetchError::Decode {
                origin: self.base_url.clone(),
                source,
            })?;

        Ok(FetchedPage::from_values(values, request))
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}
