//! Launch data sources.
//!
//! This module provides the page-oriented sources of launch records:
//! - HTTP source for the remote launch API
//! - Fixture source serving a local JSON array page by page
//! - Unified [`LaunchFeed`] enum for both
//! - [`PageLoader`] running fetches off the UI thread

use crate::model::{FetchError, LaunchRecord};
use serde_json::Value;
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

pub mod file;
pub mod http;
pub mod loader;

pub use file::FixtureSource;
pub use http::HttpLaunchSource;
pub use loader::{PageLoader, PageResult};

/// One page request: 1-based page number and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u32,
    /// Records per page.
    pub limit: u32,
}

impl PageRequest {
    /// Request for `page` with `limit` records.
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }
}

/// Records decoded from one page response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchedPage {
    /// Successfully decoded records, in response order.
    pub records: Vec<LaunchRecord>,
    /// Elements of the response that were not valid launch records.
    pub skipped: usize,
}

impl FetchedPage {
    /// Page with no skipped elements.
    pub fn new(records: Vec<LaunchRecord>) -> Self {
        Self {
            records,
            skipped: 0,
        }
    }

    /// Decode raw JSON elements, skipping (and logging) malformed ones.
    ///
    /// Parse at the boundary: a malformed element never fails the page.
    pub fn from_values(values: Vec<Value>, request: PageRequest) -> Self {
        let mut records = Vec::with_capacity(values.len());
        let mut skipped = 0;

        for (index, value) in values.into_iter().enumerate() {
            match serde_json::from_value::<LaunchRecord>(value) {
                Ok(record) => records.push(record),
                Err(error) => {
                    skipped += 1;
                    warn!(
                        page = request.page,
                        index,
                        %error,
                        "Skipping malformed launch record"
                    );
                }
            }
        }

        Self { records, skipped }
    }

    /// True when the source signalled the end of the data (an empty array).
    pub fn is_end_of_data(&self) -> bool {
        self.records.is_empty() && self.skipped == 0
    }
}

/// A paged source of launch records.
pub trait LaunchSource: Send + Sync + 'static {
    /// Fetch one page. An empty page means there is no more data.
    fn fetch_page(
        &self,
        request: PageRequest,
    ) -> impl Future<Output = Result<FetchedPage, FetchError>> + Send;

    /// Human-readable origin for logs and the title bar.
    fn describe(&self) -> String;
}

/// Unified launch source.
///
/// Sum type enforces exactly one variant.
#[derive(Debug)]
pub enum LaunchFeed {
    /// Remote launch API.
    Http(HttpLaunchSource),
    /// Local JSON fixture.
    Fixture(FixtureSource),
}

impl LaunchSource for LaunchFeed {
    async fn fetch_page(&self, request: PageRequest) -> Result<FetchedPage, FetchError> {
        match self {
            LaunchFeed::Http(source) => source.fetch_page(request).await,
            LaunchFeed::Fixture(source) => source.fetch_page(request).await,
        }
    }

    fn describe(&self) -> String {
        match self {
            LaunchFeed::Http(source) => source.describe(),
            LaunchFeed::Fixture(source) => source.describe(),
        }
    }
}

/// Create the appropriate launch source.
///
/// A fixture path wins over the base URL.
///
/// # Errors
///
/// Returns `FetchError::FixtureRead`/`Decode` for an unusable fixture and
/// `FetchError::Client` if the HTTP client cannot be built.
pub fn detect_launch_source(
    fixture: Option<PathBuf>,
    base_url: &str,
    timeout: Duration,
) -> Result<LaunchFeed, FetchError> {
    match fixture {
        Some(path) => Ok(LaunchFeed::Fixture(FixtureSource::new(path)?)),
        None => Ok(LaunchFeed::Http(HttpLaunchSource::new(base_url, timeout)?)),
    }
}
