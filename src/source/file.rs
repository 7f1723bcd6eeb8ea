//! Fixture-backed launch source.
//!
//! Loads a JSON array of launch objects once and serves it in pages with the
//! same contract as the HTTP source: a page past the end is empty.

use super::{FetchedPage, LaunchSource, PageRequest};
use crate::model::FetchError;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;

/// Launch source reading from a local JSON file.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    path: PathBuf,
    values: Vec<Value>,
}

impl FixtureSource {
    /// Read and decode the fixture.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::FixtureRead` if the file cannot be read and
    /// `FetchError::Decode` if it is not a JSON array.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, FetchError> {
        let path = path.into();
        let contents = std::fs::read_to_string(&path).map_err(|source| FetchError::FixtureRead {
            path: path.clone(),
            source,
        })?;
        let values: Vec<Value> =
            serde_json::from_str(&contents).map_err(|source| FetchError::Decode {
                origin: path.display().to_string(),
                source,
            })?;

        info!(path = %path.display(), count = values.len(), "Loaded launch fixture");
        Ok(Self { path, values })
    }

    /// Build a fixture source from already-decoded values.
    pub fn from_values(path: impl Into<PathBuf>, values: Vec<Value>) -> Self {
        Self {
            path: path.into(),
            values,
        }
    }

    /// Path the fixture was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of raw elements in the fixture.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the fixture holds no elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn slice(&self, request: PageRequest) -> &[Value] {
        let limit = request.limit as usize;
        let start = (request.page.saturating_sub(1) as usize).saturating_mul(limit);
        if start >= self.values.len() {
            return &[];
        }
        let end = start.saturating_add(limit).min(self.values.len());
        &self.values[start..end]
    }
}

impl LaunchSource for FixtureSource {
    async fn fetch_page(&self, request: PageRequest) -> Result<FetchedPage, FetchError> {
        Ok(FetchedPage::from_values(
            self.slice(request).to_vec(),
            request,
        ))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
