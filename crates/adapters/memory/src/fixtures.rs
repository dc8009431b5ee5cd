//! Fixture file loading.
//!
//! A fixture file is a JSON document with three optional arrays:
//!
//! ```json
//! {
//!   "work_pools": [{ "id": "…", "name": "k8s" }],
//!   "work_queues": [{ "id": "…", "name": "default", "work_pool_name": "k8s" }],
//!   "concurrency_limits": [{ "id": "…", "name": "db", "limit": 5, "active": true }]
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use flowboard_domain::concurrency_limit::GlobalConcurrencyLimit;
use flowboard_domain::work_pool::WorkPool;
use flowboard_domain::work_queue::WorkQueue;

use crate::error::FixtureError;
use crate::repos::{
    InMemoryConcurrencyLimitRepository, InMemoryWorkPoolRepository, InMemoryWorkQueueRepository,
};

/// Records served by the in-memory repositories.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Fixtures {
    pub work_pools: Vec<WorkPool>,
    pub work_queues: Vec<WorkQueue>,
    pub concurrency_limits: Vec<GlobalConcurrencyLimit>,
}

impl Fixtures {
    /// Parse fixtures from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Json`] if the document is malformed.
    pub fn from_json(content: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read fixtures from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Io`] if the file cannot be read, or
    /// [`FixtureError::Json`] if it is malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let fixtures = Self::from_json(&content)?;
        tracing::info!(
            path = %path.display(),
            work_pools = fixtures.work_pools.len(),
            work_queues = fixtures.work_queues.len(),
            concurrency_limits = fixtures.concurrency_limits.len(),
            "fixtures loaded"
        );
        Ok(fixtures)
    }

    /// Split the fixtures into one repository per record type.
    #[must_use]
    pub fn into_repositories(
        self,
    ) -> (
        InMemoryWorkQueueRepository,
        InMemoryWorkPoolRepository,
        InMemoryConcurrencyLimitRepository,
    ) {
        (
            InMemoryWorkQueueRepository::new(self.work_queues),
            InMemoryWorkPoolRepository::new(self.work_pools),
            InMemoryConcurrencyLimitRepository::new(self.concurrency_limits),
        )
    }
}
