//! In-memory implementations of the repository ports.
//!
//! Records are immutable once loaded, so every repository is a cheap
//! `Clone` over a shared slice.

use std::future::Future;
use std::sync::Arc;

use flowboard_app::ports::{ConcurrencyLimitRepository, WorkPoolRepository, WorkQueueRepository};
use flowboard_domain::concurrency_limit::GlobalConcurrencyLimit;
use flowboard_domain::error::FlowboardError;
use flowboard_domain::id::{WorkPoolId, WorkQueueId};
use flowboard_domain::work_pool::WorkPool;
use flowboard_domain::work_queue::WorkQueue;

/// In-memory work queue repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkQueueRepository {
    queues: Arc<[WorkQueue]>,
}

impl InMemoryWorkQueueRepository {
    #[must_use]
    pub fn new(queues: Vec<WorkQueue>) -> Self {
        Self {
            queues: queues.into(),
        }
    }
}

impl WorkQueueRepository for InMemoryWorkQueueRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<WorkQueue>, FlowboardError>> + Send {
        let result = self.queues.to_vec();
        async { Ok(result) }
    }

    fn get_by_ids(
        &self,
        ids: Vec<WorkQueueId>,
    ) -> impl Future<Output = Result<Vec<WorkQueue>, FlowboardError>> + Send {
        let result: Vec<WorkQueue> = ids
            .iter()
            .filter_map(|id| self.queues.iter().find(|queue| queue.id == *id).cloned())
            .collect();
        async { Ok(result) }
    }

    fn find_by_pool(
        &self,
        work_pool_name: Option<String>,
    ) -> impl Future<Output = Result<Vec<WorkQueue>, FlowboardError>> + Send {
        let result: Vec<WorkQueue> = self
            .queues
            .iter()
            .filter(|queue| queue.work_pool_name == work_pool_name)
            .cloned()
            .collect();
        async { Ok(result) }
    }
}

/// In-memory work pool repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkPoolRepository {
    pools: Arc<[WorkPool]>,
}

impl InMemoryWorkPoolRepository {
    #[must_use]
    pub fn new(pools: Vec<WorkPool>) -> Self {
        Self {
            pools: pools.into(),
        }
    }
}

impl WorkPoolRepository for InMemoryWorkPoolRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<WorkPool>, FlowboardError>> + Send {
        let result = self.pools.to_vec();
        async { Ok(result) }
    }

    fn get_by_ids(
        &self,
        ids: Vec<WorkPoolId>,
    ) -> impl Future<Output = Result<Vec<WorkPool>, FlowboardError>> + Send {
        let result: Vec<WorkPool> = ids
            .iter()
            .filter_map(|id| self.pools.iter().find(|pool| pool.id == *id).cloned())
            .collect();
        async { Ok(result) }
    }

    fn get_by_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<WorkPool>, FlowboardError>> + Send {
        let result = self.pools.iter().find(|pool| pool.name == name).cloned();
        async { Ok(result) }
    }
}

/// In-memory global concurrency limit repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConcurrencyLimitRepository {
    limits: Arc<[GlobalConcurrencyLimit]>,
}

impl InMemoryConcurrencyLimitRepository {
    #[must_use]
    pub fn new(limits: Vec<GlobalConcurrencyLimit>) -> Self {
        Self {
            limits: limits.into(),
        }
    }
}

impl ConcurrencyLimitRepository for InMemoryConcurrencyLimitRepository {
    fn get_all(
        &self,
    ) -> impl Future<Output = Result<Vec<GlobalConcurrencyLimit>, FlowboardError>> + Send {
        let result = self.limits.to_vec();
        async { Ok(result) }
    }
}
