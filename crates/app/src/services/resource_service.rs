//! Resource service — listing and lookup of work queues and work pools.

use flowboard_domain::error::{FlowboardError, NotFoundError};
use flowboard_domain::work_pool::WorkPool;
use flowboard_domain::work_queue::WorkQueue;

use crate::ports::{WorkPoolRepository, WorkQueueRepository};

/// Application service backing the work queue and work pool pages.
pub struct ResourceService<QR, PR> {
    work_queues: QR,
    work_pools: PR,
}

impl<QR, PR> ResourceService<QR, PR>
where
    QR: WorkQueueRepository,
    PR: WorkPoolRepository,
{
    pub fn new(work_queues: QR, work_pools: PR) -> Self {
        Self {
            work_queues,
            work_pools,
        }
    }

    /// List all work queues.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_work_queues(&self) -> Result<Vec<WorkQueue>, FlowboardError> {
        self.work_queues.get_all().await
    }

    /// List all work pools.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_work_pools(&self) -> Result<Vec<WorkPool>, FlowboardError> {
        self.work_pools.get_all().await
    }

    /// Look up a work pool by name together with its queues.
    ///
    /// # Errors
    ///
    /// Returns [`FlowboardError::NotFound`] when no pool has that name, or a
    /// storage error from the repositories.
    #[tracing::instrument(skip(self))]
    pub async fn get_work_pool(
        &self,
        name: &str,
    ) -> Result<(WorkPool, Vec<WorkQueue>), FlowboardError> {
        let pool = self
            .work_pools
            .get_by_name(name.to_string())
            .await?
            .ok_or_else(|| NotFoundError {
                entity: "WorkPool",
                id: name.to_string(),
            })?;
        let queues = self
            .work_queues
            .find_by_pool(Some(pool.name.clone()))
            .await?;
        Ok((pool, queues))
    }

    /// Look up a work queue by name, inside a pool or among pool-less queues.
    ///
    /// # Errors
    ///
    /// Returns [`FlowboardError::NotFound`] when no such queue exists, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_work_queue(
        &self,
        work_pool_name: Option<&str>,
        name: &str,
    ) -> Result<WorkQueue, FlowboardError> {
        let queues = self
            .work_queues
            .find_by_pool(work_pool_name.map(str::to_string))
            .await?;
        queues
            .into_iter()
            .find(|queue| queue.name == name)
            .ok_or_else(|| {
                NotFoundError {
                    entity: "WorkQueue",
                    id: match work_pool_name {
                        Some(pool) => format!("{pool}/{name}"),
                        None => name.to_string(),
                    },
                }
                .into()
            })
    }
}
