//! Work queue repository port — lookups of work queues.

use std::future::Future;

use flowboard_domain::error::FlowboardError;
use flowboard_domain::id::WorkQueueId;
use flowboard_domain::work_queue::WorkQueue;

/// Read access to [`WorkQueue`]s.
pub trait WorkQueueRepository {
    /// Get all work queues.
    fn get_all(&self) -> impl Future<Output = Result<Vec<WorkQueue>, FlowboardError>> + Send;

    /// Get the queues with the given ids, in the order of `ids`.
    ///
    /// Unknown ids are skipped.
    fn get_by_ids(
        &self,
        ids: Vec<WorkQueueId>,
    ) -> impl Future<Output = Result<Vec<WorkQueue>, FlowboardError>> + Send;

    /// Get the queues of a work pool, or the pool-less queues when `None`.
    fn find_by_pool(
        &self,
        work_pool_name: Option<String>,
    ) -> impl Future<Output = Result<Vec<WorkQueue>, FlowboardError>> + Send;
}
