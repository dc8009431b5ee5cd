//! Work pool repository port — lookups of work pools.

use std::future::Future;

use flowboard_domain::error::FlowboardError;
use flowboard_domain::id::WorkPoolId;
use flowboard_domain::work_pool::WorkPool;

/// Read access to [`WorkPool`]s.
pub trait WorkPoolRepository {
    /// Get all work pools.
    fn get_all(&self) -> impl Future<Output = Result<Vec<WorkPool>, FlowboardError>> + Send;

    /// Get the pools with the given ids, in the order of `ids`.
    ///
    /// Unknown ids are skipped.
    fn get_by_ids(
        &self,
        ids: Vec<WorkPoolId>,
    ) -> impl Future<Output = Result<Vec<WorkPool>, FlowboardError>> + Send;

    /// Get a work pool by its unique name.
    fn get_by_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<WorkPool>, FlowboardError>> + Send;
}
