//! Concurrency limit repository port.

use std::future::Future;

use flowboard_domain::concurrency_limit::GlobalConcurrencyLimit;
use flowboard_domain::error::FlowboardError;

/// Read access to [`GlobalConcurrencyLimit`]s.
pub trait ConcurrencyLimitRepository {
    /// Get all global concurrency limits.
    fn get_all(
        &self,
    ) -> impl Future<Output = Result<Vec<GlobalConcurrencyLimit>, FlowboardError>> + Send;
}
