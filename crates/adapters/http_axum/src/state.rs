//! Shared application state for axum handlers.

use std::sync::Arc;

use flowboard_app::ports::{ConcurrencyLimitRepository, WorkPoolRepository, WorkQueueRepository};
use flowboard_app::services::concurrency_limit_service::ConcurrencyLimitService;
use flowboard_app::services::resource_service::ResourceService;
use flowboard_app::services::trigger_description_service::TriggerDescriptionService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<QR, PR, CR> {
    /// Trigger status resolution and description.
    pub trigger_service: Arc<TriggerDescriptionService<QR, PR>>,
    /// Work queue and work pool lookups.
    pub resource_service: Arc<ResourceService<QR, PR>>,
    /// Global concurrency limits.
    pub concurrency_limit_service: Arc<ConcurrencyLimitService<CR>>,
}

impl<QR, PR, CR> Clone for AppState<QR, PR, CR> {
    fn clone(&self) -> Self {
        Self {
            trigger_service: Arc::clone(&self.trigger_service),
            resource_service: Arc::clone(&self.resource_service),
            concurrency_limit_service: Arc::clone(&self.concurrency_limit_service),
        }
    }
}

impl<QR, PR, CR> AppState<QR, PR, CR>
where
    QR: WorkQueueRepository + Send + Sync + 'static,
    PR: WorkPoolRepository + Send + Sync + 'static,
    CR: ConcurrencyLimitRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        trigger_service: TriggerDescriptionService<QR, PR>,
        resource_service: ResourceService<QR, PR>,
        concurrency_limit_service: ConcurrencyLimitService<CR>,
    ) -> Self {
        Self {
            trigger_service: Arc::new(trigger_service),
            resource_service: Arc::new(resource_service),
            concurrency_limit_service: Arc::new(concurrency_limit_service),
        }
    }
}
