//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod concurrency_limits;
#[allow(clippy::missing_errors_doc)]
pub mod resources;
#[allow(clippy::missing_errors_doc)]
pub mod triggers;

use axum::Router;
use axum::routing::{get, post};

use flowboard_app::ports::{ConcurrencyLimitRepository, WorkPoolRepository, WorkQueueRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<QR, PR, CR>() -> Router<AppState<QR, PR, CR>>
where
    QR: WorkQueueRepository + Send + Sync + 'static,
    PR: WorkPoolRepository + Send + Sync + 'static,
    CR: ConcurrencyLimitRepository + Send + Sync + 'static,
{
    Router::new()
        // Triggers
        .route(
            "/triggers/{kind}/describe",
            post(triggers::describe::<QR, PR, CR>),
        )
        .route("/triggers/{kind}/template", post(triggers::template))
        .route("/triggers/{kind}/as-template", post(triggers::as_template))
        // Resources
        .route("/work-queues", get(resources::list_work_queues::<QR, PR, CR>))
        .route("/work-pools", get(resources::list_work_pools::<QR, PR, CR>))
        // Concurrency limits
        .route(
            "/concurrency-limits",
            get(concurrency_limits::list::<QR, PR, CR>),
        )
}
