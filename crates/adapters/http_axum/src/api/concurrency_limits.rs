//! JSON handlers for global concurrency limits.

use axum::Json;
use axum::extract::State;

use flowboard_app::ports::{ConcurrencyLimitRepository, WorkPoolRepository, WorkQueueRepository};
use flowboard_domain::concurrency_limit::GlobalConcurrencyLimit;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/concurrency-limits` — list all global concurrency limits.
pub async fn list<QR, PR, CR>(
    State(state): State<AppState<QR, PR, CR>>,
) -> Result<Json<Vec<GlobalConcurrencyLimit>>, ApiError>
where
    QR: WorkQueueRepository + Send + Sync + 'static,
    PR: WorkPoolRepository + Send + Sync + 'static,
    CR: ConcurrencyLimitRepository + Send + Sync + 'static,
{
    let limits = state.concurrency_limit_service.list_limits().await?;
    Ok(Json(limits))
}
