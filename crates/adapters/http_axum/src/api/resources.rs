//! JSON handlers for work queues and work pools.

use axum::Json;
use axum::extract::State;

use flowboard_app::ports::{ConcurrencyLimitRepository, WorkPoolRepository, WorkQueueRepository};
use flowboard_domain::work_pool::WorkPool;
use flowboard_domain::work_queue::WorkQueue;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/work-queues` — list all work queues.
pub async fn list_work_queues<QR, PR, CR>(
    State(state): State<AppState<QR, PR, CR>>,
) -> Result<Json<Vec<WorkQueue>>, ApiError>
where
    QR: WorkQueueRepository + Send + Sync + 'static,
    PR: WorkPoolRepository + Send + Sync + 'static,
    CR: ConcurrencyLimitRepository + Send + Sync + 'static,
{
    let queues = state.resource_service.list_work_queues().await?;
    Ok(Json(queues))
}

/// `GET /api/work-pools` — list all work pools.
pub async fn list_work_pools<QR, PR, CR>(
    State(state): State<AppState<QR, PR, CR>>,
) -> Result<Json<Vec<WorkPool>>, ApiError>
where
    QR: WorkQueueRepository + Send + Sync + 'static,
    PR: WorkPoolRepository + Send + Sync + 'static,
    CR: ConcurrencyLimitRepository + Send + Sync + 'static,
{
    let pools = state.resource_service.list_work_pools().await?;
    Ok(Json(pools))
}
