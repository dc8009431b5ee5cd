//! Dashboard home page — overview of the known resources.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use flowboard_app::ports::{ConcurrencyLimitRepository, WorkPoolRepository, WorkQueueRepository};

use super::DashboardError;
use crate::state::AppState;

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    work_pool_count: usize,
    work_queue_count: usize,
    limit_count: usize,
}

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /` — resource overview.
///
/// # Errors
///
/// Returns a [`DashboardError`] if a repository fails.
pub async fn index<QR, PR, CR>(
    State(state): State<AppState<QR, PR, CR>>,
) -> Result<HomeTemplate, DashboardError>
where
    QR: WorkQueueRepository + Send + Sync + 'static,
    PR: WorkPoolRepository + Send + Sync + 'static,
    CR: ConcurrencyLimitRepository + Send + Sync + 'static,
{
    let pools = state.resource_service.list_work_pools().await?;
    let queues = state.resource_service.list_work_queues().await?;
    let limits = state.concurrency_limit_service.list_limits().await?;

    Ok(HomeTemplate {
        work_pool_count: pools.len(),
        work_queue_count: queues.len(),
        limit_count: limits.len(),
    })
}
