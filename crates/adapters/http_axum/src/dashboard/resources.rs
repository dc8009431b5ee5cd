//! Work pool and work queue pages — the link targets of trigger sentences.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};

use flowboard_app::ports::{ConcurrencyLimitRepository, WorkPoolRepository, WorkQueueRepository};
use flowboard_domain::automation::WatchedResource;
use flowboard_domain::href::encode_segment;
use flowboard_domain::work_pool::WorkPool;
use flowboard_domain::work_queue::WorkQueue;

use super::DashboardError;
use crate::state::AppState;

/// A named link for templates.
pub struct LinkView {
    name: String,
    href: String,
}

impl LinkView {
    fn of(resource: &impl WatchedResource) -> Self {
        Self {
            name: resource.name().to_string(),
            href: resource.href(),
        }
    }
}

/// Work pool detail page template.
#[derive(Template)]
#[template(path = "work_pool_detail.html")]
pub struct WorkPoolTemplate {
    pool: WorkPool,
    queues: Vec<LinkView>,
}

impl IntoResponse for WorkPoolTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Work queue detail page template.
#[derive(Template)]
#[template(path = "work_queue_detail.html")]
pub struct WorkQueueTemplate {
    queue: WorkQueue,
    work_pool: Option<LinkView>,
}

impl IntoResponse for WorkQueueTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

impl WorkQueueTemplate {
    fn new(queue: WorkQueue) -> Self {
        let work_pool = queue.work_pool_name.as_ref().map(|name| LinkView {
            name: name.clone(),
            href: format!("/work-pools/{}", encode_segment(name)),
        });
        Self { queue, work_pool }
    }
}

/// `GET /work-pools/{name}` — work pool detail with its queues.
pub async fn work_pool<QR, PR, CR>(
    State(state): State<AppState<QR, PR, CR>>,
    Path(name): Path<String>,
) -> Result<WorkPoolTemplate, DashboardError>
where
    QR: WorkQueueRepository + Send + Sync + 'static,
    PR: WorkPoolRepository + Send + Sync + 'static,
    CR: ConcurrencyLimitRepository + Send + Sync + 'static,
{
    let (pool, queues) = state.resource_service.get_work_pool(&name).await?;

    Ok(WorkPoolTemplate {
        pool,
        queues: queues.iter().map(LinkView::of).collect(),
    })
}

/// `GET /work-pools/{pool}/queues/{name}` — detail of a queue inside a pool.
pub async fn pooled_work_queue<QR, PR, CR>(
    State(state): State<AppState<QR, PR, CR>>,
    Path((pool, name)): Path<(String, String)>,
) -> Result<WorkQueueTemplate, DashboardError>
where
    QR: WorkQueueRepository + Send + Sync + 'static,
    PR: WorkPoolRepository + Send + Sync + 'static,
    CR: ConcurrencyLimitRepository + Send + Sync + 'static,
{
    let queue = state
        .resource_service
        .get_work_queue(Some(&pool), &name)
        .await?;
    Ok(WorkQueueTemplate::new(queue))
}

/// `GET /work-queues/{name}` — detail of a queue outside any pool.
pub async fn standalone_work_queue<QR, PR, CR>(
    State(state): State<AppState<QR, PR, CR>>,
    Path(name): Path<String>,
) -> Result<WorkQueueTemplate, DashboardError>
where
    QR: WorkQueueRepository + Send + Sync + 'static,
    PR: WorkPoolRepository + Send + Sync + 'static,
    CR: ConcurrencyLimitRepository + Send + Sync + 'static,
{
    let queue = state.resource_service.get_work_queue(None, &name).await?;
    Ok(WorkQueueTemplate::new(queue))
}
