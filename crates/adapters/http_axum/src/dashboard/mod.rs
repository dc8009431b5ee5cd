//! Server-side rendered HTML pages.

pub mod concurrency_limits;
pub mod home;
#[allow(clippy::missing_errors_doc)]
pub mod resources;

use askama::Template;
use axum::Router;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;

use flowboard_app::ports::{ConcurrencyLimitRepository, WorkPoolRepository, WorkQueueRepository};
use flowboard_domain::error::FlowboardError;

use crate::error::status_and_message;
use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<QR, PR, CR>() -> Router<AppState<QR, PR, CR>>
where
    QR: WorkQueueRepository + Send + Sync + 'static,
    PR: WorkPoolRepository + Send + Sync + 'static,
    CR: ConcurrencyLimitRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home::index::<QR, PR, CR>))
        .route(
            "/concurrency-limits",
            get(concurrency_limits::list::<QR, PR, CR>),
        )
        .route("/work-pools/{name}", get(resources::work_pool::<QR, PR, CR>))
        .route(
            "/work-pools/{pool}/queues/{name}",
            get(resources::pooled_work_queue::<QR, PR, CR>),
        )
        .route(
            "/work-queues/{name}",
            get(resources::standalone_work_queue::<QR, PR, CR>),
        )
}

/// Error page template.
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    message: String,
}

/// Renders a [`FlowboardError`] as an HTML error page.
pub struct DashboardError(FlowboardError);

impl From<FlowboardError> for DashboardError {
    fn from(err: FlowboardError) -> Self {
        Self(err)
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let (status, message) = status_and_message(&self.0);
        let page = ErrorTemplate {
            status: status.as_u16(),
            message,
        };
        (status, Html(page.to_string())).into_response()
    }
}
