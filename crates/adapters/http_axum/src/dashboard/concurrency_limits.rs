//! Global concurrency limits table page.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use flowboard_app::ports::{ConcurrencyLimitRepository, WorkPoolRepository, WorkQueueRepository};
use flowboard_domain::concurrency_limit::Cell;

use super::DashboardError;
use crate::state::AppState;

/// A table cell ready for the template.
pub struct CellView {
    text: String,
    class: &'static str,
}

impl From<Cell> for CellView {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Text(text) => Self { text, class: "" },
            Cell::Indicator(true) => Self {
                text: "Active".to_string(),
                class: "badge badge-on",
            },
            Cell::Indicator(false) => Self {
                text: "Inactive".to_string(),
                class: "badge badge-off",
            },
        }
    }
}

/// Concurrency limits page template.
#[derive(Template)]
#[template(path = "concurrency_limits.html")]
pub struct ConcurrencyLimitsTemplate {
    headers: Vec<&'static str>,
    rows: Vec<Vec<CellView>>,
}

impl IntoResponse for ConcurrencyLimitsTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /concurrency-limits` — table of all global concurrency limits.
///
/// # Errors
///
/// Returns a [`DashboardError`] if the repository fails.
pub async fn list<QR, PR, CR>(
    State(state): State<AppState<QR, PR, CR>>,
) -> Result<ConcurrencyLimitsTemplate, DashboardError>
where
    QR: WorkQueueRepository + Send + Sync + 'static,
    PR: WorkPoolRepository + Send + Sync + 'static,
    CR: ConcurrencyLimitRepository + Send + Sync + 'static,
{
    let table = state.concurrency_limit_service.table().await?;

    Ok(ConcurrencyLimitsTemplate {
        headers: table.headers(),
        rows: table
            .rows()
            .into_iter()
            .map(|row| row.into_iter().map(CellView::from).collect())
            .collect(),
    })
}
