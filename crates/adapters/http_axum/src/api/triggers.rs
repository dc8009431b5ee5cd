//! JSON handlers for status triggers.

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use flowboard_app::ports::{ConcurrencyLimitRepository, WorkPoolRepository, WorkQueueRepository};
use flowboard_app::services::trigger_description_service::TriggerDescription;
use flowboard_domain::automation::{
    AutomationTrigger, Posture, ResourceKind, ResourceStatus, ScopeSummary,
    StatusTriggerTemplate,
};
use flowboard_domain::error::FlowboardError;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body of the describe endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct DescribeResponse {
    pub kind: ResourceKind,
    pub status: ResourceStatus,
    pub scope: ScopeSummary,
    pub sentence: String,
}

impl From<TriggerDescription> for DescribeResponse {
    fn from(description: TriggerDescription) -> Self {
        Self {
            kind: description.kind,
            status: description.status,
            scope: description.scope,
            sentence: description.sentence,
        }
    }
}

/// Request body of the template endpoint; the kind comes from the path.
#[derive(Debug, Deserialize)]
pub struct TemplateRequest {
    #[serde(default)]
    pub resource_ids: Vec<uuid::Uuid>,
    pub posture: Posture,
    pub status: ResourceStatus,
    #[serde(default)]
    pub within: u64,
}

/// `POST /api/triggers/{kind}/describe` — resolve and describe a trigger.
pub async fn describe<QR, PR, CR>(
    State(state): State<AppState<QR, PR, CR>>,
    Path(kind): Path<ResourceKind>,
    Json(trigger): Json<AutomationTrigger>,
) -> Result<Json<DescribeResponse>, ApiError>
where
    QR: WorkQueueRepository + Send + Sync + 'static,
    PR: WorkPoolRepository + Send + Sync + 'static,
    CR: ConcurrencyLimitRepository + Send + Sync + 'static,
{
    let description = state.trigger_service.describe(kind, &trigger).await?;
    Ok(Json(description.into()))
}

/// `POST /api/triggers/{kind}/template` — expand a status template into a trigger.
pub async fn template(
    Path(kind): Path<ResourceKind>,
    Json(req): Json<TemplateRequest>,
) -> Json<AutomationTrigger> {
    let template = StatusTriggerTemplate {
        kind,
        resource_ids: req.resource_ids,
        posture: req.posture,
        status: req.status,
        within: req.within,
    };
    Json(template.to_trigger())
}

/// `POST /api/triggers/{kind}/as-template` — recover the template behind a trigger.
pub async fn as_template(
    Path(kind): Path<ResourceKind>,
    Json(trigger): Json<AutomationTrigger>,
) -> Result<Json<StatusTriggerTemplate>, ApiError> {
    let template =
        StatusTriggerTemplate::from_trigger(kind, &trigger).map_err(FlowboardError::from)?;
    Ok(Json(template))
}
