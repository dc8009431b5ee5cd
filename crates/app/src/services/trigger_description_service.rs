//! Trigger description service — resolves status triggers and describes
//! them together with the resources they watch.

use flowboard_domain::automation::{
    AutomationTrigger, Labels, ResourceKind, ResourceStatus, ScopeSummary, WatchedResource,
    describe_scope, is_any_resource, render_sentence_with, resolve_status, watched_resource_ids,
};
use flowboard_domain::error::FlowboardError;
use flowboard_domain::id::{WorkPoolId, WorkQueueId};

use crate::ports::{WorkPoolRepository, WorkQueueRepository};

/// Everything the dashboard shows for a status trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerDescription {
    pub kind: ResourceKind,
    pub status: ResourceStatus,
    pub scope: ScopeSummary,
    pub sentence: String,
}

/// Describes work queue and work pool status triggers.
pub struct TriggerDescriptionService<QR, PR> {
    work_queues: QR,
    work_pools: PR,
    labels: Labels,
}

impl<QR, PR> TriggerDescriptionService<QR, PR>
where
    QR: WorkQueueRepository,
    PR: WorkPoolRepository,
{
    /// Create a new service using the default sentence labels.
    pub fn new(work_queues: QR, work_pools: PR) -> Self {
        Self {
            work_queues,
            work_pools,
            labels: Labels::default(),
        }
    }

    /// Replace the posture and status labels used in sentences.
    #[must_use]
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Resolve and describe a trigger of the given kind.
    ///
    /// The status is resolved before anything is fetched. Watched resources
    /// are only looked up when the trigger names specific ones.
    ///
    /// # Errors
    ///
    /// Returns [`FlowboardError::Trigger`] when the trigger is malformed, or
    /// a storage error from the repositories.
    #[tracing::instrument(skip(self, trigger), fields(posture = %trigger.posture))]
    pub async fn describe(
        &self,
        kind: ResourceKind,
        trigger: &AutomationTrigger,
    ) -> Result<TriggerDescription, FlowboardError> {
        let status = resolve_status(kind, trigger)?;

        let description = match kind {
            ResourceKind::WorkQueue => {
                let queues = if is_any_resource(kind, trigger) {
                    Vec::new()
                } else {
                    let ids = watched_resource_ids(kind, trigger)
                        .into_iter()
                        .map(WorkQueueId::from_uuid)
                        .collect();
                    self.work_queues.get_by_ids(ids).await?
                };
                self.build(kind, status, trigger, &queues)?
            }
            ResourceKind::WorkPool => {
                let pools = if is_any_resource(kind, trigger) {
                    Vec::new()
                } else {
                    let ids = watched_resource_ids(kind, trigger)
                        .into_iter()
                        .map(WorkPoolId::from_uuid)
                        .collect();
                    self.work_pools.get_by_ids(ids).await?
                };
                self.build(kind, status, trigger, &pools)?
            }
        };

        tracing::debug!(%status, sentence = %description.sentence, "trigger described");
        Ok(description)
    }

    fn build<R: WatchedResource>(
        &self,
        kind: ResourceKind,
        status: ResourceStatus,
        trigger: &AutomationTrigger,
        resources: &[R],
    ) -> Result<TriggerDescription, FlowboardError> {
        let scope = describe_scope(kind, trigger, resources).summary();
        let sentence = render_sentence_with(&self.labels, kind, trigger, resources)?;
        Ok(TriggerDescription {
            kind,
            status,
            scope,
            sentence,
        })
    }
}
