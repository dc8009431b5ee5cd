//! Status trigger templates — the form-level view of a status trigger.

use serde::{Deserialize, Serialize};

use super::resolver::{is_any_resource, resolve_status, watched_resource_ids};
use super::status::{ResourceKind, ResourceStatus};
use super::{AutomationTrigger, MatchValue, Posture, RESOURCE_ID};
use crate::error::TriggerError;

/// "When these work queues / pools enter (or stay in) this status".
///
/// An empty `resource_ids` list means every resource of the kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTriggerTemplate {
    pub kind: ResourceKind,
    #[serde(default)]
    pub resource_ids: Vec<uuid::Uuid>,
    pub posture: Posture,
    pub status: ResourceStatus,
    /// Window in seconds; ignored for reactive templates.
    #[serde(default)]
    pub within: u64,
}

impl StatusTriggerTemplate {
    /// Expand the template into a full trigger.
    ///
    /// Reactive templates expect the status event. Proactive templates open
    /// their window on the status event and expect any other status.
    #[must_use]
    pub fn to_trigger(&self) -> AutomationTrigger {
        let resource_id = if self.resource_ids.is_empty() {
            MatchValue::from(self.kind.wildcard())
        } else {
            MatchValue::Many(
                self.resource_ids
                    .iter()
                    .map(|id| self.kind.resource_id(*id))
                    .collect(),
            )
        };

        let event = self.kind.event_name(self.status);
        let builder = AutomationTrigger::builder()
            .posture(self.posture)
            .resource_match(RESOURCE_ID, resource_id)
            .for_each(RESOURCE_ID);

        match self.posture {
            Posture::Reactive => builder.expect(event).build(),
            Posture::Proactive => ResourceStatus::ALL
                .into_iter()
                .filter(|status| *status != self.status)
                .fold(builder.after(event).within(self.within), |builder, status| {
                    builder.expect(self.kind.event_name(status))
                })
                .build(),
        }
    }

    /// Recover the template from a trigger of the given kind.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`resolve_status`].
    pub fn from_trigger(
        kind: ResourceKind,
        trigger: &AutomationTrigger,
    ) -> Result<Self, TriggerError> {
        let status = resolve_status(kind, trigger)?;
        let resource_ids = if is_any_resource(kind, trigger) {
            Vec::new()
        } else {
            watched_resource_ids(kind, trigger)
        };
        let within = match trigger.posture {
            Posture::Reactive => 0,
            Posture::Proactive => trigger.within,
        };

        Ok(Self {
            kind,
            resource_ids,
            posture: trigger.posture,
            status,
            within,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automation::is_any_work_queue;

    fn template(posture: Posture, resource_ids: Vec<uuid::Uuid>) -> StatusTriggerTemplate {
        StatusTriggerTemplate {
            kind: ResourceKind::WorkQueue,
            resource_ids,
            posture,
            status: ResourceStatus::NotReady,
            within: 600,
        }
    }

    #[test]
    fn should_build_wildcard_reactive_trigger_when_no_ids_given() {
        let trigger = template(Posture::Reactive, vec![]).to_trigger();
        assert!(is_any_work_queue(&trigger));
        assert_eq!(trigger.expect, vec!["prefect.work-queue.not-ready"]);
        assert!(trigger.after.is_empty());
        assert_eq!(trigger.within, 0);
        assert_eq!(trigger.for_each, vec![RESOURCE_ID]);
    }

    #[test]
    fn should_expect_other_statuses_for_proactive_trigger() {
        let trigger = template(Posture::Proactive, vec![]).to_trigger();
        assert_eq!(trigger.after, vec!["prefect.work-queue.not-ready"]);
        assert_eq!(
            trigger.expect,
            vec!["prefect.work-queue.ready", "prefect.work-queue.paused"]
        );
        assert_eq!(trigger.within, 600);
    }

    #[test]
    fn should_list_qualified_ids_when_ids_given() {
        let id = uuid::Uuid::new_v4();
        let trigger = template(Posture::Reactive, vec![id]).to_trigger();
        assert_eq!(
            trigger.resource_match.get(RESOURCE_ID),
            Some(&MatchValue::Many(vec![format!("prefect.work-queue.{id}")]))
        );
    }

    #[test]
    fn should_recover_template_from_built_trigger() {
        let ids = vec![uuid::Uuid::new_v4(), uuid::Uuid::new_v4()];
        for posture in [Posture::Reactive, Posture::Proactive] {
            let original = template(posture, ids.clone());
            let recovered =
                StatusTriggerTemplate::from_trigger(ResourceKind::WorkQueue, &original.to_trigger())
                    .unwrap();
            assert_eq!(recovered.status, original.status);
            assert_eq!(recovered.posture, original.posture);
            assert_eq!(recovered.resource_ids, ids);
        }
    }

    #[test]
    fn should_drop_window_when_recovering_reactive_template() {
        let trigger = AutomationTrigger::builder()
            .expect("prefect.work-queue.ready")
            .within(300)
            .build();
        let recovered = StatusTriggerTemplate::from_trigger(ResourceKind::WorkQueue, &trigger).unwrap();
        assert_eq!(recovered.within, 0);
    }

    #[test]
    fn should_reject_malformed_trigger_when_recovering_template() {
        let trigger = AutomationTrigger::builder()
            .posture(Posture::Proactive)
            .build();
        let result = StatusTriggerTemplate::from_trigger(ResourceKind::WorkPool, &trigger);
        assert_eq!(result, Err(TriggerError::MissingField { field: "after" }));
    }
}
