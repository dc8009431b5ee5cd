//! Trigger status resolver.
//!
//! Maps a status trigger to the [`ResourceStatus`] it watches for, the
//! scope of resources it applies to, and a sentence such as
//! `"When any work queue enters Not Ready"`.
//!
//! Every function here is pure: the same trigger always yields the same
//! status and byte-identical sentence. Resources named by a specific scope
//! are fetched by the caller and passed in.

use serde::{Deserialize, Serialize};

use super::status::{ResourceKind, ResourceStatus};
use super::{AutomationTrigger, MatchValue, Posture, RESOURCE_ID, WatchedResource};
use crate::error::TriggerError;
use crate::humanize::{count_phrase, seconds_to_string};

/// Resolve the status a trigger watches for.
///
/// Reactive triggers are described by the head of `expect`, proactive ones
/// by the head of `after`. Any further events are ignored.
///
/// # Errors
///
/// - [`TriggerError::MissingField`] when the posture's event list is empty
/// - [`TriggerError::UnknownEvent`] when the head event is not a status
///   event of `kind`
pub fn resolve_status(
    kind: ResourceKind,
    trigger: &AutomationTrigger,
) -> Result<ResourceStatus, TriggerError> {
    let (field, events) = match trigger.posture {
        Posture::Reactive => ("expect", &trigger.expect),
        Posture::Proactive => ("after", &trigger.after),
    };
    let event = events
        .first()
        .ok_or(TriggerError::MissingField { field })?;
    kind.status_for_event(event)
        .ok_or_else(|| TriggerError::UnknownEvent {
            kind,
            event: event.clone(),
        })
}

fn matches_wildcard(kind: ResourceKind, trigger: &AutomationTrigger) -> bool {
    matches!(
        trigger.resource_match.get(RESOURCE_ID),
        Some(MatchValue::One(value)) if value == kind.wildcard()
    )
}

/// Whether a trigger watches every work queue.
///
/// Requires the wildcard id *and* an empty `match_related`.
#[must_use]
pub fn is_any_work_queue(trigger: &AutomationTrigger) -> bool {
    matches_wildcard(ResourceKind::WorkQueue, trigger) && trigger.match_related.is_empty()
}

/// Whether a trigger watches every work pool.
///
/// Only the wildcard id is checked; `match_related` is ignored, unlike
/// [`is_any_work_queue`].
#[must_use]
pub fn is_any_work_pool(trigger: &AutomationTrigger) -> bool {
    matches_wildcard(ResourceKind::WorkPool, trigger)
}

/// Dispatch to the "any resource" predicate of `kind`.
#[must_use]
pub fn is_any_resource(kind: ResourceKind, trigger: &AutomationTrigger) -> bool {
    match kind {
        ResourceKind::WorkQueue => is_any_work_queue(trigger),
        ResourceKind::WorkPool => is_any_work_pool(trigger),
    }
}

/// Raw ids of the resources explicitly named by the trigger's match.
///
/// Wildcards and values that are not `"{prefix}.{uuid}"` are skipped.
#[must_use]
pub fn watched_resource_ids(kind: ResourceKind, trigger: &AutomationTrigger) -> Vec<uuid::Uuid> {
    let Some(value) = trigger.resource_match.get(RESOURCE_ID) else {
        return Vec::new();
    };
    value
        .values()
        .iter()
        .filter_map(|id| id.strip_prefix(kind.prefix())?.strip_prefix('.'))
        .filter_map(|raw| uuid::Uuid::parse_str(raw).ok())
        .collect()
}

/// The set of resources a trigger applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeDescriptor<'a, R> {
    /// Every resource of the kind.
    Any(ResourceKind),
    /// The resources supplied by the caller.
    Specific {
        kind: ResourceKind,
        resources: &'a [R],
    },
}

impl<R: WatchedResource> ScopeDescriptor<'_, R> {
    /// Scope phrase as it appears in the sentence.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Any(kind) => kind.any_phrase().to_string(),
            Self::Specific { kind, resources } => {
                let count = count_phrase(kind.count_noun(), resources.len() as u64);
                if resources.is_empty() {
                    return count;
                }
                let names = resources
                    .iter()
                    .map(WatchedResource::name)
                    .collect::<Vec<_>>()
                    .join(" or ");
                format!("{count} {names}")
            }
        }
    }

    /// Owned, serializable view of the scope.
    #[must_use]
    pub fn summary(&self) -> ScopeSummary {
        match self {
            Self::Any(_) => ScopeSummary::Any,
            Self::Specific { resources, .. } => ScopeSummary::Specific {
                resources: resources
                    .iter()
                    .map(|resource| ResourceLink {
                        id: resource.uuid(),
                        name: resource.name().to_string(),
                        href: resource.href(),
                    })
                    .collect(),
            },
        }
    }
}

/// Serializable form of a [`ScopeDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScopeSummary {
    Any,
    Specific { resources: Vec<ResourceLink> },
}

/// A named, linkable resource inside a specific scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub id: uuid::Uuid,
    pub name: String,
    pub href: String,
}

/// Describe which resources a trigger applies to.
#[must_use]
pub fn describe_scope<'a, R>(
    kind: ResourceKind,
    trigger: &AutomationTrigger,
    resources: &'a [R],
) -> ScopeDescriptor<'a, R> {
    if is_any_resource(kind, trigger) {
        ScopeDescriptor::Any(kind)
    } else {
        ScopeDescriptor::Specific { kind, resources }
    }
}

/// Text used for postures and statuses in rendered sentences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub reactive: String,
    pub proactive: String,
    pub ready: String,
    pub not_ready: String,
    pub paused: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            reactive: "enters".to_string(),
            proactive: "stays in".to_string(),
            ready: "Ready".to_string(),
            not_ready: "Not Ready".to_string(),
            paused: "Paused".to_string(),
        }
    }
}

impl Labels {
    #[must_use]
    pub fn posture(&self, posture: Posture) -> &str {
        match posture {
            Posture::Reactive => &self.reactive,
            Posture::Proactive => &self.proactive,
        }
    }

    #[must_use]
    pub fn status(&self, status: ResourceStatus) -> &str {
        match status {
            ResourceStatus::Ready => &self.ready,
            ResourceStatus::NotReady => &self.not_ready,
            ResourceStatus::Paused => &self.paused,
        }
    }
}

/// Render the trigger sentence with the default [`Labels`].
///
/// # Errors
///
/// Propagates the errors of [`resolve_status`].
pub fn render_sentence<R: WatchedResource>(
    kind: ResourceKind,
    trigger: &AutomationTrigger,
    resources: &[R],
) -> Result<String, TriggerError> {
    render_sentence_with(&Labels::default(), kind, trigger, resources)
}

/// Render `"When {scope} {posture} {status}"`, followed by
/// `" for {within}"` for proactive triggers.
///
/// # Errors
///
/// Propagates the errors of [`resolve_status`].
pub fn render_sentence_with<R: WatchedResource>(
    labels: &Labels,
    kind: ResourceKind,
    trigger: &AutomationTrigger,
    resources: &[R],
) -> Result<String, TriggerError> {
    let status = resolve_status(kind, trigger)?;
    let scope = describe_scope(kind, trigger, resources);

    let mut sentence = format!(
        "When {} {} {}",
        scope.text(),
        labels.posture(trigger.posture),
        labels.status(status)
    );
    if trigger.posture == Posture::Proactive {
        sentence.push_str(" for ");
        sentence.push_str(&seconds_to_string(trigger.within));
    }
    Ok(sentence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::work_pool::WorkPool;
    use crate::work_queue::WorkQueue;

    fn any_queue_not_ready() -> AutomationTrigger {
        AutomationTrigger::builder()
            .posture(Posture::Reactive)
            .expect("prefect.work-queue.not-ready")
            .resource_match(RESOURCE_ID, "prefect.work-queue.*")
            .build()
    }

    fn three_pools() -> Vec<WorkPool> {
        vec![
            WorkPool::new("k8s"),
            WorkPool::new("ecs"),
            WorkPool::new("local"),
        ]
    }

    fn pools_paused_trigger(pools: &[WorkPool]) -> AutomationTrigger {
        let ids = pools
            .iter()
            .map(|pool| ResourceKind::WorkPool.resource_id(pool.id.as_uuid()))
            .collect::<Vec<_>>();
        AutomationTrigger::builder()
            .posture(Posture::Proactive)
            .after("prefect.work-pool.paused")
            .expect("prefect.work-pool.ready")
            .within(1800)
            .resource_match(RESOURCE_ID, ids)
            .build()
    }

    #[test]
    fn should_resolve_reactive_status_from_expect_head() {
        let trigger = AutomationTrigger::builder()
            .posture(Posture::Reactive)
            .expect("prefect.work-queue.paused")
            .expect("prefect.work-queue.ready")
            .after("prefect.work-queue.not-ready")
            .build();
        assert_eq!(
            resolve_status(ResourceKind::WorkQueue, &trigger),
            Ok(ResourceStatus::Paused)
        );
    }

    #[test]
    fn should_resolve_proactive_status_from_after_head_ignoring_expect() {
        let trigger = pools_paused_trigger(&three_pools());
        assert_eq!(
            resolve_status(ResourceKind::WorkPool, &trigger),
            Ok(ResourceStatus::Paused)
        );
    }

    #[test]
    fn should_fail_with_missing_field_when_expect_is_empty() {
        let trigger = AutomationTrigger::builder()
            .posture(Posture::Reactive)
            .after("prefect.work-queue.ready")
            .build();
        assert_eq!(
            resolve_status(ResourceKind::WorkQueue, &trigger),
            Err(TriggerError::MissingField { field: "expect" })
        );
    }

    #[test]
    fn should_fail_with_missing_field_when_after_is_empty() {
        let trigger = AutomationTrigger::builder()
            .posture(Posture::Proactive)
            .expect("prefect.work-pool.ready")
            .build();
        assert_eq!(
            resolve_status(ResourceKind::WorkPool, &trigger),
            Err(TriggerError::MissingField { field: "after" })
        );
    }

    #[test]
    fn should_fail_with_missing_field_when_expect_is_null() {
        let json = serde_json::json!({
            "posture": "Reactive",
            "match": { "prefect.resource.id": "prefect.work-queue.*" },
            "expect": null
        });
        let trigger: AutomationTrigger = serde_json::from_value(json).unwrap();
        assert_eq!(
            resolve_status(ResourceKind::WorkQueue, &trigger),
            Err(TriggerError::MissingField { field: "expect" })
        );
    }

    #[test]
    fn should_fail_with_unknown_event_when_head_is_not_in_table() {
        let trigger = AutomationTrigger::builder()
            .expect("prefect.work-queue.exploded")
            .build();
        assert_eq!(
            resolve_status(ResourceKind::WorkQueue, &trigger),
            Err(TriggerError::UnknownEvent {
                kind: ResourceKind::WorkQueue,
                event: "prefect.work-queue.exploded".to_string(),
            })
        );
    }

    #[test]
    fn should_fail_with_unknown_event_when_head_belongs_to_other_kind() {
        let trigger = AutomationTrigger::builder()
            .expect("prefect.work-pool.ready")
            .build();
        assert!(matches!(
            resolve_status(ResourceKind::WorkQueue, &trigger),
            Err(TriggerError::UnknownEvent { .. })
        ));
    }

    #[test]
    fn should_describe_any_work_queue_when_wildcard_and_no_related_match() {
        let trigger = any_queue_not_ready();
        let scope = describe_scope::<WorkQueue>(ResourceKind::WorkQueue, &trigger, &[]);
        assert_eq!(scope, ScopeDescriptor::Any(ResourceKind::WorkQueue));
        assert_eq!(scope.text(), "any work queue");
        assert_eq!(
            resolve_status(ResourceKind::WorkQueue, &trigger),
            Ok(ResourceStatus::NotReady)
        );
    }

    #[test]
    fn should_not_describe_any_work_queue_when_related_match_is_set() {
        let mut trigger = any_queue_not_ready();
        trigger
            .match_related
            .insert("prefect.resource.role".to_string(), "work-pool".into());
        assert!(!is_any_work_queue(&trigger));
    }

    #[test]
    fn should_describe_any_work_pool_regardless_of_related_match() {
        let trigger = AutomationTrigger::builder()
            .expect("prefect.work-pool.ready")
            .resource_match(RESOURCE_ID, "prefect.work-pool.*")
            .match_related("prefect.resource.role", "flow")
            .build();
        assert!(is_any_work_pool(&trigger));
        let scope = describe_scope::<WorkPool>(ResourceKind::WorkPool, &trigger, &[]);
        assert_eq!(scope.text(), "any work pool");
    }

    #[test]
    fn should_not_treat_other_kind_wildcard_as_any() {
        let trigger = any_queue_not_ready();
        assert!(!is_any_work_pool(&trigger));
    }

    #[test]
    fn should_not_treat_wildcard_inside_list_as_any() {
        let trigger = AutomationTrigger::builder()
            .resource_match(RESOURCE_ID, vec!["prefect.work-pool.*".to_string()])
            .build();
        assert!(!is_any_work_pool(&trigger));
    }

    #[test]
    fn should_extract_watched_ids_from_list_match() {
        let pools = three_pools();
        let trigger = pools_paused_trigger(&pools);
        let ids = watched_resource_ids(ResourceKind::WorkPool, &trigger);
        let expected: Vec<_> = pools.iter().map(|pool| pool.id.as_uuid()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn should_skip_wildcards_and_foreign_ids_when_extracting() {
        let id = uuid::Uuid::new_v4();
        let trigger = AutomationTrigger::builder()
            .resource_match(
                RESOURCE_ID,
                vec![
                    "prefect.work-queue.*".to_string(),
                    format!("prefect.work-pool.{id}"),
                    format!("prefect.work-queue.{id}"),
                    "prefect.work-queue.not-a-uuid".to_string(),
                ],
            )
            .build();
        assert_eq!(watched_resource_ids(ResourceKind::WorkQueue, &trigger), vec![id]);
    }

    #[test]
    fn should_render_any_work_queue_sentence() {
        let sentence =
            render_sentence::<WorkQueue>(ResourceKind::WorkQueue, &any_queue_not_ready(), &[])
                .unwrap();
        assert_eq!(sentence, "When any work queue enters Not Ready");
    }

    #[test]
    fn should_render_specific_pools_with_duration_suffix() {
        let pools = three_pools();
        let trigger = pools_paused_trigger(&pools);
        let sentence = render_sentence(ResourceKind::WorkPool, &trigger, &pools).unwrap();
        assert_eq!(
            sentence,
            "When 3 deployments k8s or ecs or local stays in Paused for 30 minutes"
        );
        assert!(sentence.ends_with(" for 30 minutes"));
    }

    #[test]
    fn should_not_append_duration_when_reactive_trigger_has_window() {
        let trigger = AutomationTrigger::builder()
            .posture(Posture::Reactive)
            .expect("prefect.work-queue.ready")
            .resource_match(RESOURCE_ID, "prefect.work-queue.*")
            .within(300)
            .build();
        let sentence = render_sentence::<WorkQueue>(ResourceKind::WorkQueue, &trigger, &[]).unwrap();
        assert_eq!(sentence, "When any work queue enters Ready");
    }

    #[test]
    fn should_render_specific_queues_with_queue_count() {
        let queues = vec![WorkQueue::new("default")];
        let trigger = AutomationTrigger::builder()
            .expect("prefect.work-queue.ready")
            .resource_match(
                RESOURCE_ID,
                ResourceKind::WorkQueue.resource_id(queues[0].id.as_uuid()),
            )
            .build();
        let sentence = render_sentence(ResourceKind::WorkQueue, &trigger, &queues).unwrap();
        assert_eq!(sentence, "When 1 work queue default enters Ready");
    }

    #[test]
    fn should_render_count_only_when_specific_list_is_empty() {
        let trigger = AutomationTrigger::builder()
            .expect("prefect.work-queue.ready")
            .build();
        let sentence = render_sentence::<WorkQueue>(ResourceKind::WorkQueue, &trigger, &[]).unwrap();
        assert_eq!(sentence, "When 0 work queues enters Ready");
    }

    #[test]
    fn should_use_custom_labels() {
        let labels = Labels {
            reactive: "becomes".to_string(),
            not_ready: "unhealthy".to_string(),
            ..Labels::default()
        };
        let sentence = render_sentence_with::<WorkQueue>(
            &labels,
            ResourceKind::WorkQueue,
            &any_queue_not_ready(),
            &[],
        )
        .unwrap();
        assert_eq!(sentence, "When any work queue becomes unhealthy");
    }

    #[test]
    fn should_propagate_resolver_error_from_render() {
        let trigger = AutomationTrigger::builder()
            .posture(Posture::Proactive)
            .build();
        let result = render_sentence::<WorkPool>(ResourceKind::WorkPool, &trigger, &[]);
        assert_eq!(result, Err(TriggerError::MissingField { field: "after" }));
    }

    #[test]
    fn should_render_identical_sentences_when_called_twice() {
        let pools = three_pools();
        let trigger = pools_paused_trigger(&pools);
        let first = render_sentence(ResourceKind::WorkPool, &trigger, &pools).unwrap();
        let second = render_sentence(ResourceKind::WorkPool, &trigger, &pools).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn should_summarize_specific_scope_with_links() {
        let pools = three_pools();
        let trigger = pools_paused_trigger(&pools);
        let summary = describe_scope(ResourceKind::WorkPool, &trigger, &pools).summary();
        let ScopeSummary::Specific { resources } = summary else {
            panic!("expected a specific scope");
        };
        assert_eq!(resources.len(), 3);
        assert_eq!(resources[0].name, "k8s");
        assert_eq!(resources[0].href, "/work-pools/k8s");
        assert_eq!(resources[0].id, pools[0].id.as_uuid());
    }
}
