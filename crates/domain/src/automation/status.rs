//! Resource statuses and the per-kind tables of qualified status events.

use serde::{Deserialize, Serialize};

/// Status shared by work queues and work pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceStatus {
    Ready,
    NotReady,
    Paused,
}

impl ResourceStatus {
    pub const ALL: [Self; 3] = [Self::Ready, Self::NotReady, Self::Paused];

    /// Last segment of the qualified event name for this status.
    fn event_suffix(self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::NotReady => "not-ready",
            Self::Paused => "paused",
        }
    }
}

impl std::fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ready => f.write_str("ready"),
            Self::NotReady => f.write_str("not_ready"),
            Self::Paused => f.write_str("paused"),
        }
    }
}

/// The kind of resource a status trigger watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    WorkQueue,
    WorkPool,
}

impl ResourceKind {
    /// Prefix of qualified resource ids and event names, e.g. `prefect.work-queue`.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::WorkQueue => "prefect.work-queue",
            Self::WorkPool => "prefect.work-pool",
        }
    }

    /// Resource id pattern matching every resource of this kind.
    #[must_use]
    pub fn wildcard(self) -> &'static str {
        match self {
            Self::WorkQueue => "prefect.work-queue.*",
            Self::WorkPool => "prefect.work-pool.*",
        }
    }

    /// Qualified resource id of a single resource.
    #[must_use]
    pub fn resource_id(self, id: uuid::Uuid) -> String {
        format!("{}.{id}", self.prefix())
    }

    /// Qualified event name emitted when a resource enters `status`.
    #[must_use]
    pub fn event_name(self, status: ResourceStatus) -> String {
        format!("{}.{}", self.prefix(), status.event_suffix())
    }

    /// Look up the status a qualified event name stands for.
    ///
    /// Events of the other resource kind are not in the table.
    #[must_use]
    pub fn status_for_event(self, event: &str) -> Option<ResourceStatus> {
        match (self, event) {
            (Self::WorkQueue, "prefect.work-queue.ready")
            | (Self::WorkPool, "prefect.work-pool.ready") => Some(ResourceStatus::Ready),
            (Self::WorkQueue, "prefect.work-queue.not-ready")
            | (Self::WorkPool, "prefect.work-pool.not-ready") => Some(ResourceStatus::NotReady),
            (Self::WorkQueue, "prefect.work-queue.paused")
            | (Self::WorkPool, "prefect.work-pool.paused") => Some(ResourceStatus::Paused),
            _ => None,
        }
    }

    /// Scope phrase used when the trigger watches every resource of the kind.
    #[must_use]
    pub fn any_phrase(self) -> &'static str {
        match self {
            Self::WorkQueue => "any work queue",
            Self::WorkPool => "any work pool",
        }
    }

    /// Noun counted in front of an explicit resource list.
    // Work pools are counted as "deployment" by the dashboard this mirrors.
    #[must_use]
    pub fn count_noun(self) -> &'static str {
        match self {
            Self::WorkQueue => "work queue",
            Self::WorkPool => "deployment",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WorkQueue => f.write_str("work queue"),
            Self::WorkPool => f.write_str("work pool"),
        }
    }
}
