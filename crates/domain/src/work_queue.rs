//! Work queue — a named queue of runnable work, optionally inside a pool.

use serde::{Deserialize, Serialize};

use crate::automation::WatchedResource;
use crate::href::encode_segment;
use crate::id::WorkQueueId;

/// A work queue as returned by the resource-listing API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkQueue {
    pub id: WorkQueueId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_pool_name: Option<String>,
}

impl WorkQueue {
    /// Create a queue that does not belong to any work pool.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: WorkQueueId::new(),
            name: name.into(),
            work_pool_name: None,
        }
    }

    /// Attach the queue to the named work pool.
    #[must_use]
    pub fn in_pool(mut self, work_pool_name: impl Into<String>) -> Self {
        self.work_pool_name = Some(work_pool_name.into());
        self
    }
}

impl WatchedResource for WorkQueue {
    fn uuid(&self) -> uuid::Uuid {
        self.id.as_uuid()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn href(&self) -> String {
        match &self.work_pool_name {
            Some(pool) => format!(
                "/work-pools/{}/queues/{}",
                encode_segment(pool),
                encode_segment(&self.name)
            ),
            None => format!("/work-queues/{}", encode_segment(&self.name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_link_to_pool_scoped_page_when_queue_has_pool() {
        let queue = WorkQueue::new("critical").in_pool("k8s");
        assert_eq!(queue.href(), "/work-pools/k8s/queues/critical");
    }

    #[test]
    fn should_link_to_standalone_page_when_queue_has_no_pool() {
        let queue = WorkQueue::new("default");
        assert_eq!(queue.href(), "/work-queues/default");
    }

    #[test]
    fn should_encode_names_in_link() {
        let pooled = WorkQueue::new("night jobs?").in_pool("k8s #1");
        assert_eq!(pooled.href(), "/work-pools/k8s%20%231/queues/night%20jobs%3F");

        let standalone = WorkQueue::new("a/b");
        assert_eq!(standalone.href(), "/work-queues/a%2Fb");
    }

    #[test]
    fn should_deserialize_without_work_pool_name() {
        let id = WorkQueueId::new();
        let json = serde_json::json!({ "id": id, "name": "default" });
        let queue: WorkQueue = serde_json::from_value(json).unwrap();
        assert_eq!(queue.id, id);
        assert!(queue.work_pool_name.is_none());
    }
}
