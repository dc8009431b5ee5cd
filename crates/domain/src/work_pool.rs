//! Work pool — a named pool of workers.

use serde::{Deserialize, Serialize};

use crate::automation::WatchedResource;
use crate::href::encode_segment;
use crate::id::WorkPoolId;

/// A work pool as returned by the resource-listing API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkPool {
    pub id: WorkPoolId,
    pub name: String,
}

impl WorkPool {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: WorkPoolId::new(),
            name: name.into(),
        }
    }
}

impl WatchedResource for WorkPool {
    fn uuid(&self) -> uuid::Uuid {
        self.id.as_uuid()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn href(&self) -> String {
        format!("/work-pools/{}", encode_segment(&self.name))
    }
}
