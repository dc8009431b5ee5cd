//! Automation triggers — declarative rules over resource status events.
//!
//! A trigger watches a set of resources (selected by [`AutomationTrigger::resource_match`])
//! and fires either when an event arrives ([`Posture::Reactive`]) or when an
//! expected event fails to arrive within a window ([`Posture::Proactive`]).
//! The [`resolver`] turns such a trigger into a [`ResourceStatus`] and a
//! sentence suitable for display.

pub mod resolver;
mod status;
mod template;

pub use resolver::{
    Labels, ScopeDescriptor, ScopeSummary, describe_scope, is_any_resource, is_any_work_pool,
    is_any_work_queue, render_sentence, render_sentence_with, resolve_status,
    watched_resource_ids,
};
pub use status::{ResourceKind, ResourceStatus};
pub use template::StatusTriggerTemplate;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Event namespace of the orchestration API.
pub const EVENT_NAMESPACE: &str = "prefect";

/// Resource attribute holding the qualified resource identifier.
pub const RESOURCE_ID: &str = "prefect.resource.id";

/// Whether a trigger fires on the presence or on the absence of events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Posture {
    /// Fires when a matching event arrives.
    Reactive,
    /// Fires when an expected event does not arrive within `within` seconds.
    Proactive,
}

impl std::fmt::Display for Posture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reactive => f.write_str("Reactive"),
            Self::Proactive => f.write_str("Proactive"),
        }
    }
}

/// A literal value or wildcard pattern, or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatchValue {
    One(String),
    Many(Vec<String>),
}

impl MatchValue {
    /// All candidate values, regardless of shape.
    #[must_use]
    pub fn values(&self) -> &[String] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }
}

impl From<&str> for MatchValue {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<String> for MatchValue {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<Vec<String>> for MatchValue {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

/// Mapping from resource attribute name to the value(s) it must match.
pub type ResourceSpecification = BTreeMap<String, MatchValue>;

/// A trigger as produced by the automations API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomationTrigger {
    pub posture: Posture,
    /// Selects the resources the trigger watches.
    #[serde(rename = "match", default, deserialize_with = "null_as_default")]
    pub resource_match: ResourceSpecification,
    /// Further constrains related resources; empty means no constraint.
    #[serde(default, deserialize_with = "null_as_default")]
    pub match_related: ResourceSpecification,
    #[serde(default, deserialize_with = "null_as_default")]
    pub for_each: Vec<String>,
    /// Events that open the window of a proactive trigger.
    #[serde(default, deserialize_with = "null_as_default")]
    pub after: Vec<String>,
    /// Events a reactive trigger fires on, or a proactive trigger waits for.
    #[serde(default, deserialize_with = "null_as_default")]
    pub expect: Vec<String>,
    /// Window in seconds, only meaningful for [`Posture::Proactive`].
    #[serde(default)]
    pub within: u64,
    #[serde(default = "default_threshold")]
    pub threshold: u32,
}

fn default_threshold() -> u32 {
    1
}

/// An explicit `null` reads the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl AutomationTrigger {
    /// Create a builder for constructing an [`AutomationTrigger`].
    #[must_use]
    pub fn builder() -> AutomationTriggerBuilder {
        AutomationTriggerBuilder::default()
    }
}

/// Step-by-step builder for [`AutomationTrigger`].
///
/// No validation happens here: malformed triggers are rejected by the
/// [`resolver`] when they are described.
#[derive(Debug, Default)]
pub struct AutomationTriggerBuilder {
    posture: Option<Posture>,
    resource_match: ResourceSpecification,
    match_related: ResourceSpecification,
    for_each: Vec<String>,
    after: Vec<String>,
    expect: Vec<String>,
    within: u64,
    threshold: Option<u32>,
}

impl AutomationTriggerBuilder {
    #[must_use]
    pub fn posture(mut self, posture: Posture) -> Self {
        self.posture = Some(posture);
        self
    }

    #[must_use]
    pub fn resource_match(mut self, key: impl Into<String>, value: impl Into<MatchValue>) -> Self {
        self.resource_match.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn match_related(mut self, key: impl Into<String>, value: impl Into<MatchValue>) -> Self {
        self.match_related.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn for_each(mut self, key: impl Into<String>) -> Self {
        self.for_each.push(key.into());
        self
    }

    #[must_use]
    pub fn after(mut self, event: impl Into<String>) -> Self {
        self.after.push(event.into());
        self
    }

    #[must_use]
    pub fn expect(mut self, event: impl Into<String>) -> Self {
        self.expect.push(event.into());
        self
    }

    #[must_use]
    pub fn within(mut self, seconds: u64) -> Self {
        self.within = seconds;
        self
    }

    #[must_use]
    pub fn threshold(mut self, threshold: u32) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Consume the builder and return an [`AutomationTrigger`].
    ///
    /// Defaults to [`Posture::Reactive`] and a threshold of 1.
    #[must_use]
    pub fn build(self) -> AutomationTrigger {
        AutomationTrigger {
            posture: self.posture.unwrap_or(Posture::Reactive),
            resource_match: self.resource_match,
            match_related: self.match_related,
            for_each: self.for_each,
            after: self.after,
            expect: self.expect,
            within: self.within,
            threshold: self.threshold.unwrap_or_else(default_threshold),
        }
    }
}

/// A resource a trigger can watch and the dashboard can link to.
pub trait WatchedResource {
    /// The raw identifier used in qualified resource ids.
    fn uuid(&self) -> uuid::Uuid;

    /// Display name.
    fn name(&self) -> &str;

    /// Path of the resource's detail page.
    fn href(&self) -> String;
}
