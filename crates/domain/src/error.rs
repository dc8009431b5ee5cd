//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`FlowboardError`] via `#[from]`.

use crate::automation::ResourceKind;

/// Top-level error shared by the application and adapter layers.
#[derive(Debug, thiserror::Error)]
pub enum FlowboardError {
    /// The trigger supplied by the orchestration API is malformed.
    #[error("invalid trigger")]
    Trigger(#[from] TriggerError),

    /// A requested record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// A backing store failed.
    #[error("storage error")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// A trigger that violates the resolver's input contract.
///
/// Trigger data is expected to be well-formed by construction, so these
/// are never defaulted away.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TriggerError {
    /// The event list required by the trigger's posture is absent or empty.
    #[error("trigger has no `{field}` events")]
    MissingField { field: &'static str },

    /// The head event is not in the status table for the resource kind.
    #[error("unknown {kind} status event `{event}`")]
    UnknownEvent { kind: ResourceKind, event: String },
}

/// A lookup by identifier or name returned nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_missing_field_in_message() {
        let err = TriggerError::MissingField { field: "expect" };
        assert_eq!(err.to_string(), "trigger has no `expect` events");
    }

    #[test]
    fn should_name_kind_and_event_in_unknown_event_message() {
        let err = TriggerError::UnknownEvent {
            kind: ResourceKind::WorkPool,
            event: "prefect.work-pool.exploded".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown work pool status event `prefect.work-pool.exploded`"
        );
    }

    #[test]
    fn should_convert_trigger_error_into_flowboard_error() {
        let err: FlowboardError = TriggerError::MissingField { field: "after" }.into();
        assert!(matches!(
            err,
            FlowboardError::Trigger(TriggerError::MissingField { field: "after" })
        ));
    }

    #[test]
    fn should_format_not_found_error() {
        let err = NotFoundError {
            entity: "WorkPool",
            id: "default".to_string(),
        };
        assert_eq!(err.to_string(), "WorkPool not found: default");
    }
}
