//! # flowboard-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `WorkQueueRepository` — look up work queues
//!   - `WorkPoolRepository` — look up work pools
//!   - `ConcurrencyLimitRepository` — list global concurrency limits
//! - Define **driving/inbound ports** as use-case structs:
//!   - `TriggerDescriptionService` — resolve a trigger and describe it with
//!     the resources it watches
//!   - `ResourceService` — list and look up work queues and pools
//!   - `ConcurrencyLimitService` — list limits and build their table
//! - Orchestrate domain objects without knowing *how* resources are fetched
//!
//! ## Dependency rule
//! Depends on `flowboard-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
