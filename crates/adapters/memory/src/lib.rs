//! # flowboard-adapter-memory
//!
//! In-memory persistence adapter.
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `flowboard-app::ports`
//! - Load work queues, work pools and concurrency limits from a JSON fixture
//! - Share the loaded records cheaply between services (`Arc`-backed, `Clone`)
//!
//! ## Dependency rule
//! Depends on `flowboard-app` (for port traits) and `flowboard-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod fixtures;
pub mod repos;

pub use error::FixtureError;
pub use fixtures::Fixtures;
pub use repos::{
    InMemoryConcurrencyLimitRepository, InMemoryWorkPoolRepository, InMemoryWorkQueueRepository,
};
