//! # flowboard-domain
//!
//! Pure domain model for the flowboard orchestration dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Automation triggers** (declarative match / posture / expect rules)
//! - Resolve a trigger into a **resource status** and a human-readable sentence
//! - Define **Work queues** and **Work pools** (the resources triggers watch)
//! - Define **Global concurrency limits** and the columns used to display them
//! - Humanize durations and counts for display
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod automation;
pub mod concurrency_limit;
pub mod href;
pub mod humanize;
pub mod work_pool;
pub mod work_queue;
