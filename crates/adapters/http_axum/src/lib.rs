//! # flowboard-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for programmatic access
//!   (`/api/triggers/{kind}/describe`, `/api/concurrency-limits`, …)
//! - Serve **server-side-rendered HTML pages**: the concurrency limits table
//!   and the work pool / work queue pages that trigger sentences link to
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses (JSON or HTML)
//!
//! ## Dependency rule
//! Depends on `flowboard-app` (for port traits and services) and `flowboard-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
