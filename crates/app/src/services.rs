//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod concurrency_limit_service;
pub mod resource_service;
pub mod trigger_description_service;
