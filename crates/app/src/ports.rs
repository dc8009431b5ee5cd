//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod concurrency_limit_repo;
pub mod work_pool_repo;
pub mod work_queue_repo;

pub use concurrency_limit_repo::ConcurrencyLimitRepository;
pub use work_pool_repo::WorkPoolRepository;
pub use work_queue_repo::WorkQueueRepository;
