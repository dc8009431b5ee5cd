//! Fixture-loading error type.
//!
//! Fixtures are read once at startup, so these errors never reach the
//! repositories: once loaded, the in-memory repositories cannot fail.

/// Errors raised while loading the fixture file.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// The fixture file could not be read.
    #[error("failed to read fixture file")]
    Io(#[from] std::io::Error),

    /// The fixture file is not valid fixture JSON.
    #[error("failed to parse fixture file")]
    Json(#[from] serde_json::Error),
}
