//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for the `created` / `updated` fields of API records.
pub type Timestamp = DateTime<Utc>;
