//! Display helpers for durations and counted nouns.

const UNITS: [(&str, u64); 4] = [("day", 86_400), ("hour", 3_600), ("minute", 60), ("second", 1)];

/// Convert a number of seconds into a human-readable duration.
///
/// Non-zero components are listed from largest to smallest unit, each
/// pluralised: `1800` → `"30 minutes"`, `3661` → `"1 hour 1 minute 1 second"`.
#[must_use]
pub fn seconds_to_string(seconds: u64) -> String {
    if seconds == 0 {
        return count_phrase("second", 0);
    }

    let mut remaining = seconds;
    let mut parts = Vec::new();
    for (unit, size) in UNITS {
        let amount = remaining / size;
        remaining %= size;
        if amount > 0 {
            parts.push(count_phrase(unit, amount));
        }
    }
    parts.join(" ")
}

/// Pluralise `noun` for `count`.
#[must_use]
pub fn to_plural_string(noun: &str, count: u64) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}

/// `"{count} {noun}"` with the noun pluralised, e.g. `"3 work queues"`.
#[must_use]
pub fn count_phrase(noun: &str, count: u64) -> String {
    format!("{count} {}", to_plural_string(noun, count))
}
