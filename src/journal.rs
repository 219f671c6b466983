//! Care journal entries and the time/id helpers they depend on.

use chrono::{DateTime, Local};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::LOG_ID_LEN;

/// A single human-readable entry in the care journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Opaque unique identifier, used by list renderers as a stable key.
    pub id: String,
    pub text: String,
    /// Local wall-clock time the entry was written, `MM/DD HH:MM`.
    pub timestamp: String,
}

impl LogEntry {
    /// Create an entry stamped with the current local time.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            text: text.into(),
            timestamp: format_time(Local::now()),
        }
    }
}

/// Current wall-clock time in epoch milliseconds.
#[must_use]
pub fn now_ms() -> i64 {
    Local::now().timestamp_millis()
}

pub(crate) fn format_time(at: DateTime<Local>) -> String {
    at.format("%m/%d %H:%M").to_string()
}

pub(crate) fn generate_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(LOG_ID_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_time_zero_pads() {
        let at = Local.with_ymd_and_hms(2026, 3, 7, 9, 5, 0).unwrap();
        assert_eq!(format_time(at), "03/07 09:05");
    }

    #[test]
    fn ids_are_fixed_length_and_distinct() {
        let a = generate_id();
        let b = generate_id();
        assert_eq!(a.chars().count(), LOG_ID_LEN);
        assert_ne!(a, b);
    }

    #[test]
    fn entry_carries_text_verbatim() {
        let entry = LogEntry::new("ごはん：もぐもぐ…おいしい！");
        assert_eq!(entry.text, "ごはん：もぐもぐ…おいしい！");
        assert!(!entry.id.is_empty());
        assert!(!entry.timestamp.is_empty());
    }
}
