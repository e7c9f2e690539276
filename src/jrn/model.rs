use chrono::{Local, NaiveDateTime, Timelike};
use std::fmt;

/// Format used for the `timestamp` column (two-digit year).
pub const STORAGE_TIMESTAMP_FORMAT: &str = "%m-%d-%y %H:%M:%S";

/// Format used when rendering a note to the user (four-digit year).
pub const DISPLAY_TIMESTAMP_FORMAT: &str = "%m-%d-%Y %H:%M:%S";

pub const DEFAULT_CATEGORY: &str = "General";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: i64,
    pub category: String,
    pub content: String,
    // Creation time, second precision. Stays fixed for the lifetime of the
    // note, including across edits.
    pub timestamp: NaiveDateTime,
}

impl Note {
    /// Creates a new note stamped with the current local time.
    pub fn new(id: i64, category: String, content: String) -> Self {
        let now = Local::now().naive_local();
        let timestamp = now.with_nanosecond(0).unwrap_or(now);
        Self {
            id,
            category,
            content,
            timestamp,
        }
    }

    pub fn timestamp_string(&self) -> String {
        self.timestamp.format(STORAGE_TIMESTAMP_FORMAT).to_string()
    }

    pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
        NaiveDateTime::parse_from_str(s, STORAGE_TIMESTAMP_FORMAT)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] [{}] [{}] - {}",
            self.id,
            self.timestamp.format(DISPLAY_TIMESTAMP_FORMAT),
            self.category,
            self.content
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_round_trips_through_storage_format() {
        let note = Note::new(0, DEFAULT_CATEGORY.to_string(), "hello".to_string());
        let parsed = Note::parse_timestamp(&note.timestamp_string()).unwrap();
        assert_eq!(parsed, note.timestamp);
    }

    #[test]
    fn display_uses_four_digit_year() {
        let timestamp = Note::parse_timestamp("01-02-24 03:04:05").unwrap();
        let note = Note {
            id: 7,
            category: "Work".to_string(),
            content: "standup notes".to_string(),
            timestamp,
        };
        assert_eq!(
            note.to_string(),
            "[7] [01-02-2024 03:04:05] [Work] - standup notes"
        );
    }
}
