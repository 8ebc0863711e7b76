//! Date Pipes
//!
//! Formatting between the backend's RFC 3339 timestamps, the browser's
//! datetime-local inputs, and the human-readable list display.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

use crate::forms::parse_input_datetime;

/// List/detail display, e.g. "21 Dec 2022 19:56". Unparsable input is shown
/// as-is rather than dropped.
pub fn pipe_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%d %b %Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Prefill value for a datetime-local input ("%Y-%m-%dT%H:%M")
pub fn pipe_date_to_input_datetime(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%Y-%m-%dT%H:%M").to_string(),
        Err(_) => String::new(),
    }
}

/// Submission format: the backend expects the deadline as UTC RFC 3339.
/// The form value is treated as already-UTC wall clock time, matching how
/// the list renders it back.
pub fn input_datetime_to_utc(value: &str) -> Option<String> {
    let naive: NaiveDateTime = parse_input_datetime(value)?;
    let utc: DateTime<Utc> = DateTime::from_naive_utc_and_offset(naive, Utc);
    Some(utc.to_rfc3339_opts(SecondsFormat::Secs, true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipe_date_formats_for_display() {
        assert_eq!(pipe_date("2022-12-21T19:56:00Z"), "21 Dec 2022 19:56");
    }

    #[test]
    fn pipe_date_passes_garbage_through() {
        assert_eq!(pipe_date("soon"), "soon");
    }

    #[test]
    fn input_prefill_round_trips_backend_timestamp() {
        assert_eq!(
            pipe_date_to_input_datetime("2022-12-21T19:56:00Z"),
            "2022-12-21T19:56"
        );
        assert_eq!(pipe_date_to_input_datetime("garbage"), "");
    }

    #[test]
    fn submission_format_is_utc_rfc3339() {
        assert_eq!(
            input_datetime_to_utc("2022-12-21T19:56").as_deref(),
            Some("2022-12-21T19:56:00Z")
        );
        assert!(input_datetime_to_utc("nope").is_none());
    }
}
