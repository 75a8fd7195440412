//! Parse-or-panic helpers for tests.

use crate::{CalendarDate, LocalDateTime, LocalTime};

pub fn date(s: &str) -> CalendarDate {
    s.parse()
        .unwrap_or_else(|e| panic!("bad test date {s:?}: {e}"))
}

pub fn time(s: &str) -> LocalTime {
    s.parse()
        .unwrap_or_else(|e| panic!("bad test time {s:?}: {e}"))
}

pub fn date_time(s: &str) -> LocalDateTime {
    s.parse()
        .unwrap_or_else(|e| panic!("bad test date-time {s:?}: {e}"))
}
