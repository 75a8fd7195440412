use crate::calendar::Weekday;
use crate::{CalendarDate, LocalDateTime, LocalTime};

const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Text conversion and labels used by the picker's inputs and headers.
///
/// Every method has a locale-free default: values format to their canonical text,
/// parsing is strict, the month label is `YYYY-MM` and weekday labels are English
/// three-letter abbreviations. Implementors override what they need. Parse methods
/// return `None` for text they do not accept and must not panic.
pub trait DateTimeFormatter {
    fn format_date(&self, date: CalendarDate) -> String {
        date.to_string()
    }

    fn parse_date(&self, input: &str) -> Option<CalendarDate> {
        input.parse().ok()
    }

    fn format_time(&self, time: LocalTime) -> String {
        time.to_string()
    }

    fn parse_time(&self, input: &str) -> Option<LocalTime> {
        input.parse().ok()
    }

    fn format_date_time(&self, value: LocalDateTime) -> String {
        value.to_string()
    }

    fn parse_date_time(&self, input: &str) -> Option<LocalDateTime> {
        input.parse().ok()
    }

    /// Header text for the month being displayed.
    fn month_label(&self, visible_month: CalendarDate) -> String {
        format!("{:04}-{:02}", visible_month.year(), visible_month.month())
    }

    /// Seven column labels, the first one for `week_starts_on`.
    fn weekday_labels(&self, week_starts_on: Weekday) -> Vec<String> {
        let start = usize::from(week_starts_on.index());
        WEEKDAY_ABBREVIATIONS
            .iter()
            .cycle()
            .skip(start)
            .take(WEEKDAY_ABBREVIATIONS.len())
            .map(|label| (*label).to_string())
            .collect()
    }
}

/// Canonical text, strict parsing, `YYYY-MM` month labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DefaultFormatter;

impl DateTimeFormatter for DefaultFormatter {}
