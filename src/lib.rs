//! Headless calendar and date-time picker core.
//!
//! The crate models calendar dates, wall-clock times and local date-times as validated
//! values, provides calendar arithmetic over them, evaluates min/max and predicate
//! constraints, and drives a picker state machine that a rendering layer binds to
//! through plain prop bundles.
//!
//! ```
//! use datetime_picker_core::{DateTimePicker, PickerOptions};
//!
//! let picker = DateTimePicker::new(
//!     PickerOptions::new().default_value("2024-01-15T08:30".parse().ok()),
//! );
//! picker.set_date("2024-01-20".parse().ok());
//! assert_eq!(
//!     picker.state().value.map(|v| v.to_string()).as_deref(),
//!     Some("2024-01-20T08:30")
//! );
//! ```

mod calendar;
mod constraints;
mod consts;
mod formatter;
mod picker;
mod prelude;
mod time_options;
mod types;
mod value;

#[cfg(test)]
mod test_utils;

pub use calendar::{
    Weekday, add_days, add_months, compare_calendar_date, get_calendar_grid, get_month_end,
    get_month_start, start_of_week,
};
pub use constraints::{
    Constraints, DateConstraints, DateTimeConstraints, LayerConstraints, Predicate,
    TimeConstraints, clamp_date_time_to_constraints, clamp_date_to_constraints,
    clamp_time_to_constraints, is_selectable_date, is_selectable_date_time, is_selectable_time,
    is_within_min_max_date, is_within_min_max_date_time, is_within_min_max_time,
};
pub use consts::*;
pub use formatter::{DateTimeFormatter, DefaultFormatter};
pub use picker::{
    ButtonProps, CalendarCell, ChangeCallback, DateTimeMeta, DateTimePicker, DayMeta, DayProps,
    FocusMoveDirection, InputProps, PickerOptions, PickerSnapshot, TimeMeta, TimeOptionProps,
};
pub use time_options::{RoundingMode, StepError, TimeOptions, get_time_options, round_time_to_step};
pub use types::{Day, Hour, Minute, Month, Year, days_in_month, is_leap_year};
pub use value::{
    CalendarDate, DateParts, LocalDateTime, LocalTime, TimeParts, combine_local_date_time,
    format_calendar_date, format_local_date_time, format_local_time, parse_calendar_date,
    parse_local_date_time, parse_local_time, split_local_date_time,
};

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Invalid hour: {} (must be 0-{})", "_0", MAX_HOUR)]
    InvalidHour(u8),
    #[display(fmt = "Invalid minute: {} (must be 0-{})", "_0", MAX_MINUTE)]
    InvalidMinute(u8),
    #[display(fmt = "Invalid weekday: {_0} (must be 0-6)")]
    InvalidWeekday(u8),
    #[display(fmt = "Empty input string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_messages() {
        struct TestCase {
            error:    ParseError,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                error:    ParseError::InvalidFormat("2024/01/01".to_string()),
                expected: "Invalid format: 2024/01/01",
            },
            TestCase {
                error:    ParseError::InvalidYear(10000),
                expected: "Invalid year: 10000 (must be 0-9999)",
            },
            TestCase {
                error:    ParseError::InvalidMonth(13),
                expected: "Invalid month: 13 (must be 1-12)",
            },
            TestCase {
                error:    ParseError::InvalidDay {
                    year:  2023,
                    month: 2,
                    day:   29,
                },
                expected: "Invalid day 29 for month 2023-02",
            },
            TestCase {
                error:    ParseError::InvalidHour(24),
                expected: "Invalid hour: 24 (must be 0-23)",
            },
            TestCase {
                error:    ParseError::InvalidMinute(60),
                expected: "Invalid minute: 60 (must be 0-59)",
            },
            TestCase {
                error:    ParseError::InvalidWeekday(7),
                expected: "Invalid weekday: 7 (must be 0-6)",
            },
            TestCase {
                error:    ParseError::EmptyInput,
                expected: "Empty input string",
            },
        ];

        for case in cases {
            assert_eq!(case.error.to_string(), case.expected);
        }
    }

    #[test]
    fn test_parse_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ParseError::EmptyInput);
        assert_eq!(err.to_string(), "Empty input string");
    }

    #[test]
    fn test_errors_surface_through_from_str() {
        assert_eq!(
            "2024-02-30".parse::<CalendarDate>(),
            Err(ParseError::InvalidDay {
                year:  2024,
                month: 2,
                day:   30,
            })
        );
        assert_eq!("".parse::<LocalDateTime>(), Err(ParseError::EmptyInput));
        assert_eq!(
            "2024-01-01 10:00".parse::<LocalDateTime>(),
            Err(ParseError::InvalidFormat("2024-01-01 10:00".to_string()))
        );
    }
}
