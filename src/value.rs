//! Validated calendar date, wall-clock time and local date-time values.
//!
//! Every value in this module is constructed through a validating constructor or parser,
//! so holding one is proof that it satisfies the calendar bounds. The canonical text
//! forms are fixed-width and zero-padded (`YYYY-MM-DD`, `HH:mm`, `YYYY-MM-DDTHH:mm`),
//! which makes chronological order and text order the same thing.

use crate::consts::{
    DATE_SEPARATOR, DATE_TIME_SEPARATOR, LAST_MINUTE_OF_DAY, MINUTES_PER_HOUR, TIME_SEPARATOR,
};
use crate::prelude::*;
use crate::types::{self, Day, Hour, Minute, Month, Year};
use crate::ParseError;
use std::ops::Range;
use std::str::FromStr;

const MIN_EPOCH_DAY: i64 = types::days_from_civil(0, 1, 1);
const MAX_EPOCH_DAY: i64 = types::days_from_civil(9999, 12, 31);

/// A proleptic Gregorian date in `0000-01-01..=9999-12-31`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}-{month}-{day}")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

/// A wall-clock time with minute precision and no zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{hour}:{minute}")]
pub struct LocalTime {
    hour:   Hour,
    minute: Minute,
}

/// A [`CalendarDate`] and [`LocalTime`] joined by the `T` separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{date}T{time}")]
pub struct LocalDateTime {
    date: CalendarDate,
    time: LocalTime,
}

/// Raw numeric date parts, not yet validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateParts {
    pub year:  i32,
    pub month: u32,
    pub day:   u32,
}

/// Raw numeric time parts, not yet validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeParts {
    pub hour:   u32,
    pub minute: u32,
}

/// Reads a fixed-width run of ASCII digits. Signs, blanks and short runs are rejected.
fn fixed_digits(bytes: &[u8], range: Range<usize>) -> Option<u16> {
    let field = bytes.get(range)?;
    if field.is_empty() {
        return None;
    }
    field.iter().try_fold(0u16, |acc, &b| {
        if b.is_ascii_digit() {
            Some(acc * 10 + u16::from(b - b'0'))
        } else {
            None
        }
    })
}

/// Same as [`fixed_digits`] for two-digit fields.
fn fixed_digits_u8(bytes: &[u8], range: Range<usize>) -> Option<u8> {
    fixed_digits(bytes, range).and_then(|v| u8::try_from(v).ok())
}

fn separator_at(bytes: &[u8], index: usize, separator: char) -> bool {
    bytes.get(index).is_some_and(|&b| char::from(b) == separator)
}

impl CalendarDate {
    /// The Unix epoch day, 1970-01-01.
    pub const UNIX_EPOCH: Self = Self {
        year:  Year::UNIX_EPOCH,
        month: Month::JANUARY,
        day:   Day::FIRST,
    };

    /// Creates a date from numeric components.
    ///
    /// # Errors
    /// Returns the matching `ParseError` variant for the first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
            day:   Day::new(day, year, month)?,
        })
    }

    /// Validates raw parts; returns `None` when any part is out of bounds.
    pub fn from_parts(parts: DateParts) -> Option<Self> {
        let year = u16::try_from(parts.year).ok()?;
        let month = u8::try_from(parts.month).ok()?;
        let day = u8::try_from(parts.day).ok()?;
        Self::new(year, month, day).ok()
    }

    pub fn to_parts(self) -> DateParts {
        DateParts {
            year:  i32::from(self.year.get()),
            month: u32::from(self.month.get()),
            day:   u32::from(self.day.get()),
        }
    }

    #[inline]
    pub const fn year(self) -> u16 {
        self.year.get()
    }

    #[inline]
    pub const fn month(self) -> u8 {
        self.month.get()
    }

    #[inline]
    pub const fn day(self) -> u8 {
        self.day.get()
    }

    /// Signed number of days since 1970-01-01.
    pub const fn to_epoch_day(self) -> i64 {
        types::days_from_civil(
            self.year.get() as i64,
            self.month.get() as i64,
            self.day.get() as i64,
        )
    }

    /// Inverse of [`Self::to_epoch_day`]. `None` outside the representable year range.
    pub fn from_epoch_day(days: i64) -> Option<Self> {
        if !(MIN_EPOCH_DAY..=MAX_EPOCH_DAY).contains(&days) {
            return None;
        }
        let (y, m, d) = types::civil_from_days(days);
        Self::new(
            u16::try_from(y).ok()?,
            u8::try_from(m).ok()?,
            u8::try_from(d).ok()?,
        )
        .ok()
    }

    /// Number of days in this date's month.
    pub const fn days_in_month(self) -> u8 {
        types::days_in_month(self.year.get(), self.month.get())
    }

    /// First day of this date's month.
    pub const fn month_start(self) -> Self {
        Self {
            day: Day::FIRST,
            ..self
        }
    }

    /// Last day of this date's month.
    pub const fn month_end(self) -> Self {
        Self {
            day: Day::last_of_month(self.year, self.month),
            ..self
        }
    }

    /// True when both dates fall in the same year and month.
    pub fn same_month(self, other: Self) -> bool {
        self.year == other.year && self.month == other.month
    }

    /// Attaches a time of day.
    pub const fn at(self, time: LocalTime) -> LocalDateTime {
        LocalDateTime::new(self, time)
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let bytes = s.as_bytes();
        let invalid = || ParseError::InvalidFormat(s.to_owned());

        // YYYY-MM-DD, nothing more and nothing less
        if bytes.len() != 10
            || !separator_at(bytes, 4, DATE_SEPARATOR)
            || !separator_at(bytes, 7, DATE_SEPARATOR)
        {
            return Err(invalid());
        }
        let year = fixed_digits(bytes, 0..4).ok_or_else(invalid)?;
        let month = fixed_digits_u8(bytes, 5..7).ok_or_else(invalid)?;
        let day = fixed_digits_u8(bytes, 8..10).ok_or_else(invalid)?;

        Self::new(year, month, day)
    }
}

impl LocalTime {
    pub const MIDNIGHT: Self = Self {
        hour:   Hour::MIN,
        minute: Minute::MIN,
    };
    /// 23:59, the latest representable time of day.
    pub const LAST_MINUTE: Self = Self {
        hour:   Hour::MAX,
        minute: Minute::MAX,
    };

    /// # Errors
    /// Returns `ParseError::InvalidHour` or `ParseError::InvalidMinute` for out-of-range parts.
    pub fn new(hour: u8, minute: u8) -> Result<Self, ParseError> {
        Ok(Self {
            hour:   Hour::new(hour)?,
            minute: Minute::new(minute)?,
        })
    }

    /// Validates raw parts; returns `None` when any part is out of bounds.
    pub fn from_parts(parts: TimeParts) -> Option<Self> {
        let hour = u8::try_from(parts.hour).ok()?;
        let minute = u8::try_from(parts.minute).ok()?;
        Self::new(hour, minute).ok()
    }

    pub fn to_parts(self) -> TimeParts {
        TimeParts {
            hour:   u32::from(self.hour.get()),
            minute: u32::from(self.minute.get()),
        }
    }

    #[inline]
    pub const fn hour(self) -> u8 {
        self.hour.get()
    }

    #[inline]
    pub const fn minute(self) -> u8 {
        self.minute.get()
    }

    /// Minutes elapsed since 00:00, in `0..=1439`.
    pub const fn minutes_since_midnight(self) -> u32 {
        self.hour.get() as u32 * MINUTES_PER_HOUR + self.minute.get() as u32
    }

    /// Builds a time from minutes since midnight, clamped into `00:00..=23:59`.
    /// Values never wrap past midnight.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_minutes_clamped(minutes: i64) -> Self {
        let last = LAST_MINUTE_OF_DAY as i64;
        let clamped = if minutes < 0 {
            0
        } else if minutes > last {
            last
        } else {
            minutes
        };
        // clamped is in 0..=1439, so both quotient and remainder fit in u8
        let per_hour = MINUTES_PER_HOUR as i64;
        Self {
            hour:   Hour::saturating((clamped / per_hour) as u8),
            minute: Minute::saturating((clamped % per_hour) as u8),
        }
    }
}

impl FromStr for LocalTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let bytes = s.as_bytes();
        let invalid = || ParseError::InvalidFormat(s.to_owned());

        // HH:mm
        if bytes.len() != 5 || !separator_at(bytes, 2, TIME_SEPARATOR) {
            return Err(invalid());
        }
        let hour = fixed_digits_u8(bytes, 0..2).ok_or_else(invalid)?;
        let minute = fixed_digits_u8(bytes, 3..5).ok_or_else(invalid)?;

        Self::new(hour, minute)
    }
}

impl LocalDateTime {
    pub const fn new(date: CalendarDate, time: LocalTime) -> Self {
        Self { date, time }
    }

    #[inline]
    pub const fn date(self) -> CalendarDate {
        self.date
    }

    #[inline]
    pub const fn time(self) -> LocalTime {
        self.time
    }

    /// Splits into the date and time halves.
    pub const fn split(self) -> (CalendarDate, LocalTime) {
        (self.date, self.time)
    }

    /// Same date with a different time of day.
    pub const fn with_time(self, time: LocalTime) -> Self {
        Self::new(self.date, time)
    }
}

impl From<(CalendarDate, LocalTime)> for LocalDateTime {
    fn from((date, time): (CalendarDate, LocalTime)) -> Self {
        Self::new(date, time)
    }
}

impl From<LocalDateTime> for (CalendarDate, LocalTime) {
    fn from(value: LocalDateTime) -> Self {
        value.split()
    }
}

impl FromStr for LocalDateTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let bytes = s.as_bytes();

        // YYYY-MM-DDTHH:mm; the ASCII separator at 10 guarantees valid slice boundaries
        if bytes.len() != 16 || !separator_at(bytes, 10, DATE_TIME_SEPARATOR) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        let date = s[..10].parse::<CalendarDate>()?;
        let time = s[11..].parse::<LocalTime>()?;

        Ok(Self::new(date, time))
    }
}

macro_rules! string_serde {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl serde::Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    serializer.serialize_str(&self.to_string())
                }
            }

            impl<'de> serde::Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: serde::Deserializer<'de>,
                {
                    let s = String::deserialize(deserializer)?;
                    s.parse().map_err(serde::de::Error::custom)
                }
            }
        )+
    };
}

string_serde!(CalendarDate, LocalTime, LocalDateTime);

/// Parses a strict `YYYY-MM-DD` date. Returns `None` for any deviation.
pub fn parse_calendar_date(input: &str) -> Option<CalendarDate> {
    input.parse().ok()
}

/// Formats raw parts into a date, or `None` when the parts are out of bounds.
pub fn format_calendar_date(parts: DateParts) -> Option<CalendarDate> {
    CalendarDate::from_parts(parts)
}

/// Parses a strict `HH:mm` time. Returns `None` for any deviation.
pub fn parse_local_time(input: &str) -> Option<LocalTime> {
    input.parse().ok()
}

/// Formats raw parts into a time, or `None` when the parts are out of bounds.
pub fn format_local_time(parts: TimeParts) -> Option<LocalTime> {
    LocalTime::from_parts(parts)
}

/// Parses a strict `YYYY-MM-DDTHH:mm` date-time. Returns `None` for any deviation.
pub fn parse_local_date_time(input: &str) -> Option<LocalDateTime> {
    input.parse().ok()
}

/// Joins a date and a time into the canonical `YYYY-MM-DDTHH:mm` value.
pub const fn format_local_date_time(date: CalendarDate, time: LocalTime) -> LocalDateTime {
    LocalDateTime::new(date, time)
}

pub const fn split_local_date_time(value: LocalDateTime) -> (CalendarDate, LocalTime) {
    value.split()
}

pub const fn combine_local_date_time(date: CalendarDate, time: LocalTime) -> LocalDateTime {
    LocalDateTime::new(date, time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, date_time, time};

    #[test]
    fn test_parse_calendar_date() {
        let d = parse_calendar_date("2024-02-29").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2024, 2, 29));
        assert_eq!(d.to_string(), "2024-02-29");

        let zero = parse_calendar_date("0000-01-01").unwrap();
        assert_eq!(zero.year(), 0);
    }

    #[test]
    fn test_parse_calendar_date_rejects_deviations() {
        struct TestCase {
            input:       &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input:       "2024-1-01",
                description: "unpadded month",
            },
            TestCase {
                input:       "24-01-01",
                description: "short year",
            },
            TestCase {
                input:       "2024/01/01",
                description: "wrong separators",
            },
            TestCase {
                input:       "2024-13-01",
                description: "month out of range",
            },
            TestCase {
                input:       "2023-02-29",
                description: "not a leap year",
            },
            TestCase {
                input:       "1900-02-29",
                description: "century not divisible by 400",
            },
            TestCase {
                input:       "2024-04-31",
                description: "30-day month",
            },
            TestCase {
                input:       "2024-01-00",
                description: "day zero",
            },
            TestCase {
                input:       " 2024-01-01",
                description: "leading blank",
            },
            TestCase {
                input:       "+024-01-01",
                description: "sign in year",
            },
            TestCase {
                input:       "2024-01-01T",
                description: "trailing text",
            },
            TestCase {
                input:       "2024-0é-01",
                description: "non-ascii",
            },
            TestCase {
                input:       "",
                description: "empty",
            },
        ];

        for case in &cases {
            assert!(
                parse_calendar_date(case.input).is_none(),
                "Expected rejection for {:?} ({})",
                case.input,
                case.description
            );
        }
    }

    #[test]
    fn test_parse_errors_are_specific() {
        assert!(matches!(
            "2024-13-01".parse::<CalendarDate>(),
            Err(ParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            "2023-02-29".parse::<CalendarDate>(),
            Err(ParseError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            })
        ));
        assert!(matches!(
            "2024-1-01".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!("".parse::<LocalTime>(), Err(ParseError::EmptyInput)));
        assert!(matches!(
            "24:00".parse::<LocalTime>(),
            Err(ParseError::InvalidHour(24))
        ));
        assert!(matches!(
            "2024-01-01T10:60".parse::<LocalDateTime>(),
            Err(ParseError::InvalidMinute(60))
        ));
    }

    #[test]
    fn test_format_calendar_date_round_trips() {
        for (year, month, day) in [(2024, 2, 29), (0, 1, 1), (9999, 12, 31), (1970, 7, 4)] {
            let formatted = format_calendar_date(DateParts { year, month, day }).unwrap();
            assert_eq!(parse_calendar_date(&formatted.to_string()), Some(formatted));
            assert_eq!(formatted.to_parts(), DateParts { year, month, day });
        }
    }

    #[test]
    fn test_format_calendar_date_rejects_invalid_parts() {
        for (year, month, day) in [
            (2023, 2, 29),
            (-1, 1, 1),
            (10000, 1, 1),
            (2024, 0, 1),
            (2024, 13, 1),
            (2024, 6, 31),
            (2024, 1, 0),
            (2024, 1, 300),
        ] {
            assert!(
                format_calendar_date(DateParts { year, month, day }).is_none(),
                "{year}-{month}-{day} should be rejected"
            );
        }
    }

    #[test]
    fn test_local_time_parse_and_format() {
        assert_eq!(parse_local_time("08:05").unwrap().to_string(), "08:05");
        assert_eq!(parse_local_time("23:59").unwrap().minutes_since_midnight(), 1439);
        assert!(parse_local_time("8:05").is_none());
        assert!(parse_local_time("08:5").is_none());
        assert!(parse_local_time("08-05").is_none());
        assert!(parse_local_time("08:05:00").is_none());

        assert_eq!(
            format_local_time(TimeParts { hour: 7, minute: 3 }).unwrap().to_string(),
            "07:03"
        );
        assert!(format_local_time(TimeParts { hour: 24, minute: 0 }).is_none());
        assert!(format_local_time(TimeParts { hour: 0, minute: 60 }).is_none());
    }

    #[test]
    fn test_from_minutes_clamped() {
        assert_eq!(LocalTime::from_minutes_clamped(-30), LocalTime::MIDNIGHT);
        assert_eq!(LocalTime::from_minutes_clamped(615), time("10:15"));
        assert_eq!(LocalTime::from_minutes_clamped(1440), time("23:59"));
        assert_eq!(LocalTime::from_minutes_clamped(5000), time("23:59"));
    }

    #[test]
    fn test_local_date_time_split_and_combine() {
        let value = parse_local_date_time("2024-01-15T08:30").unwrap();
        let (d, t) = split_local_date_time(value);
        assert_eq!(d, date("2024-01-15"));
        assert_eq!(t, time("08:30"));
        assert_eq!(combine_local_date_time(d, t), value);
        assert_eq!(value.to_string(), "2024-01-15T08:30");
        assert_eq!(value.with_time(time("23:59")), date_time("2024-01-15T23:59"));

        assert!(parse_local_date_time("2024-05-12 08:45").is_none());
        assert!(parse_local_date_time("2024-02-30T08:45").is_none());
        assert!(parse_local_date_time("2024-05-12T8:45").is_none());
        assert!(parse_local_date_time("2024-05-12T08:45Z").is_none());
    }

    #[test]
    fn test_ordering_matches_canonical_text() {
        let mut values = vec![
            date_time("2024-01-10T10:00"),
            date_time("2023-12-31T23:59"),
            date_time("2024-01-10T09:59"),
            date_time("0999-06-01T00:00"),
        ];
        let mut texts: Vec<String> = values.iter().map(ToString::to_string).collect();
        values.sort();
        texts.sort();
        let sorted: Vec<String> = values.iter().map(ToString::to_string).collect();
        assert_eq!(sorted, texts);
    }

    #[test]
    fn test_epoch_day() {
        assert_eq!(CalendarDate::UNIX_EPOCH.to_string(), "1970-01-01");
        assert_eq!(CalendarDate::UNIX_EPOCH.to_epoch_day(), 0);
        assert_eq!(date("2024-03-01").to_epoch_day(), 19_783);
        assert_eq!(CalendarDate::from_epoch_day(19_783), Some(date("2024-03-01")));
        assert_eq!(CalendarDate::from_epoch_day(-719_529), None);
        assert_eq!(CalendarDate::from_epoch_day(2_932_897), None);
    }

    #[test]
    fn test_serde_string_format() {
        let value = date_time("2024-01-15T08:30");
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#""2024-01-15T08:30""#);
        let parsed: LocalDateTime = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, value);

        assert!(serde_json::from_str::<CalendarDate>(r#""2024-02-30""#).is_err());
        assert!(serde_json::from_str::<LocalTime>(r#""7:00""#).is_err());
    }
}
