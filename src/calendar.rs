//! Calendar arithmetic over [`CalendarDate`].
//!
//! Day arithmetic goes through the epoch-day index; month arithmetic works in a flat
//! "absolute month" space and clamps the day to the destination month's length
//! (2024-01-31 plus one month is 2024-02-29). Results that would leave
//! `0000-01-01..=9999-12-31` are `None`.

use crate::consts::{CALENDAR_GRID_CELLS, DAYS_PER_WEEK, EPOCH_WEEKDAY_OFFSET, MONTHS_PER_YEAR};
use crate::prelude::*;
use crate::types::days_in_month;
use crate::{CalendarDate, ParseError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Day of the week, numbered from Sunday = 0 to Saturday = 6.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Weekday {
    #[default]
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Weekday {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(ParseError::InvalidWeekday(value))
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.index()
    }
}

impl CalendarDate {
    /// Moves by `days`, positive or negative.
    pub fn add_days(self, days: i64) -> Option<Self> {
        Self::from_epoch_day(self.to_epoch_day().checked_add(days)?)
    }

    /// Moves by `months`, clamping the day to the length of the destination month.
    pub fn add_months(self, months: i64) -> Option<Self> {
        let absolute = i64::from(self.year()) * MONTHS_PER_YEAR + i64::from(self.month()) - 1;
        let absolute = absolute.checked_add(months)?;

        let year = u16::try_from(absolute.div_euclid(MONTHS_PER_YEAR)).ok()?;
        let month = u8::try_from(absolute.rem_euclid(MONTHS_PER_YEAR) + 1).ok()?;
        let day = self.day().min(days_in_month(year, month));

        Self::new(year, month, day).ok()
    }

    /// Day of the week this date falls on.
    pub fn weekday(self) -> Weekday {
        let index = (self.to_epoch_day() + EPOCH_WEEKDAY_OFFSET).rem_euclid(DAYS_PER_WEEK);
        // rem_euclid keeps the index in 0..7
        Weekday::ALL[usize::try_from(index).unwrap_or_default()]
    }

    /// First day of the week containing this date.
    pub fn start_of_week(self, week_starts_on: Weekday) -> Option<Self> {
        let delta = (i64::from(self.weekday().index()) - i64::from(week_starts_on.index())
            + DAYS_PER_WEEK)
            % DAYS_PER_WEEK;
        self.add_days(-delta)
    }
}

/// `date` moved by `days`. `None` outside years 0 to 9999.
pub fn add_days(date: CalendarDate, days: i64) -> Option<CalendarDate> {
    date.add_days(days)
}

/// `date` moved by `months`, with the day clamped to the destination month.
pub fn add_months(date: CalendarDate, months: i64) -> Option<CalendarDate> {
    date.add_months(months)
}

/// First day of the week containing `date`.
pub fn start_of_week(date: CalendarDate, week_starts_on: Weekday) -> Option<CalendarDate> {
    date.start_of_week(week_starts_on)
}

/// First day of the month containing `date`.
pub const fn get_month_start(date: CalendarDate) -> CalendarDate {
    date.month_start()
}

/// Last day of the month containing `date`.
pub const fn get_month_end(date: CalendarDate) -> CalendarDate {
    date.month_end()
}

/// Chronological comparison, usable directly with `sort_by`.
pub fn compare_calendar_date(a: &CalendarDate, b: &CalendarDate) -> Ordering {
    a.cmp(b)
}

/// Six full weeks of consecutive dates covering `visible_month`.
///
/// The grid starts on the week start containing the first of the month, so every
/// month gets leading and trailing context. `None` only when the grid would run
/// past the representable range (the first or last weeks of years 0 and 9999).
pub fn get_calendar_grid(
    visible_month: CalendarDate,
    week_starts_on: Weekday,
) -> Option<Vec<CalendarDate>> {
    let start = visible_month.month_start().start_of_week(week_starts_on)?;
    (0..CALENDAR_GRID_CELLS as i64)
        .map(|offset| start.add_days(offset))
        .collect()
}
