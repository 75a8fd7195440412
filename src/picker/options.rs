use std::fmt;

use super::slot::{ChangeCallback, Getter};
use crate::calendar::Weekday;
use crate::constraints::Constraints;
use crate::formatter::{DateTimeFormatter, DefaultFormatter};
use crate::{CalendarDate, LocalDateTime, LocalTime};

pub(crate) struct SlotOptions<T> {
    pub(crate) controlled: Option<Getter<T>>,
    pub(crate) on_change:  Option<ChangeCallback<T>>,
}

impl<T> Default for SlotOptions<T> {
    fn default() -> Self {
        Self {
            controlled: None,
            on_change:  None,
        }
    }
}

impl<T> fmt::Debug for SlotOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotOptions")
            .field("controlled", &self.controlled.is_some())
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

/// Construction options for [`DateTimePicker`](super::DateTimePicker).
///
/// The value, time and visible month are each independent slots. Supplying `value`,
/// `time` or `visible_month` (or their `_source` variants) hands that slot to the caller:
/// the picker reads it back on every access and only proposes changes through the
/// matching `on_*_change` callback. Passing `None` to `value` or `time` still makes the
/// slot controlled. Otherwise the `default_*` seed initializes a picker-owned cell.
pub struct PickerOptions {
    pub(crate) value:                 SlotOptions<Option<LocalDateTime>>,
    pub(crate) default_value:         Option<LocalDateTime>,
    pub(crate) time:                  SlotOptions<Option<LocalTime>>,
    pub(crate) default_time:          Option<LocalTime>,
    pub(crate) visible_month:         SlotOptions<CalendarDate>,
    pub(crate) default_visible_month: Option<CalendarDate>,
    pub(crate) week_starts_on:        Weekday,
    pub(crate) now_date:              Option<CalendarDate>,
    pub(crate) formatter:             Box<dyn DateTimeFormatter>,
    pub(crate) constraints:           Constraints,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            value:                 SlotOptions::default(),
            default_value:         None,
            time:                  SlotOptions::default(),
            default_time:          None,
            visible_month:         SlotOptions::default(),
            default_visible_month: None,
            week_starts_on:        Weekday::Sunday,
            now_date:              None,
            formatter:             Box::new(DefaultFormatter),
            constraints:           Constraints::new(),
        }
    }
}

impl PickerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Controls the value with a fixed snapshot.
    #[must_use]
    pub fn value(self, value: Option<LocalDateTime>) -> Self {
        self.value_source(move || value)
    }

    /// Controls the value with a getter that is read on every access.
    #[must_use]
    pub fn value_source<F>(mut self, source: F) -> Self
    where
        F: Fn() -> Option<LocalDateTime> + 'static,
    {
        self.value.controlled = Some(Box::new(source));
        self
    }

    #[must_use]
    pub const fn default_value(mut self, value: Option<LocalDateTime>) -> Self {
        self.default_value = value;
        self
    }

    #[must_use]
    pub fn on_value_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(Option<LocalDateTime>) + 'static,
    {
        self.value.on_change = Some(Box::new(callback));
        self
    }

    /// Controls the standalone time with a fixed snapshot.
    #[must_use]
    pub fn time(self, time: Option<LocalTime>) -> Self {
        self.time_source(move || time)
    }

    #[must_use]
    pub fn time_source<F>(mut self, source: F) -> Self
    where
        F: Fn() -> Option<LocalTime> + 'static,
    {
        self.time.controlled = Some(Box::new(source));
        self
    }

    #[must_use]
    pub const fn default_time(mut self, time: Option<LocalTime>) -> Self {
        self.default_time = time;
        self
    }

    #[must_use]
    pub fn on_time_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(Option<LocalTime>) + 'static,
    {
        self.time.on_change = Some(Box::new(callback));
        self
    }

    /// Controls the visible month with a fixed snapshot.
    #[must_use]
    pub fn visible_month(self, month: CalendarDate) -> Self {
        self.visible_month_source(move || month)
    }

    #[must_use]
    pub fn visible_month_source<F>(mut self, source: F) -> Self
    where
        F: Fn() -> CalendarDate + 'static,
    {
        self.visible_month.controlled = Some(Box::new(source));
        self
    }

    #[must_use]
    pub const fn default_visible_month(mut self, month: CalendarDate) -> Self {
        self.default_visible_month = Some(month);
        self
    }

    #[must_use]
    pub fn on_visible_month_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(CalendarDate) + 'static,
    {
        self.visible_month.on_change = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub const fn week_starts_on(mut self, weekday: Weekday) -> Self {
        self.week_starts_on = weekday;
        self
    }

    /// The date reported as "today". Never read from the system clock.
    #[must_use]
    pub const fn now_date(mut self, date: CalendarDate) -> Self {
        self.now_date = Some(date);
        self
    }

    #[must_use]
    pub fn formatter<F>(mut self, formatter: F) -> Self
    where
        F: DateTimeFormatter + 'static,
    {
        self.formatter = Box::new(formatter);
        self
    }

    #[must_use]
    pub fn constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }
}

impl fmt::Debug for PickerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerOptions")
            .field("value", &self.value)
            .field("default_value", &self.default_value)
            .field("time", &self.time)
            .field("default_time", &self.default_time)
            .field("visible_month", &self.visible_month)
            .field("default_visible_month", &self.default_visible_month)
            .field("week_starts_on", &self.week_starts_on)
            .field("now_date", &self.now_date)
            .field("constraints", &self.constraints)
            .finish_non_exhaustive()
    }
}
