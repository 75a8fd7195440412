//! Stateful picker built on the value, calendar and constraint layers.
//!
//! A picker tracks three slots (value, standalone time, visible month), the focused
//! day and one text draft per input. Every slot can be owned by the picker or by the
//! embedding application; see [`PickerOptions`]. Reads always go back to the owning
//! source and re-run the constraints, so an out-of-policy controlled value reads as
//! clamped or absent rather than being trusted verbatim.
//!
//! Setters clamp their candidate and drop it when the clamped result is still not
//! selectable. A dropped mutation is not an error: nothing is written and no callback
//! fires.

mod focus;
mod options;
mod props;
mod slot;
mod state;

use std::cell::{Cell, RefCell};
use std::fmt;

use tracing::debug;

pub use focus::FocusMoveDirection;
pub use options::PickerOptions;
pub use props::{ButtonProps, DayProps, InputProps, TimeOptionProps};
pub use slot::ChangeCallback;
pub use state::{CalendarCell, DateTimeMeta, DayMeta, PickerSnapshot, TimeMeta};

use self::props::InputField;
use self::slot::Slot;
use self::state::InputDraft;
use crate::calendar::{Weekday, get_calendar_grid};
use crate::constraints::Constraints;
use crate::formatter::DateTimeFormatter;
use crate::time_options::{StepError, TimeOptions, get_time_options};
use crate::{CalendarDate, LocalDateTime, LocalTime};

/// Result of running a candidate through clamp and selectability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Candidate<T> {
    Cleared,
    Accepted(T),
    Rejected,
}

impl<T> Candidate<T> {
    fn into_value(self) -> Option<T> {
        match self {
            Self::Accepted(value) => Some(value),
            Self::Cleared | Self::Rejected => None,
        }
    }
}

fn normalize_date_time(
    next: Option<LocalDateTime>,
    constraints: &Constraints,
) -> Candidate<LocalDateTime> {
    let Some(next) = next else {
        return Candidate::Cleared;
    };
    let clamped = constraints.clamp_date_time(next);
    if constraints.is_selectable_date_time(&clamped) {
        Candidate::Accepted(clamped)
    } else {
        Candidate::Rejected
    }
}

fn normalize_time(next: Option<LocalTime>, constraints: &Constraints) -> Candidate<LocalTime> {
    let Some(next) = next else {
        return Candidate::Cleared;
    };
    let clamped = constraints.clamp_time(next);
    if constraints.is_selectable_time(&clamped) {
        Candidate::Accepted(clamped)
    } else {
        Candidate::Rejected
    }
}

pub struct DateTimePicker {
    value:           Slot<Option<LocalDateTime>>,
    time:            Slot<Option<LocalTime>>,
    visible_month:   Slot<CalendarDate>,
    focused_date:    Cell<Option<CalendarDate>>,
    date_draft:      RefCell<InputDraft>,
    time_draft:      RefCell<InputDraft>,
    date_time_draft: RefCell<InputDraft>,
    week_starts_on:  Weekday,
    now_date:        Option<CalendarDate>,
    formatter:       Box<dyn DateTimeFormatter>,
    constraints:     Constraints,
}

impl DateTimePicker {
    /// Builds a picker. Owned value and time seeds go through the constraints first and
    /// are dropped when rejected. The visible month starts at the controlled month, else
    /// the default month, else the initial value's date, else 1970-01-01. Focus starts on
    /// the initial value's date.
    pub fn new(options: PickerOptions) -> Self {
        let PickerOptions {
            value,
            default_value,
            time,
            default_time,
            visible_month,
            default_visible_month,
            week_starts_on,
            now_date,
            formatter,
            constraints,
        } = options;

        let initial_value = normalize_date_time(
            value
                .controlled
                .as_ref()
                .and_then(|getter| getter())
                .or(default_value),
            &constraints,
        )
        .into_value();

        let initial_time = normalize_time(
            time.controlled
                .as_ref()
                .and_then(|getter| getter())
                .or(default_time),
            &constraints,
        )
        .into_value();

        let initial_month = visible_month
            .controlled
            .as_ref()
            .map(|getter| getter())
            .or(default_visible_month)
            .or_else(|| initial_value.map(LocalDateTime::date))
            .unwrap_or(CalendarDate::UNIX_EPOCH);

        let value = match value.controlled {
            Some(getter) => Slot::external("value", getter, value.on_change),
            None => Slot::owned("value", initial_value, value.on_change),
        };
        let time = match time.controlled {
            Some(getter) => Slot::external("time", getter, time.on_change),
            None => Slot::owned("time", initial_time, time.on_change),
        };
        let visible_month = match visible_month.controlled {
            Some(getter) => Slot::external("visible_month", getter, visible_month.on_change),
            None => Slot::owned("visible_month", initial_month, visible_month.on_change),
        };

        Self {
            value,
            time,
            visible_month,
            focused_date: Cell::new(initial_value.map(LocalDateTime::date)),
            date_draft: RefCell::default(),
            time_draft: RefCell::default(),
            date_time_draft: RefCell::default(),
            week_starts_on,
            now_date,
            formatter,
            constraints,
        }
    }

    pub const fn week_starts_on(&self) -> Weekday {
        self.week_starts_on
    }

    pub const fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    fn current_value(&self) -> Option<LocalDateTime> {
        normalize_date_time(self.value.get(), &self.constraints).into_value()
    }

    fn current_time(&self) -> Option<LocalTime> {
        normalize_time(self.time.get(), &self.constraints).into_value()
    }

    fn current_visible_month(&self) -> CalendarDate {
        self.visible_month.get()
    }

    pub fn state(&self) -> PickerSnapshot {
        let value = self.current_value();
        PickerSnapshot {
            value,
            selected_date: value.map(LocalDateTime::date),
            selected_time: value
                .map(LocalDateTime::time)
                .or_else(|| self.current_time()),
            visible_month: self.current_visible_month(),
            focused_date: self.focused_date.get(),
        }
    }

    // --- selectability ---

    fn is_date_disabled_by_date_time_bounds(&self, date: CalendarDate) -> bool {
        let bounds = &self.constraints.date_time;
        bounds.min.is_some_and(|min| date < min.date())
            || bounds.max.is_some_and(|max| date > max.date())
    }

    fn is_time_disabled_by_date_time_bounds(&self, time: LocalTime) -> bool {
        let bounds = &self.constraints.date_time;
        let Some(selected) = self.current_value().map(LocalDateTime::date) else {
            return false;
        };

        let before_min = bounds.min.is_some_and(|min| {
            selected < min.date() || (selected == min.date() && time < min.time())
        });
        let after_max = bounds.max.is_some_and(|max| {
            selected > max.date() || (selected == max.date() && time > max.time())
        });
        before_min || after_max
    }

    /// The date layer plus the date range spanned by the date-time bounds.
    pub fn is_selectable_date(&self, date: CalendarDate) -> bool {
        self.constraints.is_selectable_date(&date) && !self.is_date_disabled_by_date_time_bounds(date)
    }

    /// The time layer plus the date-time bounds as they apply on the selected date.
    pub fn is_selectable_time(&self, time: LocalTime) -> bool {
        self.constraints.is_selectable_time(&time) && !self.is_time_disabled_by_date_time_bounds(time)
    }

    pub fn is_selectable_date_time(&self, value: LocalDateTime) -> bool {
        self.constraints.is_selectable_date_time(&value)
    }

    // --- selectors ---

    fn day_meta_for(
        &self,
        date: CalendarDate,
        selected: Option<CalendarDate>,
        visible_month: CalendarDate,
    ) -> DayMeta {
        DayMeta {
            is_selected_date: selected == Some(date),
            is_disabled_date: !self.is_selectable_date(date),
            is_today:         self.now_date == Some(date),
            is_current_month: date.same_month(visible_month),
        }
    }

    pub fn day_meta(&self, date: CalendarDate) -> DayMeta {
        let selected = self.current_value().map(LocalDateTime::date);
        self.day_meta_for(date, selected, self.current_visible_month())
    }

    pub fn time_meta(&self, time: LocalTime) -> TimeMeta {
        TimeMeta {
            is_selected_time: self.state().selected_time == Some(time),
            is_disabled_time: !self.is_selectable_time(time),
        }
    }

    pub fn date_time_meta(&self, value: LocalDateTime) -> DateTimeMeta {
        DateTimeMeta {
            is_selected_date_time: self.current_value() == Some(value),
            is_disabled_date_time: !self.is_selectable_date_time(value),
        }
    }

    /// The 42 cells of the visible month. Empty when the grid would leave the
    /// representable calendar range.
    pub fn calendar_grid(&self) -> Vec<CalendarCell> {
        let visible_month = self.current_visible_month();
        let Some(dates) = get_calendar_grid(visible_month, self.week_starts_on) else {
            debug!(%visible_month, "calendar grid outside representable range");
            return Vec::new();
        };

        let selected = self.current_value().map(LocalDateTime::date);
        dates
            .into_iter()
            .map(|date| CalendarCell::new(date, self.day_meta_for(date, selected, visible_month)))
            .collect()
    }

    pub fn month_label(&self) -> String {
        self.formatter.month_label(self.current_visible_month())
    }

    pub fn weekday_labels(&self) -> Vec<String> {
        self.formatter.weekday_labels(self.week_starts_on)
    }

    /// Whole-day time list at `step_minutes`, keeping only times selectable right now.
    ///
    /// # Errors
    /// Returns `StepError::InvalidStep` when `step_minutes` is zero.
    pub fn time_options(&self, step_minutes: u32) -> Result<Vec<LocalTime>, StepError> {
        let options = TimeOptions::new(step_minutes).with_constraints(self.constraints.time.clone());
        let times = get_time_options(&options)?;
        Ok(times
            .into_iter()
            .filter(|time| !self.is_time_disabled_by_date_time_bounds(*time))
            .collect())
    }

    // --- prop bundles ---

    pub fn prev_month_button_props(&self) -> ButtonProps<'_> {
        ButtonProps::new(self, -1, "Previous month")
    }

    pub fn next_month_button_props(&self) -> ButtonProps<'_> {
        ButtonProps::new(self, 1, "Next month")
    }

    pub fn day_props(&self, date: CalendarDate) -> DayProps<'_> {
        let meta = self.day_meta(date);
        DayProps::new(
            self,
            date,
            meta.is_disabled_date,
            meta.is_selected_date,
            self.focused_date.get() == Some(date),
        )
    }

    pub fn time_option_props(&self, time: LocalTime) -> TimeOptionProps<'_> {
        let meta = self.time_meta(time);
        TimeOptionProps::new(self, time, meta.is_disabled_time, meta.is_selected_time)
    }

    pub fn date_input_props(&self) -> InputProps<'_> {
        self.input_props(InputField::Date)
    }

    pub fn time_input_props(&self) -> InputProps<'_> {
        self.input_props(InputField::Time)
    }

    pub fn date_time_input_props(&self) -> InputProps<'_> {
        self.input_props(InputField::DateTime)
    }

    const fn draft(&self, field: InputField) -> &RefCell<InputDraft> {
        match field {
            InputField::Date => &self.date_draft,
            InputField::Time => &self.time_draft,
            InputField::DateTime => &self.date_time_draft,
        }
    }

    fn input_props(&self, field: InputField) -> InputProps<'_> {
        let draft = self.draft(field).borrow().clone();
        if let InputDraft::Draft(text) = draft {
            return InputProps::new(self, field, text, true);
        }

        let state = self.state();
        let committed = match field {
            InputField::Date => state.selected_date.map(|d| self.formatter.format_date(d)),
            InputField::Time => state.selected_time.map(|t| self.formatter.format_time(t)),
            InputField::DateTime => state.value.map(|v| self.formatter.format_date_time(v)),
        };
        InputProps::new(self, field, committed.unwrap_or_default(), false)
    }

    fn set_draft(&self, field: InputField, draft: InputDraft) {
        *self.draft(field).borrow_mut() = draft;
    }

    fn hold_draft(&self, field: InputField, text: &str) {
        debug!(?field, text, "holding unparsable input as draft");
        self.set_draft(field, InputDraft::Draft(text.to_owned()));
    }

    pub(crate) fn change_input(&self, field: InputField, text: &str) {
        if text.is_empty() {
            self.set_draft(field, InputDraft::Committed);
            match field {
                InputField::Date => self.set_date(None),
                InputField::Time => self.set_time(None),
                InputField::DateTime => self.set_value(None),
            }
            return;
        }

        // the draft is released before the setter runs its callbacks
        match field {
            InputField::Date => match self.formatter.parse_date(text) {
                Some(date) => {
                    self.set_draft(field, InputDraft::Committed);
                    self.set_date(Some(date));
                }
                None => self.hold_draft(field, text),
            },
            InputField::Time => match self.formatter.parse_time(text) {
                Some(time) => {
                    self.set_draft(field, InputDraft::Committed);
                    self.set_time(Some(time));
                }
                None => self.hold_draft(field, text),
            },
            InputField::DateTime => match self.formatter.parse_date_time(text) {
                Some(value) => {
                    self.set_draft(field, InputDraft::Committed);
                    self.set_value(Some(value));
                }
                None => self.hold_draft(field, text),
            },
        }
    }

    pub(crate) fn blur_input(&self, field: InputField) {
        self.set_draft(field, InputDraft::Committed);
    }

    // --- setters ---

    fn apply_value(&self, next: Option<LocalDateTime>) {
        match normalize_date_time(next, &self.constraints) {
            Candidate::Cleared => self.value.propose(None),
            Candidate::Accepted(value) => self.value.propose(Some(value)),
            Candidate::Rejected => debug!(candidate = ?next, "value rejected by constraints"),
        }
    }

    fn apply_time(&self, next: Option<LocalTime>) {
        match normalize_time(next, &self.constraints) {
            Candidate::Cleared => self.time.propose(None),
            Candidate::Accepted(time) => self.time.propose(Some(time)),
            Candidate::Rejected => debug!(candidate = ?next, "time rejected by constraints"),
        }
    }

    /// Applies the full date-time, then syncs the standalone time to the resulting
    /// value's time.
    pub fn set_value(&self, next: Option<LocalDateTime>) {
        self.apply_value(next);
        if let Some(value) = self.current_value() {
            self.apply_time(Some(value.time()));
        }
    }

    /// `None` clears the value. Otherwise the date is combined with the current value's
    /// time, else the standalone time, else midnight.
    pub fn set_date(&self, next: Option<CalendarDate>) {
        let Some(date) = next else {
            self.apply_value(None);
            return;
        };

        let preserved = self
            .current_value()
            .map(LocalDateTime::time)
            .or_else(|| self.current_time())
            .unwrap_or(LocalTime::MIDNIGHT);
        self.apply_value(Some(date.at(preserved)));
    }

    /// Updates the standalone time. When a value exists, `None` clears it and a time
    /// replaces its time part.
    pub fn set_time(&self, next: Option<LocalTime>) {
        self.apply_time(next);

        let Some(current) = self.current_value() else {
            return;
        };
        let Some(next) = next else {
            self.apply_value(None);
            return;
        };

        if let Candidate::Accepted(time) = normalize_time(Some(next), &self.constraints) {
            self.apply_value(Some(current.with_time(time)));
        }
    }

    /// Unvalidated; the visible month is a viewport, not a selection.
    pub fn set_visible_month(&self, next: CalendarDate) {
        self.visible_month.propose(next);
    }

    pub(crate) fn shift_visible_month(&self, months: i64) {
        let current = self.current_visible_month();
        match current.add_months(months) {
            Some(next) => self.set_visible_month(next),
            None => debug!(%current, months, "month navigation outside representable range"),
        }
    }

    pub fn go_to_next_month(&self) {
        self.shift_visible_month(1);
    }

    pub fn go_to_prev_month(&self) {
        self.shift_visible_month(-1);
    }

    /// Focus is never constrained; disabled days stay reachable.
    pub fn focus_date(&self, date: Option<CalendarDate>) {
        self.focused_date.set(date);
    }

    /// Moves focus from the focused day, else the selected day, else the visible month.
    /// When focus lands outside the visible month, the visible month follows it.
    pub fn move_focus_date(&self, direction: FocusMoveDirection) {
        let anchor = self
            .focused_date
            .get()
            .or_else(|| self.current_value().map(LocalDateTime::date))
            .unwrap_or_else(|| self.current_visible_month());

        let Some(next) = direction.target(anchor, self.week_starts_on) else {
            debug!(%anchor, ?direction, "focus move outside representable range");
            return;
        };

        self.focused_date.set(Some(next));
        if !next.same_month(self.current_visible_month()) {
            self.set_visible_month(next.month_start());
        }
    }
}

impl fmt::Debug for DateTimePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateTimePicker")
            .field("value", &self.value)
            .field("time", &self.time)
            .field("visible_month", &self.visible_month)
            .field("focused_date", &self.focused_date.get())
            .field("week_starts_on", &self.week_starts_on)
            .field("now_date", &self.now_date)
            .field("constraints", &self.constraints)
            .finish_non_exhaustive()
    }
}
