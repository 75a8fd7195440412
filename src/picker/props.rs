//! Prop bundles handed to a rendering layer.
//!
//! Each bundle is rebuilt on every call to its getter and borrows the picker, so the
//! handlers route straight back into the picker's setters.

use super::{DateTimePicker, FocusMoveDirection};
use crate::{CalendarDate, LocalTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputField {
    Date,
    Time,
    DateTime,
}

/// Previous/next month navigation button.
#[derive(Debug, Clone, Copy)]
pub struct ButtonProps<'a> {
    picker:         &'a DateTimePicker,
    months:         i64,
    pub aria_label: &'static str,
    pub disabled:   bool,
}

impl<'a> ButtonProps<'a> {
    pub(crate) const fn new(picker: &'a DateTimePicker, months: i64, aria_label: &'static str) -> Self {
        Self {
            picker,
            months,
            aria_label,
            disabled: false,
        }
    }

    pub fn on_press(&self) {
        self.picker.shift_visible_month(self.months);
    }
}

/// One day cell. `disabled` is captured when the bundle is built.
#[derive(Debug, Clone, Copy)]
pub struct DayProps<'a> {
    picker:            &'a DateTimePicker,
    pub date:          CalendarDate,
    pub disabled:      bool,
    /// 0 for the focused or selected day, -1 otherwise
    pub tab_index:     i32,
    pub aria_selected: bool,
    pub aria_disabled: bool,
}

impl<'a> DayProps<'a> {
    pub(crate) const fn new(
        picker: &'a DateTimePicker,
        date: CalendarDate,
        disabled: bool,
        selected: bool,
        focused: bool,
    ) -> Self {
        Self {
            picker,
            date,
            disabled,
            tab_index: if focused || selected { 0 } else { -1 },
            aria_selected: selected,
            aria_disabled: disabled,
        }
    }

    /// Focuses the day, then commits it unless disabled.
    pub fn on_press(&self) {
        self.picker.focus_date(Some(self.date));
        self.commit();
    }

    /// Arrow keys, `Home`, `End`, `PageUp` and `PageDown` move focus from this day.
    /// `Enter` and `" "` commit it unless disabled. Other keys only focus the day.
    pub fn on_key_down(&self, key: &str) {
        self.picker.focus_date(Some(self.date));

        if let Some(direction) = FocusMoveDirection::from_key(key) {
            self.picker.move_focus_date(direction);
            return;
        }

        if matches!(key, "Enter" | " ") {
            self.commit();
        }
    }

    fn commit(&self) {
        if !self.disabled {
            self.picker.set_date(Some(self.date));
        }
    }
}

/// A text input bound to the date, time or date-time part of the value.
///
/// `value` shows the held draft when there is one, else the formatted committed value.
#[derive(Debug, Clone)]
pub struct InputProps<'a> {
    picker:           &'a DateTimePicker,
    field:            InputField,
    pub value:        String,
    pub aria_invalid: bool,
}

impl<'a> InputProps<'a> {
    pub(crate) const fn new(
        picker: &'a DateTimePicker,
        field: InputField,
        value: String,
        aria_invalid: bool,
    ) -> Self {
        Self {
            picker,
            field,
            value,
            aria_invalid,
        }
    }

    /// Empty text clears, parsable text commits, anything else is held as a draft.
    pub fn on_change(&self, text: &str) {
        self.picker.change_input(self.field, text);
    }

    /// Drops an unparsable draft so the field shows the committed value again.
    pub fn on_blur(&self) {
        self.picker.blur_input(self.field);
    }
}

/// One row of a time list.
#[derive(Debug, Clone, Copy)]
pub struct TimeOptionProps<'a> {
    picker:            &'a DateTimePicker,
    pub time:          LocalTime,
    pub disabled:      bool,
    pub aria_selected: bool,
    pub aria_disabled: bool,
}

impl<'a> TimeOptionProps<'a> {
    pub(crate) const fn new(
        picker: &'a DateTimePicker,
        time: LocalTime,
        disabled: bool,
        selected: bool,
    ) -> Self {
        Self {
            picker,
            time,
            disabled,
            aria_selected: selected,
            aria_disabled: disabled,
        }
    }

    pub fn on_press(&self) {
        if !self.disabled {
            self.picker.set_time(Some(self.time));
        }
    }
}
