use serde::{Deserialize, Serialize};

use crate::{CalendarDate, LocalDateTime, LocalTime};

/// Point-in-time view of a picker, derived fresh on every read.
///
/// `selected_date` and `selected_time` are the halves of `value` when one is set.
/// Without a value, `selected_time` falls back to the standalone time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerSnapshot {
    pub value:         Option<LocalDateTime>,
    pub selected_date: Option<CalendarDate>,
    pub selected_time: Option<LocalTime>,
    pub visible_month: CalendarDate,
    pub focused_date:  Option<CalendarDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayMeta {
    pub is_selected_date: bool,
    pub is_disabled_date: bool,
    pub is_today:         bool,
    pub is_current_month: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeMeta {
    pub is_selected_time: bool,
    pub is_disabled_time: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateTimeMeta {
    pub is_selected_date_time: bool,
    pub is_disabled_date_time: bool,
}

/// One of the 42 cells of the visible month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    pub date:             CalendarDate,
    pub is_current_month: bool,
    pub is_selected:      bool,
    pub is_disabled:      bool,
    pub is_today:         bool,
}

impl CalendarCell {
    pub(crate) const fn new(date: CalendarDate, meta: DayMeta) -> Self {
        Self {
            date,
            is_current_month: meta.is_current_month,
            is_selected: meta.is_selected_date,
            is_disabled: meta.is_disabled_date,
            is_today: meta.is_today,
        }
    }
}

/// Text buffer of one input field.
///
/// A draft only exists while the typed text fails to parse; parsed text is committed
/// straight to the picker and never staged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum InputDraft {
    #[default]
    Committed,
    Draft(String),
}
