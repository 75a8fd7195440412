use std::fmt;
use std::sync::Arc;

use crate::{CalendarDate, LocalDateTime, LocalTime};

/// Disable predicate supplied by the embedding application. Returning `true` disables
/// the value. Predicates are re-evaluated on every check and never cached.
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Inclusive min/max bounds plus an optional disable predicate for one kind of value.
///
/// An empty layer (no min, no max, no predicate) accepts everything.
pub struct LayerConstraints<T> {
    pub min:      Option<T>,
    pub max:      Option<T>,
    pub disabled: Option<Predicate<T>>,
}

pub type DateConstraints = LayerConstraints<CalendarDate>;
pub type TimeConstraints = LayerConstraints<LocalTime>;
pub type DateTimeConstraints = LayerConstraints<LocalDateTime>;

impl<T> LayerConstraints<T> {
    pub const fn new() -> Self {
        Self {
            min:      None,
            max:      None,
            disabled: None,
        }
    }

    #[must_use]
    pub fn with_min(mut self, min: T) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: T) -> Self {
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn with_disabled<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.disabled = Some(Arc::new(predicate));
        self
    }

    /// True when the disable predicate is present and rejects `value`.
    pub fn is_disabled(&self, value: &T) -> bool {
        self.disabled.as_ref().is_some_and(|predicate| predicate(value))
    }
}

impl<T: Ord> LayerConstraints<T> {
    /// Inclusive on both ends. Missing bounds are open.
    pub fn is_within_min_max(&self, value: &T) -> bool {
        if self.min.as_ref().is_some_and(|min| value < min) {
            return false;
        }
        if self.max.as_ref().is_some_and(|max| value > max) {
            return false;
        }
        true
    }

    /// Passes min/max and is not disabled.
    pub fn is_selectable(&self, value: &T) -> bool {
        self.is_within_min_max(value) && !self.is_disabled(value)
    }
}

impl<T: Ord + Copy> LayerConstraints<T> {
    /// Projects `value` onto the bounds. The min check runs first, so conflicting bounds
    /// (min above max) resolve to max.
    pub fn clamp(&self, value: T) -> T {
        let next = match self.min {
            Some(min) if value < min => min,
            _ => value,
        };
        match self.max {
            Some(max) if next > max => max,
            _ => next,
        }
    }
}

impl<T> Default for LayerConstraints<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LayerConstraints<T> {
    fn clone(&self) -> Self {
        Self {
            min:      self.min.clone(),
            max:      self.max.clone(),
            disabled: self.disabled.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LayerConstraints<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayerConstraints")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("disabled", &self.disabled.as_ref().map(|_| "<predicate>"))
            .finish()
    }
}

/// The date, time and date-time layers. A candidate is selectable only when every
/// applicable layer accepts it.
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    pub date:      DateConstraints,
    pub time:      TimeConstraints,
    pub date_time: DateTimeConstraints,
}

impl Constraints {
    pub const fn new() -> Self {
        Self {
            date:      LayerConstraints::new(),
            time:      LayerConstraints::new(),
            date_time: LayerConstraints::new(),
        }
    }

    #[must_use]
    pub fn with_date(mut self, date: DateConstraints) -> Self {
        self.date = date;
        self
    }

    #[must_use]
    pub fn with_time(mut self, time: TimeConstraints) -> Self {
        self.time = time;
        self
    }

    #[must_use]
    pub fn with_date_time(mut self, date_time: DateTimeConstraints) -> Self {
        self.date_time = date_time;
        self
    }

    pub fn clamp_date(&self, date: CalendarDate) -> CalendarDate {
        self.date.clamp(date)
    }

    pub fn clamp_time(&self, time: LocalTime) -> LocalTime {
        self.time.clamp(time)
    }

    /// Clamps to the date-time bounds, then the date and time halves independently to
    /// their own layers, then once more to the date-time bounds because the recombined
    /// value can fall outside them again.
    pub fn clamp_date_time(&self, value: LocalDateTime) -> LocalDateTime {
        let (date, time) = self.date_time.clamp(value).split();
        let merged = LocalDateTime::new(self.date.clamp(date), self.time.clamp(time));
        self.date_time.clamp(merged)
    }

    pub fn is_selectable_date(&self, date: &CalendarDate) -> bool {
        self.date.is_selectable(date)
    }

    pub fn is_selectable_time(&self, time: &LocalTime) -> bool {
        self.time.is_selectable(time)
    }

    /// The date-time layer, the date half and the time half must all be selectable.
    pub fn is_selectable_date_time(&self, value: &LocalDateTime) -> bool {
        self.date_time.is_selectable(value)
            && self.is_selectable_date(&value.date())
            && self.is_selectable_time(&value.time())
    }
}

/// True when `date` lies inside the layer's inclusive bounds.
pub fn is_within_min_max_date(date: &CalendarDate, constraints: &DateConstraints) -> bool {
    constraints.is_within_min_max(date)
}

/// True when `time` lies inside the layer's inclusive bounds.
pub fn is_within_min_max_time(time: &LocalTime, constraints: &TimeConstraints) -> bool {
    constraints.is_within_min_max(time)
}

/// True when `value` lies inside the layer's inclusive bounds.
pub fn is_within_min_max_date_time(
    value: &LocalDateTime,
    constraints: &DateTimeConstraints,
) -> bool {
    constraints.is_within_min_max(value)
}

/// Pulls `date` up to min, then down to max.
pub fn clamp_date_to_constraints(date: CalendarDate, constraints: &DateConstraints) -> CalendarDate {
    constraints.clamp(date)
}

/// Pulls `time` up to min, then down to max.
pub fn clamp_time_to_constraints(time: LocalTime, constraints: &TimeConstraints) -> LocalTime {
    constraints.clamp(time)
}

/// See [`Constraints::clamp_date_time`].
pub fn clamp_date_time_to_constraints(
    value: LocalDateTime,
    constraints: &Constraints,
) -> LocalDateTime {
    constraints.clamp_date_time(value)
}

/// Bounds and disable predicate of the date layer.
pub fn is_selectable_date(date: &CalendarDate, constraints: &Constraints) -> bool {
    constraints.is_selectable_date(date)
}

/// Bounds and disable predicate of the time layer.
pub fn is_selectable_time(time: &LocalTime, constraints: &Constraints) -> bool {
    constraints.is_selectable_time(time)
}

/// The date-time layer plus the date and time layers on each half.
pub fn is_selectable_date_time(value: &LocalDateTime, constraints: &Constraints) -> bool {
    constraints.is_selectable_date_time(value)
}
