use serde::{Deserialize, Serialize};

use crate::LocalTime;
use crate::constraints::TimeConstraints;
use crate::prelude::*;

/// Error type for step-based time operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    /// The step must be a positive number of minutes.
    #[error("Invalid step: {0} minutes (must be a positive integer)")]
    InvalidStep(u32),
}

/// How [`round_time_to_step`] picks a step boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    /// Previous boundary
    Floor,
    /// Next boundary
    Ceil,
    /// Closest boundary, halves round up
    #[default]
    Nearest,
}

/// Arguments for [`get_time_options`].
#[derive(Debug, Clone)]
pub struct TimeOptions {
    pub step_minutes: u32,
    pub start:        LocalTime,
    pub end:          LocalTime,
    pub constraints:  TimeConstraints,
}

impl TimeOptions {
    /// Whole day, `00:00..=23:59`, no constraints.
    pub const fn new(step_minutes: u32) -> Self {
        Self {
            step_minutes,
            start: LocalTime::MIDNIGHT,
            end: LocalTime::LAST_MINUTE,
            constraints: TimeConstraints::new(),
        }
    }

    #[must_use]
    pub const fn with_start(mut self, start: LocalTime) -> Self {
        self.start = start;
        self
    }

    #[must_use]
    pub const fn with_end(mut self, end: LocalTime) -> Self {
        self.end = end;
        self
    }

    #[must_use]
    pub fn with_constraints(mut self, constraints: TimeConstraints) -> Self {
        self.constraints = constraints;
        self
    }
}

const fn ensure_step(step_minutes: u32) -> Result<u32, StepError> {
    if step_minutes == 0 {
        return Err(StepError::InvalidStep(step_minutes));
    }
    Ok(step_minutes)
}

/// Rounds `time` to a multiple of `step_minutes` counted from midnight.
/// The result never wraps past midnight; rounding up beyond the last minute yields 23:59.
///
/// # Errors
/// Returns `StepError::InvalidStep` when `step_minutes` is zero.
pub fn round_time_to_step(
    time: LocalTime,
    step_minutes: u32,
    mode: RoundingMode,
) -> Result<LocalTime, StepError> {
    let step = i64::from(ensure_step(step_minutes)?);
    let minutes = i64::from(time.minutes_since_midnight());

    let steps = match mode {
        RoundingMode::Floor => minutes.div_euclid(step),
        RoundingMode::Ceil => (minutes + step - 1).div_euclid(step),
        RoundingMode::Nearest => (2 * minutes + step).div_euclid(2 * step),
    };

    Ok(LocalTime::from_minutes_clamped(steps * step))
}

/// Step-spaced candidate times between `start` and `end`, narrowed by the constraint
/// bounds and filtered by the constraint predicate.
///
/// The first candidate is the effective start rounded up to a step boundary, so no
/// option precedes the lower bound.
///
/// # Errors
/// Returns `StepError::InvalidStep` when the step is zero.
pub fn get_time_options(options: &TimeOptions) -> Result<Vec<LocalTime>, StepError> {
    let step = ensure_step(options.step_minutes)?;
    let constraints = &options.constraints;

    let effective_start = constraints
        .min
        .map_or(options.start, |min| min.max(options.start));
    let effective_end = constraints.max.map_or(options.end, |max| max.min(options.end));

    if effective_start > effective_end {
        return Ok(Vec::new());
    }

    let first = round_time_to_step(effective_start, step, RoundingMode::Ceil)?;
    let stride = usize::try_from(step).unwrap_or(usize::MAX);

    let values = (first.minutes_since_midnight()..=effective_end.minutes_since_midnight())
        .step_by(stride)
        .map(|minutes| LocalTime::from_minutes_clamped(i64::from(minutes)))
        .filter(|candidate| constraints.is_selectable(candidate))
        .collect();

    Ok(values)
}
