/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 0;
/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Maximum valid hour on a 24-hour clock
pub const MAX_HOUR: u8 = 23;
/// Maximum valid minute
pub const MAX_MINUTE: u8 = 59;

pub const MINUTES_PER_HOUR: u32 = 60;
/// Last representable minute of a day (23:59)
pub const LAST_MINUTE_OF_DAY: u32 = 23 * MINUTES_PER_HOUR + 59;

pub const MONTHS_PER_YEAR: i64 = 12;
pub const DAYS_PER_WEEK: i64 = 7;

/// Number of cells in a month grid: six full weeks
pub const CALENDAR_GRID_CELLS: usize = 42;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Days in one 400-year Gregorian era
pub(crate) const DAYS_PER_ERA: i64 = 146_097;
/// Days from 0000-03-01 to 1970-01-01
pub(crate) const EPOCH_SHIFT_DAYS: i64 = 719_468;
/// 1970-01-01 was a Thursday (index 4 with Sunday = 0)
pub(crate) const EPOCH_WEEKDAY_OFFSET: i64 = 4;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Time component separator
pub const TIME_SEPARATOR: char = ':';
/// Separator between the date and time halves of a local date-time
pub const DATE_TIME_SEPARATOR: char = 'T';
