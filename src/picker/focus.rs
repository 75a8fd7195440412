use serde::{Deserialize, Serialize};

use crate::CalendarDate;
use crate::calendar::Weekday;
use crate::consts::DAYS_PER_WEEK;

/// Keyboard focus movement across the day grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FocusMoveDirection {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
}

impl FocusMoveDirection {
    /// Maps a DOM-style key name (`"ArrowLeft"`, `"PageDown"`, ...) to a direction.
    pub fn from_key(key: &str) -> Option<Self> {
        let direction = match key {
            "ArrowLeft" => Self::Left,
            "ArrowRight" => Self::Right,
            "ArrowUp" => Self::Up,
            "ArrowDown" => Self::Down,
            "Home" => Self::Home,
            "End" => Self::End,
            "PageUp" => Self::PageUp,
            "PageDown" => Self::PageDown,
            _ => return None,
        };
        Some(direction)
    }

    /// Where focus lands when moving from `anchor`. Left/right step one day, up/down one
    /// week, home/end go to the edges of the anchor's week, page up/down one month.
    pub fn target(self, anchor: CalendarDate, week_starts_on: Weekday) -> Option<CalendarDate> {
        match self {
            Self::Left => anchor.add_days(-1),
            Self::Right => anchor.add_days(1),
            Self::Up => anchor.add_days(-DAYS_PER_WEEK),
            Self::Down => anchor.add_days(DAYS_PER_WEEK),
            Self::Home => anchor.start_of_week(week_starts_on),
            Self::End => anchor
                .start_of_week(week_starts_on)?
                .add_days(DAYS_PER_WEEK - 1),
            Self::PageUp => anchor.add_months(-1),
            Self::PageDown => anchor.add_months(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_targets() {
        struct TestCase {
            direction: FocusMoveDirection,
            expected:  &'static str,
        }

        // 2024-05-15 is a Wednesday
        let cases = [
            TestCase {
                direction: FocusMoveDirection::Left,
                expected:  "2024-05-14",
            },
            TestCase {
                direction: FocusMoveDirection::Right,
                expected:  "2024-05-16",
            },
            TestCase {
                direction: FocusMoveDirection::Up,
                expected:  "2024-05-08",
            },
            TestCase {
                direction: FocusMoveDirection::Down,
                expected:  "2024-05-22",
            },
            TestCase {
                direction: FocusMoveDirection::Home,
                expected:  "2024-05-12",
            },
            TestCase {
                direction: FocusMoveDirection::End,
                expected:  "2024-05-18",
            },
            TestCase {
                direction: FocusMoveDirection::PageUp,
                expected:  "2024-04-15",
            },
            TestCase {
                direction: FocusMoveDirection::PageDown,
                expected:  "2024-06-15",
            },
        ];

        for case in cases {
            assert_eq!(
                case.direction.target(date("2024-05-15"), Weekday::Sunday),
                Some(date(case.expected)),
                "{:?}",
                case.direction
            );
        }
    }

    #[test]
    fn test_home_end_follow_week_start() {
        let anchor = date("2024-05-15");
        assert_eq!(
            FocusMoveDirection::Home.target(anchor, Weekday::Monday),
            Some(date("2024-05-13"))
        );
        assert_eq!(
            FocusMoveDirection::End.target(anchor, Weekday::Monday),
            Some(date("2024-05-19"))
        );
    }

    #[test]
    fn test_page_clamps_month_end() {
        assert_eq!(
            FocusMoveDirection::PageDown.target(date("2024-01-31"), Weekday::Sunday),
            Some(date("2024-02-29"))
        );
    }

    #[test]
    fn test_from_key() {
        assert_eq!(
            FocusMoveDirection::from_key("ArrowUp"),
            Some(FocusMoveDirection::Up)
        );
        assert_eq!(
            FocusMoveDirection::from_key("PageDown"),
            Some(FocusMoveDirection::PageDown)
        );
        assert_eq!(FocusMoveDirection::from_key("Enter"), None);
        assert_eq!(FocusMoveDirection::from_key("arrowup"), None);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&FocusMoveDirection::PageUp).unwrap(),
            r#""pageUp""#
        );
        let parsed: FocusMoveDirection = serde_json::from_str(r#""left""#).unwrap();
        assert_eq!(parsed, FocusMoveDirection::Left);
    }
}
