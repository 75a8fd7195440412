use datetime_picker_core::{
    CalendarDate, Constraints, DateConstraints, DateParts, DateTimeConstraints, DateTimePicker,
    FocusMoveDirection, LocalDateTime, LocalTime, PickerOptions, RoundingMode, StepError,
    TimeConstraints, TimeOptions, TimeParts, Weekday, add_days, add_months,
    clamp_date_time_to_constraints, combine_local_date_time, format_calendar_date,
    format_local_time, get_calendar_grid, get_time_options, is_selectable_date_time,
    parse_calendar_date, parse_local_date_time, parse_local_time, round_time_to_step,
    split_local_date_time, start_of_week,
};

fn date(s: &str) -> CalendarDate {
    parse_calendar_date(s).unwrap()
}

fn time(s: &str) -> LocalTime {
    parse_local_time(s).unwrap()
}

fn date_time(s: &str) -> LocalDateTime {
    parse_local_date_time(s).unwrap()
}

#[test]
fn test_value_model_round_trip() {
    for year in [0, 1900, 2000, 2023, 2024, 9999] {
        for month in 1..=12 {
            for day in 1..=31 {
                let parts = DateParts { year, month, day };
                let Some(formatted) = format_calendar_date(parts) else {
                    continue;
                };
                assert_eq!(parse_calendar_date(&formatted.to_string()), Some(formatted));
            }
        }
    }

    assert_eq!(
        format_calendar_date(DateParts {
            year:  2023,
            month: 2,
            day:   29,
        }),
        None
    );
    assert_eq!(
        format_local_time(TimeParts {
            hour:   23,
            minute: 59,
        }),
        Some(time("23:59"))
    );

    let value = combine_local_date_time(date("2024-02-29"), time("07:05"));
    assert_eq!(value.to_string(), "2024-02-29T07:05");
    assert_eq!(split_local_date_time(value), (date("2024-02-29"), time("07:05")));
}

#[test]
fn test_calendar_math() {
    assert_eq!(add_months(date("2024-01-31"), 1), Some(date("2024-02-29")));
    assert_eq!(add_months(date("2023-01-31"), 1), Some(date("2023-02-28")));
    assert_eq!(
        add_days(add_days(date("2024-05-31"), 400).unwrap(), -400),
        Some(date("2024-05-31"))
    );
    assert_eq!(
        start_of_week(date("2024-05-15"), Weekday::Monday).map(CalendarDate::weekday),
        Some(Weekday::Monday)
    );

    let grid = get_calendar_grid(date("2024-02-10"), Weekday::Sunday).unwrap();
    assert_eq!(grid.len(), 42);
    assert_eq!(grid[0], date("2024-01-28"));
}

#[test]
fn test_constraints() {
    let constraints = Constraints::new().with_date_time(
        DateTimeConstraints::new()
            .with_min(date_time("2024-01-10T10:00"))
            .with_max(date_time("2024-01-20T17:00")),
    );

    let low = clamp_date_time_to_constraints(date_time("2024-01-01T08:00"), &constraints);
    let high = clamp_date_time_to_constraints(date_time("2024-01-25T20:00"), &constraints);
    assert_eq!(low, date_time("2024-01-10T10:00"));
    assert_eq!(high, date_time("2024-01-20T17:00"));
    assert_eq!(clamp_date_time_to_constraints(low, &constraints), low);

    let layered = constraints
        .with_date(DateConstraints::new().with_disabled(|d| d.weekday() == Weekday::Sunday))
        .with_time(TimeConstraints::new().with_max(time("16:00")));
    assert!(!is_selectable_date_time(&date_time("2024-01-14T12:00"), &layered));
    assert!(!is_selectable_date_time(&date_time("2024-01-15T16:30"), &layered));
    assert!(is_selectable_date_time(&date_time("2024-01-15T12:00"), &layered));
}

#[test]
fn test_time_options() {
    assert_eq!(
        round_time_to_step(time("10:07"), 15, RoundingMode::Ceil),
        Ok(time("10:15"))
    );

    let options = get_time_options(&TimeOptions::new(15).with_end(time("01:00"))).unwrap();
    let texts: Vec<String> = options.iter().map(ToString::to_string).collect();
    assert_eq!(texts, ["00:00", "00:15", "00:30", "00:45", "01:00"]);

    assert_eq!(
        get_time_options(&TimeOptions::new(0)),
        Err(StepError::InvalidStep(0))
    );
}

#[test]
fn test_picker_walkthrough() {
    let picker = DateTimePicker::new(
        PickerOptions::new()
            .default_value(Some(date_time("2024-01-15T08:30")))
            .week_starts_on(Weekday::Monday)
            .now_date(date("2024-01-15")),
    );

    picker.set_date(Some(date("2024-01-20")));
    assert_eq!(picker.state().value, Some(date_time("2024-01-20T08:30")));

    picker.set_time(Some(time("10:45")));
    assert_eq!(picker.state().value, Some(date_time("2024-01-20T10:45")));

    picker.focus_date(Some(date("2024-01-31")));
    picker.move_focus_date(FocusMoveDirection::Right);
    let state = picker.state();
    assert_eq!(state.focused_date, Some(date("2024-02-01")));
    assert_eq!(state.visible_month, date("2024-02-01"));
    assert_eq!(picker.month_label(), "2024-02");
    assert_eq!(picker.weekday_labels()[0], "Mon");

    let grid = picker.calendar_grid();
    assert_eq!(grid[0].date, date("2024-01-29"));
    assert!(grid.iter().any(|cell| cell.date == date("2024-01-31") && !cell.is_current_month));

    picker.day_props(date("2024-02-14")).on_press();
    assert_eq!(picker.state().value, Some(date_time("2024-02-14T10:45")));

    picker.date_time_input_props().on_change("not a date");
    assert!(picker.date_time_input_props().aria_invalid);
    picker.date_time_input_props().on_blur();
    assert_eq!(picker.date_time_input_props().value, "2024-02-14T10:45");
}
