use crate::config::{CalendarConfig, CalendarOptions, ConfigField, SelectionMode};
use crate::date;
use crate::grid::SelectMode;
use crate::tests::{cell_for, click, config};
use crate::utils::dates::YearMonth;
use crate::RangeCalendar;

#[test]
fn attributes_win_over_the_options_object() {
    let attrs = CalendarOptions {
        starting_month: Some(0),
        ..Default::default()
    };

    let options = CalendarOptions {
        starting_month: Some(5),
        starting_year: Some(2014),
        start_day_of_week: Some(1),
        ..Default::default()
    };

    let config = CalendarConfig::resolve(attrs, options, date!("2014-11-20"));
    let calendar = RangeCalendar::new(config);

    // Month from the attribute, year and week start from the options.
    assert_eq!(calendar.month_labels(), ["Jan 2014"]);
    assert_eq!(calendar.day_header(), ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]);
}

#[test]
fn unset_values_fall_back_to_today() {
    let calendar = RangeCalendar::new(config(CalendarOptions::default(), date!("2014-11-20")));

    assert_eq!(calendar.month_labels(), ["Nov 2014"]);
    assert_eq!(calendar.day_header(), ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]);
    assert_eq!(calendar.config().selection_mode(), SelectionMode::TwoClick);
}

#[test]
fn invalid_values_degrade_to_defaults() {
    let options = CalendarOptions {
        starting_month: Some(26),
        start_day_of_week: Some(9),
        backward_months: Some(-2),
        forward_months: Some(100),
        month_names: Some(vec!["Jan".to_owned()]),
        ..Default::default()
    };

    let calendar = RangeCalendar::new(config(options, date!("2014-11-20")));

    assert_eq!(calendar.month_labels(), ["Nov 2014"]);
    assert_eq!(calendar.day_header()[0], "Su");
}

#[test]
fn custom_name_tables() {
    let options = CalendarOptions {
        starting_month: Some(10),
        starting_year: Some(2014),
        month_names: Some(
            ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"]
                .map(str::to_owned)
                .to_vec(),
        ),
        day_names: Some(
            ["dim", "lun", "mar", "mer", "jeu", "ven", "sam"]
                .map(str::to_owned)
                .to_vec(),
        ),
        start_day_of_week: Some(1),
        ..Default::default()
    };

    let calendar = RangeCalendar::new(config(options, date!("2014-11-20")));

    assert_eq!(calendar.month_labels(), ["N 2014"]);
    assert_eq!(calendar.day_header(), ["lun", "mar", "mer", "jeu", "ven", "sam", "dim"]);
}

#[test]
fn live_min_select_date_update() {
    let options = CalendarOptions {
        starting_month: Some(10),
        starting_year: Some(2014),
        min_select_date: Some(date!("2014-11-02")),
        ..Default::default()
    };

    let mut calendar = RangeCalendar::new(config(options, date!("2014-11-20")));

    let second = cell_for(&calendar, date!("2014-11-02"));
    assert!(!calendar.window().cell(second).unwrap().is_unavailable);

    calendar.on_config_changed(ConfigField::MinSelectDate, "11/03/2014");

    let second = cell_for(&calendar, date!("2014-11-02"));
    assert!(calendar.window().cell(second).unwrap().is_unavailable);

    let third = cell_for(&calendar, date!("2014-11-03"));
    assert!(!calendar.window().cell(third).unwrap().is_unavailable);
}

#[test]
fn live_bound_update_reclamps_the_selection() {
    let options = CalendarOptions {
        starting_month: Some(10),
        starting_year: Some(2014),
        ..Default::default()
    };

    let mut calendar = RangeCalendar::new(config(options, date!("2014-11-20")));

    click(&mut calendar, date!("2014-11-03"));
    click(&mut calendar, date!("2014-11-18"));

    calendar.on_config_changed(ConfigField::MinSelectDate, "11/10/2014");

    assert_eq!(calendar.selection().start(), Some(date!("2014-11-10")));
    assert_eq!(calendar.selection().end(), Some(date!("2014-11-18")));

    let at = cell_for(&calendar, date!("2014-11-05"));
    assert_eq!(calendar.window().cell(at).unwrap().select_mode, SelectMode::None);
}

#[test]
fn unparsable_live_values_are_ignored() {
    let options = CalendarOptions {
        starting_month: Some(10),
        starting_year: Some(2014),
        min_select_date: Some(date!("2014-11-02")),
        ..Default::default()
    };

    let mut calendar = RangeCalendar::new(config(options, date!("2014-11-20")));

    calendar.on_config_changed(ConfigField::MinSelectDate, "whenever");
    calendar.on_config_changed(ConfigField::ForwardMonths, "lots");
    calendar.on_config_changed(ConfigField::ForwardMonths, "9");
    calendar.on_config_changed(ConfigField::MaxForwardMonth, "2014");

    assert_eq!(calendar.config().bounds().min, Some(date!("2014-11-02")));
    assert_eq!(calendar.month_labels(), ["Nov 2014"]);
}

#[test]
fn live_updates_are_idempotent() {
    let options = CalendarOptions {
        starting_month: Some(10),
        starting_year: Some(2014),
        ..Default::default()
    };

    let mut calendar = RangeCalendar::new(config(options, date!("2014-11-20")));

    click(&mut calendar, date!("2014-11-03"));
    click(&mut calendar, date!("2014-11-18"));

    calendar.on_config_changed(ConfigField::MinSelectDate, "11/10/2014");
    let window = calendar.window().clone();
    let selection = *calendar.selection();

    calendar.on_config_changed(ConfigField::MinSelectDate, "11/10/2014");
    assert_eq!(calendar.window(), &window);
    assert_eq!(calendar.selection(), &selection);
}

#[test]
fn live_forward_months_update_regrows_the_window() {
    let options = CalendarOptions {
        starting_month: Some(10),
        starting_year: Some(2014),
        ..Default::default()
    };

    let mut calendar = RangeCalendar::new(config(options, date!("2014-11-20")));
    assert_eq!(calendar.month_labels(), ["Nov 2014"]);

    calendar.on_config_changed(ConfigField::ForwardMonths, "2");
    assert_eq!(calendar.month_labels(), ["Nov 2014", "Dec 2014", "Jan 2015"]);
}

#[test]
fn live_month_bound_update_limits_navigation() {
    let options = CalendarOptions {
        starting_month: Some(10),
        starting_year: Some(2014),
        ..Default::default()
    };

    let mut calendar = RangeCalendar::new(config(options, date!("2014-11-20")));

    calendar.on_config_changed(ConfigField::MaxForwardMonth, "11/2014");
    assert!(calendar.navigate_forward());
    assert!(!calendar.navigate_forward());
    assert_eq!(calendar.month_labels(), ["Dec 2014"]);

    assert_eq!(calendar.config().max_forward_month(), YearMonth::new(2014, 11));
}

#[test]
fn live_start_and_end_date_updates() {
    let options = CalendarOptions {
        starting_month: Some(10),
        starting_year: Some(2014),
        ..Default::default()
    };

    let mut calendar = RangeCalendar::new(config(options, date!("2014-11-20")));

    calendar.on_config_changed(ConfigField::StartDate, "11/03/2014");
    assert_eq!(calendar.selection().start(), Some(date!("2014-11-03")));
    assert_eq!(calendar.selection().end(), None);

    calendar.on_config_changed(ConfigField::EndDate, "11/07/2014");
    assert_eq!(calendar.selection().end(), Some(date!("2014-11-07")));

    // A host-driven pair counts as applied.
    assert_eq!(
        calendar.selection().applied(),
        Some((date!("2014-11-03"), date!("2014-11-07"))),
    );

    let at = cell_for(&calendar, date!("2014-11-05"));
    assert_eq!(calendar.window().cell(at).unwrap().select_mode, SelectMode::Daily);
}

#[test]
fn configured_start_and_end_pair_is_preselected() {
    let options = CalendarOptions {
        starting_month: Some(10),
        starting_year: Some(2014),
        start_date: Some(date!("2014-11-07")),
        end_date: Some(date!("2014-11-03")),
        ..Default::default()
    };

    let calendar = RangeCalendar::new(config(options, date!("2014-11-20")));

    // Out of order pairs are swapped at startup.
    assert_eq!(calendar.selection().start(), Some(date!("2014-11-03")));
    assert_eq!(calendar.selection().end(), Some(date!("2014-11-07")));
    assert_eq!(
        calendar.selection().applied(),
        Some((date!("2014-11-03"), date!("2014-11-07"))),
    );
}
