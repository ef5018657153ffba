mod config;

use chrono::NaiveDate;

use crate::config::{CalendarConfig, CalendarOptions};
use crate::window::CellRef;
use crate::RangeCalendar;

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}

/// Resolve a config from a single options layer, with no attribute layer.
fn config(options: CalendarOptions, today: NaiveDate) -> CalendarConfig {
    CalendarConfig::resolve(CalendarOptions::default(), options, today)
}

/// Locate the cell showing a date, failing the test when it is not on
/// display.
fn cell_for(calendar: &RangeCalendar, date: NaiveDate) -> CellRef {
    calendar
        .window()
        .find(date)
        .unwrap_or_else(|| panic!("{date} is not displayed"))
}

/// Click the cell showing a date.
fn click(calendar: &mut RangeCalendar, date: NaiveDate) {
    let at = cell_for(calendar, date);
    calendar.on_day_click(at);
}
