#![doc = include_str!("../README.md")]

pub mod availability;
pub mod calendar;
pub mod config;
pub mod grid;
#[cfg(feature = "timezone")]
pub mod localization;
pub mod presets;
pub mod selection;
pub mod window;

mod utils;

#[cfg(test)]
mod tests;

pub use crate::availability::Bounds;
pub use crate::calendar::RangeCalendar;
pub use crate::config::{
    CalendarConfig, CalendarOptions, ConfigField, SelectionMode, DEFAULT_DAY_NAMES,
    DEFAULT_MONTH_NAMES,
};
pub use crate::grid::{DayCell, MonthGrid, SelectMode, DAYS_IN_WEEK, WEEKS_IN_GRID};
pub use crate::presets::RangePreset;
pub use crate::selection::Selection;
pub use crate::utils::dates::YearMonth;
pub use crate::window::{CellRef, MonthWindow};
