use chrono::{Datelike, NaiveDate};

use crate::availability::Bounds;
use crate::presets::RangePreset;
use crate::utils::dates::{is_month_valid, YearMonth};

/// English month abbreviations, used when the host supplies no table.
pub const DEFAULT_MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// English day abbreviations, Sunday first.
pub const DEFAULT_DAY_NAMES: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Click behavior once both endpoints are selected.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum SelectionMode {
    /// A third click discards the pair and starts a new selection.
    #[default]
    TwoClick,
    /// A third click moves the endpoint that was selected last.
    LastSelectedDate,
    /// Clicks and hovers are ignored; the grid displays a fixed range.
    DisableDayClick,
}

/// One layer of the configuration fallback chain. Unset fields fall
/// through to the next layer: attributes > options object > defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CalendarOptions {
    /// 0-based starting month (0 = January).
    pub starting_month: Option<u32>,
    pub starting_year: Option<i32>,
    pub backward_months: Option<i64>,
    pub forward_months: Option<i64>,
    /// 0 = Sunday .. 6 = Saturday.
    pub start_day_of_week: Option<u32>,
    pub min_select_date: Option<NaiveDate>,
    pub max_select_date: Option<NaiveDate>,
    pub weekly_select_range: Option<i64>,
    pub monthly_select_range: Option<i64>,
    pub prior_range_presets: Option<Vec<RangePreset>>,
    pub min_backward_month: Option<YearMonth>,
    pub max_forward_month: Option<YearMonth>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub selection_mode: Option<SelectionMode>,
    pub month_names: Option<Vec<String>>,
    /// Sunday-first, regardless of the configured week start.
    pub day_names: Option<Vec<String>>,
}

impl CalendarOptions {
    /// Merge two layers, keeping values from `self` where both are set.
    pub fn overlay(self, under: Self) -> Self {
        Self {
            starting_month: self.starting_month.or(under.starting_month),
            starting_year: self.starting_year.or(under.starting_year),
            backward_months: self.backward_months.or(under.backward_months),
            forward_months: self.forward_months.or(under.forward_months),
            start_day_of_week: self.start_day_of_week.or(under.start_day_of_week),
            min_select_date: self.min_select_date.or(under.min_select_date),
            max_select_date: self.max_select_date.or(under.max_select_date),
            weekly_select_range: self.weekly_select_range.or(under.weekly_select_range),
            monthly_select_range: self.monthly_select_range.or(under.monthly_select_range),
            prior_range_presets: self.prior_range_presets.or(under.prior_range_presets),
            min_backward_month: self.min_backward_month.or(under.min_backward_month),
            max_forward_month: self.max_forward_month.or(under.max_forward_month),
            start_date: self.start_date.or(under.start_date),
            end_date: self.end_date.or(under.end_date),
            selection_mode: self.selection_mode.or(under.selection_mode),
            month_names: self.month_names.or(under.month_names),
            day_names: self.day_names.or(under.day_names),
        }
    }
}

/// Fields that may be updated while the widget is live.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum ConfigField {
    MinSelectDate,
    MaxSelectDate,
    MinBackwardMonth,
    MaxForwardMonth,
    ForwardMonths,
    BackwardMonths,
    StartDate,
    EndDate,
}

/// Fully resolved widget configuration.
///
/// Values are fixed once resolved; the live-trackable subset can still be
/// changed through [`RangeCalendar::on_config_changed`].
///
/// [`RangeCalendar::on_config_changed`]: crate::RangeCalendar::on_config_changed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarConfig {
    pub(crate) today: NaiveDate,
    pub(crate) starting: YearMonth,
    pub(crate) backward_months: u32,
    pub(crate) forward_months: u32,
    pub(crate) start_day_of_week: u32,
    pub(crate) bounds: Bounds,
    pub(crate) weekly_select_range: Option<i64>,
    pub(crate) monthly_select_range: Option<i64>,
    pub(crate) presets: Vec<RangePreset>,
    pub(crate) min_backward_month: Option<YearMonth>,
    pub(crate) max_forward_month: Option<YearMonth>,
    pub(crate) start_date: Option<NaiveDate>,
    pub(crate) end_date: Option<NaiveDate>,
    pub(crate) selection_mode: SelectionMode,
    month_names: Vec<String>,
    day_names: Vec<String>,
}

impl CalendarConfig {
    /// Resolve the fallback chain into a usable configuration. Invalid
    /// values never fail resolution; they degrade to their default.
    pub fn resolve(attrs: CalendarOptions, options: CalendarOptions, today: NaiveDate) -> Self {
        let merged = attrs.overlay(options);

        let starting_month = match merged.starting_month {
            Some(month0 @ 0..=11) => month0,
            Some(_month0) => {
                #[cfg(feature = "log")]
                log::debug!("ignoring out of range starting month {_month0}");
                today.month0()
            }
            None => today.month0(),
        };

        let starting_year = merged.starting_year.unwrap_or_else(|| today.year());

        let starting = YearMonth::new(starting_year, starting_month)
            .unwrap_or_else(|| YearMonth::from_date(today));

        let start_day_of_week = match merged.start_day_of_week {
            Some(day @ 0..=6) => day,
            Some(_day) => {
                #[cfg(feature = "log")]
                log::debug!("ignoring out of range week start day {_day}");
                0
            }
            None => 0,
        };

        let month_names = match merged.month_names {
            Some(names) if names.len() == 12 => names,
            Some(_) => {
                #[cfg(feature = "log")]
                log::warn!("month name table must have 12 entries, using defaults");
                DEFAULT_MONTH_NAMES.map(str::to_owned).to_vec()
            }
            None => DEFAULT_MONTH_NAMES.map(str::to_owned).to_vec(),
        };

        let day_names = match merged.day_names {
            Some(names) if names.len() == 7 => names,
            Some(_) => {
                #[cfg(feature = "log")]
                log::warn!("day name table must have 7 entries, using defaults");
                DEFAULT_DAY_NAMES.map(str::to_owned).to_vec()
            }
            None => DEFAULT_DAY_NAMES.map(str::to_owned).to_vec(),
        };

        Self {
            today,
            starting,
            backward_months: gate_month_count(merged.backward_months),
            forward_months: gate_month_count(merged.forward_months),
            start_day_of_week,
            bounds: Bounds {
                min: merged.min_select_date,
                max: merged.max_select_date,
            },
            weekly_select_range: merged.weekly_select_range.filter(|range| *range > 0),
            monthly_select_range: merged.monthly_select_range.filter(|range| *range > 0),
            presets: merged.prior_range_presets.unwrap_or_default(),
            min_backward_month: merged.min_backward_month,
            max_forward_month: merged.max_forward_month,
            start_date: merged.start_date,
            end_date: merged.end_date,
            selection_mode: merged.selection_mode.unwrap_or_default(),
            month_names,
            day_names,
        }
    }

    /// Window length implied by the configured month counts.
    pub fn window_capacity(&self) -> usize {
        1 + self.backward_months as usize + self.forward_months as usize
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn selection_mode(&self) -> SelectionMode {
        self.selection_mode
    }

    pub fn presets(&self) -> &[RangePreset] {
        &self.presets
    }

    pub fn min_backward_month(&self) -> Option<YearMonth> {
        self.min_backward_month
    }

    pub fn max_forward_month(&self) -> Option<YearMonth> {
        self.max_forward_month
    }

    /// Header label for a month, e.g. "Dec 2013".
    pub fn month_label(&self, ym: YearMonth) -> String {
        format!("{} {}", self.month_names[ym.month0() as usize], ym.year())
    }

    /// Day-of-week header, rotated to the configured week start.
    pub fn day_header(&self) -> Vec<&str> {
        let start = self.start_day_of_week as usize;

        (0..self.day_names.len())
            .map(|offset| self.day_names[(start + offset) % 7].as_str())
            .collect()
    }
}

fn gate_month_count(count: Option<i64>) -> u32 {
    match count {
        Some(count) if is_month_valid(count) => count as u32,
        Some(_count) => {
            #[cfg(feature = "log")]
            log::debug!("ignoring out of range month count {_count}");
            0
        }
        None => 0,
    }
}
