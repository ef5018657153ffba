use chrono::{Duration, NaiveDate};

use crate::config::CalendarConfig;
use crate::grid::{DayCell, SelectMode, DAYS_IN_WEEK, WEEKS_IN_GRID};
use crate::utils::dates::{week_start_of, YearMonth};
use crate::window::MonthWindow;

/// The selection pair tracked by the widget.
///
/// `start`/`end` are the in-progress selection; `applied` is the last pair
/// confirmed by the host and is what a cancel reverts to. `last_selected`
/// is the cursor used by the last-selected-date click mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub(crate) start: Option<NaiveDate>,
    pub(crate) end: Option<NaiveDate>,
    pub(crate) last_selected: Option<NaiveDate>,
    pub(crate) applied: Option<(NaiveDate, NaiveDate)>,
}

impl Selection {
    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// The last pair confirmed through apply, if any.
    pub fn applied(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.applied
    }

    pub(crate) fn is_none_selected(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub(crate) fn is_start_only(&self) -> bool {
        self.start.is_some() && self.end.is_none()
    }

    pub(crate) fn is_both_selected(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// Order a candidate pair, swapping when the second click landed before the
/// first.
pub(crate) fn ordered(a: NaiveDate, b: NaiveDate) -> (NaiveDate, NaiveDate) {
    if b < a {
        (b, a)
    } else {
        (a, b)
    }
}

fn exceeds(range: Option<i64>, anchor: NaiveDate, day: NaiveDate) -> bool {
    range.is_some_and(|range| {
        day > anchor + Duration::days(range) || day < anchor - Duration::days(range)
    })
}

/// Granularity of a committed pair, decided by its day span. Monthly is
/// checked before weekly when both thresholds are configured.
pub(crate) fn span_kind(config: &CalendarConfig, start: NaiveDate, end: NaiveDate) -> SelectMode {
    let days = (end - start).num_days();

    if config.monthly_select_range.is_some_and(|range| days > range) {
        SelectMode::Monthly
    } else if config.weekly_select_range.is_some_and(|range| days > range) {
        SelectMode::Weekly
    } else {
        SelectMode::Daily
    }
}

/// Granularity previewed while hovering, relative to the comparison anchor.
/// Monthly takes precedence over weekly, matching [`span_kind`].
pub(crate) fn preview_kind(config: &CalendarConfig, anchor: NaiveDate, day: NaiveDate) -> SelectMode {
    if exceeds(config.monthly_select_range, anchor, day) {
        SelectMode::Monthly
    } else if exceeds(config.weekly_select_range, anchor, day) {
        SelectMode::Weekly
    } else {
        SelectMode::Daily
    }
}

/// Snap a raw pair to the granularity its span implies: whole months when
/// the monthly threshold is exceeded, whole weeks for the weekly threshold,
/// unchanged otherwise. Boundaries pushed outside the selectable range are
/// clamped back to the nearest bound.
pub(crate) fn snap_range(
    config: &CalendarConfig,
    start: NaiveDate,
    end: NaiveDate,
) -> (NaiveDate, NaiveDate) {
    match span_kind(config, start, end) {
        SelectMode::Monthly => {
            let snapped_start = YearMonth::from_date(start).first_day();
            let snapped_end = YearMonth::from_date(end).last_day();

            (
                config.bounds.clamp(snapped_start),
                config.bounds.clamp(snapped_end),
            )
        }
        SelectMode::Weekly => {
            let snapped_start = week_start_of(start, config.start_day_of_week);
            let snapped_end = week_start_of(end, config.start_day_of_week) + Duration::days(6);

            (
                config.bounds.clamp(snapped_start),
                config.bounds.clamp(snapped_end),
            )
        }
        _ => (start, end),
    }
}

/// What a paint pass writes into the touched cells: a hover flag or a
/// selection mode.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Marker {
    Hover(bool),
    Select(SelectMode),
}

fn mark(cell: &mut DayCell, marker: Marker) {
    if cell.is_padding() || cell.is_unavailable {
        return;
    }

    match marker {
        Marker::Hover(value) => cell.is_hover = value,
        Marker::Select(mode) => cell.select_mode = mode,
    }
}

fn mark_week(window: &mut MonthWindow, month: usize, week: usize, marker: Marker) {
    if let Some(cells) = window.grid_mut(month).and_then(|grid| grid.week_mut(week)) {
        for cell in cells {
            mark(cell, marker);
        }
    }
}

/// Paint the whole week containing a date. When the week row is padded at
/// either edge, the adjacent real week of the neighboring grid is painted
/// too, so the visual week stays continuous across month boundaries.
pub(crate) fn paint_week(window: &mut MonthWindow, date: NaiveDate, marker: Marker) {
    let Some(at) = window.find(date) else {
        return;
    };

    mark_week(window, at.month, at.week, marker);

    let leading_pad = window.grids()[at.month]
        .cell(at.week, 0)
        .is_some_and(DayCell::is_padding);

    if leading_pad && at.month > 0 {
        let prev = at.month - 1;
        let mut week = WEEKS_IN_GRID - 1;

        // The trailing week of a 42-cell grid may be padding only; step
        // back one row when so.
        let all_padding = window.grids()[prev]
            .cell(week, 0)
            .is_some_and(DayCell::is_padding);

        if all_padding {
            week -= 1;
        }

        mark_week(window, prev, week, marker);
    }

    let trailing_pad = window.grids()[at.month]
        .cell(at.week, DAYS_IN_WEEK - 1)
        .is_some_and(DayCell::is_padding);

    if trailing_pad && at.month + 1 < window.len() {
        mark_week(window, at.month + 1, 0, marker);
    }
}

/// Paint every cell of the month grid containing a date.
pub(crate) fn paint_month(window: &mut MonthWindow, date: NaiveDate, marker: Marker) {
    let Some(at) = window.find(date) else {
        return;
    };

    if let Some(grid) = window.grid_mut(at.month) {
        for cell in grid.cells_mut() {
            mark(cell, marker);
        }
    }
}

/// Rebuild all selection coloring from scratch for the current selection
/// state: a full range, a lone start day, or nothing.
pub(crate) fn recolor(window: &mut MonthWindow, config: &CalendarConfig, selection: &Selection) {
    window.clear_markers();

    match (selection.start, selection.end) {
        (Some(start), Some(end)) => color_range(window, config, start, end),
        (Some(start), None) => {
            if let Some(at) = window.find(start) {
                if let Some(cell) = window.cell_mut(at) {
                    mark(cell, Marker::Select(SelectMode::Daily));
                }
            }
        }
        _ => {}
    }
}

fn color_range(window: &mut MonthWindow, config: &CalendarConfig, start: NaiveDate, end: NaiveDate) {
    let kind = span_kind(config, start, end);

    for cell in window.cells_mut() {
        if let Some(date) = cell.date {
            if start <= date && date <= end {
                mark(cell, Marker::Select(kind));
            }
        }
    }

    // Widen the endpoints so the whole first and last week (or month) read
    // as selected, not just the literal span.
    match kind {
        SelectMode::Weekly => {
            paint_week(window, start, Marker::Select(kind));
            paint_week(window, end, Marker::Select(kind));
        }
        SelectMode::Monthly => {
            paint_month(window, start, Marker::Select(kind));
            paint_month(window, end, Marker::Select(kind));
        }
        _ => {}
    }
}
