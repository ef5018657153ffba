use chrono::NaiveDate;

use crate::config::CalendarConfig;
use crate::grid::{DayCell, MonthGrid};
use crate::utils::dates::YearMonth;

/// Flat address of a cell inside a month window.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct CellRef {
    pub month: usize,
    pub week: usize,
    pub day: usize,
}

/// The ordered sequence of month grids currently on display.
///
/// Grids always cover consecutive calendar months. Navigation slides the
/// window one month at a time, evicting the opposite edge once the window
/// has reached the capacity implied by the configured month counts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthWindow {
    grids: Vec<MonthGrid>,
}

impl MonthWindow {
    /// Build the window around an anchor month (the configured starting
    /// month unless overridden). With `override_limits` the forward and
    /// backward month bounds are ignored so the full window is always
    /// generated; user-driven navigation keeps them enforced.
    pub(crate) fn generate(
        config: &CalendarConfig,
        anchor: Option<YearMonth>,
        override_limits: bool,
    ) -> Self {
        let base = anchor.unwrap_or(config.starting);
        let mut grids = Vec::with_capacity(config.window_capacity());

        let mut backward = Vec::new();
        let mut ym = base;

        for _ in 0..config.backward_months {
            let Some(prev) = ym.pred() else { break };

            if !override_limits && config.min_backward_month.is_some_and(|min| prev < min) {
                break;
            }

            backward.push(prev);
            ym = prev;
        }

        for ym in backward.into_iter().rev() {
            grids.push(MonthGrid::generate(ym, config.start_day_of_week, &config.bounds));
        }

        grids.push(MonthGrid::generate(base, config.start_day_of_week, &config.bounds));

        let mut ym = base;

        for _ in 0..config.forward_months {
            let Some(next) = ym.succ() else { break };

            if !override_limits && config.max_forward_month.is_some_and(|max| next > max) {
                break;
            }

            grids.push(MonthGrid::generate(next, config.start_day_of_week, &config.bounds));
            ym = next;
        }

        Self { grids }
    }

    pub fn grids(&self) -> &[MonthGrid] {
        &self.grids
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    /// Locate the in-month cell showing a calendar date, anywhere in the
    /// window. This is the single lookup used by all coloring paths.
    pub fn find(&self, date: NaiveDate) -> Option<CellRef> {
        self.grids.iter().enumerate().find_map(|(month, grid)| {
            grid.position(date)
                .map(|(week, day)| CellRef { month, week, day })
        })
    }

    pub fn cell(&self, at: CellRef) -> Option<&DayCell> {
        self.grids.get(at.month)?.cell(at.week, at.day)
    }

    pub(crate) fn cell_mut(&mut self, at: CellRef) -> Option<&mut DayCell> {
        self.grids.get_mut(at.month)?.cell_mut(at.week, at.day)
    }

    pub(crate) fn grid_mut(&mut self, month: usize) -> Option<&mut MonthGrid> {
        self.grids.get_mut(month)
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut DayCell> {
        self.grids.iter_mut().flat_map(MonthGrid::cells_mut)
    }

    /// Drop every hover and selection marker.
    pub(crate) fn clear_markers(&mut self) {
        for cell in self.cells_mut() {
            cell.select_mode = Default::default();
            cell.is_hover = false;
        }
    }

    /// Slide the window one month forward. Returns `false` without touching
    /// the window when the next month exceeds the forward bound.
    pub(crate) fn navigate_forward(&mut self, config: &CalendarConfig) -> bool {
        let Some(next) = self.grids.last().and_then(|grid| grid.year_month().succ()) else {
            return false;
        };

        if config.max_forward_month.is_some_and(|max| next > max) {
            return false;
        }

        if self.grids.len() >= config.window_capacity() {
            self.grids.remove(0);
        }

        self.grids
            .push(MonthGrid::generate(next, config.start_day_of_week, &config.bounds));

        true
    }

    /// Slide the window one month backward. Returns `false` without
    /// touching the window when the previous month precedes the backward
    /// bound.
    pub(crate) fn navigate_backward(&mut self, config: &CalendarConfig) -> bool {
        let Some(prev) = self.grids.first().and_then(|grid| grid.year_month().pred()) else {
            return false;
        };

        if config.min_backward_month.is_some_and(|min| prev < min) {
            return false;
        }

        if self.grids.len() >= config.window_capacity() {
            self.grids.pop();
        }

        self.grids
            .insert(0, MonthGrid::generate(prev, config.start_day_of_week, &config.bounds));

        true
    }

    /// Header labels for the visible months, oldest first.
    pub fn month_labels(&self, config: &CalendarConfig) -> Vec<String> {
        self.grids
            .iter()
            .map(|grid| config.month_label(grid.year_month()))
            .collect()
    }
}
