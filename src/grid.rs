use chrono::{Duration, NaiveDate};

use crate::availability::Bounds;
use crate::utils::chunk;
use crate::utils::dates::{week_start_of, YearMonth};

/// Number of day columns in a grid row.
pub const DAYS_IN_WEEK: usize = 7;

/// Number of week rows in a month grid.
pub const WEEKS_IN_GRID: usize = 6;

/// Total day cells shown for a single month.
const CELLS_IN_GRID: usize = DAYS_IN_WEEK * WEEKS_IN_GRID;

/// Coloring state of a day cell.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum SelectMode {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
}

/// A single cell of the calendar grid.
///
/// Cells belonging to an adjacent month are rendered blank and carry no
/// date; they never hold hover or selection markers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DayCell {
    pub date: Option<NaiveDate>,
    pub select_mode: SelectMode,
    pub is_hover: bool,
    pub is_unavailable: bool,
}

impl DayCell {
    fn in_month(date: NaiveDate, bounds: &Bounds) -> Self {
        Self {
            date: Some(date),
            select_mode: SelectMode::None,
            is_hover: false,
            is_unavailable: bounds.is_unavailable(date),
        }
    }

    fn padding() -> Self {
        Self::default()
    }

    /// Whether this cell belongs to an adjacent month.
    pub fn is_padding(&self) -> bool {
        self.date.is_none()
    }
}

/// The 6×7 view of a single calendar month.
///
/// Rows start on the configured week-start day and cover 42 contiguous
/// calendar days; only days of the target month carry a populated date.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthGrid {
    ym: YearMonth,
    weeks: Vec<Vec<DayCell>>,
}

impl MonthGrid {
    /// Materialize the grid for a month. The first column matches
    /// `start_day_of_week` (0 = Sunday .. 6 = Saturday) and availability is
    /// tagged from `bounds`.
    pub fn generate(ym: YearMonth, start_day_of_week: u32, bounds: &Bounds) -> Self {
        let first_cell = week_start_of(ym.first_day(), start_day_of_week);

        let cells = (0..CELLS_IN_GRID as i64)
            .map(|offset| first_cell + Duration::days(offset))
            .map(|date| {
                if YearMonth::from_date(date) == ym {
                    DayCell::in_month(date, bounds)
                } else {
                    DayCell::padding()
                }
            })
            .collect();

        let weeks = chunk(cells, DAYS_IN_WEEK);

        // Week 2, day 6 always lands between the 15th and the 21st of the
        // target month, so it is a safe anchor in any layout.
        debug_assert!(!weeks[2][6].is_padding());

        Self { ym, weeks }
    }

    /// The month this grid displays.
    pub fn year_month(&self) -> YearMonth {
        self.ym
    }

    pub fn weeks(&self) -> &[Vec<DayCell>] {
        &self.weeks
    }

    pub fn cell(&self, week: usize, day: usize) -> Option<&DayCell> {
        self.weeks.get(week)?.get(day)
    }

    pub(crate) fn cell_mut(&mut self, week: usize, day: usize) -> Option<&mut DayCell> {
        self.weeks.get_mut(week)?.get_mut(day)
    }

    pub(crate) fn week_mut(&mut self, week: usize) -> Option<&mut [DayCell]> {
        self.weeks.get_mut(week).map(Vec::as_mut_slice)
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut DayCell> {
        self.weeks.iter_mut().flatten()
    }

    /// Locate an in-month cell by calendar date.
    pub fn position(&self, date: NaiveDate) -> Option<(usize, usize)> {
        if YearMonth::from_date(date) != self.ym {
            return None;
        }

        self.weeks.iter().enumerate().find_map(|(w, week)| {
            week.iter()
                .position(|cell| cell.date == Some(date))
                .map(|d| (w, d))
        })
    }
}
