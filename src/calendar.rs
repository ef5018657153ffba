use std::fmt;

use chrono::NaiveDate;

use crate::config::{CalendarConfig, CalendarOptions, ConfigField, SelectionMode};
use crate::grid::SelectMode;
use crate::presets;
use crate::selection::{self, Marker, Selection};
use crate::utils::dates::{is_month_valid, parse_date_input, parse_month_year, YearMonth};
use crate::window::{CellRef, MonthWindow};

/// Host callback invoked when a selection is applied.
pub type ApplyCallback = Box<dyn FnMut(NaiveDate, NaiveDate)>;

/// A date-range selection widget instance.
///
/// Owns the visible month window and the selection pair; the host renders
/// from the exposed state and dispatches interaction events back in. Every
/// operation degrades to a no-op on invalid input, nothing here fails.
///
/// ```
/// use range_calendar::{CalendarConfig, CalendarOptions, RangeCalendar};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2013, 12, 15).unwrap();
///
/// let options = CalendarOptions {
///     starting_month: Some(11),
///     starting_year: Some(2013),
///     ..Default::default()
/// };
///
/// let config = CalendarConfig::resolve(Default::default(), options, today);
/// let calendar = RangeCalendar::new(config);
/// assert_eq!(calendar.month_labels(), ["Dec 2013"]);
/// ```
pub struct RangeCalendar {
    config: CalendarConfig,
    window: MonthWindow,
    selection: Selection,
    active_preset: Option<usize>,
    apply_callback: Option<ApplyCallback>,
}

impl RangeCalendar {
    /// Initialize a widget from a resolved configuration: generate the
    /// month window, auto-apply the default preset if one is flagged, then
    /// honor a configured start/end pair.
    pub fn new(config: CalendarConfig) -> Self {
        let window = MonthWindow::generate(&config, None, false);

        let mut calendar = Self {
            config,
            window,
            selection: Selection::default(),
            active_preset: None,
            apply_callback: None,
        };

        if let Some(index) = presets::default_index(&calendar.config.presets) {
            calendar.select_preset(index);
            calendar.selection.applied = calendar.selection.start.zip(calendar.selection.end);
        }

        if let (Some(start), Some(end)) = (calendar.config.start_date, calendar.config.end_date) {
            let start = calendar.config.bounds.clamp(start);
            let end = calendar.config.bounds.clamp(end);
            let (start, end) = selection::ordered(start, end);

            calendar.selection.start = Some(start);
            calendar.selection.end = Some(end);
            calendar.selection.last_selected = Some(end);
            calendar.selection.applied = Some((start, end));
            selection::recolor(&mut calendar.window, &calendar.config, &calendar.selection);
        }

        calendar
    }

    /// Resolve the option layers against the current local day and
    /// initialize from the result.
    pub fn from_options(attrs: CalendarOptions, options: CalendarOptions) -> Self {
        let today = chrono::Local::now().date_naive();
        Self::new(CalendarConfig::resolve(attrs, options, today))
    }

    /// Attach a callback invoked with the committed pair on every
    /// successful [`apply_selection`](Self::apply_selection).
    pub fn with_apply_callback(mut self, callback: impl FnMut(NaiveDate, NaiveDate) + 'static) -> Self {
        self.apply_callback = Some(Box::new(callback));
        self
    }

    // --
    // -- Read-only state for the host renderer
    // --

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub fn window(&self) -> &MonthWindow {
        &self.window
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Index of the preset matching the current selection, if any.
    pub fn active_preset(&self) -> Option<usize> {
        self.active_preset
    }

    /// Header labels of the visible months, oldest first.
    pub fn month_labels(&self) -> Vec<String> {
        self.window.month_labels(&self.config)
    }

    /// Day-of-week header, rotated to the configured week start.
    pub fn day_header(&self) -> Vec<&str> {
        self.config.day_header()
    }

    // --
    // -- Interaction events
    // --

    /// Handle a click on a day cell. Clicks on padding or unavailable
    /// cells, or while day clicks are disabled, do nothing.
    pub fn on_day_click(&mut self, at: CellRef) {
        if self.config.selection_mode == SelectionMode::DisableDayClick {
            return;
        }

        let Some(cell) = self.window.cell(at) else {
            return;
        };

        if cell.is_unavailable {
            return;
        }

        let Some(date) = cell.date else {
            return;
        };

        if self.selection.is_none_selected() {
            self.set_start(date);
        } else if self.selection.is_start_only() {
            self.set_end(date);
        } else {
            match self.config.selection_mode {
                SelectionMode::LastSelectedDate => self.move_last_selected(date),
                _ => self.restart_selection(date),
            }
        }
    }

    pub fn on_day_hover_enter(&mut self, at: CellRef) {
        self.hover(at, true);
    }

    pub fn on_day_hover_leave(&mut self, at: CellRef) {
        self.hover(at, false);
    }

    /// Slide the window one month forward; `false` when the forward bound
    /// rejects the move.
    pub fn navigate_forward(&mut self) -> bool {
        if !self.window.navigate_forward(&self.config) {
            return false;
        }

        selection::recolor(&mut self.window, &self.config, &self.selection);
        true
    }

    /// Slide the window one month backward; `false` when the backward
    /// bound rejects the move.
    pub fn navigate_backward(&mut self) -> bool {
        if !self.window.navigate_backward(&self.config) {
            return false;
        }

        selection::recolor(&mut self.window, &self.config, &self.selection);
        true
    }

    /// Select a "prior N days" preset: regenerate the window around the
    /// reference month and select the span, clamped to availability. The
    /// reference day is the max select date when set, today otherwise.
    pub fn select_preset(&mut self, index: usize) {
        let Some(preset) = self.config.presets.get(index).copied() else {
            #[cfg(feature = "log")]
            log::debug!("ignoring unknown preset index {index}");
            return;
        };

        let reference = self.config.bounds.max.unwrap_or(self.config.today);
        let anchor = YearMonth::from_date(reference);

        // Bypass navigation limits so the full window exists around the
        // reference month.
        self.window = MonthWindow::generate(&self.config, Some(anchor), true);

        let (start, end) = presets::preset_span(preset.value, reference, &self.config.bounds);
        self.selection.start = Some(start);
        self.selection.end = None;
        self.set_end(end);
    }

    /// Commit the in-progress pair. Rejected (returns `None`) while the
    /// end date is unset.
    pub fn apply_selection(&mut self) -> Option<(NaiveDate, NaiveDate)> {
        let start = self.selection.start?;
        let end = self.selection.end?;

        self.selection.applied = Some((start, end));

        if let Some(callback) = &mut self.apply_callback {
            callback(start, end);
        }

        Some((start, end))
    }

    /// Discard the in-progress selection and fall back to the last applied
    /// pair, or to an empty selection when none was ever applied.
    pub fn cancel_selection(&mut self) {
        match self.selection.applied {
            Some((start, end)) => {
                self.selection.start = Some(start);
                self.selection.end = Some(end);
                self.selection.last_selected = Some(end);
            }
            None => {
                self.selection.start = None;
                self.selection.end = None;
                self.selection.last_selected = None;
            }
        }

        selection::recolor(&mut self.window, &self.config, &self.selection);
    }

    /// Live-update one of the trackable configuration fields from raw
    /// attribute text. Unparsable input is ignored.
    pub fn on_config_changed(&mut self, field: ConfigField, value: &str) {
        match field {
            ConfigField::MinSelectDate | ConfigField::MaxSelectDate => {
                let Some(date) = parse_date_input(value) else {
                    #[cfg(feature = "log")]
                    log::debug!("ignoring unparsable select date bound {value:?}");
                    return;
                };

                if field == ConfigField::MinSelectDate {
                    self.config.bounds.min = Some(date);
                } else {
                    self.config.bounds.max = Some(date);
                }

                // Regenerate past the navigation limits so the window keeps
                // its full size, then pull the selection back inside the
                // new bounds.
                self.window = MonthWindow::generate(&self.config, None, true);

                if let (Some(start), Some(end)) = (self.selection.start, self.selection.end) {
                    let (start, end) = selection::ordered(
                        self.config.bounds.clamp(start),
                        self.config.bounds.clamp(end),
                    );

                    self.selection.start = Some(start);
                    self.selection.end = Some(end);
                }

                selection::recolor(&mut self.window, &self.config, &self.selection);
            }
            ConfigField::MinBackwardMonth | ConfigField::MaxForwardMonth => {
                let Some(ym) = parse_month_year(value) else {
                    #[cfg(feature = "log")]
                    log::debug!("ignoring unparsable month bound {value:?}");
                    return;
                };

                if field == ConfigField::MinBackwardMonth {
                    self.config.min_backward_month = Some(ym);
                } else {
                    self.config.max_forward_month = Some(ym);
                }
            }
            ConfigField::ForwardMonths | ConfigField::BackwardMonths => {
                let count = value.trim().parse::<i64>().unwrap_or(0);

                if !is_month_valid(count) {
                    #[cfg(feature = "log")]
                    log::debug!("ignoring out of range month count {value:?}");
                    return;
                }

                if field == ConfigField::ForwardMonths {
                    self.config.forward_months = count as u32;
                } else {
                    self.config.backward_months = count as u32;
                }

                self.window = MonthWindow::generate(&self.config, None, false);
                selection::recolor(&mut self.window, &self.config, &self.selection);
            }
            ConfigField::StartDate | ConfigField::EndDate => {
                let Some(date) = parse_date_input(value) else {
                    #[cfg(feature = "log")]
                    log::debug!("ignoring unparsable selection date {value:?}");
                    return;
                };

                let date = self.config.bounds.clamp(date);

                if field == ConfigField::StartDate {
                    self.selection.start = Some(date);
                    self.config.start_date = Some(date);
                } else {
                    self.selection.end = Some(date);
                    self.config.end_date = Some(date);
                }

                if let (Some(start), Some(end)) = (self.selection.start, self.selection.end) {
                    let (start, end) = selection::ordered(start, end);
                    self.selection.start = Some(start);
                    self.selection.end = Some(end);
                    self.selection.last_selected = Some(end);
                    self.selection.applied = Some((start, end));
                }

                selection::recolor(&mut self.window, &self.config, &self.selection);
            }
        }
    }

    // --
    // -- Click state transitions
    // --

    fn set_start(&mut self, date: NaiveDate) {
        self.selection.start = Some(date);
        self.selection.end = None;
        selection::recolor(&mut self.window, &self.config, &self.selection);
    }

    /// Fix the end of the range: swap when the click landed before the
    /// start, then snap to the granularity the span implies. Clicking the
    /// start day again fixes a single-day range.
    fn set_end(&mut self, date: NaiveDate) {
        let Some(start) = self.selection.start else {
            return;
        };

        let (start, end) = selection::ordered(start, date);
        let (start, end) = selection::snap_range(&self.config, start, end);

        self.selection.start = Some(start);
        self.selection.end = Some(end);
        self.selection.last_selected = Some(date);

        selection::recolor(&mut self.window, &self.config, &self.selection);
        self.refresh_active_preset();
    }

    /// Third click in two-click mode: drop the pair and start over from
    /// the clicked day.
    fn restart_selection(&mut self, date: NaiveDate) {
        self.selection.end = None;
        self.selection.start = Some(date);
        self.active_preset = None;
        selection::recolor(&mut self.window, &self.config, &self.selection);
    }

    /// Third click in last-selected-date mode: the endpoint matching the
    /// cursor moves to the clicked day, the other one stays anchored.
    fn move_last_selected(&mut self, date: NaiveDate) {
        let (Some(start), Some(end)) = (self.selection.start, self.selection.end) else {
            return;
        };

        let cursor = self.selection.last_selected.unwrap_or(end);

        let (a, b) = if cursor == start {
            (date, end)
        } else {
            (start, date)
        };

        let (start, end) = selection::ordered(a, b);
        let (start, end) = selection::snap_range(&self.config, start, end);

        self.selection.start = Some(start);
        self.selection.end = Some(end);
        self.selection.last_selected = Some(date);

        selection::recolor(&mut self.window, &self.config, &self.selection);
    }

    // --
    // -- Hover preview
    // --

    fn hover(&mut self, at: CellRef, entering: bool) {
        if self.config.selection_mode == SelectionMode::DisableDayClick {
            return;
        }

        let Some(cell) = self.window.cell(at) else {
            return;
        };

        let date = cell.date;
        let unavailable = cell.is_unavailable;

        let Some(date) = date else {
            // Padding never hovers
            self.set_hover(at, false);
            return;
        };

        if unavailable {
            self.set_hover(at, false);
            return;
        }

        let Some(start) = self.selection.start else {
            self.set_hover(at, entering);
            return;
        };

        if self.selection.is_both_selected() {
            // Selection already fixed, no range preview
            self.set_hover(at, entering);
            return;
        }

        let anchor = match self.config.selection_mode {
            SelectionMode::LastSelectedDate => self.selection.last_selected.unwrap_or(start),
            _ => start,
        };

        match selection::preview_kind(&self.config, anchor, date) {
            SelectMode::Monthly => {
                selection::paint_month(&mut self.window, date, Marker::Hover(entering));
            }
            SelectMode::Weekly => {
                selection::paint_week(&mut self.window, date, Marker::Hover(entering));
            }
            _ => self.set_hover(at, entering),
        }
    }

    fn set_hover(&mut self, at: CellRef, value: bool) {
        if let Some(cell) = self.window.cell_mut(at) {
            if !cell.is_padding() {
                cell.is_hover = value;
            }
        }
    }

    fn refresh_active_preset(&mut self) {
        let reference = self.config.bounds.max.unwrap_or(self.config.today);

        self.active_preset = self
            .selection
            .start
            .and_then(|start| presets::matching_preset(&self.config.presets, reference, start));
    }
}

impl fmt::Debug for RangeCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeCalendar")
            .field("config", &self.config)
            .field("window", &self.window)
            .field("selection", &self.selection)
            .field("active_preset", &self.active_preset)
            .finish_non_exhaustive()
    }
}
