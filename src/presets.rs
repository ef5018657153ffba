use chrono::{Duration, NaiveDate};

use crate::availability::Bounds;

/// A "prior N days" shortcut offered next to the calendar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangePreset {
    /// Length of the range in days, counting the reference day itself.
    pub value: u32,
    /// Marks the preset applied automatically at initialization. At most
    /// one preset should carry this flag; the first one wins.
    pub is_default: bool,
}

impl RangePreset {
    pub fn new(value: u32) -> Self {
        Self { value, is_default: false }
    }

    pub fn new_default(value: u32) -> Self {
        Self { value, is_default: true }
    }
}

/// Index of the preset applied at initialization, if any.
pub(crate) fn default_index(presets: &[RangePreset]) -> Option<usize> {
    presets.iter().position(|preset| preset.is_default)
}

/// Concrete start/end pair for a preset, counted backward from the
/// reference day and clamped inward to availability.
pub(crate) fn preset_span(value: u32, reference: NaiveDate, bounds: &Bounds) -> (NaiveDate, NaiveDate) {
    let length = i64::from(value).max(1);
    let start = reference - Duration::days(length - 1);
    (bounds.clamp(start), bounds.clamp(reference))
}

/// Find the preset whose span matches the current start date, measured
/// against the reference day. Drives the "active" preset highlight.
pub(crate) fn matching_preset(
    presets: &[RangePreset],
    reference: NaiveDate,
    start: NaiveDate,
) -> Option<usize> {
    let day_diff = (reference - start).num_days();

    presets
        .iter()
        .position(|preset| i64::from(preset.value) - 1 == day_diff)
}
