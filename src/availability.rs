use chrono::NaiveDate;

/// Minimum and maximum selectable dates. Either side may be open.
///
/// Comparison is by calendar day only; when bounds come from timestamps with
/// an attached timezone, the host is expected to normalize them to that
/// zone's local day first (see the `localization` module).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bounds {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

impl Bounds {
    /// Whether a date falls outside the selectable range.
    ///
    /// ```
    /// use range_calendar::availability::Bounds;
    /// use chrono::NaiveDate;
    ///
    /// let min = NaiveDate::from_ymd_opt(2014, 11, 3).unwrap();
    /// let bounds = Bounds { min: Some(min), max: None };
    /// assert!(bounds.is_unavailable(min.pred_opt().unwrap()));
    /// assert!(!bounds.is_unavailable(min));
    /// ```
    pub fn is_unavailable(&self, date: NaiveDate) -> bool {
        self.min.is_some_and(|min| date < min) || self.max.is_some_and(|max| date > max)
    }

    /// Move an unavailable date inward, one bound at a time, until it lands
    /// on a selectable day. Available dates pass through unchanged.
    pub(crate) fn clamp(&self, date: NaiveDate) -> NaiveDate {
        if let Some(min) = self.min {
            if date < min {
                return min;
            }
        }

        if let Some(max) = self.max {
            if date > max {
                return max;
            }
        }

        date
    }
}

#[cfg(test)]
mod test {
    use super::Bounds;
    use crate::date;

    #[test]
    fn open_bounds_accept_everything() {
        let bounds = Bounds::default();
        assert!(!bounds.is_unavailable(date!("1987-06-05")));
        assert_eq!(bounds.clamp(date!("1987-06-05")), date!("1987-06-05"));
    }

    #[test]
    fn clamping_moves_inward() {
        let bounds = Bounds {
            min: Some(date!("2014-11-03")),
            max: Some(date!("2014-12-24")),
        };

        assert_eq!(bounds.clamp(date!("2014-10-01")), date!("2014-11-03"));
        assert_eq!(bounds.clamp(date!("2015-01-08")), date!("2014-12-24"));
        assert_eq!(bounds.clamp(date!("2014-11-20")), date!("2014-11-20"));
    }
}
