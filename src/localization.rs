//! Timezone-aware helpers for hosts that receive instants rather than
//! calendar dates.

use chrono::{NaiveDate, TimeZone, Utc};

/// Convert a millisecond UNIX timestamp into the calendar day it falls on
/// in the given timezone. Timestamps outside the representable range yield
/// `None`.
///
/// ```
/// use chrono_tz::America::New_York;
/// use range_calendar::localization::local_day_from_timestamp_ms;
///
/// // 2014-11-03 02:30 UTC is still 2014-11-02 on the US east coast.
/// let day = local_day_from_timestamp_ms(1_415_413_800_000, &New_York);
/// assert_eq!(day.unwrap().to_string(), "2014-11-02");
/// ```
pub fn local_day_from_timestamp_ms<Tz: TimeZone>(timestamp_ms: i64, tz: &Tz) -> Option<NaiveDate> {
    let utc = Utc.timestamp_millis_opt(timestamp_ms).single()?;
    Some(utc.with_timezone(tz).date_naive())
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono_tz::America::New_York;
    use chrono_tz::Tz;

    #[test]
    fn day_boundary_depends_on_timezone() {
        // 2014-11-03 02:30:00 UTC
        let ts = 1_415_413_800_000;

        let utc_day = local_day_from_timestamp_ms(ts, &Utc).unwrap();
        let ny_day = local_day_from_timestamp_ms(ts, &New_York).unwrap();

        assert_eq!(utc_day.to_string(), "2014-11-03");
        assert_eq!(ny_day.to_string(), "2014-11-02");
    }

    #[test]
    fn out_of_range_timestamp() {
        assert_eq!(local_day_from_timestamp_ms(i64::MAX, &Tz::UTC), None);
    }
}
