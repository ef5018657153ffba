use chrono::{Datelike, Duration, NaiveDate};

/// Largest number of extra months accepted for the forward or backward count.
pub const MAX_MONTHS_ALLOWED: i64 = 6;

/// Smallest number of extra months accepted for the forward or backward count.
pub const MIN_MONTHS_ALLOWED: i64 = 1;

/// Check that a forward or backward month count is usable. Out of range
/// values are not an error, they just mean "add zero months".
pub fn is_month_valid(count: i64) -> bool {
    (MIN_MONTHS_ALLOWED..=MAX_MONTHS_ALLOWED).contains(&count)
}

/// A calendar month, identified by its year and 0-based month number.
///
/// All month arithmetic in the crate goes through this type, so year
/// wrap-around is handled in a single place.
///
/// ```
/// use range_calendar::YearMonth;
///
/// let dec = YearMonth::new(2013, 11).unwrap();
/// assert_eq!(dec.succ(), YearMonth::new(2014, 0));
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month0: u32,
}

impl YearMonth {
    /// Build from a year and a 0-based month (0 = January). Returns `None`
    /// when the month number is out of range.
    pub fn new(year: i32, month0: u32) -> Option<Self> {
        if month0 > 11 {
            return None;
        }

        // Reject years where the first of the month cannot be represented.
        NaiveDate::from_ymd_opt(year, month0 + 1, 1)?;
        Some(Self { year, month0 })
    }

    /// The month containing a given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self { year: date.year(), month0: date.month0() }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    /// 0-based month number, 0 = January.
    pub fn month0(self) -> u32 {
        self.month0
    }

    /// First calendar day of this month.
    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1)
            .expect("validated by constructor")
    }

    /// Last calendar day of this month.
    pub fn last_day(self) -> NaiveDate {
        match self.succ() {
            Some(next) => next.first_day() - Duration::days(1),
            // December of the last representable year
            None => NaiveDate::from_ymd_opt(self.year, 12, 31)
                .unwrap_or_else(|| self.first_day() + Duration::days(27)),
        }
    }

    /// The following calendar month.
    pub fn succ(self) -> Option<Self> {
        if self.month0 == 11 {
            Self::new(self.year.checked_add(1)?, 0)
        } else {
            Self::new(self.year, self.month0 + 1)
        }
    }

    /// The preceding calendar month.
    pub fn pred(self) -> Option<Self> {
        if self.month0 == 0 {
            Self::new(self.year.checked_sub(1)?, 11)
        } else {
            Self::new(self.year, self.month0 - 1)
        }
    }
}

/// Parse a "M/YYYY" month string with a 0-based month number. Empty or
/// malformed input yields `None`, never an error.
pub fn parse_month_year(input: &str) -> Option<YearMonth> {
    let (month, year) = input.trim().split_once('/')?;
    let month0: u32 = month.trim().parse().ok()?;
    let year: i32 = year.trim().parse().ok()?;
    YearMonth::new(year, month0)
}

/// Parse a date from "MM/DD/YYYY" or "MM-DD-YYYY" input. Anything that does
/// not name a real calendar day yields `None`.
pub fn parse_date_input(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    if input.is_empty() {
        return None;
    }

    ["%m/%d/%Y", "%m-%d-%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
}

/// Walk back from `date` to the closest day whose weekday matches the
/// configured start of week (0 = Sunday .. 6 = Saturday).
pub(crate) fn week_start_of(date: NaiveDate, start_day_of_week: u32) -> NaiveDate {
    let back = (7 + date.weekday().num_days_from_sunday() - start_day_of_week) % 7;
    date - Duration::days(back.into())
}
