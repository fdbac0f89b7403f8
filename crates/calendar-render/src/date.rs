//! Validated proleptic Gregorian calendar dates.

use std::fmt;
use std::str::FromStr;

use chrono::format::{self, Parsed, StrftimeItems};
use chrono::{Datelike, NaiveDate, Utc, Weekday};
use serde::{Serialize, Serializer};

use crate::error::{RenderError, Result};
use crate::jdn::{gregorian_to_jdn, JulianDay};

/// Whether `year` is a leap year under proleptic Gregorian rules.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or `None` if `month` is not 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// A whole calendar day in the proleptic Gregorian calendar.
///
/// Construction validates the day against the month length (including
/// leap years), so every value of this type is a real date. Years are
/// limited to the range `chrono::NaiveDate` can represent (roughly
/// ±262,000), which keeps every rendering path infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    inner: NaiveDate,
}

impl CalendarDate {
    /// Create a date from year, month (1-12) and day (1-31).
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidMonth`] or [`RenderError::InvalidDay`]
    /// for components that do not form a real date, and
    /// [`RenderError::YearOutOfRange`] when the year is outside the
    /// supported range. Nothing is clamped or wrapped.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        let max_day = days_in_month(year, month).ok_or(RenderError::InvalidMonth { month })?;
        if day == 0 || day > max_day {
            return Err(RenderError::InvalidDay {
                year,
                month,
                day,
                max_day,
            });
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(|inner| Self { inner })
            .ok_or(RenderError::YearOutOfRange { year })
    }

    /// Today's date in UTC, read from the system clock.
    pub fn today_utc() -> Self {
        Self {
            inner: Utc::now().date_naive(),
        }
    }

    pub fn year(&self) -> i32 {
        self.inner.year()
    }

    pub fn month(&self) -> u32 {
        self.inner.month()
    }

    pub fn day(&self) -> u32 {
        self.inner.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.inner.weekday()
    }

    /// The Julian Day Number of this date.
    pub fn julian_day(&self) -> JulianDay {
        gregorian_to_jdn(self.year(), self.month(), self.day())
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.inner
    }

    /// The following day, if it is still within the supported range.
    pub fn succ(&self) -> Option<Self> {
        self.inner.succ_opt().map(|inner| Self { inner })
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(inner: NaiveDate) -> Self {
        Self { inner }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.format("%Y-%m-%d"))
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parses `%Y-%m-%d` text such as `2025-09-09` or `-0044-03-15`.
///
/// Years beyond four digits need an explicit sign (`+12345-01-01`).
/// Components chrono rejects outright (month 13, day 32) are reported as
/// [`RenderError::MalformedDate`]; a day past the end of its month is
/// reported as [`RenderError::InvalidDay`].
impl FromStr for CalendarDate {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let malformed = |reason: &dyn fmt::Display| {
            RenderError::MalformedDate(format!("'{trimmed}' ({reason}, expected YYYY-MM-DD)"))
        };

        // `Parsed` keeps the components without building a date, so
        // February 30th still reaches `new` and gets its `max_day`.
        let mut parsed = Parsed::new();
        format::parse(&mut parsed, trimmed, StrftimeItems::new("%Y-%m-%d"))
            .map_err(|e| malformed(&e))?;

        match (parsed.year(), parsed.month(), parsed.day()) {
            (Some(year), Some(month), Some(day)) => Self::new(year, month, day),
            _ => Err(malformed(&"incomplete date")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_date() {
        let date = CalendarDate::new(2025, 9, 9).unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 9);
        assert_eq!(date.day(), 9);
        assert_eq!(date.weekday(), Weekday::Tue);
    }

    #[test]
    fn test_leap_day_rules() {
        assert!(CalendarDate::new(2024, 2, 29).is_ok());
        assert!(CalendarDate::new(2000, 2, 29).is_ok());
        assert_eq!(
            CalendarDate::new(1900, 2, 29).unwrap_err(),
            RenderError::InvalidDay {
                year: 1900,
                month: 2,
                day: 29,
                max_day: 28
            }
        );
    }

    #[test]
    fn test_invalid_components_are_rejected() {
        assert_eq!(
            CalendarDate::new(2025, 13, 1).unwrap_err(),
            RenderError::InvalidMonth { month: 13 }
        );
        assert_eq!(
            CalendarDate::new(2025, 0, 1).unwrap_err(),
            RenderError::InvalidMonth { month: 0 }
        );
        assert!(matches!(
            CalendarDate::new(2025, 4, 31),
            Err(RenderError::InvalidDay { max_day: 30, .. })
        ));
        assert!(matches!(
            CalendarDate::new(2025, 1, 0),
            Err(RenderError::InvalidDay { day: 0, .. })
        ));
    }

    #[test]
    fn test_negative_years_follow_proleptic_rules() {
        // Astronomical year 0 and -4 are leap years, -1 is not.
        assert!(CalendarDate::new(0, 2, 29).is_ok());
        assert!(CalendarDate::new(-4, 2, 29).is_ok());
        assert!(CalendarDate::new(-1, 2, 29).is_err());
    }

    #[test]
    fn test_year_out_of_range() {
        assert_eq!(
            CalendarDate::new(i32::MAX, 1, 1).unwrap_err(),
            RenderError::YearOutOfRange { year: i32::MAX }
        );
    }

    #[test]
    fn test_julian_day_matches_chrono_day_count() {
        // num_days_from_ce counts 0001-01-01 as day 1, which is JDN 1721426.
        for (y, m, d) in [(2025, 9, 9), (1, 1, 1), (-500, 6, 15), (9999, 12, 31)] {
            let date = CalendarDate::new(y, m, d).unwrap();
            let expected = date.as_naive().num_days_from_ce() as i64 + 1_721_425;
            assert_eq!(date.julian_day().get(), expected, "{date}");
        }
    }

    #[test]
    fn test_parse_iso_date() {
        let date: CalendarDate = "2025-09-09".parse().unwrap();
        assert_eq!(date, CalendarDate::new(2025, 9, 9).unwrap());

        let bc: CalendarDate = "-0044-03-15".parse().unwrap();
        assert_eq!(bc.year(), -44);

        let padded: CalendarDate = "  1989-01-08 ".parse().unwrap();
        assert_eq!(padded.day(), 8);

        let short: CalendarDate = "2025-9-9".parse().unwrap();
        assert_eq!(short, CalendarDate::new(2025, 9, 9).unwrap());
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        let inputs = [
            "",
            "2025",
            "2025/09/09",
            "2025-09-09-01",
            "abcd-ef-gh",
            "--2025-01-01",
            "09/09/2025",
        ];
        for input in inputs {
            assert!(
                matches!(input.parse::<CalendarDate>(), Err(RenderError::MalformedDate(_))),
                "expected malformed: {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_reports_invalid_day() {
        assert_eq!(
            "2023-02-29".parse::<CalendarDate>().unwrap_err(),
            RenderError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29,
                max_day: 28
            }
        );
        assert!(matches!(
            "2025-04-31".parse::<CalendarDate>(),
            Err(RenderError::InvalidDay { max_day: 30, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_out_of_range_components() {
        for input in ["2025-13-01", "2025-00-10", "2025-01-32"] {
            let err = input.parse::<CalendarDate>().unwrap_err();
            assert!(matches!(err, RenderError::MalformedDate(_)), "{input:?}: {err:?}");
            assert!(err.to_string().contains(input), "{err}");
        }
    }

    #[test]
    fn test_parse_signed_and_wide_years() {
        let wide: CalendarDate = "+12345-06-01".parse().unwrap();
        assert_eq!(wide.year(), 12345);
        assert_eq!(wide.to_string(), "+12345-06-01");

        let bc: CalendarDate = "-0044-03-15".parse().unwrap();
        assert_eq!((bc.year(), bc.month(), bc.day()), (-44, 3, 15));
        assert_eq!(bc.to_string().parse::<CalendarDate>().unwrap(), bc);
    }

    #[test]
    fn test_parse_year_beyond_supported_range() {
        assert_eq!(
            "+300000-01-01".parse::<CalendarDate>().unwrap_err(),
            RenderError::YearOutOfRange { year: 300_000 }
        );
    }

    #[test]
    fn test_display_is_iso() {
        assert_eq!(CalendarDate::new(33, 4, 3).unwrap().to_string(), "0033-04-03");
        assert_eq!(CalendarDate::new(-1, 12, 31).unwrap().to_string(), "-0001-12-31");
    }
}
