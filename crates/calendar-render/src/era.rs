//! Japanese imperial era resolution.
//!
//! The era table is a fixed list ordered by start date, newest first. A
//! date belongs to the first era whose start is on or before it; years
//! are counted from 1 in the era's first (partial) Gregorian year.

use serde::Serialize;

use crate::date::CalendarDate;

/// Name reported for dates before the first tabulated era.
pub const PRE_MEIJI: &str = "Pre-Meiji";

/// An imperial era and the Gregorian day it began (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Era {
    pub name: &'static str,
    pub start_year: i32,
    pub start_month: u32,
    pub start_day: u32,
}

impl Era {
    const fn new(name: &'static str, start_year: i32, start_month: u32, start_day: u32) -> Self {
        Self {
            name,
            start_year,
            start_month,
            start_day,
        }
    }

    /// Whether `date` falls on or after this era's first day.
    pub fn begins_on_or_before(&self, date: &CalendarDate) -> bool {
        (date.year(), date.month(), date.day())
            >= (self.start_year, self.start_month, self.start_day)
    }
}

/// Modern eras, newest first.
pub const JAPANESE_ERAS: [Era; 5] = [
    Era::new("Reiwa", 2019, 5, 1),
    Era::new("Heisei", 1989, 1, 8),
    Era::new("Showa", 1926, 12, 25),
    Era::new("Taisho", 1912, 7, 30),
    Era::new("Meiji", 1868, 10, 23),
];

/// An era name paired with the year counted within that era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EraYear {
    pub name: &'static str,
    pub year: i64,
}

/// Map a Gregorian date to its Japanese era and era year.
///
/// Dates before Meiji 1 (1868-10-23) resolve to [`PRE_MEIJI`] with the
/// unmodified Gregorian year.
///
/// ```
/// use calendar_render::{resolve_era, CalendarDate};
///
/// let era = resolve_era(&CalendarDate::new(2019, 5, 1).unwrap());
/// assert_eq!((era.name, era.year), ("Reiwa", 1));
/// ```
pub fn resolve_era(date: &CalendarDate) -> EraYear {
    JAPANESE_ERAS
        .iter()
        .find(|era| era.begins_on_or_before(date))
        .map(|era| EraYear {
            name: era.name,
            year: date.year() as i64 - era.start_year as i64 + 1,
        })
        .unwrap_or(EraYear {
            name: PRE_MEIJI,
            year: date.year() as i64,
        })
}
