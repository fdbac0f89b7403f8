//! Julian Day Number bridge between calendar systems.
//!
//! Every non-trivial calendar conversion in this crate goes through a
//! [`JulianDay`]: the Gregorian input is mapped to its day count, and the
//! day count is mapped into the target calendar. All integer divisions are
//! floor divisions (`div_euclid`), so the formulas stay exact for years
//! before -4800 where truncating division would drift by a day.
//!
//! # Functions
//!
//! - [`gregorian_to_jdn`] / [`jdn_to_gregorian`] — proleptic Gregorian
//! - [`julian_to_jdn`] / [`jdn_to_julian`] — proleptic Julian
//! - [`islamic_civil_to_jdn`] / [`jdn_to_islamic_civil`] — tabular Hijri

use std::fmt;
use std::ops::{Add, Sub};

use serde::Serialize;

/// JDN of 1 Muharram AH 1 in the civil (Friday) epoch, Julian 622-07-16.
pub const ISLAMIC_CIVIL_EPOCH: i64 = 1_948_440;

/// JDN of the Unix epoch, 1970-01-01.
pub const UNIX_EPOCH_JDN: i64 = 2_440_588;

/// Days in one 30-year cycle of the tabular Islamic calendar.
const ISLAMIC_CYCLE_DAYS: i64 = 10_631;

/// A calendar-neutral day count (astronomical Julian Day Number at noon).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct JulianDay(i64);

impl JulianDay {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for JulianDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {}", self.0)
    }
}

impl Add<i64> for JulianDay {
    type Output = JulianDay;

    fn add(self, days: i64) -> JulianDay {
        JulianDay(self.0 + days)
    }
}

impl Sub for JulianDay {
    type Output = i64;

    fn sub(self, other: JulianDay) -> i64 {
        self.0 - other.0
    }
}

/// Shifted-year components shared by the Gregorian and Julian forward transforms.
///
/// The year is rebased to -4800 and starts in March so the leap day falls
/// at the end of the computational year.
fn march_based(year: i64, month: u32) -> (i64, i64) {
    let a = (14 - month as i64).div_euclid(12);
    let y = year + 4800 - a;
    let m = month as i64 + 12 * a - 3;
    (y, m)
}

/// Convert a proleptic Gregorian date to its Julian Day Number.
///
/// The caller is responsible for passing a valid date; out-of-range
/// components are not rejected, they simply roll into adjacent days.
///
/// ```
/// use calendar_render::jdn::gregorian_to_jdn;
///
/// assert_eq!(gregorian_to_jdn(2000, 1, 1).get(), 2_451_545);
/// assert_eq!(gregorian_to_jdn(-4713, 11, 24).get(), 0);
/// ```
pub fn gregorian_to_jdn(year: i32, month: u32, day: u32) -> JulianDay {
    let (y, m) = march_based(year as i64, month);
    let jdn = day as i64 + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4)
        - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045;
    JulianDay(jdn)
}

/// Convert a Julian Day Number back to a proleptic Gregorian `(year, month, day)`.
pub fn jdn_to_gregorian(jdn: JulianDay) -> (i64, u32, u32) {
    let a = jdn.0 + 32044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);

    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = 100 * b + d - 4800 + m.div_euclid(10);
    (year, month as u32, day as u32)
}

/// Convert a proleptic Julian calendar date to its Julian Day Number.
pub fn julian_to_jdn(year: i64, month: u32, day: u32) -> JulianDay {
    let (y, m) = march_based(year, month);
    let jdn = day as i64 + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - 32083;
    JulianDay(jdn)
}

/// Convert a Julian Day Number to a proleptic Julian calendar `(year, month, day)`.
///
/// ```
/// use calendar_render::jdn::{gregorian_to_jdn, jdn_to_julian};
///
/// // The Gregorian reform: 1582-10-15 followed Julian 1582-10-04.
/// assert_eq!(jdn_to_julian(gregorian_to_jdn(1582, 10, 15)), (1582, 10, 5));
/// ```
pub fn jdn_to_julian(jdn: JulianDay) -> (i64, u32, u32) {
    let c = jdn.0 + 32082;
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);

    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = d - 4800 + m.div_euclid(10);
    (year, month as u32, day as u32)
}

/// Convert a Julian Day Number to a tabular (civil) Hijri `(year, month, day)`.
///
/// Uses the arithmetic 30-year cycle with 11 leap years; no lookup table
/// and no moon-sighting correction. Results may differ by a day or two
/// from observational calendars.
pub fn jdn_to_islamic_civil(jdn: JulianDay) -> (i64, u32, u32) {
    let l = jdn.0 - ISLAMIC_CIVIL_EPOCH + 10_632;
    let n = (l - 1).div_euclid(ISLAMIC_CYCLE_DAYS);
    // Day within the current cycle, offset so the arithmetic below stays positive.
    let l = l - ISLAMIC_CYCLE_DAYS * n + 354;

    let j = (10_985 - l).div_euclid(5316) * (50 * l).div_euclid(17_719)
        + l.div_euclid(5670) * (43 * l).div_euclid(15_238);
    let l = l
        - (30 - j).div_euclid(15) * (17_719 * j).div_euclid(50)
        - j.div_euclid(16) * (15_238 * j).div_euclid(43)
        + 29;

    let month = (24 * l).div_euclid(709);
    let day = l - (709 * month).div_euclid(24);
    let year = 30 * n + j - 30;
    (year, month as u32, day as u32)
}

/// Convert a tabular (civil) Hijri date to its Julian Day Number.
pub fn islamic_civil_to_jdn(year: i64, month: u32, day: u32) -> JulianDay {
    let month_days = (59 * (month as i64 - 1) + 1).div_euclid(2);
    let jdn = day as i64
        + month_days
        + (year - 1) * 354
        + (3 + 11 * year).div_euclid(30)
        + ISLAMIC_CIVIL_EPOCH
        - 1;
    JulianDay(jdn)
}
