//! Conversion of a Gregorian date into each supported calendar system.
//!
//! [`convert`] is a pure function dispatching on [`CalendarKind`]. The
//! Julian and Islamic branches go through the Julian Day Number bridge,
//! the Japanese branch through the era table, and the remaining branches
//! are fixed year offsets.
//!
//! The Islamic result is the tabular (arithmetic) calendar and the Hebrew
//! result is a year-only approximation; neither is authoritative for
//! religious observance.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::warn;

use crate::date::CalendarDate;
use crate::era::resolve_era;
use crate::error::RenderError;
use crate::jdn::{jdn_to_islamic_civil, jdn_to_julian};

/// Offset from the Gregorian year to the Thai solar (Buddhist Era) year.
pub const BUDDHIST_ERA_OFFSET: i64 = 543;

/// Gregorian year of Minguo 1 (1912) minus one.
pub const MINGUO_EPOCH_OFFSET: i64 = 1911;

const GREGORIAN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const ISLAMIC_MONTHS: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-awwal",
    "Rabi' al-thani",
    "Jumada al-awwal",
    "Jumada al-thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

/// A calendar system a date can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarKind {
    /// Proleptic Gregorian (identity).
    #[default]
    Gregorian,
    /// Proleptic Julian.
    Julian,
    /// Thai solar calendar, Buddhist Era years.
    Buddhist,
    /// Republic of China (Taiwan) Minguo years.
    Minguo,
    /// Japanese imperial eras from Meiji onward.
    Japanese,
    /// Tabular (civil) Hijri.
    Islamic,
    /// Approximate Anno Mundi year only.
    Hebrew,
}

impl CalendarKind {
    pub const ALL: [CalendarKind; 7] = [
        CalendarKind::Gregorian,
        CalendarKind::Julian,
        CalendarKind::Buddhist,
        CalendarKind::Minguo,
        CalendarKind::Japanese,
        CalendarKind::Islamic,
        CalendarKind::Hebrew,
    ];

    /// The configuration name of this calendar (e.g. `"minguo"`).
    pub fn name(self) -> &'static str {
        match self {
            CalendarKind::Gregorian => "gregorian",
            CalendarKind::Julian => "julian",
            CalendarKind::Buddhist => "buddhist",
            CalendarKind::Minguo => "minguo",
            CalendarKind::Japanese => "japanese",
            CalendarKind::Islamic => "islamic",
            CalendarKind::Hebrew => "hebrew",
        }
    }

    /// Whether output in this calendar is an arithmetic approximation.
    pub fn is_approximate(self) -> bool {
        matches!(self, CalendarKind::Islamic | CalendarKind::Hebrew)
    }

    /// Resolve a calendar name, substituting [`CalendarKind::Gregorian`]
    /// for anything unrecognised.
    ///
    /// Unknown names are not an error for rendering purposes; a `warn`
    /// event is logged and the default calendar is used.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|err| {
            warn!(%err, "falling back to the gregorian calendar");
            CalendarKind::default()
        })
    }
}

impl fmt::Display for CalendarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CalendarKind {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, RenderError> {
        let name = s.trim();
        CalendarKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| RenderError::UnknownCalendar(format!("'{name}'")))
    }
}

/// A date expressed in a target calendar.
///
/// `month` is the month number within the target calendar. For the
/// year-offset calendars and the Hebrew approximation it is the Gregorian
/// month, since only the year changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertedDate {
    pub calendar: CalendarKind,
    pub year: i64,
    pub month: u32,
    pub month_name: &'static str,
    pub day: u32,
    /// Era label, set only for the Japanese calendar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub era: Option<&'static str>,
}

/// English name of a Gregorian (or Julian) month, 1-based.
pub fn gregorian_month_name(month: u32) -> &'static str {
    month_name(&GREGORIAN_MONTHS, month)
}

/// Transliterated name of a Hijri month, 1-based.
pub fn islamic_month_name(month: u32) -> &'static str {
    month_name(&ISLAMIC_MONTHS, month)
}

fn month_name(table: &[&'static str; 12], month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| table.get(i as usize))
        .copied()
        .unwrap_or("")
}

/// Approximate Hebrew (Anno Mundi) year for a Gregorian date.
///
/// The year is taken to turn over on September 20, a coarse stand-in for
/// Rosh Hashanah, which actually moves between early September and early
/// October.
pub fn hebrew_year_approx(year: i32, month: u32, day: u32) -> i64 {
    let year = year as i64;
    match month {
        m if m > 9 => year + 3761,
        9 if day >= 20 => year + 3761,
        _ => year + 3760,
    }
}

/// Convert a Gregorian date into `kind`.
///
/// ```
/// use calendar_render::{convert, CalendarDate, CalendarKind};
///
/// let date = CalendarDate::new(2025, 9, 9).unwrap();
/// let julian = convert(&date, CalendarKind::Julian);
/// assert_eq!((julian.year, julian.month_name, julian.day), (2025, "August", 27));
/// ```
pub fn convert(date: &CalendarDate, kind: CalendarKind) -> ConvertedDate {
    let year = date.year() as i64;
    let month = date.month();
    let day = date.day();

    let same_month = |calendar_year: i64, era: Option<&'static str>| ConvertedDate {
        calendar: kind,
        year: calendar_year,
        month,
        month_name: gregorian_month_name(month),
        day,
        era,
    };

    match kind {
        CalendarKind::Gregorian => same_month(year, None),
        CalendarKind::Buddhist => same_month(year + BUDDHIST_ERA_OFFSET, None),
        CalendarKind::Minguo => same_month(year - MINGUO_EPOCH_OFFSET, None),
        CalendarKind::Japanese => {
            let era = resolve_era(date);
            same_month(era.year, Some(era.name))
        }
        CalendarKind::Hebrew => same_month(hebrew_year_approx(date.year(), month, day), None),
        CalendarKind::Julian => {
            let (jy, jm, jd) = jdn_to_julian(date.julian_day());
            ConvertedDate {
                calendar: kind,
                year: jy,
                month: jm,
                month_name: gregorian_month_name(jm),
                day: jd,
                era: None,
            }
        }
        CalendarKind::Islamic => {
            let (iy, im, id) = jdn_to_islamic_civil(date.julian_day());
            ConvertedDate {
                calendar: kind,
                year: iy,
                month: im,
                month_name: islamic_month_name(im),
                day: id,
                era: None,
            }
        }
    }
}
