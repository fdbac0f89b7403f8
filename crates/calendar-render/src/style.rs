//! Rendering a date in the selected style.
//!
//! Only [`RenderStyle::VerboseCalendar`] consults the calendar selection.
//! The other styles are fixed machine-readable formats of the Gregorian
//! date at UTC midnight.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveTime, SecondsFormat};
use serde::Serialize;
use tracing::{debug, warn};

use crate::calendar::convert;
use crate::date::CalendarDate;
use crate::error::{RenderError, Result};
use crate::options::RenderOptions;
use crate::sentence::compose;

/// How a date is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum RenderStyle {
    /// English sentence in the selected calendar (`gce-verbose`).
    #[default]
    #[serde(rename = "gce-verbose")]
    VerboseCalendar,
    /// `2025-09-09` (`iso-date`).
    #[serde(rename = "iso-date")]
    IsoDate,
    /// `2025-09-09T00:00:00Z` (`rfc3339`).
    #[serde(rename = "rfc3339")]
    Rfc3339,
    /// Seconds since 1970-01-01T00:00:00Z (`unix`).
    #[serde(rename = "unix")]
    UnixEpoch,
    /// `2025-W37-2` (`iso-week`).
    #[serde(rename = "iso-week")]
    IsoWeek,
}

impl RenderStyle {
    pub const ALL: [RenderStyle; 5] = [
        RenderStyle::VerboseCalendar,
        RenderStyle::IsoDate,
        RenderStyle::Rfc3339,
        RenderStyle::UnixEpoch,
        RenderStyle::IsoWeek,
    ];

    /// The configuration name of this style (e.g. `"iso-week"`).
    pub fn name(self) -> &'static str {
        match self {
            RenderStyle::VerboseCalendar => "gce-verbose",
            RenderStyle::IsoDate => "iso-date",
            RenderStyle::Rfc3339 => "rfc3339",
            RenderStyle::UnixEpoch => "unix",
            RenderStyle::IsoWeek => "iso-week",
        }
    }

    /// Resolve a style name, substituting [`RenderStyle::VerboseCalendar`]
    /// for anything unrecognised (logged at `warn` level).
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|err| {
            warn!(%err, "falling back to the gce-verbose style");
            RenderStyle::default()
        })
    }
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RenderStyle {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        RenderStyle::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| RenderError::UnknownStyle(format!("'{name}'")))
    }
}

/// Render `date` according to `options`.
///
/// This never fails: every [`CalendarDate`] is valid, and unknown style or
/// calendar names were already resolved when `options` was built.
///
/// ```
/// use calendar_render::{render, CalendarDate, CalendarKind, RenderOptions, RenderStyle};
///
/// let date = CalendarDate::new(2025, 9, 9).unwrap();
/// let options = RenderOptions::new(RenderStyle::VerboseCalendar, CalendarKind::Buddhist);
/// assert_eq!(
///     render(&date, &options),
///     "Tuesday, September 9th of the year 2568 of the Buddhist Era"
/// );
/// ```
pub fn render(date: &CalendarDate, options: &RenderOptions) -> String {
    debug!(
        %date,
        style = %options.style(),
        calendar = %options.calendar(),
        "rendering date"
    );

    match options.style() {
        RenderStyle::IsoDate => date.to_string(),
        RenderStyle::Rfc3339 => format_rfc3339(date),
        RenderStyle::UnixEpoch => unix_seconds(date).to_string(),
        RenderStyle::IsoWeek => format_iso_week(date),
        RenderStyle::VerboseCalendar => {
            let sentence = compose(date, &convert(date, options.calendar()));
            match options.lead_in() {
                Some(lead_in) => format!("{lead_in} {sentence}."),
                None => sentence,
            }
        }
    }
}

/// Validate `year`/`month`/`day` and render the resulting date.
///
/// # Errors
///
/// Returns the [`CalendarDate::new`] error for a date that does not exist,
/// e.g. February 30th.
pub fn render_ymd(year: i32, month: u32, day: u32, options: &RenderOptions) -> Result<String> {
    let date = CalendarDate::new(year, month, day)?;
    Ok(render(&date, options))
}

/// Seconds from the Unix epoch to UTC midnight of `date` (negative before 1970).
pub fn unix_seconds(date: &CalendarDate) -> i64 {
    date.as_naive().and_time(NaiveTime::MIN).and_utc().timestamp()
}

fn format_rfc3339(date: &CalendarDate) -> String {
    date.as_naive()
        .and_time(NaiveTime::MIN)
        .and_utc()
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// `YYYY-Www-D` from the ISO 8601 week-numbering year, week and weekday.
fn format_iso_week(date: &CalendarDate) -> String {
    let naive = date.as_naive();
    let week = naive.iso_week();
    format!(
        "{}-W{:02}-{}",
        format_year(week.year()),
        week.week(),
        naive.weekday().number_from_monday()
    )
}

/// Four-digit year with a sign outside 0..=9999, matching chrono's `%Y`.
fn format_year(year: i32) -> String {
    match year {
        0..=9999 => format!("{year:04}"),
        y if y < 0 => format!("-{:04}", y.unsigned_abs()),
        y => format!("+{y}"),
    }
}
