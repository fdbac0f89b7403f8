//! Natural-language date sentences.

use chrono::Weekday;

use crate::calendar::{CalendarKind, ConvertedDate};
use crate::date::CalendarDate;
use crate::era::PRE_MEIJI;

/// English ordinal suffix for a day of the month.
///
/// ```
/// use calendar_render::ordinal_suffix;
///
/// assert_eq!(ordinal_suffix(1), "st");
/// assert_eq!(ordinal_suffix(12), "th");
/// assert_eq!(ordinal_suffix(23), "rd");
/// ```
pub fn ordinal_suffix(day: u32) -> &'static str {
    // 11, 12 and 13 take "th" despite their last digit.
    if matches!(day % 100, 11..=13) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// The trailing clause naming the year and calendar.
fn year_clause(converted: &ConvertedDate) -> String {
    let year = converted.year;
    match converted.calendar {
        CalendarKind::Gregorian => format!("of the year {year} of the common era"),
        CalendarKind::Julian => format!("of the year {year} of the Julian calendar"),
        CalendarKind::Buddhist => format!("of the year {year} of the Buddhist Era"),
        CalendarKind::Minguo => format!("of the year {year} of the Minguo calendar"),
        CalendarKind::Japanese => {
            let era = converted.era.unwrap_or(PRE_MEIJI);
            format!("in {era} {year} of the Japanese calendar")
        }
        CalendarKind::Islamic => format!(
            "in year {year} AH of the Islamic (Hijri) calendar (tabular approximation)"
        ),
        CalendarKind::Hebrew => {
            format!("in year {year} AM of the Hebrew calendar (tabular approximation)")
        }
    }
}

/// Compose `"<Weekday>, <Month> <Day><Ordinal> <year clause>"`.
///
/// The weekday always comes from the Gregorian `date`; a day of the week
/// is the same in every calendar. Month name and day come from
/// `converted`.
pub fn compose(date: &CalendarDate, converted: &ConvertedDate) -> String {
    format!(
        "{weekday}, {month} {day}{suffix} {clause}",
        weekday = weekday_name(date),
        month = converted.month_name,
        day = converted.day,
        suffix = ordinal_suffix(converted.day),
        clause = year_clause(converted),
    )
}

fn weekday_name(date: &CalendarDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
