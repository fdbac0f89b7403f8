//! Error types for calendar-render operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth { month: u32 },

    #[error("invalid day: {day} for {year:04}-{month:02} (max {max_day})")]
    InvalidDay {
        year: i32,
        month: u32,
        day: u32,
        max_day: u32,
    },

    #[error("year out of supported range: {year}")]
    YearOutOfRange { year: i32 },

    #[error("malformed date: {0}")]
    MalformedDate(String),

    #[error("unknown date style: {0}")]
    UnknownStyle(String),

    #[error("unknown calendar: {0}")]
    UnknownCalendar(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;
