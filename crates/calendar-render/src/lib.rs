//! # calendar-render
//!
//! Deterministic multi-calendar date rendering.
//!
//! Converts one proleptic Gregorian calendar day into a human- or
//! machine-readable string under a selected style and calendar system.
//! Every function is pure: inputs are explicit, there is no global
//! state, and nothing reads the clock except [`CalendarDate::today_utc`].
//!
//! ## Modules
//!
//! - [`date`] — Validated proleptic Gregorian dates
//! - [`jdn`] — Julian Day Number bridge (Gregorian, Julian, tabular Hijri)
//! - [`era`] — Japanese era table and resolution
//! - [`calendar`] — Per-calendar conversion of a date
//! - [`sentence`] — Verbose English sentences with ordinal days
//! - [`style`] — Style selection and machine-readable formats
//! - [`options`] — Immutable style/calendar configuration
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use calendar_render::{render, CalendarDate, RenderOptions};
//!
//! let date: CalendarDate = "2019-05-01".parse().unwrap();
//! let options = RenderOptions::from_names("gce-verbose", "japanese");
//! assert_eq!(
//!     render(&date, &options),
//!     "Wednesday, May 1st in Reiwa 1 of the Japanese calendar"
//! );
//! ```

pub mod calendar;
pub mod date;
pub mod era;
pub mod error;
pub mod jdn;
pub mod options;
pub mod sentence;
pub mod style;

pub use calendar::{convert, CalendarKind, ConvertedDate};
pub use date::CalendarDate;
pub use era::{resolve_era, Era, EraYear, JAPANESE_ERAS};
pub use error::{RenderError, Result};
pub use jdn::JulianDay;
pub use options::RenderOptions;
pub use sentence::{compose, ordinal_suffix};
pub use style::{render, render_ymd, unix_seconds, RenderStyle};
