//! Immutable rendering configuration.

use serde::Serialize;

use crate::calendar::CalendarKind;
use crate::style::RenderStyle;

/// Style and calendar selection for [`render`](crate::render).
///
/// Build one at start-up and pass it by reference to every render call.
/// There is no setter; a different configuration is a different value,
/// so a shared `RenderOptions` is safe to use from any number of threads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderOptions {
    style: RenderStyle,
    calendar: CalendarKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    lead_in: Option<String>,
}

impl RenderOptions {
    pub fn new(style: RenderStyle, calendar: CalendarKind) -> Self {
        Self {
            style,
            calendar,
            lead_in: None,
        }
    }

    /// Build options from configuration names.
    ///
    /// Unrecognised names fall back to `gce-verbose` and `gregorian`
    /// respectively and are logged at `warn` level; this never fails.
    ///
    /// ```
    /// use calendar_render::{CalendarKind, RenderOptions, RenderStyle};
    ///
    /// let options = RenderOptions::from_names("iso-week", "no-such-calendar");
    /// assert_eq!(options.style(), RenderStyle::IsoWeek);
    /// assert_eq!(options.calendar(), CalendarKind::Gregorian);
    /// ```
    pub fn from_names(style: &str, calendar: &str) -> Self {
        Self::new(
            RenderStyle::from_name_or_default(style),
            CalendarKind::from_name_or_default(calendar),
        )
    }

    /// Prefix the verbose sentence with `lead_in` and close it with a full stop,
    /// e.g. `"This request was made on"`. Blank text clears the lead-in.
    pub fn with_lead_in(mut self, lead_in: impl Into<String>) -> Self {
        let lead_in = lead_in.into();
        let trimmed = lead_in.trim();
        self.lead_in = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    pub fn style(&self) -> RenderStyle {
        self.style
    }

    pub fn calendar(&self) -> CalendarKind {
        self.calendar
    }

    pub fn lead_in(&self) -> Option<&str> {
        self.lead_in.as_deref()
    }
}
