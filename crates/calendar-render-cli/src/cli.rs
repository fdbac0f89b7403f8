use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Render a calendar date in one of several calendar systems and styles.
#[derive(Parser, Debug)]
#[command(
    name = "calrender",
    version,
    about = "Render a date as a sentence, ISO date, RFC 3339, Unix time or ISO week",
    after_help = "Styles: gce-verbose (default), iso-date, rfc3339, unix, iso-week.\n\
                  Calendars (gce-verbose only): gregorian (default), julian, buddhist, minguo,\n\
                  japanese, islamic (tabular), hebrew (approximate year).\n\
                  Unknown style or calendar names fall back to the defaults.\n\n\
                  Environment: CALRENDER_DATE_STYLE, CALRENDER_CALENDAR, CALRENDER_CONFIG.\n\
                  Precedence: flag > config file > environment > default."
)]
pub struct Cli {
    /// Date to render as YYYY-MM-DD (defaults to today in UTC).
    #[arg(allow_hyphen_values = true)]
    pub date: Option<String>,

    /// Date rendering style.
    #[arg(long = "date-style", value_name = "STYLE")]
    pub date_style: Option<String>,

    /// Calendar system for the gce-verbose style.
    #[arg(long, value_name = "CALENDAR")]
    pub calendar: Option<String>,

    /// Text placed before the verbose sentence, e.g. "This request was made on".
    #[arg(long = "lead-in", value_name = "TEXT")]
    pub lead_in: Option<String>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to a JSON config file.
    #[arg(long, env = "CALRENDER_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// How the rendered date is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// The rendered string alone.
    #[default]
    Plain,
    /// A JSON object with the date, resolved options and rendered string.
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name.trim(), true).ok()
    }
}
