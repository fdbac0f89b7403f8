use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use calendar_render::RenderOptions;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::cli::{Cli, OutputFormat};

pub const ENV_DATE_STYLE: &str = "CALRENDER_DATE_STYLE";
pub const ENV_CALENDAR: &str = "CALRENDER_CALENDAR";

const DEFAULT_DATE_STYLE: &str = "gce-verbose";
const DEFAULT_CALENDAR: &str = "gregorian";

/// Persistent options read from the JSON config file.
///
/// Unknown keys are ignored so one file can be shared with other tools.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileConfig {
    #[serde(default)]
    pub date_style: Option<String>,
    #[serde(default)]
    pub calendar: Option<String>,
    #[serde(default)]
    pub lead_in: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
}

/// `$XDG_CONFIG_HOME/calrender/config.json`, else `$HOME/.config/calrender/config.json`.
pub fn default_path() -> Option<PathBuf> {
    let non_empty = |key: &str| std::env::var_os(key).filter(|v| !v.is_empty());
    let base = non_empty("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| non_empty("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(base.join("calrender").join("config.json"))
}

/// Read the config file at `path`.
///
/// A missing file yields an empty config. An unreadable or malformed file
/// is logged and also yields an empty config; it never aborts the run.
pub fn load(path: &Path) -> FileConfig {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file");
            return FileConfig::default();
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot read config file, ignoring it");
            return FileConfig::default();
        }
    };

    match serde_json::from_str(&text) {
        Ok(config) => {
            info!(path = %path.display(), "loaded config file");
            config
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "malformed config file, ignoring it");
            FileConfig::default()
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub date_style: String,
    pub calendar: String,
    pub lead_in: Option<String>,
    pub format: OutputFormat,
}

impl Settings {
    /// Merge sources with precedence flag > config file > environment > default.
    ///
    /// Empty strings count as unset at every level. `env` looks up an
    /// environment variable by name.
    pub fn resolve(cli: &Cli, file: &FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let date_style = first_set([
            cli.date_style.clone(),
            file.date_style.clone(),
            env(ENV_DATE_STYLE),
        ])
        .unwrap_or_else(|| DEFAULT_DATE_STYLE.to_string());

        let calendar = first_set([cli.calendar.clone(), file.calendar.clone(), env(ENV_CALENDAR)])
            .unwrap_or_else(|| DEFAULT_CALENDAR.to_string());

        let lead_in = first_set([cli.lead_in.clone(), file.lead_in.clone()]);

        let format = cli.format.unwrap_or_else(|| {
            file.format
                .as_deref()
                .map(|name| {
                    OutputFormat::from_name(name).unwrap_or_else(|| {
                        warn!(format = name, "unknown output format in config, using plain");
                        OutputFormat::Plain
                    })
                })
                .unwrap_or_default()
        });

        Self {
            date_style,
            calendar,
            lead_in,
            format,
        }
    }

    /// The immutable rendering options for these settings.
    pub fn render_options(&self) -> RenderOptions {
        let options = RenderOptions::from_names(&self.date_style, &self.calendar);
        match &self.lead_in {
            Some(lead_in) => options.with_lead_in(lead_in.as_str()),
            None => options,
        }
    }
}

fn first_set<const N: usize>(candidates: [Option<String>; N]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
}
