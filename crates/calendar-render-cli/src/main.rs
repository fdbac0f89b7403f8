mod cli;
mod config;
mod logging;

use std::process;

use anyhow::{Context, Result};
use calendar_render::{render, CalendarDate, CalendarKind, RenderStyle};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use crate::cli::{Cli, OutputFormat};
use crate::config::Settings;

/// Machine-readable form of one rendering, printed with `--format json`.
#[derive(Serialize)]
struct JsonOutput<'a> {
    date: CalendarDate,
    style: RenderStyle,
    calendar: CalendarKind,
    rendered: &'a str,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let file_config = cli
        .config
        .clone()
        .or_else(config::default_path)
        .map(|path| config::load(&path))
        .unwrap_or_default();
    let settings = Settings::resolve(&cli, &file_config, |key| std::env::var(key).ok());
    let options = settings.render_options();
    info!(
        style = %options.style(),
        calendar = %options.calendar(),
        "resolved date options"
    );

    let date = match cli.date.as_deref() {
        Some(text) => text
            .parse::<CalendarDate>()
            .with_context(|| format!("invalid date argument '{}'", text.trim()))?,
        None => CalendarDate::today_utc(),
    };

    let rendered = render(&date, &options);

    match settings.format {
        OutputFormat::Plain => println!("{rendered}"),
        OutputFormat::Json => {
            let output = JsonOutput {
                date,
                style: options.style(),
                calendar: options.calendar(),
                rendered: &rendered,
            };
            let json = serde_json::to_string_pretty(&output).context("failed to encode output")?;
            println!("{json}");
        }
    }

    Ok(())
}
