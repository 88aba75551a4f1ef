mod cli;
mod config;
mod logging;
mod report;

use std::process;

use anyhow::{Context, Result};
use cantus_liturgy::{
    commemoration_for, season_profile_by_name, LiturgicalSummary, MusicalSuggestions,
};
use cantus_time::Date;
use clap::Parser;
use tracing::info;

use crate::cli::{Cli, Command};
use crate::config::CantusConfig;
use crate::report::YearReport;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = CantusConfig::load(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.output.format);

    let output = match cli.command {
        Command::Season { date } => {
            let date = resolve_date(date.as_deref())?;
            let summary = LiturgicalSummary::for_date(date)?;
            info!(%date, season = %summary.season, "resolved season");
            report::render(format, &summary, |s| {
                report::summary_text(s, &config.output.date_format)
            })?
        }
        Command::Suggest { date, no_saint } => {
            let date = resolve_date(date.as_deref())?;
            let with_saint = config.calendar.commemorations && !no_saint;
            let suggestions = MusicalSuggestions::for_date(date, with_saint)?;
            report::render(format, &suggestions, report::suggestions_text)?
        }
        Command::Dates { year } => {
            let year_report = YearReport::build(year)?;
            report::render(format, &year_report, report::year_text)?
        }
        Command::Saint { month, day } => {
            let name = commemoration_for(month, day);
            report::render(format, &name, |n| match n {
                Some(name) => format!("{name}\n"),
                None => format!("No commemoration on {month:02}-{day:02}\n"),
            })?
        }
        Command::Profile { season } => {
            let profile = season_profile_by_name(&season);
            report::render(format, profile, report::profile_text)?
        }
    };
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// Parse an explicit date, or take today's local date.
fn resolve_date(arg: Option<&str>) -> Result<Date> {
    match arg {
        Some(s) => s.parse::<Date>().with_context(|| format!("bad date argument `{s}`")),
        None => {
            let today = chrono::Local::now().date_naive();
            Date::try_from(today).context("today's date is outside the supported range")
        }
    }
}
