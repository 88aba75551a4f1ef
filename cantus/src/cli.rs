use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

/// Liturgical season resolver and music-planning helper.
#[derive(Parser)]
#[command(
    name = "cantus",
    version,
    about = "Liturgical seasons, feasts, and musical suggestions"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the output format from config.
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the season, color, style, and themes for a date.
    Season {
        /// Date as YYYY-MM-DD (defaults to today).
        date: Option<String>,
    },
    /// Show detailed musical suggestions for a date.
    Suggest {
        /// Date as YYYY-MM-DD (defaults to today).
        date: Option<String>,

        /// Leave the commemoration of the day out.
        #[arg(long)]
        no_saint: bool,
    },
    /// List the feast dates and season runs of a year.
    Dates {
        /// Calendar year (1583-4099).
        year: u16,
    },
    /// Show the commemoration kept on a month and day.
    Saint {
        /// Month (1-12).
        month: u8,
        /// Day of the month.
        day: u8,
    },
    /// Show the profile of a season given by name.
    Profile {
        /// Season name, English or Portuguese (e.g. "Lent", "Quaresma").
        season: String,
    },
}
