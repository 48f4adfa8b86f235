use std::path::PathBuf;

use clap::{Parser, Subcommand};
use festival_calendar::{CalendarDate, Language};

/// Temple festival calendar.
#[derive(Parser)]
#[command(
    name = "festival-calendar",
    version,
    about = "Festival calendar with lunar observances"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file [default: festival-calendar.toml].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the festival catalog JSON path from config.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Override the tithi label language from config (en or hi).
    #[arg(long, global = true)]
    pub lang: Option<Language>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the month grid.
    Month(MonthArgs),
    /// Print the detail for one day.
    Day(DayArgs),
    /// List every day of a month that has a festival or observance.
    Events(EventsArgs),
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Year to display [default: current year].
    #[arg(long)]
    pub year: Option<u16>,

    /// Month to display, 1-12 [default: current month].
    #[arg(long)]
    pub month: Option<u8>,

    /// Day to select (YYYY-MM-DD), must be in the displayed month.
    #[arg(long)]
    pub select: Option<CalendarDate>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `day` subcommand.
#[derive(clap::Args)]
pub struct DayArgs {
    /// Date (YYYY-MM-DD) [default: today].
    pub date: Option<CalendarDate>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `events` subcommand.
#[derive(clap::Args)]
pub struct EventsArgs {
    /// Year [default: current year].
    #[arg(long)]
    pub year: Option<u16>,

    /// Month, 1-12 [default: current month].
    #[arg(long)]
    pub month: Option<u8>,
}
