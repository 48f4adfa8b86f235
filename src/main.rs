mod cli;
mod config;
mod logging;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use festival_calendar::{
    Calendar, CalendarDate, CalendarViewState, FestivalCatalog, Language, Month, ViewAction, Year,
};

use crate::cli::{Cli, Command, DayArgs, EventsArgs, MonthArgs};
use crate::config::AppConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load(cli.config.as_deref())?;
    let language = cli.lang.unwrap_or(config.language);

    let catalog = match cli.catalog.or(config.catalog) {
        Some(path) => FestivalCatalog::load_or_empty(path),
        None => {
            info!("no festival catalog configured, using computed events only");
            FestivalCatalog::empty()
        }
    };
    let calendar = Calendar::new(catalog);
    let today = CalendarDate::today().context("system clock outside supported range")?;

    match cli.command {
        Command::Month(args) => run_month(&calendar, &today, language, &args),
        Command::Day(args) => run_day(&calendar, &today, language, &args),
        Command::Events(args) => run_events(&calendar, &today, &args),
    }
}

/// Resolves `--year`/`--month`, defaulting each to today's.
fn year_month(
    today: &CalendarDate,
    year: Option<u16>,
    month: Option<u8>,
) -> Result<(Year, Month)> {
    let year = year.map_or(Ok(today.year()), Year::new)?;
    let month = month.map_or(Ok(today.month()), Month::new)?;
    Ok((year, month))
}

fn run_month(
    calendar: &Calendar,
    today: &CalendarDate,
    language: Language,
    args: &MonthArgs,
) -> Result<()> {
    let mut state = match (args.year, args.month) {
        (None, None) => CalendarViewState::new(today),
        (year, month) => {
            let (year, month) = year_month(today, year, month)?;
            CalendarViewState::at(year, month)
        }
    };
    if let Some(date) = args.select {
        state.apply(ViewAction::Select(date))?;
    }

    let grid = state.grid(calendar, today);
    let detail = state.selected_detail(calendar);

    if args.json {
        let value = serde_json::json!({ "grid": grid, "selected": detail });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    print!("{}", render::grid(&grid)?);
    if let Some(detail) = detail {
        println!();
        print!("{}", render::detail(&detail, language)?);
    }
    Ok(())
}

fn run_day(
    calendar: &Calendar,
    today: &CalendarDate,
    language: Language,
    args: &DayArgs,
) -> Result<()> {
    let date = args.date.unwrap_or(*today);
    let detail = calendar.detail(&date);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        print!("{}", render::detail(&detail, language)?);
    }
    Ok(())
}

fn run_events(calendar: &Calendar, today: &CalendarDate, args: &EventsArgs) -> Result<()> {
    let (year, month) = year_month(today, args.year, args.month)?;
    let events = calendar.events_in_month(year, month);
    info!(%year, %month, count = events.len(), "events listed");
    print!("{}", render::events(&events)?);
    Ok(())
}
