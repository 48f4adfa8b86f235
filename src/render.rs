//! Plain-text presentation of grids, details and event lists.

use std::fmt::{self, Write as _};

use festival_calendar::{CalendarDate, DayDetail, DayEvent, EventSource, GridCell, Language, MonthGrid};

const WEEKDAY_HEADER: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// One five-column cell: `(dd)` for padding, `[dd]` when selected,
/// then `*` for an event or `!` for today.
fn cell_text(cell: &GridCell) -> String {
    match cell {
        GridCell::Padding { day_number } => format!("({day_number:>2}) "),
        GridCell::Day(day) => {
            let (open, close) = if day.is_selected { ('[', ']') } else { (' ', ' ') };
            let marker = match (day.has_event, day.is_today) {
                (_, true) => '!',
                (true, false) => '*',
                (false, false) => ' ',
            };
            format!("{open}{:>2}{close}{marker}", day.day_number)
        }
    }
}

pub fn grid(grid: &MonthGrid) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{:^35}", grid.title())?;
    let header: String = WEEKDAY_HEADER.iter().map(|d| format!(" {d}  ")).collect();
    writeln!(out, "{}", header.trim_end())?;
    for week in grid.weeks() {
        let row: String = week.iter().map(cell_text).collect();
        writeln!(out, "{}", row.trim_end())?;
    }
    writeln!(out, "* festival or observance   ! today   (..) previous month")?;
    Ok(out)
}

fn source_tag(event: &DayEvent) -> &'static str {
    match event.source {
        EventSource::Catalog => "festival",
        EventSource::Computed => "lunar observance",
        EventSource::None => "daily",
    }
}

pub fn detail(detail: &DayDetail, language: Language) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{}", detail.display_date)?;
    writeln!(out, "Tithi: {}", detail.tithi_label(language))?;
    writeln!(
        out,
        "{} ({}, {})",
        detail.event.name,
        detail.event.event_type,
        source_tag(&detail.event)
    )?;
    writeln!(out, "{}", detail.event.desc)?;
    Ok(out)
}

pub fn events(events: &[(CalendarDate, DayEvent)]) -> Result<String, fmt::Error> {
    events.iter().try_fold(String::new(), |mut out, (date, event)| {
        writeln!(out, "{date}  {:<24} [{}]", event.name, source_tag(event))?;
        Ok(out)
    })
}
