//! Month grid layout: leading padding from the previous month, then one
//! cell per day.

use serde::Serialize;

use crate::catalog::FestivalCatalog;
use crate::consts::{DAYS_IN_MONTH, DAYS_PER_WEEK, DECEMBER, JANUARY};
use crate::date::CalendarDate;
use crate::resolve::resolve;
use crate::types::{Month, Year, days_in_month};

/// A day of the displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: CalendarDate,
    pub day_number: u8,
    pub has_event: bool,
    pub is_today: bool,
    pub is_selected: bool,
}

/// One slot of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GridCell {
    /// Trailing day of the previous month. Dimmed and not selectable.
    Padding { day_number: u8 },
    Day(DayCell),
}

impl GridCell {
    pub const fn as_day(&self) -> Option<&DayCell> {
        match self {
            Self::Day(cell) => Some(cell),
            Self::Padding { .. } => None,
        }
    }

    pub const fn day_number(&self) -> u8 {
        match self {
            Self::Padding { day_number } => *day_number,
            Self::Day(cell) => cell.day_number,
        }
    }
}

/// Rendered month, Sunday-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year: Year,
    pub month: Month,
    pub cells: Vec<GridCell>,
}

impl MonthGrid {
    pub fn day_cells(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter_map(GridCell::as_day)
    }

    /// Number of leading padding cells (weekday of the 1st, Sunday = 0).
    pub fn padding(&self) -> usize {
        self.cells
            .iter()
            .take_while(|c| matches!(c, GridCell::Padding { .. }))
            .count()
    }

    pub fn selected(&self) -> Option<&DayCell> {
        self.day_cells().find(|c| c.is_selected)
    }

    pub fn cell(&self, date: &CalendarDate) -> Option<&DayCell> {
        self.day_cells().find(|c| c.date == *date)
    }

    /// Rows of seven cells; the last row may be short.
    pub fn weeks(&self) -> std::slice::Chunks<'_, GridCell> {
        self.cells.chunks(usize::from(DAYS_PER_WEEK))
    }

    /// English month title, e.g. `February 2026`.
    pub fn title(&self) -> String {
        let name = chrono::Month::try_from(self.month.get()).map_or("", |m| m.name());
        format!("{name} {}", self.year.get())
    }
}

/// Days in the month before `month`; December precedes January of any year.
const fn previous_month_days(year: Year, month: Month) -> u8 {
    if month.get() == JANUARY {
        DAYS_IN_MONTH[DECEMBER as usize]
    } else {
        days_in_month(year.get(), month.get() - 1)
    }
}

/// Builds the grid for `(year, month)`.
///
/// `today` and `selected` only affect the cell flags; a `selected` date
/// outside the month marks nothing.
pub fn build_grid(
    year: Year,
    month: Month,
    catalog: &FestivalCatalog,
    today: &CalendarDate,
    selected: Option<&CalendarDate>,
) -> MonthGrid {
    let mut days = CalendarDate::days_of_month(year, month).peekable();
    let padding = days.peek().map_or(0, CalendarDate::weekday_from_sunday);
    let previous_days = previous_month_days(year, month);

    let mut cells: Vec<GridCell> = (0..padding)
        .map(|i| GridCell::Padding {
            day_number: previous_days - padding + 1 + i,
        })
        .collect();

    cells.extend(days.map(|date| {
        GridCell::Day(DayCell {
            date,
            day_number: date.day(),
            has_event: resolve(&date, catalog).is_event(),
            is_today: date == *today,
            is_selected: selected == Some(&date),
        })
    }));

    MonthGrid { year, month, cells }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FestivalRecord;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn ym(year: u16, month: u8) -> (Year, Month) {
        (Year::new(year).unwrap(), Month::new(month).unwrap())
    }

    #[test]
    fn test_february_2026_layout() {
        let (y, m) = ym(2026, 2);
        let grid = build_grid(y, m, &FestivalCatalog::empty(), &date("2026-10-16"), None);

        // 2026-02-01 is a Sunday
        assert_eq!(grid.padding(), 0);
        assert_eq!(grid.cells.len(), 28);
        assert_eq!(grid.title(), "February 2026");
    }

    #[test]
    fn test_padding_counts_back_from_previous_month() {
        // 2026-10-01 is a Thursday; September has 30 days
        let (y, m) = ym(2026, 10);
        let grid = build_grid(y, m, &FestivalCatalog::empty(), &date("2026-10-16"), None);

        assert_eq!(grid.padding(), 4);
        let padding: Vec<u8> = grid.cells[..4].iter().map(GridCell::day_number).collect();
        assert_eq!(padding, vec![27, 28, 29, 30]);
        assert_eq!(grid.cells.len(), 4 + 31);
    }

    #[test]
    fn test_january_padding_uses_december() {
        // 2026-01-01 is a Thursday
        let (y, m) = ym(2026, 1);
        let grid = build_grid(y, m, &FestivalCatalog::empty(), &date("2026-01-01"), None);
        let padding: Vec<u8> = grid.cells[..grid.padding()]
            .iter()
            .map(GridCell::day_number)
            .collect();
        assert_eq!(padding, vec![28, 29, 30, 31]);
    }

    #[test]
    fn test_day_cells_contiguous() {
        let (y, m) = ym(2028, 2);
        let grid = build_grid(y, m, &FestivalCatalog::empty(), &date("2028-02-10"), None);
        let days: Vec<&DayCell> = grid.day_cells().collect();
        assert_eq!(days.len(), 29);
        for (i, cell) in days.iter().enumerate() {
            assert_eq!(usize::from(cell.day_number), i + 1);
        }
        for pair in days.windows(2) {
            assert_eq!(pair[1].date.days_since(&pair[0].date), 1);
        }
    }

    #[test]
    fn test_today_flag() {
        let (y, m) = ym(2026, 10);
        let today = date("2026-10-16");
        let grid = build_grid(y, m, &FestivalCatalog::empty(), &today, None);
        let flagged: Vec<&DayCell> = grid.day_cells().filter(|c| c.is_today).collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].date, today);

        let grid = build_grid(y, m, &FestivalCatalog::empty(), &date("2026-11-01"), None);
        assert!(grid.day_cells().all(|c| !c.is_today));
    }

    #[test]
    fn test_has_event_follows_resolver() {
        let catalog = FestivalCatalog::from_records([FestivalRecord {
            date: date("2026-01-23"),
            name: "Vasant Panchami".to_owned(),
            desc: "Worship of Goddess Saraswati.".to_owned(),
            festival_type: "Major Festival".to_owned(),
        }]);
        let (y, m) = ym(2026, 1);
        let grid = build_grid(y, m, &catalog, &date("2026-01-01"), None);

        // Catalog day with no lunar observance
        assert!(grid.cell(&date("2026-01-23")).unwrap().has_event);
        // Ekadashi, computed
        assert!(grid.cell(&date("2026-01-28")).unwrap().has_event);
        // Lunar age 6.0, nothing
        assert!(!grid.cell(&date("2026-01-24")).unwrap().has_event);
    }

    #[test]
    fn test_selection_marks_one_cell() {
        let (y, m) = ym(2026, 2);
        let selected = date("2026-02-14");
        let grid = build_grid(
            y,
            m,
            &FestivalCatalog::empty(),
            &date("2026-10-16"),
            Some(&selected),
        );
        assert_eq!(grid.day_cells().filter(|c| c.is_selected).count(), 1);
        assert_eq!(grid.selected().unwrap().date, selected);

        let outside = date("2026-03-01");
        let grid = build_grid(
            y,
            m,
            &FestivalCatalog::empty(),
            &date("2026-10-16"),
            Some(&outside),
        );
        assert!(grid.selected().is_none());
    }

    #[test]
    fn test_weeks_are_seven_wide() {
        let (y, m) = ym(2026, 10);
        let grid = build_grid(y, m, &FestivalCatalog::empty(), &date("2026-10-16"), None);
        let weeks: Vec<&[GridCell]> = grid.weeks().collect();
        assert_eq!(weeks.len(), 5);
        assert!(weeks[..4].iter().all(|w| w.len() == 7));
        assert_eq!(weeks[4].len(), 35 - 28);
    }

    #[test]
    fn test_serialize_cells() {
        let (y, m) = ym(2026, 10);
        let grid = build_grid(y, m, &FestivalCatalog::empty(), &date("2026-10-16"), None);
        let json = serde_json::to_value(&grid).unwrap();
        assert_eq!(json["cells"][0]["kind"], "padding");
        assert_eq!(json["cells"][4]["kind"], "day");
        assert_eq!(json["cells"][4]["date"], "2026-10-01");
        assert_eq!(json["month"], 10);
    }
}
