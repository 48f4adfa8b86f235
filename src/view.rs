//! Session view state: which month is displayed and which day is selected.

use serde::Serialize;
use tracing::debug;

use crate::Calendar;
use crate::date::CalendarDate;
use crate::detail::DayDetail;
use crate::grid::MonthGrid;
use crate::types::{Month, Year, next_month, previous_month};

/// A discrete user action on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    PreviousMonth,
    NextMonth,
    Select(CalendarDate),
}

/// Error type for view actions. A failed action leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    /// Paging would leave the supported year range.
    #[error("no month {direction} {year}-{month}")]
    OutOfRange {
        direction: &'static str,
        year: Year,
        month: Month,
    },

    /// The date is not a day cell of the displayed month.
    #[error("{date} is not in the displayed month {year}-{month}")]
    NotDisplayed {
        date: CalendarDate,
        year: Year,
        month: Month,
    },
}

/// Displayed month plus the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarViewState {
    year: Year,
    month: Month,
    selected: Option<CalendarDate>,
}

impl CalendarViewState {
    /// Starts on the month containing `today`, nothing selected.
    pub fn new(today: &CalendarDate) -> Self {
        Self {
            year: today.year(),
            month: today.month(),
            selected: None,
        }
    }

    /// Starts on an explicit month.
    pub const fn at(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            selected: None,
        }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    /// 0-based month (0 = January).
    pub const fn month_index(&self) -> u8 {
        self.month.index()
    }

    pub const fn selected(&self) -> Option<CalendarDate> {
        self.selected
    }

    /// Applies one action. Paging clears the selection.
    ///
    /// # Errors
    /// Returns `ViewError` if the action cannot be applied; the state is
    /// unchanged in that case.
    pub fn apply(&mut self, action: ViewAction) -> Result<(), ViewError> {
        match action {
            ViewAction::PreviousMonth => {
                let (year, month) =
                    previous_month(self.year, self.month).ok_or(ViewError::OutOfRange {
                        direction: "before",
                        year: self.year,
                        month: self.month,
                    })?;
                self.show(year, month);
            }
            ViewAction::NextMonth => {
                let (year, month) =
                    next_month(self.year, self.month).ok_or(ViewError::OutOfRange {
                        direction: "after",
                        year: self.year,
                        month: self.month,
                    })?;
                self.show(year, month);
            }
            ViewAction::Select(date) => {
                if !date.in_month(self.year, self.month) {
                    return Err(ViewError::NotDisplayed {
                        date,
                        year: self.year,
                        month: self.month,
                    });
                }
                debug!(%date, "day selected");
                self.selected = Some(date);
            }
        }
        Ok(())
    }

    /// Applies actions in order, stopping at the first failure.
    ///
    /// # Errors
    /// Returns the first `ViewError`; earlier actions stay applied.
    pub fn apply_all(
        &mut self,
        actions: impl IntoIterator<Item = ViewAction>,
    ) -> Result<(), ViewError> {
        actions.into_iter().try_for_each(|action| self.apply(action))
    }

    fn show(&mut self, year: Year, month: Month) {
        debug!(%year, %month, "month displayed");
        self.year = year;
        self.month = month;
        self.selected = None;
    }

    /// Grid for the displayed month with today and the selection flagged.
    pub fn grid(&self, calendar: &Calendar, today: &CalendarDate) -> MonthGrid {
        calendar.grid(self.year, self.month, today, self.selected.as_ref())
    }

    /// Detail of the selected day, if any.
    pub fn selected_detail(&self, calendar: &Calendar) -> Option<DayDetail> {
        self.selected.map(|date| calendar.detail(&date))
    }
}
