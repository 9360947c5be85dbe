//! Month grids and date-range helpers.

use chrono::{Datelike, Duration, Months, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::error::{CalpadError, CalpadResult};
use crate::event::Event;

/// Number of cells in a month grid (6 weeks of 7 days).
pub const GRID_CELLS: usize = 42;

/// Column headers, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A calendar month, the unit of navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Months whose grid, including filler days from the neighbouring
    /// years, fits in chrono's date range.
    pub fn new(year: i32, month: u32) -> CalpadResult<Self> {
        let in_range = (1..=12).contains(&month)
            && year.checked_sub(1).and_then(|y| NaiveDate::from_ymd_opt(y, 12, 1)).is_some()
            && year.checked_add(1).and_then(|y| NaiveDate::from_ymd_opt(y, 1, 31)).is_some();
        if !in_range {
            return Err(CalpadError::InvalidMonth(format!("{year}-{month:02}")));
        }
        Ok(YearMonth { year, month })
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        // month is validated on construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        let first = self.first_day();
        first
            .checked_add_months(Months::new(1))
            .and_then(|d| d.pred_opt())
            .unwrap_or(first)
    }

    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// The month before, or `self` at the lower end of the supported range.
    pub fn prev(&self) -> Self {
        let (year, month) = if self.month == 1 {
            (self.year - 1, 12)
        } else {
            (self.year, self.month - 1)
        };
        YearMonth::new(year, month).unwrap_or(*self)
    }

    /// The month after, or `self` at the upper end of the supported range.
    pub fn next(&self) -> Self {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        YearMonth::new(year, month).unwrap_or(*self)
    }
}

impl FromStr for YearMonth {
    type Err = CalpadError;

    /// Parse `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalpadError::InvalidMonth(format!("'{s}'. Expected YYYY-MM"));
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        YearMonth::new(year, month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", month_label(*self))
    }
}

/// One day slot of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateCell {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_today: bool,
}

/// The 6x7 day layout of a month, starting on the Sunday on or before day 1.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub month: YearMonth,
    pub cells: Vec<DateCell>,
}

impl MonthGrid {
    /// Build the 42-cell grid for `month`. `today` marks at most one
    /// current-month cell.
    pub fn build(month: YearMonth, today: NaiveDate) -> Self {
        let first = month.first_day();
        let start_offset = first.weekday().num_days_from_sunday() as i64;

        let mut cells = Vec::with_capacity(GRID_CELLS);

        // Trailing days of the previous month
        let prev_last = first - Duration::days(1);
        for back in (0..start_offset).rev() {
            cells.push(DateCell {
                date: prev_last - Duration::days(back),
                is_current_month: false,
                is_today: false,
            });
        }

        for day in first.iter_days().take(month.days_in_month() as usize) {
            cells.push(DateCell {
                date: day,
                is_current_month: true,
                is_today: day == today,
            });
        }

        // Leading days of the next month
        let remaining = GRID_CELLS - cells.len();
        for day in month.last_day().iter_days().skip(1).take(remaining) {
            cells.push(DateCell {
                date: day,
                is_current_month: false,
                is_today: false,
            });
        }

        MonthGrid { month, cells }
    }

    /// The grid as 6 weeks of 7 cells.
    pub fn rows(&self) -> impl Iterator<Item = &[DateCell]> {
        self.cells.chunks(WEEKDAY_LABELS.len())
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.cells.first().map(|c| c.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.cells.last().map(|c| c.date)
    }
}

/// Inclusive membership test at day granularity.
pub fn event_covers_date(event: &Event, date: NaiveDate) -> bool {
    event.covers(date)
}

/// Human label for a month, e.g. "June 2024".
pub fn month_label(month: YearMonth) -> String {
    month.first_day().format("%B %Y").to_string()
}

/// Compact label for an inclusive date range:
/// "10 Jun", "10 - 12 Jun" or "29 Jun - 2 Jul".
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        return start.format("%-d %b").to_string();
    }

    if YearMonth::containing(start) == YearMonth::containing(end) {
        return format!("{} - {}", start.day(), end.format("%-d %b"));
    }

    format!("{} - {}", start.format("%-d %b"), end.format("%-d %b"))
}
