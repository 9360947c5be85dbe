use anyhow::Result;
use calpad_core::calpad::Calpad;
use calpad_core::date_range::{MonthGrid, YearMonth};
use calpad_core::grid;
use calpad_core::store::EventStore;
use chrono::NaiveDate;

use crate::render::render_month;

/// Which month to show relative to the requested one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Stay,
    Prev,
    Next,
}

pub fn resolve_month(month: Option<&str>, step: Step, today: NaiveDate) -> Result<YearMonth> {
    let month = match month {
        Some(s) => s.parse::<YearMonth>()?,
        None => YearMonth::containing(today),
    };

    Ok(match step {
        Step::Stay => month,
        Step::Prev => month.prev(),
        Step::Next => month.next(),
    })
}

pub fn run(calpad: &Calpad, month: YearMonth, today: NaiveDate) -> Result<()> {
    let events = calpad.store()?.list()?;
    print_month(month, &events, today);
    Ok(())
}

pub fn print_month(month: YearMonth, events: &[calpad_core::Event], today: NaiveDate) {
    let grid = MonthGrid::build(month, today);
    let cells = grid::render(&grid, events);
    println!("{}", render_month(&grid, &cells));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn defaults_to_current_month() {
        let month = resolve_month(None, Step::Stay, today()).unwrap();
        assert_eq!(month, YearMonth::new(2024, 1).unwrap());
    }

    #[test]
    fn steps_across_year_boundaries() {
        assert_eq!(
            resolve_month(None, Step::Prev, today()).unwrap(),
            YearMonth::new(2023, 12).unwrap()
        );
        assert_eq!(
            resolve_month(Some("2024-12"), Step::Next, today()).unwrap(),
            YearMonth::new(2025, 1).unwrap()
        );
    }

    #[test]
    fn rejects_bad_month_argument() {
        assert!(resolve_month(Some("2024-13"), Step::Stay, today()).is_err());
    }
}
