pub mod access;
pub mod ask;
pub mod delete;
pub mod edit;
pub mod events;
pub mod month;
pub mod new;
pub mod show;

use anyhow::Result;
use calpad_core::EventColor;
use calpad_core::draft::EventDraft;
use clap::Args;

use crate::dates::{end_after_span, resolve_date};

/// Event fields shared by `new` and `edit`.
#[derive(Args, Debug, Default)]
pub struct EventFields {
    /// Start date (e.g., "2025-03-20", "tomorrow", "next fri")
    #[arg(short, long)]
    pub start: Option<String>,

    /// End date, inclusive
    #[arg(short, long, conflicts_with = "days")]
    pub end: Option<String>,

    /// Number of days covered (e.g., "3days", "1week")
    #[arg(short, long, conflicts_with = "end")]
    pub days: Option<String>,

    /// Start time on the first day (HH:mm, empty to clear)
    #[arg(long)]
    pub from: Option<String>,

    /// End time on the last day (HH:mm, empty to clear)
    #[arg(long)]
    pub until: Option<String>,

    #[arg(short, long)]
    pub color: Option<EventColor>,

    /// Event description (empty to clear)
    #[arg(long)]
    pub description: Option<String>,
}

impl EventFields {
    /// Overlay the given fields onto `draft`. With `end_follows_start`, a new
    /// start date without an explicit end makes a single-day event.
    pub fn apply(&self, draft: &mut EventDraft, end_follows_start: bool) -> Result<()> {
        if let Some(start) = &self.start {
            draft.start_date = resolve_date(start)?;
            if end_follows_start && self.end.is_none() && self.days.is_none() {
                draft.end_date = draft.start_date.clone();
            }
        }

        if let Some(end) = &self.end {
            draft.end_date = resolve_date(end)?;
        }

        if let Some(days) = &self.days {
            draft.end_date = end_after_span(&draft.start_date, days)?;
        }

        if let Some(from) = &self.from {
            draft.start_time = Some(from.clone());
        }
        if let Some(until) = &self.until {
            draft.end_time = Some(until.clone());
        }
        if let Some(color) = self.color {
            draft.color = Some(color.to_string());
        }
        if let Some(description) = &self.description {
            draft.description = Some(description.clone());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn base() -> EventDraft {
        EventDraft::for_date(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap())
    }

    #[test]
    fn new_start_moves_end_for_single_day_events() {
        let mut draft = base();
        let fields = EventFields {
            start: Some("2024-06-10".into()),
            ..Default::default()
        };
        fields.apply(&mut draft, true).unwrap();
        assert_eq!(draft.start_date, "2024-06-10");
        assert_eq!(draft.end_date, "2024-06-10");
    }

    #[test]
    fn edit_start_keeps_existing_end() {
        let mut draft = base();
        draft.end_date = "2024-06-20".into();
        let fields = EventFields {
            start: Some("2024-06-10".into()),
            ..Default::default()
        };
        fields.apply(&mut draft, false).unwrap();
        assert_eq!(draft.end_date, "2024-06-20");
    }

    #[test]
    fn days_span_from_start() {
        let mut draft = base();
        let fields = EventFields {
            start: Some("2024-06-10".into()),
            days: Some("3days".into()),
            color: Some(EventColor::Red),
            from: Some("09:00".into()),
            ..Default::default()
        };
        fields.apply(&mut draft, true).unwrap();
        assert_eq!(draft.end_date, "2024-06-12");
        assert_eq!(draft.color.as_deref(), Some("red"));
        assert_eq!(draft.start_time.as_deref(), Some("09:00"));
    }
}
