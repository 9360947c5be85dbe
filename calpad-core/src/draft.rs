//! Validation of user-entered and AI-parsed event payloads.
//!
//! A draft carries raw strings exactly as a form or the intent parser
//! produced them. [`normalize`] turns it into a canonical [`Event`] or
//! explains why it can't.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::color::EventColor;
use crate::error::ValidationError;
use crate::event::Event;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// YYYY-MM-DD
    #[serde(default)]
    pub start_date: String,
    /// YYYY-MM-DD
    #[serde(default)]
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl EventDraft {
    /// Blank new-event form for a selected day (start and end both on it).
    pub fn for_date(date: NaiveDate) -> Self {
        let iso = date.format("%Y-%m-%d").to_string();
        EventDraft {
            start_date: iso.clone(),
            end_date: iso,
            color: Some(EventColor::default().to_string()),
            ..Default::default()
        }
    }

    /// Edit form prefilled from an existing record.
    pub fn from_event(event: &Event) -> Self {
        EventDraft {
            title: event.title.clone(),
            description: event.description.clone(),
            start_date: event.start_date.format("%Y-%m-%d").to_string(),
            end_date: event.end_date.format("%Y-%m-%d").to_string(),
            start_time: event.start_time.clone(),
            end_time: event.end_time.clone(),
            color: Some(event.color.to_string()),
        }
    }
}

/// What the draft is being submitted as.
#[derive(Debug, Clone, Copy)]
pub enum Submission<'a> {
    /// A new event; the generated id avoids every id in `existing`.
    Create { existing: &'a [Event] },
    /// Replacement of the event with this id.
    Edit { id: &'a str },
}

/// Validate `draft` and build the canonical event.
pub fn normalize(draft: &EventDraft, submission: Submission<'_>) -> Result<Event, ValidationError> {
    let title = draft.title.trim();
    if title.is_empty() {
        return Err(ValidationError::MissingTitle);
    }

    let start_date = parse_date(&draft.start_date, "start date")?
        .ok_or(ValidationError::MissingStartDate)?;
    let end_date =
        parse_date(&draft.end_date, "end date")?.ok_or(ValidationError::MissingEndDate)?;

    if end_date < start_date {
        return Err(ValidationError::EndBeforeStart);
    }

    let start_time = parse_time(draft.start_time.as_deref(), "start time")?;
    let end_time = parse_time(draft.end_time.as_deref(), "end time")?;

    if start_date == end_date {
        if let (Some(start), Some(end)) = (start_time, end_time) {
            if end < start {
                return Err(ValidationError::EndTimeBeforeStartTime);
            }
        }
    }

    let id = match submission {
        Submission::Create { existing } => fresh_id(existing),
        Submission::Edit { id } => id.to_string(),
    };

    Ok(Event {
        id,
        title: title.to_string(),
        description: non_empty(draft.description.as_deref()),
        start_date,
        end_date,
        start_time: start_time.map(|t| t.format("%H:%M").to_string()),
        end_time: end_time.map(|t| t.format("%H:%M").to_string()),
        color: parse_color(draft.color.as_deref()),
    })
}

/// Parse YYYY-MM-DD as a plain calendar date. Anything after a `T` is
/// dropped so "2024-06-01T00:00:00Z" still means June 1.
fn parse_date(raw: &str, field: &'static str) -> Result<Option<NaiveDate>, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let date_part = trimmed.split('T').next().unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ValidationError::InvalidDate {
            field,
            value: raw.to_string(),
        })
}

/// Parse strict 24-hour HH:mm. Empty strings count as absent.
fn parse_time(raw: Option<&str>, field: &'static str) -> Result<Option<NaiveTime>, ValidationError> {
    let Some(trimmed) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    let invalid = || ValidationError::InvalidTime {
        field,
        value: trimmed.to_string(),
    };

    let bytes = trimmed.as_bytes();
    let well_formed = bytes.len() == 5
        && bytes[2] == b':'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || b.is_ascii_digit());
    if !well_formed {
        return Err(invalid());
    }

    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .map(Some)
        .map_err(|_| invalid())
}

fn parse_color(raw: Option<&str>) -> EventColor {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => EventColor::default(),
        Some(name) => name.parse().unwrap_or_else(|e| {
            warn!("{}, using {}", e, EventColor::default());
            EventColor::default()
        }),
    }
}

fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn fresh_id(existing: &[Event]) -> String {
    loop {
        let id = uuid::Uuid::new_v4().to_string();
        if !existing.iter().any(|e| e.id == id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::tests::{date, make_event};

    fn draft(title: &str, start: &str, end: &str) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            ..Default::default()
        }
    }

    fn create(d: &EventDraft) -> Result<Event, ValidationError> {
        normalize(d, Submission::Create { existing: &[] })
    }

    #[test]
    fn rejects_end_before_start() {
        let err = create(&draft("Trip", "2024-06-05", "2024-06-01")).unwrap_err();
        assert_eq!(err, ValidationError::EndBeforeStart);
        assert_eq!(err.reason(), "end-before-start");
    }

    #[test]
    fn accepts_equal_dates() {
        let event = create(&draft("Dentist", "2024-06-05", "2024-06-05")).unwrap();
        assert_eq!(event.start_date, event.end_date);
        assert_eq!(event.start_date, date(2024, 6, 5));
    }

    #[test]
    fn date_strings_are_plain_calendar_dates() {
        let event = create(&draft("Launch", "2024-06-01", "2024-06-01T23:30:00-07:00")).unwrap();
        assert_eq!(event.start_date, date(2024, 6, 1));
        assert_eq!(event.end_date, date(2024, 6, 1));
    }

    #[test]
    fn requires_title_after_trimming() {
        let err = create(&draft("   ", "2024-06-01", "2024-06-01")).unwrap_err();
        assert_eq!(err, ValidationError::MissingTitle);

        let event = create(&draft("  Retro  ", "2024-06-01", "2024-06-01")).unwrap();
        assert_eq!(event.title, "Retro");
    }

    #[test]
    fn requires_both_dates() {
        assert_eq!(
            create(&draft("X", "", "2024-06-01")).unwrap_err(),
            ValidationError::MissingStartDate
        );
        assert_eq!(
            create(&draft("X", "2024-06-01", " ")).unwrap_err(),
            ValidationError::MissingEndDate
        );
    }

    #[test]
    fn malformed_dates_are_validation_errors() {
        let err = create(&draft("X", "2024-02-30", "2024-03-01")).unwrap_err();
        assert_eq!(err.reason(), "invalid-date");

        let err = create(&draft("X", "2024-06-01", "next tuesday")).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDate { field: "end date", .. }));
    }

    #[test]
    fn times_must_be_24_hour_hh_mm() {
        let mut d = draft("Sync", "2024-06-01", "2024-06-01");
        d.start_time = Some("09:00".into());
        d.end_time = Some("17:45".into());
        let event = create(&d).unwrap();
        assert_eq!(event.start_time.as_deref(), Some("09:00"));
        assert_eq!(event.end_time.as_deref(), Some("17:45"));

        for bad in ["9:00", "24:00", "12:60", "noon", "12:3a"] {
            d.start_time = Some(bad.into());
            assert_eq!(create(&d).unwrap_err().reason(), "invalid-time", "{bad}");
        }
    }

    #[test]
    fn empty_time_strings_are_absent() {
        let mut d = draft("Holiday", "2024-06-01", "2024-06-01");
        d.start_time = Some(String::new());
        d.end_time = Some("  ".into());
        let event = create(&d).unwrap();
        assert_eq!(event.start_time, None);
        assert_eq!(event.end_time, None);
    }

    #[test]
    fn single_day_end_time_before_start_time_is_rejected() {
        let mut d = draft("Backwards", "2024-06-01", "2024-06-01");
        d.start_time = Some("15:00".into());
        d.end_time = Some("14:00".into());
        assert_eq!(create(&d).unwrap_err(), ValidationError::EndTimeBeforeStartTime);

        // Across days the end time belongs to a later date
        d.end_date = "2024-06-02".into();
        assert!(create(&d).is_ok());
    }

    #[test]
    fn color_defaults_when_missing_or_unknown() {
        let mut d = draft("Party", "2024-06-01", "2024-06-01");
        assert_eq!(create(&d).unwrap().color, EventColor::Blue);

        d.color = Some("chartreuse".into());
        assert_eq!(create(&d).unwrap().color, EventColor::Blue);

        d.color = Some("Pink".into());
        assert_eq!(create(&d).unwrap().color, EventColor::Pink);
    }

    #[test]
    fn empty_description_is_dropped() {
        let mut d = draft("Call", "2024-06-01", "2024-06-01");
        d.description = Some(String::new());
        assert_eq!(create(&d).unwrap().description, None);

        d.description = Some("Quarterly numbers".into());
        assert_eq!(create(&d).unwrap().description.as_deref(), Some("Quarterly numbers"));
    }

    #[test]
    fn edit_preserves_id() {
        let existing = make_event("evt-42", "Old title", date(2024, 6, 1), date(2024, 6, 1));
        let mut d = EventDraft::from_event(&existing);
        d.title = "New title".into();

        let event = normalize(&d, Submission::Edit { id: &existing.id }).unwrap();
        assert_eq!(event.id, "evt-42");
        assert_eq!(event.title, "New title");
        assert_eq!(event.start_date, existing.start_date);
    }

    #[test]
    fn create_never_collides_with_existing_ids() {
        let existing: Vec<Event> = (0..20)
            .map(|i| {
                let mut d = draft(&format!("Event {i}"), "2024-06-01", "2024-06-01");
                d.color = None;
                create(&d).unwrap()
            })
            .collect();

        let event = normalize(
            &draft("Another", "2024-06-02", "2024-06-02"),
            Submission::Create { existing: &existing },
        )
        .unwrap();
        assert!(existing.iter().all(|e| e.id != event.id));
        assert!(uuid::Uuid::parse_str(&event.id).is_ok());
    }

    #[test]
    fn from_event_round_trips_through_normalize() {
        let mut original = make_event("keep", "Design Sprint", date(2024, 6, 10), date(2024, 6, 12));
        original.start_time = Some("09:00".into());
        original.description = Some("Iterate on mocks".into());
        original.color = EventColor::Purple;

        let again = normalize(
            &EventDraft::from_event(&original),
            Submission::Edit { id: "keep" },
        )
        .unwrap();
        assert_eq!(again, original);
    }

    #[test]
    fn for_date_prefills_single_day() {
        let d = EventDraft::for_date(date(2024, 6, 7));
        assert_eq!(d.start_date, "2024-06-07");
        assert_eq!(d.end_date, "2024-06-07");
        assert_eq!(d.color.as_deref(), Some("blue"));
        assert!(d.title.is_empty());
    }

    #[test]
    fn deserializes_intent_parser_shape() {
        let json = r#"{
            "title": "Project Sync",
            "startDate": "2024-06-10",
            "endDate": "2024-06-12",
            "startTime": "10:00",
            "color": "green"
        }"#;
        let d: EventDraft = serde_json::from_str(json).unwrap();
        let event = create(&d).unwrap();
        assert_eq!(event.color, EventColor::Green);
        assert!(event.is_multi_day());
        assert_eq!(event.end_time, None);
    }
}
