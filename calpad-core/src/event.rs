//! The calendar event record.
//!
//! Events are whole-day ranged: `start_date` and `end_date` are calendar
//! dates with no time component, both inclusive. The optional times are
//! display hints attached to the first and last day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::EventColor;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// HH:mm, applies to `start_date`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// HH:mm, applies to `end_date`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default)]
    pub color: EventColor,
}

impl Event {
    pub fn is_multi_day(&self) -> bool {
        self.start_date != self.end_date
    }

    /// Whether the event's inclusive range contains `date`.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    pub fn is_start_cell(&self, date: NaiveDate) -> bool {
        self.start_date == date
    }

    pub fn is_end_cell(&self, date: NaiveDate) -> bool {
        self.end_date == date
    }

    /// Number of calendar days the event spans (1 for single-day events).
    pub fn span_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub(crate) fn make_event(id: &str, title: &str, start: NaiveDate, end: NaiveDate) -> Event {
        Event {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            start_date: start,
            end_date: end,
            start_time: None,
            end_time: None,
            color: EventColor::Blue,
        }
    }

    #[test]
    fn single_day_event_covers_only_its_day() {
        let event = make_event("1", "Code Freeze", date(2024, 6, 10), date(2024, 6, 10));
        assert!(!event.is_multi_day());
        assert!(event.covers(date(2024, 6, 10)));
        assert!(!event.covers(date(2024, 6, 9)));
        assert!(!event.covers(date(2024, 6, 11)));
        assert_eq!(event.span_days(), 1);
    }

    #[test]
    fn multi_day_event_is_inclusive_on_both_ends() {
        let event = make_event("2", "Design Sprint", date(2024, 6, 10), date(2024, 6, 12));
        assert!(event.is_multi_day());
        for day in 10..=12 {
            assert!(event.covers(date(2024, 6, day)), "should cover June {day}");
        }
        assert!(!event.covers(date(2024, 6, 9)));
        assert!(!event.covers(date(2024, 6, 13)));
        assert_eq!(event.span_days(), 3);
    }

    #[test]
    fn start_and_end_cells_compare_full_dates() {
        let event = make_event("3", "Offsite", date(2024, 5, 30), date(2024, 6, 2));
        assert!(event.is_start_cell(date(2024, 5, 30)));
        assert!(!event.is_start_cell(date(2024, 6, 30)));
        assert!(event.is_end_cell(date(2024, 6, 2)));
        assert!(!event.is_end_cell(date(2025, 6, 2)));
    }

    #[test]
    fn serializes_with_camel_case_keys_and_plain_dates() {
        let mut event = make_event("4", "Lunch", date(2024, 6, 1), date(2024, 6, 1));
        event.start_time = Some("12:30".into());
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["startDate"], "2024-06-01");
        assert_eq!(json["startTime"], "12:30");
        assert_eq!(json["color"], "blue");
        assert!(json.get("endTime").is_none());

        let back: Event = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
