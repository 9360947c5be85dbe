//! The "All Events" list: events sorted by start date and grouped by month.

use crate::date_range::{YearMonth, month_label};
use crate::event::Event;

#[derive(Debug, Clone)]
pub struct MonthGroup<'a> {
    pub month: YearMonth,
    /// e.g. "June 2024"
    pub label: String,
    pub events: Vec<&'a Event>,
}

/// Group events by the month of their start date.
///
/// Groups come out in ascending month order. Within a group, events are in
/// ascending start-date order and same-day events keep their collection
/// order.
pub fn group_by_month(events: &[Event]) -> Vec<MonthGroup<'_>> {
    let mut sorted: Vec<&Event> = events.iter().collect();
    // sort_by_key is stable
    sorted.sort_by_key(|e| e.start_date);

    let mut groups: Vec<MonthGroup> = Vec::new();

    for event in sorted {
        let month = YearMonth::containing(event.start_date);
        match groups.last_mut() {
            Some(group) if group.month == month => group.events.push(event),
            _ => groups.push(MonthGroup {
                month,
                label: month_label(month),
                events: vec![event],
            }),
        }
    }

    groups
}

/// "10:00 - 11:30", "10:00", or None for untimed events.
pub fn time_range_label(event: &Event) -> Option<String> {
    let start = event.start_time.as_deref()?;
    Some(match event.end_time.as_deref() {
        Some(end) => format!("{} - {}", start, end),
        None => start.to_string(),
    })
}
