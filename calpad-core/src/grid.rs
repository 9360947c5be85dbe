//! Placement of events onto a month grid.

use chrono::NaiveDate;
use std::cmp::Ordering;
use std::fmt;

use crate::date_range::{DateCell, MonthGrid};
use crate::event::Event;

/// Where a cell falls within a multi-day event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Start,
    End,
    Continuation,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Segment::Start => write!(f, "(Start)"),
            Segment::End => write!(f, "(End)"),
            Segment::Continuation => write!(f, "(Cont.)"),
        }
    }
}

/// What a cell shows for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventLabel<'a> {
    /// Start time, only on the start cell or for single-day events
    pub time: Option<&'a str>,
    pub title: &'a str,
    /// None for single-day events
    pub segment: Option<Segment>,
}

impl<'a> EventLabel<'a> {
    pub fn for_cell(event: &'a Event, date: NaiveDate) -> Self {
        let is_start = event.is_start_cell(date);
        let multi_day = event.is_multi_day();

        let time = if is_start || !multi_day {
            event.start_time.as_deref()
        } else {
            None
        };

        let segment = multi_day.then(|| {
            if is_start {
                Segment::Start
            } else if event.is_end_cell(date) {
                Segment::End
            } else {
                Segment::Continuation
            }
        });

        EventLabel {
            time,
            title: &event.title,
            segment,
        }
    }
}

impl fmt::Display for EventLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(time) = self.time {
            write!(f, "{} ", time)?;
        }
        write!(f, "{}", self.title)?;
        if let Some(segment) = self.segment {
            write!(f, " {}", segment)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PlacedEvent<'a> {
    pub event: &'a Event,
    pub label: EventLabel<'a>,
}

/// A grid cell together with the events covering its date.
#[derive(Debug, Clone)]
pub struct CellView<'a> {
    pub cell: DateCell,
    pub events: Vec<PlacedEvent<'a>>,
}

/// Map `events` onto every cell of `grid`.
///
/// Events in a cell are ordered by start date, then start time (untimed
/// first), then title. Full ties keep the order of `events`.
pub fn render<'a>(grid: &MonthGrid, events: &'a [Event]) -> Vec<CellView<'a>> {
    let mut ordered: Vec<&Event> = events.iter().collect();
    ordered.sort_by(|a, b| cell_order(a, b));

    grid.cells
        .iter()
        .map(|cell| CellView {
            cell: *cell,
            events: ordered
                .iter()
                .copied()
                .filter(|event| event.covers(cell.date))
                .map(|event| PlacedEvent {
                    event,
                    label: EventLabel::for_cell(event, cell.date),
                })
                .collect(),
        })
        .collect()
}

fn cell_order(a: &Event, b: &Event) -> Ordering {
    a.start_date
        .cmp(&b.start_date)
        // None sorts before Some, so all-day style events lead
        .then_with(|| a.start_time.cmp(&b.start_time))
        .then_with(|| a.title.cmp(&b.title))
}
