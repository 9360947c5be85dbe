//! Terminal rendering for calpad views.
//!
//! Extension traits that add colored output to calpad-core types using
//! owo_colors.

use calpad_core::EventColor;
use calpad_core::date_range::{MonthGrid, WEEKDAY_LABELS, format_date_range, month_label};
use calpad_core::event::Event;
use calpad_core::grid::CellView;
use calpad_core::side_panel::{MonthGroup, time_range_label};
use chrono::Datelike;
use owo_colors::OwoColorize;

/// Width of one day column, excluding the separator
const CELL_WIDTH: usize = 15;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let mut lines = vec![paint(self.color, &self.title).bold().to_string()];

        let mut when = format_date_range(self.start_date, self.end_date);
        if let Some(times) = time_range_label(self) {
            when = format!("{}  {}", when, times);
        }
        lines.push(format!("   {}", when));

        if let Some(description) = &self.description {
            lines.push(format!("   {}", description.dimmed()));
        }
        lines.push(format!("   {} {}", "id:".dimmed(), self.id.dimmed()));

        lines.join("\n")
    }
}

/// Color text with the terminal equivalent of a palette entry.
pub fn paint(color: EventColor, text: &str) -> String {
    match color {
        EventColor::Blue => text.blue().to_string(),
        EventColor::Red => text.red().to_string(),
        EventColor::Green => text.green().to_string(),
        EventColor::Purple => text.magenta().to_string(),
        EventColor::Orange => text.yellow().to_string(),
        EventColor::Gray => text.bright_black().to_string(),
        EventColor::Pink => text.bright_magenta().to_string(),
        EventColor::Indigo => text.bright_blue().to_string(),
    }
}

/// Pad or truncate to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        return format!("{}{}", text, " ".repeat(width - count));
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Render the month grid with every placed event.
pub fn render_month(grid: &MonthGrid, cells: &[CellView<'_>]) -> String {
    let mut lines = vec![month_label(grid.month).bold().to_string(), String::new()];

    let header: Vec<String> = WEEKDAY_LABELS
        .iter()
        .map(|d| fit(d, CELL_WIDTH).dimmed().to_string())
        .collect();
    lines.push(header.join(" "));

    for week in cells.chunks(WEEKDAY_LABELS.len()) {
        let days: Vec<String> = week
            .iter()
            .map(|view| {
                let number = fit(&view.cell.date.day().to_string(), CELL_WIDTH);
                if view.cell.is_today {
                    number.reversed().bold().to_string()
                } else if !view.cell.is_current_month {
                    number.dimmed().to_string()
                } else {
                    number
                }
            })
            .collect();
        lines.push(days.join(" "));

        let depth = week.iter().map(|v| v.events.len()).max().unwrap_or(0);
        for slot in 0..depth {
            let row: Vec<String> = week
                .iter()
                .map(|view| match view.events.get(slot) {
                    Some(placed) => paint(
                        placed.event.color,
                        &fit(&placed.label.to_string(), CELL_WIDTH),
                    ),
                    None => " ".repeat(CELL_WIDTH),
                })
                .collect();
            lines.push(row.join(" "));
        }

        lines.push(String::new());
    }

    lines.join("\n")
}

/// Render the month-grouped event list.
pub fn render_side_panel(groups: &[MonthGroup<'_>], read_only: bool) -> String {
    if groups.is_empty() {
        let mut lines = vec!["No events scheduled yet.".dimmed().to_string()];
        if !read_only {
            lines.push(
                "Try adding one with `calpad new` or ask the AI with `calpad ask`."
                    .dimmed()
                    .to_string(),
            );
        }
        return lines.join("\n");
    }

    let mut lines = Vec::new();
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(format!("● {}", group.label.to_uppercase()).bold().to_string());
        for event in &group.events {
            lines.push(
                event
                    .render()
                    .lines()
                    .map(|l| format!("  {}", l))
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
        }
    }

    lines.join("\n")
}
